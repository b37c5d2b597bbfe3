//! Site settings with the built-in fallbacks applied

use serde::Serialize;

use super::models::{Contact, Settings, SocialLink};

pub const DEFAULT_SITE_NAME: &str = "Forest4Life";
pub const DEFAULT_LOGO: &str = "/images/partners/toyota/logo.jpg";
pub const DEFAULT_DESCRIPTION: &str = "The Forest4Life Project is dedicated to restoring degraded land in Rwanda through reforestation, agroforestry, and sustainable land management practices.";
pub const DEFAULT_TAGS: [&str; 3] = ["Reforestation", "Community Training", "Youth Education"];
pub const DEFAULT_COPYRIGHT: &str = "© 2024 Forest4Life. All rights reserved.";
pub const DEFAULT_TAGLINE: &str = "Built with 💚 for a sustainable future";

/// Settings after defaults are merged in; every display field is present
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSettings {
    pub site_name: String,
    pub logo: String,
    pub favicon: Option<String>,
    pub organization_name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub contact: Contact,
    pub social_links: Vec<SocialLink>,
    pub copyright: String,
    pub tagline: String,
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            logo: DEFAULT_LOGO.to_string(),
            favicon: None,
            organization_name: DEFAULT_SITE_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            contact: Contact {
                address: Some("Kigali, Rwanda".to_string()),
                phone: Some("+250 XXX XXX XXX".to_string()),
                email: Some("info@forest4life.org".to_string()),
                whatsapp: None,
            },
            social_links: Vec::new(),
            copyright: DEFAULT_COPYRIGHT.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

/// Merge the settings singleton over the built-in defaults.
///
/// A missing singleton yields the full default record. When the singleton
/// exists, blank text fields fall back to their defaults while the footer
/// description, tags and contact block fall back to empty.
pub fn resolve_settings(raw: Option<Settings>) -> ResolvedSettings {
    let Some(settings) = raw else {
        return ResolvedSettings::default();
    };

    let footer = settings.footer.unwrap_or_default();
    ResolvedSettings {
        site_name: or_default(settings.site_name, DEFAULT_SITE_NAME),
        logo: or_default(settings.logo, DEFAULT_LOGO),
        favicon: settings.favicon.filter(|s| !s.is_empty()),
        organization_name: or_default(footer.organization_name, DEFAULT_SITE_NAME),
        description: footer.description.unwrap_or_default(),
        tags: footer.tags,
        contact: footer.contact.unwrap_or_default(),
        social_links: footer
            .social_links
            .into_iter()
            .filter(|link| link.url.as_deref().is_some_and(|u| !u.is_empty()))
            .collect(),
        copyright: or_default(footer.copyright, DEFAULT_COPYRIGHT),
        tagline: or_default(footer.tagline, DEFAULT_TAGLINE),
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_use_defaults() {
        let resolved = resolve_settings(None);
        assert_eq!(resolved.site_name, "Forest4Life");
        assert_eq!(resolved.logo, DEFAULT_LOGO);
        assert_eq!(resolved.description, DEFAULT_DESCRIPTION);
        assert_eq!(
            resolved.tags,
            vec!["Reforestation", "Community Training", "Youth Education"]
        );
        assert_eq!(resolved.contact.address.as_deref(), Some("Kigali, Rwanda"));
        assert_eq!(resolved.contact.email.as_deref(), Some("info@forest4life.org"));
        assert!(resolved.social_links.is_empty());
    }

    #[test]
    fn test_partial_settings() {
        let yaml = r#"
siteName: ""
footer:
  organizationName: Forest4Life Rwanda
  tagline: Growing together
  socialLinks:
    - platform: twitter
      url: https://twitter.com/f4l
    - platform: tiktok
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        let resolved = resolve_settings(Some(settings));

        assert_eq!(resolved.site_name, "Forest4Life");
        assert_eq!(resolved.organization_name, "Forest4Life Rwanda");
        assert_eq!(resolved.tagline, "Growing together");
        assert_eq!(resolved.copyright, DEFAULT_COPYRIGHT);
        assert_eq!(resolved.description, "");
        assert!(resolved.tags.is_empty());
        assert!(resolved.contact.address.is_none());
        assert_eq!(resolved.social_links.len(), 1);
        assert_eq!(resolved.social_links[0].platform, "twitter");
    }
}
