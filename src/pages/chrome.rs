//! Header and footer shared by every page

use serde::Serialize;

use super::Pages;
use crate::content::models::{Partner, Settings};
use crate::content::{resolve_settings, ContentReader, ResolvedSettings};
use crate::error::Result;
use crate::helpers::url_for;
use crate::resolve::PartnerSummary;

const NAVIGATION: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About Us", "/about"),
    ("Projects", "/project"),
    ("Blogs", "/blog"),
    ("Contact", "/contact"),
];

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct HeaderData {
    pub site_name: String,
    pub logo: String,
    pub navigation: Vec<NavLink>,
    pub primary_cta: NavLink,
}

#[derive(Debug, Serialize)]
pub struct FooterData {
    #[serde(flatten)]
    pub settings: ResolvedSettings,
    pub partners: Vec<PartnerSummary>,
}

#[derive(Debug, Serialize)]
pub struct SiteChrome {
    pub header: HeaderData,
    pub footer: FooterData,
}

impl<R: ContentReader> Pages<'_, R> {
    /// The settings singleton with defaults applied
    pub async fn settings(&self) -> Result<ResolvedSettings> {
        let raw = self.reader.read_singleton::<Settings>().await?;
        if raw.is_none() {
            tracing::debug!("No settings singleton, using defaults");
        }
        Ok(resolve_settings(raw))
    }

    pub async fn site_chrome(&self) -> Result<SiteChrome> {
        let (settings, partners) =
            futures::try_join!(self.settings(), self.reader.list_all::<Partner>())?;

        let partners = partners
            .iter()
            .filter(|p| p.entry.is_active)
            .take(self.config.listing.footer_partners)
            .map(PartnerSummary::from)
            .collect();

        let link = |name: &str, href: &str| NavLink {
            name: name.to_string(),
            href: url_for(self.config, href),
        };

        Ok(SiteChrome {
            header: HeaderData {
                site_name: settings.site_name.clone(),
                logo: settings.logo.clone(),
                navigation: NAVIGATION.iter().map(|&(n, h)| link(n, h)).collect(),
                primary_cta: link("Contact Us", "/contact"),
            },
            footer: FooterData {
                settings,
                partners,
            },
        })
    }
}
