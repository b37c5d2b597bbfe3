//! Typed content entries
//!
//! Every model deserializes leniently: missing fields fall back to the
//! authoring tool's defaults, explicit `null`s are treated as absent and
//! unknown keys are ignored. Relationship lists keep `None` slots so callers
//! see exactly what was authored.

use serde::{Deserialize, Deserializer, Serialize};

use super::reader::{Collection, Singleton};
use crate::schema::Kind;

/// Treat an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<Option<String>>()? {
                vec.extend(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// A partner or donor organisation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    pub name: String,
    pub legal_name: Option<String>,
    pub short_description: Option<String>,
    pub role: Option<String>,
    pub scope: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub logo: Option<String>,
    pub cover_image: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
}

impl Default for Partner {
    fn default() -> Self {
        Self {
            name: String::new(),
            legal_name: None,
            short_description: None,
            role: None,
            scope: None,
            website: None,
            twitter: None,
            facebook: None,
            instagram: None,
            linkedin: None,
            logo: None,
            cover_image: None,
            country: None,
            address: None,
            is_active: true,
        }
    }
}

impl Collection for Partner {
    const KIND: Kind = Kind::Partner;
}

/// Publication workflow state of a blog post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl BlogStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BlogStatus::Draft => "draft",
            BlogStatus::Published => "published",
            BlogStatus::Archived => "archived",
        }
    }
}

/// A blog article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub title: String,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub status: BlogStatus,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub published_at: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub reading_time_minutes: Option<f64>,
    /// Markdown body (read from `content.mdoc`)
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl Blog {
    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }
}

impl Collection for Blog {
    const KIND: Kind = Kind::Blog;
}

/// A blog author, also used as project contact person
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub full_name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl Collection for Author {
    const KIND: Kind = Kind::Author;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub alt_text: Option<String>,
}

/// A program (stored under `services`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub title: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub icon: Option<String>,
    pub beneficiaries: Option<String>,
    pub goals: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub gallery: Vec<GalleryImage>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
}

impl Collection for Program {
    const KIND: Kind = Kind::Program;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    Ongoing,
    Completed,
    #[default]
    Draft,
    Archived,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planned => "planned",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Archived => "archived",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    #[default]
    Planned,
    Ongoing,
    Completed,
}

/// A free-form impact figure as authored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricEntry {
    pub label: Option<String>,
    pub value: Option<f64>,
}

impl MetricEntry {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: Some(label.to_string()),
            value: Some(value),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedPartner {
    pub partner: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePhase {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub name: Option<String>,
    pub file: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<f64>,
}

/// A restoration project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub summary: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub status: ProjectStatus,
    pub featured: bool,
    pub location: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub executive_summary: Option<String>,
    pub background: Option<String>,
    pub objectives: Option<String>,
    pub methodology: Option<String>,
    pub key_findings: Option<String>,
    pub conclusions: Option<String>,
    pub recommendations: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub impact_metrics: Vec<MetricEntry>,
    #[serde(deserialize_with = "nullable")]
    pub linked_partners: Vec<Option<LinkedPartner>>,
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub activities: Vec<Activity>,
    #[serde(deserialize_with = "nullable")]
    pub timeline: Vec<TimelinePhase>,
    pub hero_image: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub gallery: Vec<GalleryImage>,
    #[serde(deserialize_with = "nullable")]
    pub documents: Vec<Document>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: None,
            status: ProjectStatus::Draft,
            featured: false,
            location: None,
            country: Some("Rwanda".to_string()),
            region: None,
            district: None,
            start_date: None,
            end_date: None,
            executive_summary: None,
            background: None,
            objectives: None,
            methodology: None,
            key_findings: None,
            conclusions: None,
            recommendations: None,
            impact_metrics: Vec::new(),
            linked_partners: Vec::new(),
            contact_person: None,
            activities: Vec::new(),
            timeline: Vec::new(),
            hero_image: None,
            gallery: Vec::new(),
            documents: Vec::new(),
        }
    }
}

impl Collection for Project {
    const KIND: Kind = Kind::Project;
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: Option<String>,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            platform: "facebook".to_string(),
            url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub organization_name: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub contact: Option<Contact>,
    #[serde(deserialize_with = "nullable")]
    pub social_links: Vec<SocialLink>,
    pub copyright: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
}

/// Website settings as authored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub site_name: Option<String>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub footer: Option<Footer>,
    pub seo: Option<Seo>,
}

impl Singleton for Settings {
    const KIND: Kind = Kind::Settings;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub text: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: Option<String>,
    pub label: Option<String>,
}

/// Icon + title + description card used by several sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueCard {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeHero {
    pub title: Option<String>,
    pub highlighted_phrase: Option<String>,
    pub subtitle: Option<String>,
    pub background_image: Option<String>,
    #[serde(rename = "primaryCTA", deserialize_with = "nullable")]
    pub primary_cta: CallToAction,
    #[serde(rename = "secondaryCTA", deserialize_with = "nullable")]
    pub secondary_cta: CallToAction,
    #[serde(deserialize_with = "nullable")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mission {
    pub title: Option<String>,
    pub description: Option<String>,
    pub founded_year: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhoWeAre {
    pub title: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub paragraphs: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub key_values: Vec<ValueCard>,
    #[serde(deserialize_with = "nullable")]
    pub mission: Mission,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsIntro {
    pub title: Option<String>,
    pub intro: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub featured_projects: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaPanel {
    pub heading: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "primaryCTA", deserialize_with = "nullable")]
    pub primary_cta: CallToAction,
    #[serde(rename = "secondaryCTA", deserialize_with = "nullable")]
    pub secondary_cta: CallToAction,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesIntro {
    pub title: Option<String>,
    pub intro: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub featured_services: Vec<Option<String>>,
    #[serde(rename = "ctaPanel", deserialize_with = "nullable")]
    pub cta_panel: CtaPanel,
}

/// Homepage content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeContent {
    #[serde(deserialize_with = "nullable")]
    pub hero: HomeHero,
    #[serde(deserialize_with = "nullable")]
    pub who_we_are: WhoWeAre,
    #[serde(deserialize_with = "nullable")]
    pub projects_intro: ProjectsIntro,
    #[serde(deserialize_with = "nullable")]
    pub services_intro: ServicesIntro,
}

impl Singleton for HomeContent {
    const KIND: Kind = Kind::Home;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeading {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    #[serde(deserialize_with = "nullable")]
    pub paragraphs: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuesSection {
    pub title: Option<String>,
    pub intro: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub values: Vec<ValueCard>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSection {
    pub title: Option<String>,
    pub intro: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<TeamMember>,
}

/// Display-only figure on the about page (value is free text, e.g. "1,000+")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutMetric {
    pub icon: Option<String>,
    pub value: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactSection {
    pub title: Option<String>,
    pub intro: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub metrics: Vec<AboutMetric>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartnersSection {
    pub title: Option<String>,
    pub intro: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub partner_list: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnualReport {
    pub year: Option<String>,
    pub file: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalCta {
    pub heading: Option<String>,
    pub body: Option<String>,
}

/// About page content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    #[serde(deserialize_with = "nullable")]
    pub hero: SectionHeading,
    #[serde(deserialize_with = "nullable")]
    pub story: Story,
    #[serde(deserialize_with = "nullable")]
    pub values: ValuesSection,
    #[serde(deserialize_with = "nullable")]
    pub team: TeamSection,
    #[serde(rename = "impactMetrics", deserialize_with = "nullable")]
    pub impact_metrics: ImpactSection,
    #[serde(deserialize_with = "nullable")]
    pub partners: PartnersSection,
    #[serde(deserialize_with = "nullable")]
    pub annual_reports: Vec<AnnualReport>,
    #[serde(rename = "finalCTA", deserialize_with = "nullable")]
    pub final_cta: FinalCta,
}

impl Singleton for AboutContent {
    const KIND: Kind = Kind::About;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let project: Project = serde_yaml::from_str("title: Bugesera\n").unwrap();
        assert_eq!(project.status, ProjectStatus::Draft);
        assert_eq!(project.country.as_deref(), Some("Rwanda"));
        assert!(!project.featured);

        let blog: Blog = serde_yaml::from_str("title: Hello\n").unwrap();
        assert_eq!(blog.status, BlogStatus::Draft);
        assert!(!blog.is_published());

        let partner: Partner = serde_yaml::from_str("name: WWF\n").unwrap();
        assert!(partner.is_active);
    }

    #[test]
    fn test_nulls_are_absent() {
        let yaml = r#"
title: Bugesera
status: null
impact_metrics: null
linked_partners:
  - partner: wwf
    role: Funding
  - null
  - partner: null
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.status, ProjectStatus::Draft);
        assert!(project.impact_metrics.is_empty());
        assert_eq!(project.linked_partners.len(), 3);
        assert!(project.linked_partners[1].is_none());
        assert!(project.linked_partners[2].as_ref().unwrap().partner.is_none());
    }

    #[test]
    fn test_single_string_tags() {
        let blog: Blog = serde_yaml::from_str("title: Hello\ntags: Reforestation\n").unwrap();
        assert_eq!(blog.tags, vec!["Reforestation"]);

        let blog: Blog =
            serde_yaml::from_str("title: Hello\ntags:\n  - a\n  - null\n  - b\n").unwrap();
        assert_eq!(blog.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_camel_case_singletons() {
        let yaml = r#"
siteName: Forest4Life
footer:
  organizationName: Forest4Life Rwanda
  socialLinks:
    - url: https://facebook.com/f4l
    - platform: linkedin
      url: https://linkedin.com/f4l
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.site_name.as_deref(), Some("Forest4Life"));
        let footer = settings.footer.unwrap();
        assert_eq!(footer.organization_name.as_deref(), Some("Forest4Life Rwanda"));
        assert_eq!(footer.social_links[0].platform, "facebook");
        assert_eq!(footer.social_links[1].platform, "linkedin");

        let home: HomeContent = serde_yaml::from_str(
            "hero:\n  title: Restoring Rwanda\n  primaryCTA:\n    text: Donate\nprojectsIntro:\n  featured_projects: [a, null, b]\n",
        )
        .unwrap();
        assert_eq!(home.hero.primary_cta.text.as_deref(), Some("Donate"));
        assert_eq!(
            home.projects_intro.featured_projects,
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }
}
