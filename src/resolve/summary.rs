//! Reduced shapes of resolved entries, carrying only what views display

use serde::Serialize;

use crate::content::models::{Author, Partner, Program};
use crate::content::Entry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerSummary {
    pub slug: String,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    /// Role of the partner in the linking context, e.g. on a project
    pub role: Option<String>,
}

impl PartnerSummary {
    pub fn with_role(mut self, role: Option<String>) -> Self {
        self.role = role.filter(|r| !r.is_empty()).or(self.role);
        self
    }
}

impl From<&Entry<Partner>> for PartnerSummary {
    fn from(e: &Entry<Partner>) -> Self {
        Self {
            slug: e.slug.clone(),
            name: e.entry.name.clone(),
            logo: e.entry.logo.clone(),
            website: e.entry.website.clone(),
            role: e.entry.role.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    pub slug: String,
    pub full_name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl From<&Entry<Author>> for AuthorSummary {
    fn from(e: &Entry<Author>) -> Self {
        Self {
            slug: e.slug.clone(),
            full_name: e.entry.full_name.clone(),
            bio: e.entry.bio.clone(),
            avatar: e.entry.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceSummary {
    pub slug: String,
    pub title: String,
    pub short_description: Option<String>,
    pub cover_image: Option<String>,
    pub icon: Option<String>,
}

impl From<&Entry<Program>> for ServiceSummary {
    fn from(e: &Entry<Program>) -> Self {
        Self {
            slug: e.slug.clone(),
            title: e.entry.title.clone(),
            short_description: e.entry.short_description.clone(),
            cover_image: e.entry.cover_image.clone(),
            icon: e.entry.icon.clone(),
        }
    }
}
