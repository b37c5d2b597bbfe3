//! Content schema - entity kinds, typed field descriptors and validation
//!
//! The descriptors mirror what the authoring tool writes to disk. They are
//! the wire contract between authored content and this crate: field names,
//! optionality, defaults and relationship targets all live here.

mod definitions;
mod fields;
mod reference;
mod validate;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContentError;

pub use definitions::schema_for;
pub use fields::{Field, FieldType, RelationshipField, Schema};
pub use reference::Reference;
pub use validate::{validate, Issue, Severity, Validation};

/// How a collection entry is laid out inside its directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    /// `<dir>/<slug>.yaml`
    Flat,
    /// `<dir>/<slug>/index.yaml`
    Nested,
}

/// A named entity type of the content schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Partner,
    Blog,
    Author,
    Program,
    Project,
    Settings,
    Home,
    About,
}

impl Kind {
    /// Collection kinds, in schema declaration order
    pub const COLLECTIONS: [Kind; 5] = [
        Kind::Partner,
        Kind::Blog,
        Kind::Author,
        Kind::Program,
        Kind::Project,
    ];

    /// Global singletons
    pub const SINGLETONS: [Kind; 3] = [Kind::Settings, Kind::Home, Kind::About];

    pub fn is_singleton(self) -> bool {
        matches!(self, Kind::Settings | Kind::Home | Kind::About)
    }

    /// Directory under the content root
    pub fn dir(self) -> &'static str {
        match self {
            Kind::Partner => "partners",
            Kind::Blog => "blogs",
            Kind::Author => "authors",
            Kind::Program => "services",
            Kind::Project => "projects",
            Kind::Settings => "settings",
            Kind::Home => "home",
            Kind::About => "about",
        }
    }

    /// The field a collection derives its slugs from
    pub fn slug_field(self) -> Option<&'static str> {
        match self {
            Kind::Partner => Some("name"),
            Kind::Blog | Kind::Program | Kind::Project => Some("title"),
            Kind::Author => Some("full_name"),
            Kind::Settings | Kind::Home | Kind::About => None,
        }
    }

    /// Preferred on-disk layout for entries of this kind
    pub fn layout(self) -> EntryLayout {
        match self {
            Kind::Partner | Kind::Project => EntryLayout::Flat,
            _ => EntryLayout::Nested,
        }
    }

    /// Human readable label shown by the authoring tool
    pub fn label(self) -> &'static str {
        match self {
            Kind::Partner => "Partners & Donors",
            Kind::Blog => "Blogs",
            Kind::Author => "Authors",
            Kind::Program => "Programs",
            Kind::Project => "Projects",
            Kind::Settings => "Website Settings",
            Kind::Home => "Homepage Content",
            Kind::About => "About Page Content",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Partner => "partner",
            Kind::Blog => "blog",
            Kind::Author => "author",
            Kind::Program => "program",
            Kind::Project => "project",
            Kind::Settings => "settings",
            Kind::Home => "home",
            Kind::About => "about",
        };
        f.write_str(name)
    }
}

impl FromStr for Kind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "partner" | "partners" => Ok(Kind::Partner),
            "blog" | "blogs" => Ok(Kind::Blog),
            "author" | "authors" => Ok(Kind::Author),
            "program" | "programs" | "service" | "services" => Ok(Kind::Program),
            "project" | "projects" => Ok(Kind::Project),
            "settings" => Ok(Kind::Settings),
            "home" => Ok(Kind::Home),
            "about" => Ok(Kind::About),
            _ => Err(ContentError::UnknownKind(s.to_string())),
        }
    }
}
