//! Validated slug references

use serde::Serialize;
use std::fmt;

use super::Kind;

/// A relationship value: a slug that should name an entry of `kind`.
///
/// Construction only rejects placeholders (absent or blank values). Whether
/// the slug actually exists is checked when the reference is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    pub kind: Kind,
    pub slug: String,
}

impl Reference {
    /// Build a reference from a raw relationship value
    pub fn new(kind: Kind, raw: Option<&str>) -> Option<Self> {
        let slug = raw?;
        if slug.trim().is_empty() {
            return None;
        }
        Some(Self {
            kind,
            slug: slug.to_string(),
        })
    }

    /// References for a relationship list, placeholders dropped, order kept
    pub fn many<I, S>(kind: Kind, slots: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        slots
            .into_iter()
            .filter_map(|slot| Self::new(kind, slot.as_ref().map(|s| s.as_ref())))
            .collect()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.slug)
    }
}
