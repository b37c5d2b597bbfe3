//! The read-only content contract

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Value;

use crate::error::{ContentError, Result};
use crate::schema::Kind;

/// A typed collection entry kind
pub trait Collection: DeserializeOwned + Clone + Send {
    const KIND: Kind;
}

/// A typed singleton kind
pub trait Singleton: DeserializeOwned + Send {
    const KIND: Kind;
}

/// An entry together with the slug it was read from
#[derive(Debug, Clone, Serialize)]
pub struct Entry<T> {
    pub slug: String,
    pub entry: T,
}

/// Whether a slug can name an entry at all.
///
/// Path separators and parent references never identify content, so such
/// slugs read as absent rather than escaping the content root.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.contains('/')
        && !slug.contains('\\')
        && !slug.contains("..")
        && !slug.starts_with('.')
}

/// Per-kind read access to authored content.
///
/// Absence is not an error: unknown slugs and missing singletons read as
/// `Ok(None)`. `Err` is reserved for storage faults (I/O, unparseable
/// files, entries that do not fit their model).
///
/// Implementors provide the raw operations; the typed operations are derived
/// from them.
#[allow(async_fn_in_trait)]
pub trait ContentReader: Sync {
    /// Raw document of one collection entry
    async fn read_raw(&self, kind: Kind, slug: &str) -> Result<Option<Value>>;

    /// Every slug of a collection. The order carries no meaning.
    async fn list_slugs(&self, kind: Kind) -> Result<Vec<String>>;

    /// Raw document of a singleton
    async fn read_singleton_raw(&self, kind: Kind) -> Result<Option<Value>>;

    /// Read one entry by slug
    async fn read_one<C: Collection>(&self, slug: &str) -> Result<Option<C>> {
        match self.read_raw(C::KIND, slug).await? {
            Some(raw) => decode(C::KIND, slug, raw).map(Some),
            None => Ok(None),
        }
    }

    /// Materialize every entry of a collection.
    ///
    /// Entries that cannot be read or decoded are skipped with a warning so
    /// one broken file does not take a listing page down.
    async fn list_all<C: Collection>(&self) -> Result<Vec<Entry<C>>> {
        let mut entries = Vec::new();
        for slug in self.list_slugs(C::KIND).await? {
            match self.read_one::<C>(&slug).await {
                Ok(Some(entry)) => entries.push(Entry { slug, entry }),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Skipping {} `{}`: {}", C::KIND, slug, e);
                }
            }
        }
        Ok(entries)
    }

    /// Read a singleton
    async fn read_singleton<S: Singleton>(&self) -> Result<Option<S>> {
        match self.read_singleton_raw(S::KIND).await? {
            Some(raw) => decode(S::KIND, "", raw).map(Some),
            None => Ok(None),
        }
    }
}

fn decode<T: DeserializeOwned>(kind: Kind, slug: &str, raw: Value) -> Result<T> {
    serde_yaml::from_value(raw).map_err(|source| ContentError::Decode {
        kind,
        slug: slug.to_string(),
        source,
    })
}
