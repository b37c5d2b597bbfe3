//! In-memory content store

use indexmap::IndexMap;
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::PathBuf;

use super::reader::{is_valid_slug, ContentReader};
use crate::error::{ContentError, Result};
use crate::schema::Kind;

/// Content held in memory, keyed by kind and slug.
///
/// Satisfies the same contract as the file store; handy for previews and
/// for exercising page logic without a content checkout.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<Kind, IndexMap<String, Value>>,
    singletons: HashMap<Kind, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a collection entry
    pub fn insert(&mut self, kind: Kind, slug: &str, doc: Value) {
        self.collections
            .entry(kind)
            .or_default()
            .insert(slug.to_string(), doc);
    }

    /// Insert a collection entry from YAML source
    pub fn insert_yaml(&mut self, kind: Kind, slug: &str, yaml: &str) -> Result<()> {
        let doc = parse(yaml, &format!("{}/{}", kind.dir(), slug))?;
        self.insert(kind, slug, doc);
        Ok(())
    }

    /// Set a singleton from YAML source
    pub fn set_singleton_yaml(&mut self, kind: Kind, yaml: &str) -> Result<()> {
        let doc = parse(yaml, kind.dir())?;
        self.singletons.insert(kind, doc);
        Ok(())
    }
}

fn parse(yaml: &str, name: &str) -> Result<Value> {
    serde_yaml::from_str(yaml).map_err(|source| ContentError::Yaml {
        path: PathBuf::from(format!("memory:{}", name)),
        source,
    })
}

impl ContentReader for MemoryStore {
    async fn read_raw(&self, kind: Kind, slug: &str) -> Result<Option<Value>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }
        Ok(self
            .collections
            .get(&kind)
            .and_then(|entries| entries.get(slug))
            .cloned())
    }

    async fn list_slugs(&self, kind: Kind) -> Result<Vec<String>> {
        let mut slugs: Vec<String> = self
            .collections
            .get(&kind)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        slugs.sort();
        Ok(slugs)
    }

    async fn read_singleton_raw(&self, kind: Kind) -> Result<Option<Value>> {
        Ok(self.singletons.get(&kind).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::{Author, Settings};

    #[tokio::test]
    async fn test_missing_reads_as_none() {
        let mut store = MemoryStore::new();
        store
            .insert_yaml(Kind::Author, "jane-doe", "full_name: Jane Doe\n")
            .unwrap();

        let slugs = store.list_slugs(Kind::Author).await.unwrap();
        assert_eq!(slugs, vec!["jane-doe"]);

        let jane = store.read_one::<Author>("jane-doe").await.unwrap().unwrap();
        assert_eq!(jane.full_name, "Jane Doe");

        assert!(store.read_one::<Author>("john").await.unwrap().is_none());
        assert!(store.read_one::<Author>("").await.unwrap().is_none());
        assert!(store.read_singleton::<Settings>().await.unwrap().is_none());
        assert!(store.list_slugs(Kind::Blog).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_slug_is_never_readable() {
        let mut store = MemoryStore::new();
        for slug in ["a", "b", "c"] {
            store
                .insert_yaml(Kind::Author, slug, &format!("full_name: {}\n", slug))
                .unwrap();
        }
        let known = store.list_slugs(Kind::Author).await.unwrap();
        for probe in ["a", "b", "c", "d", "A", "a ", "../a"] {
            let found = store.read_one::<Author>(probe).await.unwrap().is_some();
            assert_eq!(found, known.iter().any(|s| s == probe), "{}", probe);
        }
    }

    #[tokio::test]
    async fn test_list_all_skips_broken_entries() {
        let mut store = MemoryStore::new();
        store
            .insert_yaml(Kind::Author, "ok", "full_name: Ok Person\n")
            .unwrap();
        store
            .insert_yaml(Kind::Author, "broken", "full_name: [not, text]\n")
            .unwrap();

        let all = store.list_all::<Author>().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].slug, "ok");
        assert!(store.read_one::<Author>("broken").await.is_err());
    }
}
