//! Relationship resolution - slug references to the entries they name
//!
//! Resolution is total: placeholders, dangling slugs and unreadable entries
//! all resolve to "absent" and are dropped. List results keep the authored
//! order and are never deduplicated.

mod summary;

use futures::future::join_all;

use crate::content::{Collection, ContentReader, Entry};
use crate::schema::Reference;

pub use summary::{AuthorSummary, PartnerSummary, ServiceSummary};

/// Resolve a single optional relationship value
pub async fn resolve_one<C, R>(reader: &R, slug: Option<&str>) -> Option<Entry<C>>
where
    C: Collection,
    R: ContentReader,
{
    let reference = Reference::new(C::KIND, slug)?;
    fetch(reader, &reference).await
}

/// Resolve a relationship list.
///
/// All reads are issued concurrently and joined; a missing or failing read
/// never affects its siblings. The result is never longer than the input.
pub async fn resolve_many<C, R, I, S>(reader: &R, slots: I) -> Vec<Entry<C>>
where
    C: Collection,
    R: ContentReader,
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let references = Reference::many(C::KIND, slots);
    let reads = references.iter().map(|r| fetch::<C, R>(reader, r));
    join_all(reads).await.into_iter().flatten().collect()
}

/// Resolve relationships nested in list items, keeping each item alongside
/// the entry it points at.
///
/// Items whose reference is a placeholder or does not resolve are dropped.
pub async fn resolve_linked<C, R, T, F>(reader: &R, items: Vec<T>, slug_of: F) -> Vec<(T, Entry<C>)>
where
    C: Collection,
    R: ContentReader,
    F: Fn(&T) -> Option<&str>,
{
    let references: Vec<Option<Reference>> = items
        .iter()
        .map(|item| Reference::new(C::KIND, slug_of(item)))
        .collect();

    let reads = references.iter().map(|reference| async move {
        match reference {
            Some(r) => fetch::<C, R>(reader, r).await,
            None => None,
        }
    });
    let resolved = join_all(reads).await;

    items
        .into_iter()
        .zip(resolved)
        .filter_map(|(item, entry)| entry.map(|e| (item, e)))
        .collect()
}

async fn fetch<C, R>(reader: &R, reference: &Reference) -> Option<Entry<C>>
where
    C: Collection,
    R: ContentReader,
{
    match reader.read_one::<C>(&reference.slug).await {
        Ok(Some(entry)) => Some(Entry {
            slug: reference.slug.clone(),
            entry,
        }),
        Ok(None) => {
            tracing::debug!("Dangling reference {}", reference);
            None
        }
        Err(e) => {
            tracing::warn!("Failed to resolve {}: {}", reference, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::{Author, LinkedPartner, Partner};
    use crate::content::MemoryStore;
    use crate::schema::Kind;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_yaml(Kind::Partner, "a", "name: A\n").unwrap();
        store.insert_yaml(Kind::Partner, "b", "name: B\n").unwrap();
        store
            .insert_yaml(Kind::Partner, "broken", "name: [x]\n")
            .unwrap();
        store
            .insert_yaml(Kind::Author, "jane-doe", "full_name: Jane Doe\nbio: Forester\n")
            .unwrap();
        store
    }

    fn names(entries: &[Entry<Partner>]) -> Vec<&str> {
        entries.iter().map(|e| e.entry.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_resolve_one() {
        let store = store();
        let jane = resolve_one::<Author, _>(&store, Some("jane-doe")).await.unwrap();
        assert_eq!(jane.slug, "jane-doe");
        assert_eq!(jane.entry.bio.as_deref(), Some("Forester"));

        assert!(resolve_one::<Author, _>(&store, Some("nobody")).await.is_none());
        assert!(resolve_one::<Author, _>(&store, Some("")).await.is_none());
        assert!(resolve_one::<Author, _>(&store, None).await.is_none());
        assert!(resolve_one::<Author, _>(&store, Some(" jane-doe ")).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_many_preserves_order() {
        let store = store();
        let resolved = resolve_many::<Partner, _, _, _>(&store, [Some("b"), Some("a")]).await;
        assert_eq!(names(&resolved), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_resolve_many_is_total() {
        let store = store();
        let slots = vec![
            None,
            Some("ghost"),
            Some(""),
            Some("a"),
            Some("broken"),
            Some("a"),
            Some("../b"),
        ];
        let resolved = resolve_many::<Partner, _, _, _>(&store, slots.clone()).await;
        assert!(resolved.len() <= slots.len());
        assert_eq!(names(&resolved), vec!["A", "A"]);

        let empty: Vec<Option<&str>> = Vec::new();
        assert!(resolve_many::<Partner, _, _, _>(&store, empty).await.is_empty());

        let dangling = resolve_many::<Partner, _, _, _>(&store, [Some("x"), Some("y")]).await;
        assert!(dangling.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_linked_keeps_item_data() {
        let store = store();
        let links = vec![
            LinkedPartner {
                partner: Some("b".to_string()),
                role: Some("Funding".to_string()),
            },
            LinkedPartner {
                partner: None,
                role: Some("Orphan".to_string()),
            },
            LinkedPartner {
                partner: Some("a".to_string()),
                role: None,
            },
        ];

        let resolved =
            resolve_linked::<Partner, _, _, _>(&store, links, |l| l.partner.as_deref()).await;
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].0.role.as_deref(), Some("Funding"));
        assert_eq!(resolved[0].1.entry.name, "B");
        assert_eq!(resolved[1].1.slug, "a");
    }
}
