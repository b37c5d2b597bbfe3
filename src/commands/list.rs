//! List the entries of a collection

use anyhow::Result;

use crate::content::ContentReader;
use crate::schema::Kind;
use crate::Site;

/// List a collection's slugs with their titles
pub async fn run(site: &Site, kind: &str) -> Result<()> {
    let kind: Kind = kind.parse()?;
    if kind.is_singleton() {
        anyhow::bail!(
            "{} is a singleton. Available: partners, blogs, authors, services, projects",
            kind
        );
    }

    let store = site.store();
    let slugs = store.list_slugs(kind).await?;
    println!("{} ({}):", kind.label(), slugs.len());

    let field = kind.slug_field().unwrap_or("title");
    for slug in slugs {
        match store.read_raw(kind, &slug).await {
            Ok(Some(doc)) => {
                let title = doc.get(field).and_then(|v| v.as_str()).unwrap_or("(untitled)");
                println!("  {} - {}", slug, title);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to read {} `{}`: {}", kind, slug, e);
                println!("  {} - (unreadable)", slug);
            }
        }
    }

    Ok(())
}
