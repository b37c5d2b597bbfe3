//! Blog index and article pages

use futures::future::join_all;
use serde::Serialize;

use super::{non_empty, Pages};
use crate::content::models::{Author, Blog, BlogStatus};
use crate::content::{ContentReader, Entry};
use crate::error::Result;
use crate::helpers::display_date;
use crate::query::{facet_values, Listable};
use crate::resolve::{resolve_one, AuthorSummary};

/// A blog post as shown on the index
#[derive(Debug, Clone, Serialize)]
pub struct BlogCard {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub status: BlogStatus,
    pub author: Option<AuthorSummary>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub reading_time_minutes: Option<f64>,
    /// Publication date, falling back to the creation date
    pub published_at: Option<String>,
    pub display_date: String,
}

impl BlogCard {
    fn new(entry: &Entry<Blog>, author: Option<AuthorSummary>) -> Self {
        let blog = &entry.entry;
        let published_at = non_empty(&blog.published_at).or_else(|| non_empty(&blog.date_created));
        Self {
            slug: entry.slug.clone(),
            title: blog.title.clone(),
            excerpt: non_empty(&blog.excerpt),
            status: blog.status,
            author,
            category: non_empty(&blog.category),
            tags: blog.tags.clone(),
            featured_image: non_empty(&blog.featured_image),
            reading_time_minutes: blog.reading_time_minutes,
            display_date: display_date(published_at.as_deref()),
            published_at,
        }
    }
}

impl Listable for BlogCard {
    const FILTERS: &'static [&'static str] = &["category"];

    fn search_texts(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.excerpt.as_deref())
            .collect()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "category" => self.category.as_deref(),
            _ => None,
        }
    }

    fn sort_date(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    fn reading_time(&self) -> Option<f64> {
        self.reading_time_minutes
    }

    /// Drafts and archived posts never reach the public listing
    fn is_visible(&self) -> bool {
        self.status == BlogStatus::Published
    }
}

#[derive(Debug, Serialize)]
pub struct BlogIndex {
    pub cards: Vec<BlogCard>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogDetail {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub author: Option<AuthorSummary>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub reading_time_minutes: Option<f64>,
    pub published_at: Option<String>,
    pub display_date: String,
    pub content_html: Option<String>,
    pub meta_title: String,
    pub meta_description: Option<String>,
}

impl<R: ContentReader> Pages<'_, R> {
    /// Every blog post as a card, authors resolved.
    ///
    /// Unpublished posts are included so the listing summary counts them;
    /// the query engine hides them.
    pub async fn blog_index(&self) -> Result<BlogIndex> {
        let entries = self.reader.list_all::<Blog>().await?;
        let cards = join_all(entries.iter().map(|entry| async move {
            let author = resolve_one::<Author, _>(self.reader, entry.entry.author.as_deref())
                .await
                .map(|a| AuthorSummary::from(&a));
            BlogCard::new(entry, author)
        }))
        .await;

        let categories = facet_values(&cards, "category");
        tracing::debug!("Built blog index with {} posts", cards.len());
        Ok(BlogIndex { cards, categories })
    }

    /// A published article; drafts read as missing
    pub async fn blog_detail(&self, slug: &str) -> Result<Option<BlogDetail>> {
        let Some(blog) = self.reader.read_one::<Blog>(slug).await? else {
            return Ok(None);
        };
        if !blog.is_published() {
            tracing::debug!("Blog `{}` is {}, not serving it", slug, blog.status.as_str());
            return Ok(None);
        }

        let author = resolve_one::<Author, _>(self.reader, blog.author.as_deref())
            .await
            .map(|a| AuthorSummary::from(&a));
        let entry = Entry {
            slug: slug.to_string(),
            entry: blog,
        };
        let card = BlogCard::new(&entry, author);
        let blog = entry.entry;

        Ok(Some(BlogDetail {
            meta_title: non_empty(&blog.meta_title).unwrap_or_else(|| card.title.clone()),
            meta_description: non_empty(&blog.meta_description).or_else(|| card.excerpt.clone()),
            content_html: self.markdown.render_field(blog.content.as_deref()),
            slug: card.slug,
            title: card.title,
            excerpt: card.excerpt,
            author: card.author,
            category: card.category,
            tags: card.tags,
            featured_image: card.featured_image,
            reading_time_minutes: card.reading_time_minutes,
            published_at: card.published_at,
            display_date: card.display_date,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::MemoryStore;
    use crate::query::{query, ListQuery, SortKey};
    use crate::schema::Kind;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .insert_yaml(Kind::Author, "jane-doe", "full_name: Jane Doe\nbio: Forester\n")
            .unwrap();
        store
            .insert_yaml(
                Kind::Blog,
                "forest-growth",
                r#"
title: Forest Growth
status: published
author: jane-doe
category: Stories
tags: [Agroforestry]
date_created: "2024-01-10"
reading_time_minutes: 6
content: "Seedlings *thrive*."
"#,
            )
            .unwrap();
        store
            .insert_yaml(
                Kind::Blog,
                "water",
                "title: Water\nstatus: published\nauthor: ghost\ncategory: News\npublished_at: \"2024-03-02\"\n",
            )
            .unwrap();
        store
            .insert_yaml(
                Kind::Blog,
                "forest-draft",
                "title: Forest Draft\ncategory: Stories\npublished_at: \"2024-06-01\"\n",
            )
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_blog_index() {
        let store = store();
        let config = SiteConfig::default();
        let pages = Pages::new(&store, &config);

        let index = pages.blog_index().await.unwrap();
        assert_eq!(index.cards.len(), 3);
        assert_eq!(index.categories, vec!["Stories", "News"]);

        let growth = index.cards.iter().find(|c| c.slug == "forest-growth").unwrap();
        assert_eq!(growth.author.as_ref().unwrap().full_name, "Jane Doe");
        assert_eq!(growth.published_at.as_deref(), Some("2024-01-10"));
        assert_eq!(growth.display_date, "January 10, 2024");

        let water = index.cards.iter().find(|c| c.slug == "water").unwrap();
        assert!(water.author.is_none());

        let listing = query(
            &index.cards,
            &ListQuery::new().search("FOREST").sort(SortKey::Newest),
        );
        let slugs: Vec<&str> = listing.items.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["forest-growth"]);
        assert_eq!(listing.summary(), "1 of 3");

        let newest = query(&index.cards, &ListQuery::new().sort(SortKey::Newest));
        let slugs: Vec<&str> = newest.items.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["water", "forest-growth"]);
    }

    #[tokio::test]
    async fn test_blog_detail() {
        let store = store();
        let config = SiteConfig::default();
        let pages = Pages::new(&store, &config);

        let detail = pages.blog_detail("forest-growth").await.unwrap().unwrap();
        assert_eq!(detail.meta_title, "Forest Growth");
        assert_eq!(
            detail.content_html.as_deref(),
            Some("<p>Seedlings <em>thrive</em>.</p>\n")
        );
        assert_eq!(detail.author.unwrap().bio.as_deref(), Some("Forester"));

        assert!(pages.blog_detail("forest-draft").await.unwrap().is_none());
        assert!(pages.blog_detail("missing").await.unwrap().is_none());
    }
}
