//! List query engine - search, filter and sort over materialized entries
//!
//! Queries are pure: the same items and query always give the same listing.
//! Filtering happens first (search, named filters, visibility), then sorting.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::helpers::parse_date;

/// Filter value that matches everything
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Latest date first
    Newest,
    /// Earliest date first
    Oldest,
    /// Shortest read first
    ReadingTime,
    /// Keep input order
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parse a sort key; anything unrecognized keeps input order
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            "reading-time" | "reading_time" => SortKey::ReadingTime,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::ReadingTime => "reading-time",
            SortKey::Unsorted => "unsorted",
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one listing request
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: String,
    /// Field name to required value, applied in insertion order
    pub filters: IndexMap<String, String>,
    pub sort: SortKey,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    pub fn filter(mut self, field: &str, value: &str) -> Self {
        self.filters.insert(field.to_string(), value.to_string());
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = key;
        self
    }

    /// Filters that actually narrow the listing
    fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .filter(|(_, v)| !v.is_empty() && *v != ALL)
    }
}

/// An item that can appear in a listing
pub trait Listable {
    /// Fields a filter may name; filters on anything else are ignored
    const FILTERS: &'static [&'static str];

    /// Text fields tested by search
    fn search_texts(&self) -> Vec<&str>;

    /// Tags, each tested independently by search
    fn tags(&self) -> &[String] {
        &[]
    }

    /// Value of a filterable field
    fn field_value(&self, field: &str) -> Option<&str>;

    /// Date used by the newest/oldest orderings
    fn sort_date(&self) -> Option<&str> {
        None
    }

    fn reading_time(&self) -> Option<f64> {
        None
    }

    /// Items failing this never appear, whatever the query
    fn is_visible(&self) -> bool {
        true
    }
}

/// Result of a query: a view over the input items
#[derive(Debug, Serialize)]
pub struct Listing<'a, T> {
    pub items: Vec<&'a T>,
    /// Size of the unfiltered input
    pub total: usize,
}

impl<T> Listing<'_, T> {
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// "N of M"
    pub fn summary(&self) -> String {
        format!("{} of {}", self.shown(), self.total)
    }
}

/// Run a query over a slice of items
pub fn query<'a, T: Listable>(items: &'a [T], q: &ListQuery) -> Listing<'a, T> {
    let needle = q.search.to_lowercase();
    let filters: Vec<(&str, &str)> = q
        .active_filters()
        .filter(|(field, _)| {
            let known = T::FILTERS.contains(field);
            if !known {
                tracing::debug!("Ignoring filter on unknown field `{}`", field);
            }
            known
        })
        .collect();

    let mut matched: Vec<&T> = items
        .iter()
        .filter(|item| item.is_visible())
        .filter(|item| matches_search(*item, &needle))
        .filter(|item| {
            filters
                .iter()
                .all(|(field, value)| item.field_value(field) == Some(*value))
        })
        .collect();

    // sort_by is stable, equal keys keep input order
    match q.sort {
        SortKey::Newest => matched.sort_by(|a, b| date_key(*b).cmp(&date_key(*a))),
        SortKey::Oldest => matched.sort_by(|a, b| date_key(*a).cmp(&date_key(*b))),
        SortKey::ReadingTime => matched.sort_by(|a, b| {
            let (a, b) = (a.reading_time().unwrap_or(0.0), b.reading_time().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }),
        SortKey::Unsorted => {}
    }

    Listing {
        items: matched,
        total: items.len(),
    }
}

/// Distinct non-empty values of a field, in first-seen order
pub fn facet_values<T: Listable>(items: &[T], field: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in items.iter().filter_map(|item| item.field_value(field)) {
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

fn matches_search<T: Listable>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.search_texts()
        .into_iter()
        .any(|text| text.to_lowercase().contains(needle))
        || item.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Missing or unparseable dates order as the earliest possible date
fn date_key<T: Listable>(item: &T) -> NaiveDate {
    item.sort_date()
        .and_then(parse_date)
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Post {
        title: &'static str,
        excerpt: Option<&'static str>,
        tags: Vec<String>,
        category: Option<&'static str>,
        published: bool,
        date: Option<&'static str>,
        minutes: Option<f64>,
    }

    impl Listable for Post {
        const FILTERS: &'static [&'static str] = &["category"];

        fn search_texts(&self) -> Vec<&str> {
            std::iter::once(self.title).chain(self.excerpt).collect()
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn field_value(&self, field: &str) -> Option<&str> {
            match field {
                "category" => self.category,
                _ => None,
            }
        }

        fn sort_date(&self) -> Option<&str> {
            self.date
        }

        fn reading_time(&self) -> Option<f64> {
            self.minutes
        }

        fn is_visible(&self) -> bool {
            self.published
        }
    }

    fn post(title: &'static str) -> Post {
        Post {
            title,
            published: true,
            ..Post::default()
        }
    }

    fn titles<'a>(listing: &Listing<'a, Post>) -> Vec<&'a str> {
        listing.items.iter().map(|p| p.title).collect()
    }

    #[derive(Debug)]
    struct Site {
        slug: &'static str,
        status: &'static str,
        district: &'static str,
    }

    impl Listable for Site {
        const FILTERS: &'static [&'static str] = &["status", "district"];

        fn search_texts(&self) -> Vec<&str> {
            vec![self.slug]
        }

        fn field_value(&self, field: &str) -> Option<&str> {
            match field {
                "status" => Some(self.status),
                "district" => Some(self.district),
                _ => None,
            }
        }
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(SortKey::parse("newest"), SortKey::Newest);
        assert_eq!(SortKey::parse("Oldest"), SortKey::Oldest);
        assert_eq!(SortKey::parse("reading-time"), SortKey::ReadingTime);
        assert_eq!(SortKey::parse("popularity"), SortKey::Unsorted);
        assert_eq!("".parse::<SortKey>(), Ok(SortKey::Unsorted));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let posts = vec![post("Forest Growth"), post("Water")];
        let listing = query(&posts, &ListQuery::new().search("forest"));
        assert_eq!(titles(&listing), vec!["Forest Growth"]);
        assert_eq!(listing.summary(), "1 of 2");
    }

    #[test]
    fn test_search_covers_excerpt_and_tags() {
        let posts = vec![
            Post {
                excerpt: Some("Seedlings in BUGESERA"),
                ..post("Nursery update")
            },
            Post {
                tags: vec!["Agroforestry".to_string(), "Youth".to_string()],
                ..post("Training day")
            },
            post("Annual report"),
        ];
        let by_excerpt = query(&posts, &ListQuery::new().search("bugesera"));
        assert_eq!(titles(&by_excerpt), vec!["Nursery update"]);

        let by_tag = query(&posts, &ListQuery::new().search("youth"));
        assert_eq!(titles(&by_tag), vec!["Training day"]);
    }

    #[test]
    fn test_drafts_never_listed() {
        let posts = vec![
            Post {
                category: Some("News"),
                published: false,
                ..post("Forest draft")
            },
            Post {
                category: Some("News"),
                ..post("Forest live")
            },
        ];
        let q = ListQuery::new().search("forest").filter("category", "News");
        let listing = query(&posts, &q);
        assert_eq!(titles(&listing), vec!["Forest live"]);
        assert_eq!(listing.total, 2);
    }

    #[test]
    fn test_all_sentinel_is_noop() {
        let posts = vec![
            Post {
                category: Some("News"),
                ..post("a")
            },
            post("b"),
        ];
        let none = query(&posts, &ListQuery::new());
        let all = query(&posts, &ListQuery::new().filter("category", ALL));
        let empty = query(&posts, &ListQuery::new().filter("category", ""));
        assert_eq!(titles(&none), titles(&all));
        assert_eq!(titles(&none), titles(&empty));

        let news = query(&posts, &ListQuery::new().filter("category", "News"));
        assert_eq!(titles(&news), vec!["a"]);
    }

    #[test]
    fn test_unknown_filter_field_ignored() {
        let posts = vec![post("a"), post("b")];
        let listing = query(&posts, &ListQuery::new().filter("colour", "green"));
        assert_eq!(listing.shown(), 2);
    }

    #[test]
    fn test_sort_by_date_is_stable() {
        let posts = vec![
            Post {
                date: Some("2024-03-01"),
                ..post("first")
            },
            Post {
                date: Some("2024-05-01"),
                ..post("latest")
            },
            Post {
                date: Some("2024-03-01"),
                ..post("second")
            },
            post("undated"),
        ];

        let newest = query(&posts, &ListQuery::new().sort(SortKey::Newest));
        assert_eq!(titles(&newest), vec!["latest", "first", "second", "undated"]);

        let oldest = query(&posts, &ListQuery::new().sort(SortKey::Oldest));
        assert_eq!(titles(&oldest), vec!["undated", "first", "second", "latest"]);

        let unsorted = query(&posts, &ListQuery::new().sort(SortKey::parse("bogus")));
        assert_eq!(titles(&unsorted), vec!["first", "latest", "second", "undated"]);
    }

    #[test]
    fn test_sort_by_reading_time() {
        let posts = vec![
            Post {
                minutes: Some(7.0),
                ..post("long")
            },
            post("unknown"),
            Post {
                minutes: Some(3.5),
                ..post("short")
            },
        ];
        let listing = query(&posts, &ListQuery::new().sort(SortKey::ReadingTime));
        assert_eq!(titles(&listing), vec!["unknown", "short", "long"]);
    }

    #[test]
    fn test_status_and_district_filters() {
        let sites = vec![
            Site {
                slug: "a",
                status: "ongoing",
                district: "Kigali",
            },
            Site {
                slug: "b",
                status: "completed",
                district: "Huye",
            },
        ];

        let ongoing = query(&sites, &ListQuery::new().filter("status", "ongoing"));
        let slugs: Vec<&str> = ongoing.items.iter().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["a"]);

        let any_district = query(&sites, &ListQuery::new().filter("district", ALL));
        assert_eq!(any_district.shown(), 2);

        assert_eq!(facet_values(&sites, "district"), vec!["Kigali", "Huye"]);
    }

    #[test]
    fn test_facets_skip_empty_and_duplicates() {
        let posts = vec![
            Post {
                category: Some("News"),
                ..post("a")
            },
            Post {
                category: Some(""),
                ..post("b")
            },
            post("c"),
            Post {
                category: Some("Stories"),
                ..post("d")
            },
            Post {
                category: Some("News"),
                ..post("e")
            },
        ];
        assert_eq!(facet_values(&posts, "category"), vec!["News", "Stories"]);
    }
}
