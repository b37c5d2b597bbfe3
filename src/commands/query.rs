//! Run a listing query from the command line

use anyhow::Result;

use crate::pages::{BlogCard, ProjectCard, ServiceCard};
use crate::query::{query, ListQuery, Listable, Listing, SortKey};
use crate::Site;

/// Query options as given on the command line
#[derive(Debug, Default)]
pub struct QueryArgs {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub sort: Option<String>,
}

impl QueryArgs {
    fn to_query(&self, default_sort: &str) -> ListQuery {
        let mut q = ListQuery::new()
            .search(self.search.as_deref().unwrap_or_default())
            .sort(SortKey::parse(self.sort.as_deref().unwrap_or(default_sort)));
        for (field, value) in &self.filters {
            q = q.filter(field, value);
        }
        q
    }
}

/// Parse a `field=value` filter argument
pub fn parse_filter(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid filter `{}`, expected field=value", s))?;
    Ok((field.trim().to_string(), value.trim().to_string()))
}

pub async fn run(site: &Site, target: &str, args: &QueryArgs) -> Result<()> {
    let pages = site.pages();

    match target {
        "blog" | "blogs" => {
            let index = pages.blog_index().await?;
            let q = args.to_query(&site.config.listing.blog_sort);
            print_listing("blogs", &query(&index.cards, &q), |c: &BlogCard| {
                format!("{} - {} [{}]", c.slug, c.title, c.display_date)
            });
        }
        "project" | "projects" => {
            let index = pages.project_index().await?;
            let q = args.to_query("");
            print_listing("projects", &query(&index.cards, &q), |c: &ProjectCard| {
                format!(
                    "{} - {} [{}{}]",
                    c.slug,
                    c.title,
                    c.status.as_str(),
                    c.district
                        .as_deref()
                        .map(|d| format!(", {}", d))
                        .unwrap_or_default()
                )
            });
        }
        "service" | "services" => {
            let index = pages.service_index().await?;
            let q = args.to_query("");
            print_listing("services", &query(&index.cards, &q), |c: &ServiceCard| {
                format!("{} - {}", c.slug, c.title)
            });
        }
        _ => anyhow::bail!(
            "Unknown listing: {}. Available: blogs, projects, services",
            target
        ),
    }

    Ok(())
}

fn print_listing<T, F>(noun: &str, listing: &Listing<'_, T>, line: F)
where
    T: Listable,
    F: Fn(&T) -> String,
{
    println!("Showing {} {}", listing.summary(), noun);
    for &item in &listing.items {
        println!("  {}", line(item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("district=Kigali"),
            Ok(("district".to_string(), "Kigali".to_string()))
        );
        assert_eq!(
            parse_filter("category = Field Notes"),
            Ok(("category".to_string(), "Field Notes".to_string()))
        );
        assert!(parse_filter("district").is_err());
    }

    #[test]
    fn test_to_query() {
        let args = QueryArgs {
            search: Some("forest".to_string()),
            filters: vec![("category".to_string(), "all".to_string())],
            sort: None,
        };
        let q = args.to_query("newest");
        assert_eq!(q.search, "forest");
        assert_eq!(q.sort, SortKey::Newest);
        assert_eq!(q.filters.get("category").map(String::as_str), Some("all"));

        let q = QueryArgs::default().to_query("");
        assert_eq!(q.sort, SortKey::Unsorted);
    }
}
