//! Print the data of one page as JSON

use anyhow::{Context, Result};
use serde::Serialize;

use crate::Site;

/// Print page data; detail pages take a slug, without one the index is shown
pub async fn run(site: &Site, name: &str, slug: Option<&str>) -> Result<()> {
    let pages = site.pages();

    let json = match (name, slug) {
        ("chrome", _) => to_json(&pages.site_chrome().await?)?,
        ("home", _) => to_json(&found(pages.home_page().await?, "home page")?)?,
        ("about", _) => to_json(&found(pages.about_page().await?, "about page")?)?,
        ("contact", _) => to_json(&pages.contact_page().await?)?,
        ("blog" | "blogs", None) => to_json(&pages.blog_index().await?)?,
        ("blog" | "blogs", Some(slug)) => {
            to_json(&found(pages.blog_detail(slug).await?, slug)?)?
        }
        ("project" | "projects", None) => to_json(&pages.project_index().await?)?,
        ("project" | "projects", Some(slug)) => {
            to_json(&found(pages.project_detail(slug).await?, slug)?)?
        }
        ("service" | "services", None) => to_json(&pages.service_index().await?)?,
        ("service" | "services", Some(slug)) => {
            to_json(&found(pages.service_detail(slug).await?, slug)?)?
        }
        _ => anyhow::bail!(
            "Unknown page: {}. Available: chrome, home, about, contact, blog, project, service",
            name
        ),
    };

    println!("{}", json);
    Ok(())
}

fn found<T>(page: Option<T>, what: &str) -> Result<T> {
    page.with_context(|| format!("Not found: {}", what))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
