//! Site configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "site.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path prefix the site is served under
    pub root: String,

    /// Content directory, relative to the base directory
    pub content_dir: String,

    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
            content_dir: "content".to_string(),
            listing: ListingConfig::default(),
            markdown: MarkdownConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    /// Load `site.yml` from the base directory, or use defaults when absent
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(&path)
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }
}

/// Listing page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Partners shown in the footer
    pub footer_partners: usize,
    /// Featured cards on the project and service indexes
    pub featured: usize,
    /// Sort applied to the blog index when none is requested
    pub blog_sort: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            footer_partners: 6,
            featured: 2,
            blog_sort: "newest".to_string(),
        }
    }
}

/// Rich-text rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            smart_punctuation: true,
        }
    }
}

/// JSON API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.root, "/");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.listing.footer_partners, 6);
        assert_eq!(config.listing.featured, 2);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
root: /site/
listing:
  featured: 3
analytics_id: G-123
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.root, "/site/");
        assert_eq!(config.listing.featured, 3);
        assert_eq!(config.listing.footer_partners, 6);
        assert!(config.markdown.smart_punctuation);
    }

    #[test]
    fn test_load_or_default() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.content_dir, "content");

        fs::write(tmp.path().join(CONFIG_FILE), "content_dir: data\nserver:\n  port: 8080\n")
            .unwrap();
        let config = SiteConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.content_dir, "data");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "127.0.0.1");
    }
}
