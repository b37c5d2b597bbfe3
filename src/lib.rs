//! forest4life: content layer of the Forest4Life website
//!
//! Content is authored out-of-band as YAML and markdoc files. This crate
//! reads it through a typed schema, resolves relationships between entries,
//! normalizes impact metrics, answers listing queries and prepares the data
//! every page of the site is rendered from.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod metrics;
pub mod pages;
pub mod query;
pub mod resolve;
pub mod schema;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::FileStore;
use pages::Pages;

/// A site checkout: configuration plus its content store
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    store: FileStore,
}

impl Site {
    /// Open a site from its base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load_or_default(&base_dir)?;
        let content_dir = base_dir.join(&config.content_dir);

        if !content_dir.is_dir() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
        }

        Ok(Self {
            store: FileStore::new(&content_dir),
            config,
            base_dir,
            content_dir,
        })
    }

    /// The file-backed content store
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Page data builders over this site's content
    pub fn pages(&self) -> Pages<'_, FileStore> {
        Pages::new(&self.store, &self.config)
    }
}
