//! Page data - the view models every page of the site is rendered from
//!
//! Builders read through a [`ContentReader`], resolve relationships and
//! normalize metrics. Missing content surfaces as `Ok(None)`; only storage
//! faults are errors.

mod blog;
mod chrome;
mod paths;
mod project;
mod service;
mod singletons;

use crate::config::SiteConfig;
use crate::content::{ContentReader, MarkdownRenderer};

pub use blog::{BlogCard, BlogDetail, BlogIndex};
pub use chrome::{FooterData, HeaderData, NavLink, SiteChrome};
pub use paths::detail_route;
pub use project::{DocumentLink, ProjectCard, ProjectDetail, ProjectIndex, ProjectSection};
pub use service::{ServiceCard, ServiceDetail, ServiceIndex};
pub use singletons::{AboutPage, ContactPage, HomePage, ProjectsBlock, ServicesBlock};

/// Builds page data from a content reader
pub struct Pages<'a, R> {
    reader: &'a R,
    config: &'a SiteConfig,
    markdown: MarkdownRenderer,
}

impl<'a, R: ContentReader> Pages<'a, R> {
    pub fn new(reader: &'a R, config: &'a SiteConfig) -> Self {
        Self {
            reader,
            config,
            markdown: MarkdownRenderer::with_options(config.markdown.smart_punctuation),
        }
    }

    pub fn reader(&self) -> &R {
        self.reader
    }

    pub fn config(&self) -> &SiteConfig {
        self.config
    }
}

/// Treat blank strings like missing ones
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.trim().is_empty()).cloned()
}
