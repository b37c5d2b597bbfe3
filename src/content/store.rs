//! File-backed content store - reads the authoring tool's directory layout

use serde_yaml::{Mapping, Value};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::reader::{is_valid_slug, ContentReader};
use crate::error::{ContentError, Result};
use crate::schema::{schema_for, EntryLayout, Kind};

const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Reads content from a directory tree:
///
/// ```text
/// content/
///   partners/<slug>.yaml
///   projects/<slug>.yaml
///   projects/<slug>/background.mdoc
///   blogs/<slug>/index.yaml
///   blogs/<slug>/content.mdoc
///   settings/index.yaml
/// ```
///
/// Either entry layout is accepted for any collection.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the content directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate entry files, preferred layout first
    fn entry_candidates(&self, kind: Kind, slug: &str) -> Vec<PathBuf> {
        let dir = self.root.join(kind.dir());
        let flat = YAML_EXTENSIONS.map(|ext| dir.join(format!("{}.{}", slug, ext)));
        let nested = YAML_EXTENSIONS.map(|ext| dir.join(slug).join(format!("index.{}", ext)));

        match kind.layout() {
            EntryLayout::Flat => flat.into_iter().chain(nested).collect(),
            EntryLayout::Nested => nested.into_iter().chain(flat).collect(),
        }
    }

    fn singleton_candidates(&self, kind: Kind) -> Vec<PathBuf> {
        let dir = self.root.join(kind.dir());
        YAML_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("index.{}", ext)))
            .chain(
                YAML_EXTENSIONS
                    .iter()
                    .map(|ext| self.root.join(format!("{}.{}", kind.dir(), ext))),
            )
            .collect()
    }

    /// Load the first existing candidate and merge its rich-text fields
    async fn load(
        &self,
        kind: Kind,
        candidates: Vec<PathBuf>,
        markdoc_dir: PathBuf,
    ) -> Result<Option<Value>> {
        for path in candidates {
            let Some(source) = read_optional(&path).await? else {
                continue;
            };

            let mut doc: Value = serde_yaml::from_str(&source).map_err(|e| ContentError::Yaml {
                path: path.clone(),
                source: e,
            })?;
            if doc.is_null() {
                doc = Value::Mapping(Mapping::new());
            }

            if let Value::Mapping(map) = &mut doc {
                for field in schema_for(kind).markdoc_fields() {
                    let mdoc = markdoc_dir.join(format!("{}.mdoc", field));
                    if let Some(body) = read_optional(&mdoc).await? {
                        map.insert(Value::from(field), Value::from(body.trim().to_string()));
                    }
                }
            }

            tracing::debug!("Loaded {} from {:?}", kind, path);
            return Ok(Some(doc));
        }

        Ok(None)
    }
}

impl ContentReader for FileStore {
    async fn read_raw(&self, kind: Kind, slug: &str) -> Result<Option<Value>> {
        if kind.is_singleton() || !is_valid_slug(slug) {
            return Ok(None);
        }
        let markdoc_dir = self.root.join(kind.dir()).join(slug);
        self.load(kind, self.entry_candidates(kind, slug), markdoc_dir)
            .await
    }

    async fn list_slugs(&self, kind: Kind) -> Result<Vec<String>> {
        if kind.is_singleton() {
            return Ok(Vec::new());
        }

        let dir = self.root.join(kind.dir());
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ContentError::Io { path: dir, source: e }),
        };

        let mut slugs = BTreeSet::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(ContentError::Io {
                        path: dir.clone(),
                        source: e,
                    })
                }
            };

            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            if path.is_dir() {
                if !is_valid_slug(name) {
                    continue;
                }
                if YAML_EXTENSIONS
                    .iter()
                    .any(|ext| path.join(format!("index.{}", ext)).is_file())
                {
                    slugs.insert(name.to_string());
                }
            } else if is_yaml_file(&path) {
                match path.file_stem().and_then(|s| s.to_str()) {
                    Some(stem) if is_valid_slug(stem) => {
                        slugs.insert(stem.to_string());
                    }
                    _ => tracing::debug!("Skipping {:?}: not a usable slug", path),
                }
            }
        }

        Ok(slugs.into_iter().collect())
    }

    async fn read_singleton_raw(&self, kind: Kind) -> Result<Option<Value>> {
        if !kind.is_singleton() {
            return Ok(None);
        }
        let markdoc_dir = self.root.join(kind.dir());
        self.load(kind, self.singleton_candidates(kind), markdoc_dir)
            .await
    }
}

/// Read a file, `None` when it does not exist
async fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.parent().map(|p| p.is_dir()).unwrap_or(false) {
        return Ok(None);
    }
    match fs::read_to_string(path).await {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ContentError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Check if a file is a YAML file
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| YAML_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}
