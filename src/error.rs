//! Content store errors

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::Kind;

/// Faults raised by a content store.
///
/// A missing entry is never one of these: readers return `Ok(None)` for
/// absent content and only fail when the backing storage itself misbehaves.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in `{path}`")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("entry `{slug}` of {kind} does not match its schema")]
    Decode {
        kind: Kind,
        slug: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown content kind: {0}")]
    UnknownKind(String),
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
