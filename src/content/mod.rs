//! Content module - typed entries, readers and rich-text rendering

mod audit;
mod markdown;
mod memory;
pub mod models;
mod reader;
mod settings;
mod store;

pub use audit::{audit, AuditReport};
pub use markdown::MarkdownRenderer;
pub use memory::MemoryStore;
pub use reader::{is_valid_slug, Collection, ContentReader, Entry, Singleton};
pub use settings::{resolve_settings, ResolvedSettings};
pub use store::FileStore;
