//! Helper functions shared by page data builders

mod date;
mod size;
mod url;

pub use date::*;
pub use size::*;
pub use url::*;
