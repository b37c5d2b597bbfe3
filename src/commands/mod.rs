//! CLI commands

pub mod check;
pub mod list;
pub mod page;
pub mod paths;
pub mod query;
