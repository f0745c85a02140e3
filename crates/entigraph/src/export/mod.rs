//! Export module for rendering the entity graph for documentation tools.
//!
//! Supported formats:
//! - **JSON**: one array of entities (`entities.json`)
//! - **Markdown**: one page per entity
//! - **DOT**: Graphviz dependency diagram
//! - **Summary**: human-readable terminal listing

pub mod dot;
pub mod json;
pub mod markdown;
pub mod summary;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
pub use markdown::{render_entity_markdown, sanitize_file_name};
pub use summary::{render_summary, write_summary};
