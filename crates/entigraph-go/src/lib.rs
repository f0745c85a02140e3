//! # entigraph-go
//!
//! Go parser for entigraph - extracts struct entities, their fields and the
//! dependencies between them from Go source files.
//!
//! ## Features
//!
//! - Parse top-level `struct` declarations (grouped, generic and aliased)
//! - Render field types to canonical strings (`*User`, `[]Order`, `map[string]Item`)
//! - Infer `depends_on` edges, excluding builtins and self references
//! - Sequential or parallel multi-file parsing with deterministic merge
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use entigraph_go::GoParser;
//! use entigraph_parser_api::EntityParser;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = GoParser::new();
//!
//! let graph = parser.parse_directory(Path::new("./models"))?;
//! println!("Found {} entities", graph.len());
//! # Ok(())
//! # }
//! ```

mod extractor;
mod parser_impl;
mod type_expr;
mod visitor;

// Re-export parser-api types for convenience
pub use entigraph_parser_api::{
    EntityParser, ErrorMode, FileInfo, ParserConfig, ParserError, ParserMetrics,
};

// Export the Go parser implementation
pub use extractor::extract;
pub use parser_impl::GoParser;
pub use type_expr::TypeExpr;
