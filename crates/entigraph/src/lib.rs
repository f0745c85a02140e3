//! # entigraph
//!
//! Entity model for domain-model extraction.
//!
//! ## Core Principles
//!
//! - **Parser Agnostic**: language parsers produce [`Entity`] values, this crate holds them
//! - **Deterministic**: declaration order is preserved and dependency sets are sorted
//! - **Zero Magic**: entities are appended explicitly and never mutated afterwards
//!
//! ## Architecture
//!
//! ```text
//! Language parser (entigraph-go)
//!     ↓
//! Entity / Field (one per declared record type)
//!     ↓
//! EntityGraph (file order, then declaration order)
//!     ↓
//! Export (JSON, Markdown, DOT, terminal summary) → output directory
//! ```
//!
//! ## Example
//!
//! ```rust
//! use entigraph::{Entity, EntityGraph, Field};
//!
//! let mut user = Entity::new("User");
//! user.add_field(Field::new("ID", "int"));
//! user.add_field(Field::new("Orders", "[]Order"));
//! user.add_dependency("Order");
//!
//! let mut graph = EntityGraph::new();
//! graph.push(user);
//!
//! let json = entigraph::export::export_json(&graph).unwrap();
//! assert!(json.contains("\"depends_on\""));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod output;

// Re-export main types
pub use error::{ModelError, Result};
pub use graph::{Entity, EntityGraph, Field};
pub use output::{write_entities, OutputOptions, WriteReport};
