//! entigraph Parser API
//!
//! Shared trait and types for building entigraph language parsers.
//!
//! This crate provides the foundation for implementing language parsers that
//! feed the entigraph entity model. It defines:
//!
//! - **EntityParser trait**: The interface all parsers implement
//! - **Discovery**: Entity-file selection under a root directory
//! - **Dependency inference**: Base type name reduction and builtin filtering
//! - **Configuration**: Marker suffix, excluded directories, parallelism, failure policy
//! - **Metrics**: Performance and success tracking
//! - **Error handling**: Comprehensive error types
//!
//! # Example
//!
//! ```rust,ignore
//! use entigraph_parser_api::{EntityParser, FileInfo, ParserConfig, ParserError, ParserMetrics};
//! use std::path::Path;
//!
//! struct MyParser {
//!     config: ParserConfig,
//! }
//!
//! impl EntityParser for MyParser {
//!     fn language(&self) -> &str {
//!         "mylang"
//!     }
//!
//!     fn parse_source(&self, source: &str, file_path: &Path) -> Result<FileInfo, ParserError> {
//!         // Implementation here
//!         todo!()
//!     }
//!
//!     fn config(&self) -> &ParserConfig {
//!         &self.config
//!     }
//!
//!     fn metrics(&self) -> ParserMetrics {
//!         ParserMetrics::default()
//!     }
//!
//!     fn reset_metrics(&mut self) {}
//! }
//! ```

pub mod builtins;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod metrics;
pub mod resolver;
pub mod traits;


// Re-export commonly used types
pub use builtins::Builtins;
pub use config::{ErrorMode, ParserConfig};
pub use discovery::discover_files;
pub use errors::{ParserError, ParserResult};
pub use metrics::ParserMetrics;
pub use resolver::{base_type_name, DependencyResolver};
pub use traits::{merge_file_results, EntityParser, FileInfo};
