//! Error types for entity model operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for entity model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while rendering or persisting an [`EntityGraph`](crate::EntityGraph).
///
/// Both variants are fatal for a run: the caller reports them and exits.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Serialization of the entity graph failed
    #[error("Encoding error: {message}")]
    Encoding {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Output directory or file could not be created or written
    #[error("Write error at {}: {source}", path.display())]
    Write {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    /// Create an encoding error from a message and optional source.
    pub fn encoding<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encoding {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
