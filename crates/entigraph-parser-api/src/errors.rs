use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during discovery and parsing
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to read a file or directory
    #[error("IO error reading {}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax error in source code (1-based line and column)
    #[error("Syntax error in {}:{line}:{column}: {message}", file.display())]
    SyntaxError {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The grammar could not be loaded
    #[error("Language error in {}: {message}", file.display())]
    Language { file: PathBuf, message: String },

    /// Invalid parser configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Several files failed (collect-all mode)
    #[error("{} files failed to parse:\n{}", .0.len(), render_failures(.0))]
    Multiple(Vec<ParserError>),
}

fn render_failures(failures: &[ParserError]) -> String {
    failures
        .iter()
        .map(|e| match e {
            ParserError::IoError { source, .. } => format!("  {e}: {source}"),
            _ => format!("  {e}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl ParserError {
    /// Create an IoError from a path and io::Error
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParserError::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a SyntaxError
    pub fn syntax_error(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        ParserError::SyntaxError {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Fold collected failures: `Ok` when there are none, the single error
    /// when there is one, `Multiple` otherwise.
    pub fn from_failures(mut failures: Vec<ParserError>) -> Result<(), ParserError> {
        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(ParserError::Multiple(failures)),
        }
    }

    /// Number of underlying failures this error stands for
    pub fn failure_count(&self) -> usize {
        match self {
            ParserError::Multiple(failures) => failures.len(),
            _ => 1,
        }
    }
}

/// Result type for parser operations
pub type ParserResult<T> = Result<T, ParserError>;
