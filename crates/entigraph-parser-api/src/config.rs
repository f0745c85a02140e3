use crate::{builtins::Builtins, errors::ParserError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a file fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Abort on the first failing file (in file order)
    #[default]
    FailFast,

    /// Attempt every file and report all failures together
    CollectAll,
}

/// Configuration for parser behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// File name suffix marking entity files (e.g. ".entity.go")
    pub entity_suffix: String,

    /// Directories whose name starts with this prefix are skipped
    pub hidden_dir_prefix: String,

    /// Directory names skipped during discovery
    pub exclude_dirs: Vec<String>,

    /// Enable parallel parsing (for `parse_files`)
    pub parallel: bool,

    /// Number of parallel workers (None = rayon default)
    pub parallel_workers: Option<usize>,

    /// Failure policy for multi-file parsing
    pub error_mode: ErrorMode,

    /// Type names that never become dependency edges
    pub builtins: Builtins,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            entity_suffix: ".entity.go".to_string(),
            hidden_dir_prefix: ".".to_string(),
            exclude_dirs: vec!["vendor".to_string(), "node_modules".to_string()],
            parallel: false,
            parallel_workers: None,
            error_mode: ErrorMode::FailFast,
            builtins: Builtins::go(),
        }
    }
}

impl ParserConfig {
    /// Enable parallel parsing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the number of parallel workers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }

    /// Set the failure policy
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Set the entity file suffix
    pub fn with_entity_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.entity_suffix = suffix.into();
        self
    }

    /// Skip an additional directory name during discovery
    pub fn with_exclude_dir(mut self, dir: impl Into<String>) -> Self {
        self.exclude_dirs.push(dir.into());
        self
    }

    /// Replace the builtin type set
    pub fn with_builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = builtins;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ParserError> {
        if self.entity_suffix.is_empty() {
            return Err(ParserError::InvalidConfig(
                "entity_suffix cannot be empty".to_string(),
            ));
        }

        if self.parallel_workers == Some(0) {
            return Err(ParserError::InvalidConfig(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if a file name carries the entity marker
    pub fn is_entity_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(&self.entity_suffix))
    }

    /// Check if a directory should be excluded
    pub fn should_exclude_dir(&self, dir_name: &str) -> bool {
        (!self.hidden_dir_prefix.is_empty() && dir_name.starts_with(&self.hidden_dir_prefix))
            || self.exclude_dirs.iter().any(|excluded| excluded == dir_name)
    }
}
