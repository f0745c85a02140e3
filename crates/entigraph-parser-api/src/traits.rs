use crate::{
    config::{ErrorMode, ParserConfig},
    discovery,
    errors::{ParserError, ParserResult},
    metrics::ParserMetrics,
};
use entigraph::{Entity, EntityGraph};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Entities extracted from one source file
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    /// Path to the source file
    pub file_path: PathBuf,

    /// Record declarations in declaration order
    pub entities: Vec<Entity>,

    /// Time taken to parse this file
    pub parse_time: Duration,

    /// Number of lines in the file
    pub line_count: usize,

    /// File size in bytes
    pub byte_count: usize,
}

impl FileInfo {
    /// Create an empty result for `file_path`
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            entities: Vec::new(),
            parse_time: Duration::ZERO,
            line_count: 0,
            byte_count: 0,
        }
    }

    /// Number of entities extracted
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of fields across all entities
    pub fn field_count(&self) -> usize {
        self.entities.iter().map(|e| e.fields.len()).sum()
    }

    /// Number of dependency edges across all entities
    pub fn dependency_count(&self) -> usize {
        self.entities.iter().map(|e| e.depends_on.len()).sum()
    }
}

/// Fold per-file results into one graph, in the order they are yielded.
///
/// With [`ErrorMode::FailFast`] the first error is returned and the
/// remaining results are not pulled from the iterator, so a lazy iterator
/// stops reading files. With [`ErrorMode::CollectAll`] every result is
/// consumed and all failures are reported together.
pub fn merge_file_results<I>(results: I, mode: ErrorMode) -> ParserResult<EntityGraph>
where
    I: IntoIterator<Item = ParserResult<FileInfo>>,
{
    let mut graph = EntityGraph::new();
    let mut failures = Vec::new();

    for result in results {
        match result {
            Ok(info) => {
                debug!(
                    file = %info.file_path.display(),
                    entities = info.entity_count(),
                    "Merging file"
                );
                graph.extend_from_file(info.entities);
            }
            Err(e) => match mode {
                ErrorMode::FailFast => return Err(e),
                ErrorMode::CollectAll => {
                    warn!(error = %e, "File failed to parse");
                    failures.push(e);
                }
            },
        }
    }

    ParserError::from_failures(failures)?;
    Ok(graph)
}

/// Core trait that all language parsers must implement
///
/// A parser turns source files into [`Entity`] values. Discovery, file
/// reading and multi-file merging have default implementations built on
/// [`EntityParser::parse_source`].
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to support parallel parsing.
pub trait EntityParser: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "go")
    fn language(&self) -> &str;

    /// Parse source code of one file
    ///
    /// Pure: performs no I/O and no mutation of shared state. `file_path`
    /// is only used for diagnostics.
    ///
    /// **Note on Metrics**: This method does NOT update parser metrics.
    fn parse_source(&self, source: &str, file_path: &Path) -> ParserResult<FileInfo>;

    /// Read and parse a single file
    ///
    /// # Errors
    /// Returns `ParserError` if:
    /// - File cannot be read
    /// - Source code has syntax errors
    fn parse_file(&self, path: &Path) -> ParserResult<FileInfo> {
        let source =
            std::fs::read_to_string(path).map_err(|e| ParserError::io_error(path, e))?;
        self.parse_source(&source, path)
    }

    /// Parse multiple files into one graph (file order, then declaration order)
    ///
    /// Default implementation parses files sequentially and honors
    /// [`ParserConfig::error_mode`]. Override this for parallel parsing.
    fn parse_files(&self, paths: &[PathBuf]) -> ParserResult<EntityGraph> {
        merge_file_results(
            paths.iter().map(|path| self.parse_file(path)),
            self.config().error_mode,
        )
    }

    /// Discover entity files under `dir` and parse them
    fn parse_directory(&self, dir: &Path) -> ParserResult<EntityGraph> {
        let paths = self.discover_files(dir)?;
        self.parse_files(&paths)
    }

    /// Discover parseable files in a directory
    fn discover_files(&self, dir: &Path) -> ParserResult<Vec<PathBuf>> {
        discovery::discover_files(dir, self.config())
    }

    /// Check if this parser handles the given file
    fn can_parse(&self, path: &Path) -> bool {
        self.config().is_entity_file(path)
    }

    /// Get parser configuration
    fn config(&self) -> &ParserConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ParserMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}
