//! Implementation of the EntityParser trait for Go

use entigraph::EntityGraph;
use entigraph_parser_api::{
    merge_file_results, EntityParser, FileInfo, ParserConfig, ParserError, ParserMetrics,
};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::extractor;

/// Go language parser implementing the EntityParser trait
pub struct GoParser {
    config: ParserConfig,
    metrics: Mutex<ParserMetrics>,
}

impl GoParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ParserMetrics::default()),
        }
    }

    fn update_metrics(&self, parsed: Option<&FileInfo>, duration: Duration) {
        let mut metrics = self.metrics.lock().unwrap_or_else(PoisonError::into_inner);
        metrics.files_attempted += 1;
        metrics.total_parse_time += duration;
        match parsed {
            Some(info) => {
                metrics.files_succeeded += 1;
                metrics.total_entities += info.entity_count();
                metrics.total_fields += info.field_count();
                metrics.total_dependencies += info.dependency_count();
            }
            None => metrics.files_failed += 1,
        }
    }

    fn parse_files_parallel(&self, paths: &[PathBuf]) -> Result<EntityGraph, ParserError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(workers) = self.config.parallel_workers {
            builder = builder.num_threads(workers);
        }
        let pool = builder.build().map_err(|e| {
            ParserError::InvalidConfig(format!("Failed to create thread pool: {e}"))
        })?;

        // Indexed collect keeps results in input order regardless of
        // completion order.
        let results: Vec<Result<FileInfo, ParserError>> =
            pool.install(|| paths.par_iter().map(|path| self.parse_file(path)).collect());

        merge_file_results(results, self.config.error_mode)
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityParser for GoParser {
    fn language(&self) -> &str {
        "go"
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn parse_file(&self, path: &Path) -> Result<FileInfo, ParserError> {
        let start = Instant::now();
        let result = fs::read_to_string(path)
            .map_err(|e| ParserError::io_error(path, e))
            .and_then(|source| self.parse_source(&source, path));

        let duration = start.elapsed();
        match &result {
            Ok(info) => {
                debug!(entities = info.entity_count(), "Parsed file");
                self.update_metrics(Some(info), duration);
            }
            Err(e) => {
                debug!(error = %e, "Failed to parse file");
                self.update_metrics(None, duration);
            }
        }

        result
    }

    fn parse_source(&self, source: &str, file_path: &Path) -> Result<FileInfo, ParserError> {
        let start = Instant::now();
        let entities = extractor::extract(source, file_path, &self.config)?;

        let mut file_info = FileInfo::new(file_path);
        file_info.entities = entities;
        file_info.parse_time = start.elapsed();
        file_info.line_count = source.lines().count();
        file_info.byte_count = source.len();

        Ok(file_info)
    }

    fn parse_files(&self, paths: &[PathBuf]) -> Result<EntityGraph, ParserError> {
        self.config.validate()?;

        let graph = if self.config.parallel {
            self.parse_files_parallel(paths)?
        } else {
            merge_file_results(
                paths.iter().map(|path| self.parse_file(path)),
                self.config.error_mode,
            )?
        };

        for name in graph.duplicate_names() {
            warn!(entity = %name, "Entity declared in more than one place");
        }
        info!(
            files = paths.len(),
            entities = graph.len(),
            edges = graph.edge_count(),
            "Parsed entity files"
        );

        Ok(graph)
    }

    fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn metrics(&self) -> ParserMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn reset_metrics(&mut self) {
        *self.metrics.lock().unwrap_or_else(PoisonError::into_inner) = ParserMetrics::default();
    }
}
