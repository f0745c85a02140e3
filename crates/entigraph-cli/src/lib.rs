//! entigraph command-line interface.
//!
//! Discovers entity files under an input directory, parses them with the Go
//! parser, prints a summary and writes JSON, Markdown and optionally DOT
//! output.

pub mod cli;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use entigraph::export::write_summary;
use entigraph::{write_entities, OutputOptions, WriteReport};
use entigraph_go::GoParser;
use entigraph_parser_api::{EntityParser, ErrorMode, ParserConfig};

pub use cli::{Cli, USAGE};

/// Default directory scanned for entity files.
pub const DEFAULT_INPUT: &str = "./";

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "./plugs";

/// Options for one extraction run.
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub suffix: Option<String>,
    pub exclude: Vec<String>,
    pub parallel: bool,
    pub jobs: Option<usize>,
    pub collect_errors: bool,
    pub dot: bool,
    pub quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            suffix: None,
            exclude: Vec::new(),
            parallel: false,
            jobs: None,
            collect_errors: false,
            dot: false,
            quiet: false,
        }
    }
}

impl Options {
    /// Parser configuration for these options.
    pub fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::default().with_parallel(self.parallel || self.jobs.is_some());
        if let Some(suffix) = &self.suffix {
            config = config.with_entity_suffix(suffix.clone());
        }
        for dir in &self.exclude {
            config = config.with_exclude_dir(dir.clone());
        }
        if let Some(jobs) = self.jobs {
            config = config.with_workers(jobs);
        }
        if self.collect_errors {
            config = config.with_error_mode(ErrorMode::CollectAll);
        }
        config
    }
}

/// Run discovery, parsing and output, printing progress to `out`.
///
/// Nothing is written to the output directory unless every file parsed.
pub fn run<W: Write>(opts: &Options, out: &mut W) -> Result<WriteReport> {
    let start = Instant::now();

    let input = absolute(&opts.input)?;
    let output = absolute(&opts.output)?;
    writeln!(out, "processing models at: {}", input.display())?;
    writeln!(out, "output dir at: {}", output.display())?;

    let config = opts.parser_config();
    config.validate()?;
    let parser = GoParser::with_config(config);

    let files = parser
        .discover_files(&input)
        .with_context(|| format!("failed to scan {}", input.display()))?;
    tracing::info!(count = files.len(), "discovered entity files");

    let graph = parser.parse_files(&files)?;

    if !opts.quiet {
        write_summary(out, &graph)?;
    }

    let report = write_entities(&output, &graph, &OutputOptions { dot: opts.dot })
        .with_context(|| format!("failed to write output to {}", output.display()))?;

    let metrics = parser.metrics();
    tracing::info!(
        files = metrics.files_attempted,
        entities = metrics.total_entities,
        written = report.file_count(),
        total_secs = start.elapsed().as_secs_f64(),
        "complete"
    );

    Ok(report)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("failed to resolve {}", path.display()))
}
