//! Command-line arguments.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::{Options, DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Line printed when no input directory is given.
pub const USAGE: &str = "usage: entigraph <route> [output]";

#[derive(Parser, Debug)]
#[command(
    name = "entigraph",
    about = "Extract Go struct entities into JSON and Markdown",
    version
)]
pub struct Cli {
    /// Directory scanned for entity files
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory the output is written to
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// File name suffix marking entity files
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Additional directory names to skip (repeatable)
    #[arg(long, value_name = "DIR", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Parse files in parallel
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Number of parallel workers (implies --parallel)
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Attempt every file and report all parse failures together
    #[arg(long, default_value_t = false)]
    pub collect_errors: bool,

    /// Also write entities.dot (Graphviz)
    #[arg(long, default_value_t = false)]
    pub dot: bool,

    /// Do not print the entity summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Convert parsed arguments into run options.
    ///
    /// A missing INPUT prints the usage line to `out` and falls back to the
    /// current directory.
    pub fn into_options<W: Write>(self, out: &mut W) -> io::Result<Options> {
        let input = match self.input {
            Some(input) => input,
            None => {
                writeln!(out, "{USAGE}")?;
                PathBuf::from(DEFAULT_INPUT)
            }
        };

        Ok(Options {
            input,
            output: self.output,
            suffix: self.suffix,
            exclude: self.exclude,
            parallel: self.parallel,
            jobs: self.jobs,
            collect_errors: self.collect_errors,
            dot: self.dot,
            quiet: self.quiet,
        })
    }
}
