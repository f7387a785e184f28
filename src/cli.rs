use clap::Parser;
use std::path::PathBuf;

use gradle_deptree::application::dto::OutputFormat;

/// Browse and search Gradle dependency reports
#[derive(Parser, Debug)]
#[command(name = "gradle-deptree")]
#[command(version)]
#[command(
    about = "Browse and search Gradle dependency reports",
    long_about = "Parses the text output of `gradle dependencies` and renders it as a tree.\n\
                  With --search, only dependencies matching the query (by name or version, \
                  case-insensitively) and the paths leading to them are kept."
)]
pub struct Args {
    /// Dependency report to read ('-' or absent reads standard input)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Keep only dependencies whose name or version contains QUERY
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of tree levels to print; deeper nodes are collapsed
    #[arg(short = 'd', long, value_name = "LEVELS", value_parser = parse_max_depth)]
    pub max_depth: Option<usize>,

    /// Attach dependencies with no parent in the report as extra roots instead of dropping them
    #[arg(long)]
    pub promote_orphans: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to config file (default: auto-discover gradle-deptree.config.yml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses arguments without exiting, so the caller picks the exit code
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    let levels: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a positive number", value))?;
    if levels == 0 {
        return Err("max depth must be at least 1".to_string());
    }
    Ok(levels)
}
