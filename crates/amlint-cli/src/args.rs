//! Command-line argument definitions for the amlint CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the document to lint, the configuration
//! file, whether warnings fail the run, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the amlint architecture linter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the architecture document (YAML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail the run on warnings as well as errors
    #[arg(long)]
    pub deny_warnings: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
