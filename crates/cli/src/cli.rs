use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::{Path, PathBuf};

/// Flowmine: process mining for event logs
///
/// Flowmine turns a timestamped event log into a directed process graph,
/// flags time-based bottlenecks, and suggests automation opportunities.
#[derive(Debug, Parser)]
#[command(about, long_about, version)]
pub(crate) struct Cli {
    /// Path to configuration file.
    ///
    /// Absent means built-in defaults.
    #[arg(short, long, value_parser = validate_file)]
    pub(crate) conffile: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Build and print the process graph for an event log.
    Analyze {
        /// CSV event log.
        #[arg(value_parser = validate_file)]
        logfile: PathBuf,

        /// Emit JSON instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Print automation recommendations for an event log.
    Recommend {
        /// CSV event log.
        #[arg(value_parser = validate_file)]
        logfile: PathBuf,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Generate a synthetic accounts-payable event log.
    Generate {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}
