// Command-line interface definitions and parsing for resize-xbb

use crate::config::CliConfig;
use crate::core::error::{RescaleError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Rescale .xbb (image bounding box) file values for epub formatting.
#[derive(Parser, Debug)]
#[command(name = "resize-xbb", version, long_about = None)]
pub struct Cli {
    /// Directory to process (overrides --dir)
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    // Core Options
    /// Directory to process [default: .]
    #[arg(short = 'd', long, value_name = "DIR", help_heading = "Core Options")]
    pub dir: Option<PathBuf>,

    /// File extension to act on [default: xbb]
    #[arg(short = 'e', long, value_name = "EXT", help_heading = "Core Options")]
    pub ext: Option<String>,

    /// Scaling factor [default: 2]
    #[arg(long, value_name = "N", allow_negative_numbers = true, help_heading = "Core Options")]
    pub factor: Option<f64>,

    /// Fixed number of decimals for HiRes values [default: shortest]
    #[arg(long, value_name = "N", help_heading = "Core Options")]
    pub precision: Option<usize>,

    /// Trial mode, makes no changes
    #[arg(short = 't', long, help_heading = "Core Options")]
    pub trial: bool,

    /// Rewrite files in memory instead of through a side-car file
    #[arg(long = "stringIO", help_heading = "Core Options")]
    pub string_io: bool,

    // Output & Verbosity
    /// Hide the summary lines
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Lots of output
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Dump the configuration and every rewritten line
    #[arg(long, help_heading = "Output & Verbosity")]
    pub debug: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments to a CliConfig overlay.
///
/// A positional directory takes precedence over `--dir`; more than one is
/// rejected.
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    if cli.dirs.len() > 1 {
        return Err(RescaleError::TooManyDirectories(cli.dirs.len()));
    }

    Ok(CliConfig {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trial: cli.trial,
        debug: cli.debug,
        string_io: cli.string_io,
        factor: cli.factor,
        ext: cli.ext.clone(),
        dir: cli.dirs.first().cloned().or_else(|| cli.dir.clone()),
        precision: cli.precision,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    })
}
