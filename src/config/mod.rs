//! Configuration management
//!
//! This module handles loading configuration from TOML files, overlaying
//! CLI arguments and resolving the immutable [`Config`] used for a run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{config_files, defaults, limits};
use crate::core::error::{RescaleError, Result};
use crate::rescale::{LineRewriter, Scaler};

/// Which kinds of normal output a run produces. Quiet and verbose gate
/// different lines, so both may be set at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbosity {
    /// Hide the summary lines
    pub quiet: bool,
    /// Show one line per processed file
    pub verbose: bool,
}

impl Verbosity {
    pub const NORMAL: Verbosity = Verbosity::from_flags(false, false);
    pub const QUIET: Verbosity = Verbosity::from_flags(true, false);
    pub const VERBOSE: Verbosity = Verbosity::from_flags(false, true);

    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    pub fn shows_summary(self) -> bool {
        !self.quiet
    }

    pub fn shows_progress(self) -> bool {
        self.verbose
    }
}

/// How a rewritten file reaches the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStrategy {
    /// Stream into a side-car file, then rename it over the original
    #[default]
    SideCar,
    /// Rewrite in memory, then overwrite the original
    Buffered,
}

/// Options as they appear in a `.resize-xbb.toml` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Suppress normal output
    pub quiet: Option<bool>,

    /// Print one line per processed file
    pub verbose: Option<bool>,

    /// Dry run, no file is modified
    pub trial: Option<bool>,

    /// Dump configuration and every rewritten line
    pub debug: Option<bool>,

    /// Scale factor
    pub factor: Option<f64>,

    /// Extension of the files to rescale
    pub ext: Option<String>,

    /// Root directory to scan
    pub dir: Option<PathBuf>,

    /// Use the in-memory rewrite strategy
    #[serde(alias = "stringIO")]
    pub string_io: Option<bool>,

    /// Fixed decimals for HiRes values
    pub precision: Option<usize>,
}

/// Options collected from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliConfig {
    pub quiet: bool,
    pub verbose: bool,
    pub trial: bool,
    pub debug: bool,
    pub string_io: bool,
    pub factor: Option<f64>,
    pub ext: Option<String>,
    pub dir: Option<PathBuf>,
    pub precision: Option<usize>,
    pub config_file: Option<PathBuf>,
    pub no_config: bool,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RescaleError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            RescaleError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Find a config file in `start` or up to `PARENT_SEARCH_DEPTH` of its
    /// parents, nearest first
    pub fn locate_from(start: &Path) -> Option<PathBuf> {
        (0..=config_files::PARENT_SEARCH_DEPTH)
            .map(|depth| {
                start
                    .join("../".repeat(depth))
                    .join(config_files::FILE_NAME)
            })
            .find(|path| path.is_file())
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Result<Self> {
        match Self::locate_from(Path::new(".")) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load whatever file the CLI asks for, if any
    pub fn load_for_cli(cli_config: &CliConfig) -> Result<Self> {
        if cli_config.no_config {
            Ok(Self::default())
        } else if let Some(ref config_file) = cli_config.config_file {
            Self::load_from_file(config_file)
        } else {
            Self::load_from_standard_locations()
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if cli_config.quiet {
            self.quiet = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.trial {
            self.trial = Some(true);
        }
        if cli_config.debug {
            self.debug = Some(true);
        }
        if cli_config.string_io {
            self.string_io = Some(true);
        }
        if let Some(factor) = cli_config.factor {
            self.factor = Some(factor);
        }
        if let Some(ref ext) = cli_config.ext {
            self.ext = Some(ext.clone());
        }
        if let Some(ref dir) = cli_config.dir {
            self.dir = Some(dir.clone());
        }
        if let Some(precision) = cli_config.precision {
            self.precision = Some(precision);
        }
    }

    /// Validate and fill in defaults
    pub fn resolve(self) -> Result<Config> {
        let config = Config {
            verbosity: Verbosity::from_flags(
                self.quiet.unwrap_or(false),
                self.verbose.unwrap_or(false),
            ),
            debug: self.debug.unwrap_or(false),
            trial: self.trial.unwrap_or(false),
            factor: self.factor.unwrap_or(defaults::FACTOR),
            extension: self.ext.unwrap_or_else(|| defaults::EXTENSION.to_string()),
            directory: self
                .dir
                .unwrap_or_else(|| PathBuf::from(defaults::DIRECTORY)),
            strategy: if self.string_io.unwrap_or(false) {
                WriteStrategy::Buffered
            } else {
                WriteStrategy::SideCar
            },
            precision: self.precision,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Immutable options for one run of the bounding box rescaler
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub verbosity: Verbosity,
    pub debug: bool,
    pub trial: bool,
    pub factor: f64,
    pub extension: String,
    pub directory: PathBuf,
    pub strategy: WriteStrategy,
    pub precision: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::NORMAL,
            debug: false,
            trial: false,
            factor: defaults::FACTOR,
            extension: defaults::EXTENSION.to_string(),
            directory: PathBuf::from(defaults::DIRECTORY),
            strategy: WriteStrategy::SideCar,
            precision: None,
        }
    }
}

impl Config {
    /// Build the run configuration from defaults, config file and CLI
    pub fn from_cli(cli_config: &CliConfig) -> Result<Self> {
        let mut file_config = FileConfig::load_for_cli(cli_config)?;
        file_config.merge_with_cli(cli_config);
        file_config.resolve()
    }

    /// Glob matched against file names, e.g. `*.xbb`
    pub fn file_pattern(&self) -> String {
        format!("*.{}", self.extension)
    }

    pub fn line_rewriter(&self) -> LineRewriter {
        LineRewriter::new(Scaler::new(self.factor).with_precision(self.precision))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(RescaleError::Config(format!(
                "Factor {} is invalid. Expected a finite number.",
                self.factor
            )));
        }

        if self.extension.is_empty() {
            return Err(RescaleError::Config(
                "Extension cannot be empty.".to_string(),
            ));
        }

        if self.extension.contains(['/', '\\']) {
            return Err(RescaleError::Config(format!(
                "Extension '{}' cannot contain a path separator.",
                self.extension
            )));
        }

        if let Some(precision) = self.precision {
            if precision > limits::MAX_PRECISION {
                return Err(RescaleError::Config(format!(
                    "Precision {precision} is too large. Expected at most {}.",
                    limits::MAX_PRECISION
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "quiet = {}", self.verbosity.quiet)?;
        writeln!(f, "verbose = {}", self.verbosity.verbose)?;
        writeln!(f, "trial = {}", self.trial)?;
        writeln!(f, "debug = {}", self.debug)?;
        writeln!(f, "factor = {:?}", self.factor)?;
        writeln!(f, "ext = {}", self.extension)?;
        writeln!(f, "dir = {}", self.directory.display())?;
        writeln!(f, "stringIO = {}", self.strategy == WriteStrategy::Buffered)?;
        match self.precision {
            Some(precision) => write!(f, "precision = {precision}"),
            None => write!(f, "precision = shortest"),
        }
    }
}
