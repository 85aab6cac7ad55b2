use crate::config::{Config, Verbosity};
use log::{debug, error, info, trace};
use std::io::Write;
use std::path::Path;

/// Map output settings to a log level. Structured logs only show in
/// verbose or debug mode; `RUST_LOG` can still raise them otherwise.
pub fn level_for(verbosity: Verbosity, debug_mode: bool) -> log::LevelFilter {
    if debug_mode {
        log::LevelFilter::Trace
    } else if verbosity.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbosity: Verbosity, debug_mode: bool) {
    let level = level_for(verbosity, debug_mode);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // A second initialization (tests, embedding) keeps the first logger
    if builder.try_init().is_ok() {
        debug!("Logger initialized with level: {level:?}");
    }
}

/// Log the resolved configuration
pub fn log_config(config: &Config) {
    info!(
        "Configuration: dir={}, ext={}, factor={}, trial={}",
        config.directory.display(),
        config.extension,
        config.factor,
        config.trial
    );
    debug!(
        "Output: verbosity={:?}, debug={}, strategy={:?}, precision={:?}",
        config.verbosity, config.debug, config.strategy, config.precision
    );
}

/// Log file set information
pub fn log_file_set<P: AsRef<Path>>(files: &[P]) {
    info!("Processing {} file(s)", files.len());
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log the result of rewriting one file
pub fn log_file_outcome(path: &Path, lines: usize, rewritten: usize, written: bool) {
    debug!(
        "{}: {rewritten}/{lines} line(s) rescaled, {}",
        path.display(),
        if written { "written" } else { "not written" }
    );
}

/// Log a single rewritten line
pub fn log_line(path: &Path, line_number: usize, line: &str) {
    trace!("{}:{line_number}: {}", path.display(), line.trim_end());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
