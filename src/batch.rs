//! Batch processing of a directory tree

use std::path::PathBuf;

use crate::config::Config;
use crate::core::error::Result;
use crate::discovery::{ExtensionFinder, FileFinder};
use crate::reporting::logging;
use crate::reporting::{Event, Reporter};
use crate::rewrite::{RewriteContext, for_strategy};

/// Totals for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files that matched the extension filter, in processing order
    pub files: Vec<PathBuf>,
    /// Files fully read and rewritten (written back unless trial)
    pub processed: usize,
    /// Files actually replaced on disk
    pub written: usize,
    /// Bounding box lines rescaled across all files
    pub rewritten_lines: usize,
}

/// Rescale every matching file below the configured directory.
///
/// The first failing file aborts the batch; files handled before it keep
/// their new content.
pub fn run_batch(config: &Config, reporter: &mut dyn Reporter) -> Result<BatchSummary> {
    let finder = ExtensionFinder::for_extension(&config.extension)?;
    run_batch_with(config, &finder, reporter)
}

/// Same as [`run_batch`] with a caller supplied file finder
pub fn run_batch_with(
    config: &Config,
    finder: &dyn FileFinder,
    reporter: &mut dyn Reporter,
) -> Result<BatchSummary> {
    logging::log_config(config);
    reporter.report(Event::Configuration(config))?;
    reporter.report(Event::ScanStarted {
        directory: config.directory.as_path(),
    })?;

    let files = finder.find_files(&config.directory)?;
    logging::log_file_set(&files);
    reporter.report(Event::FilesFound {
        count: files.len(),
        extension: &config.extension,
    })?;

    let rewriter = for_strategy(config.strategy);
    let context = RewriteContext {
        rewriter: config.line_rewriter(),
        trial: config.trial,
    };

    let mut summary = BatchSummary::default();
    for path in &files {
        reporter.report(Event::FileStarted {
            path: path.as_path(),
        })?;
        let outcome = rewriter.rewrite(path, &context, reporter)?;
        logging::log_file_outcome(path, outcome.lines, outcome.rewritten, outcome.written);

        summary.processed += 1;
        summary.rewritten_lines += outcome.rewritten;
        if outcome.written {
            summary.written += 1;
        }
    }

    reporter.report(Event::BatchFinished {
        processed: summary.processed,
        trial: config.trial,
    })?;
    reporter.report(Event::Done)?;

    summary.files = files;
    Ok(summary)
}
