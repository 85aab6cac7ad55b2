//! Per-file rewrite strategies
//!
//! Both strategies share the same line rewriter, so they produce identical
//! bytes; they only differ in how those bytes reach the disk.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::WriteStrategy;
use crate::core::constants::defaults;
use crate::core::error::Result;
use crate::reporting::logging;
use crate::reporting::{Event, Reporter};
use crate::rescale::LineRewriter;

/// What happened to a single file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOutcome {
    /// Lines read from the source
    pub lines: usize,
    /// Lines that carried a bounding box marker
    pub rewritten: usize,
    /// Whether the original file was replaced
    pub written: bool,
}

/// Settings shared by every file of a run
#[derive(Debug, Clone, Copy)]
pub struct RewriteContext {
    pub rewriter: LineRewriter,
    pub trial: bool,
}

pub trait RewriteFile {
    fn rewrite(
        &self,
        path: &Path,
        context: &RewriteContext,
        reporter: &mut dyn Reporter,
    ) -> Result<FileOutcome>;
}

/// Pick the rewriter for a configured strategy
pub fn for_strategy(strategy: WriteStrategy) -> Box<dyn RewriteFile> {
    match strategy {
        WriteStrategy::SideCar => Box::new(SideCarRewriter),
        WriteStrategy::Buffered => Box::new(BufferedRewriter),
    }
}

fn rewrite_one<'a>(
    path: &Path,
    context: &RewriteContext,
    line_number: usize,
    line: &'a str,
    outcome: &mut FileOutcome,
    reporter: &mut dyn Reporter,
) -> Result<Cow<'a, str>> {
    let rewritten = context
        .rewriter
        .rewrite_line(line)
        .map_err(|e| e.at_line(path, line_number))?;

    outcome.lines += 1;
    if let Cow::Owned(ref new_line) = rewritten {
        outcome.rewritten += 1;
        logging::log_line(path, line_number, new_line);
    }
    reporter.report(Event::LineRewritten { line: &rewritten })?;

    Ok(rewritten)
}

/// Streams the source into a side-car file next to it, then atomically
/// renames the side-car over the original. In trial mode lines are only
/// computed and no side-car file is created; progress still names the
/// `<stem>.ybb` file a real run would write through.
#[derive(Debug, Default, Clone, Copy)]
pub struct SideCarRewriter;

impl SideCarRewriter {
    fn create_sidecar(path: &Path) -> Result<NamedTempFile> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix = format!("{stem}.");
        let suffix = format!(".{}", defaults::SIDECAR_EXTENSION);

        let sidecar = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(&suffix)
            .tempfile_in(dir)?;

        // Keep the original's mode once the side-car replaces it
        fs::set_permissions(sidecar.path(), fs::metadata(path)?.permissions())?;

        Ok(sidecar)
    }
}

impl RewriteFile for SideCarRewriter {
    fn rewrite(
        &self,
        path: &Path,
        context: &RewriteContext,
        reporter: &mut dyn Reporter,
    ) -> Result<FileOutcome> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut sidecar = if context.trial {
            None
        } else {
            Some(Self::create_sidecar(path)?)
        };

        // Trial mode names the side-car a real run would use
        let planned;
        let sidecar_path = match sidecar.as_ref() {
            Some(file) => file.path(),
            None => {
                planned = path.with_extension(defaults::SIDECAR_EXTENSION);
                planned.as_path()
            }
        };
        reporter.report(Event::Rewriting {
            source: path,
            sidecar: Some(sidecar_path),
        })?;

        let mut outcome = FileOutcome::default();
        {
            let mut writer: Box<dyn Write + '_> = match sidecar.as_mut() {
                Some(file) => Box::new(BufWriter::new(file.as_file_mut())),
                None => Box::new(io::sink()),
            };

            let mut line = String::new();
            loop {
                line.clear();
                if reader.read_line(&mut line)? == 0 {
                    break;
                }
                let line_number = outcome.lines + 1;
                let rewritten =
                    rewrite_one(path, context, line_number, &line, &mut outcome, reporter)?;
                writer.write_all(rewritten.as_bytes())?;
            }
            writer.flush()?;
        }

        // A side-car that is not persisted is deleted on drop
        if let Some(file) = sidecar {
            file.persist(path)?;
            outcome.written = true;
        }

        Ok(outcome)
    }
}

/// Reads the whole file, rewrites it in memory and overwrites the original.
#[derive(Debug, Default, Clone, Copy)]
pub struct BufferedRewriter;

impl RewriteFile for BufferedRewriter {
    fn rewrite(
        &self,
        path: &Path,
        context: &RewriteContext,
        reporter: &mut dyn Reporter,
    ) -> Result<FileOutcome> {
        let content = fs::read_to_string(path)?;
        reporter.report(Event::Rewriting {
            source: path,
            sidecar: None,
        })?;

        let mut outcome = FileOutcome::default();
        let mut output = String::with_capacity(content.len());
        for (index, line) in content.split_inclusive('\n').enumerate() {
            let rewritten = rewrite_one(path, context, index + 1, line, &mut outcome, reporter)?;
            output.push_str(&rewritten);
        }

        if !context.trial {
            fs::write(path, output)?;
            outcome.written = true;
        }

        Ok(outcome)
    }
}
