//! User-facing progress reporting for batch runs

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::config::{Config, Verbosity};
use crate::core::constants::messages;
use crate::rescale::bbox::split_terminator;

/// Where an event is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Shown unless quiet
    Summary,
    /// Shown only when verbose
    Progress,
    /// Shown only in debug mode, regardless of verbosity
    Debug,
}

/// Something worth telling the user about during a run
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Configuration(&'a Config),
    ScanStarted {
        directory: &'a Path,
    },
    FilesFound {
        count: usize,
        extension: &'a str,
    },
    FileStarted {
        path: &'a Path,
    },
    Rewriting {
        source: &'a Path,
        sidecar: Option<&'a Path>,
    },
    LineRewritten {
        line: &'a str,
    },
    BatchFinished {
        processed: usize,
        trial: bool,
    },
    Done,
}

impl Event<'_> {
    pub fn channel(&self) -> Channel {
        match self {
            Event::ScanStarted { .. }
            | Event::FilesFound { .. }
            | Event::BatchFinished { .. }
            | Event::Done => Channel::Summary,
            Event::Rewriting { .. } => Channel::Progress,
            Event::Configuration(_) | Event::FileStarted { .. } | Event::LineRewritten { .. } => {
                Channel::Debug
            }
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Configuration(config) => write!(f, "Configuration:\n{config}"),
            Event::ScanStarted { directory } => {
                write!(f, "- Processing XBB files in '{}'", directory.display())
            }
            Event::FilesFound { count, extension } => {
                write!(f, "- Found {count} {extension} files to process.")
            }
            Event::FileStarted { path } => write!(
                f,
                "--- File: {}\n{}",
                path.display(),
                messages::DEBUG_SEPARATOR
            ),
            Event::Rewriting {
                source,
                sidecar: Some(sidecar),
            } => write!(
                f,
                "- Processing \"{}\" to \"{}\"",
                source.display(),
                sidecar.display()
            ),
            Event::Rewriting {
                source,
                sidecar: None,
            } => write!(f, "- Processing \"{}\"", source.display()),
            Event::LineRewritten { line } => write!(f, "{}", split_terminator(line).0),
            Event::BatchFinished { processed, trial } => write!(
                f,
                "- Processed {processed} files{}.",
                if *trial { messages::TRIAL_NOTICE } else { "" }
            ),
            Event::Done => write!(f, "- Done."),
        }
    }
}

/// Receives events from a batch run. A failed report is as fatal as any
/// other I/O error.
pub trait Reporter {
    fn report(&mut self, event: Event<'_>) -> io::Result<()>;
}

/// Writes events to a stream, filtered by verbosity and debug mode
pub struct ConsoleReporter<W: Write> {
    verbosity: Verbosity,
    debug: bool,
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(config: &Config) -> Self {
        Self::new(config.verbosity, config.debug, io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(verbosity: Verbosity, debug: bool, out: W) -> Self {
        Self {
            verbosity,
            debug,
            out,
        }
    }

    pub fn should_show(&self, channel: Channel) -> bool {
        match channel {
            Channel::Summary => self.verbosity.shows_summary(),
            Channel::Progress => self.verbosity.shows_progress(),
            Channel::Debug => self.debug,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: Event<'_>) -> io::Result<()> {
        if !self.should_show(event.channel()) {
            return Ok(());
        }
        writeln!(self.out, "{event}")
    }
}

/// Collects rendered events, used where output is inspected instead of shown
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub lines: Vec<(Channel, String)>,
}

impl RecordingReporter {
    pub fn messages(&self, channel: Channel) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: Event<'_>) -> io::Result<()> {
        self.lines.push((event.channel(), event.to_string()));
        Ok(())
    }
}
