//! Reporting
//!
//! This module handles user-facing run reports and the
//! structured diagnostic logging of the application.

pub mod logging;
pub mod reporter;

// Re-export commonly used items
pub use reporter::{Channel, ConsoleReporter, Event, RecordingReporter, Reporter};
