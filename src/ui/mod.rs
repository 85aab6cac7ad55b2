//! User interface
//!
//! This module contains the command-line definitions of the
//! bounding box rescaler.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
