//! File discovery
//!
//! This module walks directory trees and collects the files
//! a batch run rewrites.

pub mod finder;

// Re-export commonly used items
pub use finder::{ExtensionFinder, FileFinder};
