//! Writing rescaled files back to disk
//!
//! This module holds the side-car and buffered strategies that
//! apply the line rewriter to a file in place.

pub mod strategy;

// Re-export commonly used items
pub use strategy::{
    BufferedRewriter, FileOutcome, RewriteContext, RewriteFile, SideCarRewriter, for_strategy,
};
