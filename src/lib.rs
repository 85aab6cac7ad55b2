//! Rescaling tools for LaTeX generated ebooks.
//!
//! `resize-xbb` multiplies the coordinates of `%%BoundingBox` and
//! `%%HiResBoundingBox` lines in `.xbb` files below a directory, and
//! `resize-html-imgs` multiplies `width`/`height` attributes in HTML read
//! from stdin.

pub mod batch;
pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod rescale;
pub mod rewrite;
pub mod ui;

// Re-export commonly used items for convenience
pub use batch::{BatchSummary, run_batch};
pub use config::{Config, Verbosity, WriteStrategy};
pub use crate::core::{RescaleError, Result};
pub use rescale::{LineRewriter, Scaler, rescale_dimensions};
