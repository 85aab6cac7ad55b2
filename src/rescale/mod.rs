//! Numeric rescaling of text
//!
//! Pure, I/O free transformations: bounding box comment lines in `.xbb`
//! files and `width`/`height` attributes in HTML markup.

pub mod bbox;
pub mod dimensions;
pub mod number;

// Re-export commonly used items
pub use bbox::{LineRewriter, Marker};
pub use dimensions::rescale_dimensions;
pub use number::{Scaler, format_float};
