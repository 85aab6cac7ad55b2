//! HTML `width`/`height` attribute rescaling

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use std::borrow::Cow;

use crate::rescale::number::format_float;

const DIMENSION_PATTERN: &str = r#"((?:width|height)=["'])([0-9]+\.[0-9]+)"#;

static DIMENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DIMENSION_PATTERN).expect("Failed to compile dimension regex pattern")
});

/// Multiply every decimal `width="..."`/`height='...'` value by `factor`.
///
/// Only the number is replaced; quotes, units and all other markup stay
/// byte-identical. Integral attribute values (`width="10"`) are left alone.
pub fn rescale_dimensions(source: &str, factor: f64) -> Cow<'_, str> {
    DIMENSION_REGEX.replace_all(source, |caps: &Captures| {
        // The pattern only admits digits around a single dot.
        let value: f64 = caps[2].parse().unwrap_or_default();
        format!("{}{}", &caps[1], format_float(value * factor, None))
    })
}
