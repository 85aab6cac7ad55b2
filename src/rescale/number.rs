//! Scaling and serialising individual numbers

use crate::core::error::{RescaleError, Result};

/// Multiplies coordinate tokens by a fixed factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    factor: f64,
    precision: Option<usize>,
}

impl Scaler {
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            precision: None,
        }
    }

    /// Serialise scaled floats with a fixed number of decimals
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Scale an integer token. The product is computed in floating point and
    /// truncated toward zero, never rounded.
    pub fn scale_integer(&self, token: &str) -> Result<String> {
        let value: i64 = token.parse().map_err(|_| RescaleError::InvalidNumber {
            token: token.to_string(),
            expected: "integer",
        })?;
        let scaled = (value as f64 * self.factor).trunc() as i64;
        Ok(scaled.to_string())
    }

    /// Scale a floating point token.
    pub fn scale_float(&self, token: &str) -> Result<String> {
        let value: f64 = token.parse().map_err(|_| RescaleError::InvalidNumber {
            token: token.to_string(),
            expected: "float",
        })?;
        Ok(format_float(value * self.factor, self.precision))
    }
}

/// Format a float the way it reads back: the shortest round-trip form, which
/// always keeps a decimal point for integral values (`6.0`), or a fixed
/// number of decimals when a precision is given.
pub fn format_float(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => format!("{value:?}"),
    }
}
