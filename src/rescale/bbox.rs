//! Bounding box line classification and rewriting

use std::borrow::Cow;

use crate::core::constants::markers;
use crate::core::error::Result;
use crate::rescale::number::Scaler;

/// Recognized bounding box comment kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `%%BoundingBox: ` with integer coordinates
    BoundingBox,
    /// `%%HiResBoundingBox: ` with float coordinates
    HiResBoundingBox,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::BoundingBox, Marker::HiResBoundingBox];

    pub fn prefix(self) -> &'static str {
        match self {
            Marker::BoundingBox => markers::BOUNDING_BOX,
            Marker::HiResBoundingBox => markers::HIRES_BOUNDING_BOX,
        }
    }

    /// Classify a line by its prefix, `None` for lines passed through verbatim
    pub fn classify(line: &str) -> Option<Marker> {
        Self::ALL
            .into_iter()
            .find(|marker| line.starts_with(marker.prefix()))
    }

    fn scale(self, scaler: &Scaler, token: &str) -> Result<String> {
        match self {
            Marker::BoundingBox => scaler.scale_integer(token),
            Marker::HiResBoundingBox => scaler.scale_float(token),
        }
    }
}

/// Split a line into its body and terminator (`"\n"`, `"\r\n"` or `""`)
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Rewrites bounding box lines, leaving every other line untouched.
#[derive(Debug, Clone, Copy)]
pub struct LineRewriter {
    scaler: Scaler,
}

impl LineRewriter {
    pub fn new(scaler: Scaler) -> Self {
        Self { scaler }
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    /// Rewrite one line including its terminator. The terminator is kept as
    /// is, so a final line without one never gains one.
    pub fn rewrite_line<'a>(&self, line: &'a str) -> Result<Cow<'a, str>> {
        let (body, terminator) = split_terminator(line);
        let Some(marker) = Marker::classify(body) else {
            return Ok(Cow::Borrowed(line));
        };

        let values = body[marker.prefix().len()..]
            .split_whitespace()
            .map(|token| marker.scale(&self.scaler, token))
            .collect::<Result<Vec<_>>>()?;

        Ok(Cow::Owned(format!(
            "{}{}{}",
            marker.prefix(),
            values.join(" "),
            terminator
        )))
    }

    /// Rewrite a whole document. Errors carry no location; callers that know
    /// the file attach it.
    pub fn rewrite_content(&self, content: &str) -> Result<String> {
        let mut output = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            output.push_str(&self.rewrite_line(line)?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn rewriter(factor: f64) -> LineRewriter {
        LineRewriter::new(Scaler::new(factor))
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            Marker::classify("%%BoundingBox: 0 0 10 10"),
            Some(Marker::BoundingBox)
        );
        assert_eq!(
            Marker::classify("%%HiResBoundingBox: 0.0 0.0 1.5 2.5"),
            Some(Marker::HiResBoundingBox)
        );
        assert_eq!(Marker::classify("%%BoundingBox:0 0 1 1"), None);
        assert_eq!(Marker::classify(" %%BoundingBox: 0 0 1 1"), None);
        assert_eq!(Marker::classify("%%Title: figure.png"), None);
    }

    #[test]
    fn test_split_terminator() {
        assert_eq!(split_terminator("abc\n"), ("abc", "\n"));
        assert_eq!(split_terminator("abc\r\n"), ("abc", "\r\n"));
        assert_eq!(split_terminator("abc"), ("abc", ""));
        assert_eq!(split_terminator(""), ("", ""));
    }

    #[test]
    fn test_rewrite_line__bounding_box() -> TestResult {
        let actual = rewriter(3.0).rewrite_line("%%BoundingBox: 1 2 3 4\n")?;

        assert_eq!(actual, "%%BoundingBox: 3 6 9 12\n");
        Ok(())
    }

    #[test]
    fn test_rewrite_line__hires_bounding_box() -> TestResult {
        let actual = rewriter(3.0).rewrite_line("%%HiResBoundingBox: 1.0 2.0 3.0 4.0\n")?;

        assert_eq!(actual, "%%HiResBoundingBox: 3.0 6.0 9.0 12.0\n");
        Ok(())
    }

    #[test]
    fn test_rewrite_line__collapses_token_whitespace() -> TestResult {
        let actual = rewriter(2.0).rewrite_line("%%BoundingBox:   0\t0  72 144  \n")?;

        assert_eq!(actual, "%%BoundingBox: 0 0 144 288\n");
        Ok(())
    }

    #[test]
    fn test_rewrite_line__preserves_missing_terminator() -> TestResult {
        let actual = rewriter(2.0).rewrite_line("%%BoundingBox: 1 1 1 1")?;

        assert_eq!(actual, "%%BoundingBox: 2 2 2 2");
        Ok(())
    }

    #[test]
    fn test_rewrite_line__preserves_crlf() -> TestResult {
        let actual = rewriter(2.0).rewrite_line("%%HiResBoundingBox: 0.5 0.5 1 1\r\n")?;

        assert_eq!(actual, "%%HiResBoundingBox: 1.0 1.0 2.0 2.0\r\n");
        Ok(())
    }

    #[test]
    fn test_rewrite_line__unmatched_is_borrowed_verbatim() -> TestResult {
        let line = "  %%Creator: ebb  \t\n";
        let actual = rewriter(2.0).rewrite_line(line)?;

        assert!(matches!(actual, Cow::Borrowed(_)));
        assert_eq!(actual, line);
        Ok(())
    }

    #[test]
    fn test_rewrite_line__no_tokens() -> TestResult {
        let actual = rewriter(2.0).rewrite_line("%%BoundingBox: \n")?;

        assert_eq!(actual, "%%BoundingBox: \n");
        Ok(())
    }

    #[test]
    fn test_rewrite_line__invalid_token() {
        let result = rewriter(2.0).rewrite_line("%%BoundingBox: 1 2 x 4\n");

        assert_eq!(
            result.unwrap_err().to_string(),
            "'x' is not a valid integer"
        );
    }

    #[test]
    fn test_rewrite_content__scenario() -> TestResult {
        let input = "%%BoundingBox: 1 2 3 4\n%%HiResBoundingBox: 1.0 2.0 3.0 4.0\nOther\n";

        let actual = rewriter(3.0).rewrite_content(input)?;

        assert_eq!(
            actual,
            "%%BoundingBox: 3 6 9 12\n%%HiResBoundingBox: 3.0 6.0 9.0 12.0\nOther\n"
        );
        Ok(())
    }

    #[test]
    fn test_rewrite_content__is_not_idempotent() -> TestResult {
        let rewriter = rewriter(2.0);
        let once = rewriter.rewrite_content("%%BoundingBox: 10 10 10 10\n")?;
        let twice = rewriter.rewrite_content(&once)?;

        assert_eq!(once, "%%BoundingBox: 20 20 20 20\n");
        assert_eq!(twice, "%%BoundingBox: 40 40 40 40\n");
        Ok(())
    }

    #[test]
    fn test_rewrite_content__empty_and_unterminated() -> TestResult {
        let rewriter = rewriter(2.0);

        assert_eq!(rewriter.rewrite_content("")?, "");
        assert_eq!(
            rewriter.rewrite_content("%%Title: x\n%%BoundingBox: 5 5 5 5")?,
            "%%Title: x\n%%BoundingBox: 10 10 10 10"
        );
        Ok(())
    }
}
