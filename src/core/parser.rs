//! Parser for the wilderness level widget.
//!
//! The host exposes the wilderness depth only as widget text such as
//! `Level: 12`.

use regex::Regex;
use thiserror::Error;

pub const DEPTH_LABEL_PREFIX: &str = "Level: ";

/// Reasons a depth label could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no wilderness level label available")]
    MissingLabel,

    #[error("label {0:?} does not start with \"Level: \"")]
    MissingPrefix(String),

    #[error("wilderness level {0:?} is not an integer")]
    InvalidNumber(String),
}

/// Parser for wilderness depth labels.
pub struct DepthLabelParser {
    label_regex: Regex,
}

impl DepthLabelParser {
    pub fn new() -> Self {
        // Pattern: Level: 12
        let label_regex = Regex::new(&format!(r"^{}(.*)$", regex::escape(DEPTH_LABEL_PREFIX)))
            .expect("Invalid depth label regex");

        Self { label_regex }
    }

    /// Parse a label into a wilderness depth.
    pub fn parse(&self, label: &str) -> Result<i32, ParseError> {
        let caps = self
            .label_regex
            .captures(label)
            .ok_or_else(|| ParseError::MissingPrefix(label.to_string()))?;
        let remainder = caps.get(1).map_or("", |m| m.as_str());

        remainder
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidNumber(remainder.to_string()))
    }

    /// Parse an optional label, treating any failure as depth 0.
    pub fn depth_or_zero(&self, label: Option<&str>) -> i32 {
        let result = label
            .ok_or(ParseError::MissingLabel)
            .and_then(|label| self.parse(label));

        match result {
            Ok(depth) => depth,
            Err(e) => {
                log::debug!("Ignoring wilderness depth: {}", e);
                0
            }
        }
    }
}

impl Default for DepthLabelParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_depth() {
        let parser = DepthLabelParser::new();
        assert_eq!(parser.parse("Level: 7"), Ok(7));
        assert_eq!(parser.parse("Level: 56"), Ok(56));
    }

    #[test]
    fn test_prefix_without_digits_fails() {
        let parser = DepthLabelParser::new();
        assert_eq!(
            parser.parse("Level: "),
            Err(ParseError::InvalidNumber(String::new()))
        );
        assert!(matches!(
            parser.parse("Level: 1-5"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_unexpected_format_fails() {
        let parser = DepthLabelParser::new();
        assert!(matches!(parser.parse(""), Err(ParseError::MissingPrefix(_))));
        assert!(matches!(
            parser.parse("Wilderness 12"),
            Err(ParseError::MissingPrefix(_))
        ));
    }

    #[test]
    fn test_surrounding_whitespace_fails() {
        let parser = DepthLabelParser::new();
        assert!(matches!(parser.parse("  Level: 7"), Err(ParseError::MissingPrefix(_))));
        assert_eq!(
            parser.parse("Level: 7 "),
            Err(ParseError::InvalidNumber("7 ".to_string()))
        );
        assert_eq!(parser.parse("Level: -5"), Ok(-5));
    }

    #[test]
    fn test_failures_recover_as_zero() {
        let parser = DepthLabelParser::new();
        assert_eq!(parser.depth_or_zero(Some("Level: 20")), 20);
        assert_eq!(parser.depth_or_zero(Some("Level: ")), 0);
        assert_eq!(parser.depth_or_zero(None), 0);
    }
}
