//! The error returned by the line parsers.

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Error returned when a line cannot be parsed.
///
/// Carries the diagnostics describing what went wrong together with the raw
/// input line, so callers can render the offending tokens in context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.diagnostics))]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
    raw_input: String,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>, raw_input: impl Into<String>) -> Self {
        Self {
            diagnostics,
            raw_input: raw_input.into(),
        }
    }

    /// Wraps a single diagnostic.
    pub fn from_diagnostic(diagnostic: Diagnostic, raw_input: impl Into<String>) -> Self {
        Self::new(vec![diagnostic], raw_input)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The line exactly as it was given to the parser.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Human readable reason of the first diagnostic.
    pub fn reason(&self) -> &str {
        self.diagnostics
            .first()
            .map(Diagnostic::message)
            .unwrap_or("invalid input")
    }

    /// Error code of the first diagnostic.
    pub fn code(&self) -> Option<ErrorCode> {
        self.diagnostics.first().and_then(Diagnostic::code)
    }

    /// Primary span of the first diagnostic.
    pub fn span(&self) -> Option<Span> {
        self.diagnostics.first().and_then(Diagnostic::primary_span)
    }
}

/// First diagnostic, with a count of the ones after it.
fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => String::new(),
        [first] => first.to_string(),
        [first, rest @ ..] => format!("{first} (+{} more)", rest.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_accessors() {
        let diag = Diagnostic::error("`x` is not a number")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(2..3), "expected a number");
        let err = ParseError::from_diagnostic(diag, "1 x 3 4");

        assert_eq!(err.reason(), "`x` is not a number");
        assert_eq!(err.raw_input(), "1 x 3 4");
        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert_eq!(err.span(), Some(Span::new(2..3)));
    }

    #[test]
    fn test_parse_error_display_single() {
        let err = ParseError::from_diagnostic(Diagnostic::error("empty input"), "");
        assert_eq!(err.to_string(), "error: empty input");
    }

    #[test]
    fn test_parse_error_display_multiple() {
        let err = ParseError::new(
            vec![Diagnostic::error("first"), Diagnostic::error("second")],
            "",
        );
        assert_eq!(err.to_string(), "error: first (+1 more)");
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let diag = Diagnostic::error("empty input").with_code(ErrorCode::E102);
        let err: Box<dyn std::error::Error> = Box::new(ParseError::from_diagnostic(diag, ""));
        assert_eq!(err.to_string(), "error[E102]: empty input");
        assert!(err.source().is_none());
    }
}
