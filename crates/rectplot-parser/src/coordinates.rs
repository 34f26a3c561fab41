//! Parsing of coordinate lines into [`Coords`].

use log::debug;
use rectplot_core::rectangle::Coords;

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    lexer::{self, Token},
    span::Span,
};

/// Number of values on a coordinate line: left, right, back, front.
pub const COORDINATE_COUNT: usize = 4;

const COORDINATE_HELP: &str =
    "enter four numbers: left right back front (e.g. `-0.70, 4.30, -0.01, 3.78`)";

/// Parses a line of four numbers into raw coordinates.
///
/// Values may be separated by whitespace, commas or both. Values are taken
/// as written; ordering and finiteness are checked later, when the
/// rectangle is created.
///
/// # Errors
///
/// - [`ErrorCode::E102`] when the line holds no values at all
/// - [`ErrorCode::E101`] when a value is not a number
/// - [`ErrorCode::E100`] when there are not exactly four values
///
/// # Examples
///
/// ```
/// # use rectplot_parser::parse_coordinates;
/// let with_commas = parse_coordinates("-0.70, 4.30, -0.01, 3.78").unwrap();
/// let with_spaces = parse_coordinates("-0.70 4.30 -0.01 3.78").unwrap();
/// assert_eq!(with_commas, with_spaces);
/// assert_eq!(with_commas.left(), -0.70);
/// ```
pub fn parse_coordinates(line: &str) -> Result<Coords, ParseError> {
    let tokens = lexer::tokenize(line);
    coords_from_tokens(line, &tokens)
}

pub(crate) fn coords_from_tokens(line: &str, tokens: &[Token<'_>]) -> Result<Coords, ParseError> {
    if tokens.is_empty() {
        let diag = Diagnostic::error("empty input")
            .with_code(ErrorCode::E102)
            .with_label(Span::new(0..line.len()), "no coordinates given")
            .with_help(COORDINATE_HELP);
        return Err(ParseError::from_diagnostic(diag, line));
    }

    let mut values = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();
    for token in tokens {
        match token.text.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => invalid.push(token),
        }
    }

    if let Some((first, rest)) = invalid.split_first() {
        let message = if rest.is_empty() {
            format!("`{}` is not a number", first.text)
        } else {
            format!("{} values are not numbers", invalid.len())
        };
        let diag = rest.iter().fold(
            Diagnostic::error(message)
                .with_code(ErrorCode::E101)
                .with_label(first.span, "expected a number"),
            |diag, token| diag.with_secondary_label(token.span, "also not a number"),
        );
        debug!(input = line, invalid = invalid.len(); "Rejected coordinate line");
        return Err(ParseError::from_diagnostic(
            diag.with_help(COORDINATE_HELP),
            line,
        ));
    }

    match values.as_slice() {
        &[left, right, back, front] => Ok(Coords::new(left, right, back, front)),
        _ => Err(ParseError::from_diagnostic(
            wrong_count(line, tokens),
            line,
        )),
    }
}

fn wrong_count(line: &str, tokens: &[Token<'_>]) -> Diagnostic {
    let found = tokens.len();
    let diag = Diagnostic::error(format!(
        "expected {COORDINATE_COUNT} coordinates, found {found}"
    ))
    .with_code(ErrorCode::E100)
    .with_help(COORDINATE_HELP);

    if found > COORDINATE_COUNT {
        let extra = tokens[COORDINATE_COUNT]
            .span
            .union(tokens[found - 1].span);
        let noun = if found - COORDINATE_COUNT == 1 { "value" } else { "values" };
        diag.with_label(extra, format!("unexpected extra {noun}"))
    } else {
        let missing = COORDINATE_COUNT - found;
        let end = line.trim_end().len();
        let noun = if missing == 1 { "value" } else { "values" };
        diag.with_label(Span::new(end..end), format!("missing {missing} {noun}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates_commas_and_spaces() {
        let coords = parse_coordinates("-0.70, 4.30, -0.01, 3.78").unwrap();
        assert_eq!(coords, Coords::new(-0.70, 4.30, -0.01, 3.78));
        assert_eq!(parse_coordinates("-0.70 4.30 -0.01 3.78").unwrap(), coords);
        assert_eq!(parse_coordinates("-0.70,4.30,-0.01,3.78").unwrap(), coords);
    }

    #[test]
    fn test_parse_coordinates_keeps_order_as_written() {
        let coords = parse_coordinates("5 1 6 2").unwrap();
        assert_eq!(coords.left(), 5.0);
        assert_eq!(coords.right(), 1.0);
    }

    #[test]
    fn test_parse_coordinates_scientific_and_signs() {
        let coords = parse_coordinates("+1e1 .5 -2. 3E-1").unwrap();
        assert_eq!(coords, Coords::new(10.0, 0.5, -2.0, 0.3));
    }

    #[test]
    fn test_parse_coordinates_empty() {
        for line in ["", "   ", " , ,"] {
            let err = parse_coordinates(line).unwrap_err();
            assert_eq!(err.code(), Some(ErrorCode::E102), "{line:?}");
            assert_eq!(err.raw_input(), line);
        }
    }

    #[test]
    fn test_parse_coordinates_non_numeric() {
        let err = parse_coordinates("-0.70, 4.3o, -0.01, 3.78").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert_eq!(err.reason(), "`4.3o` is not a number");
        assert_eq!(err.span(), Some(Span::new(7..11)));
    }

    #[test]
    fn test_parse_coordinates_several_non_numeric() {
        let err = parse_coordinates("a 1 b").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert_eq!(err.reason(), "2 values are not numbers");
        assert_eq!(err.diagnostics()[0].labels().len(), 2);
    }

    #[test]
    fn test_parse_coordinates_too_few() {
        let err = parse_coordinates("1 2 3 ").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.reason(), "expected 4 coordinates, found 3");
        assert_eq!(err.span(), Some(Span::new(5..5)));
        assert_eq!(err.diagnostics()[0].labels()[0].message(), "missing 1 value");
    }

    #[test]
    fn test_parse_coordinates_too_many() {
        let err = parse_coordinates("1 2 3 4 5 6").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.span(), Some(Span::new(8..11)));
        assert_eq!(
            err.diagnostics()[0].labels()[0].message(),
            "unexpected extra values"
        );
    }

    #[test]
    fn test_parse_coordinates_accepts_non_finite_words() {
        // Rejected later by rectangle validation, not by the parser
        let coords = parse_coordinates("inf 1 NaN 2").unwrap();
        assert!(coords.left().is_infinite());
        assert!(coords.back().is_nan());
    }
}
