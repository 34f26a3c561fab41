//! Error codes for input diagnostics.
//!
//! - `E1xx` - Coordinate and command line errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Wrong number of coordinates.
    ///
    /// A rectangle needs exactly four values: left, right, back, front.
    E100,

    /// Invalid number.
    ///
    /// A token on a coordinate line could not be read as a number.
    E101,

    /// Empty input.
    ///
    /// The line contained nothing but whitespace and separators.
    E102,

    /// Invalid command argument.
    ///
    /// A command received a missing, malformed or unexpected argument,
    /// such as `remove` without an index.
    E103,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "wrong number of coordinates",
            ErrorCode::E101 => "invalid number",
            ErrorCode::E102 => "empty input",
            ErrorCode::E103 => "invalid command argument",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E103.as_str(), "E103");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "invalid number");
        assert_eq!(ErrorCode::E102.description(), "empty input");
    }
}
