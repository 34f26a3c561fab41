//! Error types for rectplot operations.
//!
//! [`RectplotError`] covers everything that can go wrong between reading a
//! line of input and writing an image file.

use std::io;

use thiserror::Error;

use rectplot_core::{layout::ValidationError, rectangle::RectangleId};
use rectplot_parser::ParseError;

/// The main error type for rectplot operations.
///
/// The `Parse` variant keeps the offending input next to the structured
/// parse error so reporters can underline the bad token.
#[derive(Debug, Error)]
pub enum RectplotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("invalid rectangle: {0}")]
    Validation(#[from] ValidationError),

    /// The named operation needs at least one rectangle.
    #[error("no rectangles to {0}")]
    EmptySet(&'static str),

    #[error("no rectangle with id {0}")]
    UnknownRectangle(RectangleId),

    #[error("no rectangle at position {position}, there are {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("{0}")]
    Color(String),

    #[error("unsupported output format `{0}`, expected one of: svg, png, jpg, jpeg, pdf")]
    UnsupportedFormat(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::export::Error> for RectplotError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<ParseError> for RectplotError {
    fn from(err: ParseError) -> Self {
        let src = err.raw_input().to_string();
        Self::Parse { err, src }
    }
}

impl RectplotError {
    /// Returns `true` for errors that only mean "nothing to do".
    pub fn is_empty_set(&self) -> bool {
        matches!(self, Self::EmptySet(_))
    }
}
