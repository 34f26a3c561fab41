//! Diagnostics for coordinate and command lines.
//!
//! A [`Diagnostic`] describes one problem with an error code, labeled spans
//! and optional help. [`ParseError`] bundles diagnostics with the raw input
//! line so a reporter can underline the offending tokens.
//!
//! # Example
//!
//! ```
//! # use rectplot_parser::error::{Diagnostic, ErrorCode};
//! # use rectplot_parser::Span;
//! let diag = Diagnostic::error("`abc` is not a number")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(6..9), "expected a number")
//!     .with_help("coordinates are written like `-0.70` or `4.3`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelKind};
pub use parse_error::ParseError;
