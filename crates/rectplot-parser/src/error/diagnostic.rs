use thiserror::Error;

use crate::{
    error::{ErrorCode, Label},
    span::Span,
};

/// One problem found in an input line.
///
/// Every rejected line produces at least one diagnostic; input that parses
/// is accepted without comment, so there is no warning level.
///
/// ```
/// # use rectplot_parser::error::{Diagnostic, ErrorCode};
/// # use rectplot_parser::Span;
/// let diag = Diagnostic::error("expected 4 coordinates, found 3")
///     .with_code(ErrorCode::E100)
///     .with_label(Span::new(17..17), "missing 1 value here")
///     .with_help("enter left, right, back and front");
///
/// assert_eq!(diag.to_string(), "error[E100]: expected 4 coordinates, found 3");
/// assert_eq!(diag.primary_span(), Some(Span::new(17..17)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error{}: {message}", code_suffix(.code))]
pub struct Diagnostic {
    message: String,
    code: Option<ErrorCode>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn with_code(self, code: ErrorCode) -> Self {
        Self {
            code: Some(code),
            ..self
        }
    }

    /// Underlines `span` as the cause of the problem.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Underlines `span` as related context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
            ..self
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }
}

fn code_suffix(code: &Option<ErrorCode>) -> String {
    code.map(|code| format!("[{code}]")).unwrap_or_default()
}
