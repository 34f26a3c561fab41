//! Labeled spans attached to diagnostics.

use crate::span::Span;

/// Whether a label marks the cause of a diagnostic or adds context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// The main offending location, underlined with `^`.
    Primary,
    /// Additional context, e.g. further bad tokens on the same line.
    Secondary,
}

/// A message pinned to a span of the input line.
///
/// ```text
/// error[E101]: `4.3o` is not a number
///    |
///  1 | -0.70, 4.3o, -0.01, 3.78
///    |        ^^^^ expected a number
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    kind: LabelKind,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, LabelKind::Primary)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, LabelKind::Secondary)
    }

    fn new(span: Span, message: impl Into<String>, kind: LabelKind) -> Self {
        Self {
            span,
            message: message.into(),
            kind,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn is_primary(&self) -> bool {
        self.kind == LabelKind::Primary
    }
}
