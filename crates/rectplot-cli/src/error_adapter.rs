//! Error adapter for converting RectplotError to miette diagnostics.
//!
//! Parse errors keep their labeled spans, so the rendered report underlines
//! the offending token of the input line. Every diagnostic of a
//! [`rectplot_parser::ParseError`] is rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity, SourceSpan};

use rectplot::RectplotError;
use rectplot_parser::error::Diagnostic;

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// The input line the spans point into
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`RectplotError`] variants without source spans.
pub struct ErrorAdapter<'a>(pub &'a RectplotError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            RectplotError::Io(_) => "rectplot::io",
            RectplotError::Parse { .. } => return None,
            RectplotError::Validation(_) => "rectplot::validation",
            RectplotError::EmptySet(_) => "rectplot::empty",
            RectplotError::UnknownRectangle(_) | RectplotError::PositionOutOfRange { .. } => {
                "rectplot::session"
            }
            RectplotError::Color(_) => "rectplot::color",
            RectplotError::UnsupportedFormat(_) => "rectplot::format",
            RectplotError::Export(_) => "rectplot::export",
            RectplotError::Config(_) => "rectplot::config",
        };
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<Severity> {
        if self.0.is_empty_set() {
            Some(Severity::Warning)
        } else {
            Some(Severity::Error)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            RectplotError::Validation(_) => "coordinates must be finite numbers",
            RectplotError::EmptySet(_) => "add a rectangle first, e.g. `0 4 0 2`",
            RectplotError::PositionOutOfRange { .. } => "use `list` to see the rectangle numbers",
            RectplotError::UnsupportedFormat(_) => "use a .svg, .png, .jpg, .jpeg or .pdf file name",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn span_to_miette(span: rectplot_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// A diagnostic ready for miette to render.
pub type Reportable<'a> = Box<dyn MietteDiagnostic + 'a>;

/// Splits a [`RectplotError`] into reportable diagnostics.
///
/// A parse error yields one entry per diagnostic; every other variant
/// yields exactly one.
pub fn to_reportables(err: &RectplotError) -> Vec<Reportable<'_>> {
    match err {
        RectplotError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Box::new(DiagnosticAdapter::new(diag, src)) as Reportable<'_>)
            .collect(),
        _ => vec![Box::new(ErrorAdapter(err)) as Reportable<'_>],
    }
}

/// Renders every reportable of `err` with miette's graphical handler.
pub fn render_reports(err: &RectplotError) -> Vec<String> {
    let reporter = GraphicalReportHandler::new();
    to_reportables(err)
        .iter()
        .map(|reportable| {
            let mut writer = String::new();
            match reporter.render_report(&mut writer, reportable.as_ref()) {
                Ok(()) => writer,
                Err(_) => reportable.to_string(),
            }
        })
        .collect()
}
