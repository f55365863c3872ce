//! Error adapter for converting amlint results to miette diagnostics.
//!
//! This module provides the bridge between the library's diagnostic values
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A failed run carries every diagnostic it produced; each one is rendered
//! independently. Diagnostics are positioned by line and column, which are
//! mapped back to a byte span of the linted text.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity as MietteSeverity,
    SourceSpan,
};

use amlint::{AmlintError, Diagnostic, Severity, position::Position};

/// Adapter for a single amlint diagnostic.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Source text for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }

    fn span(&self) -> Option<SourceSpan> {
        position_to_span(self.src, self.diag.position())
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
        match self.diag.source() {
            Some(source) if self.span().is_none() => {
                write!(f, "{}: {}", source, self.diag.message())
            }
            _ => write!(f, "{}", self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.span()?;
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span()?;
        let label = self
            .diag
            .source()
            .map(|source| format!("{source}:{}", self.diag.position()));
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(label, span),
        )))
    }
}

/// Adapter for [`AmlintError`] variants that carry no diagnostics.
pub struct ErrorAdapter<'a>(pub &'a AmlintError);

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
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AmlintError::Io(_) => "amlint::io",
            AmlintError::Config(_) => "amlint::config",
            AmlintError::Lint { .. } => "amlint::lint",
        };
        Some(Box::new(code))
    }
}

/// One item of a CLI failure report: a lint diagnostic or an operational
/// error.
#[derive(Debug)]
pub enum Reportable<'a> {
    Diagnostic(DiagnosticAdapter<'a>),
    Error(ErrorAdapter<'a>),
}

impl<'a> Reportable<'a> {
    fn inner(&self) -> &(dyn MietteDiagnostic + 'a) {
        match self {
            Reportable::Diagnostic(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn severity(&self) -> Option<MietteSeverity> {
        self.inner().severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

/// Map a 1-based line/column position to a span of `src`.
///
/// The span covers the token starting at the position. Returns `None` for
/// unpositioned diagnostics and positions outside `src`.
fn position_to_span(src: &str, position: Position) -> Option<SourceSpan> {
    if position.is_none() {
        return None;
    }
    let mut offset = 0;
    let mut lines = src.split_inclusive('\n');
    for _ in 1..position.line() {
        offset += lines.next()?.len();
    }
    let line = lines.next()?;

    let (column, _) = line.char_indices().nth(position.column().saturating_sub(1))?;
    let rest = &line[column..];
    let token = rest
        .find(|c: char| matches!(c, '\n' | '\r' | ',' | ']' | '}' | '#' | ':'))
        .unwrap_or(rest.len());
    let len = rest[..token].trim_end().len();
    Some(SourceSpan::new((offset + column).into(), len))
}

/// Convert an [`AmlintError`] into a list of reportable errors.
///
/// For [`AmlintError::Lint`], this returns one [`Reportable`] for each
/// diagnostic of the failed run. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &AmlintError) -> Vec<Reportable<'_>> {
    match err {
        AmlintError::Lint { diagnostics, src } => diagnostics
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render one reportable with miette's graphical handler.
pub fn render(reportable: &Reportable<'_>) -> String {
    let mut writer = String::new();
    if GraphicalReportHandler::new()
        .render_report(&mut writer, reportable)
        .is_err()
    {
        return reportable.to_string();
    }
    writer
}
