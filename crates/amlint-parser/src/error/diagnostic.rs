//! The core diagnostic type for the amlint error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, a source position and help text.

use std::fmt;

use amlint_core::{
    position::Position,
    tree::{Node, Shape},
};

use crate::error::{ErrorCode, Severity};

/// A positioned, severity-leveled message about the linted document.
///
/// # Example
///
/// ```text
/// error[E200]: Unknown database reference: orders-db
///   --> architecture.yaml:14:9
///    |
/// 14 |       - orders-db
///    |         ^^^^^^^^^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    help: Option<String>,
    position: Position,
    source: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with no position.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic with no position.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an error about the document as a whole.
    ///
    /// File errors never carry a position.
    pub fn file_error(message: impl Into<String>) -> Self {
        Self::error(message)
    }

    /// Create an error anchored at `node`.
    pub fn node_error(message: impl Into<String>, node: &Node) -> Self {
        Self::error(message).at(node.position())
    }

    /// Create a warning anchored at `node`.
    pub fn node_warning(message: impl Into<String>, node: &Node) -> Self {
        Self::warning(message).at(node.position())
    }

    /// Create a type-mismatch error for `field`, anchored at `node`.
    ///
    /// # Example
    ///
    /// ```
    /// # use amlint_core::{position::Position, tree::{Node, Shape}};
    /// # use amlint_parser::error::Diagnostic;
    ///
    /// let node = Node::scalar("nope", Position::new(3, 11));
    /// let diag = Diagnostic::type_error("services", &node, Shape::Sequence);
    ///
    /// assert_eq!(diag.message(), "services must be a sequence, not a scalar");
    /// ```
    pub fn type_error(field: &str, node: &Node, expected: Shape) -> Self {
        Self::node_error(
            format!("{field} must be a {expected}, not a {}", node.shape()),
            node,
        )
        .with_code(ErrorCode::E100)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Get the position. [`Position::NONE`] when unanchored.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The 1-based line, or 0 when unanchored.
    pub fn line(&self) -> usize {
        self.position.line()
    }

    /// The 1-based column, or 0 when unanchored.
    pub fn column(&self) -> usize {
        self.position.column()
    }

    /// The name of the linted file, if the document came from one.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Set the position.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Attach the name of the linted file.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Create a new diagnostic with the given severity and message.
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            help: None,
            position: Position::NONE,
            source: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
