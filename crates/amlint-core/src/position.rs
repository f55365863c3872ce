//! Source positions for document nodes and diagnostics.

use std::fmt;

/// A 1-based line/column location in the linted document.
///
/// The all-zero position ([`Position::NONE`]) marks something with no source
/// anchor, such as a file that could not be read or a section that is
/// missing from the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    /// The position of something that has no location in the document.
    pub const NONE: Position = Position { line: 0, column: 0 };

    /// Create a position from a 1-based line and column.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The 1-based line, or 0 when there is no anchor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 1-based column, or 0 when there is no anchor.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns `true` if this position has no source anchor.
    pub fn is_none(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
