//! Error types for amlint operations.
//!
//! This module provides the main error type [`AmlintError`]. Lint findings
//! are diagnostics, not errors; they only become an [`AmlintError::Lint`]
//! once a run is judged to have failed.

use std::io;

use thiserror::Error;

use amlint_parser::Diagnostic;

/// The main error type for amlint operations.
///
/// # Diagnostic Variants
///
/// The `Lint` variant carries every diagnostic of the failed run together
/// with the linted text, so a renderer can point into the source.
#[derive(Debug, Error)]
pub enum AmlintError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{}", summary(diagnostics))]
    Lint {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },
}

impl AmlintError {
    /// Create a new `Lint` error with the associated source text.
    pub fn new_lint_error(diagnostics: Vec<Diagnostic>, src: impl Into<String>) -> Self {
        Self::Lint {
            diagnostics,
            src: src.into(),
        }
    }
}

fn summary(diagnostics: &[Diagnostic]) -> String {
    let errors = diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity().is_error())
        .count();
    let warnings = diagnostics.len() - errors;
    format!("Lint failed: {errors} error(s), {warnings} warning(s)")
}
