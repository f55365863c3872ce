//! amlint CLI library
//!
//! This module contains the core CLI logic for the amlint architecture
//! linter.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::{info, warn};

use amlint::{AmlintError, Linter};

use error_adapter::{DiagnosticAdapter, Reportable, render};

/// Run the amlint CLI application
///
/// This function lints the input file and reports the warnings of a passing
/// run when the configuration asks for them.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AmlintError` for:
/// - Configuration loading errors
/// - A failed lint run, carrying every diagnostic. An unreadable input
///   file fails the run with a single file-level diagnostic
pub fn run(args: &Args) -> Result<(), AmlintError> {
    info!(input_path = args.input; "Linting architecture document");

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::with_overrides(app_config, args.deny_warnings);

    let linter = Linter::new(app_config);
    let outcome = linter.lint_path(&args.input)?;

    if linter.config().report().show_warnings() {
        for warning in outcome.warnings() {
            let reportable =
                Reportable::Diagnostic(DiagnosticAdapter::new(warning, outcome.source()));
            warn!("{}", render(&reportable));
        }
    }

    info!(
        entities = outcome.model().entity_count(),
        warnings = outcome.warnings().len();
        "Architecture document passed"
    );

    Ok(())
}
