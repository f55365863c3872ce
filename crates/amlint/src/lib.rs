//! amlint - A linter for architecture-as-code documents.
//!
//! Reads a YAML description of a software architecture, connects the
//! references between its entities and checks domain rules over the result.
//! A run passes or fails according to the [`config::AppConfig`] it was
//! configured with.

pub mod config;

mod error;

pub use amlint_core::{model, position, tree};
pub use amlint_parser::{Diagnostic, ErrorCode, Severity};

pub use error::AmlintError;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use model::ArchitectureModel;

/// The result of a passing run.
#[derive(Debug)]
pub struct LintOutcome {
    model: ArchitectureModel,
    warnings: Vec<Diagnostic>,
    src: String,
}

impl LintOutcome {
    /// The connected model.
    pub fn model(&self) -> &ArchitectureModel {
        &self.model
    }

    /// Warnings that did not fail the run.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// The linted text the warnings point into.
    pub fn source(&self) -> &str {
        &self.src
    }

    pub fn into_model(self) -> ArchitectureModel {
        self.model
    }
}

/// Lints architecture documents under one configuration.
///
/// # Examples
///
/// ```
/// use amlint::{Linter, config::AppConfig};
///
/// let text = "system:\n  name: shop\n";
///
/// let linter = Linter::new(AppConfig::default());
/// let outcome = linter.lint(text, None).expect("Failed to lint");
///
/// assert!(outcome.warnings().is_empty());
/// assert_eq!(outcome.model().system.as_ref().unwrap().name, "shop");
/// ```
#[derive(Debug, Default)]
pub struct Linter {
    config: AppConfig,
}

impl Linter {
    /// Create a new linter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Decides which diagnostics fail a run
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this linter.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lint document text.
    ///
    /// # Arguments
    ///
    /// * `text` - The YAML document
    /// * `name` - The name diagnostics are attributed to, usually a file path
    ///
    /// # Errors
    ///
    /// Returns [`AmlintError::Lint`] with every diagnostic if any error was
    /// found, or any warning with `deny_warnings` set.
    pub fn lint(&self, text: &str, name: Option<&str>) -> Result<LintOutcome, AmlintError> {
        info!(name = name.unwrap_or("<text>"); "Linting document");

        let (model, diagnostics) = amlint_parser::lint_named(text, name);
        trace!(diagnostics:?; "Lint diagnostics");

        let errors = diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity().is_error())
            .count();
        let denied = self.config.lint().deny_warnings() && !diagnostics.is_empty();
        match model {
            Some(model) if errors == 0 && !denied => {
                debug!(warnings = diagnostics.len(); "Document passed");
                Ok(LintOutcome {
                    model,
                    warnings: diagnostics,
                    src: text.to_string(),
                })
            }
            _ => {
                info!(errors, total = diagnostics.len(); "Document failed");
                Err(AmlintError::new_lint_error(diagnostics, text))
            }
        }
    }

    /// Read and lint the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AmlintError::Lint`] carrying a single unpositioned
    /// [`ErrorCode::E003`] diagnostic if the file cannot be read, otherwise
    /// as [`Linter::lint`].
    pub fn lint_path(&self, path: impl AsRef<Path>) -> Result<LintOutcome, AmlintError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let text = amlint_parser::read_source(path).map_err(|diagnostic| {
            debug!(path = name; "Document could not be read");
            AmlintError::new_lint_error(vec![diagnostic.with_source(name.as_str())], "")
        })?;
        self.lint(&text, Some(&name))
    }
}
