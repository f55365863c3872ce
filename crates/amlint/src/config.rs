//! Configuration types for amlint runs.
//!
//! This module provides the configuration structures that decide when a lint
//! run fails and what is reported for a passing one. All types implement
//! [`serde::Deserialize`] so they can be loaded from a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining lint and report settings.
//! - [`LintConfig`] - Controls which diagnostics fail a run.
//! - [`ReportConfig`] - Controls what a passing run prints.
//!
//! # Example
//!
//! ```
//! # use amlint::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(!config.lint().deny_warnings());
//! assert!(config.report().show_warnings());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Lint configuration section.
    #[serde(default)]
    lint: LintConfig,

    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `lint` - Which diagnostics fail a run.
    /// * `report` - What a passing run reports.
    pub fn new(lint: LintConfig, report: ReportConfig) -> Self {
        Self { lint, report }
    }

    /// Returns the lint configuration.
    pub fn lint(&self) -> &LintConfig {
        &self.lint
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

/// Which diagnostics fail a run.
///
/// Errors always fail a run. Warnings fail it only with `deny_warnings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    deny_warnings: bool,
}

impl LintConfig {
    pub fn new(deny_warnings: bool) -> Self {
        Self { deny_warnings }
    }

    /// Returns `true` if warnings alone fail a run.
    pub fn deny_warnings(&self) -> bool {
        self.deny_warnings
    }
}

/// What a passing run reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_show_warnings")]
    show_warnings: bool,
}

fn default_show_warnings() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_warnings: default_show_warnings(),
        }
    }
}

impl ReportConfig {
    pub fn new(show_warnings: bool) -> Self {
        Self { show_warnings }
    }

    /// Returns `true` if the warnings of a passing run are printed.
    pub fn show_warnings(&self) -> bool {
        self.show_warnings
    }
}
