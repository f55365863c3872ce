//! # amlint Parser
//!
//! The lint pipeline for architecture-as-code documents. A document is a
//! YAML map whose top-level keys name sections (`system`, `services`,
//! `databases`, ...). Linting runs in three phases:
//!
//! 1. **Read** - every [`Section`] turns its subtree into model entities,
//!    recording references to other entities by name
//! 2. **Connect** - every [`Connector`], in a fixed order, resolves those
//!    names into links between entities
//! 3. **Validate** - if nothing was reported so far, every [`Validator`]
//!    checks one domain rule over the connected model
//!
//! Problems never abort a phase. They are collected as [`Diagnostic`]s and
//! returned together with the model.
//!
//! ## Usage
//!
//! ```
//! let text = r#"
//! system:
//!   name: shop
//! services:
//!   - name: api
//!     databases: [orders-db]
//! "#;
//!
//! let (model, diagnostics) = amlint_parser::lint_text(text);
//!
//! assert!(model.is_some());
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message(), "Unknown database reference: orders-db");
//! assert_eq!(diagnostics[0].line(), 6);
//! ```

pub mod error;
pub mod loader;

mod connect;
mod lint;
mod read;
mod validate;

pub use connect::Connector;
pub use error::{Diagnostic, ErrorCode, Severity};
pub use lint::{LintResult, lint_file, lint_named, lint_text, read_source};
pub use read::Section;
pub use validate::Validator;
