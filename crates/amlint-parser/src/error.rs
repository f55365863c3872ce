//! Diagnostics reported by the lint pipeline.
//!
//! Findings are values, never control flow: every phase returns the
//! [`Diagnostic`]s it produced and the driver concatenates them. A
//! diagnostic carries a [`Severity`], an optional [`ErrorCode`], a message,
//! optional help text and the [`Position`](amlint_core::position::Position)
//! of the node it is about.
//!
//! # Example
//!
//! ```
//! # use amlint_core::position::Position;
//! # use amlint_parser::error::{Diagnostic, ErrorCode};
//!
//! let diag = Diagnostic::error("Unknown database reference: orders-db")
//!     .with_code(ErrorCode::E200)
//!     .at(Position::new(12, 9))
//!     .with_help("declare the database under `databases`");
//!
//! assert_eq!(diag.line(), 12);
//! assert_eq!(diag.column(), 9);
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use severity::Severity;
