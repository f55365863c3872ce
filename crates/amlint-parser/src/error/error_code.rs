//! Error codes for the amlint diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors
//! - `E1xx` - Reader (shape) errors
//! - `E2xx` - Connector (reference) errors
//! - `E3xx` - Validator (domain) findings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Invalid YAML.
    ///
    /// The text could not be parsed as YAML at all.
    E001,

    /// Document is not a map.
    ///
    /// The top level of a non-empty document must be a mapping of sections.
    E002,

    /// Unreadable file.
    ///
    /// The file to lint could not be read.
    E003,

    // =========================================================================
    // Reader Errors (E1xx)
    // =========================================================================
    /// Type mismatch.
    ///
    /// A section or field has the wrong node shape, e.g. a scalar where a
    /// sequence of maps is expected.
    E100,

    /// Missing required field.
    E101,

    /// Duplicate entity name.
    ///
    /// Two entities of the same kind are declared with the same name.
    E102,

    /// Unknown top-level element.
    E103,

    /// Unknown entity field.
    E104,

    /// Duplicate key.
    ///
    /// The same key appears twice in one map, either as a top-level section
    /// or as a field of one entity.
    E105,

    /// Missing required section.
    E106,

    // =========================================================================
    // Connector Errors (E2xx)
    // =========================================================================
    /// Unknown reference.
    ///
    /// A name was referenced that is not declared for the expected kind.
    E200,

    // =========================================================================
    // Validator Findings (E3xx)
    // =========================================================================
    /// Shared database.
    ///
    /// A database is used by more than one service.
    E300,

    /// Unused data store.
    ///
    /// A database or queue is not used by any service.
    E301,

    /// Unused external system.
    ///
    /// An external system is neither called by a service nor part of a workflow.
    E302,

    /// Persona without workflow.
    E303,

    /// Unconnected workflow participant.
    ///
    /// A workflow step names a persona the workflow is not linked to.
    E304,

    /// Service depends on itself.
    E305,

    /// Service calls an external system with its own name.
    E306,

    /// Ambiguous participant name.
    ///
    /// Personas, external systems and services share one namespace in
    /// workflow steps.
    E307,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Document errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Reader errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            // Connector errors
            ErrorCode::E200 => "E200",
            // Validator findings
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
            ErrorCode::E305 => "E305",
            ErrorCode::E306 => "E306",
            ErrorCode::E307 => "E307",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Document errors
            ErrorCode::E001 => "invalid YAML",
            ErrorCode::E002 => "document is not a map",
            ErrorCode::E003 => "unreadable file",
            // Reader errors
            ErrorCode::E100 => "type mismatch",
            ErrorCode::E101 => "missing required field",
            ErrorCode::E102 => "duplicate name",
            ErrorCode::E103 => "unknown top-level element",
            ErrorCode::E104 => "unknown field",
            ErrorCode::E105 => "duplicate key",
            ErrorCode::E106 => "missing required section",
            // Connector errors
            ErrorCode::E200 => "unknown reference",
            // Validator findings
            ErrorCode::E300 => "shared database",
            ErrorCode::E301 => "unused data store",
            ErrorCode::E302 => "unused external system",
            ErrorCode::E303 => "persona without workflow",
            ErrorCode::E304 => "unconnected workflow participant",
            ErrorCode::E305 => "self dependency",
            ErrorCode::E306 => "service calls itself",
            ErrorCode::E307 => "ambiguous participant name",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
        assert_eq!(ErrorCode::E300.to_string(), "E300");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "invalid YAML");
        assert_eq!(ErrorCode::E200.description(), "unknown reference");
        assert_eq!(ErrorCode::E307.description(), "ambiguous participant name");
    }
}
