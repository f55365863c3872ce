//! Validators: domain rules over the connected model.
//!
//! Validators only run on a model that produced no diagnostics while being
//! read and connected, so every link they follow is known to resolve. They
//! never mutate the model and do not depend on each other's results.

mod participants;
mod services;
mod stores;

use std::fmt;

use log::debug;

use amlint_core::model::ArchitectureModel;

use crate::error::{Diagnostic, DiagnosticCollector};

/// One domain rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    /// A database is used by at most one service.
    Database,
    /// Every database and queue is used by some service.
    DataStore,
    /// Every external system is used by a service or a workflow.
    ExternalSystem,
    /// Every persona takes part in a workflow, and every persona acting in a
    /// step is linked to that step's workflow.
    Persona,
    /// Services do not depend on or call themselves.
    Service,
    /// Workflow actors resolve to exactly one entity.
    ParticipantName,
}

impl Validator {
    pub const ALL: [Validator; 6] = [
        Validator::Database,
        Validator::DataStore,
        Validator::ExternalSystem,
        Validator::Persona,
        Validator::Service,
        Validator::ParticipantName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Validator::Database => "database",
            Validator::DataStore => "data store",
            Validator::ExternalSystem => "external system",
            Validator::Persona => "persona",
            Validator::Service => "service",
            Validator::ParticipantName => "participant name",
        }
    }

    /// Check this rule against `model`.
    pub fn validate(self, model: &ArchitectureModel) -> Vec<Diagnostic> {
        debug!(validator = self.name(); "Validating model");

        let mut diagnostics = DiagnosticCollector::new();
        match self {
            Validator::Database => stores::shared_databases(model, &mut diagnostics),
            Validator::DataStore => stores::unused_stores(model, &mut diagnostics),
            Validator::ExternalSystem => {
                participants::unused_external_systems(model, &mut diagnostics)
            }
            Validator::Persona => participants::personas(model, &mut diagnostics),
            Validator::Service => services::self_references(model, &mut diagnostics),
            Validator::ParticipantName => {
                participants::ambiguous_names(model, &mut diagnostics)
            }
        }
        diagnostics.finish()
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_validators_are_distinct() {
        let names: HashSet<_> = Validator::ALL.iter().map(Validator::name).collect();
        assert_eq!(names.len(), Validator::ALL.len());
    }
}
