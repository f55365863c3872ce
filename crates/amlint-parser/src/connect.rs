//! Connectors: name references into links.
//!
//! Each [`Connector`] resolves one category of cross-entity reference. A
//! resolved reference becomes a link on the referencing entity and, where the
//! relationship is bidirectional, a back-link on the target. A name that does
//! not resolve is reported at the position it was written and no link is
//! recorded for it.
//!
//! Connectors run in [`Connector::ORDER`]: the service connector expands
//! technology bundles, so bundles are connected before services.

mod participants;
mod services;
mod technologies;

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use amlint_core::model::{ArchitectureModel, EntityKind, Links, Reference};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode};

/// One category of reference resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    TechnologyBundle,
    Database,
    Queue,
    Service,
    ExternalSystem,
    Persona,
    Workflow,
}

impl Connector {
    /// Every connector, in the order they must run.
    pub const ORDER: [Connector; 7] = [
        Connector::TechnologyBundle,
        Connector::Database,
        Connector::Queue,
        Connector::Service,
        Connector::ExternalSystem,
        Connector::Persona,
        Connector::Workflow,
    ];

    /// The kind of entity whose references this connector resolves.
    pub fn source_kind(&self) -> EntityKind {
        match self {
            Connector::TechnologyBundle => EntityKind::TechnologyBundle,
            Connector::Database => EntityKind::Database,
            Connector::Queue => EntityKind::Queue,
            Connector::Service => EntityKind::Service,
            Connector::ExternalSystem => EntityKind::ExternalSystem,
            Connector::Persona => EntityKind::Persona,
            Connector::Workflow => EntityKind::Workflow,
        }
    }

    /// Resolve this connector's references, recording links on `model`.
    pub fn connect(self, model: &mut ArchitectureModel) -> Vec<Diagnostic> {
        debug!(connector:% = self; "Connecting references");

        let mut diagnostics = DiagnosticCollector::new();
        match self {
            Connector::TechnologyBundle => {
                technologies::connect_bundles(model, &mut diagnostics)
            }
            Connector::Database => technologies::connect_stores(
                &mut model.databases,
                &model.technologies,
                &mut diagnostics,
            ),
            Connector::Queue => technologies::connect_stores(
                &mut model.queues,
                &model.technologies,
                &mut diagnostics,
            ),
            Connector::Service => services::connect_services(model, &mut diagnostics),
            Connector::ExternalSystem => {
                participants::connect_external_systems(model, &mut diagnostics)
            }
            Connector::Persona => participants::connect_personas(model, &mut diagnostics),
            Connector::Workflow => participants::connect_workflows(model, &mut diagnostics),
        }
        diagnostics.finish()
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_kind().as_str())
    }
}

/// Resolve `references` against the entities of `targets`.
///
/// A name referenced more than once yields a single link.
fn resolve<T>(
    kind: EntityKind,
    references: &[Reference],
    targets: &IndexMap<String, T>,
    diagnostics: &mut DiagnosticCollector,
) -> Links {
    let mut links = Links::with_capacity(references.len());
    for reference in references {
        if targets.contains_key(&reference.name) {
            links.insert(reference.name.clone());
        } else {
            diagnostics.emit(unknown_reference(kind, reference));
        }
    }
    links
}

fn unknown_reference(kind: EntityKind, reference: &Reference) -> Diagnostic {
    Diagnostic::error(format!("Unknown {kind} reference: {}", reference.name))
        .with_code(ErrorCode::E200)
        .at(reference.position)
        .with_help(format!("declare a {kind} named `{}`", reference.name))
}

/// Insert `name` into the links selected by `links` on every target in
/// `names`.
fn back_link<T>(
    targets: &mut IndexMap<String, T>,
    names: &Links,
    name: &str,
    links: impl Fn(&mut T) -> &mut Links,
) {
    for target in names {
        if let Some(entity) = targets.get_mut(target) {
            links(entity).insert(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use amlint_core::{
        model::{DataStore, Technology},
        position::Position,
    };

    use super::*;

    #[test]
    fn test_resolve_collapses_repeats_and_reports_unknown() {
        let mut targets = IndexMap::new();
        targets.insert(
            "postgres".to_string(),
            Technology::new("postgres", Position::new(9, 5)),
        );
        let references = [
            Reference::new("postgres", Position::new(3, 20)),
            Reference::new("oracle", Position::new(3, 30)),
            Reference::new("postgres", Position::new(3, 40)),
        ];
        let mut diagnostics = DiagnosticCollector::new();

        let links = resolve(
            EntityKind::Technology,
            &references,
            &targets,
            &mut diagnostics,
        );

        assert_eq!(links.iter().collect::<Vec<_>>(), ["postgres"]);
        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "Unknown technology reference: oracle"
        );
        assert_eq!(diagnostics[0].position(), Position::new(3, 30));
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E200));
    }

    #[test]
    fn test_order_starts_with_bundles() {
        assert_eq!(Connector::ORDER[0], Connector::TechnologyBundle);
        let service = Connector::ORDER
            .iter()
            .position(|c| *c == Connector::Service);
        assert_eq!(service, Some(3));
        assert_eq!(Connector::ORDER[6], Connector::Workflow);
        assert_eq!(Connector::ExternalSystem.to_string(), "external system");
    }

    #[test]
    fn test_back_link_skips_missing_targets() {
        let mut targets = IndexMap::new();
        targets.insert(
            "orders".to_string(),
            DataStore::new(EntityKind::Database, "orders", Position::new(1, 5)),
        );
        let names: Links = ["orders", "ghost"].into_iter().map(String::from).collect();

        back_link(&mut targets, &names, "api", |db| &mut db.services);

        assert!(targets["orders"].services.contains("api"));
        assert_eq!(targets.len(), 1);
    }
}
