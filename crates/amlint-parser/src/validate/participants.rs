use indexmap::IndexSet;

use amlint_core::{
    model::{ArchitectureModel, Entity, ParticipantKind},
    position::Position,
};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode};

pub(super) fn unused_external_systems(
    model: &ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    for external in model.external_systems.values() {
        if external.services.is_empty() && external.workflows.is_empty() {
            diagnostics.emit(
                Diagnostic::warning(format!(
                    "External system {} is not used by any service or workflow",
                    external.name
                ))
                .with_code(ErrorCode::E302)
                .at(external.position),
            );
        }
    }
}

pub(super) fn personas(model: &ArchitectureModel, diagnostics: &mut DiagnosticCollector) {
    for persona in model.personas.values() {
        if persona.workflows.is_empty() {
            diagnostics.emit(
                Diagnostic::warning(format!(
                    "Persona {} does not participate in any workflow",
                    persona.name
                ))
                .with_code(ErrorCode::E303)
                .at(persona.position),
            );
        }
    }

    for workflow in model.workflows.values() {
        let persona_steps = workflow.steps.iter().filter(|step| {
            step.participant
                .as_ref()
                .is_some_and(|p| p.kind == ParticipantKind::Persona)
        });
        for step in persona_steps {
            let name = &step.actor.name;
            let connected = workflow.personas.contains(name)
                && model
                    .personas
                    .get(name)
                    .is_some_and(|persona| persona.workflows.contains(&workflow.name));
            if !connected {
                diagnostics.emit(
                    Diagnostic::error(format!(
                        "Persona {name} acts in workflow {} but is not connected to it",
                        workflow.name
                    ))
                    .with_code(ErrorCode::E304)
                    .at(step.actor.position),
                );
            }
        }
    }
}

/// Personas, external systems and services share one namespace as
/// workflow actors.
pub(super) fn ambiguous_names(model: &ArchitectureModel, diagnostics: &mut DiagnosticCollector) {
    let names: IndexSet<&str> = model
        .personas
        .keys()
        .chain(model.external_systems.keys())
        .chain(model.services.keys())
        .map(String::as_str)
        .collect();

    for name in names {
        let kinds = model.participant_kinds(name);
        let [_, .., last] = kinds.as_slice() else {
            continue;
        };
        let labels: Vec<_> = kinds.iter().map(|kind| kind.entity_kind().as_str()).collect();
        diagnostics.emit(
            Diagnostic::error(format!(
                "Participant name {name} is shared by: {}",
                labels.join(", ")
            ))
            .with_code(ErrorCode::E307)
            .at(declaration(model, *last, name))
            .with_help("workflow steps name their actor, so the name must be unique"),
        );
    }
}

fn declaration(model: &ArchitectureModel, kind: ParticipantKind, name: &str) -> Position {
    let entity: Option<&dyn Entity> = match kind {
        ParticipantKind::Persona => model.personas.get(name).map(|e| e as &dyn Entity),
        ParticipantKind::ExternalSystem => {
            model.external_systems.get(name).map(|e| e as &dyn Entity)
        }
        ParticipantKind::Service => model.services.get(name).map(|e| e as &dyn Entity),
    };
    entity.map_or(Position::NONE, Entity::position)
}
