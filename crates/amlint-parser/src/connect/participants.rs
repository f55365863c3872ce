//! Workflow participation: personas, external systems and step actors.

use amlint_core::model::{ArchitectureModel, EntityKind, Participant, ParticipantKind};

use super::{back_link, resolve};
use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode};

pub(super) fn connect_external_systems(
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    for external in model.external_systems.values_mut() {
        external.workflows = resolve(
            EntityKind::Workflow,
            &external.workflow_refs,
            &model.workflows,
            diagnostics,
        );
        back_link(
            &mut model.workflows,
            &external.workflows,
            &external.name,
            |workflow| &mut workflow.external_systems,
        );
    }
}

pub(super) fn connect_personas(
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    for persona in model.personas.values_mut() {
        persona.workflows = resolve(
            EntityKind::Workflow,
            &persona.workflow_refs,
            &model.workflows,
            diagnostics,
        );
        back_link(
            &mut model.workflows,
            &persona.workflows,
            &persona.name,
            |workflow| &mut workflow.personas,
        );
    }
}

/// Resolve every step actor and link the workflow with its participants.
pub(super) fn connect_workflows(
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    let mut participations = Vec::new();
    for index in 0..model.workflows.len() {
        let resolved: Vec<_> = model.workflows[index]
            .steps
            .iter()
            .map(|step| model.participant(&step.actor.name))
            .collect();

        let workflow = &mut model.workflows[index];
        for (step, participant) in workflow.steps.iter_mut().zip(resolved) {
            let Some(participant) = participant else {
                diagnostics.emit(
                    Diagnostic::error(format!(
                        "Unknown workflow participant reference: {}",
                        step.actor.name
                    ))
                    .with_code(ErrorCode::E200)
                    .at(step.actor.position)
                    .with_help("a step actor must name a persona, external system or service"),
                );
                continue;
            };
            let links = match participant.kind {
                ParticipantKind::Persona => &mut workflow.personas,
                ParticipantKind::ExternalSystem => &mut workflow.external_systems,
                ParticipantKind::Service => &mut workflow.services,
            };
            links.insert(participant.name.clone());
            participations.push((participant.clone(), workflow.name.clone()));
            step.participant = Some(participant);
        }
    }

    for (Participant { kind, name }, workflow) in participations {
        let links = match kind {
            ParticipantKind::Persona => model.personas.get_mut(&name).map(|p| &mut p.workflows),
            ParticipantKind::ExternalSystem => model
                .external_systems
                .get_mut(&name)
                .map(|e| &mut e.workflows),
            ParticipantKind::Service => model.services.get_mut(&name).map(|s| &mut s.workflows),
        };
        if let Some(links) = links {
            links.insert(workflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use amlint_core::{
        model::{ExternalSystem, Persona, Reference, Service, Workflow, WorkflowStep},
        position::Position,
        tree::Node,
    };

    use super::*;

    fn pos() -> Position {
        Position::new(1, 1)
    }

    fn step(actor: &str, line: usize) -> WorkflowStep {
        WorkflowStep::new(
            Reference::new(actor, Position::new(line, 16)),
            Position::new(line, 9),
        )
    }

    fn model() -> ArchitectureModel {
        let mut model = ArchitectureModel::new(Node::empty_mapping(), None);
        model
            .personas
            .insert("buyer".to_string(), Persona::new("buyer", pos()));
        model
            .external_systems
            .insert("stripe".to_string(), ExternalSystem::new("stripe", pos()));
        model
            .services
            .insert("api".to_string(), Service::new("api", pos()));
        let mut checkout = Workflow::new("checkout", pos());
        checkout.steps = vec![step("buyer", 4), step("api", 5), step("stripe", 6)];
        model.workflows.insert("checkout".to_string(), checkout);
        model
    }

    #[test]
    fn test_step_actors_link_both_ways() {
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        connect_workflows(&mut model, &mut diagnostics);

        assert!(diagnostics.is_empty());
        let checkout = &model.workflows["checkout"];
        assert!(checkout.personas.contains("buyer"));
        assert!(checkout.services.contains("api"));
        assert!(checkout.external_systems.contains("stripe"));
        assert_eq!(
            checkout.steps[2].participant,
            Some(Participant {
                kind: ParticipantKind::ExternalSystem,
                name: "stripe".to_string(),
            })
        );
        assert!(model.personas["buyer"].workflows.contains("checkout"));
        assert!(model.services["api"].workflows.contains("checkout"));
        assert!(model.external_systems["stripe"].workflows.contains("checkout"));
    }

    #[test]
    fn test_unknown_actor() {
        let mut model = model();
        model.workflows["checkout"].steps.push(step("courier", 7));
        let mut diagnostics = DiagnosticCollector::new();

        connect_workflows(&mut model, &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "Unknown workflow participant reference: courier"
        );
        assert_eq!(diagnostics[0].position(), Position::new(7, 16));
        assert!(model.workflows["checkout"].steps[3].participant.is_none());
    }

    #[test]
    fn test_persona_workflows() {
        let mut model = model();
        model.personas["buyer"].workflow_refs = vec![
            Reference::new("checkout", Position::new(3, 18)),
            Reference::new("returns", Position::new(3, 28)),
        ];
        let mut diagnostics = DiagnosticCollector::new();

        connect_personas(&mut model, &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Unknown workflow reference: returns");
        assert!(model.workflows["checkout"].personas.contains("buyer"));
    }
}
