//! Reader for the `workflows` section.
//!
//! A workflow is an ordered list of steps. Each step names its actor, which
//! is resolved later against personas, external systems and services.

use amlint_core::{
    model::{ArchitectureModel, EntityKind, Reference, Workflow, WorkflowStep},
    position::Position,
    tree::{Node, Shape},
};

use super::fields::{ReadEntity, fields, read_list, read_text, required_scalar, unknown_field};
use crate::{
    error::{Diagnostic, DiagnosticCollector},
    read::Section,
};

const STEP: &str = "workflow step";

pub(super) fn read_workflows(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::Workflow,
        Section::Workflows.tag(),
        node,
        &mut model.workflows,
        diagnostics,
    );
}

impl ReadEntity for Workflow {
    fn create(_kind: EntityKind, name: String, position: Position) -> Self {
        Workflow::new(name, position)
    }

    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool {
        match field {
            "description" => self.description = read_text(field, value, diagnostics),
            "steps" => self.steps = read_steps(value, diagnostics),
            _ => return false,
        }
        true
    }
}

fn read_steps(value: &Node, diagnostics: &mut DiagnosticCollector) -> Vec<WorkflowStep> {
    if value.is_null() {
        return Vec::new();
    }
    let Some(items) = value.as_sequence() else {
        diagnostics.emit(Diagnostic::type_error("steps", value, Shape::Sequence));
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| read_step(item, diagnostics))
        .collect()
}

fn read_step(item: &Node, diagnostics: &mut DiagnosticCollector) -> Option<WorkflowStep> {
    let Some(entries) = item.as_mapping() else {
        diagnostics.emit(Diagnostic::type_error(STEP, item, Shape::Map));
        return None;
    };

    let (actor, actor_node) = required_scalar("actor", item, diagnostics)?;
    let mut step = WorkflowStep::new(
        Reference::new(actor, actor_node.position()),
        item.position(),
    );
    for field in fields(STEP, entries, diagnostics) {
        match field.name {
            "actor" => {}
            "action" => step.action = read_text(field.name, field.value, diagnostics),
            _ => diagnostics.emit(unknown_field(STEP, &field)),
        }
    }
    Some(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, loader};

    fn read(text: &str) -> (ArchitectureModel, Vec<Diagnostic>) {
        let root = loader::load(text).unwrap().unwrap().into_root();
        let node = root.as_mapping().unwrap()[0].1.clone();
        let mut model = ArchitectureModel::new(Node::empty_mapping(), None);
        let mut diagnostics = DiagnosticCollector::new();
        read_workflows(Some(&node), &mut model, &mut diagnostics);
        (model, diagnostics.finish())
    }

    #[test]
    fn test_read_steps() {
        let (model, diagnostics) = read(
            "workflows:\n\
             \x20 - name: checkout\n\
             \x20   steps:\n\
             \x20     - actor: buyer\n\
             \x20       action: places an order\n\
             \x20     - actor: api\n",
        );

        assert!(diagnostics.is_empty());
        let steps = &model.workflows["checkout"].steps;
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].actor.name, "buyer");
        assert_eq!(steps[0].actor.position, Position::new(4, 16));
        assert_eq!(steps[0].action.as_deref(), Some("places an order"));
        assert_eq!(steps[1].action, None);
        assert!(steps[1].participant.is_none());
    }

    #[test]
    fn test_bad_steps_are_skipped() {
        let (model, diagnostics) = read(
            "workflows:\n\
             \x20 - name: refund\n\
             \x20   steps:\n\
             \x20     - buyer\n\
             \x20     - action: asks for money back\n\
             \x20     - actor: support\n\
             \x20       channel: phone\n",
        );

        let messages: Vec<_> = diagnostics.iter().map(Diagnostic::message).collect();
        assert_eq!(
            messages,
            [
                "workflow step must be a map, not a scalar",
                "Missing required field: actor",
                "Unknown workflow step field: channel",
            ]
        );
        assert_eq!(diagnostics[1].code(), Some(ErrorCode::E101));
        assert!(diagnostics[2].severity().is_warning());
        let steps = &model.workflows["refund"].steps;
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].actor.name, "support");
    }

    #[test]
    fn test_steps_must_be_a_sequence() {
        let (model, diagnostics) = read(
            "workflows:\n\
             \x20 - name: signup\n\
             \x20   steps: {actor: visitor}\n",
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "steps must be a sequence, not a map"
        );
        assert!(model.workflows["signup"].steps.is_empty());
    }
}
