//! Readers for the singleton sections: `version` and `system`.

use amlint_core::{
    model::{ArchitectureModel, System, Version},
    tree::{Node, Shape},
};

use super::fields::{fields, read_text, required_scalar, unknown_field};
use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    read::Section,
};

/// The `version` section is optional.
pub(super) fn read_version(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    let Some(node) = node else {
        return;
    };
    if node.as_scalar().is_none() {
        diagnostics.emit(Diagnostic::type_error(
            Section::Version.tag(),
            node,
            Shape::Scalar,
        ));
        return;
    }
    match node.as_str() {
        Some(value) => {
            model.version = Some(Version {
                value: value.to_string(),
                position: node.position(),
            })
        }
        None => diagnostics.emit(
            Diagnostic::node_error("version must not be empty", node).with_code(ErrorCode::E101),
        ),
    }
}

/// The `system` section is required.
pub(super) fn read_system(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    let Some(node) = node else {
        diagnostics.emit(
            Diagnostic::error("Missing required element: system")
                .with_code(ErrorCode::E106)
                .with_help("add a `system` map with at least a `name`"),
        );
        return;
    };
    let Some(entries) = node.as_mapping() else {
        diagnostics.emit(Diagnostic::type_error(
            Section::System.tag(),
            node,
            Shape::Map,
        ));
        return;
    };

    let Some((name, _)) = required_scalar("name", node, diagnostics) else {
        return;
    };
    let mut system = System::new(name, node.position());
    for field in fields(Section::System.tag(), entries, diagnostics) {
        match field.name {
            "name" => {}
            "description" => system.description = read_text(field.name, field.value, diagnostics),
            _ => diagnostics.emit(unknown_field(Section::System.tag(), &field)),
        }
    }
    model.system = Some(system);
}
