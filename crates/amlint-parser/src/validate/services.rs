use amlint_core::{
    model::{ArchitectureModel, Reference, Service},
    position::Position,
};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode};

pub(super) fn self_references(model: &ArchitectureModel, diagnostics: &mut DiagnosticCollector) {
    for service in model.services.values() {
        if service.depends_on.contains(&service.name) {
            diagnostics.emit(
                Diagnostic::error(format!("Service {} depends on itself", service.name))
                    .with_code(ErrorCode::E305)
                    .at(own_name(service, &service.dependency_refs)),
            );
        }
        if service.external_systems.contains(&service.name) {
            diagnostics.emit(
                Diagnostic::error(format!(
                    "Service {} calls an external system with its own name",
                    service.name
                ))
                .with_code(ErrorCode::E306)
                .at(own_name(service, &service.external_system_refs))
                .with_help("a service cannot be external to the system it belongs to"),
            );
        }
    }
}

/// Where `service` names itself in `references`, or its declaration.
fn own_name(service: &Service, references: &[Reference]) -> Position {
    references
        .iter()
        .find(|reference| reference.name == service.name)
        .map_or(service.position, |reference| reference.position)
}
