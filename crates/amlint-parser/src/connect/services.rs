//! References declared by services.
//!
//! Services reference almost every other kind, including other services
//! through `dependsOn`. Forward links are resolved first for every service;
//! back-links are written in a second pass so the service table is never
//! borrowed twice.

use amlint_core::model::{ArchitectureModel, EntityKind, Links, Service};

use super::{back_link, resolve};
use crate::error::DiagnosticCollector;

#[derive(Default)]
struct ServiceLinks {
    technologies: Links,
    technology_bundles: Links,
    effective_technologies: Links,
    databases: Links,
    queues: Links,
    depends_on: Links,
    external_systems: Links,
    workflows: Links,
}

pub(super) fn connect_services(
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    for index in 0..model.services.len() {
        let links = resolve_service(&model.services[index], model, diagnostics);
        let service = &mut model.services[index];
        service.technologies = links.technologies;
        service.technology_bundles = links.technology_bundles;
        service.effective_technologies = links.effective_technologies;
        service.databases = links.databases;
        service.queues = links.queues;
        service.depends_on = links.depends_on;
        service.external_systems = links.external_systems;
        service.workflows = links.workflows;
    }

    let mut dependents = Vec::new();
    for service in model.services.values() {
        let name = service.name.as_str();
        back_link(&mut model.databases, &service.databases, name, |db| {
            &mut db.services
        });
        back_link(&mut model.queues, &service.queues, name, |queue| {
            &mut queue.services
        });
        back_link(
            &mut model.external_systems,
            &service.external_systems,
            name,
            |external| &mut external.services,
        );
        back_link(&mut model.workflows, &service.workflows, name, |workflow| {
            &mut workflow.services
        });
        for dependency in &service.depends_on {
            dependents.push((dependency.clone(), service.name.clone()));
        }
    }
    for (dependency, dependent) in dependents {
        if let Some(service) = model.services.get_mut(&dependency) {
            service.dependents.insert(dependent);
        }
    }
}

fn resolve_service(
    service: &Service,
    model: &ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) -> ServiceLinks {
    let technologies = resolve(
        EntityKind::Technology,
        &service.technology_refs,
        &model.technologies,
        diagnostics,
    );
    let technology_bundles = resolve(
        EntityKind::TechnologyBundle,
        &service.bundle_refs,
        &model.technology_bundles,
        diagnostics,
    );

    let mut effective_technologies = technologies.clone();
    for bundle in &technology_bundles {
        if let Some(bundle) = model.technology_bundles.get(bundle) {
            effective_technologies.extend(bundle.technologies.iter().cloned());
        }
    }

    ServiceLinks {
        technologies,
        technology_bundles,
        effective_technologies,
        databases: resolve(
            EntityKind::Database,
            &service.database_refs,
            &model.databases,
            diagnostics,
        ),
        queues: resolve(
            EntityKind::Queue,
            &service.queue_refs,
            &model.queues,
            diagnostics,
        ),
        depends_on: resolve(
            EntityKind::Service,
            &service.dependency_refs,
            &model.services,
            diagnostics,
        ),
        external_systems: resolve(
            EntityKind::ExternalSystem,
            &service.external_system_refs,
            &model.external_systems,
            diagnostics,
        ),
        workflows: resolve(
            EntityKind::Workflow,
            &service.workflow_refs,
            &model.workflows,
            diagnostics,
        ),
    }
}
