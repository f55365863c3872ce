//! Readers for the list sections of named entities.

use amlint_core::{
    model::{
        ArchitectureModel, DataStore, EntityKind, ExternalSystem, Persona, Service, Technology,
        TechnologyBundle,
    },
    position::Position,
    tree::Node,
};

use super::fields::{ReadEntity, read_list, read_references, read_text};
use crate::{error::DiagnosticCollector, read::Section};

pub(super) fn read_personas(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::Persona,
        Section::Personas.tag(),
        node,
        &mut model.personas,
        diagnostics,
    );
}

pub(super) fn read_external_systems(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::ExternalSystem,
        Section::ExternalSystems.tag(),
        node,
        &mut model.external_systems,
        diagnostics,
    );
}

pub(super) fn read_databases(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::Database,
        Section::Databases.tag(),
        node,
        &mut model.databases,
        diagnostics,
    );
}

pub(super) fn read_queues(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::Queue,
        Section::Queues.tag(),
        node,
        &mut model.queues,
        diagnostics,
    );
}

pub(super) fn read_services(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::Service,
        Section::Services.tag(),
        node,
        &mut model.services,
        diagnostics,
    );
}

pub(super) fn read_technologies(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::Technology,
        Section::Technologies.tag(),
        node,
        &mut model.technologies,
        diagnostics,
    );
}

pub(super) fn read_technology_bundles(
    node: Option<&Node>,
    model: &mut ArchitectureModel,
    diagnostics: &mut DiagnosticCollector,
) {
    read_list(
        EntityKind::TechnologyBundle,
        Section::TechnologyBundles.tag(),
        node,
        &mut model.technology_bundles,
        diagnostics,
    );
}

impl ReadEntity for Persona {
    fn create(_kind: EntityKind, name: String, position: Position) -> Self {
        Persona::new(name, position)
    }

    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool {
        match field {
            "description" => self.description = read_text(field, value, diagnostics),
            "workflows" => self.workflow_refs = read_references(field, value, diagnostics),
            _ => return false,
        }
        true
    }
}

impl ReadEntity for ExternalSystem {
    fn create(_kind: EntityKind, name: String, position: Position) -> Self {
        ExternalSystem::new(name, position)
    }

    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool {
        match field {
            "description" => self.description = read_text(field, value, diagnostics),
            "workflows" => self.workflow_refs = read_references(field, value, diagnostics),
            _ => return false,
        }
        true
    }
}

impl ReadEntity for DataStore {
    fn create(kind: EntityKind, name: String, position: Position) -> Self {
        DataStore::new(kind, name, position)
    }

    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool {
        match field {
            "description" => self.description = read_text(field, value, diagnostics),
            "technologies" => self.technology_refs = read_references(field, value, diagnostics),
            _ => return false,
        }
        true
    }
}

impl ReadEntity for Service {
    fn create(_kind: EntityKind, name: String, position: Position) -> Self {
        Service::new(name, position)
    }

    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool {
        match field {
            "description" => self.description = read_text(field, value, diagnostics),
            "technologies" => self.technology_refs = read_references(field, value, diagnostics),
            "technologyBundles" => self.bundle_refs = read_references(field, value, diagnostics),
            "databases" => self.database_refs = read_references(field, value, diagnostics),
            "queues" => self.queue_refs = read_references(field, value, diagnostics),
            "dependsOn" => self.dependency_refs = read_references(field, value, diagnostics),
            "externalSystems" => {
                self.external_system_refs = read_references(field, value, diagnostics)
            }
            "workflows" => self.workflow_refs = read_references(field, value, diagnostics),
            _ => return false,
        }
        true
    }
}

impl ReadEntity for Technology {
    fn create(_kind: EntityKind, name: String, position: Position) -> Self {
        Technology::new(name, position)
    }

    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool {
        match field {
            "description" => self.description = read_text(field, value, diagnostics),
            _ => return false,
        }
        true
    }
}

impl ReadEntity for TechnologyBundle {
    fn create(_kind: EntityKind, name: String, position: Position) -> Self {
        TechnologyBundle::new(name, position)
    }

    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool {
        match field {
            "description" => self.description = read_text(field, value, diagnostics),
            "technologies" => self.technology_refs = read_references(field, value, diagnostics),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use amlint_core::model::Entity;

    use super::*;
    use crate::{error::ErrorCode, loader};

    fn section(text: &str) -> Node {
        let root = loader::load(text).unwrap().unwrap().into_root();
        root.as_mapping().unwrap()[0].1.clone()
    }

    fn model() -> ArchitectureModel {
        ArchitectureModel::new(Node::empty_mapping(), None)
    }

    #[test]
    fn test_absent_optional_section() {
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_queues(None, &mut model, &mut diagnostics);

        assert!(model.queues.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_read_services_fields() {
        let node = section(
            "services:\n\
             \x20 - name: api\n\
             \x20   description: Public API\n\
             \x20   databases: [orders]\n\
             \x20   dependsOn: [auth, auth]\n\
             \x20   technologyBundles: [jvm]\n",
        );
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_services(Some(&node), &mut model, &mut diagnostics);

        assert!(diagnostics.is_empty());
        let api = &model.services["api"];
        assert_eq!(api.description.as_deref(), Some("Public API"));
        assert_eq!(api.database_refs[0].name, "orders");
        assert_eq!(api.dependency_refs.len(), 2);
        assert_eq!(api.bundle_refs[0].name, "jvm");
        assert_eq!(api.position().line(), 2);
    }

    #[test]
    fn test_section_shape_mismatch_is_one_error() {
        let node = section("databases: orders\n");
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_databases(Some(&node), &mut model, &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "databases must be a sequence, not a scalar"
        );
        assert!(model.databases.is_empty());
    }

    #[test]
    fn test_bad_field_does_not_drop_siblings() {
        let node = section(
            "queues:\n\
             \x20 - name: jobs\n\
             \x20   technologies: kafka\n\
             \x20   description: Background jobs\n\
             \x20 - name: events\n",
        );
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_queues(Some(&node), &mut model, &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E100));
        assert_eq!(diagnostics[0].line(), 3);
        assert_eq!(model.queues.len(), 2);
        assert_eq!(
            model.queues["jobs"].description.as_deref(),
            Some("Background jobs")
        );
        assert_eq!(model.queues["jobs"].kind(), EntityKind::Queue);
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let node = section(
            "personas:\n\
             \x20 - name: buyer\n\
             \x20   description: first\n\
             \x20 - name: buyer\n\
             \x20   description: second\n\
             \x20 - name: seller\n",
        );
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_personas(Some(&node), &mut model, &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Duplicate persona name: buyer");
        assert_eq!(diagnostics[0].line(), 4);
        assert_eq!(model.personas.len(), 2);
        assert_eq!(model.personas["buyer"].description.as_deref(), Some("first"));
    }

    #[test]
    fn test_duplicate_element_fields_are_still_checked() {
        let node = section(
            "services:\n\
             \x20 - name: api\n\
             \x20 - name: api\n\
             \x20   databases: orders\n\
             \x20   bogus: 1\n",
        );
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_services(Some(&node), &mut model, &mut diagnostics);

        let messages: Vec<_> = diagnostics
            .finish()
            .iter()
            .map(|d| d.message().to_string())
            .collect();
        assert_eq!(
            messages,
            [
                "Duplicate service name: api",
                "databases must be a sequence, not a scalar",
                "Unknown service field: bogus",
            ]
        );
        assert_eq!(model.services.len(), 1);
        assert!(model.services["api"].database_refs.is_empty());
    }

    #[test]
    fn test_null_reference_list_is_empty() {
        let node = section(
            "personas:\n\
             \x20 - name: buyer\n\
             \x20   workflows:\n",
        );
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_personas(Some(&node), &mut model, &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert!(model.personas["buyer"].workflow_refs.is_empty());
    }

    #[test]
    fn test_non_map_element_and_missing_name() {
        let node = section(
            "technologies:\n\
             \x20 - postgres\n\
             \x20 - description: no name\n\
             \x20 - name: redis\n",
        );
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_technologies(Some(&node), &mut model, &mut diagnostics);

        let messages: Vec<_> = diagnostics
            .finish()
            .iter()
            .map(|d| d.message().to_string())
            .collect();
        assert_eq!(
            messages,
            [
                "technology must be a map, not a scalar",
                "Missing required field: name",
            ]
        );
        assert_eq!(model.technologies.keys().collect::<Vec<_>>(), ["redis"]);
    }

    #[test]
    fn test_unknown_field_is_warning() {
        let node = section(
            "externalSystems:\n\
             \x20 - name: stripe\n\
             \x20   url: https://stripe.com\n",
        );
        let mut model = model();
        let mut diagnostics = DiagnosticCollector::new();

        read_external_systems(Some(&node), &mut model, &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity().is_warning());
        assert_eq!(
            diagnostics[0].message(),
            "Unknown external system field: url"
        );
        assert_eq!(diagnostics[0].line(), 3);
        assert_eq!(diagnostics[0].column(), 5);
        assert!(model.external_systems.contains_key("stripe"));
    }
}
