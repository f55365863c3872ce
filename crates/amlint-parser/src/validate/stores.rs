use amlint_core::model::{ArchitectureModel, DataStore, EntityKind};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode};

pub(super) fn shared_databases(model: &ArchitectureModel, diagnostics: &mut DiagnosticCollector) {
    for database in model.databases.values() {
        if database.services.len() > 1 {
            let services: Vec<_> = database.services.iter().map(String::as_str).collect();
            diagnostics.emit(
                Diagnostic::warning(format!(
                    "Database {} is shared by services: {}",
                    database.name,
                    services.join(", ")
                ))
                .with_code(ErrorCode::E300)
                .at(database.position)
                .with_help("give each service its own database"),
            );
        }
    }
}

pub(super) fn unused_stores(model: &ArchitectureModel, diagnostics: &mut DiagnosticCollector) {
    for store in model.databases.values().chain(model.queues.values()) {
        if store.services.is_empty() {
            diagnostics.emit(unused(store));
        }
    }
}

fn unused(store: &DataStore) -> Diagnostic {
    let kind = match store.kind {
        EntityKind::Queue => "Queue",
        _ => "Database",
    };
    Diagnostic::warning(format!("{kind} {} is not used by any service", store.name))
        .with_code(ErrorCode::E301)
        .at(store.position)
}

#[cfg(test)]
mod tests {
    use amlint_core::{position::Position, tree::Node};

    use super::*;

    fn model() -> ArchitectureModel {
        let mut model = ArchitectureModel::new(Node::empty_mapping(), None);
        let mut orders = DataStore::new(EntityKind::Database, "orders", Position::new(3, 5));
        orders.services.insert("api".to_string());
        orders.services.insert("billing".to_string());
        model.databases.insert("orders".to_string(), orders);
        let mut users = DataStore::new(EntityKind::Database, "users", Position::new(4, 5));
        users.services.insert("auth".to_string());
        model.databases.insert("users".to_string(), users);
        model.queues.insert(
            "jobs".to_string(),
            DataStore::new(EntityKind::Queue, "jobs", Position::new(7, 5)),
        );
        model
    }

    #[test]
    fn test_shared_database() {
        let mut diagnostics = DiagnosticCollector::new();

        shared_databases(&model(), &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "Database orders is shared by services: api, billing"
        );
        assert!(diagnostics[0].severity().is_warning());
        assert_eq!(diagnostics[0].position(), Position::new(3, 5));
    }

    #[test]
    fn test_unused_queue() {
        let mut diagnostics = DiagnosticCollector::new();

        unused_stores(&model(), &mut diagnostics);

        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "Queue jobs is not used by any service"
        );
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E301));
    }
}
