//! Technology references of bundles and data stores.

use indexmap::IndexMap;

use amlint_core::model::{ArchitectureModel, DataStore, EntityKind, Technology};

use super::resolve;
use crate::error::DiagnosticCollector;

pub(super) fn connect_bundles(model: &mut ArchitectureModel, diagnostics: &mut DiagnosticCollector) {
    for bundle in model.technology_bundles.values_mut() {
        bundle.technologies = resolve(
            EntityKind::Technology,
            &bundle.technology_refs,
            &model.technologies,
            diagnostics,
        );
    }
}

/// Connect the technologies of either the databases or the queues.
pub(super) fn connect_stores(
    stores: &mut IndexMap<String, DataStore>,
    technologies: &IndexMap<String, Technology>,
    diagnostics: &mut DiagnosticCollector,
) {
    for store in stores.values_mut() {
        store.technologies = resolve(
            EntityKind::Technology,
            &store.technology_refs,
            technologies,
            diagnostics,
        );
    }
}
