//! Readers: top-level sections into model entities.
//!
//! Each [`Section`] interprets one top-level subtree of the document. The
//! driver calls [`Section::read`] for every section present in the document
//! and again, with no node, for every section that is absent, so that
//! required sections report their absence.
//!
//! Readers never stop at the first problem. A section with the wrong shape
//! is rejected as a whole with a single type error, but inside a
//! well-shaped section a malformed element or field is reported and skipped
//! while its siblings are still read.

mod entities;
mod fields;
mod system;
mod workflow;

use std::fmt;

use log::debug;

use amlint_core::{model::ArchitectureModel, tree::Node};

use crate::error::{Diagnostic, DiagnosticCollector};

/// A recognized top-level section of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Version,
    System,
    Personas,
    ExternalSystems,
    Databases,
    Queues,
    Services,
    Technologies,
    TechnologyBundles,
    Workflows,
}

impl Section {
    /// Every section, in the order absent sections are read.
    pub const ALL: [Section; 10] = [
        Section::Version,
        Section::System,
        Section::Personas,
        Section::ExternalSystems,
        Section::Databases,
        Section::Queues,
        Section::Services,
        Section::Technologies,
        Section::TechnologyBundles,
        Section::Workflows,
    ];

    /// Look up the section for a top-level key.
    pub fn from_tag(tag: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|section| section.tag() == tag)
    }

    /// The top-level key of this section.
    pub fn tag(&self) -> &'static str {
        match self {
            Section::Version => "version",
            Section::System => "system",
            Section::Personas => "personas",
            Section::ExternalSystems => "externalSystems",
            Section::Databases => "databases",
            Section::Queues => "queues",
            Section::Services => "services",
            Section::Technologies => "technologies",
            Section::TechnologyBundles => "technologyBundles",
            Section::Workflows => "workflows",
        }
    }

    /// Read this section into `model`.
    ///
    /// # Arguments
    ///
    /// * `node` - The section's value, or `None` if the section is absent
    /// * `source` - The name of the linted file, if any
    /// * `model` - The model receiving the entities
    pub fn read(
        self,
        node: Option<&Node>,
        source: Option<&str>,
        model: &mut ArchitectureModel,
    ) -> Vec<Diagnostic> {
        debug!(
            section = self.tag(),
            present = node.is_some(),
            source = source.unwrap_or("<text>");
            "Reading section"
        );

        let mut diagnostics = DiagnosticCollector::new();
        match self {
            Section::Version => system::read_version(node, model, &mut diagnostics),
            Section::System => system::read_system(node, model, &mut diagnostics),
            Section::Personas => entities::read_personas(node, model, &mut diagnostics),
            Section::ExternalSystems => {
                entities::read_external_systems(node, model, &mut diagnostics)
            }
            Section::Databases => entities::read_databases(node, model, &mut diagnostics),
            Section::Queues => entities::read_queues(node, model, &mut diagnostics),
            Section::Services => entities::read_services(node, model, &mut diagnostics),
            Section::Technologies => entities::read_technologies(node, model, &mut diagnostics),
            Section::TechnologyBundles => {
                entities::read_technology_bundles(node, model, &mut diagnostics)
            }
            Section::Workflows => workflow::read_workflows(node, model, &mut diagnostics),
        }
        diagnostics.finish()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
