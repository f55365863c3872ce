//! The in-memory architecture model.
//!
//! [`ArchitectureModel`] is the aggregate root of a single lint run. It owns
//! every entity read from the document, keyed by kind and then by declared
//! name, plus the raw document tree the entities were read from.
//!
//! Cross-entity relationships go through two stages:
//!
//! 1. Readers record each reference as a [`Reference`] (the referenced name
//!    and where it was written).
//! 2. Connectors resolve references by name and record the link as the
//!    target's name in an [`IndexSet`]. The link is a key into the model's
//!    tables, so the model stays the only owner of every entity and a name
//!    referenced twice collapses into one link.

mod entity;

pub use entity::{
    DataStore, Entity, ExternalSystem, Persona, Service, System, Technology, TechnologyBundle,
    Version, Workflow, WorkflowStep,
};

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::{position::Position, tree::Node};

/// Resolved links from one entity to a set of entities of one kind.
pub type Links = IndexSet<String>;

/// The kind of an entity, as named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Version,
    System,
    Persona,
    ExternalSystem,
    Database,
    Queue,
    Service,
    Technology,
    TechnologyBundle,
    Workflow,
}

impl EntityKind {
    /// Returns the lowercase label used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Version => "version",
            EntityKind::System => "system",
            EntityKind::Persona => "persona",
            EntityKind::ExternalSystem => "external system",
            EntityKind::Database => "database",
            EntityKind::Queue => "queue",
            EntityKind::Service => "service",
            EntityKind::Technology => "technology",
            EntityKind::TechnologyBundle => "technology bundle",
            EntityKind::Workflow => "workflow",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unresolved reference: a name as written, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub position: Position,
}

impl Reference {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// The kinds of entity that may act in a workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    Persona,
    ExternalSystem,
    Service,
}

impl ParticipantKind {
    /// Resolution order for workflow actors.
    pub const ALL: [ParticipantKind; 3] = [
        ParticipantKind::Persona,
        ParticipantKind::ExternalSystem,
        ParticipantKind::Service,
    ];

    /// The entity kind this participant kind corresponds to.
    pub fn entity_kind(&self) -> EntityKind {
        match self {
            ParticipantKind::Persona => EntityKind::Persona,
            ParticipantKind::ExternalSystem => EntityKind::ExternalSystem,
            ParticipantKind::Service => EntityKind::Service,
        }
    }
}

/// A resolved workflow actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    pub kind: ParticipantKind,
    pub name: String,
}

/// Every entity discovered in one document.
///
/// Tables preserve insertion order, which is document order, so iterating
/// the model is deterministic for a fixed input.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchitectureModel {
    tree: Node,
    source: Option<String>,
    pub version: Option<Version>,
    pub system: Option<System>,
    pub personas: IndexMap<String, Persona>,
    pub external_systems: IndexMap<String, ExternalSystem>,
    pub databases: IndexMap<String, DataStore>,
    pub queues: IndexMap<String, DataStore>,
    pub services: IndexMap<String, Service>,
    pub technologies: IndexMap<String, Technology>,
    pub technology_bundles: IndexMap<String, TechnologyBundle>,
    pub workflows: IndexMap<String, Workflow>,
}

impl ArchitectureModel {
    /// Create an empty model backed by the given document root.
    ///
    /// # Arguments
    ///
    /// * `tree` - The top-level mapping of the document
    /// * `source` - The file name the document was read from, if any
    pub fn new(tree: Node, source: Option<String>) -> Self {
        Self {
            tree,
            source,
            version: None,
            system: None,
            personas: IndexMap::new(),
            external_systems: IndexMap::new(),
            databases: IndexMap::new(),
            queues: IndexMap::new(),
            services: IndexMap::new(),
            technologies: IndexMap::new(),
            technology_bundles: IndexMap::new(),
            workflows: IndexMap::new(),
        }
    }

    /// The raw document tree backing this model.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// The name of the file the document came from, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns `true` if an entity of `kind` named `name` exists.
    pub fn contains(&self, kind: EntityKind, name: &str) -> bool {
        match kind {
            EntityKind::Version => self.version.as_ref().is_some_and(|v| v.value == name),
            EntityKind::System => self.system.as_ref().is_some_and(|s| s.name == name),
            EntityKind::Persona => self.personas.contains_key(name),
            EntityKind::ExternalSystem => self.external_systems.contains_key(name),
            EntityKind::Database => self.databases.contains_key(name),
            EntityKind::Queue => self.queues.contains_key(name),
            EntityKind::Service => self.services.contains_key(name),
            EntityKind::Technology => self.technologies.contains_key(name),
            EntityKind::TechnologyBundle => self.technology_bundles.contains_key(name),
            EntityKind::Workflow => self.workflows.contains_key(name),
        }
    }

    /// Resolve a workflow actor name.
    ///
    /// Personas are tried first, then external systems, then services.
    pub fn participant(&self, name: &str) -> Option<Participant> {
        self.participant_kinds(name)
            .into_iter()
            .next()
            .map(|kind| Participant {
                kind,
                name: name.to_string(),
            })
    }

    /// Every participant kind that declares an entity named `name`.
    pub fn participant_kinds(&self, name: &str) -> Vec<ParticipantKind> {
        ParticipantKind::ALL
            .into_iter()
            .filter(|kind| self.contains(kind.entity_kind(), name))
            .collect()
    }

    /// The number of named entities in the model, excluding the version.
    pub fn entity_count(&self) -> usize {
        usize::from(self.system.is_some())
            + self.personas.len()
            + self.external_systems.len()
            + self.databases.len()
            + self.queues.len()
            + self.services.len()
            + self.technologies.len()
            + self.technology_bundles.len()
            + self.workflows.len()
    }
}
