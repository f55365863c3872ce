//! Entity records of the architecture model.
//!
//! Each record keeps the `*_refs` lists filled in by its reader alongside the
//! link sets filled in by the connectors. Back-links (such as
//! [`DataStore::services`]) are written by the connector of the entity that
//! declares the reference.

use crate::{
    model::{EntityKind, Links, Participant, Reference},
    position::Position,
};

/// Common view over the named entities of the model.
pub trait Entity {
    /// The kind of this entity.
    fn kind(&self) -> EntityKind;

    /// The declared name.
    fn name(&self) -> &str;

    /// The position of the entity's declaration.
    fn position(&self) -> Position;
}

macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl Entity for $ty {
            fn kind(&self) -> EntityKind {
                $kind
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn position(&self) -> Position {
                self.position
            }
        }
    };
}

/// The document format version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub value: String,
    pub position: Position,
}

/// The single system the document describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct System {
    pub name: String,
    pub description: Option<String>,
    pub position: Position,
}

impl System {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            description: None,
            position,
        }
    }
}

impl_entity!(System, EntityKind::System);

/// A human role interacting with the system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub description: Option<String>,
    pub position: Position,
    pub workflow_refs: Vec<Reference>,
    pub workflows: Links,
}

impl Persona {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            ..Self::default()
        }
    }
}

impl_entity!(Persona, EntityKind::Persona);

/// A system outside the described architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalSystem {
    pub name: String,
    pub description: Option<String>,
    pub position: Position,
    pub workflow_refs: Vec<Reference>,
    pub workflows: Links,
    /// Services calling this system.
    pub services: Links,
}

impl ExternalSystem {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            ..Self::default()
        }
    }
}

impl_entity!(ExternalSystem, EntityKind::ExternalSystem);

/// A database or a queue.
///
/// Both kinds of data store share one record; [`DataStore::kind`] tells them
/// apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStore {
    pub kind: EntityKind,
    pub name: String,
    pub description: Option<String>,
    pub position: Position,
    pub technology_refs: Vec<Reference>,
    pub technologies: Links,
    /// Services using this store.
    pub services: Links,
}

impl DataStore {
    /// Create a data store of `kind`, which is either
    /// [`EntityKind::Database`] or [`EntityKind::Queue`].
    pub fn new(kind: EntityKind, name: impl Into<String>, position: Position) -> Self {
        debug_assert!(matches!(kind, EntityKind::Database | EntityKind::Queue));
        Self {
            kind,
            name: name.into(),
            description: None,
            position,
            technology_refs: Vec::new(),
            technologies: Links::new(),
            services: Links::new(),
        }
    }
}

impl Entity for DataStore {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// A deployable unit of the architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub description: Option<String>,
    pub position: Position,

    pub technology_refs: Vec<Reference>,
    pub bundle_refs: Vec<Reference>,
    pub database_refs: Vec<Reference>,
    pub queue_refs: Vec<Reference>,
    pub dependency_refs: Vec<Reference>,
    pub external_system_refs: Vec<Reference>,
    pub workflow_refs: Vec<Reference>,

    /// Technologies named directly by the service.
    pub technologies: Links,
    pub technology_bundles: Links,
    /// Direct technologies plus every technology of every bundle.
    pub effective_technologies: Links,
    pub databases: Links,
    pub queues: Links,
    pub depends_on: Links,
    /// Services depending on this one.
    pub dependents: Links,
    pub external_systems: Links,
    pub workflows: Links,
}

impl Service {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            ..Self::default()
        }
    }
}

impl_entity!(Service, EntityKind::Service);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Technology {
    pub name: String,
    pub description: Option<String>,
    pub position: Position,
}

impl Technology {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            description: None,
            position,
        }
    }
}

impl_entity!(Technology, EntityKind::Technology);

/// A named group of technologies used together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnologyBundle {
    pub name: String,
    pub description: Option<String>,
    pub position: Position,
    pub technology_refs: Vec<Reference>,
    pub technologies: Links,
}

impl TechnologyBundle {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            ..Self::default()
        }
    }
}

impl_entity!(TechnologyBundle, EntityKind::TechnologyBundle);

/// One step of a workflow: an actor and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    pub actor: Reference,
    pub action: Option<String>,
    pub position: Position,
    /// The resolved actor, set by the workflow connector.
    pub participant: Option<Participant>,
}

impl WorkflowStep {
    pub fn new(actor: Reference, position: Position) -> Self {
        Self {
            actor,
            action: None,
            position,
            participant: None,
        }
    }
}

/// A business flow through personas, external systems and services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workflow {
    pub name: String,
    pub description: Option<String>,
    pub position: Position,
    pub steps: Vec<WorkflowStep>,
    pub personas: Links,
    pub external_systems: Links,
    pub services: Links,
}

impl Workflow {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            ..Self::default()
        }
    }
}

impl_entity!(Workflow, EntityKind::Workflow);
