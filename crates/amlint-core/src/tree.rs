//! The generic document tree consumed by the readers.
//!
//! A [`Node`] is the parser-independent view of one YAML node: its kind, its
//! children and the position of its first character. The only structural
//! vocabulary the rest of the linter relies on is the [`Shape`] of a node,
//! which is also what appears in type-mismatch messages such as
//! `services must be a sequence, not a scalar`.

use std::fmt;

use crate::position::Position;

/// The structural kind of a node, as named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Document,
    Map,
    Sequence,
    Scalar,
    Alias,
}

impl Shape {
    /// Returns the label used for this shape in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Document => "document",
            Shape::Map => "map",
            Shape::Sequence => "sequence",
            Shape::Scalar => "scalar",
            Shape::Alias => "alias",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar value together with whether it was written quoted.
///
/// Quoting matters only for null detection: a plain `~` is null, a quoted
/// `"~"` is the literal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    value: String,
    quoted: bool,
}

impl Scalar {
    /// Create a plain (unquoted) scalar.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    /// Create a quoted scalar.
    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }

    /// The raw scalar text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` for the YAML null spellings written without quotes.
    pub fn is_null(&self) -> bool {
        !self.quoted && matches!(self.value.as_str(), "" | "~" | "null" | "Null" | "NULL")
    }
}

/// The content of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A document wrapping its single root node.
    Document(Box<Node>),
    /// Key/value pairs in document order. Duplicate keys are preserved.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
    /// A reference to an anchored node. Aliases are never expanded.
    Alias,
}

/// A positioned node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    position: Position,
}

impl Node {
    /// Create a node of the given kind at the given position.
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Create a mapping node.
    pub fn mapping(entries: Vec<(Node, Node)>, position: Position) -> Self {
        Self::new(NodeKind::Mapping(entries), position)
    }

    /// Create an empty mapping with no source anchor.
    ///
    /// This stands in for an empty document.
    pub fn empty_mapping() -> Self {
        Self::mapping(Vec::new(), Position::NONE)
    }

    /// Create a sequence node.
    pub fn sequence(items: Vec<Node>, position: Position) -> Self {
        Self::new(NodeKind::Sequence(items), position)
    }

    /// Create a plain scalar node.
    pub fn scalar(value: impl Into<String>, position: Position) -> Self {
        Self::new(NodeKind::Scalar(Scalar::plain(value)), position)
    }

    /// The node's content.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The position of the node's first character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Classify the node for use in messages.
    pub fn shape(&self) -> Shape {
        match self.kind {
            NodeKind::Document(_) => Shape::Document,
            NodeKind::Mapping(_) => Shape::Map,
            NodeKind::Sequence(_) => Shape::Sequence,
            NodeKind::Scalar(_) => Shape::Scalar,
            NodeKind::Alias => Shape::Alias,
        }
    }

    /// Borrow the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[(Node, Node)]> {
        match &self.kind {
            NodeKind::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Borrow the items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the scalar if this is a scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match &self.kind {
            NodeKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The scalar text, or `None` for non-scalars and null scalars.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar()
            .filter(|scalar| !scalar.is_null())
            .map(Scalar::value)
    }

    /// Returns `true` if this node is a null scalar.
    pub fn is_null(&self) -> bool {
        self.as_scalar().is_some_and(Scalar::is_null)
    }

    /// Unwrap a document node into its root, leaving other nodes unchanged.
    pub fn into_root(self) -> Node {
        match self.kind {
            NodeKind::Document(root) => *root,
            _ => self,
        }
    }
}
