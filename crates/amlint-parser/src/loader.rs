//! YAML loading into the generic document tree.
//!
//! The loader drives the `yaml-rust2` event parser and assembles a positioned
//! [`Node`] tree from its events. Only the first document of a stream is
//! loaded. Anchors are not tracked and aliases stay [`NodeKind::Alias`]
//! nodes.

use log::trace;
use thiserror::Error;
use yaml_rust2::{
    parser::{Event, MarkedEventReceiver, Parser},
    scanner::{Marker, ScanError, TScalarStyle},
};

use amlint_core::{
    position::Position,
    tree::{Node, NodeKind, Scalar},
};

/// The text is not well-formed YAML.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct LoadError(#[from] ScanError);

/// Load the first document of `text`.
///
/// Returns `Ok(None)` when the text holds no document at all (empty or
/// comment-only input), otherwise a [`NodeKind::Document`] node wrapping the
/// document root.
///
/// # Errors
///
/// Returns [`LoadError`] if the text cannot be scanned or parsed.
pub fn load(text: &str) -> Result<Option<Node>, LoadError> {
    let mut builder = TreeBuilder::default();
    let mut parser = Parser::new_from_str(text);
    parser.load(&mut builder, false)?;
    Ok(builder.document)
}

/// A collection still receiving children.
enum Frame {
    Sequence {
        position: Position,
        items: Vec<Node>,
    },
    Mapping {
        position: Position,
        entries: Vec<(Node, Node)>,
        key: Option<Node>,
    },
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    document_start: Option<Position>,
    root: Option<Node>,
    document: Option<Node>,
}

impl TreeBuilder {
    /// Attach a finished node to the enclosing collection, or make it the
    /// document root.
    fn complete(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping { entries, key, .. }) => match key.take() {
                Some(key) => entries.push((key, node)),
                None => *key = Some(node),
            },
            None => self.root = Some(node),
        }
    }

    fn finish_document(&mut self) {
        let (Some(position), Some(root)) = (self.document_start.take(), self.root.take()) else {
            return;
        };
        if self.document.is_none() {
            self.document = Some(Node::new(NodeKind::Document(Box::new(root)), position));
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event, mark: Marker) {
        // Markers count lines from 1 and columns from 0.
        let position = Position::new(mark.line(), mark.col() + 1);
        match event {
            Event::DocumentStart { .. } => self.document_start = Some(position),
            Event::DocumentEnd { .. } => self.finish_document(),
            Event::Scalar(value, style, ..) => {
                let scalar = match style {
                    TScalarStyle::Plain => Scalar::plain(value),
                    _ => Scalar::quoted(value),
                };
                self.complete(Node::new(NodeKind::Scalar(scalar), position));
            }
            Event::Alias { .. } => self.complete(Node::new(NodeKind::Alias, position)),
            Event::SequenceStart { .. } => self.stack.push(Frame::Sequence {
                position,
                items: Vec::new(),
            }),
            Event::MappingStart { .. } => self.stack.push(Frame::Mapping {
                position,
                entries: Vec::new(),
                key: None,
            }),
            Event::SequenceEnd { .. } | Event::MappingEnd { .. } => {
                let node = match self.stack.pop() {
                    Some(Frame::Sequence { position, items }) => Node::sequence(items, position),
                    Some(Frame::Mapping {
                        position, entries, ..
                    }) => Node::mapping(entries, position),
                    None => return,
                };
                self.complete(node);
            }
            other => trace!(event:? = other; "Ignoring YAML event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use amlint_core::tree::Shape;

    use super::*;

    fn root(text: &str) -> Node {
        load(text)
            .expect("valid YAML")
            .expect("one document")
            .into_root()
    }

    #[test]
    fn test_empty_text_has_no_document() {
        assert!(load("").unwrap().is_none());
        assert!(load("# just a comment\n").unwrap().is_none());
    }

    #[test]
    fn test_document_wraps_root() {
        let document = load("a: 1\n").unwrap().unwrap();

        assert_eq!(document.shape(), Shape::Document);
        assert_eq!(document.into_root().shape(), Shape::Map);
    }

    #[test]
    fn test_mapping_positions() {
        let node = root("system:\n  name: shop\n");
        let entries = node.as_mapping().unwrap();

        assert_eq!(entries.len(), 1);
        let (key, value) = &entries[0];
        assert_eq!(key.as_str(), Some("system"));
        assert_eq!(key.position(), Position::new(1, 1));

        let (name_key, name) = &value.as_mapping().unwrap()[0];
        assert_eq!(name_key.position(), Position::new(2, 3));
        assert_eq!(name.as_str(), Some("shop"));
        assert_eq!(name.position(), Position::new(2, 9));
    }

    #[test]
    fn test_sequence_of_maps() {
        let node = root("services:\n  - name: api\n  - name: worker\n");
        let (_, services) = &node.as_mapping().unwrap()[0];
        let items = services.as_sequence().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].position().line(), 3);
        assert_eq!(items[1].shape(), Shape::Map);
    }

    #[test]
    fn test_quoted_null_is_a_string() {
        let node = root("a: ~\nb: \"~\"\nc:\n");
        let entries = node.as_mapping().unwrap();

        assert!(entries[0].1.is_null());
        assert_eq!(entries[1].1.as_str(), Some("~"));
        assert!(entries[2].1.is_null());
    }

    #[test]
    fn test_aliases_are_not_expanded() {
        let node = root("base: &base\n  name: x\ncopy: *base\n");
        let (_, copy) = &node.as_mapping().unwrap()[1];

        assert_eq!(copy.shape(), Shape::Alias);
    }

    #[test]
    fn test_duplicate_keys_are_preserved() {
        let node = root("a: 1\na: 2\n");

        assert_eq!(node.as_mapping().unwrap().len(), 2);
    }

    #[test]
    fn test_only_first_document_is_loaded() {
        let node = root("first: 1\n---\nsecond: 2\n");
        let (key, _) = &node.as_mapping().unwrap()[0];

        assert_eq!(key.as_str(), Some("first"));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(load("key: \"unterminated\n").is_err());
        assert!(load("a: [1, 2\n").is_err());
    }
}
