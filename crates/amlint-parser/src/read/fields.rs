//! Shared field readers for entity maps.

use std::collections::HashSet;

use indexmap::IndexMap;

use amlint_core::{
    model::{Entity, EntityKind, Reference},
    position::Position,
    tree::{Node, Shape},
};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode};

/// An entity that can be read from one element of a list section.
pub(super) trait ReadEntity: Entity + Sized {
    /// Create the entity once its name is known.
    fn create(kind: EntityKind, name: String, position: Position) -> Self;

    /// Read one field other than `name`.
    ///
    /// Returns `false` if the field is not known for this entity.
    fn read_field(
        &mut self,
        field: &str,
        value: &Node,
        diagnostics: &mut DiagnosticCollector,
    ) -> bool;
}

/// Read a sequence-of-maps section into `table`.
///
/// An absent section yields no entities and no diagnostics.
pub(super) fn read_list<E: ReadEntity>(
    kind: EntityKind,
    tag: &str,
    node: Option<&Node>,
    table: &mut IndexMap<String, E>,
    diagnostics: &mut DiagnosticCollector,
) {
    let Some(node) = node else {
        return;
    };
    let Some(items) = node.as_sequence() else {
        diagnostics.emit(Diagnostic::type_error(tag, node, Shape::Sequence));
        return;
    };

    for item in items {
        if let Some(entity) = read_element::<E>(kind, item, table, diagnostics) {
            table.insert(entity.name().to_string(), entity);
        }
    }
}

fn read_element<E: ReadEntity>(
    kind: EntityKind,
    item: &Node,
    table: &IndexMap<String, E>,
    diagnostics: &mut DiagnosticCollector,
) -> Option<E> {
    let Some(entries) = item.as_mapping() else {
        diagnostics.emit(Diagnostic::type_error(kind.as_str(), item, Shape::Map));
        return None;
    };

    let (name, name_node) = required_scalar("name", item, diagnostics)?;
    let duplicate = table.contains_key(name);
    if duplicate {
        diagnostics.emit(
            Diagnostic::node_error(format!("Duplicate {kind} name: {name}"), name_node)
                .with_code(ErrorCode::E102)
                .with_help(format!("every {kind} needs a unique name")),
        );
    }

    // A duplicate is still read for its field diagnostics, then dropped.
    let mut entity = E::create(kind, name.to_string(), item.position());
    for field in fields(kind.as_str(), entries, diagnostics) {
        if field.name != "name" && !entity.read_field(field.name, field.value, diagnostics) {
            diagnostics.emit(unknown_field(kind.as_str(), &field));
        }
    }
    (!duplicate).then_some(entity)
}

/// One key/value pair of an entity map.
pub(super) struct Field<'a> {
    pub name: &'a str,
    pub key: &'a Node,
    pub value: &'a Node,
}

/// Iterate the fields of an entity map, reporting non-scalar and repeated keys.
///
/// Repeated keys are reported once per repetition and only their first
/// occurrence is returned.
pub(super) fn fields<'a>(
    owner: &str,
    entries: &'a [(Node, Node)],
    diagnostics: &mut DiagnosticCollector,
) -> Vec<Field<'a>> {
    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let Some(scalar) = key.as_scalar() else {
            diagnostics.emit(Diagnostic::type_error(
                &format!("{owner} field name"),
                key,
                Shape::Scalar,
            ));
            continue;
        };
        let name = scalar.value();
        if !seen.insert(name) {
            diagnostics.emit(
                Diagnostic::node_error(format!("Duplicate {owner} field: {name}"), key)
                    .with_code(ErrorCode::E105),
            );
            continue;
        }
        fields.push(Field { name, key, value });
    }
    fields
}

/// Find a required, non-empty scalar field of a map node.
///
/// Reports a missing, non-scalar or empty value and returns `None` for it.
pub(super) fn required_scalar<'a>(
    field: &str,
    node: &'a Node,
    diagnostics: &mut DiagnosticCollector,
) -> Option<(&'a str, &'a Node)> {
    let value = node
        .as_mapping()?
        .iter()
        .find(|(key, _)| key.as_str() == Some(field))
        .map(|(_, value)| value);

    let Some(value) = value else {
        diagnostics.emit(
            Diagnostic::node_error(format!("Missing required field: {field}"), node)
                .with_code(ErrorCode::E101),
        );
        return None;
    };
    if value.as_scalar().is_none() {
        diagnostics.emit(Diagnostic::type_error(field, value, Shape::Scalar));
        return None;
    }
    match value.as_str() {
        Some(text) if !text.trim().is_empty() => Some((text, value)),
        _ => {
            diagnostics.emit(
                Diagnostic::node_error(format!("Missing required field: {field}"), value)
                    .with_code(ErrorCode::E101)
                    .with_help(format!("{field} must not be empty")),
            );
            None
        }
    }
}

/// Read an optional free-text field. A null value means absent.
pub(super) fn read_text(
    field: &str,
    value: &Node,
    diagnostics: &mut DiagnosticCollector,
) -> Option<String> {
    if value.as_scalar().is_none() {
        diagnostics.emit(Diagnostic::type_error(field, value, Shape::Scalar));
        return None;
    }
    value.as_str().map(str::to_string)
}

/// Read a list of entity names. A null value is an empty list.
pub(super) fn read_references(
    field: &str,
    value: &Node,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<Reference> {
    if value.is_null() {
        return Vec::new();
    }
    let Some(items) = value.as_sequence() else {
        diagnostics.emit(Diagnostic::type_error(field, value, Shape::Sequence));
        return Vec::new();
    };

    let mut references = Vec::with_capacity(items.len());
    for item in items {
        if item.as_scalar().is_none() {
            diagnostics.emit(Diagnostic::type_error(
                &format!("{field} entry"),
                item,
                Shape::Scalar,
            ));
            continue;
        }
        match item.as_str() {
            Some(name) if !name.trim().is_empty() => {
                references.push(Reference::new(name, item.position()));
            }
            _ => diagnostics.emit(
                Diagnostic::node_error(format!("Empty {field} entry"), item)
                    .with_code(ErrorCode::E101),
            ),
        }
    }
    references
}

/// Warning for a field the entity does not define, anchored at its key.
pub(super) fn unknown_field(owner: &str, field: &Field<'_>) -> Diagnostic {
    Diagnostic::node_warning(format!("Unknown {owner} field: {}", field.name), field.key)
        .with_code(ErrorCode::E104)
}
