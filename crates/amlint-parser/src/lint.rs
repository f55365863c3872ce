//! The lint driver: load, read, connect and, on a clean model, validate.

use std::{fs, path::Path};

use log::{debug, info};

use amlint_core::{
    model::ArchitectureModel,
    tree::{Node, Shape},
};

use crate::{
    connect::Connector,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    loader,
    read::Section,
    validate::Validator,
};

/// The model of a lint run, if the document was a map, and every finding.
pub type LintResult = (Option<ArchitectureModel>, Vec<Diagnostic>);

/// Lint in-memory text. Diagnostics carry no source name.
///
/// # Example
///
/// ```
/// let (model, diagnostics) = amlint_parser::lint_text("system:\n  name: shop\n");
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(model.unwrap().system.unwrap().name, "shop");
/// ```
pub fn lint_text(text: &str) -> LintResult {
    lint_named(text, None)
}

/// Lint text read from `source`, stamping the name on every diagnostic.
pub fn lint_named(text: &str, source: Option<&str>) -> LintResult {
    let (model, diagnostics) = run(text, source);
    let diagnostics = match source {
        Some(source) => diagnostics
            .into_iter()
            .map(|diagnostic| diagnostic.with_source(source))
            .collect(),
        None => diagnostics,
    };
    (model, diagnostics)
}

/// Lint the file at `path`.
///
/// A file that cannot be read yields a single unpositioned error and no
/// model.
pub fn lint_file(path: impl AsRef<Path>) -> LintResult {
    let path = path.as_ref();
    let name = path.display().to_string();
    match read_source(path) {
        Ok(text) => lint_named(&text, Some(&name)),
        Err(diagnostic) => (None, vec![diagnostic.with_source(name)]),
    }
}

/// Read the text of the file at `path`.
///
/// # Errors
///
/// Returns an unpositioned [`ErrorCode::E003`] diagnostic if the file cannot
/// be read as UTF-8 text.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, Diagnostic> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| {
        Diagnostic::file_error(format!("Couldn't read file {}: {err}", path.display()))
            .with_code(ErrorCode::E003)
    })
}

fn run(text: &str, source: Option<&str>) -> LintResult {
    let root = match loader::load(text) {
        Ok(Some(document)) => match document.into_root() {
            root if root.is_null() => Node::empty_mapping(),
            root => root,
        },
        Ok(None) => Node::empty_mapping(),
        Err(err) => {
            debug!(err:% = err; "Document is not YAML");
            return (
                None,
                vec![
                    Diagnostic::file_error("Invalid YAML")
                        .with_code(ErrorCode::E001)
                        .with_help(err.to_string()),
                ],
            );
        }
    };
    let Some(entries) = root.as_mapping() else {
        return (
            None,
            vec![
                Diagnostic::file_error(format!(
                    "Invalid YAML: must be a map, not a {}",
                    root.shape()
                ))
                .with_code(ErrorCode::E002),
            ],
        );
    };

    let mut diagnostics = DiagnosticCollector::new();
    let sections = sections(entries, &mut diagnostics);
    let mut model = ArchitectureModel::new(root.clone(), source.map(str::to_string));

    let absent = Section::ALL
        .into_iter()
        .filter(|section| !sections.iter().any(|(present, _)| present == section));
    let reads = sections
        .iter()
        .map(|(section, node)| (*section, Some(*node)))
        .chain(absent.map(|section| (section, None)));
    for (section, node) in reads {
        diagnostics.extend(section.read(node, source, &mut model));
    }

    for connector in Connector::ORDER {
        diagnostics.extend(connector.connect(&mut model));
    }

    if diagnostics.is_empty() {
        for validator in Validator::ALL {
            diagnostics.extend(validator.validate(&model));
        }
    } else {
        debug!(source; "Skipping validators on a model with diagnostics");
    }

    let diagnostics = diagnostics.finish();
    info!(
        source,
        entities = model.entity_count(),
        diagnostics = diagnostics.len();
        "Lint finished"
    );
    (Some(model), diagnostics)
}

/// Split the top-level map into known sections, in document order.
///
/// Unknown keys are warned about and a repeated section keeps its first
/// value.
fn sections<'a>(
    entries: &'a [(Node, Node)],
    diagnostics: &mut DiagnosticCollector,
) -> Vec<(Section, &'a Node)> {
    let mut sections: Vec<(Section, &Node)> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let Some(tag) = key.as_scalar().map(|scalar| scalar.value()) else {
            diagnostics.emit(Diagnostic::type_error(
                "top-level element name",
                key,
                Shape::Scalar,
            ));
            continue;
        };
        match Section::from_tag(tag) {
            None => diagnostics.emit(
                Diagnostic::node_warning(format!("Unknown top-level element: {tag}"), key)
                    .with_code(ErrorCode::E103),
            ),
            Some(section) if sections.iter().any(|(seen, _)| *seen == section) => diagnostics
                .emit(
                    Diagnostic::node_error(format!("Duplicate top-level element: {tag}"), key)
                        .with_code(ErrorCode::E105),
                ),
            Some(section) => sections.push((section, value)),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(Diagnostic::message).collect()
    }

    #[test]
    fn test_invalid_yaml() {
        let (model, diagnostics) = lint_text("system: \"unterminated\n");

        assert!(model.is_none());
        assert_eq!(messages(&diagnostics), ["Invalid YAML"]);
        assert!(diagnostics[0].position().is_none());
        assert!(diagnostics[0].help().is_some());
    }

    #[test]
    fn test_scalar_document() {
        let (model, diagnostics) = lint_text("hello");

        assert!(model.is_none());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E002));
        assert!(diagnostics[0].severity().is_error());
    }

    #[test]
    fn test_empty_document_only_misses_system() {
        let (model, diagnostics) = lint_text("# nothing here\n");

        assert_eq!(messages(&diagnostics), ["Missing required element: system"]);
        assert_eq!(model.unwrap().entity_count(), 0);
    }

    #[test]
    fn test_explicit_empty_document_only_misses_system() {
        for text in ["---\n", "--- ~\n", "null\n"] {
            let (model, diagnostics) = lint_text(text);

            assert_eq!(
                messages(&diagnostics),
                ["Missing required element: system"],
                "{text:?}"
            );
            assert!(model.is_some());
        }
    }

    #[test]
    fn test_non_scalar_top_level_key_is_skipped() {
        let (model, diagnostics) = lint_text("? [a, b]\n: 1\nsystem:\n  name: shop\n");

        assert_eq!(
            messages(&diagnostics),
            ["top-level element name must be a scalar, not a sequence"]
        );
        assert!(diagnostics[0].severity().is_error());
        assert_eq!(diagnostics[0].line(), 1);
        assert_eq!(diagnostics[0].column(), 3);
        assert_eq!(model.unwrap().system.unwrap().name, "shop");
    }

    #[test]
    fn test_unknown_top_level_element() {
        let (model, diagnostics) = lint_text("system:\n  name: shop\nfoo: bar\n");

        assert_eq!(messages(&diagnostics), ["Unknown top-level element: foo"]);
        assert!(diagnostics[0].severity().is_warning());
        assert_eq!(diagnostics[0].line(), 3);
        assert_eq!(diagnostics[0].column(), 1);
        assert_eq!(model.unwrap().system.unwrap().name, "shop");
    }

    #[test]
    fn test_duplicate_top_level_element_keeps_first() {
        let (model, diagnostics) =
            lint_text("system:\n  name: shop\nsystem:\n  name: store\n");

        assert_eq!(messages(&diagnostics), ["Duplicate top-level element: system"]);
        assert_eq!(diagnostics[0].line(), 3);
        assert_eq!(model.unwrap().system.unwrap().name, "shop");
    }

    #[test]
    fn test_sections_in_document_order_then_absent() {
        let (_, diagnostics) = lint_text("services: 1\ndatabases: 2\n");

        assert_eq!(
            messages(&diagnostics),
            [
                "services must be a sequence, not a scalar",
                "databases must be a sequence, not a scalar",
                "Missing required element: system",
            ]
        );
    }

    #[test]
    fn test_validators_skipped_after_any_diagnostic() {
        let text = "system:\n  name: shop\ndatabases:\n  - name: orders\nextra: 1\n";

        let (_, diagnostics) = lint_text(text);

        assert_eq!(messages(&diagnostics), ["Unknown top-level element: extra"]);
    }

    #[test]
    fn test_validators_run_on_clean_model() {
        let (_, diagnostics) = lint_text("system:\n  name: shop\ndatabases:\n  - name: orders\n");

        assert_eq!(
            messages(&diagnostics),
            ["Database orders is not used by any service"]
        );
    }

    #[test]
    fn test_named_source_is_stamped() {
        let (_, diagnostics) = lint_named("{}", Some("arch.yaml"));

        assert_eq!(diagnostics[0].source(), Some("arch.yaml"));
        assert_eq!(lint_text("{}").1[0].source(), None);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/nonexistent/amlint/arch.yaml").unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::E003));
        assert!(err.message().starts_with("Couldn't read file /nonexistent/amlint/arch.yaml"));
        assert!(err.position().is_none());
    }
}
