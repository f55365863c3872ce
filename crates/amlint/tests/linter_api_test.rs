//! Integration tests for the Linter API

use std::fs;

use tempfile::tempdir;

use amlint::{
    AmlintError, ErrorCode, Linter,
    config::{AppConfig, LintConfig, ReportConfig},
};

const SHOP: &str = r#"
system:
  name: shop
databases:
  - name: orders
services:
  - name: api
    databases: [orders]
"#;

fn denying() -> Linter {
    Linter::new(AppConfig::new(LintConfig::new(true), ReportConfig::default()))
}

#[test]
fn test_valid_document_passes() {
    let outcome = Linter::default().lint(SHOP, None).expect("Failed to lint");

    assert!(outcome.warnings().is_empty());
    assert!(outcome.model().services.contains_key("api"));
}

#[test]
fn test_errors_fail_the_run() {
    let text = SHOP.replace("[orders]", "[orders-db]");

    let err = Linter::default().lint(&text, Some("shop.yaml")).unwrap_err();

    match err {
        AmlintError::Lint { diagnostics, src } => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].code(), Some(ErrorCode::E200));
            assert_eq!(diagnostics[0].source(), Some("shop.yaml"));
            assert_eq!(src, text);
        }
        other => panic!("Expected a lint error, got {other:?}"),
    }
}

#[test]
fn test_warnings_pass_unless_denied() {
    let text = format!("{SHOP}owner: platform-team\n");

    let outcome = Linter::default().lint(&text, None).expect("Failed to lint");
    assert_eq!(outcome.warnings().len(), 1);

    let err = denying().lint(&text, None).unwrap_err();
    assert!(matches!(err, AmlintError::Lint { .. }));
}

#[test]
fn test_unparseable_document_fails() {
    let err = Linter::default().lint("system: [", None).unwrap_err();

    assert_eq!(err.to_string(), "Lint failed: 1 error(s), 0 warning(s)");
}

#[test]
fn test_lint_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shop.yaml");
    fs::write(&path, SHOP).unwrap();

    let outcome = Linter::default().lint_path(&path).expect("Failed to lint");

    assert_eq!(outcome.source(), SHOP);
    assert_eq!(outcome.into_model().databases.len(), 1);
}

#[test]
fn test_lint_missing_path() {
    let dir = tempdir().unwrap();

    let err = Linter::default()
        .lint_path(dir.path().join("missing.yaml"))
        .unwrap_err();

    match err {
        AmlintError::Lint { diagnostics, src } => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].code(), Some(ErrorCode::E003));
            assert!(diagnostics[0].severity().is_error());
            assert!(diagnostics[0].position().is_none());
            assert!(diagnostics[0].message().starts_with("Couldn't read file"));
            assert!(src.is_empty());
        }
        other => panic!("Expected a lint error, got {other:?}"),
    }
}

#[test]
fn test_config_from_toml() {
    let config: AppConfig = toml::from_str("[lint]\ndeny_warnings = true\n").unwrap();

    assert!(Linter::new(config).config().lint().deny_warnings());
}
