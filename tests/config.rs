//! Loading and validating the fixture documents end to end.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tint::{
    find_config, load, validate_config, Format, Issue, LoadOptions, Strictness, ThemeConfig,
    ValidationResult,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn report(result: &ValidationResult) -> String {
    result
        .iter()
        .map(|d| format!("{}[{}]: {}", d.severity, d.code(), d.message()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn franken() -> ThemeConfig {
    let path = fixtures_dir().join("franken.yaml");
    tint::config::read(&path).unwrap()
}

#[test]
fn strict_load_rejects_mistyped_dark_token() {
    let path = fixtures_dir().join("franken.yaml");
    let err = load(&path, &LoadOptions::default()).unwrap_err();

    assert_eq!(
        err.issue(),
        Some(&Issue::UnresolvedReference {
            token: "--primary".to_string(),
            scope: ".dark".to_string(),
            referrer: "the :root scope".to_string(),
        })
    );
}

#[test]
fn lenient_load_keeps_warnings() {
    let path = fixtures_dir().join("franken.yaml");
    let loaded = load(&path, &LoadOptions::lenient()).unwrap();

    assert_eq!(loaded.path, Some(path));
    assert!(loaded
        .warnings
        .iter()
        .any(|w| matches!(w, Issue::SuspiciousTokenName { suggestion, .. } if suggestion == "--primary")));
    assert_eq!(loaded.warnings.len(), 9);
}

#[test]
fn franken_diagnostics() {
    let result = validate_config(&franken(), Strictness::Strict);

    insta::assert_snapshot!(report(&result), @r"
    warning[tint::validate::token_name]: Suspicious token name ' --primary' in .dark
    error[tint::validate::unresolved_reference]: Unresolved reference: '--primary' used by the :root scope is not defined in .dark
    error[tint::validate::unresolved_reference]: Unresolved reference: ' --primary' used by the .dark scope is not defined in :root
    error[tint::validate::unresolved_reference]: Unresolved reference: '--primary' used by theme.extend.colors.primary.DEFAULT is not defined in .dark
    warning[tint::validate::unresolved_reference]: Unresolved reference: '--radius' used by theme.extend.borderRadius.lg is not defined in :root
    warning[tint::validate::unresolved_reference]: Unresolved reference: '--radius' used by theme.extend.borderRadius.md is not defined in :root
    warning[tint::validate::unresolved_reference]: Unresolved reference: '--radius' used by theme.extend.borderRadius.sm is not defined in :root
    warning[tint::validate::duplicate_glob]: Content glob './**/*.html' is listed more than once
    warning[tint::validate::duplicate_glob]: Content glob './**/*.templ' is listed more than once
    ");
}

#[test]
fn fixing_the_key_clears_the_errors() {
    let source = std::fs::read_to_string(fixtures_dir().join("franken.yaml")).unwrap();
    let fixed = source.replace("\" --primary\"", "\"--primary\"");

    let loaded = tint::load_str(&fixed, Format::Yaml, &LoadOptions::default()).unwrap();
    assert_eq!(loaded.path, None);
    assert_eq!(loaded.warnings.len(), 5);
}

#[test]
fn yaml_and_json_agree() {
    let config = franken();
    let json = config.to_json_string().unwrap();
    assert_eq!(Format::Json.parse(&json).unwrap(), config);

    let yaml = config.to_yaml_string().unwrap();
    assert_eq!(Format::Yaml.parse(&yaml).unwrap().to_yaml_string().unwrap(), yaml);
}

#[test]
fn find_config_in_site() {
    let site = fixtures_dir().join("site");
    assert_eq!(find_config(&site), Some(site.join("tint.yaml")));
    assert_eq!(find_config(fixtures_dir()), None);
}

#[test]
fn merged_palette_keeps_document_order() {
    let palette = franken().palette();
    let names: Vec<&str> = palette.scope_names().collect();
    assert_eq!(names, vec![":root", ".dark"]);

    let root = palette.root().unwrap();
    assert_eq!(root.names().next(), Some("--background"));
    assert_eq!(root.len(), 19);
}
