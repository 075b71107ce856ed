//! Validation for theme configuration documents.
//!
//! Runs a suite of checks against a parsed document and reports errors
//! and warnings. Used by both `tint validate` and the configuration loader.

mod checks;
mod issue;
mod warning;

pub use issue::Issue;
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::ThemeConfig;

/// How unresolved token references are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Unresolved references are errors and abort loading.
    #[default]
    Strict,
    /// Unresolved references are warnings.
    Lenient,
}

/// Run all validation checks against the document.
pub fn validate_config(config: &ThemeConfig, strictness: Strictness) -> ValidationResult {
    let palette = config.palette();
    let mut result = ValidationResult::new();

    result.merge(checks::check_token_values(&palette));
    result.merge(checks::check_token_names(&palette));
    result.merge(checks::check_scope_parity(&palette, strictness));
    result.merge(checks::check_color_refs(config, &palette, strictness));
    result.merge(checks::check_radius_refs(config, &palette));
    result.merge(checks::check_animation_refs(config));
    result.merge(checks::check_unused_keyframes(config));
    result.merge(checks::check_patterns(config));
    result.merge(checks::check_duplicate_globs(config));
    result.merge(checks::check_plugins(config));

    tracing::debug!(
        errors = result.error_count(),
        warnings = result.warning_count(),
        "validated configuration"
    );

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        printer.diagnostic(d);
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("{} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("with {} warning(s)", warnings));
    } else {
        printer.success("Passed", "no problems found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AnimationBinding, ColorToken, KeyframeDefinition, Palette, PaletteScope, Preset,
        DARK_SCOPE, ROOT_SCOPE,
    };

    fn config_with_palette(root: &[(&str, &str)], dark: &[(&str, &str)]) -> ThemeConfig {
        let mut palette = Palette::new();
        palette.insert_scope(ROOT_SCOPE, root.iter().copied().collect::<PaletteScope>());
        palette.insert_scope(DARK_SCOPE, dark.iter().copied().collect::<PaletteScope>());
        ThemeConfig {
            presets: vec![Preset::new("franken-ui/shadcn-ui/preset-quick", palette)],
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_empty_config() {
        let result = validate_config(&ThemeConfig::default(), Strictness::Strict);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_valid_config() {
        let mut config = config_with_palette(
            &[("--ring", "0 0% 3.9%")],
            &[("--ring", "0 0% 83.1%")],
        );
        config.theme.extend.colors.insert(
            "ring".to_string(),
            ColorToken::Single("hsl(var(--ring) / <alpha-value>)".to_string()),
        );
        config
            .theme
            .extend
            .keyframes
            .insert("spin".to_string(), KeyframeDefinition::new());
        config
            .theme
            .extend
            .animation
            .insert("spin".to_string(), AnimationBinding::new("spin 1s linear infinite"));

        let result = validate_config(&config, Strictness::Strict);
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_validate_dark_scope_missing_key() {
        let config = config_with_palette(
            &[("--background", "0 0% 100%"), ("--accent", "0 0% 98%")],
            &[("--background", "0 0% 3.9%")],
        );

        let result = validate_config(&config, Strictness::Strict);
        match result.first_error() {
            Some(Issue::UnresolvedReference { token, scope, .. }) => {
                assert_eq!(token, "--accent");
                assert_eq!(scope, DARK_SCOPE);
            }
            other => panic!("expected UnresolvedReference, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_lenient_downgrades_references() {
        let config = config_with_palette(&[("--accent", "0 0% 98%")], &[]);
        let result = validate_config(&config, Strictness::Lenient);
        assert!(!result.has_errors());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_lenient_keeps_malformed_values_fatal() {
        let config = config_with_palette(&[("--accent", "white")], &[("--accent", "white")]);
        let result = validate_config(&config, Strictness::Lenient);
        assert_eq!(result.error_count(), 2);
    }
}
