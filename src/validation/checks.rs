//! Validation checks for a theme configuration.
//!
//! Each check takes the document (and the merged palette where needed) and
//! returns a `ValidationResult`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::TintError;
use crate::types::{var_refs, ColorToken, HslTriplet, Palette, ThemeConfig, ROOT_SCOPE};

use super::issue::Issue;
use super::warning::{Diagnostic, ValidationResult};
use super::Strictness;

fn reason(err: TintError) -> String {
    match err {
        TintError::Parse { message, .. } => message,
        other => other.to_string(),
    }
}

fn unresolved(strictness: Strictness, issue: Issue) -> Diagnostic {
    match strictness {
        Strictness::Strict => Diagnostic::error(issue),
        Strictness::Lenient => Diagnostic::warning(issue),
    }
}

/// Check that every palette value is an `H S% L%` triplet.
pub fn check_token_values(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (selector, scope) in palette.scopes() {
        for (key, value) in scope.iter() {
            if let Err(e) = HslTriplet::parse(value) {
                result.error(Issue::MalformedTokenValue {
                    scope: selector.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                    reason: reason(e),
                });
            }
        }
    }

    result
}

fn token_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^--[A-Za-z0-9_-]+$").expect("token name pattern is valid"))
}

/// Check that palette keys look like custom property names.
pub fn check_token_names(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (selector, scope) in palette.scopes() {
        for key in scope.names() {
            if token_name_pattern().is_match(key) {
                continue;
            }

            let trimmed = key.trim();
            let suggestion = if trimmed.starts_with("--") {
                trimmed.to_string()
            } else {
                format!("--{}", trimmed.trim_start_matches('-'))
            };

            result.warning(Issue::SuspiciousTokenName {
                scope: selector.to_string(),
                key: key.to_string(),
                suggestion,
            });
        }
    }

    result
}

/// Check that every scope defines the same token names as `:root`.
pub fn check_scope_parity(palette: &Palette, strictness: Strictness) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(root) = palette.root() else {
        return result;
    };

    for (selector, scope) in palette.scopes() {
        if selector == ROOT_SCOPE {
            continue;
        }

        for key in root.names() {
            if !scope.contains_exact(key) {
                result.push(unresolved(
                    strictness,
                    Issue::UnresolvedReference {
                        token: key.to_string(),
                        scope: selector.to_string(),
                        referrer: format!("the {} scope", ROOT_SCOPE),
                    },
                ));
            }
        }

        for key in scope.names() {
            if !root.contains_exact(key) {
                result.push(unresolved(
                    strictness,
                    Issue::UnresolvedReference {
                        token: key.to_string(),
                        scope: ROOT_SCOPE.to_string(),
                        referrer: format!("the {} scope", selector),
                    },
                ));
            }
        }
    }

    result
}

/// Scopes a reference must resolve in: `:root` always, plus every other
/// scope the palette declares.
fn required_scopes(palette: &Palette) -> Vec<&str> {
    let mut scopes = vec![ROOT_SCOPE];
    scopes.extend(palette.scope_names().filter(|s| *s != ROOT_SCOPE));
    scopes
}

fn is_defined(palette: &Palette, selector: &str, token: &str) -> bool {
    palette
        .scope(selector)
        .map(|scope| scope.contains_exact(token))
        .unwrap_or(false)
}

/// Check that every `var(--x)` in `theme.extend.colors` resolves.
pub fn check_color_refs(
    config: &ThemeConfig,
    palette: &Palette,
    strictness: Strictness,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    let scopes = required_scopes(palette);

    for (name, token) in config.colors() {
        let single = matches!(token, ColorToken::Single(_));
        for (shade, var) in token.var_refs() {
            let referrer = if single {
                format!("theme.extend.colors.{}", name)
            } else {
                format!("theme.extend.colors.{}.{}", name, shade)
            };

            for selector in &scopes {
                if !is_defined(palette, selector, var) {
                    result.push(unresolved(
                        strictness,
                        Issue::UnresolvedReference {
                            token: var.to_string(),
                            scope: selector.to_string(),
                            referrer: referrer.clone(),
                        },
                    ));
                }
            }
        }
    }

    result
}

/// Check `var(--x)` in `theme.extend.borderRadius`.
///
/// Radius variables are usually supplied by a preset stylesheet, so a miss
/// is only a warning.
pub fn check_radius_refs(config: &ThemeConfig, palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, value) in config.border_radius() {
        for var in var_refs(value) {
            if !is_defined(palette, ROOT_SCOPE, var) {
                result.warning(Issue::UnresolvedReference {
                    token: var.to_string(),
                    scope: ROOT_SCOPE.to_string(),
                    referrer: format!("theme.extend.borderRadius.{}", name),
                });
            }
        }
    }

    result
}

/// Check that every animation names defined keyframes.
pub fn check_animation_refs(config: &ThemeConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, binding) in config.animations() {
        match binding.parse() {
            Ok(shorthand) => {
                if !config.keyframes().contains_key(&shorthand.keyframe) {
                    result.error(Issue::MissingKeyframe {
                        animation: name.clone(),
                        keyframe: shorthand.keyframe,
                    });
                }
            }
            Err(e) => result.error(Issue::MalformedAnimation {
                animation: name.clone(),
                value: binding.to_string(),
                reason: reason(e),
            }),
        }
    }

    result
}

/// Check for keyframes that no animation runs.
pub fn check_unused_keyframes(config: &ThemeConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    let used: HashSet<String> = config
        .animations()
        .values()
        .filter_map(|b| b.parse().ok())
        .map(|s| s.keyframe)
        .collect();

    for name in config.keyframes().keys() {
        if !used.contains(name) {
            result.warning(Issue::UnusedKeyframe {
                keyframe: name.clone(),
            });
        }
    }

    result
}

/// Check that content globs and safelist patterns compile.
pub fn check_patterns(config: &ThemeConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    for glob in &config.content {
        if let Err(issue) = glob.compile() {
            result.error(issue);
        }
    }

    for rule in &config.safelist {
        if let Err(issue) = rule.compile() {
            result.error(issue);
        }
    }

    result
}

/// Upper bound on the patterns one glob may expand into.
const MAX_EXPANSIONS: usize = 64;

/// Expand `{a,b}` alternations into every concrete pattern.
///
/// Nested groups, or more than `MAX_EXPANSIONS` results, leave the
/// pattern unexpanded.
fn expand_braces(pattern: &str) -> Vec<String> {
    let mut expanded = Vec::new();
    let mut pending = vec![pattern.to_string()];

    while let Some(current) = pending.pop() {
        let group = current
            .find('{')
            .and_then(|open| current[open..].find('}').map(|i| (open, open + i)));
        let Some((open, close)) = group else {
            expanded.push(current);
            continue;
        };

        let (head, body, tail) = (&current[..open], &current[open + 1..close], &current[close + 1..]);
        if body.contains('{') {
            return vec![pattern.to_string()];
        }
        pending.extend(body.rsplit(',').map(|alt| format!("{}{}{}", head, alt, tail)));

        if expanded.len() + pending.len() > MAX_EXPANSIONS {
            return vec![pattern.to_string()];
        }
    }

    expanded
}

/// Check for content globs already covered by an earlier entry.
pub fn check_duplicate_globs(config: &ThemeConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashSet<String> = HashSet::new();

    for glob in &config.content {
        let expanded = expand_braces(glob.normalized());
        if expanded.iter().all(|p| seen.contains(p)) {
            result.warning(Issue::DuplicateGlob {
                pattern: glob.to_string(),
            });
        }
        seen.extend(expanded);
    }

    result
}

/// Check plugin identifiers: non-empty, listed once.
pub fn check_plugins(config: &ThemeConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, plugin) in config.plugins.iter().enumerate() {
        let id = plugin.as_str().trim();
        if id.is_empty() {
            result.error(Issue::EmptyPlugin { index });
            continue;
        }
        if !seen.insert(id) {
            result.warning(Issue::DuplicatePlugin {
                plugin: id.to_string(),
            });
        }
    }

    result
}
