//! CSS value helpers shared by the theme types.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A CSS property value as written in the document.
///
/// Numbers are kept as numbers so that a rewritten document looks like
/// the original (`height: 0` stays unquoted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CssValue {
    /// Custom properties referenced by this value.
    pub fn var_refs(&self) -> Vec<&str> {
        match self {
            CssValue::Text(s) => var_refs(s),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Integer(n) => write!(f, "{}", n),
            CssValue::Float(n) => write!(f, "{}", n),
            CssValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        CssValue::Text(s.to_string())
    }
}

impl From<i64> for CssValue {
    fn from(n: i64) -> Self {
        CssValue::Integer(n)
    }
}

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"var\(\s*(--[A-Za-z0-9_-]+)").expect("var() pattern is valid")
    })
}

/// Extract the custom property names referenced through `var(--x)`.
///
/// Names are returned with their `--` prefix, in order of appearance.
pub fn var_refs(value: &str) -> Vec<&str> {
    var_pattern()
        .captures_iter(value)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_refs_single() {
        assert_eq!(
            var_refs("hsl(var(--border) / <alpha-value>)"),
            vec!["--border"]
        );
    }

    #[test]
    fn test_var_refs_multiple_and_spacing() {
        assert_eq!(
            var_refs("calc(var( --radius) - var(--gap))"),
            vec!["--radius", "--gap"]
        );
    }

    #[test]
    fn test_var_refs_none() {
        assert!(var_refs("#fff").is_empty());
        assert!(var_refs("var(radius)").is_empty());
    }

    #[test]
    fn test_css_value_yaml() {
        let values: Vec<CssValue> =
            serde_yaml::from_str("[0, 0.5, \"0\", \"var(--h)\"]").unwrap();
        assert_eq!(
            values,
            vec![
                CssValue::Integer(0),
                CssValue::Float(0.5),
                CssValue::Text("0".to_string()),
                CssValue::Text("var(--h)".to_string()),
            ]
        );
        assert_eq!(values[3].var_refs(), vec!["--h"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CssValue::Integer(0).to_string(), "0");
        assert_eq!(CssValue::from("auto").to_string(), "auto");
    }
}
