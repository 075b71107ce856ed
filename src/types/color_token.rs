//! Color tokens declared under `theme.extend.colors`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::css::var_refs;

/// Shade key used for the base value of a paired token.
pub const DEFAULT_SHADE: &str = "DEFAULT";

/// Shade key used for the text colour drawn on top of a paired token.
pub const FOREGROUND_SHADE: &str = "foreground";

/// A color token value.
///
/// Either a single color expression (`hsl(var(--border) / <alpha-value>)`)
/// or a set of named shades, usually `DEFAULT` and `foreground`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorToken {
    Single(String),
    Shades(IndexMap<String, String>),
}

impl ColorToken {
    /// Build a `{DEFAULT, foreground}` pair.
    pub fn pair(default: impl Into<String>, foreground: impl Into<String>) -> Self {
        let mut shades = IndexMap::new();
        shades.insert(DEFAULT_SHADE.to_string(), default.into());
        shades.insert(FOREGROUND_SHADE.to_string(), foreground.into());
        ColorToken::Shades(shades)
    }

    /// The base value: the single expression, or the `DEFAULT` shade.
    pub fn default_value(&self) -> Option<&str> {
        match self {
            ColorToken::Single(value) => Some(value),
            ColorToken::Shades(shades) => shades.get(DEFAULT_SHADE).map(|s| s.as_str()),
        }
    }

    /// The `foreground` shade, if any.
    pub fn foreground(&self) -> Option<&str> {
        match self {
            ColorToken::Single(_) => None,
            ColorToken::Shades(shades) => shades.get(FOREGROUND_SHADE).map(|s| s.as_str()),
        }
    }

    /// All `(shade, value)` pairs. A single value reports shade `DEFAULT`.
    pub fn values(&self) -> Vec<(&str, &str)> {
        match self {
            ColorToken::Single(value) => vec![(DEFAULT_SHADE, value.as_str())],
            ColorToken::Shades(shades) => shades
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
        }
    }

    /// Every `--token` referenced through `var()`, with the shade it came from.
    pub fn var_refs(&self) -> Vec<(&str, &str)> {
        self.values()
            .into_iter()
            .flat_map(|(shade, value)| var_refs(value).into_iter().map(move |r| (shade, r)))
            .collect()
    }
}
