//! Palette scopes: named sets of `--token` values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Selector of the default (light) scope.
pub const ROOT_SCOPE: &str = ":root";

/// Selector of the dark-mode scope.
pub const DARK_SCOPE: &str = ".dark";

/// Token values for one selector, in document order.
///
/// Keys are kept verbatim, including any stray whitespace, so that
/// validation can see exactly what was written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteScope {
    tokens: IndexMap<String, String>,
}

impl PaletteScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a token value. The `--` prefix is optional.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens
            .get(name)
            .or_else(|| self.tokens.get(&format!("--{}", name)))
            .map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is a key exactly as written, with no prefix fallback.
    pub fn contains_exact(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(name.into(), value.into());
    }

    /// Token names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PaletteScope {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut scope = Self::new();
        for (k, v) in iter {
            scope.insert(k, v);
        }
        scope
    }
}

/// A palette keyed by scope selector (`:root`, `.dark`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    scopes: IndexMap<String, PaletteScope>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a scope by selector.
    pub fn scope(&self, selector: &str) -> Option<&PaletteScope> {
        self.scopes.get(selector)
    }

    /// The `:root` scope.
    pub fn root(&self) -> Option<&PaletteScope> {
        self.scope(ROOT_SCOPE)
    }

    /// The `.dark` scope.
    pub fn dark(&self) -> Option<&PaletteScope> {
        self.scope(DARK_SCOPE)
    }

    /// Add or replace a whole scope.
    pub fn insert_scope(&mut self, selector: impl Into<String>, scope: PaletteScope) {
        self.scopes.insert(selector.into(), scope);
    }

    /// All scopes in document order.
    pub fn scopes(&self) -> impl Iterator<Item = (&str, &PaletteScope)> {
        self.scopes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn scope_names(&self) -> impl Iterator<Item = &str> {
        self.scopes.keys().map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Merge another palette over this one.
    ///
    /// Scopes are merged key by key; values from `other` win. New keys are
    /// appended, existing keys keep their position.
    pub fn merge_from(&mut self, other: &Palette) {
        for (selector, scope) in &other.scopes {
            let entry = self.scopes.entry(selector.clone()).or_default();
            for (name, value) in &scope.tokens {
                entry.tokens.insert(name.clone(), value.clone());
            }
        }
    }
}
