//! Content globs and plugin references.

use std::fmt;

use globset::{Glob, GlobBuilder};
use serde::{Deserialize, Serialize};

use crate::validation::Issue;

/// A file pattern selecting sources to scan for class names
/// (`./**/*.{templ,html}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentGlob(String);

impl ContentGlob {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The pattern relative to the project root, without a leading `./`.
    pub fn normalized(&self) -> &str {
        let mut pattern = self.0.trim();
        while let Some(rest) = pattern.strip_prefix("./") {
            pattern = rest;
        }
        pattern
    }

    /// Compile the glob. `*` does not cross directory separators; `**` does.
    pub fn compile(&self) -> std::result::Result<Glob, Issue> {
        GlobBuilder::new(self.normalized())
            .literal_separator(true)
            .build()
            .map_err(|e| Issue::InvalidPattern {
                kind: "content".to_string(),
                pattern: self.0.clone(),
                reason: e.kind().to_string(),
            })
    }
}

impl fmt::Display for ContentGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentGlob {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An external plugin loaded by the style engine, e.g. `@tailwindcss/forms`.
///
/// Order matters to the engine and is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginReference(String);

impl PluginReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
