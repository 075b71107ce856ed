//! File system walker for content globs.
//!
//! Recursively walks the project root and keeps files whose path, relative
//! to the root, matches one of the configured content globs.

use std::path::{Path, PathBuf};

use globset::{GlobSet, GlobSetBuilder};
use walkdir::{DirEntry, WalkDir};

use crate::types::ContentGlob;
use crate::validation::Issue;

/// Directories never worth scanning for class names.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "target"];

/// Compiled content globs.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    set: GlobSet,
    len: usize,
}

impl ContentMatcher {
    /// Compile all globs, failing on the first invalid one.
    pub fn new(globs: &[ContentGlob]) -> std::result::Result<Self, Issue> {
        let mut builder = GlobSetBuilder::new();
        for glob in globs {
            builder.add(glob.compile()?);
        }

        let set = builder.build().map_err(|e| Issue::InvalidPattern {
            kind: "content".to_string(),
            pattern: e.glob().unwrap_or_default().to_string(),
            reason: e.kind().to_string(),
        })?;

        Ok(Self {
            set,
            len: globs.len(),
        })
    }

    /// Check a path relative to the project root.
    pub fn is_match(&self, relative: &Path) -> bool {
        self.set.is_match(relative)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}

/// Find all files under `root` matching the content globs.
///
/// Results are sorted so scans are reproducible.
pub fn scan_files(root: &Path, matcher: &ContentMatcher) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.exists() || matcher.is_empty() {
        return files;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if matcher.is_match(relative) {
            tracing::trace!(path = %relative.display(), "content match");
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}
