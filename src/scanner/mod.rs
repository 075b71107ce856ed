//! Content scanning: which class names does the project use?
//!
//! Walks the content globs of a theme configuration, extracts candidate
//! class names from every matching file, and reports which of them a
//! safelist rule would force in anyway.
//!
//! # Example
//!
//! ```ignore
//! use tint::scanner::scan;
//!
//! let report = scan(".", &config)?;
//! for class in &report.classes {
//!     println!("{}", class);
//! }
//! ```

mod extract;
mod walk;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, TintError};
use crate::types::{Safelist, ThemeConfig};

pub use extract::extract_candidates;
pub use walk::{scan_files, ContentMatcher};

/// Result of scanning a project's content.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    /// Files that matched a content glob, sorted.
    pub files: Vec<PathBuf>,
    /// Candidate class names found in those files. Independent of the
    /// safelist.
    pub classes: BTreeSet<String>,
    /// Discovered classes that a safelist rule also matches.
    pub safelisted: BTreeSet<String>,
    /// Literal safelist entries, forced in whether or not they were found.
    pub forced: Vec<String>,
}

impl ScanReport {
    /// Every class the style engine would consider: discovered classes plus
    /// literal safelist entries.
    pub fn all_classes(&self) -> BTreeSet<String> {
        let mut all = self.classes.clone();
        all.extend(self.forced.iter().cloned());
        all
    }
}

/// Scan `root` using the content globs and safelist of `config`.
///
/// Unreadable or non-UTF-8 files are skipped.
pub fn scan(root: impl AsRef<Path>, config: &ThemeConfig) -> Result<ScanReport> {
    let root = root.as_ref();
    let matcher = ContentMatcher::new(&config.content)?;
    let safelist = Safelist::compile(&config.safelist)?;

    let files = scan_files(root, &matcher);
    tracing::debug!(root = %root.display(), files = files.len(), "scanned content");

    let mut classes = BTreeSet::new();
    for file in &files {
        match fs::read_to_string(file) {
            Ok(source) => classes.extend(extract_candidates(&source)),
            Err(e) => tracing::debug!(path = %file.display(), error = %e, "skipping unreadable file"),
        }
    }

    let safelisted = classes
        .iter()
        .filter(|c| safelist.matches(c))
        .cloned()
        .collect();

    Ok(ScanReport {
        files,
        classes,
        safelisted,
        forced: safelist.literals().to_vec(),
    })
}

/// Scan a single file, regardless of the content globs.
pub fn scan_file(path: &Path) -> Result<BTreeSet<String>> {
    let source = fs::read_to_string(path).map_err(|e| TintError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    Ok(extract_candidates(&source))
}
