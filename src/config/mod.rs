//! Configuration discovery and loading.
//!
//! This module finds the theme configuration document in a project
//! directory, parses it as YAML or JSON, and validates it. Loading fails
//! on the first error-severity problem so a broken document never reaches
//! the style build.
//!
//! # Example
//!
//! ```ignore
//! use tint::config::{find_config, load, LoadOptions};
//!
//! let path = find_config(".").expect("no tint.yaml");
//! let loaded = load(&path, &LoadOptions::default())?;
//! println!("{} content globs", loaded.config.content.len());
//! ```

mod merge;

use std::path::{Path, PathBuf};

use crate::error::{Result, TintError};
use crate::types::ThemeConfig;
use crate::validation::{validate_config, Issue, Strictness, ValidationResult};

pub use merge::merge;

/// Conventional document names, in lookup order.
pub const CONFIG_FILENAMES: &[&str] = &["tint.yaml", "tint.yml", "tint.json"];

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a file extension. Anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn parse(self, source: &str) -> Result<ThemeConfig> {
        match self {
            Format::Yaml => ThemeConfig::from_yaml_str(source),
            Format::Json => ThemeConfig::from_json_str(source),
        }
    }

    pub fn serialize(self, config: &ThemeConfig) -> Result<String> {
        match self {
            Format::Yaml => config.to_yaml_string(),
            Format::Json => config.to_json_string(),
        }
    }
}

/// Options for loading a document.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// How unresolved token references are treated.
    pub strictness: Strictness,
}

impl LoadOptions {
    /// Options that report unresolved references as warnings.
    pub fn lenient() -> Self {
        Self {
            strictness: Strictness::Lenient,
        }
    }
}

/// A document that parsed and passed validation.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Where the document was read from, if from a file.
    pub path: Option<PathBuf>,
    /// The document.
    pub config: ThemeConfig,
    /// Non-fatal problems found while validating.
    pub warnings: Vec<Issue>,
}

/// Find the configuration document in a directory.
pub fn find_config(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Resolve an optional CLI argument to a document path.
///
/// A directory is searched with `find_config`; no argument searches the
/// current directory.
pub fn resolve_path(arg: Option<&Path>) -> Result<PathBuf> {
    let target = arg.unwrap_or_else(|| Path::new("."));
    if target.is_dir() {
        return find_config(target).ok_or_else(|| TintError::Io {
            path: target.to_path_buf(),
            message: format!("No configuration found (looked for {})", CONFIG_FILENAMES.join(", ")),
        });
    }
    Ok(target.to_path_buf())
}

/// Read and parse a document without validating it.
pub fn read(path: &Path) -> Result<ThemeConfig> {
    let source = std::fs::read_to_string(path).map_err(|e| TintError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read configuration: {}", e),
    })?;
    Format::from_path(path).parse(&source)
}

/// Load and validate a document from a file.
pub fn load(path: &Path, options: &LoadOptions) -> Result<LoadedConfig> {
    tracing::debug!(path = %path.display(), "loading configuration");
    let config = read(path)?;
    let mut loaded = finish(config, options)?;
    loaded.path = Some(path.to_path_buf());
    Ok(loaded)
}

/// Load and validate a document from memory.
pub fn load_str(source: &str, format: Format, options: &LoadOptions) -> Result<LoadedConfig> {
    let config = format.parse(source)?;
    finish(config, options)
}

fn finish(config: ThemeConfig, options: &LoadOptions) -> Result<LoadedConfig> {
    let result: ValidationResult = validate_config(&config, options.strictness);

    if let Some(issue) = result.first_error() {
        return Err(TintError::Invalid(issue.clone()));
    }

    Ok(LoadedConfig {
        path: None,
        config,
        warnings: result.warnings().cloned().collect(),
    })
}
