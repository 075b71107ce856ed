//! tint - Theme configuration checker for utility-first stylesheets
//!
//! A library for loading, validating and inspecting the theme document of a
//! utility-first CSS build: the preset palettes, content globs, safelist,
//! theme extensions and plugin list.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;
pub mod validation;

pub use config::{find_config, load, load_str, merge, Format, LoadOptions, LoadedConfig};
pub use error::{Result, TintError};
pub use scanner::{extract_candidates, scan, ScanReport};
pub use types::{
    AnimationBinding, AnimationShorthand, ColorToken, Colour, ContentGlob, CssValue, HslTriplet,
    KeyframeDefinition, Palette, PaletteScope, PluginReference, Preset, Safelist, SafelistRule,
    Theme, ThemeConfig, ThemeExtend,
};
pub use validation::{validate_config, Diagnostic, Issue, Severity, Strictness, ValidationResult};
