//! Core domain types for tint.
//!
//! This module contains the typed schema of a theme configuration document:
//! - `ThemeConfig` - the document itself, with presets and `theme.extend`
//! - `Palette` / `PaletteScope` - `--token` values per selector
//! - `HslTriplet` / `Colour` - token values and their sRGB preview
//! - `ColorToken` - entries of `theme.extend.colors`
//! - `KeyframeDefinition` / `AnimationBinding` - animations
//! - `SafelistRule` / `Safelist` - forced class names
//! - `ContentGlob` / `PluginReference` - scan patterns and plugins

mod animation;
mod color_token;
mod colour;
mod config;
mod content;
mod css;
mod palette;
mod safelist;

pub use animation::{AnimationBinding, AnimationShorthand, KeyframeDefinition, KeyframeStop};
pub use color_token::{ColorToken, DEFAULT_SHADE, FOREGROUND_SHADE};
pub use colour::{Colour, HslTriplet};
pub use config::{Preset, Theme, ThemeConfig, ThemeExtend};
pub use content::{ContentGlob, PluginReference};
pub use css::{var_refs, CssValue};
pub use palette::{Palette, PaletteScope, DARK_SCOPE, ROOT_SCOPE};
pub use safelist::{Safelist, SafelistRule};
