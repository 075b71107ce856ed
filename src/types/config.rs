//! The theme configuration document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TintError};

use super::animation::{AnimationBinding, KeyframeDefinition};
use super::color_token::ColorToken;
use super::content::{ContentGlob, PluginReference};
use super::palette::Palette;
use super::safelist::SafelistRule;

/// A preset invocation: the preset module and the palette it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Module identifier of the preset factory.
    pub name: String,

    #[serde(default, skip_serializing_if = "Palette::is_empty")]
    pub palette: Palette,

    /// Any other options handed to the factory, passed through untouched.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, serde_yaml::Value>,
}

impl Preset {
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
            options: IndexMap::new(),
        }
    }
}

/// Additions to the engine's default theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ThemeExtend {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, ColorToken>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub border_radius: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub keyframes: IndexMap<String, KeyframeDefinition>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub animation: IndexMap<String, AnimationBinding>,
}

impl ThemeExtend {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.border_radius.is_empty()
            && self.keyframes.is_empty()
            && self.animation.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    #[serde(default, skip_serializing_if = "ThemeExtend::is_empty")]
    pub extend: ThemeExtend,
}

impl Theme {
    pub fn is_empty(&self) -> bool {
        self.extend.is_empty()
    }
}

/// A theme configuration document.
///
/// Constructed once, read-only thereafter. All maps keep document order so
/// a serialized document reads like its source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<Preset>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentGlob>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safelist: Vec<SafelistRule>,

    #[serde(default, skip_serializing_if = "Theme::is_empty")]
    pub theme: Theme,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginReference>,
}

impl ThemeConfig {
    /// Parse a document from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).map_err(|e| TintError::Parse {
            message: format!("Invalid configuration: {}", e),
            help: Some("Check the YAML syntax and key names".to_string()),
        })
    }

    /// Parse a document from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| TintError::Parse {
            message: format!("Invalid configuration: {}", e),
            help: Some("Check the JSON syntax and key names".to_string()),
        })
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| TintError::Parse {
            message: format!("Failed to serialize configuration: {}", e),
            help: None,
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| TintError::Parse {
                message: format!("Failed to serialize configuration: {}", e),
                help: None,
            })
    }

    /// The palette seen by the style engine: every preset's palette folded
    /// in order, later presets overriding earlier ones per token.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::new();
        for preset in &self.presets {
            palette.merge_from(&preset.palette);
        }
        palette
    }

    pub fn colors(&self) -> &IndexMap<String, ColorToken> {
        &self.theme.extend.colors
    }

    pub fn border_radius(&self) -> &IndexMap<String, String> {
        &self.theme.extend.border_radius
    }

    pub fn keyframes(&self) -> &IndexMap<String, KeyframeDefinition> {
        &self.theme.extend.keyframes
    }

    pub fn animations(&self) -> &IndexMap<String, AnimationBinding> {
        &self.theme.extend.animation
    }
}
