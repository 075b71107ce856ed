//! Keyframe definitions and animation bindings.

use std::fmt;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TintError};

use super::css::CssValue;

/// Properties set at one keyframe stop.
pub type KeyframeStop = IndexMap<String, CssValue>;

/// A named `@keyframes` rule: ordered stops (`from`, `50%`, `to`) mapping
/// CSS properties to values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyframeDefinition {
    stops: IndexMap<String, KeyframeStop>,
}

impl KeyframeDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stop, builder style.
    pub fn with_stop(mut self, selector: impl Into<String>, properties: KeyframeStop) -> Self {
        self.stops.insert(selector.into(), properties);
        self
    }

    pub fn stop(&self, selector: &str) -> Option<&KeyframeStop> {
        self.stops.get(selector)
    }

    pub fn stops(&self) -> impl Iterator<Item = (&str, &KeyframeStop)> {
        self.stops.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Custom properties referenced by any stop.
    pub fn var_refs(&self) -> Vec<&str> {
        self.stops
            .values()
            .flat_map(|props| props.values())
            .flat_map(|v| v.var_refs())
            .collect()
    }
}

/// An `animation` shorthand bound to a utility name, e.g.
/// `accordion-down: "accordion-down 0.2s ease-out"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationBinding(String);

impl AnimationBinding {
    pub fn new(shorthand: impl Into<String>) -> Self {
        Self(shorthand.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the shorthand into its parts.
    pub fn parse(&self) -> Result<AnimationShorthand> {
        AnimationShorthand::parse(&self.0)
    }
}

impl fmt::Display for AnimationBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed form of an `animation` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationShorthand {
    /// Name of the `@keyframes` rule to run.
    pub keyframe: String,
    /// First time value in the shorthand.
    pub duration: Option<Duration>,
    /// Timing function (`ease-out`, `cubic-bezier(...)`, `steps(...)`).
    pub easing: Option<String>,
    /// Everything else, in order (delay, iteration count, direction, ...).
    pub rest: Vec<String>,
}

const EASING_KEYWORDS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

const EASING_FUNCTIONS: &[&str] = &["cubic-bezier(", "steps(", "linear("];

/// Keywords of the other shorthand longhands. None of them can be a
/// keyframe name.
const OTHER_KEYWORDS: &[&str] = &[
    "infinite",
    "normal",
    "reverse",
    "alternate",
    "alternate-reverse",
    "none",
    "forwards",
    "backwards",
    "both",
    "running",
    "paused",
];

impl AnimationShorthand {
    /// Parse a single-animation shorthand.
    pub fn parse(s: &str) -> Result<Self> {
        if has_top_level_comma(s) {
            return Err(TintError::Parse {
                message: format!("'{}' lists several animations", s),
                help: Some("Bind one animation per name".to_string()),
            });
        }

        let mut keyframe = None;
        let mut duration = None;
        let mut easing = None;
        let mut rest = Vec::new();

        for token in split_top_level(s) {
            if let Some(time) = parse_time(&token) {
                if duration.is_none() {
                    duration = Some(time);
                } else {
                    rest.push(token);
                }
            } else if easing.is_none() && is_easing(&token) {
                easing = Some(token);
            } else if keyframe.is_none() && is_identifier(&token) {
                keyframe = Some(token);
            } else {
                rest.push(token);
            }
        }

        let keyframe = keyframe.ok_or_else(|| TintError::Parse {
            message: format!("'{}' does not name a keyframe", s),
            help: Some("Use the form \"<keyframe> <duration> <easing>\"".to_string()),
        })?;

        Ok(Self {
            keyframe,
            duration,
            easing,
            rest,
        })
    }
}

/// Split on whitespace outside parentheses.
fn split_top_level(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in s.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn has_top_level_comma(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Parse a non-negative CSS time (`0.2s`, `150ms`).
fn parse_time(token: &str) -> Option<Duration> {
    let (number, nanos_per_unit) = if let Some(n) = token.strip_suffix("ms") {
        (n, 1e6)
    } else if let Some(n) = token.strip_suffix('s') {
        (n, 1e9)
    } else {
        return None;
    };

    let value: f64 = number.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(Duration::from_nanos((value * nanos_per_unit).round() as u64))
}

fn is_easing(token: &str) -> bool {
    EASING_KEYWORDS.contains(&token) || EASING_FUNCTIONS.iter().any(|f| token.starts_with(f))
}

fn is_identifier(token: &str) -> bool {
    if OTHER_KEYWORDS.contains(&token) {
        return false;
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
        _ => return false,
    }
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && token.chars().any(|c| c.is_ascii_alphabetic())
}
