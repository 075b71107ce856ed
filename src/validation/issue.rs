//! Problems found in a theme configuration.

use miette::Diagnostic;
use thiserror::Error;

/// A single problem in a theme configuration document.
///
/// Each variant names the offending key so the report can be acted on
/// without reading the whole document.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum Issue {
    #[error("Malformed token value for '{key}' in {scope}: \"{value}\" ({reason})")]
    #[diagnostic(
        code(tint::validate::malformed_token),
        help("Token values are HSL triplets such as \"240 5.9% 10%\"")
    )]
    MalformedTokenValue {
        scope: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unresolved reference: '{token}' used by {referrer} is not defined in {scope}")]
    #[diagnostic(
        code(tint::validate::unresolved_reference),
        help("Define the token in every palette scope, or fix the name")
    )]
    UnresolvedReference {
        token: String,
        scope: String,
        referrer: String,
    },

    #[error("Suspicious token name '{key}' in {scope}")]
    #[diagnostic(
        code(tint::validate::token_name),
        help("Token names look like --name, with no surrounding whitespace")
    )]
    SuspiciousTokenName {
        scope: String,
        key: String,
        suggestion: String,
    },

    #[error("Animation '{animation}' uses keyframes '{keyframe}' which are not defined")]
    #[diagnostic(
        code(tint::validate::missing_keyframe),
        help("Add the keyframes under theme.extend.keyframes")
    )]
    MissingKeyframe { animation: String, keyframe: String },

    #[error("Malformed animation '{animation}': \"{value}\" ({reason})")]
    #[diagnostic(
        code(tint::validate::malformed_animation),
        help("Use the form \"<keyframe> <duration> <easing>\"")
    )]
    MalformedAnimation {
        animation: String,
        value: String,
        reason: String,
    },

    #[error("Keyframes '{keyframe}' are not used by any animation")]
    #[diagnostic(code(tint::validate::unused_keyframe))]
    UnusedKeyframe { keyframe: String },

    #[error("Invalid {kind} pattern '{pattern}': {reason}")]
    #[diagnostic(code(tint::validate::invalid_pattern))]
    InvalidPattern {
        kind: String,
        pattern: String,
        reason: String,
    },

    #[error("Content glob '{pattern}' is listed more than once")]
    #[diagnostic(code(tint::validate::duplicate_glob))]
    DuplicateGlob { pattern: String },

    #[error("Plugin '{plugin}' is listed more than once")]
    #[diagnostic(code(tint::validate::duplicate_plugin))]
    DuplicatePlugin { plugin: String },

    #[error("Plugin #{index} has an empty identifier")]
    #[diagnostic(code(tint::validate::empty_plugin))]
    EmptyPlugin { index: usize },
}

impl Issue {
    /// Machine-readable code, e.g. `tint::validate::missing_keyframe`.
    pub fn code_str(&self) -> String {
        Diagnostic::code(self)
            .map(|c| c.to_string())
            .unwrap_or_default()
    }

    /// Help text, including a fix suggestion where one is known.
    pub fn help_str(&self) -> Option<String> {
        match self {
            Issue::SuspiciousTokenName { suggestion, .. } => {
                Some(format!("Did you mean '{}'?", suggestion))
            }
            _ => Diagnostic::help(self).map(|h| h.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_key() {
        let issue = Issue::UnresolvedReference {
            token: "--primary".to_string(),
            scope: ".dark".to_string(),
            referrer: "theme.extend.colors.primary".to_string(),
        };
        let message = issue.to_string();
        assert!(message.contains("'--primary'"));
        assert!(message.contains(".dark"));
    }

    #[test]
    fn test_code() {
        let issue = Issue::DuplicateGlob {
            pattern: "*.html".to_string(),
        };
        assert_eq!(issue.code_str(), "tint::validate::duplicate_glob");
    }

    #[test]
    fn test_help_suggestion() {
        let issue = Issue::SuspiciousTokenName {
            scope: ".dark".to_string(),
            key: " --primary".to_string(),
            suggestion: "--primary".to_string(),
        };
        assert_eq!(issue.help_str().as_deref(), Some("Did you mean '--primary'?"));

        let issue = Issue::UnusedKeyframe {
            keyframe: "spin".to_string(),
        };
        assert_eq!(issue.help_str(), None);
    }
}
