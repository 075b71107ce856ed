//! Safelist rules: class names forced into the output regardless of scanning.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::Issue;

/// A single safelist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SafelistRule {
    /// An exact class name.
    Literal(String),
    /// A regular expression over class names, optionally with variants
    /// (`hover`, `md`, ...) to generate alongside.
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variants: Vec<String>,
    },
}

impl SafelistRule {
    pub fn literal(class: impl Into<String>) -> Self {
        SafelistRule::Literal(class.into())
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        SafelistRule::Pattern {
            pattern: pattern.into(),
            variants: Vec::new(),
        }
    }

    /// The regex source for a pattern rule.
    ///
    /// Accepts both bare sources (`^uk-`) and slash-delimited literals
    /// (`/^uk-/`, `/^UK-/i`). Trailing `i`, `m` and `s` flags become inline
    /// flags. Any other flag is an `InvalidPattern`.
    pub fn regex_source(&self) -> std::result::Result<Option<String>, Issue> {
        match self {
            SafelistRule::Literal(_) => Ok(None),
            SafelistRule::Pattern { pattern, .. } => normalize_pattern(pattern)
                .map(Some)
                .map_err(|reason| invalid(pattern, reason)),
        }
    }

    /// Compile a pattern rule.
    pub fn compile(&self) -> std::result::Result<Option<Regex>, Issue> {
        match self {
            SafelistRule::Literal(_) => Ok(None),
            SafelistRule::Pattern { pattern, .. } => {
                let source = normalize_pattern(pattern).map_err(|reason| invalid(pattern, reason))?;
                Regex::new(&source)
                    .map(Some)
                    .map_err(|e| invalid(pattern, e.to_string()))
            }
        }
    }
}

fn invalid(pattern: &str, reason: String) -> Issue {
    Issue::InvalidPattern {
        kind: "safelist".to_string(),
        pattern: pattern.to_string(),
        reason,
    }
}

fn normalize_pattern(pattern: &str) -> std::result::Result<String, String> {
    let trimmed = pattern.trim();
    let Some((source, flags)) = trimmed
        .strip_prefix('/')
        .and_then(|body| body.rfind('/').map(|end| (&body[..end], &body[end + 1..])))
    else {
        return Ok(trimmed.to_string());
    };

    if let Some(flag) = flags.chars().find(|c| !matches!(c, 'i' | 'm' | 's')) {
        return Err(format!("unknown flag '{}'", flag));
    }
    if flags.is_empty() {
        Ok(source.to_string())
    } else {
        Ok(format!("(?{}){}", flags, source))
    }
}

/// A compiled safelist.
#[derive(Debug, Clone, Default)]
pub struct Safelist {
    literals: Vec<String>,
    patterns: Vec<Regex>,
}

impl Safelist {
    /// Compile all rules, failing on the first invalid pattern.
    pub fn compile(rules: &[SafelistRule]) -> std::result::Result<Self, Issue> {
        let mut safelist = Self::default();
        for rule in rules {
            match rule {
                SafelistRule::Literal(class) => safelist.literals.push(class.clone()),
                SafelistRule::Pattern { .. } => {
                    if let Some(regex) = rule.compile()? {
                        safelist.patterns.push(regex);
                    }
                }
            }
        }
        Ok(safelist)
    }

    /// Check whether a class name is forced in by any rule.
    pub fn matches(&self, class: &str) -> bool {
        self.literals.iter().any(|l| l == class) || self.patterns.iter().any(|p| p.is_match(class))
    }

    /// Literal class names, in document order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uk_prefix_pattern() {
        let safelist = Safelist::compile(&[SafelistRule::pattern("/^uk-/")]).unwrap();
        assert!(safelist.matches("uk-card"));
        assert!(safelist.matches("uk-button-primary"));
        assert!(!safelist.matches("btn-primary"));
    }

    #[test]
    fn test_bare_pattern_source() {
        let safelist = Safelist::compile(&[SafelistRule::pattern("^uk-")]).unwrap();
        assert!(safelist.matches("uk-alert"));
        assert!(!safelist.matches("my-uk-alert"));
    }

    #[test]
    fn test_flags() {
        let rule = SafelistRule::pattern("/^uk-/i");
        assert_eq!(rule.regex_source().unwrap().as_deref(), Some("(?i)^uk-"));
        let safelist = Safelist::compile(&[rule]).unwrap();
        assert!(safelist.matches("UK-card"));
    }

    #[test]
    fn test_literal_rule() {
        let safelist = Safelist::compile(&[SafelistRule::literal("bg-primary")]).unwrap();
        assert!(safelist.matches("bg-primary"));
        assert!(!safelist.matches("bg-primary-foreground"));
        assert_eq!(safelist.literals(), &["bg-primary".to_string()]);
    }

    #[test]
    fn test_invalid_pattern_names_pattern() {
        let err = Safelist::compile(&[SafelistRule::pattern("^uk-(")]).unwrap_err();
        match err {
            Issue::InvalidPattern { pattern, kind, .. } => {
                assert_eq!(pattern, "^uk-(");
                assert_eq!(kind, "safelist");
            }
            other => panic!("unexpected issue: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = SafelistRule::pattern("/^uk-/x").compile().unwrap_err();
        match err {
            Issue::InvalidPattern { pattern, reason, .. } => {
                assert_eq!(pattern, "/^uk-/x");
                assert_eq!(reason, "unknown flag 'x'");
            }
            other => panic!("unexpected issue: {:?}", other),
        }
    }

    #[test]
    fn test_global_flag_not_dropped() {
        let rule = SafelistRule::pattern("/static/img");
        assert!(rule.regex_source().is_err());
        assert!(Safelist::compile(&[rule]).is_err());
    }

    #[test]
    fn test_literal_has_no_source() {
        assert_eq!(SafelistRule::literal("uk-card").regex_source().unwrap(), None);
    }

    #[test]
    fn test_deserialize_mixed_rules() {
        let yaml = r#"
- pattern: "^uk-"
- text-center
- pattern: "^bg-"
  variants: [hover, dark]
"#;
        let rules: Vec<SafelistRule> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules[0], SafelistRule::pattern("^uk-"));
        assert_eq!(rules[1], SafelistRule::literal("text-center"));
        assert!(matches!(&rules[2], SafelistRule::Pattern { variants, .. } if variants.len() == 2));
    }
}
