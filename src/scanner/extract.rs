//! Class-candidate extraction from source text.
//!
//! Works like the style engine's default extractor: it does not understand
//! any template language, it splits text on characters that can never be
//! part of a utility class and keeps whatever looks like one.

use std::collections::BTreeSet;

/// Characters that end a candidate.
fn is_boundary(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '"' | '\'' | '`' | '<' | '>' | '=' | '{' | '}' | '(' | ')' | ';' | ',' | '\\'
        )
}

/// Trim punctuation that trails a class in prose or code (`uk-card.`).
fn trim_candidate(token: &str) -> &str {
    token.trim_end_matches([':', '.', '?'])
}

fn looks_like_class(token: &str) -> bool {
    let Some(first) = token.chars().next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || matches!(first, '-' | '!' | '@'))
        && token.chars().any(|c| c.is_ascii_alphabetic())
        && !token.contains("//")
}

/// Extract candidate class names from source text.
pub fn extract_candidates(source: &str) -> BTreeSet<String> {
    source
        .split(is_boundary)
        .map(trim_candidate)
        .filter(|t| looks_like_class(t))
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(source: &str) -> Vec<String> {
        extract_candidates(source).into_iter().collect()
    }

    #[test]
    fn test_html_class_attribute() {
        let found = candidates(r#"<div class="uk-alert uk-alert-primary">Hi</div>"#);
        assert!(found.contains(&"uk-alert".to_string()));
        assert!(found.contains(&"uk-alert-primary".to_string()));
        assert!(found.contains(&"div".to_string()));
    }

    #[test]
    fn test_variants_and_arbitrary_values() {
        let found = candidates(r#"<p class="hover:bg-primary md:w-[32rem] !mt-2">"#);
        assert!(found.contains(&"hover:bg-primary".to_string()));
        assert!(found.contains(&"md:w-[32rem]".to_string()));
        assert!(found.contains(&"!mt-2".to_string()));
    }

    #[test]
    fn test_go_and_templ_strings() {
        let found = candidates("templ Card() {\n\t<div class={ \"uk-card\", cls }></div>\n}\nreturn `bg-muted`");
        assert!(found.contains(&"uk-card".to_string()));
        assert!(found.contains(&"bg-muted".to_string()));
    }

    #[test]
    fn test_rejects_numbers_and_urls() {
        let found = candidates("width = 42; href=\"https://example.com\" 3.14");
        assert!(!found.contains(&"42".to_string()));
        assert!(!found.contains(&"3.14".to_string()));
        assert!(!found.iter().any(|c| c.contains("//")));
    }

    #[test]
    fn test_trailing_punctuation() {
        let found = candidates("Use uk-card. Then text-sm:");
        assert!(found.contains(&"uk-card".to_string()));
        assert!(found.contains(&"text-sm".to_string()));
    }

    #[test]
    fn test_deduplicated_and_sorted() {
        assert_eq!(candidates("b a b a"), vec!["a", "b"]);
    }
}
