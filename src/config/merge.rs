//! Ordered merging of configuration fragments.

use indexmap::IndexMap;

use crate::types::{ThemeConfig, ThemeExtend};

/// Merge `overlay` over `base`.
///
/// - `presets`, `content` and `safelist` are appended in order.
/// - `plugins` are appended, skipping ones `base` already lists.
/// - `theme.extend` maps merge per key; `overlay` wins on conflicts and
///   new keys are appended after existing ones.
pub fn merge(base: ThemeConfig, overlay: ThemeConfig) -> ThemeConfig {
    let mut merged = base;

    merged.presets.extend(overlay.presets);
    merged.content.extend(overlay.content);
    merged.safelist.extend(overlay.safelist);

    for plugin in overlay.plugins {
        if !merged.plugins.contains(&plugin) {
            merged.plugins.push(plugin);
        }
    }

    merge_extend(&mut merged.theme.extend, overlay.theme.extend);
    merged
}

fn merge_extend(base: &mut ThemeExtend, overlay: ThemeExtend) {
    merge_map(&mut base.colors, overlay.colors);
    merge_map(&mut base.border_radius, overlay.border_radius);
    merge_map(&mut base.keyframes, overlay.keyframes);
    merge_map(&mut base.animation, overlay.animation);
}

fn merge_map<V>(base: &mut IndexMap<String, V>, overlay: IndexMap<String, V>) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorToken, ContentGlob, PluginReference};
    use pretty_assertions::assert_eq;

    fn colors(config: &ThemeConfig) -> Vec<(&str, &str)> {
        config
            .colors()
            .iter()
            .map(|(k, v)| (k.as_str(), v.default_value().unwrap_or("")))
            .collect()
    }

    #[test]
    fn test_merge_appends_lists() {
        let base = ThemeConfig {
            content: vec![ContentGlob::new("./**/*.html")],
            plugins: vec![PluginReference::new("@tailwindcss/forms")],
            ..Default::default()
        };
        let overlay = ThemeConfig {
            content: vec![ContentGlob::new("./**/*.go")],
            plugins: vec![
                PluginReference::new("@tailwindcss/forms"),
                PluginReference::new("@tailwindcss/typography"),
            ],
            ..Default::default()
        };

        let merged = merge(base, overlay);
        assert_eq!(
            merged.content,
            vec![ContentGlob::new("./**/*.html"), ContentGlob::new("./**/*.go")]
        );
        assert_eq!(
            merged.plugins,
            vec![
                PluginReference::new("@tailwindcss/forms"),
                PluginReference::new("@tailwindcss/typography"),
            ]
        );
    }

    #[test]
    fn test_merge_extend_last_writer_wins() {
        let mut base = ThemeConfig::default();
        base.theme
            .extend
            .colors
            .insert("border".to_string(), ColorToken::Single("a".to_string()));
        base.theme
            .extend
            .colors
            .insert("ring".to_string(), ColorToken::Single("b".to_string()));

        let mut overlay = ThemeConfig::default();
        overlay
            .theme
            .extend
            .colors
            .insert("ring".to_string(), ColorToken::Single("c".to_string()));
        overlay
            .theme
            .extend
            .colors
            .insert("input".to_string(), ColorToken::Single("d".to_string()));

        let merged = merge(base, overlay);
        assert_eq!(
            colors(&merged),
            vec![("border", "a"), ("ring", "c"), ("input", "d")]
        );
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let config = ThemeConfig::from_yaml_str("content: [\"./**/*.html\"]\nplugins: [a]\n").unwrap();
        assert_eq!(merge(config.clone(), ThemeConfig::default()), config);
        assert_eq!(merge(ThemeConfig::default(), config.clone()), config);
    }
}
