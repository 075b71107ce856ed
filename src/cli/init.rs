//! Init command implementation.
//!
//! Writes a starter `tint.yaml` (or `tint.json`) with the shadcn-style
//! palette, the color aliases that reference it, and the accordion
//! animations.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::Format;
use crate::error::{Result, TintError};
use crate::output::{display_path, plural, Printer};
use crate::types::ThemeConfig;

const STARTER: &str = r#"presets:
- name: franken-ui/shadcn-ui/preset-quick
  palette:
    ':root':
      --background: 0 0% 100%
      --foreground: 0 0% 3.9%
      --card: 0 0% 100%
      --card-foreground: 0 0% 3.9%
      --popover: 0 0% 100%
      --popover-foreground: 0 0% 3.9%
      --primary: 240 5.9% 10%
      --primary-foreground: 0 0% 98%
      --secondary: 207 90% 54%
      --secondary-foreground: 0 0% 9%
      --muted: 0 0% 96.1%
      --muted-foreground: 0 0% 45.1%
      --accent: 0 0% 98%
      --accent-foreground: 0 0% 9%
      --destructive: 0 84.2% 60.2%
      --destructive-foreground: 0 0% 98%
      --border: 0 0% 89.8%
      --input: 0 0% 89.8%
      --ring: 0 0% 3.9%
    .dark:
      --background: 0 0% 3.9%
      --foreground: 0 0% 98%
      --card: 0 0% 3.9%
      --card-foreground: 0 0% 98%
      --popover: 0 0% 3.9%
      --popover-foreground: 0 0% 98%
      --primary: 0 0% 98%
      --primary-foreground: 240 5.9% 10%
      --secondary: 207 90% 54%
      --secondary-foreground: 0 0% 98%
      --muted: 0 0% 14.9%
      --muted-foreground: 0 0% 63.9%
      --accent: 0 0% 8%
      --accent-foreground: 0 0% 98%
      --destructive: 0 62.8% 30.6%
      --destructive-foreground: 0 0% 98%
      --border: 0 0% 14.9%
      --input: 0 0% 14.9%
      --ring: 0 0% 83.1%
content:
- ./**/*.{templ,html}
- ./**/*.go
safelist:
- pattern: /^uk-/
theme:
  extend:
    colors:
      border: hsl(var(--border) / <alpha-value>)
      input: hsl(var(--input) / <alpha-value>)
      ring: hsl(var(--ring) / <alpha-value>)
      background: hsl(var(--background) / <alpha-value>)
      foreground: hsl(var(--foreground) / <alpha-value>)
      primary:
        DEFAULT: hsl(var(--primary) / <alpha-value>)
        foreground: hsl(var(--primary-foreground) / <alpha-value>)
      secondary:
        DEFAULT: hsl(var(--secondary) / <alpha-value>)
        foreground: hsl(var(--secondary-foreground) / <alpha-value>)
      destructive:
        DEFAULT: hsl(var(--destructive) / <alpha-value>)
        foreground: hsl(var(--destructive-foreground) / <alpha-value>)
      muted:
        DEFAULT: hsl(var(--muted) / <alpha-value>)
        foreground: hsl(var(--muted-foreground) / <alpha-value>)
      accent:
        DEFAULT: hsl(var(--accent) / <alpha-value>)
        foreground: hsl(var(--accent-foreground) / <alpha-value>)
      popover:
        DEFAULT: hsl(var(--popover) / <alpha-value>)
        foreground: hsl(var(--popover-foreground) / <alpha-value>)
      card:
        DEFAULT: hsl(var(--card) / <alpha-value>)
        foreground: hsl(var(--card-foreground) / <alpha-value>)
    borderRadius:
      lg: 0.5rem
      md: calc(0.5rem - 2px)
      sm: calc(0.5rem - 4px)
    keyframes:
      accordion-down:
        from:
          height: 0
        to:
          height: var(--radix-accordion-content-height)
      accordion-up:
        from:
          height: var(--radix-accordion-content-height)
        to:
          height: 0
    animation:
      accordion-down: accordion-down 0.2s ease-out
      accordion-up: accordion-up 0.2s ease-out
plugins:
- '@tailwindcss/forms'
- '@tailwindcss/typography'
"#;

/// The starter document.
pub fn starter() -> Result<ThemeConfig> {
    ThemeConfig::from_yaml_str(STARTER)
}

/// Create a starter configuration (generates tint.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the configuration in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Write tint.json instead of tint.yaml
    #[arg(long)]
    pub json: bool,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let (format, filename) = if args.json {
        (Format::Json, "tint.json")
    } else {
        (Format::Yaml, "tint.yaml")
    };
    let config_path = args.path.join(filename);

    if config_path.exists() && !args.force {
        return Err(TintError::Command {
            message: format!("{} already exists", display_path(&config_path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = starter()?;
    let source = match format {
        Format::Yaml => STARTER.to_string(),
        Format::Json => format.serialize(&config)?,
    };

    fs::write(&config_path, source).map_err(|e| TintError::Io {
        path: config_path.clone(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    let tokens: usize = config.palette().scopes().map(|(_, s)| s.len()).sum();
    printer.success(
        "Created",
        &format!(
            "{} ({})",
            display_path(&config_path),
            plural(tokens, "token", "tokens")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load, LoadOptions};
    use crate::validation::{validate_config, Strictness};
    use tempfile::tempdir;

    fn args(path: PathBuf, json: bool, force: bool) -> InitArgs {
        InitArgs { path, json, force }
    }

    #[test]
    fn test_starter_validates_cleanly() {
        let config = starter().unwrap();
        let result = validate_config(&config, Strictness::Strict);
        assert!(result.is_ok(), "{:?}", result);
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_starter_round_trips() {
        let config = starter().unwrap();
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(ThemeConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();
        run(args(dir.path().to_path_buf(), false, false), &Printer::plain()).unwrap();

        let path = dir.path().join("tint.yaml");
        let loaded = load(&path, &LoadOptions::default()).unwrap();
        assert_eq!(loaded.config.plugins.len(), 2);
    }

    #[test]
    fn test_init_json() {
        let dir = tempdir().unwrap();
        run(args(dir.path().to_path_buf(), true, false), &Printer::plain()).unwrap();

        let path = dir.path().join("tint.json");
        let loaded = load(&path, &LoadOptions::default()).unwrap();
        assert_eq!(loaded.config, starter().unwrap());
    }

    #[test]
    fn test_init_errors_if_config_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tint.yaml"), "{}\n").unwrap();

        let result = run(args(dir.path().to_path_buf(), false, false), &Printer::plain());
        assert!(matches!(result, Err(TintError::Command { .. })));
        assert_eq!(
            fs::read_to_string(dir.path().join("tint.yaml")).unwrap(),
            "{}\n"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tint.yaml"), "{}\n").unwrap();

        run(args(dir.path().to_path_buf(), false, true), &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join("tint.yaml")).unwrap();
        assert!(content.contains("preset-quick"));
    }
}
