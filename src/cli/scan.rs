//! Scan command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{load, resolve_path, LoadOptions};
use crate::error::{Result, TintError};
use crate::output::{display_path, plural, Printer};
use crate::scanner::scan;

/// List the class names used by the project's content files
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Configuration file or project directory (default: current directory)
    pub config: Option<PathBuf>,

    /// Directory the content globs are relative to (default: the
    /// configuration's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Report unresolved token references as warnings
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: ScanArgs, printer: &Printer) -> Result<()> {
    let path = resolve_path(args.config.as_deref())?;
    let options = if args.lenient {
        LoadOptions::lenient()
    } else {
        LoadOptions::default()
    };

    printer.status("Loading", &display_path(&path));
    let loaded = load(&path, &options)?;
    for warning in &loaded.warnings {
        printer.warning("Warning", &warning.to_string());
    }

    let root = match args.root {
        Some(root) => root,
        None => config_dir(&path),
    };

    let report = scan(&root, &loaded.config)?;
    printer.info(
        "Scanned",
        &format!(
            "{}, found {}",
            plural(report.files.len(), "file", "files"),
            plural(report.classes.len(), "class", "classes")
        ),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| TintError::Command {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for class in report.all_classes() {
            println!("{}", class);
        }
    }

    Ok(())
}

fn config_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
