//! Validate command implementation.
//!
//! Runs every check and prints all diagnostics, rather than stopping at
//! the first error like the loader does.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::{EventKind, RecursiveMode, Watcher};

use crate::config::{read, resolve_path};
use crate::error::{Result, TintError};
use crate::output::{display_path, Printer};
use crate::validation::{print_diagnostics, validate_config, Strictness, ValidationResult};

/// Validate a theme configuration
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration file or project directory (default: current directory)
    pub config: Option<PathBuf>,

    /// Report unresolved token references as warnings
    #[arg(long)]
    pub lenient: bool,

    /// Re-validate whenever the file changes
    #[arg(long)]
    pub watch: bool,
}

impl ValidateArgs {
    fn strictness(&self) -> Strictness {
        if self.lenient {
            Strictness::Lenient
        } else {
            Strictness::Strict
        }
    }
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let path = resolve_path(args.config.as_deref())?;

    if args.watch {
        return watch(&path, args.strictness(), printer);
    }

    let result = check(&path, args.strictness(), printer)?;
    if result.has_errors() {
        return Err(TintError::ValidationFailed {
            errors: result.error_count(),
            warnings: result.warning_count(),
        });
    }

    Ok(())
}

/// Validate once and print the report.
fn check(path: &Path, strictness: Strictness, printer: &Printer) -> Result<ValidationResult> {
    printer.status("Checking", &display_path(path));
    let config = read(path)?;
    let result = validate_config(&config, strictness);
    print_diagnostics(&result, printer);
    Ok(result)
}

fn watch_error(e: notify::Error) -> TintError {
    TintError::Watch {
        message: e.to_string(),
    }
}

/// Validate, then again on every change to the file. Runs until interrupted.
///
/// The parent directory is watched so editors that replace the file on save
/// are still picked up.
fn watch(path: &Path, strictness: Strictness, printer: &Printer) -> Result<()> {
    report(check(path, strictness, printer), printer);

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(watch_error)?;

    printer.info("Watching", &display_path(path));

    for event in rx {
        match event {
            Ok(event) => {
                let relevant = matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
                    && event
                        .paths
                        .iter()
                        .any(|p| p.file_name() == path.file_name());
                if relevant {
                    report(check(path, strictness, printer), printer);
                }
            }
            Err(e) => printer.warning("Watch", &e.to_string()),
        }
    }

    Ok(())
}

/// Keep watching through parse errors.
fn report(result: Result<ValidationResult>, printer: &Printer) {
    if let Err(e) = result {
        printer.error("Error", &e.to_string());
    }
}
