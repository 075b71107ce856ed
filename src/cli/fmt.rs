//! Fmt command implementation.
//!
//! Parses a document and writes it back in canonical form, keeping its
//! format and key order. Comments are not preserved.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{resolve_path, Format};
use crate::error::{Result, TintError};
use crate::output::{display_path, Printer};

/// Rewrite a configuration in canonical form
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Configuration file or project directory (default: current directory)
    pub config: Option<PathBuf>,

    /// Fail instead of rewriting when the file is not formatted
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: FmtArgs, printer: &Printer) -> Result<()> {
    let path = resolve_path(args.config.as_deref())?;
    let display = display_path(&path);

    let source = fs::read_to_string(&path).map_err(|e| TintError::Io {
        path: path.clone(),
        message: format!("Failed to read configuration: {}", e),
    })?;
    let format = Format::from_path(&path);
    let formatted = format.serialize(&format.parse(&source)?)?;

    if formatted == source {
        printer.success("Unchanged", &display);
        return Ok(());
    }

    if args.check {
        return Err(TintError::Command {
            message: format!("{} is not formatted", display),
            help: Some("Run `tint fmt` to rewrite it".to_string()),
        });
    }

    fs::write(&path, formatted).map_err(|e| TintError::Io {
        path: path.clone(),
        message: format!("Failed to write configuration: {}", e),
    })?;
    printer.success("Formatted", &display);

    Ok(())
}
