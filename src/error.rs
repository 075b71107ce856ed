use miette::Diagnostic;
use thiserror::Error;

use crate::validation::Issue;

/// Main error type for tint operations
#[derive(Error, Diagnostic, Debug)]
pub enum TintError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tint::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tint::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tint::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A validation problem that aborts configuration load.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] Issue),

    #[error("Validation failed: {errors} error(s), {warnings} warning(s)")]
    #[diagnostic(code(tint::validate))]
    ValidationFailed { errors: usize, warnings: usize },

    #[error("{message}")]
    #[diagnostic(code(tint::cli))]
    Command {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Watch error: {message}")]
    #[diagnostic(code(tint::watch))]
    Watch { message: String },
}

impl TintError {
    /// The validation issue behind this error, if it is one.
    pub fn issue(&self) -> Option<&Issue> {
        match self {
            TintError::Invalid(issue) => Some(issue),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TintError>;
