//! Diagnostic types for validation results.

use std::fmt;

use super::issue::Issue;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// An issue together with how seriously to take it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// What is wrong, and where.
    pub issue: Issue,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(issue: Issue) -> Self {
        Self {
            severity: Severity::Error,
            issue,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(issue: Issue) -> Self {
        Self {
            severity: Severity::Warning,
            issue,
        }
    }

    /// Machine-readable diagnostic code (e.g. "tint::validate::missing_keyframe").
    pub fn code(&self) -> String {
        self.issue.code_str()
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.issue.to_string()
    }

    /// Optional help text suggesting how to fix the issue.
    pub fn help(&self) -> Option<String> {
        self.issue.help_str()
    }
}

/// Diagnostics from one or more checks, in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an error diagnostic.
    pub fn error(&mut self, issue: Issue) {
        self.push(Diagnostic::error(issue));
    }

    /// Add a warning diagnostic.
    pub fn warning(&mut self, issue: Issue) {
        self.push(Diagnostic::warning(issue));
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    pub fn has_errors(&self) -> bool {
        self.of(Severity::Error).next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.of(Severity::Warning).next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.of(Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.of(Severity::Warning).count()
    }

    /// The first error, in check order. This is what aborts a load.
    pub fn first_error(&self) -> Option<&Issue> {
        self.of(Severity::Error).next().map(|d| &d.issue)
    }

    /// No diagnostics of either severity.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// All diagnostics, in check order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.of(Severity::Warning).map(|d| &d.issue)
    }
}
