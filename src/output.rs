//! Terminal output for the tint CLI.
//!
//! Status lines are Cargo-style, a right-aligned coloured verb followed by
//! a message, and always go to stderr. Stdout carries only what a script
//! would consume: class lists, JSON reports, token tables.

use std::io::{self, IsTerminal, Write};

use crate::types::Colour;
use crate::validation::{Diagnostic, Severity};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Good,
    Note,
    Warn,
    Bad,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Good => "\x1b[32m",
            Tone::Note => "\x1b[36m",
            Tone::Warn => "\x1b[33m",
            Tone::Bad => "\x1b[31m",
        }
    }

    /// Warnings and errors are shown even in quiet mode.
    fn always_shown(self) -> bool {
        matches!(self, Tone::Warn | Tone::Bad)
    }
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Tone::Warn,
            Severity::Error => Tone::Bad,
        }
    }
}

/// Terminal-aware status printer.
///
/// Colour is used when stderr is a terminal and `NO_COLOR` is unset.
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
            quiet: false,
        }
    }

    /// A printer that never emits ANSI codes.
    pub fn plain() -> Self {
        Self {
            color: false,
            quiet: false,
        }
    }

    /// Hide progress lines; warnings and errors still print.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Progress, e.g. "     Loading tint.yaml".
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Good, verb, message);
    }

    /// A finished step, e.g. "     Created tint.yaml (38 tokens)".
    pub fn success(&self, verb: &str, message: &str) {
        self.line(Tone::Good, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Bad, verb, message);
    }

    /// Print a validation diagnostic in rustc style:
    ///
    /// ```text
    /// error[tint::validate::missing_keyframe]: Animation 'spin' uses ...
    ///   help: Add the keyframes under theme.extend.keyframes
    /// ```
    pub fn diagnostic(&self, diagnostic: &Diagnostic) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", self.diagnostic_text(diagnostic));
    }

    fn diagnostic_text(&self, diagnostic: &Diagnostic) -> String {
        let label = diagnostic.severity.to_string();
        let label = if self.color {
            format!("{BOLD}{}{label}{RESET}", Tone::from(diagnostic.severity).ansi())
        } else {
            label
        };

        let mut text = format!("{}[{}]: {}", label, diagnostic.code(), diagnostic.message());
        if let Some(help) = diagnostic.help() {
            text.push_str(&format!("\n  {} {}", self.dim("help:"), help));
        }
        text
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// A two-cell block filled with `colour` and a trailing space, or
    /// nothing without colour support.
    pub fn swatch(&self, colour: Colour) -> String {
        if self.color {
            format!("\x1b[48;2;{};{};{}m  {RESET} ", colour.r, colour.g, colour.b)
        } else {
            String::new()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        if self.quiet && !tone.always_shown() {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            writeln!(
                stderr,
                "{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}",
                tone.ansi()
            )
        } else {
            writeln!(stderr, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "class", "classes")` → "1 class".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Path relative to the working directory when it is inside it.
pub fn display_path(path: &std::path::Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()));

    match relative {
        Some(s) if s.is_empty() => ".".to_string(),
        Some(s) => s,
        None => path.display().to_string(),
    }
}
