//! Terminal output for the furnish CLI.
//!
//! Cargo-style status lines with a right-aligned coloured verb, written to
//! stderr. Stdout is left for machine-readable output such as completions.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Severity, ValidationResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width of the right-aligned verb column.
const VERB_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Progress,
    Info,
    Warn,
    Fail,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Info => "\x1b[36m",
            Tone::Warn => "\x1b[33m",
            Tone::Fail => "\x1b[31m",
        }
    }

    /// Quiet mode keeps only lines that need attention.
    fn is_quiet(self) -> bool {
        matches!(self, Tone::Progress | Tone::Info)
    }
}

/// Status printer for generation runs.
///
/// Colour is on when stderr is a terminal. In quiet mode only warnings and
/// errors are printed.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
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

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Progress line, e.g. `  Generating OakBed_Type1 (2x1 frames)`.
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Info, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Fail, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Paths and output locations.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(Tone::Info.ansi(), text)
    }

    /// Print every finding as `severity[code]: message` plus its help line.
    pub fn diagnostics(&self, result: &ValidationResult) {
        for d in result.iter() {
            let tone = match d.severity {
                Severity::Error => Tone::Fail,
                Severity::Warning => Tone::Warn,
            };
            let label = self.paint(tone.ansi(), &self.bold(&d.severity.to_string()));
            let mut text = format!("{}[{}]: {}", label, d.code, d.message);
            if let Some(help) = &d.help {
                text.push_str(&format!("\n  {} {}", self.dim("help:"), help));
            }
            let _ = writeln!(io::stderr().lock(), "{}", text);
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
        if self.quiet && tone.is_quiet() {
            return;
        }
        let verb = format!("{verb:>VERB_WIDTH$}");
        let verb = self.paint(tone.ansi(), &self.bold(&verb));
        let _ = writeln!(io::stderr().lock(), "{} {}", verb, message);
    }
}

/// `plural(1, "item", "items")` gives "1 item".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{} {}", n, word)
}

/// Path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(r) if r.as_os_str().is_empty() => ".".to_string(),
        Some(r) => r.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "item", "items"), "0 items");
        assert_eq!(plural(1, "item", "items"), "1 item");
        assert_eq!(plural(9, "file", "files"), "9 files");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/tiles/Bed.png");
        assert_eq!(display_path(p), "/nonexistent/tiles/Bed.png");
    }

    #[test]
    fn test_display_path_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
        assert_eq!(display_path(&cwd.join("dist")), "dist");
    }

    #[test]
    fn test_plain_printer_does_not_paint() {
        let printer = Printer::plain();
        assert_eq!(printer.bold("Bed"), "Bed");
        assert_eq!(printer.cyan("dist"), "dist");
    }

    #[test]
    fn test_quiet_tones() {
        assert!(Tone::Progress.is_quiet());
        assert!(!Tone::Warn.is_quiet());
        assert!(!Tone::Fail.is_quiet());
    }
}
