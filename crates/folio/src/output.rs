//! Terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Documents go to stdout; diagnostics go to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Write a document or data line to stdout.
    pub(crate) fn print(&self, text: &str) {
        let _ = self.out.write_line(text);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted line to stdout (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self.out.write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Print a secondary line to stdout (dim).
    pub(crate) fn muted(&self, msg: &str) {
        let _ = self.out.write_line(&self.dim.apply_to(msg).to_string());
    }
}
