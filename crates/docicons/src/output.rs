//! Terminal output utilities.
//!
//! Results go to stdout; status and errors go to stderr.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    out: Term,
    err: Term,
    green: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Write a result line to stdout, unstyled.
    pub(crate) fn data(&self, line: &str) -> std::io::Result<()> {
        self.out.write_line(line)
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.err.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.err.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .err
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }
}
