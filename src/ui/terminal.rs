//! Terminal UI.

use console::{Style, Term};
use std::io::Write;

use super::UserInterface;

/// Terminal UI implementation.
///
/// Report output and status go to stdout; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    success: Style,
    warning: Style,
    error: Style,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(use_color: bool) -> Self {
        let style = |s: Style| if use_color { s } else { Style::new() };
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            success: style(Style::new().green()),
            warning: style(Style::new().color256(208)),
            error: style(Style::new().red().bold()),
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        write!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.success.apply_to(format!("✓ {}", msg))).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.warning.apply_to(format!("⚠ {}", msg))).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.error.apply_to(format!("✗ {}", msg))).ok();
    }
}
