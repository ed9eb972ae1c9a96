//! Human-readable output formatter.
//!
//! Formats the problem report for terminal display with optional color support.

use super::ReportFormatter;
use crate::lint::{ProblemSet, Severity};
use console::Style;
use std::io::Write;

/// Formats the report for human consumption.
pub struct HumanFormatter {
    error: Style,
    warning: Style,
    dim: Style,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: Style::new().red().bold().force_styling(true),
                warning: Style::new().color256(208).force_styling(true),
                dim: Style::new().dim().force_styling(true),
            }
        } else {
            Self {
                error: Style::new(),
                warning: Style::new(),
                dim: Style::new(),
            }
        }
    }

    fn severity_style(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, problems: &ProblemSet, writer: &mut W) -> std::io::Result<()> {
        for (resource, problem) in problems.problems() {
            // error[a.rdf]: fileEncoding: ...
            writeln!(
                writer,
                "{}{}: {}",
                self.severity_style(problem.severity()).apply_to(problem.severity()),
                self.dim.apply_to(format!("[{}]", resource)),
                problem.message()
            )?;
        }

        if problems.has_problem() {
            writeln!(writer)?;
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s) in {} resource(s)",
                problems.error_count(),
                problems.warning_count(),
                problems.problem_count()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(problems: &ProblemSet, use_color: bool) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(use_color)
            .format(problems, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_problem_lines() {
        let mut problems = ProblemSet::new();
        problems.add_problem("a.rdf", Severity::Error, "demo: broken");
        problems.add_problem("b.rdf", Severity::Warning, "demo: odd");

        let output = render(&problems, false);

        assert!(output.contains("error[a.rdf]: demo: broken"));
        assert!(output.contains("warning[b.rdf]: demo: odd"));
    }

    #[test]
    fn formats_summary_line() {
        let mut problems = ProblemSet::new();
        problems.add_problem("a.rdf", Severity::Error, "e");
        problems.add_problem("a.rdf", Severity::Warning, "w1");
        problems.add_problem("b.rdf", Severity::Warning, "w2");

        let output = render(&problems, false);

        assert!(output.contains("Found 1 error(s) and 2 warning(s) in 2 resource(s)"));
    }

    #[test]
    fn no_summary_when_no_problems() {
        let output = render(&ProblemSet::new(), false);
        assert!(output.is_empty());
    }

    #[test]
    fn color_adds_escape_codes() {
        let mut problems = ProblemSet::new();
        problems.add_problem("a.rdf", Severity::Error, "e");

        assert!(render(&problems, true).contains('\u{1b}'));
        assert!(!render(&problems, false).contains('\u{1b}'));
    }
}
