//! Report sinks.
//!
//! This module provides formatters rendering a [`ProblemSet`] in different
//! formats (human-readable, JSON, YAML). Every formatter reads the same
//! snapshot and never modifies it.

pub mod human;
pub mod json;
pub mod yaml;

use crate::lint::ProblemSet;
use std::io::Write;
use std::str::FromStr;

/// Output format for the console report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Trait for formatting a problem report.
pub trait ReportFormatter {
    /// Format `problems` to the given writer.
    fn format<W: Write>(&self, problems: &ProblemSet, writer: &mut W) -> std::io::Result<()>;
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    console::Term::stdout().is_term()
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use yaml::{write_report, YamlFormatter, REPORT_FILE_NAME};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn default_is_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
