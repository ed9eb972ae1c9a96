//! JSON output formatter.
//!
//! Formats the problem report as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::lint::{ProblemSet, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats the report as JSON.
#[derive(Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    resources: Vec<JsonResource<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResource<'a> {
    resource: &'a str,
    problems: Vec<JsonProblem<'a>>,
}

#[derive(Serialize)]
struct JsonProblem<'a> {
    level: Severity,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    resources: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, problems: &ProblemSet, writer: &mut W) -> std::io::Result<()> {
        let resources = problems
            .iter()
            .map(|(resource, bucket)| JsonResource {
                resource,
                problems: bucket
                    .iter()
                    .map(|p| JsonProblem {
                        level: p.severity(),
                        message: p.message(),
                    })
                    .collect(),
            })
            .collect();

        let output = JsonOutput {
            resources,
            summary: JsonSummary {
                resources: problems.problem_count(),
                errors: problems.error_count(),
                warnings: problems.warning_count(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(problems: &ProblemSet) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(problems, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let mut problems = ProblemSet::new();
        problems.add_problem("a.rdf", Severity::Error, "demo: broken");

        let json = render(&problems);

        assert_eq!(json["resources"][0]["resource"], "a.rdf");
        assert_eq!(json["resources"][0]["problems"][0]["level"], "ERROR");
        assert_eq!(json["resources"][0]["problems"][0]["message"], "demo: broken");
    }

    #[test]
    fn level_matches_yaml_report() {
        let mut problems = ProblemSet::new();
        problems.add_problem("a.rdf", Severity::Warning, "demo: odd");

        let json = render(&problems);
        let yaml = serde_yaml::to_string(&problems).unwrap();

        assert_eq!(json["resources"][0]["problems"][0]["level"], "WARNING");
        assert!(yaml.contains("level: WARNING"));
    }

    #[test]
    fn includes_summary() {
        let mut problems = ProblemSet::new();
        problems.add_problem("a.rdf", Severity::Error, "e");
        problems.add_problem("a.rdf", Severity::Warning, "w");
        problems.add_problem("b.rdf", Severity::Warning, "w");

        let json = render(&problems);

        assert_eq!(json["summary"]["resources"], 2);
        assert_eq!(json["summary"]["errors"], 1);
        assert_eq!(json["summary"]["warnings"], 2);
    }

    #[test]
    fn empty_report() {
        let json = render(&ProblemSet::new());
        assert!(json["resources"].as_array().unwrap().is_empty());
    }
}
