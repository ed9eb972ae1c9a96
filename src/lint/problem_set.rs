//! Per-resource problem collection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::diagnostic::{Problem, Severity};

/// Problems found in a run, grouped by resource id.
///
/// Buckets are append-only and keep insertion order; resources iterate in
/// key order. A resource without a bucket has no problems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemSet {
    problems: BTreeMap<String, Vec<Problem>>,
}

impl ProblemSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a problem to the bucket for `resource`.
    pub fn add_problem(
        &mut self,
        resource: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) {
        self.push(resource, Problem::new(severity, message));
    }

    /// Append an already built problem.
    pub fn push(&mut self, resource: impl Into<String>, problem: Problem) {
        self.problems
            .entry(resource.into())
            .or_default()
            .push(problem);
    }

    /// Number of resources with at least one problem.
    pub fn problem_count(&self) -> usize {
        self.problems.values().filter(|b| !b.is_empty()).count()
    }

    pub fn has_problem(&self) -> bool {
        self.problem_count() > 0
    }

    /// Whether any resource holds an error.
    pub fn has_error(&self) -> bool {
        self.problems().any(|(_, p)| p.is_error())
    }

    /// Problems recorded for `resource`, empty when it has none.
    pub fn get(&self, resource: &str) -> &[Problem] {
        self.problems
            .get(resource)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over resources and their problems, in resource order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Problem])> {
        self.problems
            .iter()
            .map(|(resource, bucket)| (resource.as_str(), bucket.as_slice()))
    }

    /// Iterate over every problem with its resource.
    pub fn problems(&self) -> impl Iterator<Item = (&str, &Problem)> {
        self.iter()
            .flat_map(|(resource, bucket)| bucket.iter().map(move |p| (resource, p)))
    }

    /// Total number of problems of the given severity.
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.problems()
            .filter(|(_, p)| p.severity() == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_nothing() {
        let set = ProblemSet::new();
        assert_eq!(set.problem_count(), 0);
        assert!(!set.has_problem());
        assert!(!set.has_error());
        assert!(set.get("a.rdf").is_empty());
    }

    #[test]
    fn problem_count_counts_resources() {
        let mut set = ProblemSet::new();
        for i in 0..5 {
            set.add_problem("a.rdf", Severity::Warning, format!("w{}", i));
        }
        set.add_problem("b.rdf", Severity::Warning, "w");

        assert_eq!(set.problem_count(), 2);
        assert_eq!(set.get("a.rdf").len(), 5);
        assert_eq!(set.warning_count(), 6);
    }

    #[test]
    fn warnings_only_is_not_error() {
        let mut set = ProblemSet::new();
        set.add_problem("a.rdf", Severity::Warning, "w");

        assert!(set.has_problem());
        assert!(!set.has_error());
    }

    #[test]
    fn error_anywhere_is_error() {
        let mut set = ProblemSet::new();
        set.add_problem("a.rdf", Severity::Warning, "w");
        set.add_problem("b.rdf", Severity::Error, "e");

        assert!(set.has_error());
        assert_eq!(set.error_count(), 1);
    }

    #[test]
    fn buckets_keep_insertion_order() {
        let mut set = ProblemSet::new();
        set.add_problem("a.rdf", Severity::Warning, "second-alpha");
        set.add_problem("a.rdf", Severity::Error, "first-alpha");

        let messages: Vec<_> = set.get("a.rdf").iter().map(|p| p.message()).collect();
        assert_eq!(messages, vec!["second-alpha", "first-alpha"]);
    }

    #[test]
    fn resources_iterate_in_order() {
        let mut set = ProblemSet::new();
        set.add_problem("z.ttl", Severity::Warning, "z");
        set.add_problem("a.ttl", Severity::Warning, "a");

        let resources: Vec<_> = set.iter().map(|(r, _)| r).collect();
        assert_eq!(resources, vec!["a.ttl", "z.ttl"]);
    }

    #[test]
    fn serializes_as_resource_map() {
        let mut set = ProblemSet::new();
        set.add_problem("a.rdf", Severity::Error, "demo: broken");

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["a.rdf"][0]["level"], "ERROR");
        assert_eq!(value["a.rdf"][0]["message"], "demo: broken");
    }
}
