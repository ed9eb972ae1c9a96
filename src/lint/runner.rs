//! Validation runner.
//!
//! The [`ValidationRunner`] stores the registered validators and runs them
//! in registration order against one shared [`ProblemSet`].

use std::path::Path;

use super::diagnostic::Severity;
use super::problem_set::ProblemSet;
use super::validator::DynValidator;
use super::validators::{FileEncodingValidator, PrefixValidator};
use crate::config::LintParameters;
use crate::error::LintError;

/// Resource key for problems about the run itself rather than a resource.
pub const RUNNER_RESOURCE: &str = "runner";

/// Ordered collection of validators.
pub struct ValidationRunner {
    validators: Vec<Box<dyn DynValidator>>,
}

impl ValidationRunner {
    /// Create a runner with no validators.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create a runner with all built-in validators.
    pub fn with_builtins() -> Self {
        let mut runner = Self::new();
        runner.register(Box::new(FileEncodingValidator));
        runner.register(Box::new(PrefixValidator));
        runner
    }

    /// Register a validator. It runs after those already registered.
    pub fn register(&mut self, validator: Box<dyn DynValidator>) {
        self.validators.push(validator);
    }

    /// Iterate over validators in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn DynValidator> {
        self.validators.iter().map(|v| v.as_ref())
    }

    /// Section names of the registered validators, in execution order.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|v| v.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every validator and collect their problems into a new set.
    pub fn execute(&self, params: &LintParameters, target_dir: &Path) -> ProblemSet {
        let mut problems = ProblemSet::new();
        self.execute_into(params, target_dir, &mut problems);
        problems
    }

    /// Run every validator, appending to an existing set.
    ///
    /// A validator that fails to bind, returns an error or panics is
    /// recorded as one error under [`RUNNER_RESOURCE`]; the remaining
    /// validators still run.
    pub fn execute_into(&self, params: &LintParameters, target_dir: &Path, problems: &mut ProblemSet) {
        for validator in &self.validators {
            let name = validator.name();
            tracing::debug!("running validator {}", name);

            match validator.run(params, target_dir) {
                Ok(findings) => {
                    tracing::debug!("{}: {} finding(s)", name, findings.len());
                    for finding in findings {
                        problems.add_problem(
                            finding.resource,
                            finding.severity,
                            format!("{}: {}", name, finding.message),
                        );
                    }
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    problems.add_problem(
                        RUNNER_RESOURCE,
                        Severity::Error,
                        failure_message(&name, &err),
                    );
                }
            }
        }
    }
}

impl Default for ValidationRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_message(name: &str, err: &LintError) -> String {
    match err {
        LintError::Binding { source, .. } => {
            format!("{}: invalid configuration: {}", name, source)
        }
        LintError::ValidatorExecution { message, .. } => {
            format!("{}: execution failed: {}", name, message)
        }
        other => format!("{}: {}", name, other),
    }
}
