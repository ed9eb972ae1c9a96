//! Generation stage run before validation.
//!
//! Generation produces dataset files from the configured
//! [`GenerationRule`](crate::config::GenerationRule)s. Producing them is
//! left to external stages; the built-in [`RuleTargetCheck`] verifies that
//! every rule's target exists once generation has run.

use std::path::Path;

use crate::config::LintParameters;
use crate::error::Result;
use crate::lint::{ProblemSet, Severity, RUNNER_RESOURCE};

/// A step of the generation stage.
pub trait GenerationStage {
    /// Name used to prefix this stage's problems.
    fn name(&self) -> &str;

    /// Run the stage, recording problems into the shared set.
    fn execute(
        &self,
        params: &LintParameters,
        target_dir: &Path,
        problems: &mut ProblemSet,
    ) -> Result<()>;
}

/// Reports rules whose target file is missing.
pub struct RuleTargetCheck;

impl GenerationStage for RuleTargetCheck {
    fn name(&self) -> &str {
        "generation"
    }

    fn execute(
        &self,
        params: &LintParameters,
        target_dir: &Path,
        problems: &mut ProblemSet,
    ) -> Result<()> {
        for rule in &params.rules {
            if rule.target.is_empty() {
                problems.add_problem(
                    RUNNER_RESOURCE,
                    Severity::Error,
                    format!("{}: rule without target", self.name()),
                );
            } else if !target_dir.join(&rule.target).is_file() {
                problems.add_problem(
                    rule.target.as_str(),
                    Severity::Error,
                    format!("{}: target not found", self.name()),
                );
            }
        }
        Ok(())
    }
}

/// Run generation stages in order.
///
/// A failing stage is recorded as an error under the runner resource and
/// the following stages still run.
pub fn run_stages(
    stages: &[Box<dyn GenerationStage>],
    params: &LintParameters,
    target_dir: &Path,
    problems: &mut ProblemSet,
) {
    for stage in stages {
        tracing::debug!("running generation stage {}", stage.name());
        if let Err(e) = stage.execute(params, target_dir, problems) {
            tracing::warn!("generation stage {} failed: {}", stage.name(), e);
            problems.add_problem(
                RUNNER_RESOURCE,
                Severity::Error,
                format!("{}: {}", stage.name(), e),
            );
        }
    }
}

/// The default generation stages.
pub fn default_stages() -> Vec<Box<dyn GenerationStage>> {
    vec![Box::new(RuleTargetCheck)]
}
