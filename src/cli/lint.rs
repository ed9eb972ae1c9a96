//! Lint command implementation.
//!
//! A run loads the configuration, applies command-line overrides, runs the
//! generation stage and the validators into one problem set, drops
//! suppressed problems, then renders the report. When problems remain they
//! are also written to `rdflint-problems.yml` in the output directory; a
//! failed write is reported as a warning and leaves the exit code alone.

use std::path::Path;

use crate::cli::args::LintArgs;
use crate::config::{find_config, load_config, setup_parameters, LintParameters};
use crate::error::{LintError, Result};
use crate::generation::{default_stages, run_stages, GenerationStage};
use crate::lint::output::write_report;
use crate::lint::{
    apply_suppressions, load_suppressions, HumanFormatter, JsonFormatter, OutputFormat,
    ProblemSet, ReportFormatter, SuppressionEntry, ValidationRunner, YamlFormatter,
};
use crate::lsp::{to_publish_diagnostics, write_notifications};
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

/// Exit code when at least one error remains after suppression.
pub const EXIT_PROBLEMS: i32 = 1;

/// Exit code when the configuration or suppression file cannot be loaded.
pub const EXIT_FATAL: i32 = 2;

/// The lint command implementation.
pub struct LintCommand {
    args: LintArgs,
    use_color: bool,
    runner: ValidationRunner,
    stages: Vec<Box<dyn GenerationStage>>,
}

impl LintCommand {
    /// Create a lint command with the built-in validators.
    pub fn new(args: LintArgs) -> Self {
        Self {
            args,
            use_color: false,
            runner: ValidationRunner::with_builtins(),
            stages: default_stages(),
        }
    }

    /// Use colored console output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Replace the validators to run.
    pub fn with_runner(mut self, runner: ValidationRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Load configuration and apply command-line overrides.
    fn load_parameters(&self) -> Result<LintParameters> {
        let root = self.args.search_root();
        let config_path = self.args.config.clone().or_else(|| find_config(&root));
        tracing::debug!("configuration file: {:?}", config_path);

        let mut params = load_config(config_path.as_deref())?;
        setup_parameters(&mut params, self.args.overrides(), &root);
        Ok(params)
    }

    fn load_suppressions(&self, params: &LintParameters) -> Result<Vec<SuppressionEntry>> {
        match &params.suppress_path {
            Some(path) => load_suppressions(path),
            None => Ok(Vec::new()),
        }
    }

    /// Run generation and validation into one problem set.
    pub fn collect_problems(&self, params: &LintParameters) -> ProblemSet {
        let target_dir = params.target_dir();
        let mut problems = ProblemSet::new();

        run_stages(&self.stages, params, target_dir, &mut problems);
        self.runner.execute_into(params, target_dir, &mut problems);

        problems
    }

    /// Render the console report in the requested format.
    fn format_output(&self, problems: &ProblemSet, target_dir: &Path) -> Result<String> {
        let mut output = Vec::new();

        if self.args.diagnostics {
            let root =
                std::path::absolute(target_dir).unwrap_or_else(|_| target_dir.to_path_buf());
            write_notifications(&to_publish_diagnostics(problems, &root), &mut output)?;
        } else {
            match self.args.format {
                OutputFormat::Human => {
                    HumanFormatter::new(self.use_color).format(problems, &mut output)?
                }
                OutputFormat::Json => JsonFormatter::new().format(problems, &mut output)?,
                OutputFormat::Yaml => YamlFormatter::new().format(problems, &mut output)?,
            }
        }

        String::from_utf8(output).map_err(|e| LintError::Other(e.into()))
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let params = match self.load_parameters() {
            Ok(params) => params,
            Err(e) if e.is_fatal() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FATAL));
            }
            Err(e) => return Err(e),
        };

        let suppressions = match self.load_suppressions(&params) {
            Ok(entries) => entries,
            Err(e @ LintError::SuppressionParseError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FATAL));
            }
            Err(e) => return Err(e),
        };

        tracing::info!("linting {}", params.target_dir().display());
        let problems = apply_suppressions(&self.collect_problems(&params), &suppressions);

        let output = self.format_output(&problems, params.target_dir())?;
        let human = !self.args.diagnostics && self.args.format == OutputFormat::Human;
        if human && !problems.has_problem() {
            ui.success("No problems found");
        } else {
            ui.message(&output);
        }

        if problems.has_problem() {
            match write_report(&problems, params.output_dir()) {
                Ok(report) => tracing::info!("report written to {}", report.display()),
                Err(e) => {
                    tracing::warn!("could not write report: {}", e);
                    ui.warning(&format!(
                        "Could not write report to {}: {}",
                        params.output_dir().display(),
                        e
                    ));
                }
            }
        }

        if problems.has_error() {
            Ok(CommandResult::failure(EXIT_PROBLEMS))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindable;
    use crate::lint::output::REPORT_FILE_NAME;
    use crate::lint::{Finding, Validator};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct SeverityConfig {
        level: String,
    }

    bindable!(SeverityConfig { "level" => level: scalar });

    /// Warns on b.rdf, and reports an error on a.rdf when `level` is strict.
    struct ScenarioValidator;

    impl Validator for ScenarioValidator {
        type Config = SeverityConfig;

        fn execute(
            &self,
            _params: &LintParameters,
            _target_dir: &Path,
            config: &SeverityConfig,
        ) -> anyhow::Result<Vec<Finding>> {
            let mut findings = vec![Finding::warning("b.rdf", "style")];
            if config.level == "strict" {
                findings.push(Finding::error("a.rdf", "broken"));
            }
            Ok(findings)
        }
    }

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("rdflint-config.yml"), config).unwrap();
        temp
    }

    fn command(temp: &TempDir) -> LintCommand {
        let mut runner = ValidationRunner::new();
        runner.register(Box::new(ScenarioValidator));
        LintCommand::new(LintArgs {
            target_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        })
        .with_runner(runner)
    }

    #[test]
    fn errors_fail_the_run() {
        let temp = setup_project("validation:\n  scenario:\n    level: strict\n");
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_PROBLEMS);
        assert!(ui.output().contains("error[a.rdf]: scenario: broken"));
        assert!(ui.output().contains("warning[b.rdf]: scenario: style"));
    }

    #[test]
    fn warnings_only_succeed() {
        let temp = setup_project("validation:\n  scenario:\n    level: relaxed\n");
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.output().contains("warning[b.rdf]"));
    }

    #[test]
    fn writes_report_to_output_dir() {
        let temp = setup_project("validation:\n  scenario:\n    level: strict\n");
        let mut ui = MockUI::new();

        command(&temp).execute(&mut ui).unwrap();

        let report = fs::read_to_string(temp.path().join(REPORT_FILE_NAME)).unwrap();
        let problems: ProblemSet = serde_yaml::from_str(&report).unwrap();
        assert_eq!(problems.problem_count(), 2);
    }

    #[test]
    fn suppressions_are_applied() {
        let temp = setup_project("validation:\n  scenario:\n    level: strict\n");
        fs::write(
            temp.path().join("rdflint-suppress.yml"),
            "- file: a.rdf\n  message: broken\n",
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(!ui.output().contains("a.rdf"));
    }

    #[test]
    fn invalid_config_is_fatal() {
        let temp = setup_project("baseUri: [unclosed");
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_FATAL);
        assert!(ui.has_error("Failed to parse config"));
    }

    #[test]
    fn missing_explicit_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = LintCommand::new(LintArgs {
            target_dir: Some(temp.path().to_path_buf()),
            config: Some(temp.path().join("missing.yml")),
            ..Default::default()
        });

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_FATAL);
        assert!(ui.has_error("Configuration not found"));
    }

    #[test]
    fn invalid_suppressions_are_fatal() {
        let temp = setup_project("");
        fs::write(temp.path().join("rdflint-suppress.yml"), "- file: a.rdf\n").unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_FATAL);
        assert!(ui.has_error("suppressions"));
    }

    #[test]
    fn bad_validator_section_is_reported_not_fatal() {
        let temp = setup_project("validation:\n  scenario:\n    colour: red\n");
        let mut ui = MockUI::new();

        let result = command(&temp).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_PROBLEMS);
        assert!(ui.output().contains("error[runner]: scenario: invalid configuration"));
    }

    #[test]
    fn clean_run_reports_success() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = LintCommand::new(LintArgs {
            target_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        });

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.successes(), ["No problems found"]);
    }

    fn blocked_output_dir(temp: &TempDir) -> std::path::PathBuf {
        fs::write(temp.path().join("blocker"), "").unwrap();
        temp.path().join("blocker").join("out")
    }

    #[test]
    fn clean_run_writes_no_report() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let cmd = LintCommand::new(LintArgs {
            target_dir: Some(temp.path().to_path_buf()),
            output_dir: Some(blocked_output_dir(&temp)),
            ..Default::default()
        })
        .with_runner(ValidationRunner::new());

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.successes(), ["No problems found"]);
        assert!(ui.warnings().is_empty());
        assert!(!temp.path().join(REPORT_FILE_NAME).exists());
    }

    #[test]
    fn unwritable_report_keeps_exit_code() {
        let temp = setup_project("validation:\n  scenario:\n    level: relaxed\n");
        let mut ui = MockUI::new();
        let mut runner = ValidationRunner::new();
        runner.register(Box::new(ScenarioValidator));
        let cmd = LintCommand::new(LintArgs {
            target_dir: Some(temp.path().to_path_buf()),
            output_dir: Some(blocked_output_dir(&temp)),
            ..Default::default()
        })
        .with_runner(runner);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.output().contains("warning[b.rdf]"));
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.warnings()[0].starts_with("Could not write report"));
    }

    #[test]
    fn json_format_renders_report() {
        let temp = setup_project("validation:\n  scenario:\n    level: strict\n");
        let mut runner = ValidationRunner::new();
        runner.register(Box::new(ScenarioValidator));
        let cmd = LintCommand::new(LintArgs {
            target_dir: Some(temp.path().to_path_buf()),
            format: OutputFormat::Json,
            ..Default::default()
        })
        .with_runner(runner);
        let params = cmd.load_parameters().unwrap();

        let output = cmd
            .format_output(&cmd.collect_problems(&params), params.target_dir())
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["resources"][0]["problems"][0]["level"], "ERROR");
        assert_eq!(json["summary"]["resources"], 2);
    }

    #[test]
    fn diagnostics_replace_console_report() {
        let temp = setup_project("validation:\n  scenario:\n    level: strict\n");
        let mut ui = MockUI::new();
        let mut runner = ValidationRunner::new();
        runner.register(Box::new(ScenarioValidator));
        let cmd = LintCommand::new(LintArgs {
            target_dir: Some(temp.path().to_path_buf()),
            diagnostics: true,
            ..Default::default()
        })
        .with_runner(runner);

        cmd.execute(&mut ui).unwrap();

        let lines: Vec<_> = ui.output().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("textDocument/publishDiagnostics"));
        assert!(lines[0].contains("a.rdf"));
    }
}
