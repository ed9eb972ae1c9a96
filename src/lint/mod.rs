//! Dataset validation.
//!
//! This module runs pluggable validators against a dataset and collects
//! their findings.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Validators** - Individual checks with typed configuration ([`Validator`] trait)
//! - **Runner** - Ordered collection of validators ([`ValidationRunner`])
//! - **Problems** - Per-resource report with severities ([`ProblemSet`])
//! - **Suppressions** - Known problems removed before reporting ([`suppress`])
//! - **Output** - Console, JSON and YAML sinks ([`output`])
//!
//! # Example
//!
//! ```
//! use rdflint::lint::{ProblemSet, Severity};
//!
//! let mut problems = ProblemSet::new();
//! problems.add_problem("a.rdf", Severity::Error, "demo: broken");
//! problems.add_problem("a.rdf", Severity::Warning, "demo: odd");
//! problems.add_problem("b.rdf", Severity::Warning, "demo: odd");
//!
//! assert_eq!(problems.problem_count(), 2);
//! assert!(problems.has_error());
//! ```

pub mod diagnostic;
pub mod output;
pub mod problem_set;
pub mod runner;
pub mod suppress;
pub mod validator;
pub mod validators;

pub use diagnostic::{Problem, Severity};
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, YamlFormatter};
pub use problem_set::ProblemSet;
pub use runner::{ValidationRunner, RUNNER_RESOURCE};
pub use suppress::{apply as apply_suppressions, load_suppressions, SuppressionEntry};
pub use validator::{section_name, DynValidator, Finding, Validator};
pub use validators::{FileEncodingValidator, PrefixValidator};
