//! rdflint - Pluggable linter for RDF datasets.
//!
//! rdflint runs a set of independently written validators against a
//! dataset. Each validator declares a typed configuration record that is
//! bound from its section of `rdflint-config.yml`, and all findings are
//! collected into one per-resource problem report.
//!
//! # Modules
//!
//! - [`bind`] - Binding of untyped configuration sections onto typed records
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration document, parameters, and file discovery
//! - [`error`] - Error types and result aliases
//! - [`generation`] - Generation stage run before validation
//! - [`lint`] - Validators, runner, problem set, suppressions, and output
//! - [`lsp`] - Live diagnostics adapter
//! - [`ui`] - Terminal output
//! - [`uri`] - File path and `file://` URI conversion
//!
//! # Example
//!
//! ```
//! use rdflint::config::parse_config;
//! use rdflint::lint::{Finding, Validator, ValidationRunner};
//! use rdflint::config::LintParameters;
//! use rdflint::bindable;
//! use std::path::Path;
//!
//! #[derive(Default)]
//! struct DemoConfig {
//!     enable: String,
//! }
//!
//! bindable!(DemoConfig { "enable" => enable: scalar });
//!
//! struct DemoValidator;
//!
//! impl Validator for DemoValidator {
//!     type Config = DemoConfig;
//!
//!     fn execute(
//!         &self,
//!         _params: &LintParameters,
//!         _target_dir: &Path,
//!         config: &DemoConfig,
//!     ) -> anyhow::Result<Vec<Finding>> {
//!         Ok(vec![Finding::warning("a.rdf", format!("enable is {}", config.enable))])
//!     }
//! }
//!
//! let params = parse_config(
//!     "validation:\n  demo:\n    enable: 'true'\n",
//!     Path::new("rdflint-config.yml"),
//! )
//! .unwrap();
//!
//! let mut runner = ValidationRunner::new();
//! runner.register(Box::new(DemoValidator));
//! let problems = runner.execute(&params, Path::new("."));
//!
//! assert_eq!(problems.get("a.rdf")[0].message(), "demo: enable is true");
//! assert!(!problems.has_error());
//! ```

pub mod bind;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod lint;
pub mod lsp;
pub mod ui;
pub mod uri;

pub use error::{LintError, Result};
