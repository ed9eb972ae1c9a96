//! Validator definitions.
//!
//! This module provides the core traits and types for defining validators:
//!
//! - [`Validator`] - The trait that validator authors implement
//! - [`DynValidator`] - The object-safe form the runner stores
//! - [`Finding`] - A problem reported by a validator against one resource

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use super::diagnostic::Severity;
use crate::bind::{bind, Bindable};
use crate::config::{ConfigNode, LintParameters};
use crate::error::{LintError, Result};

/// A problem reported by a validator.
///
/// The runner prefixes `message` with the validator name when recording it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub resource: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(resource: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            severity,
            message: message.into(),
        }
    }

    pub fn error(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(resource, Severity::Error, message)
    }

    pub fn warning(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(resource, Severity::Warning, message)
    }
}

/// A validator run against the target dataset.
///
/// Each validator declares its configuration record. The runner binds the
/// validator's section of `validation` onto a fresh record and passes it to
/// [`Validator::execute`].
pub trait Validator {
    /// Configuration record bound from this validator's section.
    type Config: Bindable + Default;

    /// Section name under `validation`.
    ///
    /// Derived from the type name by default: `FileEncodingValidator`
    /// becomes `fileEncoding`. The derivation reads
    /// [`std::any::type_name`], whose format the compiler does not
    /// guarantee, so validators whose section users write into their
    /// configuration should return a fixed name here.
    fn name(&self) -> String {
        section_name(std::any::type_name::<Self>())
    }

    /// Create the configuration record before binding.
    fn make_configuration(&self) -> Self::Config {
        Self::Config::default()
    }

    /// Check the dataset and return any findings.
    fn execute(
        &self,
        params: &LintParameters,
        target_dir: &Path,
        config: &Self::Config,
    ) -> anyhow::Result<Vec<Finding>>;
}

/// Derive a configuration section name from a Rust type name.
///
/// The module path and generic arguments are dropped, a trailing
/// `Validator` is removed and the first letter is lower-cased.
pub fn section_name(type_name: &str) -> String {
    let base = type_name.split('<').next().unwrap_or(type_name);
    let short = base.rsplit("::").next().unwrap_or(base);
    let short = match short.strip_suffix("Validator") {
        Some(stem) if !stem.is_empty() => stem,
        _ => short,
    };

    let mut chars = short.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Object-safe validator interface used by the runner.
///
/// Implemented for every [`Validator`]; the configuration type is erased
/// by binding inside [`DynValidator::run`].
pub trait DynValidator {
    fn name(&self) -> String;

    /// Bind this validator's section from `params` and execute it.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Binding` if the section cannot be bound and
    /// `LintError::ValidatorExecution` if execution fails or panics.
    fn run(&self, params: &LintParameters, target_dir: &Path) -> Result<Vec<Finding>>;
}

impl<V: Validator> DynValidator for V {
    fn name(&self) -> String {
        Validator::name(self)
    }

    fn run(&self, params: &LintParameters, target_dir: &Path) -> Result<Vec<Finding>> {
        let name = Validator::name(self);
        let mut config = self.make_configuration();

        match params.validation_section(&name) {
            None | Some(ConfigNode::Null) => {
                tracing::debug!("{}: no configuration section, using defaults", name);
            }
            Some(section) => {
                bind(section, &mut config).map_err(|source| LintError::Binding {
                    validator: name.clone(),
                    source,
                })?;
            }
        }

        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.execute(params, target_dir, &config)));

        match outcome {
            Ok(Ok(findings)) => Ok(findings),
            Ok(Err(e)) => Err(LintError::ValidatorExecution {
                validator: name,
                message: format!("{:#}", e),
            }),
            Err(payload) => Err(LintError::ValidatorExecution {
                validator: name,
                message: format!("panicked: {}", panic_message(payload.as_ref())),
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
