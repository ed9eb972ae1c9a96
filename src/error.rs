//! Error types for rdflint operations.
//!
//! This module defines [`LintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Errors scoped to a single validator (binding, execution) are converted
//!   into problems by the runner and never abort a run
//! - Errors that prevent deciding which validators run, or how they are
//!   configured, are fatal and surface to the caller
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::bind::BindError;

/// Core error type for rdflint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse the suppression file.
    #[error("Failed to parse suppressions at {path}: {message}")]
    SuppressionParseError { path: PathBuf, message: String },

    /// A validator's configuration section could not be bound.
    #[error("Invalid configuration for validator '{validator}': {source}")]
    Binding {
        validator: String,
        #[source]
        source: BindError,
    },

    /// A validator failed while executing.
    #[error("Validator '{validator}' failed: {message}")]
    ValidatorExecution { validator: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintError {
    /// Whether this error must stop the whole run.
    ///
    /// Per-validator errors are recorded as problems instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            LintError::Binding { .. } | LintError::ValidatorExecution { .. }
        )
    }
}

/// Result type alias for rdflint operations.
pub type Result<T> = std::result::Result<T, LintError>;
