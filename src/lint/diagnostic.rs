//! Problem severity and problem records.
//!
//! This module provides [`Severity`] and the immutable [`Problem`] stored in
//! a [`ProblemSet`](super::ProblemSet) bucket.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bind::FromScalar;

/// Severity level for problems.
///
/// Any [`Severity::Error`] left after suppression fails the run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Worth attention, does not fail the run.
    #[default]
    Warning,
    /// Fails the run.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warning),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

impl FromScalar for Severity {
    const EXPECTED: &'static str = "severity";

    fn from_scalar(text: &str) -> Result<Self, String> {
        text.parse()
    }
}

/// A single problem reported against a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "level")]
    severity: Severity,
    message: String,
}

impl Problem {
    /// Create a new problem.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Create an error problem.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning problem.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
