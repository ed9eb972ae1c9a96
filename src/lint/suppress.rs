//! Suppression of known problems.
//!
//! A suppression file lists problems to drop from the report before it is
//! rendered, so a dataset can adopt rdflint without fixing every existing
//! issue first.
//!
//! ```yaml
//! - file: a.rdf
//!   message: "fileEncoding: trailing whitespace"
//! - file: b.ttl
//!   pattern: "^prefix: .* is not allowed$"
//! ```

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::problem_set::ProblemSet;
use crate::error::{LintError, Result};

/// How a suppression matches a problem message.
#[derive(Debug, Clone)]
pub enum MessageMatcher {
    /// The message contains this text.
    Contains(String),
    /// The message matches this regular expression.
    Pattern(Regex),
}

impl MessageMatcher {
    pub fn is_match(&self, message: &str) -> bool {
        match self {
            MessageMatcher::Contains(text) => message.contains(text.as_str()),
            MessageMatcher::Pattern(regex) => regex.is_match(message),
        }
    }
}

/// A single suppression, scoped to one resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawSuppression")]
pub struct SuppressionEntry {
    resource: String,
    matcher: MessageMatcher,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSuppression {
    file: String,
    message: Option<String>,
    pattern: Option<String>,
}

impl TryFrom<RawSuppression> for SuppressionEntry {
    type Error = String;

    fn try_from(raw: RawSuppression) -> std::result::Result<Self, Self::Error> {
        let matcher = match (raw.message, raw.pattern) {
            (Some(message), None) => MessageMatcher::Contains(message),
            (None, Some(pattern)) => MessageMatcher::Pattern(
                Regex::new(&pattern).map_err(|e| format!("invalid pattern for {}: {}", raw.file, e))?,
            ),
            (Some(_), Some(_)) => {
                return Err(format!("{}: use either `message` or `pattern`, not both", raw.file))
            }
            (None, None) => return Err(format!("{}: `message` or `pattern` is required", raw.file)),
        };
        Ok(Self {
            resource: raw.file,
            matcher,
        })
    }
}

impl SuppressionEntry {
    /// Suppress messages on `resource` containing `message`.
    pub fn contains(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            matcher: MessageMatcher::Contains(message.into()),
        }
    }

    /// Suppress messages on `resource` matching a regular expression.
    pub fn pattern(resource: impl Into<String>, pattern: &str) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            resource: resource.into(),
            matcher: MessageMatcher::Pattern(Regex::new(pattern)?),
        })
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Whether this entry suppresses `message` reported on `resource`.
    pub fn suppresses(&self, resource: &str, message: &str) -> bool {
        self.resource == resource && self.matcher.is_match(message)
    }
}

/// Load suppression entries from a YAML file.
///
/// An empty file holds no entries.
///
/// # Errors
///
/// Returns `SuppressionParseError` if the file cannot be read or parsed.
pub fn load_suppressions(path: &Path) -> Result<Vec<SuppressionEntry>> {
    let parse_error = |message: String| LintError::SuppressionParseError {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<SuppressionEntry> =
        serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
    tracing::debug!("loaded {} suppression(s) from {}", entries.len(), path.display());
    Ok(entries)
}

/// Return a copy of `problems` without the suppressed ones.
///
/// Resources left without problems are dropped. Applying the same entries
/// again changes nothing.
pub fn apply(problems: &ProblemSet, entries: &[SuppressionEntry]) -> ProblemSet {
    let mut filtered = ProblemSet::new();
    for (resource, problem) in problems.problems() {
        let suppressed = entries
            .iter()
            .any(|entry| entry.suppresses(resource, problem.message()));
        if suppressed {
            tracing::trace!("suppressed {}: {}", resource, problem.message());
        } else {
            filtered.push(resource, problem.clone());
        }
    }
    filtered
}
