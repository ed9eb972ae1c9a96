//! Configuration file discovery and loading.
//!
//! This module finds the configuration and suppression files relative to the
//! target directory, loads them, and applies command-line overrides.

use crate::config::document::ConfigNode;
use crate::config::params::LintParameters;
use crate::error::{LintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file locations searched in order, relative to the target directory.
pub const CONFIG_SEARCH_PATH: &[&str] = &[
    "rdflint-config.yml",
    ".rdflint-config.yml",
    ".rdflint/rdflint-config.yml",
    "config/rdflint/rdflint-config.yml",
    ".circleci/rdflint-config.yml",
];

/// Suppression file locations searched in order, relative to the target directory.
pub const SUPPRESS_SEARCH_PATH: &[&str] = &[
    "rdflint-suppress.yml",
    ".rdflint-suppress.yml",
    ".rdflint/rdflint-suppress.yml",
    "config/rdflint/rdflint-suppress.yml",
    ".circleci/rdflint-suppress.yml",
];

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ParameterOverrides {
    pub target_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub base_uri: Option<String>,
    pub origin_dir: Option<PathBuf>,
    pub suppress_path: Option<PathBuf>,
}

/// Return the first existing file of `candidates` under `parent`.
pub fn search(parent: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| parent.join(name))
        .find(|path| path.is_file())
}

/// Find the configuration file for a target directory.
pub fn find_config(parent: &Path) -> Option<PathBuf> {
    search(parent, CONFIG_SEARCH_PATH)
}

/// Find the suppression file for a target directory.
pub fn find_suppressions(parent: &Path) -> Option<PathBuf> {
    search(parent, SUPPRESS_SEARCH_PATH)
}

/// Load configuration from `path`, or defaults when no file is given.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(path: Option<&Path>) -> Result<LintParameters> {
    tracing::trace!("load_config: path={:?}", path);
    let Some(path) = path else {
        return Ok(LintParameters::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`LintParameters`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintParameters> {
    if content.trim().is_empty() {
        return Ok(LintParameters::default());
    }

    let params: LintParameters =
        serde_yaml::from_str(content).map_err(|e| LintError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if !matches!(params.validation, ConfigNode::Mapping(_) | ConfigNode::Null) {
        return Err(LintError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: format!(
                "`validation` must be a mapping of validator names, found a {}",
                params.validation.kind()
            ),
        });
    }

    Ok(params)
}

/// Apply command-line overrides and fill in directory defaults.
///
/// `parent` is where the suppression file is searched for when none is given.
///
/// - target directory: command line, else file, else `.`
/// - output directory: command line, else file, else the target directory
/// - base URI, origin directory, suppression file: replaced only when given
pub fn setup_parameters(params: &mut LintParameters, overrides: ParameterOverrides, parent: &Path) {
    let suppress_path = overrides
        .suppress_path
        .or_else(|| find_suppressions(parent));

    if let Some(target_dir) = overrides.target_dir {
        params.target_dir = Some(target_dir);
    } else if params.target_dir.is_none() {
        params.target_dir = Some(PathBuf::from("."));
    }

    if let Some(output_dir) = overrides.output_dir {
        params.output_dir = Some(output_dir);
    } else if params.output_dir.is_none() {
        params.output_dir = params.target_dir.clone();
    }

    if let Some(base_uri) = overrides.base_uri {
        params.base_uri = Some(base_uri);
    }

    if let Some(origin_dir) = overrides.origin_dir {
        params.origin_dir = Some(origin_dir);
    }

    if let Some(suppress_path) = suppress_path {
        params.suppress_path = Some(suppress_path);
    }
}
