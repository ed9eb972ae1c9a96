//! Top-level lint parameters.
//!
//! This module contains the struct that maps to the configuration file
//! format. Validator sections under `validation` stay untyped here and are
//! bound later, one validator at a time.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::document::ConfigNode;

/// Root configuration structure for `rdflint-config.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LintParameters {
    /// Base URI of the dataset
    pub base_uri: Option<String>,

    /// Directory holding the resources to lint
    pub target_dir: Option<PathBuf>,

    /// Directory the problem report is written to
    pub output_dir: Option<PathBuf>,

    /// Directory holding a previous version of the dataset
    pub origin_dir: Option<PathBuf>,

    /// Suppression file path
    pub suppress_path: Option<PathBuf>,

    /// Generation rules run before validation
    pub rules: Vec<GenerationRule>,

    /// Per-validator configuration sections, keyed by validator name
    pub validation: ConfigNode,
}

/// A rule for the generation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationRule {
    /// Query selecting the data the template is applied to
    pub query: Option<String>,

    /// Template producing the generated resource
    pub template: Option<String>,

    /// Generated resource, relative to the target directory
    pub target: String,
}

impl LintParameters {
    /// The configuration section for the named validator, if present.
    pub fn validation_section(&self, validator: &str) -> Option<&ConfigNode> {
        self.validation.get(validator)
    }

    /// Target directory, defaulting to the current directory.
    pub fn target_dir(&self) -> &Path {
        self.target_dir.as_deref().unwrap_or(Path::new("."))
    }

    /// Output directory, defaulting to the target directory.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or_else(|| self.target_dir())
    }
}
