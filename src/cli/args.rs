//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ParameterOverrides;
use crate::lint::OutputFormat;

/// rdflint - Linter for RDF datasets.
#[derive(Debug, Parser)]
#[command(name = "rdflint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub lint: LintArgs,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Arguments for a lint run.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Base URI of the dataset
    #[arg(long = "baseuri", value_name = "URI")]
    pub base_uri: Option<String>,

    /// Directory holding the dataset (default: current directory)
    #[arg(short, long = "targetdir", value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Directory the problem report is written to (default: target directory)
    #[arg(short, long = "outputdir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding a previous version of the dataset
    #[arg(long = "origindir", value_name = "DIR")]
    pub origin_dir: Option<PathBuf>,

    /// Path to config file (default: searched under the target directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to suppression file (default: searched under the target directory)
    #[arg(long, value_name = "FILE")]
    pub suppress: Option<PathBuf>,

    /// Console output format: human, json, yaml
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Emit LSP publishDiagnostics notifications instead of the console report
    #[arg(long)]
    pub diagnostics: bool,
}

impl LintArgs {
    /// Directory the configuration and suppression files are searched in.
    pub fn search_root(&self) -> PathBuf {
        self.target_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Values that override the configuration file.
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            target_dir: self.target_dir.clone(),
            output_dir: self.output_dir.clone(),
            base_uri: self.base_uri.clone(),
            origin_dir: self.origin_dir.clone(),
            suppress_path: self.suppress.clone(),
        }
    }
}
