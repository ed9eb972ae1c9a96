//! Configuration loading for rdflint.
//!
//! This module handles all aspects of configuration:
//! - The generic document tree in [`document`]
//! - The top-level parameters in [`params`]
//! - File discovery, loading and command-line overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use rdflint::config::parse_config;
//! use std::path::Path;
//!
//! let params = parse_config(
//!     "baseUri: http://example.com/\nvalidation:\n  prefix:\n    severity: error\n",
//!     Path::new("rdflint-config.yml"),
//! )
//! .unwrap();
//!
//! assert_eq!(params.base_uri.as_deref(), Some("http://example.com/"));
//! assert!(params.validation_section("prefix").is_some());
//! ```
//!
//! # Configuration File Locations
//!
//! Unless `--config` is given, the first existing file of
//! [`CONFIG_SEARCH_PATH`] under the target directory is used.

pub mod document;
pub mod loader;
pub mod params;

pub use document::ConfigNode;
pub use loader::{
    find_config, find_suppressions, load_config, parse_config, setup_parameters,
    ParameterOverrides, CONFIG_SEARCH_PATH, SUPPRESS_SEARCH_PATH,
};
pub use params::{GenerationRule, LintParameters};
