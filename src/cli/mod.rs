//! Command-line interface for rdflint.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the lint command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - Command trait and result type
//! - [`lint`] - The lint run: configuration, validation, suppression, output

pub mod args;
pub mod command;
pub mod lint;

pub use args::{Cli, LintArgs};
pub use command::{Command, CommandResult};
pub use lint::{LintCommand, EXIT_FATAL, EXIT_PROBLEMS};
