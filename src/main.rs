//! rdflint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rdflint::cli::{Cli, Command, LintCommand, EXIT_FATAL};
use rdflint::lint::output::should_use_colors;
use rdflint::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to TRACE
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so the report on stdout stays machine-readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rdflint=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rdflint=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("rdflint starting with args: {:?}", cli);

    let use_color = !cli.no_color && should_use_colors();
    let mut ui = TerminalUI::new(use_color);
    let command = LintCommand::new(cli.lint).with_color(use_color);

    match command.execute(&mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_FATAL as u8)
        }
    }
}
