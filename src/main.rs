//! toxfactor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use toxfactor::cli::{Cli, CommandDispatcher};
use toxfactor::config::snapshot_path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only the environment list.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toxfactor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toxfactor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toxfactor starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new(snapshot_path(cli.config.as_deref()));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    ExitCode::from(dispatcher.run(&cli, &mut out))
}
