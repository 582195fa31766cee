//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::{Result, ToxFactorError};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its result to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading the snapshot at `config_path`.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Get the snapshot path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.config_path, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Declared(args)) => {
                let cmd = super::declared::DeclaredCommand::new(&self.config_path, args.clone());
                cmd.execute(out)
            }
            None => {
                // Default to list command with default args
                let cmd = super::list::ListCommand::new(&self.config_path, ListArgs::default());
                cmd.execute(out)
            }
        }
    }

    /// Dispatch, flush `out`, and map the outcome to a process exit code.
    ///
    /// Errors, including a failed flush of the output, are reported on
    /// stderr and exit with 1.
    pub fn run(&self, cli: &Cli, out: &mut dyn Write) -> u8 {
        let outcome = self.dispatch(cli, out).and_then(|result| {
            out.flush().map_err(ToxFactorError::from)?;
            Ok(result)
        });

        match outcome {
            Ok(result) => result.exit_code as u8,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        }
    }
}
