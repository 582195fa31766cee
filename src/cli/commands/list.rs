//! List command implementation.
//!
//! The `toxfactor list` command prints the environments tox should run:
//! the factor selection when one applies, otherwise what tox would have
//! run on its own.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::cli::args::ListArgs;
use crate::config::{get_configured_envlist, load_snapshot, ListSplitter};
use crate::error::{Result, ToxFactorError};
use crate::selection::{configure, HostContext, SelectionOutcome, SkipReason};

use super::dispatcher::{Command, CommandResult};
use super::display::write_envs;

/// The list command implementation.
pub struct ListCommand {
    config_path: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config_path: &Path, args: ListArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }

    /// Execute against an explicit host context.
    pub fn execute_with(&self, ctx: &HostContext, out: &mut dyn Write) -> Result<CommandResult> {
        let config = match load_snapshot(&self.config_path) {
            Ok(c) => c,
            Err(ToxFactorError::ConfigNotFound { path }) => {
                error!("No config snapshot found at {}", path.display());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let envs = match configure(&config, &ListSplitter, ctx) {
            SelectionOutcome::Selected(envs) => envs,
            SelectionOutcome::Skipped(SkipReason::EnvPinned) => match &ctx.pinned_envs {
                Some(pinned) if !pinned.is_empty() => pinned.clone(),
                _ => get_configured_envlist(&config, &ListSplitter),
            },
            SelectionOutcome::Skipped(_) => get_configured_envlist(&config, &ListSplitter),
        };

        write_envs(out, &envs, self.args.json)?;
        Ok(CommandResult::success())
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let ctx = HostContext::from_env(&self.args.factors, self.args.env.as_deref());
        self.execute_with(&ctx, out)
    }
}
