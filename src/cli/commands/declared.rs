//! Declared command implementation.
//!
//! The `toxfactor declared` command prints every environment the config
//! knows about, including those only declared by a `[testenv:NAME]`
//! section.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::cli::args::DeclaredArgs;
use crate::config::{get_declared_envs, load_snapshot, ListSplitter};
use crate::error::{Result, ToxFactorError};

use super::dispatcher::{Command, CommandResult};
use super::display::write_envs;

/// The declared command implementation.
pub struct DeclaredCommand {
    config_path: PathBuf,
    args: DeclaredArgs,
}

impl DeclaredCommand {
    /// Create a new declared command.
    pub fn new(config_path: &Path, args: DeclaredArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
        }
    }
}

impl Command for DeclaredCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = match load_snapshot(&self.config_path) {
            Ok(c) => c,
            Err(ToxFactorError::ConfigNotFound { path }) => {
                error!("No config snapshot found at {}", path.display());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let envs = get_declared_envs(&config, &ListSplitter);
        write_envs(out, &envs, self.args.json)?;
        Ok(CommandResult::success())
    }
}
