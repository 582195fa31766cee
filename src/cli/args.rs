//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toxfactor - Select tox environments by factor.
#[derive(Debug, Parser)]
#[command(name = "toxfactor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config snapshot written by tox ('-' reads stdin)
    #[arg(short, long, global = true, env = "TOXFACTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the environments tox should run (default if no command specified)
    List(ListArgs),

    /// List every environment declared by the config
    Declared(DeclaredArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Work against environments that match the given factors (repeatable, comma-separated)
    #[arg(short, long = "factor", value_name = "FACTOR")]
    pub factors: Vec<String>,

    /// Run only the given environments; disables factor selection
    #[arg(short, long, value_name = "ENV")]
    pub env: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `declared` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DeclaredArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
