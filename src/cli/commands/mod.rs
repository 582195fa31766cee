//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and shares the snapshot path.

pub mod declared;
pub mod dispatcher;
pub mod display;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
