//! Envlist selection by factor.
//!
//! Ties the config view and the factor matcher together. The decision
//! chain for one invocation is:
//!
//! 1. Delegated `tox --parallel` worker: leave the envlist alone
//! 2. Environments pinned with `-e` or `TOXENV`: leave the envlist alone
//! 3. No factors requested: leave the envlist alone
//! 4. Otherwise: declared environments filtered by the factors

pub mod context;
pub mod orchestrator;

pub use context::{HostContext, TOXENV_VAR, TOXFACTOR_VAR, TOX_PARALLEL_ENV_VAR};
pub use orchestrator::{configure, get_envlist, SelectionOutcome, SkipReason};
