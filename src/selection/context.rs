//! Process boundary inputs for environment selection.
//!
//! Everything the selection needs from the command line and the process
//! environment is read once into a [`HostContext`]. The matching core never
//! looks at environment variables itself.

use crate::factor::{normalize_factors, parse_factor_var};

/// Default factors, comma separated (`TOXFACTOR=py37,lint`).
pub const TOXFACTOR_VAR: &str = "TOXFACTOR";

/// Explicit environment selection; disables factor filtering.
pub const TOXENV_VAR: &str = "TOXENV";

/// Marker tox sets for `tox --parallel` worker processes.
pub const TOX_PARALLEL_ENV_VAR: &str = "TOX_PARALLEL_ENV";

/// Inputs to the selection decision for one invocation.
///
/// # Example
///
/// ```
/// use toxfactor::selection::HostContext;
///
/// let ctx = HostContext::from_env_with(&["py37"], None, |_| Err(std::env::VarError::NotPresent));
/// assert_eq!(ctx.factors, vec!["py37"]);
/// assert!(ctx.pinned_envs.is_none());
/// assert!(!ctx.delegated_worker);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostContext {
    /// Normalized factor expressions to select by.
    pub factors: Vec<String>,

    /// Environments pinned via `-e` or `TOXENV`, if any.
    pub pinned_envs: Option<Vec<String>>,

    /// Whether this process is a delegated parallel worker.
    pub delegated_worker: bool,
}

impl HostContext {
    /// Build the context from CLI values and the process environment.
    pub fn from_env<S: AsRef<str>>(cli_factors: &[S], cli_env: Option<&str>) -> Self {
        Self::from_env_with(cli_factors, cli_env, |key| std::env::var(key))
    }

    /// Build the context with a custom env var lookup (for testing).
    ///
    /// CLI factors take precedence over `TOXFACTOR`, and `-e` over `TOXENV`.
    /// `TOXENV` pins the selection as soon as it is set, even when empty.
    pub fn from_env_with<S, F>(cli_factors: &[S], cli_env: Option<&str>, env_fn: F) -> Self
    where
        S: AsRef<str>,
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let mut factors = normalize_factors(cli_factors);
        if factors.is_empty() {
            factors = parse_factor_var(env_fn(TOXFACTOR_VAR).ok().as_deref());
        }

        let pinned_envs = match cli_env.filter(|env| !env.trim().is_empty()) {
            Some(env) => Some(split_pinned(env)),
            None => env_fn(TOXENV_VAR).ok().map(|env| split_pinned(&env)),
        };

        Self {
            factors,
            pinned_envs,
            delegated_worker: env_fn(TOX_PARALLEL_ENV_VAR).is_ok(),
        }
    }

    /// Builder-style factor assignment; values are normalized.
    pub fn with_factors<S: AsRef<str>>(mut self, factors: &[S]) -> Self {
        self.factors = normalize_factors(factors);
        self
    }

    /// Builder-style environment pinning.
    pub fn with_pinned_envs<S: AsRef<str>>(mut self, envs: &[S]) -> Self {
        self.pinned_envs = Some(envs.iter().map(|e| e.as_ref().to_string()).collect());
        self
    }

    /// Mark the context as a delegated parallel worker.
    pub fn as_delegated_worker(mut self) -> Self {
        self.delegated_worker = true;
        self
    }
}

fn split_pinned(value: &str) -> Vec<String> {
    normalize_factors(&[value])
}
