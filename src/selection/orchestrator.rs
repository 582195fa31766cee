//! Envlist selection.
//!
//! Resolves the declared environments of a config and filters them by
//! factor, and decides whether the host's envlist should be replaced at
//! all for a given invocation.

use std::fmt;

use tracing::{debug, info};

use super::context::HostContext;
use crate::config::{get_declared_envs, EnvSplitter, IniSource};
use crate::factor::match_envs;

/// Get the environment names from the tox config that match the factors.
///
/// See [`match_envs`] for the matching rules and [`get_declared_envs`]
/// for which environments are considered.
///
/// # Example
///
/// ```
/// use toxfactor::config::{ConfigSnapshot, IniValue, ListSplitter, Section};
/// use toxfactor::selection::get_envlist;
///
/// let envlist: Vec<String> = ["py36-django20", "py36-django21", "py37-django20", "py37-django21"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let ini = ConfigSnapshot::new("tox.ini")
///     .with_section(Section::new("tox", 1).with_value("envlist", IniValue::List(envlist)))
///     .with_section(Section::new("testenv:lint", 4))
///     .with_section(Section::new("testenv:isort", 5));
///
/// assert_eq!(
///     get_envlist(&ini, &ListSplitter, &["py37", "lint"]),
///     vec!["py37-django20", "py37-django21", "lint"],
/// );
/// ```
pub fn get_envlist<C, S, F>(ini: &C, splitter: &S, factors: &[F]) -> Vec<String>
where
    C: IniSource + ?Sized,
    S: EnvSplitter + ?Sized,
    F: AsRef<str>,
{
    let declared = get_declared_envs(ini, splitter);
    match_envs(&declared, factors)
}

/// Why the host's envlist was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Running inside a `tox --parallel` worker; the parent already filtered.
    DelegatedWorker,
    /// Environments were selected explicitly with `-e` or `TOXENV`.
    EnvPinned,
    /// No factors were requested.
    NoFactors,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DelegatedWorker => write!(f, "parallel worker"),
            Self::EnvPinned => write!(f, "environments pinned"),
            Self::NoFactors => write!(f, "no factors"),
        }
    }
}

/// Result of the selection decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Replace the host's envlist with these environments.
    Selected(Vec<String>),
    /// Leave the host's envlist as it is.
    Skipped(SkipReason),
}

impl SelectionOutcome {
    /// The replacement envlist, if one was selected.
    pub fn envlist(&self) -> Option<&[String]> {
        match self {
            Self::Selected(envs) => Some(envs),
            Self::Skipped(_) => None,
        }
    }
}

/// Decide the envlist for one invocation.
///
/// Factor filtering is skipped in delegated workers, when environments
/// are pinned explicitly, and when no factors were given.
pub fn configure<C, S>(ini: &C, splitter: &S, ctx: &HostContext) -> SelectionOutcome
where
    C: IniSource + ?Sized,
    S: EnvSplitter + ?Sized,
{
    let skip = if ctx.delegated_worker {
        Some(SkipReason::DelegatedWorker)
    } else if ctx.pinned_envs.is_some() {
        Some(SkipReason::EnvPinned)
    } else if ctx.factors.is_empty() {
        Some(SkipReason::NoFactors)
    } else {
        None
    };

    if let Some(reason) = skip {
        debug!("Not filtering by factor: {}", reason);
        return SelectionOutcome::Skipped(reason);
    }

    let envs = get_envlist(ini, splitter, &ctx.factors);
    info!(
        "Selected {} environments for factors {}",
        envs.len(),
        ctx.factors.join(",")
    );
    SelectionOutcome::Selected(envs)
}
