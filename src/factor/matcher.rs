//! Single environment matching.

use std::collections::HashSet;

/// Split an environment name into its set of factors.
///
/// Empty segments produced by leading, trailing or doubled dashes are
/// dropped, so `-py37--redis-` yields `{py37, redis}`.
///
/// # Example
///
/// ```
/// use toxfactor::factor::env_factors;
///
/// let factors = env_factors("py37-django21");
/// assert!(factors.contains("py37"));
/// assert!(factors.contains("django21"));
/// assert_eq!(factors.len(), 2);
/// ```
pub fn env_factors(name: &str) -> HashSet<&str> {
    name.split('-').filter(|f| !f.is_empty()).collect()
}

/// Determine if an environment name matches the given factor expression.
///
/// The expression may itself be several dash-joined factors, all of which
/// must be present in the name. Order does not matter and partial factor
/// matches are not valid: `py3` does not match `py37`.
///
/// An expression with no factors matches every name.
pub fn env_matches(env_name: &str, factor: &str) -> bool {
    let available = env_factors(env_name);
    env_factors(factor).is_subset(&available)
}
