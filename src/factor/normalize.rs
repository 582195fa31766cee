//! Factor input normalization.
//!
//! Factors arrive from repeated `-f` flags and from the comma-separated
//! `TOXFACTOR` variable. Each raw value may hold several comma-separated
//! expressions with stray whitespace around them.

/// Split raw factor values into a flat list of expressions.
///
/// Each value is split on commas, every piece is trimmed, and empty pieces
/// are discarded.
///
/// # Example
///
/// ```
/// use toxfactor::factor::normalize_factors;
///
/// assert_eq!(normalize_factors(&["py37", "isort,lint"]), vec!["py37", "isort", "lint"]);
/// assert_eq!(normalize_factors(&[" ", "isort , lint "]), vec!["isort", "lint"]);
/// ```
pub fn normalize_factors<S: AsRef<str>>(factors: &[S]) -> Vec<String> {
    factors
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the value of a factor environment variable (`VAR=foo,bar`).
///
/// An unset variable yields no factors.
pub fn parse_factor_var(value: Option<&str>) -> Vec<String> {
    match value {
        Some(value) => normalize_factors(&[value]),
        None => Vec::new(),
    }
}
