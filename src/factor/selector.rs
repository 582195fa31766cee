//! Environment list filtering.

use super::matcher::env_matches;

/// Determine the subset of environment names that match any of the factors.
///
/// Input order is preserved, and a name matching several expressions is
/// only kept once. No factors selects nothing.
///
/// # Example
///
/// ```
/// use toxfactor::factor::match_envs;
///
/// let envlist = ["py36-django20", "py36-django21", "py37-django20", "py37-django21"];
/// assert_eq!(
///     match_envs(&envlist, &["py37", "django21"]),
///     vec!["py36-django21", "py37-django20", "py37-django21"],
/// );
/// ```
pub fn match_envs<N, F>(env_names: &[N], factors: &[F]) -> Vec<String>
where
    N: AsRef<str>,
    F: AsRef<str>,
{
    env_names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| factors.iter().any(|f| env_matches(name, f.as_ref())))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TESTENVS: [&str; 4] = [
        "py36-django20",
        "py36-django21",
        "py37-django20",
        "py37-django21",
    ];

    #[test]
    fn no_factors() {
        let factors: [&str; 0] = [];
        assert!(match_envs(&TESTENVS, &factors).is_empty());
    }

    #[test]
    fn non_existent_factor() {
        assert!(match_envs(&TESTENVS, &["foo"]).is_empty());
    }

    #[test]
    fn single_factor() {
        assert_eq!(
            match_envs(&TESTENVS, &["py37"]),
            vec!["py37-django20", "py37-django21"]
        );
    }

    #[test]
    fn multiple_factors() {
        assert_eq!(
            match_envs(&TESTENVS, &["py37", "django20"]),
            vec!["py36-django20", "py37-django20", "py37-django21"]
        );
    }

    #[test]
    fn overlapping_factors_do_not_duplicate() {
        assert_eq!(
            match_envs(&TESTENVS, &["py37", "django21"]),
            vec!["py36-django21", "py37-django20", "py37-django21"]
        );
    }

    #[test]
    fn conjunctive_factor() {
        assert_eq!(
            match_envs(&TESTENVS, &["django21-py36"]),
            vec!["py36-django21"]
        );
    }

    #[test]
    fn empty_envlist() {
        let envs: Vec<String> = Vec::new();
        assert!(match_envs(&envs, &["py37"]).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let factors = ["py37", "django21"];
        let once = match_envs(&TESTENVS, &factors);
        let twice = match_envs(&once, &factors);
        assert_eq!(once, twice);
    }

    #[test]
    fn accepts_owned_strings() {
        let envs: Vec<String> = TESTENVS.iter().map(|s| s.to_string()).collect();
        let factors = vec!["py36".to_string()];
        assert_eq!(
            match_envs(&envs, &factors),
            vec!["py36-django20", "py36-django21"]
        );
    }
}
