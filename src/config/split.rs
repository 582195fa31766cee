//! Envlist value splitting.
//!
//! Turning an `envlist` value into names is the host's job: tox splits on
//! commas and newlines and expands `{a,b}` groups. [`EnvSplitter`] is the
//! seam for that routine. [`ListSplitter`] handles values the host has
//! already expanded plus plain comma or newline separated strings.

use tracing::warn;

use super::snapshot::IniValue;

/// Splits an `envlist` value into individual environment names.
pub trait EnvSplitter {
    /// Split `value` into names, in declaration order.
    fn split_env(&self, value: &IniValue) -> Vec<String>;
}

/// Splitter for host-expanded lists and plain separated strings.
///
/// Lists pass through unchanged. Strings lose `#` comments at the end of
/// each line, are split on newlines and on commas outside `{...}` groups,
/// trimmed, and empty entries dropped. Brace groups are kept whole but not
/// expanded.
///
/// # Example
///
/// ```
/// use toxfactor::config::{EnvSplitter, IniValue, ListSplitter};
///
/// let value = IniValue::Str("py37,  # default\n  lint".to_string());
/// assert_eq!(ListSplitter.split_env(&value), vec!["py37", "lint"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSplitter;

impl EnvSplitter for ListSplitter {
    fn split_env(&self, value: &IniValue) -> Vec<String> {
        match value {
            IniValue::List(names) => names.clone(),
            IniValue::Str(raw) => {
                let names: Vec<String> = raw
                    .lines()
                    .map(strip_comment)
                    .flat_map(split_outside_braces)
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();

                for name in names.iter().filter(|name| name.contains('{')) {
                    warn!(
                        "envlist entry '{}' is not expanded; pass the host-expanded list instead",
                        name
                    );
                }
                names
            }
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Split on commas that are not inside a `{...}` group.
fn split_outside_braces(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&line[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&line[start..]);
    parts
}
