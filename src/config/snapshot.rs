//! Parsed tox configuration as handed over by the host.
//!
//! tox parses its own ini file and expands generative envlists. What the
//! selection logic needs from that parse is captured by [`IniSource`]:
//! section names, their values, their position in the source file, and
//! the file path. [`ConfigSnapshot`] is the serializable implementation
//! the CLI loads from disk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A configuration value: either a raw string or a host-expanded list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IniValue {
    /// Raw value as written in the ini file.
    Str(String),
    /// Value already split (and brace-expanded) by the host.
    List(Vec<String>),
}

impl From<&str> for IniValue {
    fn from(value: &str) -> Self {
        IniValue::Str(value.to_string())
    }
}

/// Read access to a parsed ini configuration.
pub trait IniSource {
    /// Path of the file the configuration was parsed from.
    fn path(&self) -> &Path;

    /// Names of all sections, in no particular order.
    fn section_names(&self) -> Vec<&str>;

    /// Look up `key` in `section`.
    fn get(&self, section: &str, key: &str) -> Option<&IniValue>;

    /// Source line of the section header, if the section exists.
    fn lineof(&self, section: &str) -> Option<usize>;
}

/// One `[name]` block of the ini file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name, e.g. `tox` or `testenv:lint`.
    pub name: String,

    /// Line of the section header in the source file.
    pub line: usize,

    /// Key/value pairs of the section.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, IniValue>,
}

impl Section {
    /// Create an empty section at the given line.
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style value assignment.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<IniValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// Serializable snapshot of a parsed tox configuration.
///
/// # Example
///
/// ```
/// use toxfactor::config::{ConfigSnapshot, IniSource, Section};
///
/// let snapshot = ConfigSnapshot::new("tox.ini")
///     .with_section(Section::new("tox", 1).with_value("envlist", "py37,lint"))
///     .with_section(Section::new("testenv:lint", 4));
///
/// assert_eq!(snapshot.lineof("testenv:lint"), Some(4));
/// assert!(snapshot.get("tox", "envlist").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// Path of the parsed file (`tox.ini`, `setup.cfg`, ...).
    pub path: PathBuf,

    /// Sections in any order; `line` carries the source position.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl ConfigSnapshot {
    /// Create a snapshot with no sections.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sections: Vec::new(),
        }
    }

    /// Builder-style section addition.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Find a section by name. The first one wins on duplicates.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

impl IniSource for ConfigSnapshot {
    fn path(&self) -> &Path {
        &self.path
    }

    fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    fn get(&self, section: &str, key: &str) -> Option<&IniValue> {
        self.section(section)?.values.get(key)
    }

    fn lineof(&self, section: &str) -> Option<usize> {
        self.section(section).map(|s| s.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_deserializes_from_string() {
        let value: IniValue = serde_json::from_str(r#""py37,lint""#).unwrap();
        assert_eq!(value, IniValue::Str("py37,lint".to_string()));
    }

    #[test]
    fn value_deserializes_from_list() {
        let value: IniValue = serde_json::from_str(r#"["py36", "py37"]"#).unwrap();
        assert_eq!(
            value,
            IniValue::List(vec!["py36".to_string(), "py37".to_string()])
        );
    }

    #[test]
    fn section_values_default_to_empty() {
        let section: Section = serde_json::from_str(r#"{"name": "testenv:lint", "line": 3}"#).unwrap();
        assert_eq!(section.name, "testenv:lint");
        assert_eq!(section.line, 3);
        assert!(section.values.is_empty());
    }

    #[test]
    fn get_missing_section_or_key() {
        let snapshot = ConfigSnapshot::new("tox.ini").with_section(Section::new("tox", 1));
        assert!(snapshot.get("testenv", "deps").is_none());
        assert!(snapshot.get("tox", "envlist").is_none());
    }

    #[test]
    fn lineof_missing_section() {
        let snapshot = ConfigSnapshot::new("tox.ini");
        assert_eq!(snapshot.lineof("tox"), None);
    }

    #[test]
    fn duplicate_sections_resolve_to_first() {
        let snapshot = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("testenv:lint", 2))
            .with_section(Section::new("testenv:lint", 9));
        assert_eq!(snapshot.lineof("testenv:lint"), Some(2));
    }

    #[test]
    fn section_names_lists_all() {
        let snapshot = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox", 1))
            .with_section(Section::new("testenv", 5));
        assert_eq!(snapshot.section_names(), vec!["tox", "testenv"]);
    }
}
