//! Declared environment resolution.
//!
//! The full set of environments a tox config knows about is the `envlist`
//! of the main section followed by every environment that only has its
//! own `[testenv:NAME]` section.

use std::path::Path;

use tracing::debug;

use super::snapshot::IniSource;
use super::split::EnvSplitter;

/// Main section name in `tox.ini` and `tox.toml`-style files.
pub const TOX_SECTION: &str = "tox";

/// Main section name when tox is configured from `setup.cfg`.
pub const SETUP_CFG_TOX_SECTION: &str = "tox:tox";

/// Prefix of per-environment sections.
pub const TESTENV_PREFIX: &str = "testenv:";

/// Key holding the environment list in the main section.
pub const ENVLIST_KEY: &str = "envlist";

const SETUP_CFG: &str = "setup.cfg";

/// Pick the main section name for a config file path.
///
/// `setup.cfg` namespaces the section as `tox:tox`; other files use `tox`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use toxfactor::config::main_section_name;
///
/// assert_eq!(main_section_name(Path::new("/src/pkg/setup.cfg")), "tox:tox");
/// assert_eq!(main_section_name(Path::new("/src/pkg/tox.ini")), "tox");
/// ```
pub fn main_section_name(path: &Path) -> &'static str {
    if path.to_string_lossy().ends_with(SETUP_CFG) {
        SETUP_CFG_TOX_SECTION
    } else {
        TOX_SECTION
    }
}

/// Get the environments listed in the main section's `envlist`.
///
/// A missing main section or a missing `envlist` key yields no names.
pub fn get_configured_envlist<C, S>(ini: &C, splitter: &S) -> Vec<String>
where
    C: IniSource + ?Sized,
    S: EnvSplitter + ?Sized,
{
    let section = main_section_name(ini.path());
    match ini.get(section, ENVLIST_KEY) {
        Some(value) => splitter.split_env(value),
        None => {
            debug!("No {} in [{}] of {}", ENVLIST_KEY, section, ini.path().display());
            Vec::new()
        }
    }
}

/// Get the full list of environments from the tox config.
///
/// This also includes environments that aren't in the envlist but are
/// declared by having their own `testenv:NAME` section. The envlist comes
/// first, in its own order, then the remaining section environments in
/// source order. Names appear once.
pub fn get_declared_envs<C, S>(ini: &C, splitter: &S) -> Vec<String>
where
    C: IniSource + ?Sized,
    S: EnvSplitter + ?Sized,
{
    let mut envs: Vec<String> = Vec::new();
    for name in get_configured_envlist(ini, splitter) {
        if !envs.contains(&name) {
            envs.push(name);
        }
    }

    let mut sections: Vec<(&str, &str)> = ini
        .section_names()
        .into_iter()
        .filter_map(|section| {
            section
                .strip_prefix(TESTENV_PREFIX)
                .map(|name| (section, name))
        })
        .collect();
    // Stable sort keeps file order for sections sharing a line.
    sections.sort_by_key(|(section, _)| ini.lineof(section).unwrap_or(usize::MAX));

    for (_, name) in sections {
        if !envs.iter().any(|env| env == name) {
            envs.push(name.to_string());
        }
    }

    debug!("Declared environments: {:?}", envs);
    envs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::snapshot::{ConfigSnapshot, IniValue, Section};
    use crate::config::split::ListSplitter;

    fn expanded(names: &[&str]) -> IniValue {
        IniValue::List(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn main_section_for_tox_ini() {
        assert_eq!(main_section_name(Path::new("tox.ini")), TOX_SECTION);
    }

    #[test]
    fn main_section_for_setup_cfg() {
        assert_eq!(
            main_section_name(Path::new("/tmp/project/setup.cfg")),
            SETUP_CFG_TOX_SECTION
        );
    }

    #[test]
    fn envlist_only() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox", 1).with_value("envlist", "py27,py37"));
        assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["py27", "py37"]);
    }

    #[test]
    fn generative_envlist() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox", 1).with_value("envlist", expanded(&["py27", "py37"])));
        assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["py27", "py37"]);
    }

    #[test]
    fn testenvs_only() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("testenv:lint", 1))
            .with_section(Section::new("testenv:isort", 2));
        assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["lint", "isort"]);
    }

    #[test]
    fn combined() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox", 1).with_value(
                "envlist",
                expanded(&["py36-django20", "py36-django21", "py37-django20", "py37-django21"]),
            ))
            .with_section(Section::new("testenv:lint", 4))
            .with_section(Section::new("testenv:isort", 5));
        assert_eq!(
            get_declared_envs(&ini, &ListSplitter),
            vec![
                "py36-django20",
                "py36-django21",
                "py37-django20",
                "py37-django21",
                "lint",
                "isort"
            ]
        );
    }

    #[test]
    fn envlist_entry_with_section_is_not_duplicated() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox", 1).with_value("envlist", "py37,lint"))
            .with_section(Section::new("testenv:lint", 4))
            .with_section(Section::new("testenv:isort", 6));
        assert_eq!(
            get_declared_envs(&ini, &ListSplitter),
            vec!["py37", "lint", "isort"]
        );
    }

    #[test]
    fn sections_ordered_by_line() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("testenv:docs", 20))
            .with_section(Section::new("testenv:isort", 3))
            .with_section(Section::new("testenv:lint", 11));
        assert_eq!(
            get_declared_envs(&ini, &ListSplitter),
            vec!["isort", "lint", "docs"]
        );
    }

    #[test]
    fn non_testenv_sections_are_ignored() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox", 1))
            .with_section(Section::new("testenv", 3))
            .with_section(Section::new("flake8", 6))
            .with_section(Section::new("testenv:lint", 9));
        assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["lint"]);
    }

    #[test]
    fn missing_main_section() {
        let ini = ConfigSnapshot::new("tox.ini");
        assert!(get_declared_envs(&ini, &ListSplitter).is_empty());
    }

    #[test]
    fn setup_cfg_uses_namespaced_section() {
        let ini = ConfigSnapshot::new("setup.cfg")
            .with_section(Section::new("tox", 1).with_value("envlist", "ignored"))
            .with_section(Section::new("tox:tox", 5).with_value("envlist", "py37"))
            .with_section(Section::new("testenv:lint", 8));
        assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["py37", "lint"]);
    }

    #[test]
    fn tox_ini_ignores_namespaced_section() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox:tox", 1).with_value("envlist", "py37"));
        assert!(get_configured_envlist(&ini, &ListSplitter).is_empty());
    }

    #[test]
    fn envlist_duplicates_are_dropped() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("tox", 1).with_value("envlist", "py37,lint,py37"))
            .with_section(Section::new("testenv:lint", 4));
        assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["py37", "lint"]);
    }

    /// Host view where some sections carry no source position.
    struct UnpositionedIni {
        sections: Vec<(&'static str, Option<usize>)>,
    }

    impl IniSource for UnpositionedIni {
        fn path(&self) -> &Path {
            Path::new("tox.ini")
        }

        fn section_names(&self) -> Vec<&str> {
            self.sections.iter().map(|(name, _)| *name).collect()
        }

        fn get(&self, _section: &str, _key: &str) -> Option<&IniValue> {
            None
        }

        fn lineof(&self, section: &str) -> Option<usize> {
            self.sections
                .iter()
                .find(|(name, _)| *name == section)
                .and_then(|(_, line)| *line)
        }
    }

    #[test]
    fn sections_without_line_sort_last() {
        let ini = UnpositionedIni {
            sections: vec![
                ("testenv:docs", None),
                ("testenv:lint", Some(8)),
                ("testenv:build", None),
                ("testenv:isort", Some(3)),
            ],
        };
        assert_eq!(
            get_declared_envs(&ini, &ListSplitter),
            vec!["isort", "lint", "docs", "build"]
        );
    }

    #[test]
    fn duplicate_testenv_sections_contribute_once() {
        let ini = ConfigSnapshot::new("tox.ini")
            .with_section(Section::new("testenv:lint", 2))
            .with_section(Section::new("testenv:lint", 7));
        assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["lint"]);
    }
}
