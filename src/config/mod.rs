//! Tox configuration access for toxfactor.
//!
//! tox owns ini parsing and envlist brace expansion. This module holds
//! the view of that parsed config the selection logic works from:
//! - [`snapshot`] - the [`IniSource`] trait and its serializable [`ConfigSnapshot`]
//! - [`split`] - the [`EnvSplitter`] seam for the host's envlist splitting
//! - [`loader`] - reading snapshots from JSON or YAML
//! - [`declared`] - the ordered list of declared environments
//!
//! # Example
//!
//! ```
//! use toxfactor::config::{get_declared_envs, ConfigSnapshot, ListSplitter, Section};
//!
//! let ini = ConfigSnapshot::new("tox.ini")
//!     .with_section(Section::new("tox", 1).with_value("envlist", "py37,lint"))
//!     .with_section(Section::new("testenv:lint", 4))
//!     .with_section(Section::new("testenv:isort", 6));
//!
//! assert_eq!(get_declared_envs(&ini, &ListSplitter), vec!["py37", "lint", "isort"]);
//! ```

pub mod declared;
pub mod loader;
pub mod snapshot;
pub mod split;

pub use declared::{
    get_configured_envlist, get_declared_envs, main_section_name, ENVLIST_KEY,
    SETUP_CFG_TOX_SECTION, TESTENV_PREFIX, TOX_SECTION,
};
pub use loader::{
    load_snapshot, parse_snapshot, read_snapshot, snapshot_path, SnapshotFormat, STDIN_PATH,
};
pub use snapshot::{ConfigSnapshot, IniSource, IniValue, Section};
pub use split::{EnvSplitter, ListSplitter};
