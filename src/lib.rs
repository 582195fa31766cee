//! toxfactor - Select tox environments by factor.
//!
//! tox environment names are made of dash-delimited factors, such as
//! `py37-django21`. toxfactor narrows the environments tox runs to those
//! matching one or more requested factors, so `-f py37` selects every
//! Python 3.7 environment without listing them by hand.
//!
//! # Modules
//!
//! - [`factor`] - Factor matching and factor input normalization
//! - [`config`] - The parsed tox config view and declared environments
//! - [`selection`] - The per-invocation selection decision
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use toxfactor::config::{ConfigSnapshot, ListSplitter, Section};
//! use toxfactor::selection::get_envlist;
//!
//! let ini = ConfigSnapshot::new("tox.ini")
//!     .with_section(Section::new("tox", 1).with_value("envlist", "py36-redis,py37-redis,py37-memcached"))
//!     .with_section(Section::new("testenv:lint", 4));
//!
//! assert_eq!(
//!     get_envlist(&ini, &ListSplitter, &["py37", "lint"]),
//!     vec!["py37-redis", "py37-memcached", "lint"],
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod factor;
pub mod selection;

pub use error::{Result, ToxFactorError};
