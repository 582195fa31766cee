//! Factor matching for environment names.
//!
//! An environment name such as `py37-django21` is made of dash-delimited
//! factors. This module decides which environments a set of factor
//! expressions selects:
//!
//! - [`matcher`] - does one name satisfy one factor expression
//! - [`selector`] - filter a list of names by any of several expressions
//! - [`normalize`] - turn raw `-f`/`TOXFACTOR` input into expressions
//!
//! # Example
//!
//! ```
//! use toxfactor::factor::{env_matches, match_envs};
//!
//! assert!(env_matches("py37-django21", "py37"));
//! assert!(!env_matches("py37", "py3"));
//!
//! let envs = ["py36-redis", "py37-redis", "py37-memcached"];
//! assert_eq!(match_envs(&envs, &["py37-redis"]), vec!["py37-redis"]);
//! ```

pub mod matcher;
pub mod normalize;
pub mod selector;

pub use matcher::{env_factors, env_matches};
pub use normalize::{normalize_factors, parse_factor_var};
pub use selector::match_envs;
