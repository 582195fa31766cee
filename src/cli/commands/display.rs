//! Shared display helpers for environment lists.
//!
//! Plain output is one environment per line, the same shape `tox -l`
//! prints, so it can be fed straight back into shell pipelines.

use std::io::Write;

use crate::error::Result;

/// Write environment names, one per line or as a JSON array.
pub fn write_envs<S>(out: &mut dyn Write, envs: &[S], json: bool) -> Result<()>
where
    S: AsRef<str> + serde::Serialize,
{
    if json {
        let rendered = serde_json::to_string_pretty(envs).map_err(anyhow::Error::from)?;
        writeln!(out, "{}", rendered)?;
    } else {
        for env in envs {
            writeln!(out, "{}", env.as_ref())?;
        }
    }
    Ok(())
}
