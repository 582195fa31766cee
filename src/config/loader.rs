//! Config snapshot loading.
//!
//! The host serializes its parsed configuration to JSON or YAML. This
//! module reads such a snapshot from a file or from standard input.

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::snapshot::ConfigSnapshot;
use crate::error::{Result, ToxFactorError};

/// Path value meaning "read the snapshot from standard input".
pub const STDIN_PATH: &str = "-";

/// Serialization format of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from the file extension.
    ///
    /// Files without an extension are read as YAML, which also accepts
    /// JSON documents.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yml") | Some("yaml") | None => Ok(Self::Yaml),
            Some(other) => Err(ToxFactorError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }),
        }
    }
}

/// Load a snapshot from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `UnsupportedFormat` for unknown file extensions.
/// Returns `ConfigParseError` if the content is invalid.
/// Returns `SnapshotRequired` when reading stdin attached to a terminal.
pub fn load_snapshot(path: &Path) -> Result<ConfigSnapshot> {
    if path == Path::new(STDIN_PATH) {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        return read_snapshot(stdin.lock(), interactive);
    }

    let format = SnapshotFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ToxFactorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ToxFactorError::Io(e)
        }
    })?;

    parse_snapshot(&content, format, path)
}

/// Read a snapshot piped in through `reader`.
///
/// An interactive reader would block waiting for input nobody is going
/// to type, so it is refused up front.
pub fn read_snapshot<R: Read>(mut reader: R, interactive: bool) -> Result<ConfigSnapshot> {
    if interactive {
        return Err(ToxFactorError::SnapshotRequired);
    }

    info!("Reading config snapshot from stdin");
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_snapshot(&content, SnapshotFormat::Yaml, Path::new(STDIN_PATH))
}

/// Parse snapshot content in the given format.
///
/// # Arguments
///
/// * `content` - The serialized snapshot
/// * `format` - How `content` is encoded
/// * `source_path` - Path for error reporting
pub fn parse_snapshot(
    content: &str,
    format: SnapshotFormat,
    source_path: &Path,
) -> Result<ConfigSnapshot> {
    let parsed: std::result::Result<ConfigSnapshot, String> = match format {
        SnapshotFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SnapshotFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };

    let snapshot = parsed.map_err(|message| ToxFactorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })?;

    debug!(
        "Loaded {} sections of {} from {}",
        snapshot.sections.len(),
        snapshot.path.display(),
        source_path.display()
    );
    Ok(snapshot)
}

/// Resolve the snapshot path from an optional override.
pub fn snapshot_path(config_override: Option<&Path>) -> PathBuf {
    config_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(STDIN_PATH))
}
