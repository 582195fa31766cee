//! Error types for toxfactor operations.
//!
//! This module defines [`ToxFactorError`], the error type used by the
//! config loader and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Factor matching and envlist resolution are infallible
//! - Use `ToxFactorError` for failures reading a config snapshot
//! - Use `anyhow::Error` (via `ToxFactorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toxfactor operations.
#[derive(Debug, Error)]
pub enum ToxFactorError {
    /// Config snapshot not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the config snapshot.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Snapshot written in a format we cannot read.
    #[error("Unsupported config format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Snapshot expected on stdin, but stdin is a terminal.
    #[error("No config snapshot on stdin; pass --config <file> or pipe one in")]
    SnapshotRequired,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toxfactor operations.
pub type Result<T> = std::result::Result<T, ToxFactorError>;
