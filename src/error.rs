//! Domain-specific error types for the colorscheme setter.
//!
//! Internal modules return typed errors where callers branch on the failure
//! (registry lookups, path and marker validation); orchestration code
//! converts them to [`anyhow::Error`] via the standard `?` operator and adds
//! scheme/template/application context along the way.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from registry cache loading and lookup.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The local cache file has never been written.
    #[error("registry cache not found: {0} (run with --update-list to fetch it)")]
    CacheMissing(PathBuf),

    /// No entry with the requested name exists in the loaded list.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Errors from destination resolution and write dispatch.
#[derive(Error, Debug)]
pub enum TargetError {
    /// The current user's home directory could not be determined.
    #[error("could not determine home directory")]
    HomeDirUnavailable,

    /// A destination directory could not be created.
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Replace mode was configured without both marker lines.
    #[error("replace mode for file key '{file_key}' requires start_marker and end_marker")]
    MissingMarkers { file_key: String },

    /// A marker line was not found in the target file.
    #[error("marker line {marker:?} not found in {path}")]
    MarkerNotFound { path: PathBuf, marker: String },

    /// A template file extension the context builder cannot handle.
    #[error("unsupported template extension {0:?}")]
    UnsupportedExtension(String),
}
