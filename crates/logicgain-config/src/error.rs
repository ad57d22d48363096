//! Error types for presets and saved state.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from preset files and parameter lookups.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A key that names no parameter at all
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    /// A known parameter with an unusable value or the wrong layout
    #[error("invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// Persistence key of the parameter.
        param: String,
        /// Description of why the parameter is invalid.
        reason: String,
    },

    /// Layout name other than `mono` or `stereo`
    #[error("invalid layout '{0}' (expected 'mono' or 'stereo')")]
    InvalidLayout(String),

    /// No factory preset with this name
    #[error("preset not found: {0}")]
    PresetNotFound(String),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(param: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            param: param.into(),
            reason: reason.into(),
        }
    }
}

/// Reasons a saved state blob is rejected.
#[derive(Debug, Error)]
pub enum StateError {
    /// Not a JSON document of the expected shape
    #[error("malformed state: {0}")]
    Json(#[from] serde_json::Error),

    /// Root tag missing or different
    #[error("state tag '{found}' does not match '{expected}'")]
    TagMismatch {
        /// Tag this build writes.
        expected: &'static str,
        /// Tag found in the blob (empty when absent).
        found: String,
    },

    /// Written by a newer format version
    #[error("state version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the blob.
        found: u32,
        /// Highest version this build reads.
        supported: u32,
    },

    /// Saved for the other channel layout
    #[error("state was saved for a {found} unit, this unit is {expected}")]
    LayoutMismatch {
        /// Layout of the unit being restored.
        expected: String,
        /// Layout recorded in the blob.
        found: String,
    },

    /// Layout field is not `mono` or `stereo`
    #[error("invalid layout '{0}' in state")]
    InvalidLayout(String),

    /// A parameter value that is neither a number nor a boolean
    #[error("invalid value for parameter '{0}'")]
    InvalidValue(String),
}
