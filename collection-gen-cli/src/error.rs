//! Error types for the CLI.
//!
//! This module defines all error types used by the `gen-collection` driver.
//! Generation failures come from [`collection_gen::GenerateError`]; file
//! and configuration failures are owned here.

use std::path::PathBuf;
use thiserror::Error;

use collection_gen::GenerateError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from the generator engine.
    #[error("Failed to generate: {0}")]
    Generate(#[from] GenerateError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Generated output on disk does not match a fresh generation.
    #[error("Check failed: {0}")]
    Stale(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// A required value was given neither in the file nor on the command line.
    #[error("Missing required value '{key}' (pass --{key} or set target.{key})")]
    MissingValue { key: String },

    /// Config file already exists and overwrite was not requested.
    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an existing output file.
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }

    /// Create a missing value error.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingValue { key: key.into() }
    }
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// A stale check exits with 2 so scripts can tell it apart from a failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Stale(_) => 2,
            _ => 1,
        }
    }
}
