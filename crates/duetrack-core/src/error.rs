//! Core error types for duetrack-core.
//!
//! This module defines the error hierarchy using thiserror so callers
//! can match on the failure kind (missing project, empty field, bad
//! date shape) instead of parsing strings.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for duetrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Date normalization errors
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Referenced project does not exist
    #[error("Project not found: {id}")]
    ProjectNotFound { id: i64 },

    /// Project name collides with an existing row
    #[error("Project already exists: {name}")]
    DuplicateProject { name: String },

    /// Query execution failed
    #[error("Query failed: {0}")]
    Query(String),
}

/// Validation errors raised before any store mutation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is missing or empty
    #[error("Required field '{field}' is missing or empty")]
    EmptyField { field: &'static str },
}

/// Date normalization errors.
#[derive(Error, Debug)]
pub enum DateError {
    /// Input is neither M/D/YYYY text nor a usable day-serial
    #[error("Malformed due date: {input}")]
    Malformed { input: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
