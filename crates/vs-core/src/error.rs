//! Error types for vs-core

use thiserror::Error;

/// Core error type for Verstep
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Duplicate module name in a registry
    #[error("[C001] Duplicate module name: {name}")]
    DuplicateModule { name: String },

    /// C002: Invalid declared file version
    #[error("[C002] Invalid file version {version} for module '{name}': must be -1, 0, or >= 1")]
    InvalidFileVersion { name: String, version: i32 },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
