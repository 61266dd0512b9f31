//! Error types for vs-ledger

use thiserror::Error;

/// Ledger storage errors
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Connection error (L001)
    #[error("[L001] Ledger connection failed: {0}")]
    ConnectionError(String),

    /// Query or insert execution error (L002)
    #[error("[L002] Ledger access failed: {0}")]
    ExecutionError(String),

    /// Mutex poisoned (L003)
    #[error("[L003] Ledger mutex poisoned: {0}")]
    MutexPoisoned(String),

    /// Invalid version passed to a record operation (L004)
    #[error("[L004] Refusing to record non-positive version {version} for module '{module}'")]
    InvalidVersion { module: String, version: i32 },
}

/// Result type alias for LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<duckdb::Error> for LedgerError {
    fn from(err: duckdb::Error) -> Self {
        LedgerError::ExecutionError(err.to_string())
    }
}
