//! Error types for vs-engine

use thiserror::Error;
use vs_ledger::LedgerError;

/// Migration engine errors.
///
/// Every variant is fatal to the running pass; the engine recovers nothing
/// locally. Re-running after a mid-sequence failure is safe and resumes
/// from the last durably recorded version.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Downgrade detected (V001): the recorded version exceeds the declared
    /// target. Never supported; no steps run for the offending module.
    #[error("[V001] Version downgrade for module '{module}': ledger has v{current}, code declares v{declared}")]
    Downgrade {
        module: String,
        current: i32,
        declared: i32,
    },

    /// Step invocation failed (V002), including a missed per-step deadline.
    #[error("[V002] Step v{version} failed for module '{module}': {message}")]
    StepFailed {
        module: String,
        version: i32,
        message: String,
    },

    /// Ledger access failed (V003); propagated unmodified.
    #[error("[V003] {0}")]
    Ledger(#[from] LedgerError),

    /// Post-pass hook failed (V004).
    #[error("[V004] Post-check hook failed: {0}")]
    HookFailed(String),
}

/// Result type alias for EngineError
pub type EngineResult<T> = Result<T, EngineError>;
