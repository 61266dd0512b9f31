//! Post-pass hook trait.

use async_trait::async_trait;
use thiserror::Error;
use vs_core::{PassReport, Scenario};

/// Failure reported by the post-check hook.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Side effect fired once after a full `init` or `test` pass, e.g. a rebuild
/// of a derived authorization index left dirty by the processed modules.
///
/// The engine relies on the hook being idempotent and safe to call once per
/// pass; the hook may itself mutate derived state.
#[async_trait]
pub trait PostCheckHook: Send + Sync {
    async fn after_pass(&self, scenario: &Scenario, report: &PassReport) -> Result<(), HookError>;
}
