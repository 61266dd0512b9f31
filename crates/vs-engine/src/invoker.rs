//! Step invoker trait: the seam to each module's version handlers.

use async_trait::async_trait;
use thiserror::Error;
use vs_core::{HandlerKind, ModuleInfo, Scenario};

/// Failure reported by a step invocation.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct InvokeError(pub String);

impl InvokeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One step invocation: which module, which handler kind, which version,
/// and the scenario context the handler receives as its payload.
#[derive(Debug, Clone, Copy)]
pub struct StepRequest<'a> {
    /// Target module; `module.url` is the routing path to its handlers.
    pub module: &'a ModuleInfo,
    /// Which handler to reach (`update`, `init`, or `test`).
    pub kind: HandlerKind,
    /// The version this step brings the module to (`-1` for always-run
    /// steps; for `test` the module's declared target version).
    pub version: i32,
    /// The scenario driving the pass, forwarded as the step payload.
    pub scenario: &'a Scenario,
}

/// Performs the actual call that executes one migration, init, or test step.
///
/// The engine never inspects what a step does internally; it only needs
/// success or failure. Calls are awaited to completion before the next step
/// begins — steps within one module's range may depend on the cumulative
/// effect of earlier ones.
///
/// The engine checks handler existence (via module capabilities) before
/// invoking `init`/`test` steps, so implementations may assume the target
/// handler exists.
#[async_trait]
pub trait StepInvoker: Send + Sync {
    async fn invoke(&self, request: StepRequest<'_>) -> Result<(), InvokeError>;
}
