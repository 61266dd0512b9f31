//! vs-engine - Migration engine for Verstep
//!
//! The engine reconciles each registered module's persisted version against
//! the version declared by its packaged code: it computes the missing step
//! range, drives the step invoker through it strictly in order, and records
//! every applied step in the ledger before moving on. Re-running a pass
//! after a mid-sequence failure resumes exactly after the last recorded
//! step; that resumability replaces any in-engine retry logic.

pub mod engine;
pub mod error;
pub mod hook;
pub mod invoker;

pub use engine::MigrationEngine;
pub use error::{EngineError, EngineResult};
pub use hook::PostCheckHook;
pub use invoker::{InvokeError, StepInvoker, StepRequest};
