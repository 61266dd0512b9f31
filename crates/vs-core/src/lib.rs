//! vs-core - Core library for Verstep
//!
//! This crate provides the shared types used across all Verstep components:
//! strongly-typed module names, module metadata, the module registry trait,
//! pass scenarios, and the per-pass report accumulator.

pub mod error;
pub mod module;
pub mod module_name;
pub mod registry;
pub mod report;
pub mod scenario;

pub use error::{CoreError, CoreResult};
pub use module::{HandlerKind, ModuleInfo};
pub use module_name::ModuleName;
pub use registry::{ModuleRegistry, StaticRegistry};
pub use report::{PassReport, VersionDelta};
pub use scenario::Scenario;

/// Declared file version meaning "no migration declared".
pub const FILE_VERSION_NONE: i32 = 0;

/// Declared file version sentinel meaning "always re-run, never persist".
pub const FILE_VERSION_ALWAYS: i32 = -1;
