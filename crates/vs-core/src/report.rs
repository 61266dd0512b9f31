//! Per-pass outcome accumulator.
//!
//! Each module's reconciliation produces a [`VersionDelta`]; the orchestrator
//! merges them into a [`PassReport`] after the module completes. The report
//! is the pass's return value and is never shared mutably across modules.

use crate::module_name::ModuleName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The version movement observed for one module during a pass.
///
/// `old == new` means no steps ran; `{-1, -1}` marks the always-run sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDelta {
    /// Version recorded before the pass (0 when the module was unseen).
    pub file_version_old: i32,
    /// Declared target version after the pass.
    pub file_version_new: i32,
}

impl VersionDelta {
    /// Delta for a module that moved from `old` to `new`.
    pub fn new(file_version_old: i32, file_version_new: i32) -> Self {
        Self {
            file_version_old,
            file_version_new,
        }
    }

    /// Delta for a module whose migration branch did not run.
    pub fn unchanged(version: i32) -> Self {
        Self::new(version, version)
    }

    /// True when at least one migration step was executed.
    pub fn moved(&self) -> bool {
        self.file_version_old != self.file_version_new || self.file_version_new == -1
    }
}

/// Ordered map of per-module outcomes for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    /// Outcome per module, keyed by relative name.
    pub deltas: BTreeMap<ModuleName, VersionDelta>,
}

impl PassReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one module's outcome into the report.
    pub fn insert(&mut self, module: ModuleName, delta: VersionDelta) {
        self.deltas.insert(module, delta);
    }

    /// Outcome for `module`, if it was processed.
    pub fn get(&self, module: &str) -> Option<&VersionDelta> {
        self.deltas.get(module)
    }

    /// Number of modules processed.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// True when no module was processed.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
