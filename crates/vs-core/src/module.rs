//! Module metadata as declared by a module's packaged code.

use crate::module_name::ModuleName;
use crate::{FILE_VERSION_ALWAYS, FILE_VERSION_NONE};
use serde::{Deserialize, Serialize};

/// The kinds of version handlers a module can expose at its routing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    /// Global-track migration step handler. Every module with a declared
    /// file version is assumed to expose one; its existence is never probed.
    Update,
    /// Per-subdomain initialization step handler (optional).
    Init,
    /// Self-test handler (optional).
    Test,
}

/// Metadata for one installed module, read-only to the engine.
///
/// `file_version` is the version declared by the module's packaged code:
/// `>= 1` is a migration target, `-1` means "always re-run", and `0` means
/// no migration is declared. Handler capabilities are resolved once when the
/// registry is built, not probed per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Unique relative name; the ledger key.
    pub name: ModuleName,

    /// Routing path used to reach the module's version handlers.
    pub url: String,

    /// Declared target file version (`0` = none, `-1` = always re-run).
    #[serde(default)]
    pub file_version: i32,

    /// Whether an init handler exists at `{url}/version/init`.
    #[serde(default)]
    pub has_init: bool,

    /// Whether a test handler exists at `{url}/version/test`.
    #[serde(default)]
    pub has_test: bool,
}

impl ModuleInfo {
    /// Create metadata for a module with no optional handlers.
    pub fn new(name: impl Into<ModuleName>, url: impl Into<String>, file_version: i32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            file_version,
            has_init: false,
            has_test: false,
        }
    }

    /// Mark the module as exposing an init handler.
    pub fn with_init(mut self) -> Self {
        self.has_init = true;
        self
    }

    /// Mark the module as exposing a test handler.
    pub fn with_test(mut self) -> Self {
        self.has_test = true;
        self
    }

    /// True when the module declares any migration at all.
    pub fn declares_migration(&self) -> bool {
        self.file_version != FILE_VERSION_NONE
    }

    /// True when the module declares the always-run sentinel.
    pub fn is_always(&self) -> bool {
        self.file_version == FILE_VERSION_ALWAYS
    }

    /// Whether a handler of `kind` exists at the module's routing path.
    pub fn has_handler(&self, kind: HandlerKind) -> bool {
        match kind {
            HandlerKind::Update => true,
            HandlerKind::Init => self.has_init,
            HandlerKind::Test => self.has_test,
        }
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;
