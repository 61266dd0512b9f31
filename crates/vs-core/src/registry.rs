//! Module registry trait and the static host-built implementation.

use crate::error::{CoreError, CoreResult};
use crate::module::{HandlerKind, ModuleInfo};
use crate::module_name::ModuleName;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of installed modules.
///
/// The host application owns module discovery; the engine only needs the
/// module set and handler-capability lookups. Capabilities are resolved
/// when the registry is built, so `has_handler` never performs I/O.
pub trait ModuleRegistry: Send + Sync {
    /// All installed modules. Iteration order carries no semantic meaning;
    /// modules are independent of each other.
    fn modules(&self) -> &[Arc<ModuleInfo>];

    /// Look up a module by relative name.
    fn get(&self, name: &str) -> Option<&Arc<ModuleInfo>>;

    /// Whether `module` exposes a handler of `kind` at its routing path.
    fn has_handler(&self, name: &str, kind: HandlerKind) -> bool {
        self.get(name).is_some_and(|m| m.has_handler(kind))
    }
}

/// Fixed module set built once at host startup.
#[derive(Debug)]
pub struct StaticRegistry {
    modules: Vec<Arc<ModuleInfo>>,
    by_name: HashMap<ModuleName, usize>,
}

impl StaticRegistry {
    /// Build a registry from module metadata.
    ///
    /// Fails on duplicate relative names or file versions below `-1`.
    pub fn new(modules: Vec<ModuleInfo>) -> CoreResult<Self> {
        let mut by_name = HashMap::with_capacity(modules.len());
        let modules: Vec<Arc<ModuleInfo>> = modules.into_iter().map(Arc::new).collect();

        for (idx, module) in modules.iter().enumerate() {
            if module.file_version < -1 {
                return Err(CoreError::InvalidFileVersion {
                    name: module.name.to_string(),
                    version: module.file_version,
                });
            }
            if by_name.insert(module.name.clone(), idx).is_some() {
                return Err(CoreError::DuplicateModule {
                    name: module.name.to_string(),
                });
            }
        }

        log::debug!("module registry built with {} modules", modules.len());
        Ok(Self { modules, by_name })
    }
}

impl ModuleRegistry for StaticRegistry {
    fn modules(&self) -> &[Arc<ModuleInfo>] {
        &self.modules
    }

    fn get(&self, name: &str) -> Option<&Arc<ModuleInfo>> {
        self.by_name.get(name).map(|&idx| &self.modules[idx])
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
