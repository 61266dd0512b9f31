//! Pass orchestration and per-module version reconciliation.

use crate::error::{EngineError, EngineResult};
use crate::hook::PostCheckHook;
use crate::invoker::{InvokeError, StepInvoker, StepRequest};
use std::sync::Arc;
use std::time::Duration;
use vs_core::{HandlerKind, ModuleInfo, ModuleRegistry, PassReport, Scenario, VersionDelta};
use vs_ledger::Ledger;

/// Reserved relative name of the engine's own bookkeeping module.
///
/// Registry modules must not use this name; if one does, it is skipped
/// with a warning.
pub const ENGINE_MODULE: &str = "version";

/// Declared file version of the bookkeeping module. Step 2 creates the
/// init-track table.
const ENGINE_FILE_VERSION: i32 = 2;

/// The migration engine: reconciles every registered module's persisted
/// version against its declared file version, exactly once per version
/// step, in strict ascending order.
///
/// One engine serializes its own passes behind an internal lock; safety
/// under multiple coordinator processes sharing a ledger is out of scope.
pub struct MigrationEngine {
    ledger: Arc<dyn Ledger>,
    registry: Arc<dyn ModuleRegistry>,
    invoker: Arc<dyn StepInvoker>,
    hook: Option<Arc<dyn PostCheckHook>>,
    step_deadline: Option<Duration>,
    pass_guard: tokio::sync::Mutex<()>,
    self_module: ModuleInfo,
}

impl MigrationEngine {
    pub fn new(
        ledger: Arc<dyn Ledger>,
        registry: Arc<dyn ModuleRegistry>,
        invoker: Arc<dyn StepInvoker>,
    ) -> Self {
        Self {
            ledger,
            registry,
            invoker,
            hook: None,
            step_deadline: None,
            pass_guard: tokio::sync::Mutex::new(()),
            self_module: ModuleInfo::new(ENGINE_MODULE, ENGINE_MODULE, ENGINE_FILE_VERSION),
        }
    }

    /// Fire `hook` once after every `init` and `test` pass.
    pub fn with_hook(mut self, hook: Arc<dyn PostCheckHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Treat a step invocation that produces no response within `deadline`
    /// as a step failure.
    pub fn with_step_deadline(mut self, deadline: Duration) -> Self {
        self.step_deadline = Some(deadline);
        self
    }

    /// Run one full pass for `scenario` and return the per-module report.
    ///
    /// Update passes bootstrap the ledger schema first. The engine's own
    /// bookkeeping module is reconciled before any registry module, since
    /// its step sequence is what creates the init-track table. The first
    /// fatal error aborts the pass; steps recorded before the failure stay
    /// recorded, so a re-run resumes where this one stopped.
    pub async fn run_pass(&self, scenario: &Scenario) -> EngineResult<PassReport> {
        let _guard = self.pass_guard.lock().await;
        log::info!("starting {scenario} pass");

        if scenario.is_update() {
            // Bootstrapping special case: the self-migration's version
            // lookup needs the global table to already exist.
            self.ledger.ensure_schema().await?;
        }

        let mut report = PassReport::new();

        let delta = self.check_module(&self.self_module, scenario).await?;
        report.insert(self.self_module.name.clone(), delta);

        for module in self.registry.modules() {
            if module.name == ENGINE_MODULE {
                log::warn!("skipping registry module with reserved name '{ENGINE_MODULE}'");
                continue;
            }
            let delta = self.check_module(module, scenario).await?;
            report.insert(module.name.clone(), delta);
        }

        if !scenario.is_update() {
            if let Some(hook) = &self.hook {
                log::debug!("firing post-check hook");
                hook.after_pass(scenario, &report)
                    .await
                    .map_err(|e| EngineError::HookFailed(e.to_string()))?;
            }
        }

        log::info!("{scenario} pass complete: {} modules", report.len());
        Ok(report)
    }

    /// Reconcile one module and return the version delta it observed.
    async fn check_module(
        &self,
        module: &ModuleInfo,
        scenario: &Scenario,
    ) -> EngineResult<VersionDelta> {
        let declared = module.file_version;
        let mut delta = VersionDelta::unchanged(declared);

        if module.declares_migration() && scenario.migrates() {
            if module.is_always() {
                // Always-run sentinel: one step per pass, never persisted.
                self.apply_step(module, -1, scenario).await?;
                delta = VersionDelta::new(-1, -1);
            } else {
                delta = self.migrate_range(module, declared, scenario).await?;
            }
        }

        if matches!(scenario, Scenario::Test { .. }) && module.has_handler(HandlerKind::Test) {
            // Independent of migration; never touches the ledger.
            self.invoke(module, HandlerKind::Test, declared, scenario)
                .await?;
        }

        Ok(delta)
    }

    /// Run every missing step in `(current, declared]`, recording each one
    /// after it succeeds.
    async fn migrate_range(
        &self,
        module: &ModuleInfo,
        declared: i32,
        scenario: &Scenario,
    ) -> EngineResult<VersionDelta> {
        let current = match scenario.subdomain() {
            None => self.ledger.current_version(&module.name).await?,
            Some(subdomain) => {
                self.ledger
                    .current_init_version(subdomain, &module.name)
                    .await?
            }
        };

        if current > declared {
            return Err(EngineError::Downgrade {
                module: module.name.to_string(),
                current,
                declared,
            });
        }

        if current < declared {
            log::info!(
                "migrating {} v{current} -> v{declared} ({scenario})",
                module.name
            );
        }

        // Strictly ascending, one at a time; each step may depend on the
        // cumulative effect of the previous one.
        for version in current + 1..=declared {
            self.apply_step(module, version, scenario).await?;
            match scenario.subdomain() {
                None => self.ledger.record(&module.name, version).await?,
                Some(subdomain) => {
                    self.ledger
                        .record_init(subdomain, &module.name, version)
                        .await?
                }
            }
        }

        Ok(VersionDelta::new(current, declared))
    }

    /// Execute one migration/init step for `module`.
    async fn apply_step(
        &self,
        module: &ModuleInfo,
        version: i32,
        scenario: &Scenario,
    ) -> EngineResult<()> {
        if scenario.is_update() && module.name == self.self_module.name {
            return self.apply_self_step(version).await;
        }

        let kind = if scenario.is_update() {
            HandlerKind::Update
        } else {
            HandlerKind::Init
        };

        if kind == HandlerKind::Init && !module.has_handler(HandlerKind::Init) {
            // Vacuously successful: the version is still recorded, but no
            // remote work occurs.
            log::debug!("{} has no init handler, skipping v{version} call", module.name);
            return Ok(());
        }

        self.invoke(module, kind, version, scenario).await
    }

    /// The engine's own fixed step sequence, dispatched internally rather
    /// than through the invoker.
    async fn apply_self_step(&self, version: i32) -> EngineResult<()> {
        match version {
            // v1: the global table was already ensured before the pass.
            1 => Ok(()),
            2 => Ok(self.ledger.ensure_init_schema().await?),
            other => Err(EngineError::StepFailed {
                module: ENGINE_MODULE.to_string(),
                version: other,
                message: "unknown bookkeeping step".to_string(),
            }),
        }
    }

    async fn invoke(
        &self,
        module: &ModuleInfo,
        kind: HandlerKind,
        version: i32,
        scenario: &Scenario,
    ) -> EngineResult<()> {
        let request = StepRequest {
            module,
            kind,
            version,
            scenario,
        };

        let result = match self.step_deadline {
            Some(deadline) => {
                match tokio::time::timeout(deadline, self.invoker.invoke(request)).await {
                    Ok(result) => result,
                    Err(_) => Err(InvokeError::new(format!(
                        "no response within {}ms",
                        deadline.as_millis()
                    ))),
                }
            }
            None => self.invoker.invoke(request).await,
        };

        result.map_err(|e| EngineError::StepFailed {
            module: module.name.to_string(),
            version,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
