//! Ledger trait definition

use crate::error::LedgerResult;
use async_trait::async_trait;
use vs_core::ModuleName;

/// One applied step as recorded in a ledger table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedVersion {
    /// The version the step brought the module to.
    pub version: i32,
    /// Server-assigned timestamp of the append, rendered as text.
    pub applied_at: String,
}

/// A module together with its current (maximum applied) version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleVersion {
    pub module: ModuleName,
    pub version: i32,
}

/// Durable, append-only history of applied migration steps.
///
/// Two tracks exist: the global track (one history per module) and the init
/// track (one history per `(subdomain, module)` pair). There are no update
/// or delete operations; storage failures propagate unmodified — retry
/// policy belongs to the caller.
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Idempotently create the schema and the global-track table.
    ///
    /// Called once at the start of an update pass. The init-track table is
    /// not created here; it arrives through the engine's own versioned
    /// bootstrap step (see [`ensure_init_schema`](Self::ensure_init_schema)).
    async fn ensure_schema(&self) -> LedgerResult<()>;

    /// Idempotently create the init-track table.
    async fn ensure_init_schema(&self) -> LedgerResult<()>;

    /// Highest applied version for `module` on the global track, 0 if none.
    async fn current_version(&self, module: &str) -> LedgerResult<i32>;

    /// Highest applied version for `module` under `subdomain`, 0 if none.
    async fn current_init_version(&self, subdomain: &str, module: &str) -> LedgerResult<i32>;

    /// Append one global-track row. `version` must be positive; the `-1`
    /// always-run sentinel is never persisted.
    async fn record(&self, module: &str, version: i32) -> LedgerResult<()>;

    /// Append one init-track row, scoped to `subdomain`.
    async fn record_init(&self, subdomain: &str, module: &str, version: i32) -> LedgerResult<()>;

    /// Current version of every module seen on the global track.
    async fn latest_versions(&self) -> LedgerResult<Vec<ModuleVersion>>;

    /// Current version of every module seen under `subdomain`.
    async fn latest_init_versions(&self, subdomain: &str) -> LedgerResult<Vec<ModuleVersion>>;

    /// All global-track rows for `module`, in application order.
    async fn history(&self, module: &str) -> LedgerResult<Vec<AppliedVersion>>;

    /// All init-track rows for `module` under `subdomain`, in application order.
    async fn init_history(&self, subdomain: &str, module: &str)
        -> LedgerResult<Vec<AppliedVersion>>;
}
