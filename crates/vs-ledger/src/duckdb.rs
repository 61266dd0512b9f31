//! DuckDB ledger backend implementation

use crate::error::{LedgerError, LedgerResult};
use crate::traits::{AppliedVersion, Ledger, ModuleVersion};
use async_trait::async_trait;
use duckdb::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use vs_core::ModuleName;

/// Global-track DDL. The id sequence stands in for an auto-increment column.
const GLOBAL_DDL: &str = "
    CREATE SCHEMA IF NOT EXISTS vs_ledger;
    CREATE SEQUENCE IF NOT EXISTS vs_ledger.module_version_id START 1;
    CREATE TABLE IF NOT EXISTS vs_ledger.module_version (
        id         BIGINT PRIMARY KEY DEFAULT nextval('vs_ledger.module_version_id'),
        module     VARCHAR NOT NULL,
        version    INTEGER NOT NULL,
        applied_at TIMESTAMP NOT NULL DEFAULT now()
    );";

/// Init-track DDL; created by the engine's own bootstrap step, not by
/// [`Ledger::ensure_schema`].
const INIT_DDL: &str = "
    CREATE SEQUENCE IF NOT EXISTS vs_ledger.module_version_init_id START 1;
    CREATE TABLE IF NOT EXISTS vs_ledger.module_version_init (
        id         BIGINT PRIMARY KEY DEFAULT nextval('vs_ledger.module_version_init_id'),
        subdomain  VARCHAR NOT NULL,
        module     VARCHAR NOT NULL,
        version    INTEGER NOT NULL,
        applied_at TIMESTAMP NOT NULL DEFAULT now()
    );";

/// DuckDB-backed version ledger
pub struct DuckDbLedger {
    conn: Mutex<Connection>,
}

impl DuckDbLedger {
    /// Create a new in-memory ledger (no tables yet; run an update pass or
    /// call the ensure operations first).
    pub fn in_memory() -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LedgerError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a ledger database file, creating it if absent.
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| LedgerError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from a path string (handles the `:memory:` special case).
    pub fn new(path: &str) -> LedgerResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn conn(&self) -> LedgerResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| LedgerError::MutexPoisoned(e.to_string()))
    }

    fn max_version_sync(&self, sql: &str, args: &[&str]) -> LedgerResult<i32> {
        let conn = self.conn()?;
        let version: i32 = conn.query_row(sql, duckdb::params_from_iter(args), |row| row.get(0))?;
        Ok(version)
    }

    fn latest_versions_sync(&self, sql: &str, args: &[&str]) -> LedgerResult<Vec<ModuleVersion>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(duckdb::params_from_iter(args), |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i32>(1)?))
        })?;

        let mut versions = Vec::new();
        for row in rows {
            let (module, version) = row?;
            versions.push(ModuleVersion {
                module: ModuleName::new(module),
                version,
            });
        }
        Ok(versions)
    }

    fn history_sync(&self, sql: &str, args: &[&str]) -> LedgerResult<Vec<AppliedVersion>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(duckdb::params_from_iter(args), |row| {
            Ok(AppliedVersion {
                version: row.get(0)?,
                applied_at: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Reject the non-positive versions that must never reach storage
    /// (notably the `-1` always-run sentinel).
    fn check_recordable(module: &str, version: i32) -> LedgerResult<()> {
        if version <= 0 {
            return Err(LedgerError::InvalidVersion {
                module: module.to_string(),
                version,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Ledger for DuckDbLedger {
    async fn ensure_schema(&self) -> LedgerResult<()> {
        log::debug!("ensuring global ledger schema");
        self.conn()?.execute_batch(GLOBAL_DDL)?;
        Ok(())
    }

    async fn ensure_init_schema(&self) -> LedgerResult<()> {
        log::debug!("ensuring init ledger schema");
        self.conn()?.execute_batch(INIT_DDL)?;
        Ok(())
    }

    async fn current_version(&self, module: &str) -> LedgerResult<i32> {
        self.max_version_sync(
            "SELECT COALESCE(MAX(version), 0) FROM vs_ledger.module_version WHERE module = ?",
            &[module],
        )
    }

    async fn current_init_version(&self, subdomain: &str, module: &str) -> LedgerResult<i32> {
        self.max_version_sync(
            "SELECT COALESCE(MAX(version), 0) FROM vs_ledger.module_version_init \
             WHERE subdomain = ? AND module = ?",
            &[subdomain, module],
        )
    }

    async fn record(&self, module: &str, version: i32) -> LedgerResult<()> {
        Self::check_recordable(module, version)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO vs_ledger.module_version (module, version) VALUES (?, ?)",
            params![module, version],
        )?;
        log::debug!("recorded {module} v{version}");
        Ok(())
    }

    async fn record_init(&self, subdomain: &str, module: &str, version: i32) -> LedgerResult<()> {
        Self::check_recordable(module, version)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO vs_ledger.module_version_init (subdomain, module, version) \
             VALUES (?, ?, ?)",
            params![subdomain, module, version],
        )?;
        log::debug!("recorded {module} v{version} for subdomain {subdomain}");
        Ok(())
    }

    async fn latest_versions(&self) -> LedgerResult<Vec<ModuleVersion>> {
        self.latest_versions_sync(
            "SELECT module, MAX(version) FROM vs_ledger.module_version \
             GROUP BY module ORDER BY module",
            &[],
        )
    }

    async fn latest_init_versions(&self, subdomain: &str) -> LedgerResult<Vec<ModuleVersion>> {
        self.latest_versions_sync(
            "SELECT module, MAX(version) FROM vs_ledger.module_version_init \
             WHERE subdomain = ? GROUP BY module ORDER BY module",
            &[subdomain],
        )
    }

    async fn history(&self, module: &str) -> LedgerResult<Vec<AppliedVersion>> {
        self.history_sync(
            "SELECT version, CAST(applied_at AS VARCHAR) FROM vs_ledger.module_version \
             WHERE module = ? ORDER BY id",
            &[module],
        )
    }

    async fn init_history(
        &self,
        subdomain: &str,
        module: &str,
    ) -> LedgerResult<Vec<AppliedVersion>> {
        self.history_sync(
            "SELECT version, CAST(applied_at AS VARCHAR) FROM vs_ledger.module_version_init \
             WHERE subdomain = ? AND module = ? ORDER BY id",
            &[subdomain, module],
        )
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod duckdb_test;
