//! vs-ledger - Append-only version ledger for Verstep
//!
//! This crate provides the [`Ledger`] trait and its DuckDB implementation.
//! The ledger is a pure history log: rows are appended exactly once per
//! successfully applied migration step and never mutated or deleted. The
//! current version of a module is derived as the maximum applied version.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbLedger;
pub use error::{LedgerError, LedgerResult};
pub use traits::{AppliedVersion, Ledger, ModuleVersion};
