//! Shared helpers for CLI commands.

use crate::cli::GlobalArgs;
use anyhow::{Context, Result};
use std::path::Path;
use vs_ledger::DuckDbLedger;

/// Open the ledger database named by the global args.
///
/// The file must already exist: the CLI only inspects ledgers that a host
/// application has provisioned and migrated.
pub(crate) fn open_ledger(global: &GlobalArgs) -> Result<DuckDbLedger> {
    if !Path::new(&global.db).exists() {
        anyhow::bail!(
            "Ledger database not found: {}. Run an update pass from the host application first.",
            global.db
        );
    }
    if global.verbose {
        println!("ledger: {}", global.db);
    }
    DuckDbLedger::new(&global.db).with_context(|| format!("Failed to open ledger {}", global.db))
}

/// Print a simple two-column-ish table with headers and aligned rows.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(widths.iter().copied())
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    println!("{}", header_line.join("  "));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        println!("{}", line.join("  "));
    }
}
