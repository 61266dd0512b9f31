//! History command: applied-step rows for one module.

use crate::cli::{GlobalArgs, HistoryArgs, OutputFormat};
use crate::commands::common::{open_ledger, print_table};
use anyhow::{Context, Result};
use vs_ledger::Ledger;

/// Execute the history command.
pub async fn execute(args: &HistoryArgs, global: &GlobalArgs) -> Result<()> {
    let ledger = open_ledger(global)?;

    let history = match &args.subdomain {
        None => ledger
            .history(&args.module)
            .await
            .with_context(|| format!("Failed to read history for '{}'", args.module))?,
        Some(subdomain) => ledger
            .init_history(subdomain, &args.module)
            .await
            .with_context(|| {
                format!(
                    "Failed to read init history for '{}' under '{subdomain}'",
                    args.module
                )
            })?,
    };

    match args.format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = history
                .iter()
                .map(|step| {
                    serde_json::json!({
                        "version": step.version,
                        "applied_at": step.applied_at,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            if history.is_empty() {
                println!("(no steps recorded for '{}')", args.module);
                return Ok(());
            }
            let rows: Vec<Vec<String>> = history
                .iter()
                .map(|step| vec![step.version.to_string(), step.applied_at.clone()])
                .collect();
            print_table(&["version", "applied_at"], &rows);
            println!("\n({} steps)", history.len());
        }
    }

    Ok(())
}
