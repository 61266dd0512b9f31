//! Status command: current version per module.

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::commands::common::{open_ledger, print_table};
use anyhow::{Context, Result};
use vs_ledger::Ledger;

/// Execute the status command.
pub async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ledger = open_ledger(global)?;

    let versions = match &args.subdomain {
        None => ledger
            .latest_versions()
            .await
            .context("Failed to read the global track")?,
        Some(subdomain) => ledger
            .latest_init_versions(subdomain)
            .await
            .with_context(|| format!("Failed to read the init track for '{subdomain}'"))?,
    };

    match args.format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = versions
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "module": v.module.as_str(),
                        "version": v.version,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            if versions.is_empty() {
                println!("(no modules tracked)");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = versions
                .iter()
                .map(|v| vec![v.module.to_string(), v.version.to_string()])
                .collect();
            print_table(&["module", "version"], &rows);
            println!("\n({} modules)", versions.len());
        }
    }

    Ok(())
}
