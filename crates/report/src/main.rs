//! `stockroom-report`: seeds an inventory and prints its listing, total value
//! and (optionally) a discounted total.

mod config;
mod report;
mod seed;

use anyhow::Context;

use stockroom_inventory::Inventory;

use crate::config::ReportConfig;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = ReportConfig::from_env().context("invalid report configuration")?;

    let inventory = match &config.seed_path {
        Some(path) => {
            tracing::info!("Loading inventory seed from {}", path.display());
            let records = seed::load(path)?;
            Inventory::with_items(records)
                .with_context(|| format!("invalid product in {}", path.display()))?
        }
        None => {
            tracing::info!("STOCKROOM_SEED not set; using built-in seed");
            Inventory::with_items(seed::builtin()?).context("invalid built-in seed")?
        }
    };

    tracing::info!(products = inventory.len(), "inventory ready");

    let output = report::render(&inventory, config.discount.as_ref())?;
    println!("{output}");

    Ok(())
}
