use std::path::PathBuf;

use anyhow::Context;

use stockroom_inventory::Discount;

pub const SEED_VAR: &str = "STOCKROOM_SEED";
pub const DISCOUNT_VAR: &str = "STOCKROOM_DISCOUNT";

/// Report settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportConfig {
    /// JSON array of product records; the built-in seed is used when unset.
    pub seed_path: Option<PathBuf>,
    /// `kind:amount`, e.g. `percentage:10`.
    pub discount: Option<Discount>,
}

impl ReportConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let seed_path = lookup(SEED_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let discount = lookup(DISCOUNT_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                value
                    .parse::<Discount>()
                    .with_context(|| format!("{DISCOUNT_VAR}={value}"))
            })
            .transpose()?;

        Ok(Self {
            seed_path,
            discount,
        })
    }
}
