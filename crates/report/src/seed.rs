use std::fs;
use std::path::Path;

use anyhow::Context;

use stockroom_core::DomainResult;
use stockroom_inventory::{Product, ProductData, StockInput};

/// Starter stock used when no seed file is configured.
pub fn builtin() -> DomainResult<Vec<StockInput>> {
    Ok(vec![
        Product::new("Manzana", 0.5, 10)?.into(),
        Product::new("Leche", 1.2, 4)?.into(),
        ProductData::new("Arroz", 0.9).with_quantity(3.0).into(),
    ])
}

/// Read a JSON array of product records.
pub fn load(path: &Path) -> anyhow::Result<Vec<ProductData>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse(&raw).with_context(|| format!("failed to parse seed file {}", path.display()))
}

fn parse(raw: &str) -> serde_json::Result<Vec<ProductData>> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::Inventory;

    #[test]
    fn builtin_seed_has_three_products() {
        let inventory = Inventory::with_items(builtin().unwrap()).unwrap();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.get("arroz").unwrap().quantity(), 3);
    }

    #[test]
    fn parses_records_with_optional_quantity() {
        let records = parse(
            r#"[
                {"name": "Manzana", "price": 0.5, "quantity": 10},
                {"name": "Pan", "price": 1.1}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quantity, Some(10.0));
        assert_eq!(records[1].quantity, None);
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(parse(r#"{"name": "Pan"}"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/stockroom-seed.json")).unwrap_err();
        assert!(err.to_string().contains("stockroom-seed.json"));
    }
}
