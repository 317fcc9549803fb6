use stockroom_core::DomainResult;
use stockroom_inventory::{Discount, Inventory};

/// Render the listing, the total value and, if given, the discounted total.
pub fn render(inventory: &Inventory, discount: Option<&Discount>) -> DomainResult<String> {
    let mut out = format!(
        "{inventory}\nTotal value: ${:.2}",
        inventory.total_value()
    );

    if let Some(discount) = discount {
        let discounted = inventory.apply_discount(discount)?;
        tracing::info!(kind = %discount.kind, amount = discount.amount, discounted, "discount applied");
        out.push_str(&format!(
            "\nDiscounted total ({}={}): ${:.2}",
            discount.kind, discount.amount, discounted
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::Product;

    fn inventory() -> Inventory {
        Inventory::with_items([Product::new("Manzana", 0.5, 10).unwrap()]).unwrap()
    }

    #[test]
    fn renders_listing_and_total() {
        let out = render(&inventory(), None).unwrap();
        assert_eq!(
            out,
            "Current inventory:\n  Manzana | $0.50 x 10 = $5.00\nTotal value: $5.00"
        );
    }

    #[test]
    fn renders_discounted_total() {
        let out = render(&inventory(), Some(&Discount::percentage(10.0))).unwrap();
        assert!(out.ends_with("Discounted total (percentage=10): $4.50"));
    }

    #[test]
    fn empty_inventory_still_reports_zero() {
        let out = render(&Inventory::new(), Some(&Discount::fixed(3.0))).unwrap();
        assert_eq!(
            out,
            "No products in inventory.\nTotal value: $0.00\nDiscounted total (fixed=3): $0.00"
        );
    }

    #[test]
    fn invalid_discount_propagates() {
        let err = render(&inventory(), Some(&Discount::fixed(-1.0))).unwrap_err();
        assert!(err.is_validation());
    }
}
