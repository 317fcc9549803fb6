use core::fmt;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::discount::Discount;
use crate::product::{Product, ProductData, ProductKey, ProductRecord};

/// Anything `Inventory::add` accepts: a ready product or raw data.
#[derive(Debug, Clone, PartialEq)]
pub enum StockInput {
    Product(Product),
    Data(ProductData),
}

impl From<Product> for StockInput {
    fn from(product: Product) -> Self {
        StockInput::Product(product)
    }
}

impl From<ProductData> for StockInput {
    fn from(data: ProductData) -> Self {
        StockInput::Data(data)
    }
}

impl TryFrom<StockInput> for Product {
    type Error = DomainError;

    fn try_from(input: StockInput) -> Result<Self, Self::Error> {
        match input {
            StockInput::Product(product) => Ok(product),
            StockInput::Data(data) => Product::from_data(data),
        }
    }
}

/// Serializable view of the whole inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub items: Vec<ProductRecord>,
    pub total_value: f64,
}

/// Aggregate root: Inventory.
///
/// Owns an insertion-ordered list of products, at most one per
/// [`ProductKey`]. `index` maps each key to its position in `items`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Product>,
    index: HashMap<ProductKey, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an inventory. Items go through [`Inventory::add`] in order, so
    /// duplicates in the seed list merge exactly like runtime additions.
    pub fn with_items<I, T>(items: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<StockInput>,
    {
        let mut inventory = Self::new();
        for item in items {
            inventory.add(item)?;
        }
        Ok(inventory)
    }

    /// Add stock, merging by case-insensitive name.
    ///
    /// When the name already exists the quantities are summed and the stored
    /// price is **overwritten** by the incoming one. Otherwise the product is
    /// appended.
    pub fn add(&mut self, input: impl Into<StockInput>) -> DomainResult<&mut Self> {
        let product = Product::try_from(input.into())?;
        let key = product.key();

        match self.index.get(&key) {
            Some(&pos) => {
                let existing = &mut self.items[pos];
                existing.absorb(&product)?;
                tracing::debug!(
                    product = %key,
                    added = product.quantity(),
                    quantity = existing.quantity(),
                    price = existing.price(),
                    "merged stock into existing product"
                );
            }
            None => {
                tracing::debug!(
                    product = %key,
                    quantity = product.quantity(),
                    price = product.price(),
                    "added new product"
                );
                self.index.insert(key, self.items.len());
                self.items.push(product);
            }
        }

        Ok(self)
    }

    /// Remove stock by case-insensitive name.
    ///
    /// Returns `Ok(false)` when nothing matches. With `quantity == None` the
    /// whole entry goes; otherwise `quantity` must be a positive integer and
    /// removing at least the stored quantity drops the entry.
    pub fn remove(&mut self, name: &str, quantity: Option<i64>) -> DomainResult<bool> {
        let Some(pos) = self.position(name) else {
            tracing::debug!(product = %ProductKey::new(name), "remove: no matching product");
            return Ok(false);
        };

        let Some(requested) = quantity else {
            let removed = self.remove_at(pos);
            tracing::debug!(product = %removed.key(), "removed product");
            return Ok(true);
        };

        let units = u64::try_from(requested)
            .ok()
            .filter(|&units| units > 0)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "quantity to remove must be an integer > 0 (got {requested})"
                ))
            })?;

        if units >= self.items[pos].quantity() {
            let removed = self.remove_at(pos);
            tracing::debug!(product = %removed.key(), units, "removed product (stock exhausted)");
        } else {
            let product = &mut self.items[pos];
            product.withdraw(units);
            tracing::debug!(
                product = %product.key(),
                units,
                quantity = product.quantity(),
                "withdrew stock"
            );
        }

        Ok(true)
    }

    /// Sum of every product's subtotal; `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        self.items.iter().fold(0.0, |total, product| total + product.subtotal())
    }

    /// Total value after `discount`, clamped at zero. Nothing is persisted.
    pub fn apply_discount(&self, discount: &Discount) -> DomainResult<f64> {
        discount.apply_to(self.total_value())
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.position(name).map(|pos| &self.items[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Products in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.items.iter()
    }

    pub fn records(&self) -> Vec<ProductRecord> {
        self.items.iter().map(Product::to_record).collect()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            items: self.records(),
            total_value: self.total_value(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&ProductKey::new(name)).copied()
    }

    fn remove_at(&mut self, pos: usize) -> Product {
        let removed = self.items.remove(pos);
        self.index.remove(&removed.key());
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        removed
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("No products in inventory.");
        }
        f.write_str("Current inventory:")?;
        for product in &self.items {
            write!(f, "\n  {product}")?;
        }
        Ok(())
    }
}
