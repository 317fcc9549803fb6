//! Inventory domain module.
//!
//! This crate contains the business rules for a small stock list: products
//! keyed by case-insensitive name, stock merging and removal, valuation and
//! discounts. Pure domain logic (no IO, no storage).

pub mod discount;
pub mod inventory;
pub mod product;

pub use discount::{Discount, DiscountKind};
pub use inventory::{Inventory, InventorySnapshot, StockInput};
pub use product::{DEFAULT_QUANTITY, Product, ProductData, ProductKey, ProductRecord};
