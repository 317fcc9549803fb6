use core::fmt;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Quantity assumed when raw product data omits it.
pub const DEFAULT_QUANTITY: u64 = 1;

/// Identity key of a product: its trimmed, lower-cased name.
///
/// "Apple", " apple " and "APPLE" all map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductKey(String);

impl ProductKey {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for ProductKey {}

/// Loosely-typed product input, as it arrives from a seed file or a caller.
///
/// `quantity` is a plain number so that fractional or negative values reach
/// validation instead of being rejected by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl ProductData {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: None,
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// Plain display/serialization view of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
    pub quantity: u64,
    pub subtotal: f64,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        product.to_record()
    }
}

/// Entity: a named, priced, countable item.
///
/// Fields are validated once, at construction. Afterwards only the owning
/// [`crate::Inventory`] may change quantity or price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    quantity: u64,
}

impl Product {
    /// Create a product, validating every field.
    ///
    /// The name is stored trimmed.
    pub fn new(name: impl AsRef<str>, price: f64, quantity: i64) -> DomainResult<Self> {
        let quantity = u64::try_from(quantity).map_err(|_| {
            DomainError::validation(format!("quantity must be an integer >= 0 (got {quantity})"))
        })?;
        Self::validated(name.as_ref(), price, quantity)
    }

    /// Create a product with [`DEFAULT_QUANTITY`] units.
    pub fn with_default_quantity(name: impl AsRef<str>, price: f64) -> DomainResult<Self> {
        Self::validated(name.as_ref(), price, DEFAULT_QUANTITY)
    }

    /// Lenient conversion from raw data; a missing quantity defaults to 1.
    pub fn from_data(data: ProductData) -> DomainResult<Self> {
        let quantity = match data.quantity {
            Some(raw) => quantity_from_number(raw)?,
            None => DEFAULT_QUANTITY,
        };
        Self::validated(&data.name, data.price, quantity)
    }

    fn validated(name: &str, price: f64, quantity: u64) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a finite number >= 0 (got {price})"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            // -0.0 passes the check above; store it as 0.0.
            price: price + 0.0,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn key(&self) -> ProductKey {
        ProductKey::new(&self.name)
    }

    /// `price * quantity`, recomputed on every call.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn to_record(&self) -> ProductRecord {
        ProductRecord {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            subtotal: self.subtotal(),
        }
    }

    /// Fold an incoming product with the same key into this one.
    ///
    /// Quantities add up; the incoming price replaces the stored one
    /// (last write wins, prices are not averaged). The stored name keeps its
    /// original spelling.
    pub(crate) fn absorb(&mut self, incoming: &Product) -> DomainResult<()> {
        let quantity = self.quantity.checked_add(incoming.quantity).ok_or_else(|| {
            DomainError::invariant(format!("quantity overflow merging '{}'", self.name))
        })?;
        self.quantity = quantity;
        self.price = incoming.price;
        Ok(())
    }

    /// Caller guarantees `units < self.quantity`.
    pub(crate) fn withdraw(&mut self, units: u64) {
        debug_assert!(units < self.quantity);
        self.quantity -= units;
    }
}

impl Entity for Product {
    type Id = ProductKey;

    fn id(&self) -> Self::Id {
        self.key()
    }
}

impl TryFrom<ProductData> for Product {
    type Error = DomainError;

    fn try_from(data: ProductData) -> Result<Self, Self::Error> {
        Self::from_data(data)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | ${:.2} x {} = ${:.2}",
            self.name,
            self.price,
            self.quantity,
            self.subtotal()
        )
    }
}

fn quantity_from_number(raw: f64) -> DomainResult<u64> {
    // u64::MAX as f64 rounds up to 2^64, which is already out of range.
    if !raw.is_finite() || raw.fract() != 0.0 || raw < 0.0 || raw >= u64::MAX as f64 {
        return Err(DomainError::validation(format!(
            "quantity must be an integer >= 0 (got {raw})"
        )));
    }
    Ok(raw as u64)
}
