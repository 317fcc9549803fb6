use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// How a discount reduces the total value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// `amount` is in percentage points: 10 means 10%.
    Percentage,
    /// `amount` is subtracted from the total.
    Fixed,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountKind::Percentage),
            "fixed" => Ok(DiscountKind::Fixed),
            other => Err(DomainError::validation(format!(
                "unknown discount kind '{other}' (expected 'percentage' or 'fixed')"
            ))),
        }
    }
}

/// Discount descriptor: `{kind, amount}`.
///
/// Applying a discount is a pure computation; nothing about the inventory
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    pub amount: f64,
}

impl ValueObject for Discount {}

impl Discount {
    pub fn percentage(amount: f64) -> Self {
        Self {
            kind: DiscountKind::Percentage,
            amount,
        }
    }

    pub fn fixed(amount: f64) -> Self {
        Self {
            kind: DiscountKind::Fixed,
            amount,
        }
    }

    /// Build a validated discount from an untyped kind string.
    pub fn parse(kind: &str, amount: f64) -> DomainResult<Self> {
        let discount = Self {
            kind: kind.parse()?,
            amount,
        };
        discount.validate()?;
        Ok(discount)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(DomainError::validation(format!(
                "discount amount must be a finite number >= 0 (got {})",
                self.amount
            )));
        }
        Ok(())
    }

    /// Discounted value of `total`, never below zero.
    ///
    /// Percentages above 100 are allowed and simply clamp to zero.
    pub fn apply_to(&self, total: f64) -> DomainResult<f64> {
        self.validate()?;
        let discounted = match self.kind {
            DiscountKind::Percentage => total * (1.0 - self.amount / 100.0),
            DiscountKind::Fixed => total - self.amount,
        };
        // Never -0.0.
        Ok(if discounted > 0.0 { discounted } else { 0.0 })
    }
}

/// Parses the `kind:amount` form, e.g. `percentage:10` or `fixed:2.5`.
impl FromStr for Discount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s.split_once(':').ok_or_else(|| {
            DomainError::validation(format!("discount must look like 'kind:amount' (got '{s}')"))
        })?;
        let amount: f64 = amount.trim().parse().map_err(|_| {
            DomainError::validation(format!("discount amount is not a number (got '{amount}')"))
        })?;
        Self::parse(kind.trim(), amount)
    }
}
