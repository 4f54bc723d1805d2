//! Fixed-point decimal price type
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point
//! errors). Price equality and ordering are exact, which the matching
//! tie-break rules depend on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A limit price.
///
/// Prices are immutable once attached to an order. There is no tick size;
/// any decimal value is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a price from a whole number of quote units.
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse a price from a decimal string.
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str(s).map(Self)
    }

    /// Inner decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
