//! Order submission types
//!
//! A submission is a `NewOrder`; an accepted submission is identified by an
//! `OrderHandle` naming the arena slot the order was published into.

use crate::ids::InstrumentId;
use crate::numeric::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Parameters of a single limit-order submission.
///
/// A zero quantity is accepted; the resulting resting order is inert and
/// never matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub instrument: InstrumentId,
    pub side: Side,
    pub quantity: u64,
    pub price: Price,
}

/// Handle to an accepted order.
///
/// `sequence` is globally unique and strictly increasing across all
/// submissions; `slot` is the claimed index on the order's side of its
/// instrument's book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderHandle {
    pub sequence: u64,
    pub instrument: InstrumentId,
    pub side: Side,
    pub slot: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_new_order_serialization() {
        let order = NewOrder {
            instrument: InstrumentId::new(1),
            side: Side::Buy,
            quantity: 100,
            price: Price::from_str("50.0").unwrap(),
        };

        let json = serde_json::to_string(&order).unwrap();
        let deserialized: NewOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
