//! Trade report types
//!
//! A `TradeReport` is the only externally visible record of a state change:
//! one report per executed cross.

use crate::ids::{InstrumentId, TradeId};
use crate::numeric::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Record of a single executed cross.
///
/// The execution price is always the resting sell order's price, never a
/// midpoint. `buy_sequence` and `sell_sequence` reference the two crossed
/// orders by their submission sequence numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeReport {
    pub trade_id: TradeId,
    /// Global monotonic trade sequence
    pub sequence: u64,
    pub instrument: InstrumentId,
    pub quantity: u64,
    pub price: Price,

    // Crossed order references
    pub buy_sequence: u64,
    pub sell_sequence: u64,

    /// Unix nanos
    pub executed_at: i64,
}

impl TradeReport {
    /// Create a new trade report
    pub fn new(
        sequence: u64,
        instrument: InstrumentId,
        quantity: u64,
        price: Price,
        buy_sequence: u64,
        sell_sequence: u64,
        executed_at: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            sequence,
            instrument,
            quantity,
            price,
            buy_sequence,
            sell_sequence,
            executed_at,
        }
    }

    /// Calculate trade value (price × quantity)
    pub fn trade_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price.as_decimal()
    }
}
