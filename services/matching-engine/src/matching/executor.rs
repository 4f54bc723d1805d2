//! Trade report generation
//!
//! Assigns the global trade sequence and builds the report emitted for
//! every executed cross.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;
use types::ids::InstrumentId;
use types::numeric::Price;
use types::trade::TradeReport;

/// Trade executor with monotonic sequence generation.
///
/// Shared by reference across matching passes; the sequence counter is
/// atomic so passes over different instruments can execute concurrently.
pub struct TradeExecutor {
    sequence: AtomicU64,
}

impl TradeExecutor {
    /// Create an executor with a starting sequence number.
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence: AtomicU64::new(starting_sequence),
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Build the report for a cross between two resting orders.
    ///
    /// `price` is the execution price: always the resting sell's price.
    pub fn execute_trade(
        &self,
        instrument: InstrumentId,
        quantity: u64,
        price: Price,
        buy_sequence: u64,
        sell_sequence: u64,
        timestamp: i64,
    ) -> TradeReport {
        let report = TradeReport::new(
            self.next_sequence(),
            instrument,
            quantity,
            price,
            buy_sequence,
            sell_sequence,
            timestamp,
        );

        info!(
            instrument = %report.instrument,
            quantity = report.quantity,
            price = %report.price,
            value = %report.trade_value(),
            "trade executed"
        );

        report
    }
}
