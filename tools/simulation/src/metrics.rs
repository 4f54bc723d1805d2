//! Run metrics
//!
//! Counters accumulated over a simulation run, exportable as JSON.

use matching_engine::Engine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::RejectError;
use types::order::{NewOrder, OrderHandle};
use types::trade::TradeReport;

/// Aggregated counters for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunMetrics {
    pub orders_submitted: u64,
    pub orders_rejected_capacity: u64,
    pub orders_rejected_instrument: u64,
    pub trades_executed: u64,
    pub matched_quantity: u64,
    pub matched_value: Decimal,
    pub elapsed_ns: u64,
}

impl RunMetrics {
    /// Create empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one submission outcome.
    pub fn record_submission(&mut self, outcome: &Result<OrderHandle, RejectError>) {
        match outcome {
            Ok(_) => self.orders_submitted += 1,
            Err(RejectError::CapacityExceeded { .. }) => self.orders_rejected_capacity += 1,
            Err(RejectError::UnknownInstrument { .. }) => self.orders_rejected_instrument += 1,
        }
    }

    /// Record one executed trade.
    pub fn record_trade(&mut self, trade: &TradeReport) {
        self.trades_executed += 1;
        self.matched_quantity += trade.quantity;
        self.matched_value += trade.trade_value();
    }

    /// Total rejected submissions, any reason.
    pub fn orders_rejected(&self) -> u64 {
        self.orders_rejected_capacity + self.orders_rejected_instrument
    }

    /// Fold another task's counters into this one.
    pub fn merge(&mut self, other: &RunMetrics) {
        self.orders_submitted += other.orders_submitted;
        self.orders_rejected_capacity += other.orders_rejected_capacity;
        self.orders_rejected_instrument += other.orders_rejected_instrument;
        self.trades_executed += other.trades_executed;
        self.matched_quantity += other.matched_quantity;
        self.matched_value += other.matched_value;
    }

    /// Throughput: submissions per second.
    pub fn orders_per_second(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.orders_submitted as f64 / (self.elapsed_ns as f64 / 1_000_000_000.0)
    }

    /// Throughput: trades per second.
    pub fn trades_per_second(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.trades_executed as f64 / (self.elapsed_ns as f64 / 1_000_000_000.0)
    }
}

/// Convenience: submit and record in one step.
pub fn submit_recorded(
    engine: &Engine,
    metrics: &mut RunMetrics,
    order: NewOrder,
) -> Result<OrderHandle, RejectError> {
    let outcome = engine.submit_order(order);
    metrics.record_submission(&outcome);
    outcome
}
