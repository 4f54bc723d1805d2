//! Matching engine core
//!
//! Owns the fixed registry of per-instrument order books and exposes the
//! two operations the external driver schedules: `submit_order` and
//! `run_matching_pass`. Submission and matching never call each other;
//! they cooperate only through the shared book state.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use types::errors::RejectError;
use types::ids::InstrumentId;
use types::order::{NewOrder, OrderHandle};
use types::trade::TradeReport;

use crate::book::{OrderBook, RestingOrder};
use crate::matching::{can_match, TradeExecutor};

/// Engine sizing, fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of instruments in the registry.
    pub instruments: usize,
    /// Slot capacity of each book side.
    pub capacity_per_side: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            instruments: 1024,
            capacity_per_side: 1024,
        }
    }
}

/// Continuous double-auction matching engine.
///
/// All entry points take `&self`: submissions synchronize through the
/// arenas' atomic slot claims, and each book's matching lock keeps at most
/// one matching pass in flight per instrument.
pub struct Engine {
    books: Box<[OrderBook]>,
    order_sequence: AtomicU64,
    executor: TradeExecutor,
}

impl Engine {
    /// Create an engine with the given sizing.
    pub fn new(config: EngineConfig) -> Self {
        info!(
            instruments = config.instruments,
            capacity_per_side = config.capacity_per_side,
            "engine initialized"
        );

        let books: Vec<OrderBook> = (0..config.instruments)
            .map(|_| OrderBook::new(config.capacity_per_side))
            .collect();

        Self {
            books: books.into_boxed_slice(),
            order_sequence: AtomicU64::new(0),
            executor: TradeExecutor::new(0),
        }
    }

    /// Create an engine with default sizing.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Number of instruments in the registry.
    pub fn instrument_count(&self) -> usize {
        self.books.len()
    }

    /// Book for an instrument, primarily for diagnostics and tests.
    pub fn book(&self, instrument: InstrumentId) -> Option<&OrderBook> {
        self.books.get(instrument.index())
    }

    /// Remaining quantity of a previously accepted order.
    pub fn remaining_quantity(&self, handle: &OrderHandle) -> Option<u64> {
        self.books
            .get(handle.instrument.index())?
            .side(handle.side)
            .get(handle.slot)
            .map(|order| order.remaining())
    }

    fn next_sequence(&self) -> u64 {
        self.order_sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Validate and append a new order to the correct side of its book.
    ///
    /// No matching is triggered inline. Every call consumes a sequence
    /// number, including rejected ones; a rejection has no other side
    /// effect beyond the capacity counter staying advanced.
    pub fn submit_order(&self, order: NewOrder) -> Result<OrderHandle, RejectError> {
        let sequence = self.next_sequence();

        let book = self.books.get(order.instrument.index()).ok_or(
            RejectError::UnknownInstrument {
                instrument: order.instrument,
                limit: self.books.len(),
            },
        )?;

        let arena = book.side(order.side);
        let slot = arena.claim().ok_or(RejectError::CapacityExceeded {
            instrument: order.instrument,
            side: order.side,
            capacity: arena.capacity(),
        })?;

        arena.publish(
            slot,
            RestingOrder::new(sequence, order.instrument, order.side, order.price, order.quantity),
        );

        debug!(
            sequence,
            instrument = %order.instrument,
            side = %order.side,
            quantity = order.quantity,
            price = %order.price,
            slot,
            "order resting"
        );

        Ok(OrderHandle {
            sequence,
            instrument: order.instrument,
            side: order.side,
            slot,
        })
    }

    /// Run one matching pass for an instrument to its fixed point.
    ///
    /// Repeatedly selects the best live bid and ask, and while the bid
    /// price is at least the ask price, crosses them for the smaller
    /// remaining quantity at the resting sell's price. Terminates when
    /// either side has no live order or the best pair no longer crosses.
    pub fn run_matching_pass(
        &self,
        instrument: InstrumentId,
        timestamp: i64,
    ) -> Result<Vec<TradeReport>, RejectError> {
        let book = self
            .books
            .get(instrument.index())
            .ok_or(RejectError::UnknownInstrument {
                instrument,
                limit: self.books.len(),
            })?;

        // One pass in flight per instrument; submissions never take this.
        let _guard = book
            .match_lock
            .lock()
            .expect("matching lock poisoned");

        let mut trades = Vec::new();
        loop {
            let Some(best_buy) = book.buys().best_bid() else { break };
            let Some(best_sell) = book.sells().best_ask() else { break };

            if !can_match(best_buy.price, best_sell.price) {
                break;
            }

            let quantity = best_buy.remaining().min(best_sell.remaining());
            let report = self.executor.execute_trade(
                instrument,
                quantity,
                best_sell.price,
                best_buy.sequence,
                best_sell.sequence,
                timestamp,
            );

            best_buy.fill(quantity);
            best_sell.fill(quantity);
            trades.push(report);
        }

        Ok(trades)
    }
}
