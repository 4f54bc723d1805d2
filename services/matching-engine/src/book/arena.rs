//! Bounded append-only order arena
//!
//! One arena per book side. A submission claims a slot index with an atomic
//! fetch-and-increment, then publishes the fully constructed order through
//! `OnceLock`: a reader either sees a complete order or an empty slot, so
//! the claim counter itself carries no publication guarantee and needs none.
//! The counter never decreases; claims past capacity are rejected and the
//! slot is never written, so capacity-exceeding submissions are permanently
//! lost.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use types::ids::InstrumentId;
use types::numeric::Price;
use types::order::Side;

/// A resting limit order in its arena slot.
///
/// Every field except `remaining` is immutable after publication. Only the
/// matching pass decrements `remaining`; it never goes below zero, and a
/// zero-remaining order keeps its slot for the life of the process but is
/// ignored by scans.
#[derive(Debug)]
pub struct RestingOrder {
    pub sequence: u64,
    pub instrument: InstrumentId,
    pub side: Side,
    pub price: Price,
    pub quantity: u64,
    remaining: AtomicU64,
}

impl RestingOrder {
    /// Create an order with its full quantity remaining.
    pub fn new(
        sequence: u64,
        instrument: InstrumentId,
        side: Side,
        price: Price,
        quantity: u64,
    ) -> Self {
        Self {
            sequence,
            instrument,
            side,
            price,
            quantity,
            remaining: AtomicU64::new(quantity),
        }
    }

    /// Remaining unfilled quantity.
    pub fn remaining(&self) -> u64 {
        self.remaining.load(Ordering::Acquire)
    }

    /// Quantity filled so far.
    pub fn filled(&self) -> u64 {
        self.quantity - self.remaining()
    }

    /// Whether the order is still eligible for matching.
    pub fn is_live(&self) -> bool {
        self.remaining() > 0
    }

    /// Decrement the remaining quantity.
    ///
    /// Caller must hold the book's matching lock and `fill` must not exceed
    /// the current remaining quantity.
    pub(crate) fn fill(&self, fill: u64) {
        debug_assert!(fill <= self.remaining(), "fill exceeds remaining quantity");
        self.remaining.fetch_sub(fill, Ordering::AcqRel);
    }
}

/// Bounded arena holding one side of an instrument's book.
pub struct SideArena {
    slots: Box<[OnceLock<RestingOrder>]>,
    claimed: AtomicU64,
}

impl SideArena {
    /// Create an arena with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        let slots: Vec<OnceLock<RestingOrder>> =
            (0..capacity).map(|_| OnceLock::new()).collect();
        Self {
            slots: slots.into_boxed_slice(),
            claimed: AtomicU64::new(0),
        }
    }

    /// Slot capacity of this side.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Claim the next slot index.
    ///
    /// Returns `None` when the arena is full. The counter advances either
    /// way, so a failed claim is permanent.
    pub fn claim(&self) -> Option<usize> {
        let index = self.claimed.fetch_add(1, Ordering::Relaxed) as usize;
        (index < self.slots.len()).then_some(index)
    }

    /// Publish a fully constructed order into a claimed slot.
    pub fn publish(&self, slot: usize, order: RestingOrder) {
        self.slots[slot]
            .set(order)
            .expect("claim indices are unique; a slot is published at most once");
    }

    /// Total claims issued so far, including those past capacity.
    pub fn claimed_total(&self) -> u64 {
        self.claimed.load(Ordering::Acquire)
    }

    /// Number of claimed slots, clamped to capacity.
    ///
    /// A claimed slot may still be in its publication window; `get` on such
    /// a slot returns `None`.
    pub fn claimed_len(&self) -> usize {
        (self.claimed.load(Ordering::Acquire) as usize).min(self.slots.len())
    }

    /// Read a published order by slot index.
    pub fn get(&self, slot: usize) -> Option<&RestingOrder> {
        self.slots.get(slot).and_then(|s| s.get())
    }

    /// Iterate over published orders in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &RestingOrder> {
        (0..self.claimed_len()).filter_map(move |slot| self.get(slot))
    }

    /// Highest-priced live order (best bid).
    ///
    /// Ties are broken by lowest sequence number.
    pub fn best_bid(&self) -> Option<&RestingOrder> {
        self.best_live_by(|candidate, best| candidate > best)
    }

    /// Lowest-priced live order (best ask).
    ///
    /// Ties are broken by lowest sequence number.
    pub fn best_ask(&self) -> Option<&RestingOrder> {
        self.best_live_by(|candidate, best| candidate < best)
    }

    /// Scan every claimed slot for the best live order.
    ///
    /// `prefer(candidate, best)` decides strict price improvement; equal
    /// prices fall back to the lower sequence number.
    fn best_live_by<F>(&self, prefer: F) -> Option<&RestingOrder>
    where
        F: Fn(Price, Price) -> bool,
    {
        let mut best: Option<&RestingOrder> = None;
        for order in self.iter() {
            if !order.is_live() {
                continue;
            }
            best = match best {
                None => Some(order),
                Some(current) if prefer(order.price, current.price) => Some(order),
                Some(current)
                    if order.price == current.price && order.sequence < current.sequence =>
                {
                    Some(order)
                }
                current => current,
            };
        }
        best
    }
}
