//! Order book infrastructure module
//!
//! Contains the bounded side arenas and the per-instrument book pairing
//! them with the matching lock.

pub mod arena;

pub use arena::{RestingOrder, SideArena};

use std::sync::Mutex;

use types::order::Side;

/// Per-instrument order book: one bounded arena per side.
///
/// Submissions are lock-free; the `match_lock` serializes matching passes
/// so at most one is in flight per instrument, which makes the
/// select-best-then-decrement step race-free.
pub struct OrderBook {
    buys: SideArena,
    sells: SideArena,
    pub(crate) match_lock: Mutex<()>,
}

impl OrderBook {
    /// Create a book with `capacity_per_side` slots on each side.
    pub fn new(capacity_per_side: usize) -> Self {
        Self {
            buys: SideArena::new(capacity_per_side),
            sells: SideArena::new(capacity_per_side),
            match_lock: Mutex::new(()),
        }
    }

    /// Buy-side arena.
    pub fn buys(&self) -> &SideArena {
        &self.buys
    }

    /// Sell-side arena.
    pub fn sells(&self) -> &SideArena {
        &self.sells
    }

    /// Arena for the given side.
    pub fn side(&self, side: Side) -> &SideArena {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }
}
