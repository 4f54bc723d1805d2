//! Matching Engine Service
//!
//! Continuous double-auction matching over bounded per-instrument order
//! arenas. Submission and matching are independent activities: submissions
//! append to an arena without triggering matching, and a periodic matching
//! pass crosses the best bid against the best ask until no cross remains.
//!
//! **Key Invariants:**
//! - Order sequence numbers are globally unique and strictly increasing
//! - Remaining quantity is non-increasing and never negative
//! - After a matching pass, no eligible bid/ask pair crosses
//! - Execution price is always the resting sell order's price

pub mod book;
pub mod matching;
pub mod engine;

pub use engine::{Engine, EngineConfig};
