//! Matching logic module
//!
//! Crossing detection plus trade report generation; the pass loop itself
//! lives in the engine.

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::TradeExecutor;
