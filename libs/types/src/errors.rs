//! Error types for the matching engine
//!
//! Submission rejections are surfaced as explicit outcomes rather than the
//! silent drops of earlier revisions; they never block or crash matching.

use crate::ids::InstrumentId;
use crate::order::Side;
use thiserror::Error;

/// Reasons a submission can be rejected.
///
/// A rejected submission has no side effect on any book, but still consumes
/// a global sequence number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectError {
    #[error("unknown instrument {instrument}: registry holds {limit} instruments")]
    UnknownInstrument {
        instrument: InstrumentId,
        limit: usize,
    },

    #[error("{side} side of instrument {instrument} is full: capacity {capacity}")]
    CapacityExceeded {
        instrument: InstrumentId,
        side: Side,
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_instrument_display() {
        let err = RejectError::UnknownInstrument {
            instrument: InstrumentId::new(2000),
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "unknown instrument 2000: registry holds 1024 instruments"
        );
    }

    #[test]
    fn test_capacity_exceeded_display() {
        let err = RejectError::CapacityExceeded {
            instrument: InstrumentId::new(5),
            side: Side::Sell,
            capacity: 1024,
        };
        assert!(err.to_string().contains("SELL"));
        assert!(err.to_string().contains("1024"));
    }
}
