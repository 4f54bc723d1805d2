//! Identifier types for engine entities
//!
//! Instruments are addressed by a bounded integer index; trades carry a
//! UUID v7 for time-sortable ordering, enabling chronological queries over
//! exported trade streams.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Index of a tradable instrument.
///
/// The registry holds a fixed number of instruments; the index is validated
/// against that bound at submission time, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(u32);

impl InstrumentId {
    /// Create an instrument id from its registry index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Index into the registry.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Raw integer value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl From<u32> for InstrumentId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a trade
///
/// Uses UUID v7 for time-based sorting alongside the global trade sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(Uuid);

impl TradeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TradeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
