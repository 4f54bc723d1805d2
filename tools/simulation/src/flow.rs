//! Random order flow
//!
//! Generates synthetic submissions with a deterministic seeded RNG so runs
//! are reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::InstrumentId;
use types::numeric::Price;
use types::order::{NewOrder, Side};

/// Configuration for the random order flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Instruments to spread submissions across (indices `0..instruments`)
    pub instruments: u32,
    /// Minimum order quantity
    pub min_quantity: u64,
    /// Maximum order quantity
    pub max_quantity: u64,
    /// Lower price bound
    pub min_price: Decimal,
    /// Upper price bound
    pub max_price: Decimal,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            instruments: 1024,
            min_quantity: 1,
            max_quantity: 1000,
            min_price: Decimal::from(10),
            max_price: Decimal::from(500),
        }
    }
}

/// Seeded random order generator.
pub struct OrderFlow {
    pub config: FlowConfig,
    pub orders_generated: usize,
    rng: ChaCha8Rng,
}

impl OrderFlow {
    /// Create a flow with a deterministic seed.
    pub fn new(config: FlowConfig, seed: u64) -> Self {
        Self {
            config,
            orders_generated: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate the next submission: uniform instrument, 50/50 side,
    /// uniform quantity, uniform price rounded to 2 dp.
    pub fn next_order(&mut self) -> NewOrder {
        let side = if self.rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let instrument = InstrumentId::new(self.rng.gen_range(0..self.config.instruments));
        let quantity = self
            .rng
            .gen_range(self.config.min_quantity..=self.config.max_quantity);

        let min_f = self.config.min_price.to_f64().unwrap_or(10.0);
        let max_f = self.config.max_price.to_f64().unwrap_or(500.0);
        let price_f: f64 = self.rng.gen_range(min_f..=max_f);
        let price = Decimal::from_f64(price_f)
            .unwrap_or(self.config.min_price)
            .round_dp(2);

        self.orders_generated += 1;
        NewOrder {
            instrument,
            side,
            quantity,
            price: Price::new(price),
        }
    }
}
