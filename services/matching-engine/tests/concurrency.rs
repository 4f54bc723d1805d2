//! Concurrency tests
//!
//! The submission path is shared by multiple threads while a matcher runs;
//! sequence uniqueness, slot uniqueness, and quantity conservation must
//! hold throughout.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use matching_engine::{Engine, EngineConfig};
use types::ids::InstrumentId;
use types::numeric::Price;
use types::order::{NewOrder, Side};

const TS: i64 = 1708123456789000000;

fn order(instrument: u32, side: Side, quantity: u64, price: u64) -> NewOrder {
    NewOrder {
        instrument: InstrumentId::new(instrument),
        side,
        quantity,
        price: Price::from_u64(price),
    }
}

#[test]
fn concurrent_submissions_get_unique_sequences() {
    let engine = Arc::new(Engine::new(EngineConfig {
        instruments: 4,
        capacity_per_side: 1024,
    }));

    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut sequences = Vec::new();
                for i in 0..200u64 {
                    let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                    let accepted = engine
                        .submit_order(order(worker % 4, side, 1, 50))
                        .unwrap();
                    sequences.push(accepted.sequence);
                }
                sequences
            })
        })
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        let sequences = handle.join().unwrap();
        // Per-thread view is strictly increasing.
        assert!(sequences.windows(2).all(|w| w[0] < w[1]));
        all.extend(sequences);
    }

    let unique: HashSet<u64> = all.iter().copied().collect();
    assert_eq!(unique.len(), 800, "sequence numbers must never repeat");
}

#[test]
fn concurrent_claims_never_share_a_slot() {
    let capacity = 64;
    let engine = Arc::new(Engine::new(EngineConfig {
        instruments: 1,
        capacity_per_side: capacity,
    }));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut accepted = Vec::new();
                let mut rejected = 0usize;
                for _ in 0..32 {
                    match engine.submit_order(order(0, Side::Sell, 1, 10)) {
                        Ok(handle) => accepted.push(handle.slot),
                        Err(_) => rejected += 1,
                    }
                }
                (accepted, rejected)
            })
        })
        .collect();

    let mut slots = Vec::new();
    let mut rejected_total = 0;
    for handle in handles {
        let (accepted, rejected) = handle.join().unwrap();
        slots.extend(accepted);
        rejected_total += rejected;
    }

    // 128 claims against 64 slots: exactly the capacity is accepted and
    // every accepted claim holds a distinct slot.
    assert_eq!(slots.len(), capacity);
    assert_eq!(rejected_total, 128 - capacity);
    let unique: HashSet<usize> = slots.iter().copied().collect();
    assert_eq!(unique.len(), capacity);
}

#[test]
fn matching_while_submitting_conserves_quantity() {
    let engine = Arc::new(Engine::new(EngineConfig {
        instruments: 1,
        capacity_per_side: 2048,
    }));
    let instrument = InstrumentId::new(0);

    let submitters: Vec<_> = (0..2u64)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for i in 0..500u64 {
                    let side = if (worker + i) % 2 == 0 { Side::Buy } else { Side::Sell };
                    // Prices straddle so crosses keep appearing mid-run.
                    let price = 40 + ((worker * 7 + i) % 20);
                    engine.submit_order(order(0, side, 1 + i % 5, price)).unwrap();
                }
            })
        })
        .collect();

    let matcher = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            let mut matched = 0u64;
            for _ in 0..200 {
                let trades = engine.run_matching_pass(instrument, TS).unwrap();
                matched += trades.iter().map(|t| t.quantity).sum::<u64>();
                thread::yield_now();
            }
            matched
        })
    };

    for submitter in submitters {
        submitter.join().unwrap();
    }
    let mut matched = matcher.join().unwrap();

    // Drain any cross left after the submitters finished.
    let trades = engine.run_matching_pass(instrument, TS).unwrap();
    matched += trades.iter().map(|t| t.quantity).sum::<u64>();

    let book = engine.book(instrument).unwrap();
    let buy_filled: u64 = book.buys().iter().map(|o| o.filled()).sum();
    let sell_filled: u64 = book.sells().iter().map(|o| o.filled()).sum();

    assert_eq!(buy_filled, matched);
    assert_eq!(sell_filled, matched);

    // Fixed point: nothing left on the book crosses.
    for buy in book.buys().iter().filter(|o| o.is_live()) {
        for sell in book.sells().iter().filter(|o| o.is_live()) {
            assert!(buy.price < sell.price);
        }
    }
}

#[test]
fn remaining_quantity_is_monotonic_under_matching() {
    let engine = Arc::new(Engine::new(EngineConfig {
        instruments: 1,
        capacity_per_side: 256,
    }));
    let instrument = InstrumentId::new(0);

    let watched = engine.submit_order(order(0, Side::Sell, 100, 50)).unwrap();

    let matcher = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for _ in 0..50 {
                engine.run_matching_pass(instrument, TS).unwrap();
                thread::yield_now();
            }
        })
    };

    let mut last = engine.remaining_quantity(&watched).unwrap();
    for i in 0..50u64 {
        engine.submit_order(order(0, Side::Buy, 2, 50 + i % 3)).unwrap();
        let now = engine.remaining_quantity(&watched).unwrap();
        assert!(now <= last, "remaining quantity must never increase");
        last = now;
    }

    matcher.join().unwrap();
}
