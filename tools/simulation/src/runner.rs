//! Run scheduling
//!
//! Spawns the two engine-facing activities as tokio tasks — a submission
//! loop and a matching sweep — plus a reporter draining the trade stream.
//! A watch channel carries the stop signal; both loops observe it between
//! units of work, so shutdown drains in-flight work but leaves any cross
//! that appears after the final sweep unmatched.

use std::sync::Arc;
use std::time::Duration;

use matching_engine::{Engine, EngineConfig};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, Instant};
use tracing::{info, warn};
use types::ids::InstrumentId;
use types::trade::TradeReport;

use crate::flow::{FlowConfig, OrderFlow};
use crate::metrics::{submit_recorded, RunMetrics};

/// Full configuration for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Wall-clock duration before the stop signal fires.
    pub run_duration: Duration,
    /// Cadence of the submission loop.
    pub submit_interval: Duration,
    /// Cadence of the matching sweep over all instruments.
    pub matching_interval: Duration,
    /// Seed for the order flow RNG.
    pub flow_seed: u64,
    pub flow: FlowConfig,
    pub engine: EngineConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            run_duration: Duration::from_secs(15),
            submit_interval: Duration::from_millis(10),
            matching_interval: Duration::from_millis(100),
            flow_seed: 42,
            flow: FlowConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

/// Execute one full run: spawn the activities, sleep for the configured
/// duration, signal stop, join everything, and return merged metrics.
pub async fn run(config: RunConfig) -> RunMetrics {
    let engine = Arc::new(Engine::new(config.engine.clone()));
    let flow = OrderFlow::new(config.flow.clone(), config.flow_seed);

    let (stop_tx, stop_rx) = watch::channel(false);
    let (trade_tx, trade_rx) = mpsc::unbounded_channel();

    let started = Instant::now();
    let submitter = tokio::spawn(submission_loop(
        Arc::clone(&engine),
        flow,
        config.submit_interval,
        stop_rx.clone(),
    ));
    let matcher = tokio::spawn(matching_loop(
        Arc::clone(&engine),
        config.matching_interval,
        stop_rx,
        trade_tx,
    ));
    let reporter = tokio::spawn(report_loop(trade_rx));

    tokio::time::sleep(config.run_duration).await;
    // Both loops stop after their current unit of work.
    let _ = stop_tx.send(true);

    let mut metrics = submitter.await.expect("submission task panicked");
    let matcher_metrics = matcher.await.expect("matching task panicked");
    let reported = reporter.await.expect("reporter task panicked");

    metrics.merge(&matcher_metrics);
    metrics.elapsed_ns = started.elapsed().as_nanos() as u64;

    info!(
        orders = metrics.orders_submitted,
        rejected = metrics.orders_rejected(),
        trades = metrics.trades_executed,
        reported,
        "run complete"
    );

    metrics
}

/// Submission activity: one synthetic order per tick until stopped.
async fn submission_loop(
    engine: Arc<Engine>,
    mut flow: OrderFlow,
    period: Duration,
    mut stop: watch::Receiver<bool>,
) -> RunMetrics {
    let mut metrics = RunMetrics::new();
    let mut ticker = interval(period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let order = flow.next_order();
                if let Err(err) = submit_recorded(&engine, &mut metrics, order) {
                    // First few rejections are worth seeing; the counters
                    // carry the rest.
                    if metrics.orders_rejected() <= 3 {
                        warn!(%err, "submission rejected");
                    }
                }
            }
            _ = stop.changed() => break,
        }
    }

    metrics
}

/// Matching activity: sweep every instrument once per tick until stopped.
async fn matching_loop(
    engine: Arc<Engine>,
    period: Duration,
    mut stop: watch::Receiver<bool>,
    trades: mpsc::UnboundedSender<TradeReport>,
) -> RunMetrics {
    let mut metrics = RunMetrics::new();
    let mut ticker = interval(period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
                for index in 0..engine.instrument_count() {
                    let instrument = InstrumentId::new(index as u32);
                    match engine.run_matching_pass(instrument, timestamp) {
                        Ok(executed) => {
                            for trade in executed {
                                metrics.record_trade(&trade);
                                let _ = trades.send(trade);
                            }
                        }
                        Err(err) => warn!(%err, "matching pass skipped"),
                    }
                }
            }
            _ = stop.changed() => break,
        }
    }

    metrics
}

/// Reporter: renders the observable trade stream, one line per cross.
async fn report_loop(mut trades: mpsc::UnboundedReceiver<TradeReport>) -> u64 {
    let mut reported = 0u64;
    while let Some(trade) = trades.recv().await {
        info!(
            instrument = %trade.instrument,
            quantity = trade.quantity,
            price = %trade.price,
            trade_sequence = trade.sequence,
            "matched trade"
        );
        reported += 1;
    }
    reported
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_cadence() {
        let config = RunConfig::default();
        assert_eq!(config.run_duration, Duration::from_secs(15));
        assert_eq!(config.submit_interval, Duration::from_millis(10));
        assert_eq!(config.matching_interval, Duration::from_millis(100));
        assert_eq!(config.engine.instruments, 1024);
        assert_eq!(config.engine.capacity_per_side, 1024);
    }
}
