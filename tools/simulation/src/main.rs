use simulation::metrics::RunMetrics;
use simulation::runner::{run, RunConfig};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = RunConfig::default();
    tracing::info!(
        run_duration_secs = config.run_duration.as_secs(),
        instruments = config.engine.instruments,
        capacity_per_side = config.engine.capacity_per_side,
        "starting matching engine simulation"
    );

    let metrics: RunMetrics = run(config).await;

    tracing::info!(
        orders = metrics.orders_submitted,
        rejected = metrics.orders_rejected(),
        trades = metrics.trades_executed,
        matched_quantity = metrics.matched_quantity,
        orders_per_second = metrics.orders_per_second(),
        "simulation finished"
    );

    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
