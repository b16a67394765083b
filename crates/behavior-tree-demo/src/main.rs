//! Patrol robot driven by a periodic ticker.
//!
//! The robot visits waypoints while its battery lasts and recharges when it
//! runs low. Once every waypoint is visited the root fails; with
//! `BT_STOP_ON_FAILURE=true` that ends the ticker cleanly, otherwise the
//! robot idles until Ctrl-C.
//!
//! Environment variables (also read from `.env`):
//! - `BT_TICK_INTERVAL_MS`, `BT_STOP_ON_FAILURE` - see [`TickerConfig::from_env`]
//! - `DEMO_WAYPOINTS` - number of waypoints to visit (default: 5)
//! - `RUST_LOG` - log filter (default: info)
mod robot;

use std::env;

use anyhow::Result;
use behavior_tree::{Error, TickerBuilder, TickerConfig};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use robot::Robot;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TickerConfig::from_env();
    let waypoints = env::var("DEMO_WAYPOINTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    let robot = Robot::new(waypoints);
    let shutdown = CancellationToken::new();

    info!(
        interval = ?config.interval,
        stop_on_failure = config.stop_on_failure,
        waypoints,
        "starting patrol"
    );

    let ticker = TickerBuilder::new(robot.tree())
        .context(shutdown.clone())
        .config(config)
        .spawn();

    tokio::select! {
        _ = ticker.done() => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("interrupt received, shutting down");
            shutdown.cancel();
            ticker.done().await;
        }
    }

    let stats = ticker.stats();
    info!(
        ticks = stats.ticks(),
        successes = stats.successes(),
        failures = stats.failures(),
        running = stats.running(),
        visited = robot.visited(),
        "patrol finished"
    );

    match ticker.err() {
        None | Some(Error::Canceled) => Ok(()),
        Some(err) => {
            error!(%err, "patrol aborted");
            Err(err.into())
        }
    }
}
