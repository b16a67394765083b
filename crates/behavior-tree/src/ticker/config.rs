//! Ticker configuration and builder.
use std::env;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::{PeriodicTicker, StopOnFailureTicker, Ticker};
use crate::Node;

/// Settings shared by all ticker kinds.
#[derive(Clone, Debug)]
pub struct TickerConfig {
    /// Time between two root ticks. Must be non-zero.
    pub interval: Duration,
    /// Exit cleanly on the first `Failure` of the root.
    pub stop_on_failure: bool,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            stop_on_failure: false,
        }
    }
}

impl TickerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_TICK_INTERVAL_MS` - Tick interval in milliseconds (default: 100, zero is ignored)
    /// - `BT_STOP_ON_FAILURE` - Exit on the first root failure (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(millis) = read_env::<u64>("BT_TICK_INTERVAL_MS").filter(|ms| *ms > 0) {
            config.interval = Duration::from_millis(millis);
        }
        if let Some(stop) = read_env_bool("BT_STOP_ON_FAILURE") {
            config.stop_on_failure = stop;
        }

        config
    }
}

/// Builder for tickers with optional context, deadline, and stop-on-failure mode.
///
/// # Example
///
/// ```rust,ignore
/// let ticker = TickerBuilder::new(tree)
///     .context(shutdown.clone())
///     .interval(Duration::from_millis(50))
///     .stop_on_failure(true)
///     .spawn();
///
/// ticker.done().await;
/// ```
pub struct TickerBuilder {
    node: Node,
    context: Option<CancellationToken>,
    config: TickerConfig,
    deadline: Option<Instant>,
}

impl TickerBuilder {
    /// Start a builder for `node` with the default config.
    ///
    /// Without a [`context`](Self::context), the ticker gets a private token
    /// nobody else holds: it cannot be canceled from outside and only ends
    /// via [`Ticker::stop`], a deadline, or a root error.
    pub fn new(node: Node) -> Self {
        Self {
            node,
            context: None,
            config: TickerConfig::default(),
            deadline: None,
        }
    }

    /// Set the cancellation token the ticker listens on.
    pub fn context(mut self, token: CancellationToken) -> Self {
        self.context = Some(token);
        self
    }

    /// Override ticker configuration
    pub fn config(mut self, config: TickerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    pub fn stop_on_failure(mut self, enable: bool) -> Self {
        self.config.stop_on_failure = enable;
        self
    }

    /// Exit with [`Error::DeadlineExceeded`](crate::Error::DeadlineExceeded) once `at` passes.
    pub fn deadline(mut self, at: Instant) -> Self {
        self.deadline = Some(at);
        self
    }

    /// Spawn the ticker on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if the interval is zero, or if called outside a tokio runtime.
    pub fn spawn(self) -> Box<dyn Ticker> {
        let ctx = self.context.unwrap_or_else(CancellationToken::new);
        let TickerConfig {
            interval,
            stop_on_failure,
        } = self.config;

        if stop_on_failure {
            Box::new(StopOnFailureTicker::spawn(
                ctx,
                interval,
                self.deadline,
                self.node,
            ))
        } else {
            Box::new(PeriodicTicker::spawn(
                ctx,
                interval,
                self.deadline,
                self.node,
            ))
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
