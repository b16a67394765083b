//! Background drivers that tick a root node periodically.
//!
//! - [`PeriodicTicker`] ticks until stopped, canceled, or the first error
//! - [`StopOnFailureTicker`] additionally exits, without an error, on the
//!   first `Failure` of the root
//! - [`TickerBuilder`] picks between them from a [`TickerConfig`]
//!
//! After [`Ticker::done`] resolves, [`Ticker::err`] tells how the ticker ended:
//! `None` for a clean stop, [`Error::Canceled`] or [`Error::DeadlineExceeded`]
//! for the context, anything else for a failed tick.

mod config;
mod periodic;
mod stats;
mod stop_on_failure;

use std::sync::Arc;

use async_trait::async_trait;

use crate::Error;

pub use config::{TickerBuilder, TickerConfig};
pub use periodic::PeriodicTicker;
pub use stats::TickerStats;
pub use stop_on_failure::StopOnFailureTicker;

/// Handle to a running ticker.
#[async_trait]
pub trait Ticker: Send + Sync {
    /// Resolves once the ticker has fully stopped and its error is published.
    ///
    /// Any number of callers may wait concurrently.
    async fn done(&self);

    /// Returns `true` once [`Ticker::done`] would resolve immediately.
    fn is_done(&self) -> bool;

    /// Returns the terminal error.
    ///
    /// `None` until the ticker is done, and `None` after a clean stop.
    fn err(&self) -> Option<Error>;

    /// Requests shutdown and returns immediately.
    ///
    /// Idempotent; only the first call has an effect. Wait on
    /// [`Ticker::done`] to observe completion.
    fn stop(&self);

    /// Shared tick counters of this ticker.
    fn stats(&self) -> Arc<TickerStats>;
}
