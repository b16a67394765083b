//! Periodic ticker: ticks a root node on a fixed interval in the background.
//!
//! # Lifecycle
//!
//! ```text
//! spawn ──► running ──► stopped   (Ticker::stop, no error)
//!              │    ──► canceled  (context token, Error::Canceled)
//!              │    ──► expired   (deadline, Error::DeadlineExceeded)
//!              └──────► faulted   (tick error or panic)
//!                            │
//!                            ▼
//!          stop timer, release context, publish error, signal done
//! ```
//!
//! ## Rules
//! - Exactly one tick of the root is in flight at a time
//! - Stop and cancellation are observed **between** ticks only; a tick that
//!   never returns delays shutdown indefinitely
//! - Ticks run inline on the worker task, so a slow tick occupies one
//!   runtime worker thread for its whole duration
//! - The terminal error is written once, before `done` fires

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::{Ticker, TickerStats};
use crate::{Error, Node, Result, Status};

/// State shared between the handle and the background worker.
struct Shared {
    stop: CancellationToken,
    stop_requested: AtomicBool,
    done: CancellationToken,
    err: Mutex<Option<Error>>,
    stats: Arc<TickerStats>,
}

impl Shared {
    /// Signals the worker to stop. Returns `false` if stop was already requested.
    fn request_stop(&self) -> bool {
        if self.stop_requested.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.stop.cancel();
        true
    }
}

/// Ticks a root [`Node`] every `interval` until stopped, canceled, or faulted.
///
/// Dropping the handle does not stop the background worker; call
/// [`Ticker::stop`] or cancel the context token.
pub struct PeriodicTicker {
    shared: Arc<Shared>,
}

impl PeriodicTicker {
    /// Spawns a ticker on the current tokio runtime.
    ///
    /// The first tick happens one `interval` after construction. The worker
    /// listens on a child of `ctx`, so canceling `ctx` ends the ticker with
    /// [`Error::Canceled`] while the ticker never cancels `ctx` itself.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero, or if called outside a tokio runtime.
    pub fn new(ctx: CancellationToken, interval: Duration, node: Node) -> Self {
        Self::spawn(ctx, interval, None, node)
    }

    pub(crate) fn spawn(
        ctx: CancellationToken,
        interval: Duration,
        deadline: Option<Instant>,
        node: Node,
    ) -> Self {
        assert!(!interval.is_zero(), "ticker interval must be positive");

        let shared = Arc::new(Shared {
            stop: CancellationToken::new(),
            stop_requested: AtomicBool::new(false),
            done: CancellationToken::new(),
            err: Mutex::new(None),
            stats: Arc::new(TickerStats::new()),
        });

        let worker = TickerWorker {
            ctx: ctx.child_token(),
            interval,
            deadline,
            node,
            shared: Arc::clone(&shared),
        };
        tokio::spawn(worker.run());

        Self { shared }
    }
}

#[async_trait]
impl Ticker for PeriodicTicker {
    async fn done(&self) {
        self.shared.done.cancelled().await;
    }

    fn is_done(&self) -> bool {
        self.shared.done.is_cancelled()
    }

    fn err(&self) -> Option<Error> {
        self.shared
            .err
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn stop(&self) {
        if self.shared.request_stop() {
            debug!("ticker stop requested");
        }
    }

    fn stats(&self) -> Arc<TickerStats> {
        Arc::clone(&self.shared.stats)
    }
}

/// Background task owning the root node and the interval timer.
struct TickerWorker {
    ctx: CancellationToken,
    interval: Duration,
    deadline: Option<Instant>,
    node: Node,
    shared: Arc<Shared>,
}

impl TickerWorker {
    /// Main worker loop.
    async fn run(self) {
        let TickerWorker {
            ctx,
            interval,
            deadline,
            node,
            shared,
        } = self;

        debug!(?interval, "ticker started");

        let mut timer = time::interval_at(Instant::now() + interval, interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let expired = async move {
            match deadline {
                Some(at) => time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(expired);

        let err = loop {
            tokio::select! {
                _ = ctx.cancelled() => break Some(Error::Canceled),
                _ = &mut expired => break Some(Error::DeadlineExceeded),
                _ = shared.stop.cancelled() => break None,
                _ = timer.tick() => {
                    if let Err(err) = tick_root(&node, &shared.stats) {
                        break Some(err);
                    }
                }
            }
        };

        drop(timer);
        ctx.cancel();
        shared.request_stop();

        match &err {
            None => info!(ticks = shared.stats.ticks(), "ticker stopped"),
            Some(err) if err.is_canceled() => warn!(%err, "ticker canceled"),
            Some(err) => warn!(%err, ticks = shared.stats.ticks(), "ticker exited on error"),
        }

        *shared.err.lock().unwrap_or_else(PoisonError::into_inner) = err;
        shared.done.cancel();
    }
}

/// Ticks the root once, converting a panic into [`Error::Panic`].
fn tick_root(node: &Node, stats: &TickerStats) -> Result<Status> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| node.tick()))
        .unwrap_or_else(|payload| Err(Error::from_panic(payload)));
    stats.record(&result);
    trace!(?result, "ticked root");
    result
}
