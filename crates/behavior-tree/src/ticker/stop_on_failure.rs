//! Ticker that treats a plain `Failure` of the root as a clean exit.
//!
//! The root's tick function is wrapped so that `Ok(Status::Failure)` becomes
//! an error of the private [`ExitOnFailure`] type. The underlying
//! [`PeriodicTicker`] exits on it like on any other error, and
//! [`StopOnFailureTicker::err`](Ticker::err) filters it back out by type.
//! Errors returned by the tree itself still come through unchanged.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::{PeriodicTicker, Ticker, TickerStats};
use crate::builder::decorate;
use crate::{Error, Node, Status, Tick};

/// Marker error used to end a [`StopOnFailureTicker`]; never returned to callers.
#[derive(Debug, Error)]
#[error("root tick failed")]
pub(crate) struct ExitOnFailure;

/// Runs like [`PeriodicTicker`] until the root first returns `Failure`.
pub struct StopOnFailureTicker {
    inner: PeriodicTicker,
}

impl StopOnFailureTicker {
    /// Spawns a stop-on-failure ticker on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Same conditions as [`PeriodicTicker::new`].
    pub fn new(ctx: CancellationToken, interval: Duration, node: Node) -> Self {
        Self::spawn(ctx, interval, None, node)
    }

    pub(crate) fn spawn(
        ctx: CancellationToken,
        interval: Duration,
        deadline: Option<Instant>,
        node: Node,
    ) -> Self {
        Self {
            inner: PeriodicTicker::spawn(ctx, interval, deadline, decorate(node, exit_on_failure)),
        }
    }
}

fn exit_on_failure(tick: Tick) -> Tick {
    Arc::new(move |children: &[Option<Node>]| match tick(children) {
        Ok(Status::Failure) => Err(Error::tick(ExitOnFailure)),
        result => result,
    })
}

#[async_trait]
impl Ticker for StopOnFailureTicker {
    async fn done(&self) {
        self.inner.done().await;
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn err(&self) -> Option<Error> {
        self.inner.err().filter(|err| !err.is::<ExitOnFailure>())
    }

    fn stop(&self) {
        self.inner.stop();
    }

    fn stats(&self) -> Arc<TickerStats> {
        self.inner.stats()
    }
}
