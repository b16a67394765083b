//! Tick counters for a running ticker.

use std::sync::atomic::{AtomicU64, Ordering};

use super::stop_on_failure::ExitOnFailure;
use crate::{Result, Status};

/// Per-ticker counters, updated by the worker after every root tick.
///
/// Uses atomics for lock-free access across threads.
#[derive(Debug, Default)]
pub struct TickerStats {
    /// Total number of root ticks performed
    ticks: AtomicU64,

    successes: AtomicU64,
    failures: AtomicU64,
    running: AtomicU64,

    /// Ticks that returned an error or panicked
    errors: AtomicU64,
}

impl TickerStats {
    /// Creates a new empty stats tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one root tick.
    pub(crate) fn record(&self, result: &Result<Status>) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
        let counter = match result {
            Ok(Status::Success) => &self.successes,
            Ok(Status::Failure) => &self.failures,
            Ok(Status::Running) => &self.running,
            // Stop-on-failure tickers report plain failures through this sentinel.
            Err(err) if err.is::<ExitOnFailure>() => &self.failures,
            Err(_) => &self.errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn running(&self) -> u64 {
        self.running.load(Ordering::Relaxed)
    }

    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}
