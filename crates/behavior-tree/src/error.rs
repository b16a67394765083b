//! Error type shared by tick functions, composites, and tickers.
//!
//! Callers tell the different ways a ticker can end apart by matching on the
//! variant: a clean stop yields no error at all, cancellation and deadlines
//! have their own variants, and everything produced by tick functions is
//! either [`Error::Tick`], [`Error::AbsentChild`] or [`Error::Panic`].
use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Boxed application error accepted by [`Error::tick`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("{composite} cannot tick absent child at index {index}")]
    AbsentChild {
        composite: &'static str,
        index: usize,
    },

    #[error("recovered from panic ({payload_type}): {message}")]
    Panic {
        payload_type: &'static str,
        message: String,
    },

    #[error("ticker context canceled")]
    Canceled,

    #[error("ticker deadline exceeded")]
    DeadlineExceeded,

    #[error(transparent)]
    Tick(Arc<dyn StdError + Send + Sync>),
}

impl Error {
    /// Wraps an application error returned from a tick function.
    pub fn tick(err: impl Into<BoxError>) -> Self {
        Error::Tick(Arc::from(err.into()))
    }

    /// Returns the application error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Error::Tick(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Returns `true` if the application error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Error::Canceled | Error::DeadlineExceeded)
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Error::Panic { .. })
    }

    /// Converts a payload caught by `catch_unwind` into [`Error::Panic`].
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let (payload_type, message) = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            ("&str", (*msg).to_string())
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            ("String", msg.clone())
        } else {
            ("unknown", "non-string panic payload".to_string())
        };
        Error::Panic {
            payload_type,
            message,
        }
    }
}
