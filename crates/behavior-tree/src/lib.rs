//! Lazily evaluated behavior trees with a periodic background driver.
//!
//! A tree is built from [`Node`]s. Every tick, a node is realized into a
//! [`Tick`] function and an ordered list of children; the tick function
//! decides how (and whether) to tick those children. Nothing is evaluated
//! until someone ticks the root, either once via [`Node::tick`] or
//! repeatedly via a [`Ticker`].
//!
//! - **Lazy**: the shape of the tree is recomputed on every tick
//! - **Three outcomes**: `Success`, `Failure`, and `Running`
//! - **Errors propagate**: composites never swallow a child's error
//! - **Cooperative shutdown**: tickers observe stop and cancellation between ticks
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes, [`Node`]: cloneable handle
//! - [`Status`]: Success, Failure, or Running
//! - Composite tick functions: [`sequence`], [`selector`]
//! - Decorator tick functions: [`decorator::not`], [`decorator::always_succeed`]
//! - [`builder`]: shorthand constructors for fixed-shape trees
//! - [`ticker`]: [`PeriodicTicker`], [`StopOnFailureTicker`], [`TickerBuilder`]

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod node;
pub mod status;
pub mod ticker;

// Re-export core types for ergonomic API
pub use composite::{selector, sequence};
pub use error::{BoxError, Error, Result};
pub use node::{Behavior, Node, Realized, Tick};
pub use status::Status;
pub use ticker::{
    PeriodicTicker, StopOnFailureTicker, Ticker, TickerBuilder, TickerConfig, TickerStats,
};
