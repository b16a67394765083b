//! Decorator tick functions.
//!
//! Decorators wrap a single tick function and modify its result. They leave
//! `Running` and errors alone, so wrapping never hides in-progress work or a
//! genuine failure to evaluate.

use std::sync::Arc;

use crate::{Node, Status, Tick};

/// Inverts the result of the wrapped tick (logical NOT).
///
/// - `Success` becomes `Failure`
/// - `Failure` becomes `Success`
/// - `Running` and errors pass through
pub fn not(tick: Tick) -> Tick {
    Arc::new(move |children: &[Option<Node>]| tick(children).map(Status::invert))
}

/// Reports `Success` whether the wrapped tick succeeded or failed.
///
/// Useful for optional steps that shouldn't cause a sequence to fail.
/// `Running` and errors pass through.
pub fn always_succeed(tick: Tick) -> Tick {
    Arc::new(move |children: &[Option<Node>]| {
        tick(children).map(|status| match status {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => Status::Success,
        })
    })
}
