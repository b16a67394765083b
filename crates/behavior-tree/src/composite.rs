//! Composite tick functions.
//!
//! A composite is a tick function defined purely by how it walks its
//! children. Both composites here tick children strictly left to right on the
//! caller's thread and stop at the first child that decides the outcome.
//! Side effects of children ticked before a short-circuit are not undone.
//!
//! - [`sequence`]: every child must succeed (short-circuited AND)
//! - [`selector`]: the first child to succeed wins (short-circuited OR)

use crate::{Error, Node, Result, Status};

/// Ticks children in order until one does not succeed.
///
/// # Semantics
///
/// - An absent child stops the sequence with [`Error::AbsentChild`]
/// - A child error stops the sequence and is returned unchanged
/// - A child returning `Failure` or `Running` stops the sequence with that status
/// - If every child returns `Success` (or there are none), returns `Success`
pub fn sequence(children: &[Option<Node>]) -> Result<Status> {
    for (index, child) in children.iter().enumerate() {
        let child = child.as_ref().ok_or(Error::AbsentChild {
            composite: "sequence",
            index,
        })?;
        match child.tick()? {
            Status::Success => continue,
            status => return Ok(status),
        }
    }
    Ok(Status::Success)
}

/// Ticks children in order until one does not fail.
///
/// # Semantics
///
/// - An absent child stops the selector with [`Error::AbsentChild`]
/// - A child error stops the selector and is returned unchanged
/// - A child returning `Success` or `Running` stops the selector with that status
/// - If every child returns `Failure` (or there are none), returns `Failure`
pub fn selector(children: &[Option<Node>]) -> Result<Status> {
    for (index, child) in children.iter().enumerate() {
        let child = child.as_ref().ok_or(Error::AbsentChild {
            composite: "selector",
            index,
        })?;
        match child.tick()? {
            Status::Failure => continue,
            status => return Ok(status),
        }
    }
    Ok(Status::Failure)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::Tick;

    type Log = Arc<Mutex<Vec<u32>>>;

    /// Leaf that records `id` into the log and returns `result`.
    fn record(log: &Log, id: u32, result: Result<Status>) -> Option<Node> {
        let log = Arc::clone(log);
        Some(Node::from_fn(move || {
            let log = Arc::clone(&log);
            let result = result.clone();
            let tick: Tick = Arc::new(move |_: &[Option<Node>]| {
                log.lock().unwrap().push(id);
                result.clone()
            });
            (Some(tick), Vec::new())
        }))
    }

    fn logged(log: &Log) -> Vec<u32> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn sequence_all_success_ticks_every_child_in_order() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Ok(Status::Success)),
            record(&log, 2, Ok(Status::Success)),
            record(&log, 3, Ok(Status::Success)),
        ];

        assert!(matches!(sequence(&children), Ok(Status::Success)));
        assert_eq!(logged(&log), vec![1, 2, 3]);
    }

    #[test]
    fn sequence_empty_succeeds() {
        assert!(matches!(sequence(&[]), Ok(Status::Success)));
    }

    #[test]
    fn sequence_stops_on_failure() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Ok(Status::Success)),
            record(&log, 2, Ok(Status::Failure)),
            record(&log, 99, Ok(Status::Success)), // Should not execute
        ];

        assert!(matches!(sequence(&children), Ok(Status::Failure)));
        assert_eq!(logged(&log), vec![1, 2]);
    }

    #[test]
    fn sequence_stops_on_running() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Ok(Status::Success)),
            record(&log, 2, Ok(Status::Running)),
            record(&log, 99, Ok(Status::Success)),
        ];

        assert!(matches!(sequence(&children), Ok(Status::Running)));
        assert_eq!(logged(&log), vec![1, 2]);
    }

    #[test]
    fn sequence_stops_on_absent_child() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Ok(Status::Success)),
            None,
            record(&log, 99, Ok(Status::Success)),
        ];

        let err = sequence(&children).unwrap_err();
        assert!(matches!(
            err,
            Error::AbsentChild {
                composite: "sequence",
                index: 1
            }
        ));
        assert_eq!(logged(&log), vec![1]);
    }

    #[test]
    fn sequence_propagates_child_error() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Err(Error::tick("sensor offline"))),
            record(&log, 99, Ok(Status::Success)),
        ];

        let err = sequence(&children).unwrap_err();
        assert_eq!(err.to_string(), "sensor offline");
        assert_eq!(logged(&log), vec![1]);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Ok(Status::Failure)),
            record(&log, 2, Ok(Status::Success)),
            record(&log, 99, Ok(Status::Failure)),
        ];

        assert!(matches!(selector(&children), Ok(Status::Success)));
        assert_eq!(logged(&log), vec![1, 2]);
    }

    #[test]
    fn selector_stops_on_running() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Ok(Status::Running)),
            record(&log, 99, Ok(Status::Success)),
        ];

        assert!(matches!(selector(&children), Ok(Status::Running)));
        assert_eq!(logged(&log), vec![1]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let log = Log::default();
        let children = vec![
            record(&log, 1, Ok(Status::Failure)),
            record(&log, 2, Ok(Status::Failure)),
        ];

        assert!(matches!(selector(&children), Ok(Status::Failure)));
        assert_eq!(logged(&log), vec![1, 2]);
    }

    #[test]
    fn selector_empty_fails() {
        assert!(matches!(selector(&[]), Ok(Status::Failure)));
    }

    #[test]
    fn selector_stops_on_absent_child() {
        let log = Log::default();
        let children = vec![record(&log, 1, Ok(Status::Failure)), None];

        let err = selector(&children).unwrap_err();
        assert!(matches!(
            err,
            Error::AbsentChild {
                composite: "selector",
                index: 1
            }
        ));
    }
}
