//! Status returned by a single tick.

use std::fmt;

/// The outcome of ticking a node once.
///
/// There are exactly three outcomes. `Running` means the work is incomplete
/// and the node must be ticked again later; it carries no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The node completed successfully.
    Success,

    /// The node completed without achieving its goal.
    ///
    /// This is an ordinary outcome, not an error.
    Failure,

    /// The node has not finished yet and expects another tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps `Success` and `Failure`. `Running` is left as is.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Running => "running",
        };
        f.write_str(label)
    }
}
