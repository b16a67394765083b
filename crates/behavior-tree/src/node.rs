//! Lazily realized tree nodes.
//!
//! This module defines the [`Behavior`] trait, the recursive unit of a
//! behavior tree. A behavior is realized on every tick into a [`Tick`]
//! function plus an ordered list of children, so the shape of the tree is
//! computed on demand rather than fixed when the tree is built.
//!
//! Nodes hold no state of their own. A behavior that needs to remember
//! something between ticks captures it (e.g. in an `Arc<Mutex<_>>`) inside
//! the closures it hands out.

use std::fmt;
use std::sync::Arc;

use crate::{Result, Status};

/// A tick function: consumes the realized children and produces a status.
///
/// The children are not ticked yet; the tick function decides which of them
/// to tick, in which order, via [`Node::tick`].
pub type Tick = Arc<dyn Fn(&[Option<Node>]) -> Result<Status> + Send + Sync>;

/// What a node realizes into: an optional tick function and its children.
///
/// A `None` tick is a successful no-op. A `None` child is an absent node,
/// which composites report as an error.
pub type Realized = (Option<Tick>, Vec<Option<Node>>);

/// A behavior tree node that can be realized into a tick and its children.
pub trait Behavior: Send + Sync {
    /// Realizes this node for one tick.
    ///
    /// Called once per tick, so implementations may return a different tick
    /// function or different children each time.
    fn realize(&self) -> Realized;
}

/// Any `Fn() -> Realized` closure is a behavior.
impl<F> Behavior for F
where
    F: Fn() -> Realized + Send + Sync,
{
    #[inline]
    fn realize(&self) -> Realized {
        self()
    }
}

/// Cloneable handle to a [`Behavior`].
///
/// Cloning is cheap and yields the same node identity.
#[derive(Clone)]
pub struct Node(Arc<dyn Behavior>);

impl Node {
    /// Wraps a behavior in a node handle.
    pub fn new(behavior: impl Behavior + 'static) -> Self {
        Self(Arc::new(behavior))
    }

    /// Creates a node from a realize closure.
    pub fn from_fn<F>(realize: F) -> Self
    where
        F: Fn() -> Realized + Send + Sync + 'static,
    {
        Self::new(realize)
    }

    /// Realizes this node without ticking it.
    #[inline]
    pub fn realize(&self) -> Realized {
        self.0.realize()
    }

    /// Ticks this node once: realize, then invoke the tick with the children.
    ///
    /// A node realizing to no tick function succeeds without doing anything.
    /// This call has no side effects besides those of the tick function, and
    /// panics raised by tick functions are not caught here.
    pub fn tick(&self) -> Result<Status> {
        let (tick, children) = self.realize();
        match tick {
            Some(tick) => tick(&children),
            None => Ok(Status::Success),
        }
    }

    /// Returns `true` if both handles point at the same behavior.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
