//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing a realize closure that hands out
//! `(Some(Arc::new(composite::sequence)), vec![Some(a.clone()), ...])` on every
//! tick, you can write `sequence(vec![a, b])`.
//!
//! Every helper produces a node whose shape is fixed at construction; write a
//! [`Node::from_fn`] closure directly when the shape must change per tick.

use std::sync::Arc;

use crate::{Node, Result, Status, Tick, composite, decorator};

/// Creates a node with a fixed tick function and children.
pub fn node(tick: Tick, children: Vec<Node>) -> Node {
    let children: Vec<Option<Node>> = children.into_iter().map(Some).collect();
    Node::from_fn(move || (Some(Arc::clone(&tick)), children.clone()))
}

/// Creates a childless node from a tick closure.
#[inline]
pub fn leaf<F>(f: F) -> Node
where
    F: Fn() -> Result<Status> + Send + Sync + 'static,
{
    node(Arc::new(move |_: &[Option<Node>]| f()), Vec::new())
}

/// Creates a sequence node.
///
/// Shorthand for `node(Arc::new(composite::sequence), children)`.
#[inline]
pub fn sequence(children: Vec<Node>) -> Node {
    node(Arc::new(composite::sequence), children)
}

/// Creates a selector node.
///
/// Shorthand for `node(Arc::new(composite::selector), children)`.
#[inline]
pub fn selector(children: Vec<Node>) -> Node {
    node(Arc::new(composite::selector), children)
}

/// Wraps the tick function of `child` with [`decorator::not`].
pub fn not(child: Node) -> Node {
    decorate(child, decorator::not)
}

/// Wraps the tick function of `child` with [`decorator::always_succeed`].
pub fn always_succeed(child: Node) -> Node {
    decorate(child, decorator::always_succeed)
}

/// Realizes `child` on every tick and wraps its tick function with `wrap`.
///
/// A child without a tick function is left untouched.
pub(crate) fn decorate<W>(child: Node, wrap: W) -> Node
where
    W: Fn(Tick) -> Tick + Send + Sync + 'static,
{
    Node::from_fn(move || {
        let (tick, children) = child.realize();
        (tick.map(&wrap), children)
    })
}
