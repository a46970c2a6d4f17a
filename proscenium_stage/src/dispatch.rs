// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch routes: capture → target → bubble sequences over the actor tree.
//!
//! A route is computed once from the ancestor chain of the target, before any
//! listener runs. Listeners may then reparent or destroy actors without
//! changing which actors the current event visits.
//!
//! - Capture entries run root → target (the target included).
//! - One target entry.
//! - Bubble entries run target.parent → root, only for bubbling events.
//!
//! [`run`] walks a route and stops at the first [`Outcome::Stop`].
//!
//! ```
//! use proscenium_actor::{Actor, ActorTree};
//! use proscenium_stage::dispatch::{self, Outcome, Phase};
//!
//! let mut tree = ActorTree::new();
//! let root = tree.insert_group(Actor::default());
//! let leaf = tree.insert_leaf(Actor::default());
//! tree.add_child(root, leaf).unwrap();
//!
//! let route = dispatch::route(&tree, leaf, true);
//! let mut seen = Vec::new();
//! let stopped_at = dispatch::run(&route, &mut seen, |d, seen| {
//!     seen.push((d.phase, d.actor));
//!     Outcome::Continue
//! });
//! assert_eq!(stopped_at, None);
//! assert_eq!(seen, [
//!     (Phase::Capture, root), (Phase::Capture, leaf),
//!     (Phase::Target, leaf),
//!     (Phase::Bubble, root),
//! ]);
//! ```

use proscenium_actor::{ActorId, ActorTree};
use smallvec::SmallVec;

/// Propagation phase of a dispatch entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Root → target, capture listeners only.
    Capture,
    /// The target itself.
    Target,
    /// Target's parent → root.
    Bubble,
}

/// One step of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatch {
    /// The actor whose listeners run at this step.
    pub actor: ActorId,
    /// The phase of this step.
    pub phase: Phase,
}

impl Dispatch {
    /// A capture step.
    pub const fn capture(actor: ActorId) -> Self {
        Self {
            actor,
            phase: Phase::Capture,
        }
    }

    /// The target step.
    pub const fn target(actor: ActorId) -> Self {
        Self {
            actor,
            phase: Phase::Target,
        }
    }

    /// A bubble step.
    pub const fn bubble(actor: ActorId) -> Self {
        Self {
            actor,
            phase: Phase::Bubble,
        }
    }
}

/// Handler verdict after one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Go on to the next step.
    Continue,
    /// Abort the route here.
    Stop,
}

/// A route; most actor trees are shallow enough to stay inline.
pub type Route = SmallVec<[Dispatch; 16]>;

/// Build the route for an event aimed at `target`.
///
/// A stale `target` yields an empty route.
pub fn route(tree: &ActorTree, target: ActorId, bubbles: bool) -> Route {
    let path = tree.path_to_root(target);
    let mut out = Route::new();
    if path.is_empty() {
        return out;
    }
    out.extend(path.iter().map(|&a| Dispatch::capture(a)));
    out.push(Dispatch::target(target));
    if bubbles {
        out.extend(path.iter().rev().skip(1).map(|&a| Dispatch::bubble(a)));
    }
    out
}

/// Run `handler` over `route` in order.
///
/// Returns the index of the step whose handler returned [`Outcome::Stop`], or
/// `None` if every step ran.
pub fn run<E>(
    route: &[Dispatch],
    event: &mut E,
    mut handler: impl FnMut(&Dispatch, &mut E) -> Outcome,
) -> Option<usize> {
    for (i, d) in route.iter().enumerate() {
        if handler(d, event) == Outcome::Stop {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proscenium_actor::Actor;

    fn chain() -> (ActorTree, [ActorId; 3]) {
        let mut tree = ActorTree::new();
        let root = tree.insert_group(Actor::default());
        let g = tree.insert_group(Actor::default());
        let a = tree.insert_leaf(Actor::default());
        tree.add_child(root, g).unwrap();
        tree.add_child(g, a).unwrap();
        (tree, [root, g, a])
    }

    #[test]
    fn route_orders_phases() {
        let (tree, [root, g, a]) = chain();
        let r = route(&tree, a, true);
        assert_eq!(
            r.as_slice(),
            [
                Dispatch::capture(root),
                Dispatch::capture(g),
                Dispatch::capture(a),
                Dispatch::target(a),
                Dispatch::bubble(g),
                Dispatch::bubble(root),
            ]
        );
    }

    #[test]
    fn non_bubbling_route_ends_at_target() {
        let (tree, [root, g, a]) = chain();
        let r = route(&tree, a, false);
        assert_eq!(
            r.as_slice(),
            [
                Dispatch::capture(root),
                Dispatch::capture(g),
                Dispatch::capture(a),
                Dispatch::target(a),
            ]
        );
    }

    #[test]
    fn stale_target_has_empty_route() {
        let (mut tree, [_, _, a]) = chain();
        tree.destroy(a);
        assert!(route(&tree, a, true).is_empty());
    }

    #[test]
    fn stop_reports_index() {
        let (tree, [_, g, a]) = chain();
        let r = route(&tree, a, true);
        let mut visited = 0;
        let stopped = run(&r, &mut visited, |d, visited| {
            *visited += 1;
            if d.phase == Phase::Bubble && d.actor == g {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        assert_eq!(stopped, Some(4));
        assert_eq!(visited, 5);
    }

    #[test]
    fn stop_in_capture_skips_target() {
        let (tree, [root, _, a]) = chain();
        let r = route(&tree, a, true);
        let mut phases = Vec::new();
        run(&r, &mut phases, |d, phases| {
            phases.push(d.phase);
            if d.actor == root {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        assert_eq!(phases, [Phase::Capture]);
    }
}
