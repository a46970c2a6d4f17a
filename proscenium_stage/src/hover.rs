// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: enter/exit transitions from changes of the hovered path.
//!
//! The stage keeps one [`HoverState`] for the mouse. Each mouse move resolves
//! the actor under the pointer, takes its root → actor path and feeds it to
//! [`HoverState::update_path`]. Actors shared by the old and new paths see no
//! transition.
//!
//! ```
//! use proscenium_stage::hover::{HoverState, HoverTransition};
//!
//! let mut hover: HoverState<u32> = HoverState::new();
//! assert_eq!(
//!     hover.update_path(&[1, 2]).as_slice(),
//!     [HoverTransition::Enter(1), HoverTransition::Enter(2)]
//! );
//! assert_eq!(
//!     hover.update_path(&[1, 3]).as_slice(),
//!     [HoverTransition::Exit(2), HoverTransition::Enter(3)]
//! );
//! ```

use smallvec::SmallVec;

/// One enter or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTransition<K> {
    /// The pointer is now over `K` (emitted outer → inner).
    Enter(K),
    /// The pointer is no longer over `K` (emitted inner → outer).
    Exit(K),
}

/// Transitions produced by one update.
pub type Transitions<K> = SmallVec<[HoverTransition<K>; 8]>;

/// The currently hovered root → actor path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    path: Vec<K>,
}

impl<K: Copy + Eq> HoverState<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// The hovered path, outermost first.
    pub fn current_path(&self) -> &[K] {
        &self.path
    }

    /// The innermost hovered actor.
    pub fn current(&self) -> Option<K> {
        self.path.last().copied()
    }

    /// Forget the hovered path, returning the exits (inner → outer).
    pub fn clear(&mut self) -> Transitions<K> {
        let out = self.path.iter().rev().map(|&k| HoverTransition::Exit(k)).collect();
        self.path.clear();
        out
    }

    /// Drop everything from the first path entry matching `pred` inward,
    /// without reporting transitions.
    pub fn truncate_at(&mut self, mut pred: impl FnMut(K) -> bool) {
        if let Some(i) = self.path.iter().position(|&k| pred(k)) {
            self.path.truncate(i);
        }
    }

    /// Replace the hovered path and return the transitions.
    pub fn update_path(&mut self, path: &[K]) -> Transitions<K> {
        let shared = self
            .path
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count();
        let mut out = Transitions::new();
        out.extend(self.path[shared..].iter().rev().map(|&k| HoverTransition::Exit(k)));
        out.extend(path[shared..].iter().map(|&k| HoverTransition::Enter(k)));
        self.path.clear();
        self.path.extend_from_slice(path);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HoverTransition::{Enter, Exit};

    #[test]
    fn fresh_path_enters_outer_to_inner() {
        let mut h: HoverState<u32> = HoverState::new();
        assert_eq!(h.update_path(&[1, 2, 3]).as_slice(), [Enter(1), Enter(2), Enter(3)]);
        assert_eq!(h.current(), Some(3));
    }

    #[test]
    fn sibling_switch_exits_inner_to_outer_first() {
        let mut h: HoverState<u32> = HoverState::new();
        h.update_path(&[1, 2, 3]);
        assert_eq!(
            h.update_path(&[1, 4, 5]).as_slice(),
            [Exit(3), Exit(2), Enter(4), Enter(5)]
        );
    }

    #[test]
    fn same_path_is_quiet() {
        let mut h: HoverState<u32> = HoverState::new();
        h.update_path(&[1, 2]);
        assert!(h.update_path(&[1, 2]).is_empty());
    }

    #[test]
    fn moving_to_ancestor_only_exits() {
        let mut h: HoverState<u32> = HoverState::new();
        h.update_path(&[1, 2, 3]);
        assert_eq!(h.update_path(&[1]).as_slice(), [Exit(3), Exit(2)]);
        assert_eq!(h.clear().as_slice(), [Exit(1)]);
        assert!(h.current_path().is_empty());
    }

    #[test]
    fn truncate_drops_subtree_silently() {
        let mut h: HoverState<u32> = HoverState::new();
        h.update_path(&[1, 2, 3]);
        h.truncate_at(|k| k == 2);
        assert_eq!(h.current_path(), &[1]);
        assert_eq!(h.update_path(&[1, 2]).as_slice(), [Enter(2)]);
    }
}
