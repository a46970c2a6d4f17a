// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: storage, structural edits, coordinate composition, hit testing.

use alloc::vec::Vec;
use kurbo::{Affine, Point};
use log::{debug, trace, warn};

use crate::error::TreeError;
use crate::types::{Actor, ActorId, ActorKind, Touchable};

/// Arena of actors linked into parent/child hierarchies.
///
/// Actors are created detached (no parent). A group's child list is the only
/// ownership edge; an actor's parent is a plain lookup used for coordinate
/// composition and event bubbling. Several independent hierarchies can share
/// one arena.
pub struct ActorTree {
    slots: Vec<Option<Node>>,
    // Last generation per slot; survives frees.
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for ActorTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActorTree")
            .field("slots_total", &self.slots.len())
            .field("actors_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for ActorTree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    kind: ActorKind,
    parent: Option<ActorId>,
    children: Vec<ActorId>,
    actor: Actor,
}

impl ActorTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a detached actor of the given kind.
    pub fn insert(&mut self, kind: ActorKind, actor: Actor) -> ActorId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Node::new(generation, kind, actor));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ActorId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Node::new(generation, kind, actor)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ActorId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        ActorId::new(idx, generation)
    }

    /// Insert a detached leaf actor.
    pub fn insert_leaf(&mut self, actor: Actor) -> ActorId {
        self.insert(ActorKind::Leaf, actor)
    }

    /// Insert a detached, empty group.
    pub fn insert_group(&mut self, actor: Actor) -> ActorId {
        self.insert(ActorKind::Group, actor)
    }

    /// Remove an actor and its whole subtree from the arena.
    ///
    /// All ids in the subtree become stale. Returns `false` if `id` was already stale.
    pub fn destroy(&mut self, id: ActorId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.unlink(id);
        self.free_subtree(id);
        true
    }

    fn free_subtree(&mut self, id: ActorId) {
        let Some(node) = self.slots[id.idx()].take() else {
            return;
        };
        self.free_list.push(id.idx());
        for child in node.children {
            self.free_subtree(child);
        }
    }

    // --- accessors ---

    /// Returns true if `id` refers to a live actor.
    pub fn is_alive(&self, id: ActorId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Number of live actors.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if there are no live actors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The kind of a live actor.
    pub fn kind(&self, id: ActorId) -> Option<ActorKind> {
        self.node_opt(id).map(|n| n.kind)
    }

    /// Returns true if `id` is a live group.
    pub fn is_group(&self, id: ActorId) -> bool {
        self.kind(id) == Some(ActorKind::Group)
    }

    /// Per-actor data of a live actor.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.node_opt(id).map(|n| &n.actor)
    }

    /// Mutable per-actor data of a live actor.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.node_opt_mut(id).map(|n| &mut n.actor)
    }

    /// Returns the parent of an actor, or `None` for detached actors and stale ids.
    pub fn parent_of(&self, id: ActorId) -> Option<ActorId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Children of a group in paint order, or an empty slice.
    pub fn children_of(&self, id: ActorId) -> &[ActorId] {
        self.node_opt(id).map_or(&[], |n| &n.children)
    }

    /// Path from the topmost ancestor down to `id` (inclusive). Empty for stale ids.
    pub fn path_to_root(&self, id: ActorId) -> Vec<ActorId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            let Some(node) = self.node_opt(c) else {
                break;
            };
            out.push(c);
            cur = node.parent;
        }
        out.reverse();
        out
    }

    /// The topmost ancestor of `id` (itself when detached).
    pub fn root_of(&self, id: ActorId) -> Option<ActorId> {
        if !self.is_alive(id) {
            return None;
        }
        let mut node = id;
        while let Some(parent) = self.parent_of(node) {
            node = parent;
        }
        Some(node)
    }

    /// Returns true if `ancestor` is `actor` or one of its ancestors.
    pub fn is_ascendant_of(&self, ancestor: ActorId, actor: ActorId) -> bool {
        let mut cur = Some(actor);
        while let Some(c) = cur {
            if !self.is_alive(c) {
                return false;
            }
            if c == ancestor {
                return true;
            }
            cur = self.parent_of(c);
        }
        false
    }

    /// Returns true if `actor` is `ancestor` or one of its descendants.
    pub fn is_descendant_of(&self, actor: ActorId, ancestor: ActorId) -> bool {
        self.is_ascendant_of(ancestor, actor)
    }

    /// Find an actor by name below `group`.
    ///
    /// Direct children are checked before descending, so a shallow match wins
    /// over a deeper one. The group itself is not considered.
    pub fn find_by_name(&self, group: ActorId, name: &str) -> Option<ActorId> {
        let children = self.children_of(group);
        for &child in children {
            if self.actor(child).and_then(|a| a.name.as_deref()) == Some(name) {
                return Some(child);
            }
        }
        children
            .iter()
            .filter(|&&child| self.is_group(child))
            .find_map(|&child| self.find_by_name(child, name))
    }

    // --- structural edits ---

    /// Append `child` to `group`, detaching it from any previous parent.
    pub fn add_child(&mut self, group: ActorId, child: ActorId) -> Result<(), TreeError> {
        self.add_child_at(group, usize::MAX, child)
    }

    /// Insert `child` into `group` at `index` (clamped to the child count).
    pub fn add_child_at(
        &mut self,
        group: ActorId,
        index: usize,
        child: ActorId,
    ) -> Result<(), TreeError> {
        self.check_attach(group, child)?;
        self.unlink(child);
        self.link_at(group, index, child);
        Ok(())
    }

    /// Insert `child` directly below `sibling` in paint order.
    pub fn add_child_before(
        &mut self,
        group: ActorId,
        sibling: ActorId,
        child: ActorId,
    ) -> Result<(), TreeError> {
        self.add_child_next_to(group, sibling, child, 0)
    }

    /// Insert `child` directly above `sibling` in paint order.
    pub fn add_child_after(
        &mut self,
        group: ActorId,
        sibling: ActorId,
        child: ActorId,
    ) -> Result<(), TreeError> {
        self.add_child_next_to(group, sibling, child, 1)
    }

    fn add_child_next_to(
        &mut self,
        group: ActorId,
        sibling: ActorId,
        child: ActorId,
        offset: usize,
    ) -> Result<(), TreeError> {
        self.check_attach(group, child)?;
        if self.parent_of(sibling) != Some(group) {
            return Err(TreeError::NotAChild {
                group,
                actor: sibling,
            });
        }
        if sibling == child {
            return Ok(());
        }
        self.unlink(child);
        let index = self
            .children_of(group)
            .iter()
            .position(|&c| c == sibling)
            .map_or(usize::MAX, |i| i + offset);
        self.link_at(group, index, child);
        Ok(())
    }

    /// Remove `child` from `group`. Returns `false` if it was not a child.
    ///
    /// The removed actor stays alive and detached.
    pub fn remove_child(&mut self, group: ActorId, child: ActorId) -> bool {
        if self.parent_of(child) != Some(group) {
            debug!("remove_child: {child:?} is not a child of {group:?}");
            return false;
        }
        self.unlink(child)
    }

    /// Detach an actor from its parent. Returns `false` if it had none.
    pub fn detach(&mut self, id: ActorId) -> bool {
        self.unlink(id)
    }

    /// Detach every child of `group`, returning them in their former order.
    pub fn clear_children(&mut self, group: ActorId) -> Vec<ActorId> {
        let Some(node) = self.node_opt_mut(group) else {
            return Vec::new();
        };
        let children = core::mem::take(&mut node.children);
        for &child in &children {
            if let Some(c) = self.node_opt_mut(child) {
                c.parent = None;
            }
        }
        children
    }

    /// Swap two children of `group` in paint order.
    pub fn swap_children(&mut self, group: ActorId, a: ActorId, b: ActorId) -> bool {
        let Some(node) = self.node_opt_mut(group) else {
            return false;
        };
        let ia = node.children.iter().position(|&c| c == a);
        let ib = node.children.iter().position(|&c| c == b);
        match (ia, ib) {
            (Some(ia), Some(ib)) => {
                node.children.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Position of `id` within its parent's children (0 is drawn first).
    pub fn z_index(&self, id: ActorId) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.children_of(parent).iter().position(|&c| c == id)
    }

    /// Move `id` to `index` within its parent's children (clamped).
    ///
    /// Returns `false` for detached actors and stale ids.
    pub fn set_z_index(&mut self, id: ActorId, index: usize) -> bool {
        let Some(parent) = self.parent_of(id) else {
            return false;
        };
        let Some(node) = self.node_opt_mut(parent) else {
            return false;
        };
        let Some(current) = node.children.iter().position(|&c| c == id) else {
            return false;
        };
        node.children.remove(current);
        let index = index.min(node.children.len());
        node.children.insert(index, id);
        true
    }

    /// Draw `id` above its siblings.
    pub fn to_front(&mut self, id: ActorId) -> bool {
        self.set_z_index(id, usize::MAX)
    }

    /// Draw `id` below its siblings.
    pub fn to_back(&mut self, id: ActorId) -> bool {
        self.set_z_index(id, 0)
    }

    fn check_attach(&self, group: ActorId, child: ActorId) -> Result<(), TreeError> {
        let Some(node) = self.node_opt(group) else {
            return Err(TreeError::StaleActor(group));
        };
        if !self.is_alive(child) {
            return Err(TreeError::StaleActor(child));
        }
        if node.kind != ActorKind::Group {
            return Err(TreeError::NotAGroup(group));
        }
        if self.is_ascendant_of(child, group) {
            warn!("refusing to attach {child:?} under its own descendant {group:?}");
            return Err(TreeError::Cycle {
                parent: group,
                child,
            });
        }
        Ok(())
    }

    fn link_at(&mut self, group: ActorId, index: usize, child: ActorId) {
        if let Some(p) = self.node_opt_mut(group) {
            let index = index.min(p.children.len());
            p.children.insert(index, child);
        }
        if let Some(c) = self.node_opt_mut(child) {
            c.parent = Some(group);
        }
    }

    fn unlink(&mut self, id: ActorId) -> bool {
        let Some(parent) = self.parent_of(id) else {
            return false;
        };
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(c) = self.node_opt_mut(id) {
            c.parent = None;
        }
        true
    }

    // --- coordinates ---

    /// Map a point from `id`'s local space into the space its topmost ancestor lives in.
    pub fn local_to_world(&self, id: ActorId, pt: Point) -> Option<Point> {
        if !self.is_alive(id) {
            return None;
        }
        let mut pt = pt;
        let mut cur = Some(id);
        while let Some(node) = cur.and_then(|c| self.node_opt(c)) {
            pt = node.actor.transform.local_to_parent(pt);
            cur = node.parent;
        }
        Some(pt)
    }

    /// Inverse of [`ActorTree::local_to_world`].
    pub fn world_to_local(&self, id: ActorId, pt: Point) -> Option<Point> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.path_to_root(id).iter().fold(pt, |p, &a| {
            self.node_opt(a)
                .map_or(p, |n| n.actor.transform.parent_to_local(p))
        }))
    }

    /// Map a point from `id`'s local space into `ancestor`'s local space.
    ///
    /// Returns `None` if `ancestor` is not `id` or one of its ancestors.
    pub fn local_to_ascendant(&self, id: ActorId, ancestor: ActorId, pt: Point) -> Option<Point> {
        if !self.is_ascendant_of(ancestor, id) {
            return None;
        }
        let mut pt = pt;
        let mut cur = id;
        while cur != ancestor {
            let node = self.node_opt(cur)?;
            pt = node.actor.transform.local_to_parent(pt);
            cur = node.parent?;
        }
        Some(pt)
    }

    /// Map a point from `from`'s local space into `to`'s local space through world space.
    pub fn local_to_actor(&self, from: ActorId, to: ActorId, pt: Point) -> Option<Point> {
        let world = self.local_to_world(from, pt)?;
        self.world_to_local(to, world)
    }

    /// Composed local-to-world matrix of a live actor.
    pub fn world_transform(&self, id: ActorId) -> Option<Affine> {
        let mut node = self.node_opt(id)?;
        let mut tf = node.actor.transform.local_transform();
        while let Some(parent) = node.parent.and_then(|p| self.node_opt(p)) {
            tf = parent.actor.transform.local_transform() * tf;
            node = parent;
        }
        Some(tf)
    }

    // --- queries ---

    /// Find the deepest actor under `pt`, given in `id`'s local space.
    ///
    /// Children are tested from last to first, so the one drawn on top wins,
    /// and the first match in depth-first order is returned. Invisible actors
    /// never hit. When `touchable` is set, [`Touchable::Disabled`] prunes the
    /// whole subtree and [`Touchable::ChildrenOnly`] actors are never returned
    /// themselves.
    pub fn hit(&self, id: ActorId, pt: Point, touchable: bool) -> Option<ActorId> {
        let node = self.node_opt(id)?;
        if !node.actor.visible {
            return None;
        }
        if touchable && node.actor.touchable == Touchable::Disabled {
            return None;
        }
        for &child in node.children.iter().rev() {
            let Some(c) = self.node_opt(child) else {
                continue;
            };
            let local = c.actor.transform.parent_to_local(pt);
            if let Some(hit) = self.hit(child, local, touchable) {
                return Some(hit);
            }
        }
        if touchable && node.actor.touchable != Touchable::Enabled {
            return None;
        }
        if node.actor.transform.contains_local(pt) {
            trace!("hit {id:?} at local {pt:?}");
            Some(id)
        } else {
            None
        }
    }

    // --- internals ---

    fn node_opt(&self, id: ActorId) -> Option<&Node> {
        let n = self.slots.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ActorId) -> Option<&mut Node> {
        let n = self.slots.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}

impl Node {
    fn new(generation: u32, kind: ActorKind, actor: Actor) -> Self {
        Self {
            generation,
            kind,
            parent: None,
            children: Vec::new(),
            actor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transform;
    use alloc::vec;

    fn leaf(tree: &mut ActorTree, x: f64, y: f64, w: f64, h: f64) -> ActorId {
        tree.insert_leaf(Actor::with_transform(Transform::at(x, y, w, h)))
    }

    fn group(tree: &mut ActorTree, x: f64, y: f64) -> ActorId {
        tree.insert_group(Actor::with_transform(Transform::at(x, y, 0.0, 0.0)))
    }

    #[test]
    fn later_child_wins_overlap() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 50.0, 50.0);
        let b = leaf(&mut tree, 0.0, 0.0, 50.0, 50.0);
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();

        assert_eq!(tree.hit(root, Point::new(25.0, 25.0), true), Some(b));
        tree.to_front(a);
        assert_eq!(tree.hit(root, Point::new(25.0, 25.0), true), Some(a));
    }

    #[test]
    fn deepest_actor_is_returned() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let outer = group(&mut tree, 10.0, 10.0);
        let inner = group(&mut tree, 10.0, 10.0);
        let a = leaf(&mut tree, 0.0, 0.0, 5.0, 5.0);
        tree.add_child(root, outer).unwrap();
        tree.add_child(outer, inner).unwrap();
        tree.add_child(inner, a).unwrap();

        assert_eq!(tree.hit(root, Point::new(22.0, 22.0), true), Some(a));
        assert_eq!(tree.path_to_root(a), vec![root, outer, inner, a]);
    }

    #[test]
    fn disabled_actor_is_skipped_only_for_touchable_queries() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.add_child(root, a).unwrap();
        tree.actor_mut(a).unwrap().touchable = Touchable::Disabled;

        assert_eq!(tree.hit(root, Point::new(5.0, 5.0), true), None);
        assert_eq!(tree.hit(root, Point::new(5.0, 5.0), false), Some(a));
    }

    #[test]
    fn disabled_group_prunes_its_subtree() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let g = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.add_child(root, g).unwrap();
        tree.add_child(g, a).unwrap();
        tree.actor_mut(g).unwrap().touchable = Touchable::Disabled;

        assert_eq!(tree.hit(root, Point::new(5.0, 5.0), true), None);
        assert_eq!(tree.hit(root, Point::new(5.0, 5.0), false), Some(a));
    }

    #[test]
    fn children_only_group_is_never_its_own_target() {
        let mut tree = ActorTree::new();
        let g = tree.insert_group(
            Actor::with_transform(Transform::at(0.0, 0.0, 100.0, 100.0))
                .touchable(Touchable::ChildrenOnly),
        );
        let a = leaf(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.add_child(g, a).unwrap();

        assert_eq!(tree.hit(g, Point::new(5.0, 5.0), true), Some(a));
        assert_eq!(tree.hit(g, Point::new(50.0, 50.0), true), None);
        assert_eq!(tree.hit(g, Point::new(50.0, 50.0), false), Some(g));
    }

    #[test]
    fn invisible_actor_never_hits() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 10.0, 10.0);
        tree.add_child(root, a).unwrap();
        tree.actor_mut(a).unwrap().visible = false;

        assert_eq!(tree.hit(root, Point::new(5.0, 5.0), false), None);
    }

    #[test]
    fn rotated_group_changes_the_hit() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let g = group(&mut tree, 100.0, 100.0);
        let a = leaf(&mut tree, 10.0, 10.0, 20.0, 20.0);
        tree.add_child(root, g).unwrap();
        tree.add_child(g, a).unwrap();

        let pt = Point::new(125.0, 125.0);
        assert_eq!(tree.hit(root, pt, true), Some(a));

        tree.actor_mut(g).unwrap().transform.rotation = 90.0;
        assert_eq!(tree.hit(root, pt, true), None);

        // Rotating 90 degrees counter-clockwise moves A's center to (80, 120).
        assert_eq!(tree.hit(root, Point::new(80.0, 120.0), true), Some(a));
    }

    #[test]
    fn adding_moves_between_groups() {
        let mut tree = ActorTree::new();
        let g1 = group(&mut tree, 0.0, 0.0);
        let g2 = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.add_child(g1, a).unwrap();
        tree.add_child(g2, a).unwrap();

        assert!(tree.children_of(g1).is_empty());
        assert_eq!(tree.children_of(g2), &[a]);
        assert_eq!(tree.parent_of(a), Some(g2));
    }

    #[test]
    fn invalid_edges_are_errors() {
        let mut tree = ActorTree::new();
        let g = group(&mut tree, 0.0, 0.0);
        let inner = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.add_child(g, inner).unwrap();

        assert_eq!(tree.add_child(a, g), Err(TreeError::NotAGroup(a)));
        assert_eq!(
            tree.add_child(inner, g),
            Err(TreeError::Cycle {
                parent: inner,
                child: g
            })
        );
        assert_eq!(
            tree.add_child(g, g),
            Err(TreeError::Cycle {
                parent: g,
                child: g
            })
        );
        assert!(tree.destroy(a));
        assert_eq!(tree.add_child(g, a), Err(TreeError::StaleActor(a)));
    }

    #[test]
    fn removing_a_non_child_is_a_no_op() {
        let mut tree = ActorTree::new();
        let g = group(&mut tree, 0.0, 0.0);
        let other = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.add_child(other, a).unwrap();

        assert!(!tree.remove_child(g, a));
        assert_eq!(tree.parent_of(a), Some(other));
        assert!(tree.remove_child(other, a));
        assert_eq!(tree.parent_of(a), None);
        assert!(tree.is_alive(a));
    }

    #[test]
    fn destroy_frees_subtree_and_reuses_slots() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let g = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.add_child(root, g).unwrap();
        tree.add_child(g, a).unwrap();

        assert!(tree.destroy(g));
        assert!(!tree.is_alive(g));
        assert!(!tree.is_alive(a));
        assert!(tree.children_of(root).is_empty());
        assert_eq!(tree.len(), 1);

        let b = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        assert_ne!(b, a);
        assert_ne!(b, g);
        assert!(tree.actor(a).is_none());
    }

    #[test]
    fn ordering_edits() {
        let mut tree = ActorTree::new();
        let g = group(&mut tree, 0.0, 0.0);
        let a = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let b = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let c = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        let d = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        tree.add_child(g, a).unwrap();
        tree.add_child(g, b).unwrap();
        tree.add_child_before(g, a, c).unwrap();
        assert_eq!(tree.children_of(g), &[c, a, b]);
        tree.add_child_after(g, a, d).unwrap();
        assert_eq!(tree.children_of(g), &[c, a, d, b]);
        tree.add_child_at(g, 0, b).unwrap();
        assert_eq!(tree.children_of(g), &[b, c, a, d]);

        assert!(tree.swap_children(g, b, d));
        assert_eq!(tree.children_of(g), &[d, c, a, b]);
        assert!(tree.set_z_index(a, 1));
        assert_eq!(tree.z_index(a), Some(1));
        assert!(tree.to_back(b));
        assert_eq!(tree.children_of(g), &[b, d, a, c]);

        let orphan = leaf(&mut tree, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            tree.add_child_before(g, orphan, a),
            Err(TreeError::NotAChild {
                group: g,
                actor: orphan
            })
        );

        let cleared = tree.clear_children(g);
        assert_eq!(cleared, vec![b, d, a, c]);
        assert!(cleared.iter().all(|&x| tree.parent_of(x).is_none()));
    }

    #[test]
    fn find_by_name_prefers_shallow_matches() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let g = tree.insert_group(Actor::default().named("panel"));
        let deep = tree.insert_leaf(Actor::default().named("button"));
        let shallow = tree.insert_leaf(Actor::default().named("button"));
        tree.add_child(root, g).unwrap();
        tree.add_child(g, deep).unwrap();
        tree.add_child(root, shallow).unwrap();

        assert_eq!(tree.find_by_name(root, "button"), Some(shallow));
        assert_eq!(tree.find_by_name(root, "panel"), Some(g));
        assert_eq!(tree.find_by_name(g, "button"), Some(deep));
        assert_eq!(tree.find_by_name(root, "missing"), None);
    }

    #[test]
    fn coordinates_compose_through_nested_transforms() {
        let mut tree = ActorTree::new();
        let root = group(&mut tree, 0.0, 0.0);
        let g = group(&mut tree, 50.0, 0.0);
        let a = leaf(&mut tree, 10.0, 0.0, 10.0, 10.0);
        tree.add_child(root, g).unwrap();
        tree.add_child(g, a).unwrap();
        {
            let tf = &mut tree.actor_mut(g).unwrap().transform;
            tf.rotation = 90.0;
            tf.set_scale(2.0);
        }

        let world = tree.local_to_world(a, Point::new(0.0, 0.0)).unwrap();
        assert!((world.x - 50.0).abs() < 1e-9, "{world:?}");
        assert!((world.y - 20.0).abs() < 1e-9, "{world:?}");

        let back = tree.world_to_local(a, world).unwrap();
        assert!(back.x.abs() < 1e-9 && back.y.abs() < 1e-9, "{back:?}");

        let via_matrix = tree.world_transform(a).unwrap() * Point::new(0.0, 0.0);
        assert!((via_matrix - world).hypot() < 1e-9);

        let in_g = tree.local_to_ascendant(a, g, Point::new(1.0, 1.0)).unwrap();
        assert_eq!(in_g, Point::new(11.0, 1.0));
        assert!(tree.local_to_ascendant(g, a, Point::ORIGIN).is_none());

        let a_in_root = tree.local_to_actor(a, root, Point::ORIGIN).unwrap();
        assert!((a_in_root - world).hypot() < 1e-9);
    }
}
