// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the actor tree: identifiers, touchability, and per-actor data.

use alloc::string::String;
use peniko::Color;

use crate::transform::Transform;

/// Identifier for an actor in an [`ActorTree`](crate::ActorTree).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the actor is destroyed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On [`destroy`](crate::ActorTree::destroy), the slot is freed; any existing `ActorId`
///   that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ActorId`.
///
/// Stale ids never alias a different live actor because the generation must match.
/// Use [`ActorTree::is_alive`](crate::ActorTree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActorId(pub(crate) u32, pub(crate) u32);

impl ActorId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Whether an actor can be the result of a touchable hit test.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Touchable {
    /// The actor and its descendants can be hit.
    #[default]
    Enabled,
    /// Neither the actor nor any of its descendants can be hit.
    Disabled,
    /// Only descendants can be hit; the actor itself is skipped.
    ChildrenOnly,
}

/// The closed set of node kinds in the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ActorKind {
    /// A leaf actor; it cannot own children.
    Leaf,
    /// A group; it owns an ordered list of children.
    Group,
}

/// Per-actor data: transform, tint, visibility, touchability and name.
#[derive(Clone, Debug)]
pub struct Actor {
    /// Placement in the parent's coordinate space.
    pub transform: Transform,
    /// Tint. The alpha channel is multiplied into every descendant when drawing.
    pub color: Color,
    /// Invisible actors are neither drawn nor hit.
    pub visible: bool,
    /// Hit-test eligibility.
    pub touchable: Touchable,
    /// Optional name for lookups with [`ActorTree::find_by_name`](crate::ActorTree::find_by_name).
    pub name: Option<String>,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            color: Color::WHITE,
            visible: true,
            touchable: Touchable::default(),
            name: None,
        }
    }
}

impl Actor {
    /// An actor with the given transform and default everything else.
    pub fn with_transform(transform: Transform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    /// Sets the name, builder style.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets touchability, builder style.
    #[must_use]
    pub fn touchable(mut self, touchable: Touchable) -> Self {
        self.touchable = touchable;
        self
    }

    /// The alpha channel of [`Actor::color`].
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}
