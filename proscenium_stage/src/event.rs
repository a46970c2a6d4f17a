// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events carried along a dispatch route.

use kurbo::{Point, Vec2};
use proscenium_actor::{ActorId, ActorTree};

use crate::dispatch::Phase;

/// Well-known pointer button indices.
pub mod buttons {
    /// Primary (usually left) button.
    pub const LEFT: u16 = 0;
    /// Secondary (usually right) button.
    pub const RIGHT: u16 = 1;
    /// Middle button or wheel click.
    pub const MIDDLE: u16 = 2;
}

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A pointer went down.
    TouchDown,
    /// A pointer went up.
    TouchUp,
    /// A pointer moved while down.
    TouchDragged,
    /// The mouse moved with no button down.
    MouseMoved,
    /// The pointer entered an actor (non-bubbling).
    Enter,
    /// The pointer left an actor (non-bubbling).
    Exit,
    /// The scroll wheel moved.
    Scrolled,
    /// A key went down.
    KeyDown,
    /// A key went up.
    KeyUp,
    /// A character was typed.
    KeyTyped,
    /// The actor gained keyboard focus.
    FocusIn,
    /// The actor is about to lose keyboard focus; cancelling keeps it.
    FocusOut,
    /// The actor gained scroll focus.
    ScrollFocusIn,
    /// The actor is about to lose scroll focus; cancelling keeps it.
    ScrollFocusOut,
    /// A pointer stayed down on the actor for the configured duration.
    LongPress,
}

impl EventKind {
    /// Whether events of this kind bubble by default.
    pub const fn bubbles_by_default(self) -> bool {
        !matches!(self, Self::Enter | Self::Exit)
    }
}

/// One event instance, shared by every listener along its route.
///
/// The payload fields are public. The propagation flags are only ever set,
/// never cleared, so they are reached through [`InputEvent::handle`],
/// [`InputEvent::stop`] and [`InputEvent::cancel`].
#[derive(Clone, Debug)]
pub struct InputEvent {
    /// What happened.
    pub kind: EventKind,
    /// Position in stage coordinates.
    pub stage_position: Point,
    /// Pointer index (finger) for pointer events.
    pub pointer: usize,
    /// Button index for touch down/up events.
    pub button: u16,
    /// Key code for key events.
    pub key_code: u32,
    /// Character for [`EventKind::KeyTyped`].
    pub character: Option<char>,
    /// Wheel amount for [`EventKind::Scrolled`].
    pub scroll_amount: Vec2,
    /// The other actor of an enter/exit pair or focus change.
    pub related_actor: Option<ActorId>,
    /// Whether the event travels up to the ancestors after the target.
    pub bubbles: bool,
    target: ActorId,
    listener_actor: ActorId,
    phase: Phase,
    handled: bool,
    stopped: bool,
    cancelled: bool,
}

impl InputEvent {
    /// Create an event of `kind` aimed at `target`.
    pub fn new(kind: EventKind, target: ActorId, stage_position: Point) -> Self {
        Self {
            kind,
            stage_position,
            pointer: 0,
            button: buttons::LEFT,
            key_code: 0,
            character: None,
            scroll_amount: Vec2::ZERO,
            related_actor: None,
            bubbles: kind.bubbles_by_default(),
            target,
            listener_actor: target,
            phase: Phase::Target,
            handled: false,
            stopped: false,
            cancelled: false,
        }
    }

    /// Set the pointer index.
    pub fn with_pointer(mut self, pointer: usize) -> Self {
        self.pointer = pointer;
        self
    }

    /// Set the button index.
    pub fn with_button(mut self, button: u16) -> Self {
        self.button = button;
        self
    }

    /// Set the key code.
    pub fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = key_code;
        self
    }

    /// Set the typed character.
    pub fn with_character(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }

    /// Set the scroll amount.
    pub fn with_scroll_amount(mut self, amount: Vec2) -> Self {
        self.scroll_amount = amount;
        self
    }

    /// Set the related actor.
    pub fn with_related(mut self, related: Option<ActorId>) -> Self {
        self.related_actor = related;
        self
    }

    /// Override whether the event bubbles.
    pub fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    /// The deepest actor the event was aimed at.
    pub fn target(&self) -> ActorId {
        self.target
    }

    /// The actor whose listeners are currently running.
    pub fn listener_actor(&self) -> ActorId {
        self.listener_actor
    }

    /// The phase the current listener runs in.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn enter(&mut self, actor: ActorId, phase: Phase) {
        self.listener_actor = actor;
        self.phase = phase;
    }

    /// Mark the event handled. Bubbling ends after the current actor.
    pub fn handle(&mut self) {
        self.handled = true;
    }

    /// Stop propagation after the current actor's listeners.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Handle, stop, and mark the event cancelled.
    ///
    /// Cancelling a [`EventKind::FocusOut`] keeps focus where it is.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.handled = true;
        self.stopped = true;
    }

    /// Whether any listener handled the event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Whether propagation was stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Whether the event was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// The event position in the local space of the current listener actor.
    pub fn local_position(&self, tree: &ActorTree) -> Option<Point> {
        self.local_position_in(tree, self.listener_actor)
    }

    /// The event position in the local space of `actor`.
    pub fn local_position_in(&self, tree: &ActorTree, actor: ActorId) -> Option<Point> {
        tree.world_to_local(actor, self.stage_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proscenium_actor::{Actor, Transform};

    #[test]
    fn flags_only_accumulate() {
        let mut tree = ActorTree::new();
        let a = tree.insert_leaf(Actor::default());
        let mut ev = InputEvent::new(EventKind::TouchDown, a, Point::ZERO);
        assert!(!ev.is_handled() && !ev.is_stopped() && !ev.is_cancelled());
        ev.handle();
        assert!(ev.is_handled());
        assert!(!ev.is_stopped());
        ev.cancel();
        assert!(ev.is_handled() && ev.is_stopped() && ev.is_cancelled());
    }

    #[test]
    fn enter_exit_do_not_bubble() {
        let mut tree = ActorTree::new();
        let a = tree.insert_leaf(Actor::default());
        assert!(!InputEvent::new(EventKind::Enter, a, Point::ZERO).bubbles);
        assert!(!InputEvent::new(EventKind::Exit, a, Point::ZERO).bubbles);
        assert!(InputEvent::new(EventKind::KeyDown, a, Point::ZERO).bubbles);
        assert!(InputEvent::new(EventKind::FocusIn, a, Point::ZERO).bubbles);
    }

    #[test]
    fn local_position_follows_listener_actor() {
        let mut tree = ActorTree::new();
        let g = tree.insert_group(Actor::with_transform(Transform::at(100.0, 100.0, 0.0, 0.0)));
        let a = tree.insert_leaf(Actor::with_transform(Transform::at(10.0, 10.0, 20.0, 20.0)));
        tree.add_child(g, a).unwrap();

        let mut ev = InputEvent::new(EventKind::TouchDown, a, Point::new(125.0, 125.0));
        assert_eq!(ev.local_position(&tree), Some(Point::new(15.0, 15.0)));
        ev.enter(g, Phase::Bubble);
        assert_eq!(ev.local_position(&tree), Some(Point::new(25.0, 25.0)));
        assert_eq!(ev.target(), a);
    }
}
