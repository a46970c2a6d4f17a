// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made listeners for clicks and drags.

use kurbo::{Point, Vec2};
use proscenium_actor::ActorId;

use crate::event::{EventKind, InputEvent};
use crate::gesture::{ClickCounter, DragTracker};
use crate::listener::EventListener;
use crate::stage::Stage;

/// Calls back when a press and release happen on the listener's actor.
///
/// The press is cancelled once the pointer is dragged out of the tap square,
/// unless it is still over the actor when released. Consecutive clicks within
/// the stage's double-click interval are counted.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use proscenium_actor::{Actor, Transform};
/// use proscenium_stage::{ClickListener, InputEvent, Stage};
///
/// let mut stage = Stage::default();
/// let button = stage
///     .tree_mut()
///     .insert_leaf(Actor::with_transform(Transform::at(0.0, 0.0, 100.0, 100.0)));
/// stage.add_actor(button).unwrap();
///
/// let clicks = Rc::new(Cell::new(0));
/// let seen = clicks.clone();
/// stage.add_listener(
///     button,
///     ClickListener::new(move |_: &mut InputEvent, _: &mut Stage, count: u32| seen.set(count)),
/// );
///
/// // Screen Y is flipped: stage (50, 50) is screen (50, 430).
/// stage.touch_down(50.0, 430.0, 0, 0);
/// stage.touch_up(50.0, 430.0, 0, 0);
/// stage.act(0.1);
/// stage.touch_down(50.0, 430.0, 0, 0);
/// stage.touch_up(50.0, 430.0, 0, 0);
/// assert_eq!(clicks.get(), 2);
/// ```
pub struct ClickListener<F> {
    button: Option<u16>,
    pressed: Option<(usize, Point)>,
    cancelled: bool,
    counter: ClickCounter,
    on_click: F,
}

impl<F> core::fmt::Debug for ClickListener<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClickListener")
            .field("button", &self.button)
            .field("pressed", &self.pressed)
            .field("cancelled", &self.cancelled)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl<F> ClickListener<F>
where
    F: FnMut(&mut InputEvent, &mut Stage, u32),
{
    /// Listen for clicks of any button; `on_click` gets the click count.
    pub fn new(on_click: F) -> Self {
        Self {
            button: None,
            pressed: None,
            cancelled: false,
            counter: ClickCounter::new(),
            on_click,
        }
    }

    /// Only react to `button`.
    pub fn with_button(mut self, button: u16) -> Self {
        self.button = Some(button);
        self
    }

    /// Whether a press is in progress and has not been dragged away.
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some() && !self.cancelled
    }

    /// Whether `event` is over `actor` (or one of its descendants).
    fn is_over(stage: &Stage, actor: ActorId, event: &InputEvent) -> bool {
        event
            .local_position_in(stage.tree(), actor)
            .and_then(|local| stage.tree().hit(actor, local, true))
            .is_some_and(|hit| stage.tree().is_descendant_of(hit, actor))
    }
}

impl<F> EventListener for ClickListener<F>
where
    F: FnMut(&mut InputEvent, &mut Stage, u32),
{
    fn handle(&mut self, event: &mut InputEvent, stage: &mut Stage) -> bool {
        let square = stage.config().tap_square_size;
        match event.kind {
            EventKind::TouchDown => {
                if self.pressed.is_some() || self.button.is_some_and(|b| b != event.button) {
                    return false;
                }
                self.pressed = Some((event.pointer, event.stage_position));
                self.cancelled = false;
                true
            }
            EventKind::TouchDragged => {
                let Some((pointer, origin)) = self.pressed else {
                    return false;
                };
                if pointer == event.pointer {
                    let d = event.stage_position - origin;
                    if d.x.abs() >= square || d.y.abs() >= square {
                        self.cancelled = true;
                    }
                }
                false
            }
            EventKind::TouchUp => {
                let Some((pointer, origin)) = self.pressed else {
                    return false;
                };
                if pointer != event.pointer {
                    return false;
                }
                self.pressed = None;
                let d = event.stage_position - origin;
                let in_square = d.x.abs() < square && d.y.abs() < square;
                let over = Self::is_over(stage, event.listener_actor(), event);
                if (!self.cancelled && in_square) || over {
                    let count = self.counter.register(
                        stage.time(),
                        event.stage_position,
                        stage.config().double_click_interval,
                        square,
                    );
                    (self.on_click)(event, stage, count);
                }
                self.cancelled = false;
                true
            }
            _ => false,
        }
    }
}

/// Calls back with movement deltas while the listener's actor is dragged.
///
/// Dragging starts once the pointer leaves the stage's tap square around the
/// press point.
pub struct DragListener<F> {
    pointer: Option<usize>,
    tracker: DragTracker,
    on_drag: F,
}

impl<F> core::fmt::Debug for DragListener<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragListener")
            .field("pointer", &self.pointer)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl<F> DragListener<F>
where
    F: FnMut(&mut InputEvent, &mut Stage, Vec2),
{
    /// `on_drag` receives each movement delta in stage units.
    pub fn new(on_drag: F) -> Self {
        Self {
            pointer: None,
            tracker: DragTracker::default(),
            on_drag,
        }
    }

    /// Whether a drag has started.
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }
}

impl<F> EventListener for DragListener<F>
where
    F: FnMut(&mut InputEvent, &mut Stage, Vec2),
{
    fn handle(&mut self, event: &mut InputEvent, stage: &mut Stage) -> bool {
        match event.kind {
            EventKind::TouchDown if self.pointer.is_none() => {
                self.pointer = Some(event.pointer);
                self.tracker = DragTracker::new(stage.config().tap_square_size);
                self.tracker.press(event.stage_position);
                true
            }
            EventKind::TouchDragged if self.pointer == Some(event.pointer) => {
                if let Some(delta) = self.tracker.update(event.stage_position) {
                    (self.on_drag)(event, stage, delta);
                }
                true
            }
            EventKind::TouchUp if self.pointer == Some(event.pointer) => {
                self.pointer = None;
                self.tracker.end()
            }
            _ => false,
        }
    }
}
