// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use log::{debug, trace, warn};
use proscenium_actor::{Actor, ActorId, ActorTree, Batch, TreeError};
use proscenium_view::Viewport;
use smallvec::SmallVec;

use crate::config::StageConfig;
use crate::dispatch::{self, Outcome, Phase};
use crate::event::{EventKind, InputEvent};
use crate::gesture::LongPress;
use crate::hover::{HoverState, HoverTransition};
use crate::listener::{EventListener, ListenerId, Listeners};
use crate::tasks::{Poster, TaskQueue};

#[derive(Clone, Copy, Debug)]
enum FocusSlot {
    Keyboard,
    Scroll,
}

impl FocusSlot {
    /// Event kinds for losing and gaining this focus.
    fn kinds(self) -> (EventKind, EventKind) {
        match self {
            Self::Keyboard => (EventKind::FocusOut, EventKind::FocusIn),
            Self::Scroll => (EventKind::ScrollFocusOut, EventKind::ScrollFocusIn),
        }
    }
}

/// Root of an actor scene: owns the tree, the viewport, focus and listeners.
///
/// Screen input enters through the `touch_*`, `mouse_moved`, `scrolled` and
/// `key_*` methods. Each converts to stage coordinates, picks a target and
/// fires one [`InputEvent`] along the target's route. All of them return
/// whether the event was handled.
///
/// Focus is per stage; two stages never share keyboard, scroll, touch or
/// hover state.
#[derive(Debug)]
pub struct Stage {
    tree: ActorTree,
    root: ActorId,
    viewport: Viewport,
    config: StageConfig,
    listeners: Listeners,
    keyboard_focus: Option<ActorId>,
    scroll_focus: Option<ActorId>,
    touch_focus: HashMap<usize, ActorId>,
    long_presses: HashMap<usize, (ActorId, LongPress)>,
    hover: HoverState<ActorId>,
    pointer_position: Point,
    tasks: TaskQueue,
    time: f64,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

impl Stage {
    /// Create a stage with an empty root group.
    pub fn new(config: StageConfig) -> Self {
        let mut viewport = Viewport::new(config.scaling, config.world_width, config.world_height)
            .with_y_axis(config.y_axis);
        viewport.update(config.screen_width, config.screen_height, true);
        let mut tree = ActorTree::new();
        let root = tree.insert_group(Actor::default());
        Self {
            tree,
            root,
            viewport,
            config,
            listeners: Listeners::default(),
            keyboard_focus: None,
            scroll_focus: None,
            touch_focus: HashMap::new(),
            long_presses: HashMap::new(),
            hover: HoverState::new(),
            pointer_position: Point::ZERO,
            tasks: TaskQueue::new(),
            time: 0.0,
        }
    }

    /// The root group.
    pub fn root(&self) -> ActorId {
        self.root
    }

    /// The actor tree.
    pub fn tree(&self) -> &ActorTree {
        &self.tree
    }

    /// The actor tree, for structural edits.
    ///
    /// Prefer [`Stage::remove`] and [`Stage::destroy`] over raw tree edits for
    /// actors that may hold focus.
    pub fn tree_mut(&mut self) -> &mut ActorTree {
        &mut self.tree
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The viewport, for camera moves.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Settings the stage was built with.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Seconds accumulated by [`Stage::act`].
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Last known pointer position in stage coordinates.
    pub fn pointer_position(&self) -> Point {
        self.pointer_position
    }

    /// Append `actor` to the root group.
    pub fn add_actor(&mut self, actor: ActorId) -> Result<(), TreeError> {
        self.tree.add_child(self.root, actor)
    }

    /// Whether `actor` is the root or one of its descendants.
    pub fn contains(&self, actor: ActorId) -> bool {
        self.tree.is_ascendant_of(self.root, actor)
    }

    /// Apply a new screen size to the viewport, re-centering the camera.
    pub fn resize(&mut self, screen_width: f64, screen_height: f64) {
        self.viewport.update(screen_width, screen_height, true);
    }

    /// Screen pixels (top-left origin) to stage coordinates.
    pub fn screen_to_stage(&self, screen: Point) -> Point {
        self.viewport.unproject(screen)
    }

    /// Stage coordinates to screen pixels.
    pub fn stage_to_screen(&self, stage_point: Point) -> Point {
        self.viewport.project(stage_point)
    }

    /// The deepest actor under a stage point.
    pub fn hit(&self, stage_point: Point, touchable: bool) -> Option<ActorId> {
        let root = self.tree.actor(self.root)?;
        let local = root.transform.parent_to_local(stage_point);
        let hit = self.tree.hit(self.root, local, touchable);
        trace!("stage hit at {stage_point:?}: {hit:?}");
        hit
    }

    /// Walk visible actors in paint order.
    pub fn draw(&self, batch: &mut impl Batch) {
        self.tree.draw(self.root, batch);
    }

    // --- listeners ---

    /// Register a listener that runs when `actor` is the target or a bubbling
    /// ancestor.
    pub fn add_listener(
        &mut self,
        actor: ActorId,
        listener: impl EventListener + 'static,
    ) -> ListenerId {
        self.listeners.add(actor, false, Box::new(listener))
    }

    /// Register a listener that runs on the way down, before the target.
    pub fn add_capture_listener(
        &mut self,
        actor: ActorId,
        listener: impl EventListener + 'static,
    ) -> ListenerId {
        self.listeners.add(actor, true, Box::new(listener))
    }

    /// Remove one listener. Returns `false` and changes nothing if `id` is
    /// not registered on `actor`. A listener removed while it runs is dropped
    /// once its actor's listeners finish.
    pub fn remove_listener(&mut self, actor: ActorId, id: ListenerId) -> bool {
        self.listeners.remove(actor, id)
    }

    /// Remove all listeners of `actor`, returning how many there were.
    ///
    /// Listeners of `actor` that are running right now count too; they are
    /// dropped once they finish.
    pub fn remove_listeners(&mut self, actor: ActorId) -> usize {
        self.listeners.remove_all(actor)
    }

    /// Number of listeners (capture and normal) registered on `actor`.
    pub fn listener_count(&self, actor: ActorId) -> usize {
        self.listeners.count(actor)
    }

    // --- dispatch ---

    /// Fire `event` along the route of its target.
    ///
    /// Capture listeners run root → target, then the target's listeners, then
    /// each ancestor's while the event bubbles. Every listener of the current
    /// actor runs; propagation ends after an actor once the event is stopped,
    /// or, past the capture phase, once it is handled.
    ///
    /// Returns whether the event was handled. Events aimed at stale actors
    /// are dropped.
    pub fn fire(&mut self, event: &mut InputEvent) -> bool {
        let route = dispatch::route(&self.tree, event.target(), event.bubbles);
        if route.is_empty() {
            debug!("dropping {:?} for stale target {:?}", event.kind, event.target());
            return false;
        }
        trace!("{:?} route: {:?}", event.kind, route.as_slice());
        dispatch::run(&route, event, |d, event| {
            event.enter(d.actor, d.phase);
            self.notify(d.actor, d.phase == Phase::Capture, event);
            let done = event.is_stopped() || (d.phase != Phase::Capture && event.is_handled());
            if done {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        event.is_handled()
    }

    fn notify(&mut self, actor: ActorId, capture: bool, event: &mut InputEvent) {
        let mut lent = self.listeners.take(actor, capture);
        for (_, listener) in &mut lent {
            if listener.handle(event, self) {
                event.handle();
            }
        }
        self.listeners.restore(actor, capture, lent);
    }

    /// A pointer went down.
    ///
    /// Screen points outside the viewport rectangle are ignored. When the
    /// event is handled the target becomes the touch focus of `pointer` and
    /// a long press is armed for it.
    pub fn touch_down(&mut self, screen_x: f64, screen_y: f64, pointer: usize, button: u16) -> bool {
        let screen = Point::new(screen_x, screen_y);
        if !self.viewport.contains_screen_point(screen) {
            return false;
        }
        let pos = self.screen_to_stage(screen);
        self.pointer_position = pos;
        let Some(target) = self.hit(pos, true) else {
            return false;
        };
        let mut event = InputEvent::new(EventKind::TouchDown, target, pos)
            .with_pointer(pointer)
            .with_button(button);
        let handled = self.fire(&mut event);
        if handled {
            self.touch_focus.insert(pointer, target);
            let mut press =
                LongPress::new(self.config.long_press_duration, self.config.tap_square_size);
            press.press(pos);
            self.long_presses.insert(pointer, (target, press));
        }
        handled
    }

    /// A pointer moved while down.
    pub fn touch_dragged(&mut self, screen_x: f64, screen_y: f64, pointer: usize) -> bool {
        let pos = self.screen_to_stage(Point::new(screen_x, screen_y));
        self.pointer_position = pos;
        if let Some((_, press)) = self.long_presses.get_mut(&pointer) {
            press.moved(pos);
        }
        let Some(target) = self.pointer_target(pointer, pos) else {
            return false;
        };
        let mut event = InputEvent::new(EventKind::TouchDragged, target, pos).with_pointer(pointer);
        self.fire(&mut event)
    }

    /// A pointer went up; its touch focus is released before dispatch.
    pub fn touch_up(&mut self, screen_x: f64, screen_y: f64, pointer: usize, button: u16) -> bool {
        let pos = self.screen_to_stage(Point::new(screen_x, screen_y));
        self.pointer_position = pos;
        let target = self.pointer_target(pointer, pos);
        self.touch_focus.remove(&pointer);
        self.long_presses.remove(&pointer);
        let Some(target) = target else {
            return false;
        };
        let mut event = InputEvent::new(EventKind::TouchUp, target, pos)
            .with_pointer(pointer)
            .with_button(button);
        self.fire(&mut event)
    }

    fn pointer_target(&self, pointer: usize, pos: Point) -> Option<ActorId> {
        match self.touch_focus.get(&pointer) {
            Some(&focus) if self.contains(focus) => Some(focus),
            _ => self.hit(pos, true),
        }
    }

    /// The mouse moved with no button down.
    ///
    /// Fires [`EventKind::Exit`] to actors the pointer left (inner → outer),
    /// [`EventKind::Enter`] to those it entered (outer → inner), then
    /// [`EventKind::MouseMoved`] to the actor under the pointer. A point
    /// outside the viewport rectangle exits the whole hovered path.
    pub fn mouse_moved(&mut self, screen_x: f64, screen_y: f64) -> bool {
        let screen = Point::new(screen_x, screen_y);
        let inside = self.viewport.contains_screen_point(screen);
        let pos = self.screen_to_stage(screen);
        // Outside the viewport the pointer is over nothing.
        let over = if inside {
            self.pointer_position = pos;
            self.hit(pos, true)
        } else {
            None
        };
        let path = over.map(|a| self.tree.path_to_root(a)).unwrap_or_default();
        let previous = self.hover.current();
        for transition in self.hover.update_path(&path) {
            let mut event = match transition {
                HoverTransition::Exit(a) => {
                    InputEvent::new(EventKind::Exit, a, pos).with_related(over)
                }
                HoverTransition::Enter(a) => {
                    InputEvent::new(EventKind::Enter, a, pos).with_related(previous)
                }
            };
            self.fire(&mut event);
        }
        let Some(target) = over else {
            return false;
        };
        let mut event = InputEvent::new(EventKind::MouseMoved, target, pos);
        self.fire(&mut event)
    }

    /// The scroll wheel moved; goes to the scroll focus, else the root.
    pub fn scrolled(&mut self, amount_x: f64, amount_y: f64) -> bool {
        let target = self.focus_or_root(self.scroll_focus);
        let mut event = InputEvent::new(EventKind::Scrolled, target, self.pointer_position)
            .with_scroll_amount(Vec2::new(amount_x, amount_y));
        self.fire(&mut event)
    }

    /// A key went down; goes to the keyboard focus, else the root.
    pub fn key_down(&mut self, key_code: u32) -> bool {
        self.fire_key(EventKind::KeyDown, key_code, None)
    }

    /// A key went up; goes to the keyboard focus, else the root.
    pub fn key_up(&mut self, key_code: u32) -> bool {
        self.fire_key(EventKind::KeyUp, key_code, None)
    }

    /// A character was typed; goes to the keyboard focus, else the root.
    pub fn key_typed(&mut self, character: char) -> bool {
        self.fire_key(EventKind::KeyTyped, 0, Some(character))
    }

    fn fire_key(&mut self, kind: EventKind, key_code: u32, character: Option<char>) -> bool {
        let target = self.focus_or_root(self.keyboard_focus);
        let mut event =
            InputEvent::new(kind, target, self.pointer_position).with_key_code(key_code);
        event.character = character;
        self.fire(&mut event)
    }

    fn focus_or_root(&self, focus: Option<ActorId>) -> ActorId {
        focus.filter(|&a| self.contains(a)).unwrap_or(self.root)
    }

    // --- focus ---

    /// The actor receiving key events.
    pub fn keyboard_focus(&self) -> Option<ActorId> {
        self.keyboard_focus
    }

    /// The actor receiving scroll events.
    pub fn scroll_focus(&self) -> Option<ActorId> {
        self.scroll_focus
    }

    /// The actor receiving drag and up events of `pointer`.
    pub fn touch_focus(&self, pointer: usize) -> Option<ActorId> {
        self.touch_focus.get(&pointer).copied()
    }

    /// Actors currently under the mouse, outermost first.
    pub fn hovered_path(&self) -> &[ActorId] {
        self.hover.current_path()
    }

    /// Move keyboard focus.
    ///
    /// The old actor receives [`EventKind::FocusOut`]; if a listener cancels
    /// it, focus stays and `false` is returned. The new actor then receives
    /// [`EventKind::FocusIn`]; cancelling that restores the old focus.
    pub fn set_keyboard_focus(&mut self, actor: Option<ActorId>) -> bool {
        self.change_focus(FocusSlot::Keyboard, actor)
    }

    /// Move scroll focus, with the same cancellation rules as
    /// [`Stage::set_keyboard_focus`].
    pub fn set_scroll_focus(&mut self, actor: Option<ActorId>) -> bool {
        self.change_focus(FocusSlot::Scroll, actor)
    }

    fn slot(&mut self, slot: FocusSlot) -> &mut Option<ActorId> {
        match slot {
            FocusSlot::Keyboard => &mut self.keyboard_focus,
            FocusSlot::Scroll => &mut self.scroll_focus,
        }
    }

    fn change_focus(&mut self, slot: FocusSlot, actor: Option<ActorId>) -> bool {
        let old = *self.slot(slot);
        if old == actor {
            return true;
        }
        let (out_kind, in_kind) = slot.kinds();
        if let Some(old_actor) = old {
            let mut event =
                InputEvent::new(out_kind, old_actor, self.pointer_position).with_related(actor);
            self.fire(&mut event);
            if event.is_cancelled() {
                debug!("{slot:?} focus change {old:?} -> {actor:?} cancelled on out");
                return false;
            }
        }
        *self.slot(slot) = actor;
        if let Some(new_actor) = actor {
            let mut event =
                InputEvent::new(in_kind, new_actor, self.pointer_position).with_related(old);
            self.fire(&mut event);
            if event.is_cancelled() {
                *self.slot(slot) = old;
                debug!("{slot:?} focus change {old:?} -> {actor:?} cancelled on in");
                return false;
            }
        }
        debug!("{slot:?} focus {old:?} -> {actor:?}");
        true
    }

    /// Forget every touch focus and pending long press without firing events.
    pub fn cancel_touch_focus(&mut self) {
        self.touch_focus.clear();
        self.long_presses.clear();
    }

    /// Release any focus held by `actor` or its descendants.
    ///
    /// Keyboard and scroll focus are cleared through the usual focus events;
    /// touch focus and hover are dropped silently.
    pub fn unfocus(&mut self, actor: ActorId) {
        let tree = &self.tree;
        let held = |focus: Option<ActorId>| focus.is_some_and(|f| tree.is_descendant_of(f, actor));
        let keyboard = held(self.keyboard_focus);
        let scroll = held(self.scroll_focus);
        self.touch_focus
            .retain(|_, f| !tree.is_descendant_of(*f, actor));
        self.long_presses
            .retain(|_, (f, _)| !tree.is_descendant_of(*f, actor));
        self.hover.truncate_at(|a| a == actor);
        if keyboard {
            self.set_keyboard_focus(None);
        }
        if scroll {
            self.set_scroll_focus(None);
        }
    }

    /// Release all focus: keyboard, scroll, touch and hover.
    pub fn unfocus_all(&mut self) {
        self.set_keyboard_focus(None);
        self.set_scroll_focus(None);
        self.cancel_touch_focus();
        self.hover.clear();
    }

    /// Unfocus `actor` and detach it from its parent; it stays alive.
    ///
    /// Returns `false` for the root or an actor without a parent.
    pub fn remove(&mut self, actor: ActorId) -> bool {
        if actor == self.root {
            warn!("refusing to remove the stage root");
            return false;
        }
        self.unfocus(actor);
        self.tree.detach(actor)
    }

    /// Unfocus and destroy `actor` with its subtree, dropping their listeners.
    ///
    /// Returns `false` for the root or a stale id.
    pub fn destroy(&mut self, actor: ActorId) -> bool {
        if actor == self.root {
            warn!("refusing to destroy the stage root");
            return false;
        }
        self.unfocus(actor);
        let destroyed = self.tree.destroy(actor);
        if destroyed {
            self.listeners.prune(&self.tree);
        }
        destroyed
    }

    // --- frame ---

    /// A handle for queueing work from other threads.
    pub fn poster(&self) -> Poster {
        self.tasks.poster()
    }

    /// Advance one frame.
    ///
    /// Runs every task posted so far in post order, then advances long-press
    /// timers and fires [`EventKind::LongPress`] to the pressed actors whose
    /// timer ran out. Returns the number of tasks run.
    pub fn act(&mut self, delta: f64) -> usize {
        self.time += delta;
        let tasks = self.tasks.drain();
        let ran = tasks.len();
        for task in tasks {
            task(self);
        }
        self.tick_long_presses(delta);
        self.listeners.prune(&self.tree);
        ran
    }

    fn tick_long_presses(&mut self, delta: f64) {
        let mut fired: SmallVec<[(usize, ActorId, Point); 2]> = SmallVec::new();
        for (&pointer, (actor, press)) in &mut self.long_presses {
            let origin = press.origin();
            if press.tick(delta) {
                if let Some(origin) = origin {
                    fired.push((pointer, *actor, origin));
                }
            }
        }
        fired.sort_by_key(|&(pointer, ..)| pointer);
        for (pointer, actor, origin) in fired {
            trace!("long press on {actor:?} (pointer {pointer})");
            let mut event = InputEvent::new(EventKind::LongPress, actor, origin).with_pointer(pointer);
            self.fire(&mut event);
        }
    }
}
