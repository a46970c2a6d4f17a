// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event listeners and the per-stage listener registry.

use std::fmt;

use hashbrown::{HashMap, HashSet};
use proscenium_actor::{ActorId, ActorTree};

use crate::event::InputEvent;
use crate::stage::Stage;

/// Receives events routed through an actor.
///
/// Returning `true` marks the event handled, which ends bubbling after the
/// current actor. Listeners get the whole stage, so they can move focus,
/// edit the tree or fire further events.
///
/// Any `FnMut(&mut InputEvent, &mut Stage) -> bool` is a listener.
pub trait EventListener {
    /// React to `event`; return `true` if it was handled.
    fn handle(&mut self, event: &mut InputEvent, stage: &mut Stage) -> bool;
}

impl<F> EventListener for F
where
    F: FnMut(&mut InputEvent, &mut Stage) -> bool,
{
    fn handle(&mut self, event: &mut InputEvent, stage: &mut Stage) -> bool {
        self(event, stage)
    }
}

/// Handle returned when registering a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub(crate) type Entry = (ListenerId, Box<dyn EventListener>);

#[derive(Default)]
struct ActorListeners {
    capture: Vec<Entry>,
    normal: Vec<Entry>,
}

impl ActorListeners {
    fn list(&mut self, capture: bool) -> &mut Vec<Entry> {
        if capture {
            &mut self.capture
        } else {
            &mut self.normal
        }
    }

    fn is_empty(&self) -> bool {
        self.capture.is_empty() && self.normal.is_empty()
    }
}

/// Listener storage keyed by actor.
///
/// While an actor's listeners run they are lent out with [`Listeners::take`]
/// and handed back with [`Listeners::restore`]. Listeners added meanwhile land
/// after the lent ones; removals of lent listeners are remembered and applied
/// on restore.
#[derive(Default)]
pub(crate) struct Listeners {
    by_actor: HashMap<ActorId, ActorListeners>,
    next_id: u64,
    /// Ids currently lent out, per owning actor.
    lent: HashMap<ActorId, Vec<ListenerId>>,
    pending_removals: HashSet<ListenerId>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("actors", &self.by_actor.len())
            .field("lent", &self.lent.values().map(Vec::len).sum::<usize>())
            .field("pending_removals", &self.pending_removals.len())
            .finish_non_exhaustive()
    }
}

impl Listeners {
    pub(crate) fn add(
        &mut self,
        actor: ActorId,
        capture: bool,
        listener: Box<dyn EventListener>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.by_actor
            .entry(actor)
            .or_default()
            .list(capture)
            .push((id, listener));
        id
    }

    /// Remove `id` from `actor`. A lent listener is dropped on restore.
    pub(crate) fn remove(&mut self, actor: ActorId, id: ListenerId) -> bool {
        if let Some(entry) = self.by_actor.get_mut(&actor) {
            for list in [&mut entry.capture, &mut entry.normal] {
                if let Some(i) = list.iter().position(|(lid, _)| *lid == id) {
                    list.remove(i);
                    return true;
                }
            }
        }
        let is_lent = self.lent.get(&actor).is_some_and(|ids| ids.contains(&id));
        is_lent && self.pending_removals.insert(id)
    }

    pub(crate) fn remove_all(&mut self, actor: ActorId) -> usize {
        let stored = self
            .by_actor
            .remove(&actor)
            .map_or(0, |e| e.capture.len() + e.normal.len());
        let mut deferred = 0;
        if let Some(ids) = self.lent.get(&actor) {
            for id in ids {
                if self.pending_removals.insert(*id) {
                    deferred += 1;
                }
            }
        }
        stored + deferred
    }

    pub(crate) fn count(&self, actor: ActorId) -> usize {
        self.by_actor
            .get(&actor)
            .map_or(0, |e| e.capture.len() + e.normal.len())
    }

    pub(crate) fn take(&mut self, actor: ActorId, capture: bool) -> Vec<Entry> {
        let taken = self
            .by_actor
            .get_mut(&actor)
            .map(|e| std::mem::take(e.list(capture)))
            .unwrap_or_default();
        if !taken.is_empty() {
            self.lent
                .entry(actor)
                .or_default()
                .extend(taken.iter().map(|(id, _)| *id));
        }
        taken
    }

    pub(crate) fn restore(&mut self, actor: ActorId, capture: bool, mut lent: Vec<Entry>) {
        if let Some(ids) = self.lent.get_mut(&actor) {
            ids.retain(|id| !lent.iter().any(|(lid, _)| lid == id));
            if ids.is_empty() {
                self.lent.remove(&actor);
            }
        }
        if !self.pending_removals.is_empty() {
            lent.retain(|(id, _)| !self.pending_removals.remove(id));
        }
        if lent.is_empty() {
            return;
        }
        let list = self.by_actor.entry(actor).or_default().list(capture);
        let added = std::mem::replace(list, lent);
        list.extend(added);
    }

    /// Drop listeners of destroyed actors.
    pub(crate) fn prune(&mut self, tree: &ActorTree) {
        self.by_actor
            .retain(|id, e| tree.is_alive(*id) && !e.is_empty());
    }
}
