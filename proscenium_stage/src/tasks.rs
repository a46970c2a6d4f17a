// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-thread work queued onto the stage's logic thread.

use core::fmt;

use crossbeam_channel::{Receiver, Sender};

use crate::stage::Stage;

/// A unit of work run by [`Stage::act`].
pub type Task = Box<dyn FnOnce(&mut Stage) + Send>;

/// Returned by [`Poster::post`] once the stage has been dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostError;

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stage is gone; task was not queued")
    }
}

impl core::error::Error for PostError {}

/// Cloneable, `Send` handle for queueing work onto a [`Stage`].
///
/// ```
/// use proscenium_stage::{Stage, StageConfig};
///
/// let mut stage = Stage::new(StageConfig::default());
/// let poster = stage.poster();
/// std::thread::spawn(move || {
///     poster
///         .post(|stage| {
///             let root = stage.root();
///             stage.tree_mut().actor_mut(root).unwrap().visible = false;
///         })
///         .unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(stage.act(0.016), 1);
/// assert!(!stage.tree().actor(stage.root()).unwrap().visible);
/// ```
#[derive(Clone, Debug)]
pub struct Poster {
    tx: Sender<Task>,
}

impl Poster {
    /// Queue `task`; it runs during the next [`Stage::act`].
    pub fn post(&self, task: impl FnOnce(&mut Stage) + Send + 'static) -> Result<(), PostError> {
        self.tx.send(Box::new(task)).map_err(|_| PostError)
    }
}

/// The receiving end, owned by the stage.
#[derive(Debug)]
pub(crate) struct TaskQueue {
    tx: Sender<Task>,
    rx: Receiver<Task>,
}

impl TaskQueue {
    pub(crate) fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    pub(crate) fn poster(&self) -> Poster {
        Poster {
            tx: self.tx.clone(),
        }
    }

    /// Everything posted so far, in post order.
    pub(crate) fn drain(&self) -> Vec<Task> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_keeps_post_order() {
        let queue = TaskQueue::new();
        let poster = queue.poster();
        poster.post(|_| {}).unwrap();
        poster.clone().post(|_| {}).unwrap();
        assert_eq!(queue.drain().len(), 2);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn post_after_drop_fails() {
        let poster = TaskQueue::new().poster();
        assert_eq!(poster.post(|_| {}), Err(PostError));
        assert!(!PostError.to_string().is_empty());
    }
}
