// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by structural edits.

use core::fmt;

use crate::types::ActorId;

/// A structural edit that cannot be applied.
///
/// Moving an actor from one group to another is not an error; the actor is
/// detached from its previous parent first. Removing an actor that is not a
/// child is reported as `false` by the removing call rather than as an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// The id does not refer to a live actor.
    StaleActor(ActorId),
    /// Only groups can own children.
    NotAGroup(ActorId),
    /// The edit would make `parent` a descendant of `child`, or an actor its own parent.
    Cycle {
        /// The intended parent.
        parent: ActorId,
        /// The actor being attached.
        child: ActorId,
    },
    /// A sibling reference does not belong to the given group.
    NotAChild {
        /// The group that was searched.
        group: ActorId,
        /// The actor that was expected among its children.
        actor: ActorId,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleActor(id) => write!(f, "actor {id:?} is not alive"),
            Self::NotAGroup(id) => write!(f, "actor {id:?} is not a group"),
            Self::Cycle { parent, child } => write!(
                f,
                "attaching {child:?} under {parent:?} would create a cycle"
            ),
            Self::NotAChild { group, actor } => {
                write!(f, "actor {actor:?} is not a child of {group:?}")
            }
        }
    }
}

impl core::error::Error for TreeError {}
