// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-order traversal handing world-space quads to a [`Batch`].

use kurbo::{Affine, Point};
use peniko::Color;

use crate::tree::ActorTree;
use crate::types::ActorId;

/// One actor as seen by the renderer.
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    /// The actor being drawn.
    pub actor: ActorId,
    /// World-space corners of the actor's bounds: bottom-left, bottom-right,
    /// top-right, top-left (in local space terms).
    pub quad: [Point; 4],
    /// The actor's color with its alpha multiplied by every ancestor's alpha.
    pub color: Color,
    /// Distance from the traversal root (the root itself is `0`).
    pub depth: usize,
}

/// Sink for draw items; implemented by a rendering backend.
pub trait Batch {
    /// Receive the next actor in paint order.
    fn draw(&mut self, item: &DrawItem);
}

impl<F: FnMut(&DrawItem)> Batch for F {
    fn draw(&mut self, item: &DrawItem) {
        self(item);
    }
}

impl ActorTree {
    /// Walk `root` and its visible descendants in paint order.
    ///
    /// `root` is placed with its own transform, so the quads are expressed in
    /// the space `root` lives in. Invisible actors are skipped together with
    /// their subtrees.
    pub fn draw(&self, root: ActorId, batch: &mut impl Batch) {
        self.draw_recursive(root, Affine::IDENTITY, 1.0, 0, batch);
    }

    fn draw_recursive(
        &self,
        id: ActorId,
        parent_tf: Affine,
        parent_alpha: f32,
        depth: usize,
        batch: &mut impl Batch,
    ) {
        let Some(actor) = self.actor(id) else {
            return;
        };
        if !actor.visible {
            return;
        }
        let tf = parent_tf * actor.transform.local_transform();
        let bounds = actor.transform.bounds();
        batch.draw(&DrawItem {
            actor: id,
            quad: [
                tf * Point::new(bounds.x0, bounds.y0),
                tf * Point::new(bounds.x1, bounds.y0),
                tf * Point::new(bounds.x1, bounds.y1),
                tf * Point::new(bounds.x0, bounds.y1),
            ],
            color: actor.color.multiply_alpha(parent_alpha),
            depth,
        });
        let alpha = parent_alpha * actor.alpha();
        for &child in self.children_of(id) {
            self.draw_recursive(child, tf, alpha, depth + 1, batch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Actor, Transform};
    use alloc::vec::Vec;

    #[test]
    fn paint_order_and_alpha() {
        let mut tree = ActorTree::new();
        let root = tree.insert_group(Actor::default());
        let g = tree.insert_group(Actor {
            transform: Transform::at(10.0, 10.0, 0.0, 0.0),
            color: Color::new([1.0, 1.0, 1.0, 0.5]),
            ..Actor::default()
        });
        let a = tree.insert_leaf(Actor::with_transform(Transform::at(1.0, 2.0, 4.0, 3.0)));
        let b = tree.insert_leaf(Actor::with_transform(Transform::at(0.0, 0.0, 1.0, 1.0)));
        let hidden = tree.insert_leaf(Actor {
            visible: false,
            ..Actor::default()
        });
        tree.add_child(root, g).unwrap();
        tree.add_child(g, a).unwrap();
        tree.add_child(root, b).unwrap();
        tree.add_child(root, hidden).unwrap();

        let mut items: Vec<DrawItem> = Vec::new();
        tree.draw(root, &mut |item: &DrawItem| items.push(*item));

        let order: Vec<ActorId> = items.iter().map(|i| i.actor).collect();
        assert_eq!(order, [root, g, a, b]);

        let a_item = items[2];
        assert_eq!(a_item.depth, 2);
        assert_eq!(a_item.quad[0], Point::new(11.0, 12.0));
        assert_eq!(a_item.quad[2], Point::new(15.0, 15.0));
        assert!((a_item.color.components[3] - 0.5).abs() < 1e-6);
        assert!((items[3].color.components[3] - 1.0).abs() < 1e-6);
    }
}
