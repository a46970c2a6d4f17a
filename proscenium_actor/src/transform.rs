// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Local transform of an actor and the point mappings it induces.
//!
//! A [`Transform`] places an actor inside its parent's coordinate space.
//! Scale and rotation are applied about the [`origin`](Transform::origin),
//! which lives in the actor's own (untransformed) space, and the result is
//! then translated by [`position`](Transform::position).
//!
//! ```
//! use kurbo::{Point, Size};
//! use proscenium_actor::Transform;
//!
//! let tf = Transform {
//!     position: Point::new(100.0, 100.0),
//!     size: Size::new(20.0, 20.0),
//!     ..Transform::default()
//! };
//! assert_eq!(tf.local_to_parent(Point::new(5.0, 5.0)), Point::new(105.0, 105.0));
//! assert_eq!(tf.parent_to_local(Point::new(105.0, 105.0)), Point::new(5.0, 5.0));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Position, size, origin, scale and rotation of a single actor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Bottom-left corner of the actor in parent space.
    pub position: Point,
    /// Untransformed size. Local bounds are `[0, width) x [0, height)`.
    pub size: Size,
    /// Pivot for scale and rotation, in local space.
    pub origin: Point,
    /// Per-axis scale factors.
    pub scale: Vec2,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f64,
    /// When `false`, scale and rotation are ignored and the actor is only translated.
    pub transform_enabled: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            size: Size::ZERO,
            origin: Point::ORIGIN,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            transform_enabled: true,
        }
    }
}

impl Transform {
    /// A transform at `(x, y)` with the given size and no rotation or scale.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point::new(x, y),
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Local, untransformed bounds.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Returns true if `pt` (in local space) lies inside the half-open bounds.
    pub fn contains_local(&self, pt: Point) -> bool {
        pt.x >= 0.0 && pt.x < self.size.width && pt.y >= 0.0 && pt.y < self.size.height
    }

    /// Moves the origin to the center of the current size.
    pub fn set_origin_center(&mut self) {
        self.origin = Point::new(self.size.width / 2.0, self.size.height / 2.0);
    }

    /// Sets both scale factors to `s`.
    pub fn set_scale(&mut self, s: f64) {
        self.scale = Vec2::new(s, s);
    }

    /// Translates the position by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Adds `degrees` to the rotation.
    pub fn rotate_by(&mut self, degrees: f64) {
        self.rotation += degrees;
    }

    /// Returns true when the point mappings reduce to a translation.
    fn is_translation_only(&self) -> bool {
        !self.transform_enabled
            || (self.rotation == 0.0 && self.scale.x == 1.0 && self.scale.y == 1.0)
    }

    fn sin_cos(&self) -> (f64, f64) {
        let radians = self.rotation.to_radians();
        (radians.sin(), radians.cos())
    }

    /// Maps a point from this actor's local space into its parent's space.
    pub fn local_to_parent(&self, pt: Point) -> Point {
        if self.is_translation_only() {
            return pt + self.position.to_vec2();
        }
        let dx = (pt.x - self.origin.x) * self.scale.x;
        let dy = (pt.y - self.origin.y) * self.scale.y;
        let (sin, cos) = self.sin_cos();
        Point::new(
            dx * cos - dy * sin + self.origin.x + self.position.x,
            dx * sin + dy * cos + self.origin.y + self.position.y,
        )
    }

    /// Maps a point from the parent's space into this actor's local space.
    ///
    /// A zero scale factor makes the axis non-invertible; that coordinate
    /// comes back as NaN, which never lies inside any bounds.
    pub fn parent_to_local(&self, pt: Point) -> Point {
        let tx = pt.x - self.position.x;
        let ty = pt.y - self.position.y;
        if self.is_translation_only() {
            return Point::new(tx, ty);
        }
        let ox = tx - self.origin.x;
        let oy = ty - self.origin.y;
        let (sin, cos) = self.sin_cos();
        let rx = ox * cos + oy * sin;
        let ry = -ox * sin + oy * cos;
        Point::new(
            unscale(rx, self.scale.x) + self.origin.x,
            unscale(ry, self.scale.y) + self.origin.y,
        )
    }

    /// The local-to-parent mapping as an affine matrix.
    pub fn local_transform(&self) -> Affine {
        if self.is_translation_only() {
            return Affine::translate(self.position.to_vec2());
        }
        let origin = self.origin.to_vec2();
        Affine::translate(self.position.to_vec2() + origin)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
            * Affine::translate(-origin)
    }
}

#[inline]
fn unscale(v: f64, scale: f64) -> f64 {
    if scale == 0.0 { f64::NAN } else { v / scale }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn untransformed_is_exact_translation() {
        let tf = Transform::at(12.5, -3.25, 10.0, 10.0);
        let p = Point::new(0.1, 0.7);
        assert_eq!(tf.local_to_parent(p), p + Vec2::new(12.5, -3.25));
        assert_eq!(tf.parent_to_local(tf.local_to_parent(p)), p);
    }

    #[test]
    fn round_trip_under_rotation_and_scale() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.5, -7.25),
            Point::new(-40.0, 12.0),
        ];
        for rotation in [0.0, 17.0, 90.0, 135.5, 270.0, 359.0] {
            for scale in [Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.5), Vec2::new(-1.5, 3.0)] {
                let tf = Transform {
                    position: Point::new(100.0, -20.0),
                    size: Size::new(30.0, 40.0),
                    origin: Point::new(15.0, 20.0),
                    scale,
                    rotation,
                    transform_enabled: true,
                };
                for p in pts {
                    let back = tf.parent_to_local(tf.local_to_parent(p));
                    assert!(close(back, p), "rotation {rotation} scale {scale:?}: {back:?} != {p:?}");
                }
            }
        }
    }

    #[test]
    fn rotation_is_about_origin() {
        let tf = Transform {
            size: Size::new(10.0, 10.0),
            origin: Point::new(5.0, 5.0),
            rotation: 90.0,
            ..Transform::default()
        };
        // The origin itself is a fixed point.
        assert!(close(tf.local_to_parent(Point::new(5.0, 5.0)), Point::new(5.0, 5.0)));
        // Counter-clockwise: (10, 5) swings up to (5, 10).
        assert!(close(tf.local_to_parent(Point::new(10.0, 5.0)), Point::new(5.0, 10.0)));
    }

    #[test]
    fn disabled_transform_ignores_rotation_and_scale() {
        let tf = Transform {
            position: Point::new(10.0, 20.0),
            scale: Vec2::new(3.0, 3.0),
            rotation: 45.0,
            transform_enabled: false,
            ..Transform::default()
        };
        assert_eq!(tf.local_to_parent(Point::new(1.0, 1.0)), Point::new(11.0, 21.0));
        assert_eq!(tf.parent_to_local(Point::new(11.0, 21.0)), Point::new(1.0, 1.0));
        assert_eq!(
            tf.local_transform(),
            Affine::translate(Vec2::new(10.0, 20.0)),
            "disabled transform should be a pure translation"
        );
    }

    #[test]
    fn zero_scale_yields_nan_instead_of_panicking() {
        let tf = Transform {
            size: Size::new(10.0, 10.0),
            scale: Vec2::new(0.0, 2.0),
            ..Transform::default()
        };
        let local = tf.parent_to_local(Point::new(4.0, 4.0));
        assert!(local.x.is_nan());
        assert!((local.y - 2.0).abs() < EPS);
        assert!(!tf.contains_local(local));
    }

    #[test]
    fn affine_agrees_with_point_mapping() {
        let tf = Transform {
            position: Point::new(7.0, 9.0),
            origin: Point::new(2.0, 1.0),
            scale: Vec2::new(1.5, 0.75),
            rotation: 33.0,
            ..Transform::default()
        };
        let p = Point::new(4.0, -6.0);
        assert!(close(tf.local_transform() * p, tf.local_to_parent(p)));
    }

    #[test]
    fn bounds_are_half_open() {
        let tf = Transform::at(0.0, 0.0, 20.0, 20.0);
        assert!(tf.contains_local(Point::new(0.0, 0.0)));
        assert!(tf.contains_local(Point::new(19.999, 19.999)));
        assert!(!tf.contains_local(Point::new(20.0, 5.0)));
        assert!(!tf.contains_local(Point::new(5.0, -0.001)));
    }
}
