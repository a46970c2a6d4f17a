// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};
use log::warn;

use crate::modes::{Scaling, YAxis};

/// Orthographic camera looking at the stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// World-space point shown at the center of the viewport.
    pub position: Point,
    /// Zoom factor; values above `1.0` show more of the world.
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

/// Maps between screen pixels and stage (world) units.
///
/// `Viewport` tracks the screen size, the world size requested by the
/// [`Scaling`] policy, and a [`Camera`]. It can be used to:
/// - Convert points between screen and stage coordinates.
/// - Recompute the on-screen viewport rectangle when the window is resized.
/// - Choose between a Y-up and a Y-down stage via [`YAxis`].
#[derive(Clone, Debug)]
pub struct Viewport {
    scaling: Scaling,
    y_axis: YAxis,
    min_world: Size,
    world_size: Size,
    screen_size: Size,
    screen_rect: Rect,
    camera: Camera,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport for a world of the given size.
    ///
    /// The screen is initially assumed to match the world size and the camera
    /// is centered on the world. Call [`Viewport::update`] when the real
    /// screen size is known.
    #[must_use]
    pub fn new(scaling: Scaling, world_width: f64, world_height: f64) -> Self {
        let world = Size::new(world_width, world_height);
        let mut vp = Self {
            scaling,
            y_axis: YAxis::default(),
            min_world: world,
            world_size: world,
            screen_size: world,
            screen_rect: world.to_rect(),
            camera: Camera::default(),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        vp.update(world_width, world_height, true);
        vp
    }

    /// Sets the Y axis convention, builder style.
    #[must_use]
    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.set_y_axis(y_axis);
        self
    }

    /// Returns the scaling policy.
    #[must_use]
    pub fn scaling(&self) -> Scaling {
        self.scaling
    }

    /// Replaces the scaling policy and reapplies it to the current screen size.
    pub fn set_scaling(&mut self, scaling: Scaling) {
        self.scaling = scaling;
        self.update(self.screen_size.width, self.screen_size.height, false);
    }

    /// Returns the Y axis convention.
    #[must_use]
    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    /// Sets the Y axis convention.
    pub fn set_y_axis(&mut self, y_axis: YAxis) {
        if self.y_axis != y_axis {
            self.y_axis = y_axis;
            self.rebuild_transforms();
        }
    }

    /// The effective world size after applying the scaling policy.
    #[must_use]
    pub fn world_size(&self) -> Size {
        self.world_size
    }

    /// The screen size passed to the last [`Viewport::update`].
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// The on-screen rectangle the world is drawn into (top-left origin).
    ///
    /// With [`Scaling::Fill`] this may extend past the screen edges.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Moves the camera so `position` is shown at the viewport center.
    pub fn set_camera_position(&mut self, position: Point) {
        self.camera.position = position;
        self.rebuild_transforms();
    }

    /// Sets the camera zoom.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.camera.zoom = zoom;
        self.rebuild_transforms();
    }

    /// Applies the scaling policy to a new screen size.
    ///
    /// When `center_camera` is true, the camera is moved to the world center.
    pub fn update(&mut self, screen_width: f64, screen_height: f64, center_camera: bool) {
        self.screen_size = Size::new(screen_width, screen_height);
        let screen = self.screen_size;
        let world = self.min_world;
        let (world_size, view_size) = match self.scaling {
            Scaling::Stretch => (world, screen),
            Scaling::Fit => {
                let s = (screen.width / world.width).min(screen.height / world.height);
                (world, world * s)
            }
            Scaling::Fill => {
                let s = (screen.width / world.width).max(screen.height / world.height);
                (world, world * s)
            }
            Scaling::Extend => {
                let s = (screen.width / world.width).min(screen.height / world.height);
                (Size::new(screen.width / s, screen.height / s), screen)
            }
            Scaling::ScreenPixel { units_per_pixel } => (screen * units_per_pixel, screen),
        };
        self.world_size = world_size;
        let origin = Point::new(
            (screen.width - view_size.width) / 2.0,
            (screen.height - view_size.height) / 2.0,
        );
        self.screen_rect = Rect::from_origin_size(origin, view_size);
        if center_camera {
            self.camera.position = Point::new(world_size.width / 2.0, world_size.height / 2.0);
        }
        self.rebuild_transforms();
    }

    /// Converts a screen point (top-left origin, Y down) into stage coordinates.
    #[must_use]
    pub fn unproject(&self, screen: Point) -> Point {
        self.screen_to_world * screen
    }

    /// Converts a stage point into screen coordinates.
    #[must_use]
    pub fn project(&self, world: Point) -> Point {
        self.world_to_screen * world
    }

    /// Returns true if `screen` lies inside the viewport rectangle (not in a letterbox bar).
    #[must_use]
    pub fn contains_screen_point(&self, screen: Point) -> bool {
        self.screen_rect.contains(screen)
    }

    /// The stage-space rectangle currently shown through the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let half = Size::new(
            self.world_size.width * self.camera.zoom / 2.0,
            self.world_size.height * self.camera.zoom / 2.0,
        );
        Rect::new(
            self.camera.position.x - half.width,
            self.camera.position.y - half.height,
            self.camera.position.x + half.width,
            self.camera.position.y + half.height,
        )
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            scaling: self.scaling,
            y_axis: self.y_axis,
            world_size: self.world_size,
            screen_size: self.screen_size,
            screen_rect: self.screen_rect,
            visible_world_rect: self.visible_world_rect(),
            camera: self.camera,
        }
    }

    fn rebuild_transforms(&mut self) {
        let visible = self.visible_world_rect();
        let rect = self.screen_rect;
        if visible.width() <= 0.0
            || visible.height() <= 0.0
            || rect.width() <= 0.0
            || rect.height() <= 0.0
            || !visible.is_finite()
            || !rect.is_finite()
        {
            warn!("degenerate viewport: screen {rect:?}, world {visible:?}");
            self.world_to_screen = Affine::new([f64::NAN; 6]);
            self.screen_to_world = Affine::new([f64::NAN; 6]);
            return;
        }
        let sx = rect.width() / visible.width();
        let sy = rect.height() / visible.height();
        // World → screen: move the visible rect's corner to the origin, scale,
        // then place into the screen rect, flipping Y for a Y-up stage.
        self.world_to_screen = match self.y_axis {
            YAxis::Up => {
                Affine::translate((rect.x0 - visible.x0 * sx, rect.y1 + visible.y0 * sy))
                    * Affine::scale_non_uniform(sx, -sy)
            }
            YAxis::Down => {
                Affine::translate((rect.x0 - visible.x0 * sx, rect.y0 - visible.y0 * sy))
                    * Affine::scale_non_uniform(sx, sy)
            }
        };
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Scaling policy.
    pub scaling: Scaling,
    /// Y axis convention.
    pub y_axis: YAxis,
    /// Effective world size.
    pub world_size: Size,
    /// Screen size from the last update.
    pub screen_size: Size,
    /// On-screen viewport rectangle.
    pub screen_rect: Rect,
    /// Stage-space rectangle currently visible.
    pub visible_world_rect: Rect,
    /// Camera state.
    pub camera: Camera,
}
