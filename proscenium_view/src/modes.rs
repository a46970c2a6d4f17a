// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the world is mapped onto the screen when the screen size changes.
///
/// This enum is consulted by [`crate::Viewport::update`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Scaling {
    /// Fill the whole screen with the world, scaling each axis independently.
    #[default]
    Stretch,
    /// Scale uniformly so the whole world is visible, letterboxing the rest.
    Fit,
    /// Scale uniformly so the world covers the whole screen, cropping overflow.
    Fill,
    /// Scale uniformly to fit the configured world, then grow the world
    /// along the short axis so it covers the whole screen.
    Extend,
    /// Keep a fixed ratio of world units per screen pixel; the world size
    /// follows the screen size.
    ScreenPixel {
        /// World units covered by one screen pixel.
        units_per_pixel: f64,
    },
}

/// Direction of the stage's Y axis relative to the screen.
///
/// Screen coordinates always have their origin at the top-left corner with Y
/// growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum YAxis {
    /// Stage origin at the bottom-left, Y growing upward; screen Y is flipped.
    #[default]
    Up,
    /// Stage origin at the top-left, Y growing downward; no flip.
    Down,
}
