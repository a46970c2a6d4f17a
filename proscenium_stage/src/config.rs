// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use proscenium_view::{Scaling, YAxis};

/// Construction-time settings of a [`crate::Stage`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageConfig {
    /// World width in stage units.
    pub world_width: f64,
    /// World height in stage units.
    pub world_height: f64,
    /// Initial screen width in pixels.
    pub screen_width: f64,
    /// Initial screen height in pixels.
    pub screen_height: f64,
    /// How the world is fit to the screen.
    pub scaling: Scaling,
    /// Direction of the stage Y axis.
    pub y_axis: YAxis,
    /// Half side of the square (stage units) a pointer may wander in and
    /// still count as a tap.
    pub tap_square_size: f64,
    /// Seconds between taps that still count as one multi-click.
    pub double_click_interval: f64,
    /// Seconds a pointer must stay down for a long press.
    pub long_press_duration: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            world_width: 640.0,
            world_height: 480.0,
            screen_width: 640.0,
            screen_height: 480.0,
            scaling: Scaling::Stretch,
            y_axis: YAxis::Up,
            tap_square_size: 14.0,
            double_click_interval: 0.4,
            long_press_duration: 1.1,
        }
    }
}

impl StageConfig {
    /// A world of `width` × `height` shown on a screen of the same size.
    pub fn with_world_size(width: f64, height: f64) -> Self {
        Self {
            world_width: width,
            world_height: height,
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }
}
