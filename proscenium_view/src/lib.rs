// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proscenium View: viewport policies for 2D stages.
//!
//! This crate provides a small, headless model of how a stage's world is
//! shown on a screen. It focuses on:
//! - Scaling strategies applied when the screen is resized ([`Scaling`]).
//! - An orthographic [`Camera`] (position + zoom).
//! - Conversion between screen pixels and stage units, including the Y axis
//!   convention ([`YAxis`]).
//!
//! It does **not** own any actors or rendering backend. The stage feeds
//! screen-space input through [`Viewport::unproject`] before hit testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use proscenium_view::{Scaling, Viewport};
//!
//! // A 320x240 world shown letterboxed in a 1280x720 window.
//! let mut view = Viewport::new(Scaling::Fit, 320.0, 240.0);
//! view.update(1280.0, 720.0, true);
//!
//! // Screen origin is top-left; the stage origin is bottom-left.
//! let stage_pt = view.unproject(Point::new(640.0, 360.0));
//! assert!((stage_pt.x - 160.0).abs() < 1e-9);
//! assert!((stage_pt.y - 120.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Screen coordinates always have a top-left origin. A [`YAxis::Up`] stage
//!   flips Y; a [`YAxis::Down`] stage does not.
//! - A degenerate viewport (zero area) maps every point to NaN rather than
//!   panicking, so a bad frame during a resize never takes down the loop.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport;

pub use modes::{Scaling, YAxis};
pub use viewport::{Camera, Viewport, ViewportDebugInfo};
