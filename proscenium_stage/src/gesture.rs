// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture primitives driven by stage points and `act` ticks.
//!
//! None of these block or read a clock; time only advances through the
//! values passed in, which keeps them deterministic under test.
//!
//! ```
//! use kurbo::Point;
//! use proscenium_stage::gesture::DragTracker;
//!
//! let mut drag = DragTracker::new(4.0);
//! drag.press(Point::new(10.0, 10.0));
//! // Still inside the threshold: no drag yet.
//! assert_eq!(drag.update(Point::new(12.0, 10.0)), None);
//! // Crossing it reports the full movement since the press.
//! let delta = drag.update(Point::new(20.0, 10.0)).unwrap();
//! assert_eq!(delta.x, 10.0);
//! assert!(drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Whether `b` lies within the tap square of side `2 * half` centered at `a`.
fn in_square(a: Point, b: Point, half: f64) -> bool {
    (b.x - a.x).abs() < half && (b.y - a.y).abs() < half
}

/// Tracks a drag from a press point, with a start threshold.
///
/// Movement deltas are only reported once the pointer has left the threshold
/// square around the press point; the first reported delta covers all the
/// movement since the press.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    threshold: f64,
    start: Option<Point>,
    last: Option<Point>,
    dragging: bool,
}

impl DragTracker {
    /// Create a tracker that starts dragging once the pointer moves
    /// `threshold` units along either axis.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Begin tracking from `pos`.
    pub fn press(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
        self.dragging = false;
    }

    /// Whether a press is being tracked.
    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }

    /// Whether the threshold has been crossed.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Record a move; returns the delta since the previous reported position
    /// once dragging.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start?;
        if !self.dragging {
            if in_square(start, pos, self.threshold) {
                return None;
            }
            self.dragging = true;
        }
        let last = self.last.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `pos` from the press point.
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start.map(|s| pos - s)
    }

    /// Stop tracking. Returns whether a drag had started.
    pub fn end(&mut self) -> bool {
        let was = self.dragging;
        *self = Self::new(self.threshold);
        was
    }
}

/// Long-press detector advanced by frame ticks.
#[derive(Clone, Copy, Debug)]
pub struct LongPress {
    duration: f64,
    tap_square: f64,
    origin: Option<Point>,
    elapsed: f64,
    fired: bool,
}

impl LongPress {
    /// Fire after `duration` seconds unless the pointer moves `tap_square`
    /// units away from where it went down.
    pub fn new(duration: f64, tap_square: f64) -> Self {
        Self {
            duration,
            tap_square,
            origin: None,
            elapsed: 0.0,
            fired: false,
        }
    }

    /// Arm at `pos`.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.elapsed = 0.0;
        self.fired = false;
    }

    /// Where the press happened, while armed.
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Whether the detector is armed and has not fired yet.
    pub fn is_armed(&self) -> bool {
        self.origin.is_some() && !self.fired
    }

    /// Cancel if `pos` left the tap square.
    pub fn moved(&mut self, pos: Point) {
        if let Some(origin) = self.origin {
            if !in_square(origin, pos, self.tap_square) {
                self.release();
            }
        }
    }

    /// Disarm.
    pub fn release(&mut self) {
        self.origin = None;
        self.elapsed = 0.0;
    }

    /// Advance by `delta` seconds; returns `true` on the tick the press
    /// becomes long, and never again until re-armed.
    pub fn tick(&mut self, delta: f64) -> bool {
        if !self.is_armed() {
            return false;
        }
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Counts consecutive taps close together in time and space.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickCounter {
    last: Option<(f64, Point)>,
    count: u32,
}

impl ClickCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tap at time `now` and `pos`; returns the tap count of the
    /// current sequence (1 for a fresh tap).
    ///
    /// A tap continues the sequence when it comes within `interval` seconds of
    /// the previous one and inside its tap square.
    pub fn register(&mut self, now: f64, pos: Point, interval: f64, tap_square: f64) -> u32 {
        let continues = self
            .last
            .is_some_and(|(t, p)| now - t <= interval && in_square(p, pos, tap_square));
        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((now, pos));
        self.count
    }

    /// Count of the current sequence.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Start over.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
