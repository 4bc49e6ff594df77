// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe state helper: classify a press/release pair by horizontal distance.
//!
//! ## Usage
//!
//! 1) On pointer-down call [`SwipeState::start`] with the pointer kind and position.
//!    Pointer kinds that cannot swipe (pen, unknown) are ignored.
//! 2) Optionally call [`SwipeState::total_offset`] while the pointer is held.
//! 3) On pointer-up call [`SwipeState::finish`]; it classifies the gesture and resets state.
//! 4) On pointer-cancel call [`SwipeState::cancel`] to drop the gesture without a result.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use carousel_event_state::swipe::{PointerKind, Swipe, SwipeState};
//!
//! let mut swipe = SwipeState::new(40.0);
//!
//! // Dragging to the right reveals the previous slide.
//! swipe.start(PointerKind::Mouse, Point::new(10.0, 0.0));
//! assert_eq!(swipe.finish(Point::new(51.0, 0.0)), Some(Swipe::Backward));
//!
//! // Short movements are taps, not swipes.
//! swipe.start(PointerKind::Mouse, Point::new(10.0, 0.0));
//! assert_eq!(swipe.finish(Point::new(49.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Horizontal distance, in pixels, a pointer must travel to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 40.0;

/// Kind of pointer that produced a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad.
    Mouse,
    /// Finger on a touch screen.
    Touch,
    /// Stylus.
    Pen,
    /// Anything else the host reports.
    Other,
}

impl PointerKind {
    /// Maps a DOM `PointerEvent.pointerType` value.
    #[must_use]
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => Self::Mouse,
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Other,
        }
    }

    /// Returns `true` for kinds that may start a swipe (mouse and touch).
    #[must_use]
    pub fn can_swipe(self) -> bool {
        matches!(self, Self::Mouse | Self::Touch)
    }
}

/// Result of a completed swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// Pointer moved left past the threshold; reveal the next slide.
    Forward,
    /// Pointer moved right past the threshold; reveal the previous slide.
    Backward,
}

/// Tracks a single press for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeState {
    /// Position of the press, while a gesture is active.
    pub start_pos: Option<Point>,
    threshold: f64,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeState {
    /// Creates an idle state with the given horizontal threshold in pixels.
    ///
    /// Negative thresholds are treated as zero.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            start_pos: None,
            threshold: threshold.max(0.0),
        }
    }

    /// Horizontal distance a release must exceed to count as a swipe.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start tracking a press at `pos`.
    ///
    /// Returns `false` and leaves state untouched when `kind` cannot swipe.
    pub fn start(&mut self, kind: PointerKind, pos: Point) -> bool {
        if !kind.can_swipe() {
            return false;
        }
        self.start_pos = Some(pos);
        true
    }

    /// Offset from the press to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Classify the release at `pos` and reset state.
    ///
    /// The comparison is strict: a movement of exactly the threshold is a tap.
    /// Returns `None` for taps and for releases without a tracked press.
    pub fn finish(&mut self, pos: Point) -> Option<Swipe> {
        let dx = self.total_offset(pos)?.x;
        self.cancel();
        if dx > self.threshold {
            Some(Swipe::Backward)
        } else if dx < -self.threshold {
            Some(Swipe::Forward)
        } else {
            None
        }
    }

    /// Drop the current gesture, if any.
    pub fn cancel(&mut self) {
        self.start_pos = None;
    }

    /// Returns `true` between a tracked press and its release.
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }
}
