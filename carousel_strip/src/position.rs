// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track position and logical index.
//!
//! The two indices are kept in lockstep (`track == logical + 1`) except right
//! after a relative step onto a boundary clone. [`StripPosition::settle`]
//! restores the relation and reports the unanimated [`Snap`] the host must
//! apply.

use crate::layout::StripLayout;

/// Direction of a relative step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices (next slide).
    Forward,
    /// Towards lower indices (previous slide).
    Backward,
}

/// Instantaneous jump from a clone back into the real range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snap {
    /// Clone position the strip was resting on.
    pub from: usize,
    /// Real position showing the same slide.
    pub to: usize,
}

/// Current position of a looping strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StripPosition {
    layout: StripLayout,
    logical: usize,
    track: usize,
}

impl StripPosition {
    /// Starts on the first real slide.
    #[must_use]
    pub fn new(layout: StripLayout) -> Self {
        Self {
            layout,
            logical: 0,
            track: 1,
        }
    }

    /// The layout this position moves over.
    #[must_use]
    pub fn layout(&self) -> StripLayout {
        self.layout
    }

    /// Logical index of the current slide, always in `0..N`.
    #[must_use]
    pub fn logical(&self) -> usize {
        self.logical
    }

    /// Track position, always in `0..=N+1`.
    #[must_use]
    pub fn track(&self) -> usize {
        self.track
    }

    /// Direct set: jump to real slide `index`.
    ///
    /// Returns `false` and leaves the position untouched if `index` is not a
    /// real slide.
    pub fn set(&mut self, index: usize) -> bool {
        match self.layout.position_of(index) {
            Some(track) => {
                self.logical = index;
                self.track = track;
                true
            }
            None => false,
        }
    }

    /// Relative step: move the strip exactly one cell and wrap the logical index.
    ///
    /// Stepping off either end of the real range lands on a boundary clone. If
    /// the strip is still resting on a clone from an earlier step, it is
    /// settled first so the track never leaves `0..=N+1`.
    ///
    /// Returns the new track position.
    pub fn step(&mut self, direction: Direction) -> usize {
        self.settle();
        let n = self.layout.slide_count();
        match direction {
            Direction::Forward => {
                self.track += 1;
                self.logical = (self.logical + 1) % n;
            }
            Direction::Backward => {
                self.track -= 1;
                self.logical = (self.logical + n - 1) % n;
            }
        }
        self.track
    }

    /// Returns `true` while the track rests on a boundary clone.
    #[must_use]
    pub fn on_clone(&self) -> bool {
        self.layout.is_clone(self.track)
    }

    /// Returns `true` when `track == logical + 1`.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.track == self.logical + 1
    }

    /// Snap correction after a transition lands on a clone.
    ///
    /// From the trailing clone (`N + 1`) the track jumps to `1`; from the
    /// leading clone (`0`) it jumps to `N`. Returns `None` when the strip is
    /// already in the real range.
    pub fn settle(&mut self) -> Option<Snap> {
        if !self.on_clone() {
            return None;
        }
        let from = self.track;
        self.track = self.logical + 1;
        Some(Snap {
            from,
            to: self.track,
        })
    }
}
