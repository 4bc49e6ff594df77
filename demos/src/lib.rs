// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the carousel demos.

use carousel::{TrackMove, TransitionEnd};

/// Frame spacing of a 60Hz display.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Stands in for a renderer: reports the end of each animated shift once its
/// duration has passed.
#[derive(Clone, Debug)]
pub struct SimulatedTrack {
    duration_ms: f64,
    landing_at: Option<f64>,
}

impl SimulatedTrack {
    /// Create a track whose transitions take `duration_ms`.
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: f64::from(duration_ms),
            landing_at: None,
        }
    }

    /// Apply a move at `now`. Unanimated moves land immediately and fire nothing.
    pub fn apply(&mut self, track: TrackMove, now: f64) {
        self.landing_at = track.animated.then_some(now + self.duration_ms);
    }

    /// Returns the completion signal once the running transition has finished.
    pub fn poll(&mut self, now: f64) -> Option<TransitionEnd> {
        let at = self.landing_at?;
        if now < at {
            return None;
        }
        self.landing_at = None;
        Some(TransitionEnd::TRACK_TRANSFORM)
    }
}
