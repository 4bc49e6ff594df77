// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay progress accumulation.

/// Autoplay interval used when the host does not configure one.
pub const DEFAULT_INTERVAL_MS: f64 = 5000.0;

/// Returns `true` if `interval_ms` can drive autoplay (finite and positive).
#[must_use]
pub fn is_valid_interval(interval_ms: f64) -> bool {
    interval_ms.is_finite() && interval_ms > 0.0
}

/// Outcome of feeding elapsed time into [`Autoplay`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Advance {
    /// The interval has not elapsed yet.
    Pending,
    /// The interval elapsed; progress was reset to zero.
    Elapsed,
}

/// Progress through one autoplay interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Autoplay {
    interval_ms: f64,
    progress: f64,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl Autoplay {
    /// Creates autoplay progress for an interval of `interval_ms`.
    ///
    /// Invalid intervals (see [`is_valid_interval`]) fall back to
    /// [`DEFAULT_INTERVAL_MS`].
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: if is_valid_interval(interval_ms) {
                interval_ms
            } else {
                DEFAULT_INTERVAL_MS
            },
            progress: 0.0,
        }
    }

    /// Length of one interval in milliseconds.
    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Fraction of the current interval that has elapsed, in `[0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress as a percentage clamped to `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        (self.progress * 100.0).clamp(0.0, 100.0)
    }

    /// Add `elapsed_ms` of running time.
    ///
    /// When the accumulated fraction reaches `1.0` it resets to zero and
    /// [`Advance::Elapsed`] is returned. Any overshoot is discarded, so one
    /// call never reports more than one elapsed interval.
    pub fn advance(&mut self, elapsed_ms: f64) -> Advance {
        if elapsed_ms > 0.0 {
            self.progress += elapsed_ms / self.interval_ms;
        }
        if self.progress >= 1.0 {
            self.progress = 0.0;
            Advance::Elapsed
        } else {
            Advance::Pending
        }
    }

    /// Restart the current interval.
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }
}
