// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Converts frame timestamps into per-frame elapsed time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Creates a clock with no baseline.
    #[must_use]
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Records a frame at `timestamp_ms` and returns the time since the previous one.
    ///
    /// Returns `0.0` for the first frame after a reset, for timestamps that go
    /// backwards, and for non-finite timestamps (which are not recorded).
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let elapsed = match self.last {
            Some(prev) => (timestamp_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        elapsed
    }

    /// Forget the baseline; the next frame contributes no elapsed time.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Timestamp of the most recent frame, if a baseline exists.
    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_baseline_only() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1234.0), 0.0);
        assert_eq!(clock.baseline(), Some(1234.0));
        assert_eq!(clock.tick(1250.0), 16.0);
    }

    #[test]
    fn reset_discards_baseline() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.tick(16.0);
        clock.reset();
        assert_eq!(clock.baseline(), None);
        assert_eq!(clock.tick(5000.0), 0.0);
        assert_eq!(clock.tick(5016.0), 16.0);
    }

    #[test]
    fn backwards_time_counts_as_zero() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), 0.0);
        assert_eq!(clock.tick(60.0), 10.0);
    }

    #[test]
    fn non_finite_timestamps_are_skipped() {
        let mut clock = FrameClock::new();
        clock.tick(10.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert_eq!(clock.tick(f64::INFINITY), 0.0);
        assert_eq!(clock.baseline(), Some(10.0));
        assert_eq!(clock.tick(26.0), 16.0);
    }
}
