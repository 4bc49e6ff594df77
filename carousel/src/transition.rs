// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition driver: the Idle/Animating state machine.
//!
//! An animated shift starts when a navigation request is accepted and ends
//! only when the host reports that the strip's own `transform` transition
//! finished. While animating, further animated requests are dropped; there is
//! no queue and no way to abort a shift in progress.
//!
//! Completion signals are filtered by [`TransitionEnd::is_track_transform`]:
//! transitions of other properties and signals bubbled up from slide content
//! do not end the shift.

/// Phase of the transition driver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No animated shift in flight.
    #[default]
    Idle,
    /// An animated shift is in flight.
    Animating,
}

/// A strip position the host must apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackMove {
    /// Target track position (`0..=N+1`).
    pub position: usize,
    /// Whether the shift is animated. Snap corrections and direct jumps are not.
    pub animated: bool,
}

impl TrackMove {
    /// An animated shift to `position`.
    #[must_use]
    pub fn animated(position: usize) -> Self {
        Self {
            position,
            animated: true,
        }
    }

    /// An instantaneous jump to `position`.
    #[must_use]
    pub fn instant(position: usize) -> Self {
        Self {
            position,
            animated: false,
        }
    }
}

/// Element a transition-completion signal originated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionTarget {
    /// The strip element itself.
    Track,
    /// Any descendant (slide content, links, images).
    Other,
}

/// Property whose transition completed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// `transform`.
    Transform,
    /// Anything else (`opacity`, `box-shadow`, ...).
    Other,
}

impl TransitionProperty {
    /// Maps a DOM `TransitionEvent.propertyName`.
    #[must_use]
    pub fn from_property_name(name: &str) -> Self {
        if name == "transform" {
            Self::Transform
        } else {
            Self::Other
        }
    }
}

/// A transition-completion signal reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionEnd {
    /// Where the signal originated.
    pub target: TransitionTarget,
    /// Which property finished.
    pub property: TransitionProperty,
}

impl TransitionEnd {
    /// The signal that ends an animated shift.
    pub const TRACK_TRANSFORM: Self = Self {
        target: TransitionTarget::Track,
        property: TransitionProperty::Transform,
    };

    /// Returns `true` only for the strip's own `transform` transition.
    #[must_use]
    pub fn is_track_transform(&self) -> bool {
        self.target == TransitionTarget::Track && self.property == TransitionProperty::Transform
    }
}

/// What happened when a completion signal was delivered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Completion {
    /// The signal did not match the strip's transform and was ignored.
    Ignored,
    /// The shift ended inside the real range; nothing to apply.
    Settled,
    /// The shift ended on a clone; the host must apply this unanimated move
    /// and flush layout before the next paint.
    Snapped(TrackMove),
}

/// Tracks whether an animated shift is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TransitionDriver {
    phase: Phase,
}

impl TransitionDriver {
    pub(crate) fn phase(self) -> Phase {
        self.phase
    }

    pub(crate) fn is_animating(self) -> bool {
        self.phase == Phase::Animating
    }

    /// Enter `Animating`. Returns `false` if a shift is already in flight.
    pub(crate) fn begin(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.phase = Phase::Animating;
        true
    }

    pub(crate) fn finish(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_filter_requires_track_and_transform() {
        assert!(TransitionEnd::TRACK_TRANSFORM.is_track_transform());
        assert!(
            !TransitionEnd {
                target: TransitionTarget::Other,
                property: TransitionProperty::Transform,
            }
            .is_track_transform()
        );
        assert!(
            !TransitionEnd {
                target: TransitionTarget::Track,
                property: TransitionProperty::Other,
            }
            .is_track_transform()
        );
    }

    #[test]
    fn property_names() {
        assert_eq!(
            TransitionProperty::from_property_name("transform"),
            TransitionProperty::Transform
        );
        assert_eq!(
            TransitionProperty::from_property_name("opacity"),
            TransitionProperty::Other
        );
    }

    #[test]
    fn driver_refuses_overlapping_begin() {
        let mut driver = TransitionDriver::default();
        assert_eq!(driver.phase(), Phase::Idle);
        assert!(driver.begin());
        assert!(!driver.begin());
        assert!(driver.is_animating());
        driver.finish();
        assert!(driver.begin());
    }
}
