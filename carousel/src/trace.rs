// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace hooks for carousel state changes.
//!
//! The controller does not log on its own. Instead every state change, every
//! dropped request and every filtered input is reported to a
//! [`CarouselTrace`] sink chosen at construction:
//!
//! - [`NoTrace`] discards everything and is the default.
//! - [`TraceLog`] records [`TraceEvent`]s into a `Vec`, which is handy in tests.
//! - `TracingTrace` (with the `tracing` feature) forwards to `tracing` events.

use alloc::vec::Vec;

use carousel_strip::Snap;

use crate::transition::TrackMove;

/// What initiated a navigation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cause {
    /// The autoplay interval elapsed.
    Autoplay,
    /// An indicator was clicked, focused, or activated by key.
    Indicator,
    /// An arrow key.
    Key,
    /// A pointer swipe.
    Swipe,
    /// A direct call on the controller.
    Api,
}

/// Input that was filtered out without effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ignored {
    /// A completion signal for another element or property.
    ForeignTransition,
    /// A slide or indicator index outside `0..N`.
    IndexOutOfRange(usize),
    /// A track position outside the strip.
    PositionOutOfRange(usize),
    /// A pointer kind that cannot swipe.
    PointerKind,
    /// A frame delivered after the controller was stopped.
    Stopped,
}

/// One recorded trace hook invocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// See [`CarouselTrace::navigated`].
    Navigated {
        /// Initiator.
        cause: Cause,
        /// Logical index before.
        from: usize,
        /// Logical index after.
        to: usize,
        /// Strip position the host applies.
        track: TrackMove,
    },
    /// See [`CarouselTrace::dropped`].
    Dropped(Cause),
    /// See [`CarouselTrace::settled`].
    Settled(usize),
    /// See [`CarouselTrace::snapped`].
    Snapped(Snap),
    /// See [`CarouselTrace::pause_changed`].
    PauseChanged {
        /// User pause after the change.
        user: bool,
        /// Hover pause after the change.
        hover: bool,
    },
    /// See [`CarouselTrace::ignored`].
    Ignored(Ignored),
    /// See [`CarouselTrace::stopped`].
    Stopped,
}

/// A callback sink for carousel state changes.
///
/// All hooks default to doing nothing, so sinks only implement what they need.
pub trait CarouselTrace {
    /// The logical index changed and the strip must move.
    fn navigated(&mut self, cause: Cause, from: usize, to: usize, track: TrackMove) {
        let _ = (cause, from, to, track);
    }

    /// A request arrived while a shift was in flight and was discarded.
    fn dropped(&mut self, cause: Cause) {
        let _ = cause;
    }

    /// A shift completed inside the real range at `logical`.
    fn settled(&mut self, logical: usize) {
        let _ = logical;
    }

    /// A shift completed on a clone and the strip snapped back.
    fn snapped(&mut self, snap: Snap) {
        let _ = snap;
    }

    /// User or hover pause changed.
    fn pause_changed(&mut self, user: bool, hover: bool) {
        let _ = (user, hover);
    }

    /// Input was filtered out.
    fn ignored(&mut self, reason: Ignored) {
        let _ = reason;
    }

    /// The frame loop was stopped.
    fn stopped(&mut self) {}
}

/// Discards every hook.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTrace;

impl CarouselTrace for NoTrace {}

/// Records every hook as a [`TraceEvent`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<TraceEvent> {
        core::mem::take(&mut self.events)
    }

    /// Clears recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl CarouselTrace for TraceLog {
    fn navigated(&mut self, cause: Cause, from: usize, to: usize, track: TrackMove) {
        self.events.push(TraceEvent::Navigated {
            cause,
            from,
            to,
            track,
        });
    }

    fn dropped(&mut self, cause: Cause) {
        self.events.push(TraceEvent::Dropped(cause));
    }

    fn settled(&mut self, logical: usize) {
        self.events.push(TraceEvent::Settled(logical));
    }

    fn snapped(&mut self, snap: Snap) {
        self.events.push(TraceEvent::Snapped(snap));
    }

    fn pause_changed(&mut self, user: bool, hover: bool) {
        self.events.push(TraceEvent::PauseChanged { user, hover });
    }

    fn ignored(&mut self, reason: Ignored) {
        self.events.push(TraceEvent::Ignored(reason));
    }

    fn stopped(&mut self) {
        self.events.push(TraceEvent::Stopped);
    }
}

impl<T: CarouselTrace + ?Sized> CarouselTrace for &mut T {
    fn navigated(&mut self, cause: Cause, from: usize, to: usize, track: TrackMove) {
        (**self).navigated(cause, from, to, track);
    }

    fn dropped(&mut self, cause: Cause) {
        (**self).dropped(cause);
    }

    fn settled(&mut self, logical: usize) {
        (**self).settled(logical);
    }

    fn snapped(&mut self, snap: Snap) {
        (**self).snapped(snap);
    }

    fn pause_changed(&mut self, user: bool, hover: bool) {
        (**self).pause_changed(user, hover);
    }

    fn ignored(&mut self, reason: Ignored) {
        (**self).ignored(reason);
    }

    fn stopped(&mut self) {
        (**self).stopped();
    }
}

/// Forwards every hook to a `tracing` event under the `carousel` target.
///
/// Navigation, snaps and pause changes are `debug`; dropped and ignored
/// input is `trace`.
#[cfg(feature = "tracing")]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl CarouselTrace for TracingTrace {
    fn navigated(&mut self, cause: Cause, from: usize, to: usize, track: TrackMove) {
        tracing::debug!(
            target: "carousel",
            ?cause,
            from,
            to,
            position = track.position,
            animated = track.animated,
            "navigated"
        );
    }

    fn dropped(&mut self, cause: Cause) {
        tracing::trace!(target: "carousel", ?cause, "request dropped while animating");
    }

    fn settled(&mut self, logical: usize) {
        tracing::trace!(target: "carousel", logical, "transition settled");
    }

    fn snapped(&mut self, snap: Snap) {
        tracing::debug!(target: "carousel", from = snap.from, to = snap.to, "snapped off clone");
    }

    fn pause_changed(&mut self, user: bool, hover: bool) {
        tracing::debug!(target: "carousel", user, hover, "pause changed");
    }

    fn ignored(&mut self, reason: Ignored) {
        tracing::trace!(target: "carousel", ?reason, "input ignored");
    }

    fn stopped(&mut self) {
        tracing::debug!(target: "carousel", "frame loop stopped");
    }
}
