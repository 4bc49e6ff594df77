// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.

use carousel_event_state::swipe::{Swipe, SwipeState};
use carousel_strip::{Direction, StripLayout, StripPosition};
use carousel_timing::{Advance, Autoplay, FrameClock, is_valid_interval};

use crate::error::CarouselError;
use crate::input::{Input, Key, Reaction};
use crate::options::CarouselOptions;
use crate::pause::PauseState;
use crate::trace::{CarouselTrace, Cause, Ignored, NoTrace};
use crate::transition::{Completion, Phase, TrackMove, TransitionDriver, TransitionEnd};
use crate::view::{IndicatorView, PAUSE_GLYPH, PLAY_GLYPH, PlayPauseView, TrackStyle};

/// Result of one frame of the autoplay loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Autoplay advanced; apply this animated move.
    pub advance: Option<TrackMove>,
    /// Whether the host should request another frame.
    pub reschedule: bool,
}

#[derive(Copy, Clone, Debug)]
enum Request {
    Step(Direction),
    GoTo(usize),
    Jump(usize),
}

/// Headless infinite-loop carousel.
///
/// Owns all carousel state: strip position, transition phase, autoplay
/// progress, pause state and the pointer gesture. The host forwards frames,
/// input, and transition-completion signals, then applies the returned
/// [`TrackMove`]s and refreshes indicators from [`Carousel::indicators`].
///
/// Each instance is independent; several carousels on one page share nothing.
#[derive(Clone, Debug)]
pub struct Carousel<T: CarouselTrace = NoTrace> {
    position: StripPosition,
    driver: TransitionDriver,
    clock: FrameClock,
    autoplay: Autoplay,
    pause: PauseState,
    swipe: SwipeState,
    options: CarouselOptions,
    running: bool,
    trace: T,
}

impl Carousel {
    /// Creates a carousel over `slide_count` slides, starting on slide `0`.
    ///
    /// Fails for zero slides, an interval that is not finite and positive, or
    /// a zero transition duration.
    pub fn new(slide_count: usize, options: CarouselOptions) -> Result<Self, CarouselError> {
        Self::with_trace(slide_count, options, NoTrace)
    }
}

impl<T: CarouselTrace> Carousel<T> {
    /// Like [`Carousel::new`], reporting state changes to `trace`.
    pub fn with_trace(
        slide_count: usize,
        options: CarouselOptions,
        trace: T,
    ) -> Result<Self, CarouselError> {
        let layout = StripLayout::new(slide_count)?;
        if !is_valid_interval(options.interval_ms) {
            return Err(CarouselError::InvalidInterval(options.interval_ms));
        }
        if options.transition.duration_ms == 0 {
            return Err(CarouselError::InvalidTransition {
                duration_ms: options.transition.duration_ms,
            });
        }
        Ok(Self {
            position: StripPosition::new(layout),
            driver: TransitionDriver::default(),
            clock: FrameClock::new(),
            autoplay: Autoplay::new(options.interval_ms),
            pause: PauseState {
                user: options.reduced_motion,
                hover: false,
            },
            swipe: SwipeState::new(options.swipe_threshold),
            options,
            running: true,
            trace,
        })
    }

    /// Checks that the host found one indicator per slide.
    pub fn check_indicators(&self, indicators: usize) -> Result<(), CarouselError> {
        let slides = self.slide_count();
        if indicators == slides {
            Ok(())
        } else {
            Err(CarouselError::IndicatorMismatch { slides, indicators })
        }
    }

    // --- state queries -------------------------------------------------------

    /// Number of real slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.position.layout().slide_count()
    }

    /// The strip layout, including clone placement.
    #[must_use]
    pub fn layout(&self) -> StripLayout {
        self.position.layout()
    }

    /// Logical index of the current slide.
    #[must_use]
    pub fn logical_index(&self) -> usize {
        self.position.logical()
    }

    /// Current track position.
    #[must_use]
    pub fn track_position(&self) -> usize {
        self.position.track()
    }

    /// Autoplay progress through the current slide, in `[0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.autoplay.progress()
    }

    /// Transition phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.driver.phase()
    }

    /// Returns `true` while an animated shift is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Pause sources.
    #[must_use]
    pub fn pause_state(&self) -> PauseState {
        self.pause
    }

    /// Effective pause (user or hover).
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Returns `false` once [`Carousel::stop`] has been called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Construction options.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The trace sink.
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// The trace sink, mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    // --- navigation ----------------------------------------------------------

    /// Strip position to apply on mount, without animation.
    #[must_use]
    pub fn resting_move(&self) -> TrackMove {
        TrackMove::instant(self.position.track())
    }

    /// Animate one slide forward, wrapping from the last to the first.
    pub fn next_slide(&mut self) -> Option<TrackMove> {
        self.request(Request::Step(Direction::Forward), Cause::Api)
    }

    /// Animate one slide backward, wrapping from the first to the last.
    pub fn previous_slide(&mut self) -> Option<TrackMove> {
        self.request(Request::Step(Direction::Backward), Cause::Api)
    }

    /// Animate directly to slide `index`.
    ///
    /// Dropped while animating. Asking for the slide already shown only
    /// restarts its autoplay interval.
    pub fn go_to(&mut self, index: usize) -> Option<TrackMove> {
        self.request(Request::GoTo(index), Cause::Api)
    }

    /// Jump to slide `index` without animation.
    ///
    /// Jumps are not subject to the in-flight guard. A jump supersedes any
    /// shift in flight: applying it cancels the running transition, so no
    /// completion signal follows and the carousel returns to idle at once.
    pub fn jump_to(&mut self, index: usize) -> Option<TrackMove> {
        self.request(Request::Jump(index), Cause::Api)
    }

    fn request(&mut self, request: Request, cause: Cause) -> Option<TrackMove> {
        let animated = !matches!(request, Request::Jump(_));
        if animated && self.driver.is_animating() {
            self.trace.dropped(cause);
            return None;
        }

        let from = self.position.logical();
        match request {
            Request::Step(direction) => {
                self.position.step(direction);
            }
            Request::GoTo(index) | Request::Jump(index) => {
                if index >= self.slide_count() {
                    self.trace.ignored(Ignored::IndexOutOfRange(index));
                    return None;
                }
                // An unchanged transform never produces a completion signal.
                if animated && index == from && self.position.is_settled() {
                    self.restart_interval();
                    return None;
                }
                self.position.set(index);
            }
        }

        self.restart_interval();
        if animated {
            self.driver.begin();
        } else {
            self.driver.finish();
        }
        let track = TrackMove {
            position: self.position.track(),
            animated,
        };
        self.trace
            .navigated(cause, from, self.position.logical(), track);
        Some(track)
    }

    fn restart_interval(&mut self) {
        self.autoplay.reset();
        self.clock.reset();
    }

    /// Deliver a transition-completion signal.
    ///
    /// Only the strip's own `transform` transition ends a shift. When the
    /// shift ended on a clone, the returned [`Completion::Snapped`] move must
    /// be applied without animation and flushed before the next paint.
    pub fn transition_end(&mut self, event: TransitionEnd) -> Completion {
        if !event.is_track_transform() {
            self.trace.ignored(Ignored::ForeignTransition);
            return Completion::Ignored;
        }
        self.driver.finish();
        match self.position.settle() {
            Some(snap) => {
                self.trace.snapped(snap);
                Completion::Snapped(TrackMove::instant(snap.to))
            }
            None => {
                self.trace.settled(self.position.logical());
                Completion::Settled
            }
        }
    }

    // --- autoplay ------------------------------------------------------------

    /// Run one frame of the autoplay loop at `timestamp_ms`.
    ///
    /// Progress only accumulates while not paused and not animating. When the
    /// interval elapses the carousel steps forward exactly as [`Carousel::next_slide`]
    /// would. After [`Carousel::stop`] frames are ignored and
    /// [`Frame::reschedule`] is `false`.
    pub fn tick(&mut self, timestamp_ms: f64) -> Frame {
        if !self.running {
            self.trace.ignored(Ignored::Stopped);
            return Frame {
                advance: None,
                reschedule: false,
            };
        }

        let elapsed = self.clock.tick(timestamp_ms);
        let mut advance = None;
        if !self.pause.is_paused()
            && !self.driver.is_animating()
            && self.autoplay.advance(elapsed) == Advance::Elapsed
        {
            advance = self.request(Request::Step(Direction::Forward), Cause::Autoplay);
        }
        Frame {
            advance,
            reschedule: true,
        }
    }

    /// Stop the frame loop for good.
    ///
    /// Navigation and input keep working; only autoplay stops.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.trace.stopped();
        }
    }

    // --- pause ---------------------------------------------------------------

    /// Flip user pause and restart the current interval. Returns the new state.
    pub fn toggle_user_paused(&mut self) -> bool {
        self.pause.user = !self.pause.user;
        self.restart_interval();
        self.trace.pause_changed(self.pause.user, self.pause.hover);
        self.pause.user
    }

    /// Set hover pause. Returns `true` if it changed.
    ///
    /// Progress is kept, so autoplay resumes where it left off.
    pub fn set_hover_paused(&mut self, hover: bool) -> bool {
        if self.pause.hover == hover {
            return false;
        }
        self.pause.hover = hover;
        self.trace.pause_changed(self.pause.user, self.pause.hover);
        true
    }

    // --- input ---------------------------------------------------------------

    /// Reconcile one host input into a state change.
    pub fn handle(&mut self, input: Input) -> Reaction {
        match input {
            Input::IndicatorActivated(index) => {
                Reaction::track(self.request(Request::GoTo(index), Cause::Indicator))
            }
            Input::IndicatorKey { index, key } => {
                if key.activates() {
                    Reaction::prevented(self.request(Request::GoTo(index), Cause::Indicator))
                } else {
                    Reaction::NONE
                }
            }
            Input::Key(Key::ArrowRight) => Reaction::prevented(
                self.request(Request::Step(Direction::Forward), Cause::Key),
            ),
            Input::Key(Key::ArrowLeft) => Reaction::prevented(
                self.request(Request::Step(Direction::Backward), Cause::Key),
            ),
            Input::Key(_) => Reaction::NONE,
            Input::PointerDown { kind, pos } => {
                if !self.swipe.start(kind, pos) {
                    self.trace.ignored(Ignored::PointerKind);
                }
                Reaction::NONE
            }
            Input::PointerUp { pos } => {
                let direction = match self.swipe.finish(pos) {
                    Some(Swipe::Forward) => Direction::Forward,
                    Some(Swipe::Backward) => Direction::Backward,
                    None => return Reaction::NONE,
                };
                Reaction::track(self.request(Request::Step(direction), Cause::Swipe))
            }
            Input::PointerCancel => {
                self.swipe.cancel();
                Reaction::NONE
            }
            Input::PointerEnter => Reaction::pause(self.set_hover_paused(true)),
            Input::PointerLeave => Reaction::pause(self.set_hover_paused(false)),
            Input::TogglePlayPause => {
                self.toggle_user_paused();
                Reaction::pause(true)
            }
            Input::CardClick { position, on_link } => {
                if on_link {
                    return Reaction::NONE;
                }
                match self.layout().source_of(position) {
                    Some(slide) => Reaction {
                        activate_link: Some(slide),
                        ..Reaction::NONE
                    },
                    None => {
                        self.trace.ignored(Ignored::PositionOutOfRange(position));
                        Reaction::NONE
                    }
                }
            }
        }
    }

    // --- visual sync ---------------------------------------------------------

    /// Render state of indicator `index`, or `None` past the last slide.
    #[must_use]
    pub fn indicator(&self, index: usize) -> Option<IndicatorView> {
        if index >= self.slide_count() {
            return None;
        }
        let active = index == self.position.logical();
        Some(IndicatorView {
            index,
            active,
            progress_percent: if active { self.autoplay.percent() } else { 0.0 },
        })
    }

    /// Render state of every indicator, in order.
    pub fn indicators(&self) -> impl Iterator<Item = IndicatorView> + '_ {
        (0..self.slide_count()).filter_map(|index| self.indicator(index))
    }

    /// Render state of the play/pause control.
    #[must_use]
    pub fn play_pause(&self) -> PlayPauseView<'_> {
        let labels = &self.options.labels;
        if self.pause.user {
            PlayPauseView {
                paused: true,
                glyph: PLAY_GLYPH,
                label: &labels.play,
            }
        } else {
            PlayPauseView {
                paused: false,
                glyph: PAUSE_GLYPH,
                label: &labels.pause,
            }
        }
    }

    /// CSS for applying `track` with this carousel's transition style.
    #[must_use]
    pub fn track_style(&self, track: TrackMove) -> TrackStyle {
        TrackStyle::new(track, self.options.transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{TraceEvent, TraceLog};
    use crate::input::PointerKind;
    use crate::options::TransitionStyle;
    use crate::transition::{TransitionProperty, TransitionTarget};
    use carousel_strip::Snap;
    use kurbo::Point;

    fn carousel(n: usize) -> Carousel<TraceLog> {
        Carousel::with_trace(n, CarouselOptions::default(), TraceLog::new()).unwrap()
    }

    fn finish(c: &mut Carousel<TraceLog>) -> Completion {
        c.transition_end(TransitionEnd::TRACK_TRANSFORM)
    }

    #[test]
    fn rejects_empty_strip_and_bad_interval() {
        assert!(matches!(
            Carousel::new(0, CarouselOptions::default()),
            Err(CarouselError::Strip(_))
        ));
        let options = CarouselOptions {
            interval_ms: 0.0,
            ..CarouselOptions::default()
        };
        assert_eq!(
            Carousel::new(3, options).unwrap_err(),
            CarouselError::InvalidInterval(0.0)
        );
    }

    #[test]
    fn rejects_zero_transition_duration() {
        let options = CarouselOptions {
            transition: TransitionStyle {
                duration_ms: 0,
                ..TransitionStyle::default()
            },
            ..CarouselOptions::default()
        };
        assert_eq!(
            Carousel::new(3, options).unwrap_err(),
            CarouselError::InvalidTransition { duration_ms: 0 }
        );
    }

    #[test]
    fn jump_ignores_guard_and_ends_the_shift_in_flight() {
        let mut c = carousel(4);
        assert_eq!(c.next_slide(), Some(TrackMove::animated(2)));
        assert_eq!(c.jump_to(3), Some(TrackMove::instant(4)));
        assert_eq!(c.logical_index(), 3);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.track_position(), 4);

        // The guard is clear: navigation and autoplay work again.
        assert_eq!(c.previous_slide(), Some(TrackMove::animated(3)));
        c.transition_end(TransitionEnd::TRACK_TRANSFORM);
        c.tick(0.0);
        assert!(c.tick(5000.0).advance.is_some());
    }

    #[test]
    fn indicator_count_must_match() {
        let c = carousel(4);
        assert!(c.check_indicators(4).is_ok());
        assert_eq!(
            c.check_indicators(3),
            Err(CarouselError::IndicatorMismatch {
                slides: 4,
                indicators: 3
            })
        );
    }

    #[test]
    fn starts_idle_on_first_slide() {
        let c = carousel(3);
        assert_eq!(c.logical_index(), 0);
        assert_eq!(c.track_position(), 1);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.resting_move(), TrackMove::instant(1));
        assert!(!c.is_paused());
    }

    #[test]
    fn reduced_motion_starts_user_paused() {
        let options = CarouselOptions {
            reduced_motion: true,
            ..CarouselOptions::default()
        };
        let c = Carousel::new(3, options).unwrap();
        assert!(c.pause_state().user);
        assert!(c.play_pause().paused);
    }

    #[test]
    fn next_past_last_snaps_to_first() {
        let mut c = carousel(3);
        c.jump_to(2);
        assert_eq!(c.next_slide(), Some(TrackMove::animated(4)));
        assert_eq!(c.track_position(), 4);
        assert_eq!(c.logical_index(), 0);
        assert!(c.is_animating());

        assert_eq!(finish(&mut c), Completion::Snapped(TrackMove::instant(1)));
        assert_eq!(c.track_position(), 1);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(
            c.trace().events().last(),
            Some(&TraceEvent::Snapped(Snap { from: 4, to: 1 }))
        );
    }

    #[test]
    fn previous_before_first_snaps_to_last() {
        let mut c = carousel(3);
        assert_eq!(c.previous_slide(), Some(TrackMove::animated(0)));
        assert_eq!(c.logical_index(), 2);
        assert_eq!(finish(&mut c), Completion::Snapped(TrackMove::instant(3)));
        assert_eq!(c.track_position(), 3);
    }

    #[test]
    fn requests_while_animating_are_dropped() {
        let mut c = carousel(4);
        c.next_slide();
        let before = (c.logical_index(), c.track_position(), c.progress());
        assert_eq!(c.next_slide(), None);
        assert_eq!(c.previous_slide(), None);
        assert_eq!(c.go_to(3), None);
        assert_eq!((c.logical_index(), c.track_position(), c.progress()), before);
        assert_eq!(
            c.trace()
                .events()
                .iter()
                .filter(|e| matches!(e, TraceEvent::Dropped(Cause::Api)))
                .count(),
            3
        );
    }

    #[test]
    fn go_to_current_slide_only_restarts_interval() {
        let mut c = carousel(4);
        c.tick(0.0);
        c.tick(1000.0);
        assert!(c.progress() > 0.0);
        assert_eq!(c.go_to(0), None);
        assert_eq!(c.progress(), 0.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut c = carousel(2);
        assert_eq!(c.go_to(2), None);
        assert_eq!(
            c.trace().events(),
            &[TraceEvent::Ignored(Ignored::IndexOutOfRange(2))]
        );
    }

    #[test]
    fn foreign_transition_end_is_ignored() {
        let mut c = carousel(3);
        c.next_slide();
        let bubbled = TransitionEnd {
            target: TransitionTarget::Other,
            property: TransitionProperty::Transform,
        };
        assert_eq!(c.transition_end(bubbled), Completion::Ignored);
        let opacity = TransitionEnd {
            target: TransitionTarget::Track,
            property: TransitionProperty::Other,
        };
        assert_eq!(c.transition_end(opacity), Completion::Ignored);
        assert!(c.is_animating());
        assert_eq!(finish(&mut c), Completion::Settled);
    }

    #[test]
    fn autoplay_waits_for_transition_and_pause() {
        let mut c = carousel(3);
        c.next_slide();
        c.tick(0.0);
        assert_eq!(c.tick(10_000.0).advance, None);
        assert_eq!(c.progress(), 0.0);
        finish(&mut c);

        c.set_hover_paused(true);
        c.tick(20_000.0);
        assert_eq!(c.tick(40_000.0).advance, None);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn hover_keeps_progress() {
        let mut c = carousel(3);
        c.tick(0.0);
        c.tick(2500.0);
        assert!(c.handle(Input::PointerEnter).pause_changed);
        assert_eq!(c.progress(), 0.5);
        assert!(!c.handle(Input::PointerEnter).pause_changed);
        c.tick(4000.0);
        assert_eq!(c.progress(), 0.5);
        c.handle(Input::PointerLeave);
        c.tick(5250.0);
        assert_eq!(c.progress(), 0.75);
    }

    #[test]
    fn toggle_twice_restores_pause_and_resets_progress_each_time() {
        let mut c = carousel(3);
        c.tick(0.0);
        c.tick(1000.0);
        assert_eq!(c.progress(), 0.2);
        assert!(c.toggle_user_paused());
        assert_eq!(c.progress(), 0.0);

        // Paused frames keep the baseline moving but add nothing.
        c.tick(2000.0);
        assert_eq!(c.progress(), 0.0);
        assert!(!c.toggle_user_paused());
        assert!(!c.is_paused());

        // The second toggle restarted the interval too: the next frame only
        // re-establishes the baseline instead of counting the 1000ms gap.
        c.tick(3000.0);
        assert_eq!(c.progress(), 0.0);
        c.tick(3500.0);
        assert_eq!(c.progress(), 0.1);
        let toggles = c
            .trace()
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::PauseChanged { .. }))
            .count();
        assert_eq!(toggles, 2);
    }

    #[test]
    fn arrows_prevent_default_even_when_dropped() {
        let mut c = carousel(3);
        let first = c.handle(Input::Key(Key::ArrowRight));
        assert_eq!(first.track, Some(TrackMove::animated(2)));
        assert!(first.prevent_default);
        let second = c.handle(Input::Key(Key::ArrowLeft));
        assert_eq!(second.track, None);
        assert!(second.prevent_default);
        assert_eq!(c.handle(Input::Key(Key::Other)), Reaction::NONE);
    }

    #[test]
    fn indicator_key_only_activates_on_enter_or_space() {
        let mut c = carousel(3);
        let r = c.handle(Input::IndicatorKey {
            index: 2,
            key: Key::ArrowRight,
        });
        assert_eq!(r, Reaction::NONE);
        let r = c.handle(Input::IndicatorKey {
            index: 2,
            key: Key::Space,
        });
        assert_eq!(r.track, Some(TrackMove::animated(3)));
        assert!(r.prevent_default);
    }

    #[test]
    fn swipe_maps_to_relative_steps() {
        let mut c = carousel(3);
        c.handle(Input::PointerDown {
            kind: PointerKind::Touch,
            pos: Point::new(100.0, 0.0),
        });
        let r = c.handle(Input::PointerUp {
            pos: Point::new(59.0, 0.0),
        });
        assert_eq!(r.track, Some(TrackMove::animated(2)));
        assert_eq!(c.logical_index(), 1);
    }

    #[test]
    fn pen_pointer_does_not_swipe() {
        let mut c = carousel(3);
        c.handle(Input::PointerDown {
            kind: PointerKind::Pen,
            pos: Point::new(0.0, 0.0),
        });
        let r = c.handle(Input::PointerUp {
            pos: Point::new(200.0, 0.0),
        });
        assert_eq!(r, Reaction::NONE);
        assert_eq!(
            c.trace().events(),
            &[TraceEvent::Ignored(Ignored::PointerKind)]
        );
    }

    #[test]
    fn card_click_resolves_clones_to_source() {
        let mut c = carousel(3);
        let on_clone = c.handle(Input::CardClick {
            position: 0,
            on_link: false,
        });
        assert_eq!(on_clone.activate_link, Some(2));
        let trailing = c.handle(Input::CardClick {
            position: 4,
            on_link: false,
        });
        assert_eq!(trailing.activate_link, Some(0));
        let on_link = c.handle(Input::CardClick {
            position: 2,
            on_link: true,
        });
        assert_eq!(on_link, Reaction::NONE);
        let outside = c.handle(Input::CardClick {
            position: 9,
            on_link: false,
        });
        assert_eq!(outside, Reaction::NONE);
    }

    #[test]
    fn stop_ends_frame_loop() {
        let mut c = carousel(3);
        assert!(c.tick(0.0).reschedule);
        c.stop();
        c.stop();
        let frame = c.tick(16.0);
        assert!(!frame.reschedule);
        assert!(!c.is_running());
        assert_eq!(
            c.trace()
                .events()
                .iter()
                .filter(|e| matches!(e, TraceEvent::Stopped))
                .count(),
            1
        );
    }

    #[test]
    fn play_pause_view_tracks_user_pause() {
        let mut c = carousel(3);
        let view = c.play_pause();
        assert_eq!(view.glyph, PAUSE_GLYPH);
        assert_eq!(view.label, "Pause slider");
        assert_eq!(view.aria_pressed(), "false");
        c.handle(Input::TogglePlayPause);
        let view = c.play_pause();
        assert_eq!(view.glyph, PLAY_GLYPH);
        assert_eq!(view.label, "Start slider");
        assert_eq!(view.aria_pressed(), "true");
    }

    #[test]
    fn indicators_show_progress_only_on_active() {
        let mut c = carousel(3);
        c.tick(0.0);
        c.tick(2500.0);
        let views: alloc::vec::Vec<_> = c.indicators().collect();
        assert_eq!(views.len(), 3);
        assert!(views[0].active);
        assert_eq!(views[0].progress_percent, 50.0);
        assert!(!views[1].active);
        assert_eq!(views[1].progress_percent, 0.0);
        assert_eq!(c.indicator(3), None);
    }
}
