// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options.

use alloc::string::String;

use carousel_event_state::swipe::DEFAULT_SWIPE_THRESHOLD;
use carousel_timing::DEFAULT_INTERVAL_MS;

/// Default duration of one animated strip shift.
pub const DEFAULT_TRANSITION_MS: u32 = 1100;

/// Timing function for animated strip shifts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// `linear`.
    Linear,
    /// `ease`.
    Ease,
    /// `ease-in`.
    EaseIn,
    /// `ease-out`.
    EaseOut,
    /// `ease-in-out`.
    #[default]
    EaseInOut,
}

impl Easing {
    /// CSS `<easing-function>` keyword.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration and easing shared by every animated shift, wraps included.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionStyle {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Timing function.
    pub easing: Easing,
}

impl Default for TransitionStyle {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
        }
    }
}

/// Accessible labels for the play/pause control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayPauseLabels {
    /// Label shown while paused (the control will start playback).
    pub play: String,
    /// Label shown while playing (the control will pause).
    pub pause: String,
}

impl Default for PlayPauseLabels {
    fn default() -> Self {
        Self {
            play: String::from("Start slider"),
            pause: String::from("Pause slider"),
        }
    }
}

/// Options for [`Carousel`](crate::Carousel).
///
/// All fields have defaults; override the ones you need:
///
/// ```rust
/// use carousel::CarouselOptions;
///
/// let options = CarouselOptions {
///     interval_ms: 8000.0,
///     ..CarouselOptions::default()
/// };
/// assert_eq!(options.swipe_threshold, 40.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselOptions {
    /// Autoplay interval per slide in milliseconds. Must be finite and positive.
    pub interval_ms: f64,
    /// Animated shift style.
    pub transition: TransitionStyle,
    /// Horizontal pointer travel, in pixels, that counts as a swipe.
    pub swipe_threshold: f64,
    /// Start user-paused. Hosts set this from `prefers-reduced-motion: reduce`.
    pub reduced_motion: bool,
    /// Play/pause control labels.
    pub labels: PlayPauseLabels,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            transition: TransitionStyle::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            reduced_motion: false,
            labels: PlayPauseLabels::default(),
        }
    }
}
