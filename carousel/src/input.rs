// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input normalized for [`Carousel::handle`](crate::Carousel::handle).
//!
//! Every input source reduces to one of four outcomes: a direct set to an
//! indicator's slide, a relative step, a pause change, or forwarding a card
//! click to that card's primary link. The [`Reaction`] returned for each input
//! tells the host what to apply.

use kurbo::Point;

pub use carousel_event_state::swipe::PointerKind;

use crate::transition::TrackMove;

/// Keys the carousel reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Previous slide.
    ArrowLeft,
    /// Next slide.
    ArrowRight,
    /// Activates a focused indicator.
    Enter,
    /// Activates a focused indicator.
    Space,
    /// Any other key; ignored.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_value(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }

    /// Returns `true` for keys that activate a focused indicator.
    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// One input event from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    /// An indicator was clicked or received focus.
    IndicatorActivated(usize),
    /// A key was pressed while an indicator had focus.
    IndicatorKey {
        /// Indicator index.
        index: usize,
        /// The key.
        key: Key,
    },
    /// A key was pressed while the carousel had focus.
    Key(Key),
    /// A pointer was pressed inside the swipe region.
    PointerDown {
        /// Pointer kind; only mouse and touch can swipe.
        kind: PointerKind,
        /// Pointer position in client coordinates.
        pos: Point,
    },
    /// A pointer was released inside the swipe region.
    PointerUp {
        /// Pointer position in client coordinates.
        pos: Point,
    },
    /// The host cancelled the pointer (for example, the browser took over scrolling).
    PointerCancel,
    /// The pointer entered the carousel.
    PointerEnter,
    /// The pointer left the carousel.
    PointerLeave,
    /// The play/pause control was activated.
    TogglePlayPause,
    /// A card in the strip was clicked.
    CardClick {
        /// Track position of the clicked card; clones are valid positions.
        position: usize,
        /// Whether the click landed on an explicit link inside the card.
        on_link: bool,
    },
}

/// What the host must do in response to an [`Input`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Strip position to apply.
    pub track: Option<TrackMove>,
    /// Suppress the browser's default action for the event.
    pub prevent_default: bool,
    /// Pause state changed; refresh the play/pause control.
    pub pause_changed: bool,
    /// Activate the primary link of the clicked card, which shows this slide.
    pub activate_link: Option<usize>,
}

impl Reaction {
    /// Nothing to do.
    pub const NONE: Self = Self {
        track: None,
        prevent_default: false,
        pause_changed: false,
        activate_link: None,
    };

    pub(crate) fn track(track: Option<TrackMove>) -> Self {
        Self {
            track,
            ..Self::NONE
        }
    }

    pub(crate) fn prevented(track: Option<TrackMove>) -> Self {
        Self {
            track,
            prevent_default: true,
            ..Self::NONE
        }
    }

    pub(crate) fn pause(changed: bool) -> Self {
        Self {
            pause_changed: changed,
            ..Self::NONE
        }
    }
}

/// Parses an indicator's index data (for example a `data-index` attribute).
///
/// Surrounding whitespace is allowed. Anything that is not a non-negative
/// integer yields `None`, and the host should ignore the activation.
///
/// ```rust
/// use carousel::parse_indicator_index;
///
/// assert_eq!(parse_indicator_index(" 2 "), Some(2));
/// assert_eq!(parse_indicator_index("two"), None);
/// assert_eq!(parse_indicator_index("-1"), None);
/// ```
#[must_use]
pub fn parse_indicator_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
