// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel --heading-base-level=0

//! Carousel: a headless, infinite-loop carousel controller.
//!
//! [`Carousel`] owns the whole state of a looping "hero slider": which slide is
//! current, where the strip of slides (framed by two boundary clones, see
//! `carousel_strip`) is positioned, whether an animated shift is in flight,
//! how far autoplay has progressed, and whether the user or the pointer has
//! paused it.
//!
//! The controller never touches a renderer. Hosts:
//!
//! - call [`Carousel::tick`] once per display frame with the frame timestamp,
//! - forward input through [`Carousel::handle`] as [`Input`] values,
//! - forward transition-completion signals through [`Carousel::transition_end`],
//! - apply every returned [`TrackMove`] (see [`TrackStyle`] for the CSS), and
//! - redraw indicators and the play/pause control from [`Carousel::indicators`]
//!   and [`Carousel::play_pause`].
//!
//! ## Transitions and the in-flight guard
//!
//! Navigation either moves the strip one cell ([`Carousel::next_slide`],
//! [`Carousel::previous_slide`], arrow keys, swipes, autoplay) or sets it
//! directly ([`Carousel::go_to`], indicators). Every animated request enters
//! [`Phase::Animating`], and any further animated request is dropped until
//! the host reports the strip's `transform` transition finished. If that shift
//! ended on a clone, the completion returns an unanimated snap back into the
//! real range.
//!
//! ```rust
//! use carousel::{Carousel, CarouselOptions, Completion, TrackMove, TransitionEnd};
//!
//! let mut carousel = Carousel::new(3, CarouselOptions::default()).unwrap();
//! carousel.jump_to(2);
//!
//! // Past the last slide the strip moves onto the trailing clone...
//! assert_eq!(carousel.next_slide(), Some(TrackMove::animated(4)));
//! assert_eq!(carousel.logical_index(), 0);
//!
//! // ...and requests are dropped until the shift completes.
//! assert_eq!(carousel.previous_slide(), None);
//!
//! // Completion snaps back to the real first slide without animation.
//! assert_eq!(
//!     carousel.transition_end(TransitionEnd::TRACK_TRANSFORM),
//!     Completion::Snapped(TrackMove::instant(1)),
//! );
//! ```
//!
//! ## Autoplay
//!
//! ```rust
//! use carousel::{Carousel, CarouselOptions, TrackMove};
//!
//! let options = CarouselOptions { interval_ms: 1000.0, ..CarouselOptions::default() };
//! let mut carousel = Carousel::new(4, options).unwrap();
//!
//! carousel.tick(0.0); // baseline
//! assert_eq!(carousel.tick(500.0).advance, None);
//! assert_eq!(carousel.tick(1000.0).advance, Some(TrackMove::animated(2)));
//! assert_eq!(carousel.progress(), 0.0);
//! ```
//!
//! ## Tracing
//!
//! State changes are reported to a [`CarouselTrace`] sink. [`TraceLog`]
//! records them; with the `tracing` feature, `TracingTrace` forwards them to
//! `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod error;
mod input;
mod options;
mod pause;
mod trace;
mod transition;
mod view;

pub use controller::{Carousel, Frame};
pub use error::CarouselError;
pub use input::{Input, Key, PointerKind, Reaction, parse_indicator_index};
pub use options::{CarouselOptions, DEFAULT_TRANSITION_MS, Easing, PlayPauseLabels, TransitionStyle};
pub use pause::PauseState;
#[cfg(feature = "tracing")]
pub use trace::TracingTrace;
pub use trace::{CarouselTrace, Cause, Ignored, NoTrace, TraceEvent, TraceLog};
pub use transition::{
    Completion, Phase, TrackMove, TransitionEnd, TransitionProperty, TransitionTarget,
};
pub use view::{
    IndicatorView, PAUSE_GLYPH, PLAY_GLYPH, PlayPauseView, TrackStyle, transform_css,
    transition_css,
};

pub use carousel_strip::{ClonePlan, Slot, Snap, StripError, StripLayout};
