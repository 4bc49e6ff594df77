// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_timing --heading-base-level=0

//! Carousel Timing: frame-driven autoplay for carousels.
//!
//! Autoplay is driven by the display's frame callback rather than a fixed
//! interval timer. Each frame the host passes its timestamp to a
//! [`FrameClock`], which turns it into elapsed time since the previous frame,
//! and feeds that into [`Autoplay`], which accumulates a progress fraction and
//! reports when the interval has elapsed.
//!
//! The first frame after construction or [`FrameClock::reset`] only
//! establishes a baseline. Hosts reset the clock whenever the current slide
//! changes so time spent before a navigation never leaks into the next slide.
//!
//! ```rust
//! use carousel_timing::{Advance, Autoplay, FrameClock};
//!
//! let mut clock = FrameClock::new();
//! let mut autoplay = Autoplay::new(1000.0);
//!
//! assert_eq!(clock.tick(0.0), 0.0); // baseline
//! assert_eq!(autoplay.advance(clock.tick(400.0)), Advance::Pending);
//! assert_eq!(autoplay.percent(), 40.0);
//! assert_eq!(autoplay.advance(clock.tick(1100.0)), Advance::Elapsed);
//! assert_eq!(autoplay.progress(), 0.0);
//! ```
//!
//! Timestamps are milliseconds on any monotonic time base; the DOM's
//! `requestAnimationFrame` timestamp is the usual source. This crate is `no_std`.

#![no_std]

mod autoplay;
mod clock;

pub use autoplay::{Advance, Autoplay, DEFAULT_INTERVAL_MS, is_valid_interval};
pub use clock::FrameClock;
