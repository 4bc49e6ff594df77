// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_strip --heading-base-level=0

//! Carousel Strip: the looping strip behind an endless carousel.
//!
//! A carousel over `N` real slides renders a strip of `N + 2` cells: a clone of
//! the last slide, the real slides, then a clone of the first slide. Moving the
//! strip one cell at a time onto a clone and then silently snapping back into
//! the real range makes the wrap look like any other step.
//!
//! This crate models that strip without any knowledge of rendering:
//!
//! - [`StripLayout`]: render order of the strip, which slide each cell shows,
//!   and where the two boundary clones go ([`ClonePlan`]).
//! - [`StripPosition`]: the *track position* (`0..=N+1`, a cell in the strip)
//!   and the *logical index* (`0..N`, the current real slide), with the two
//!   write paths (direct set and relative step) and the snap correction.
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_strip::{Direction, Snap, StripLayout, StripPosition};
//!
//! let layout = StripLayout::new(3).unwrap();
//! let mut pos = StripPosition::new(layout);
//! assert_eq!((pos.logical(), pos.track()), (0, 1));
//!
//! // Step backwards from the first slide: the strip moves onto the leading clone.
//! pos.step(Direction::Backward);
//! assert_eq!((pos.logical(), pos.track()), (2, 0));
//! assert!(pos.on_clone());
//!
//! // Once the host reports the animation finished, snap to the real last slide.
//! assert_eq!(pos.settle(), Some(Snap { from: 0, to: 3 }));
//! assert!(pos.is_settled());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod layout;
mod position;

pub use layout::{ClonePlan, Slot, StripError, StripLayout};
pub use position::{Direction, Snap, StripPosition};
