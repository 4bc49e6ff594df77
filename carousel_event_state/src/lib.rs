// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_event_state --heading-base-level=0

//! Carousel Event State: pointer gesture state for carousels.
//!
//! Carousels accept a horizontal swipe (touch) or drag (mouse) as a request to
//! move one slide. The gesture only lives between a pointer-down and the
//! matching pointer-up, and is classified once, at release, against a
//! distance threshold.
//!
//! - [`swipe`]: track a press and classify its release as [`swipe::Swipe::Forward`],
//!   [`swipe::Swipe::Backward`], or a tap.
//!
//! The crate does not assume any particular UI framework or event system.
//! Hosts feed it raw pointer kinds and positions and interpret the result.
//!
//! ## Swipe recognition
//!
//! ```rust
//! use kurbo::Point;
//! use carousel_event_state::swipe::{PointerKind, Swipe, SwipeState};
//!
//! let mut swipe = SwipeState::default();
//!
//! // Finger lands at x = 200 and lifts 60px to the left.
//! swipe.start(PointerKind::Touch, Point::new(200.0, 50.0));
//! assert_eq!(swipe.finish(Point::new(140.0, 52.0)), Some(Swipe::Forward));
//!
//! // The gesture is gone after release.
//! assert!(!swipe.is_active());
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod swipe;
