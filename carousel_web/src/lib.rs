// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_web --heading-base-level=0

//! DOM adapter for the headless [`carousel`] controller.
//!
//! When targeting `wasm32`, [`Mount::attach`] binds a [`carousel::Carousel`]
//! to existing page markup:
//!
//! ```text
//! <section id="heroSlider" data-interval="5000">
//!   <div class="slider-window">
//!     <div class="slider-track">
//!       <article class="slider-card" data-index="0"> ... <a class="case-link"> ... </article>
//!       ...
//!     </div>
//!   </div>
//!   <button class="slider-dot" data-index="0"><span class="slider-dot-bar"></span></button>
//!   ...
//!   <button data-carousel-toggle></button>
//! </section>
//! ```
//!
//! Mounting inserts the two boundary clones with a deep `cloneNode`, installs
//! listeners (delegated on the track for card clicks and transition ends, so
//! clones behave exactly like their sources), and starts a
//! `requestAnimationFrame` loop. Dropping the [`Mount`] cancels the pending
//! frame and removes every listener.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn mount(root: web_sys::HtmlElement) -> Result<carousel_web::Mount, carousel_web::MountError> {
//!     let options = carousel_web::page_options(&root);
//!     carousel_web::Mount::attach(&root, options)
//! }
//! ```
//!
//! Selector names live in [`Selectors`] and can be overridden. State changes
//! are reported through `tracing` (target `carousel`); install any subscriber
//! to see them.
//!
//! On other targets only the markup helpers are compiled.

mod markup;
#[cfg(target_arch = "wasm32")]
mod mount;

pub use markup::{Selectors, options_from_markup};
#[cfg(target_arch = "wasm32")]
pub use mount::{Mount, MountError, page_options, prefers_reduced_motion};
