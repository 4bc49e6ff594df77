// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading options from page markup.
//!
//! Shows how root attributes and the reduced-motion preference map to
//! controller options, and what the controls render as a result.
//!
//! Run:
//! - `cargo run -p carousel_demos --example markup_options`

use carousel::Carousel;
use carousel_web::{Selectors, options_from_markup};

fn main() {
    let selectors = Selectors::default();
    println!("track selector: {}", selectors.track);
    println!("indicator selector: {}", selectors.indicator);

    for (interval, reduced_motion) in [
        (Some("8000"), false),
        (Some("soon"), false),
        (None, true),
    ] {
        let options = options_from_markup(interval, reduced_motion);
        let Ok(carousel) = Carousel::new(3, options) else {
            continue;
        };
        let toggle = carousel.play_pause();
        println!(
            "{}={interval:?} reduced-motion={reduced_motion}: interval {}ms, toggle {} \"{}\" aria-pressed={}",
            selectors.interval_attribute,
            carousel.options().interval_ms,
            toggle.glyph,
            toggle.label,
            toggle.aria_pressed()
        );
    }
}
