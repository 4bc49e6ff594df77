// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrapping through the boundary clones.
//!
//! Walks a three-slide strip forwards and backwards past both ends and
//! prints each strip cell, showing the animated shift onto a clone followed
//! by the unanimated snap back into the real range.
//!
//! Run:
//! - `cargo run -p carousel_demos --example loop_boundaries`

use carousel::{Carousel, CarouselOptions, Completion, Slot, TrackMove, TransitionEnd};

fn describe(slot: Option<Slot>) -> String {
    match slot {
        Some(Slot::LeadingClone { source }) => format!("clone of {source} (leading)"),
        Some(Slot::Real { index }) => format!("slide {index}"),
        Some(Slot::TrailingClone { source }) => format!("clone of {source} (trailing)"),
        None => "outside the strip".into(),
    }
}

fn show(carousel: &Carousel, label: &str, track: Option<TrackMove>) {
    let Some(track) = track else {
        println!("{label:<10} dropped");
        return;
    };
    let kind = if track.animated { "animate" } else { "snap" };
    println!(
        "{label:<10} {kind:<8} -> track {} ({}), current slide {}",
        track.position,
        describe(carousel.layout().slot(track.position)),
        carousel.logical_index()
    );
}

fn complete(carousel: &mut Carousel) {
    if let Completion::Snapped(snap) = carousel.transition_end(TransitionEnd::TRACK_TRANSFORM) {
        show(carousel, "  complete", Some(snap));
    }
}

fn main() {
    let Ok(mut carousel) = Carousel::new(3, CarouselOptions::default()) else {
        return;
    };

    println!("strip:");
    for (position, slot) in carousel.layout().slots().enumerate() {
        println!("  {position}: {}", describe(Some(slot)));
    }

    for _ in 0..4 {
        let track = carousel.next_slide();
        show(&carousel, "next", track);
        complete(&mut carousel);
    }

    for _ in 0..4 {
        let track = carousel.previous_slide();
        show(&carousel, "previous", track);
        // A second request before completion is dropped.
        let again = carousel.previous_slide();
        show(&carousel, "previous", again);
        complete(&mut carousel);
    }

    let track = carousel.jump_to(2);
    show(&carousel, "jump", track);
}
