// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay over simulated frames.
//!
//! Drives a four-slide carousel with 60fps timestamps, plays the host's role
//! of reporting transition completion, and hovers over it for a while.
//! State changes are logged through `tracing`.
//!
//! Run:
//! - `cargo run -p carousel_demos --example autoplay_cycle`

use carousel::{Carousel, CarouselOptions, Completion, Input, TracingTrace};
use carousel_demos::{FRAME_MS, SimulatedTrack};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let options = CarouselOptions {
        interval_ms: 2000.0,
        ..CarouselOptions::default()
    };
    let Ok(mut carousel) = Carousel::with_trace(4, options, TracingTrace) else {
        return;
    };
    let mut track_element = SimulatedTrack::new(carousel.options().transition.duration_ms);

    for frame in 0..1200_u32 {
        let now = f64::from(frame) * FRAME_MS;

        // Hover from 6s to 9s.
        if frame == 360 {
            carousel.handle(Input::PointerEnter);
        }
        if frame == 540 {
            carousel.handle(Input::PointerLeave);
        }

        if let Some(track) = carousel.tick(now).advance {
            let style = carousel.track_style(track);
            println!(
                "{now:>8.1}ms  slide {}  transform: {}",
                carousel.logical_index(),
                style.transform
            );
            track_element.apply(track, now);
        }

        if let Some(end) = track_element.poll(now)
            && let Completion::Snapped(snap) = carousel.transition_end(end)
        {
            track_element.apply(snap, now);
            println!("{now:>8.1}ms  snapped to track {}", snap.position);
        }

        if frame % 60 == 0 {
            let bars: Vec<String> = carousel.indicators().map(|v| v.bar_width()).collect();
            println!("{now:>8.1}ms  bars {bars:?}");
        }
    }

    carousel.stop();
}
