// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `carousel_strip` crate.
//!
//! These drive long step sequences over several strip sizes and check that
//! the logical index wraps like modular arithmetic while the track only ever
//! leaves the real range for a single step.

use carousel_strip::{Direction, StripLayout, StripPosition};

/// Small deterministic generator so the step sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_bool(&mut self) -> bool {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) & 1 == 1
    }
}

#[test]
fn logical_index_tracks_modular_step_count() {
    for n in 1..=7_usize {
        let layout = StripLayout::new(n).unwrap();
        let mut pos = StripPosition::new(layout);
        let mut rng = Lcg(n as u64);
        let mut net: i64 = 0;

        for _ in 0..500 {
            let direction = if rng.next_bool() {
                net += 1;
                Direction::Forward
            } else {
                net -= 1;
                Direction::Backward
            };
            let track = pos.step(direction);
            assert!(track <= layout.last_position(), "track escaped the strip");
            assert!(pos.logical() < n, "logical index out of range");

            let expected = net.rem_euclid(n as i64) as usize;
            assert_eq!(pos.logical(), expected, "n = {n}, net = {net}");

            // Whatever the host shows at the track position is the current slide.
            assert_eq!(layout.source_of(track), Some(pos.logical()));

            pos.settle();
            assert!(pos.is_settled(), "settle must restore track == logical + 1");
        }
    }
}

#[test]
fn clones_only_appear_at_the_ends() {
    let layout = StripLayout::new(5).unwrap();
    let clones: Vec<usize> = (0..layout.track_len())
        .filter(|&p| layout.is_clone(p))
        .collect();
    assert_eq!(clones, vec![0, 6]);
}

#[test]
fn full_forward_lap_returns_to_start() {
    let layout = StripLayout::new(4).unwrap();
    let mut pos = StripPosition::new(layout);
    let mut tracks = Vec::new();
    for _ in 0..4 {
        tracks.push(pos.step(Direction::Forward));
        pos.settle();
    }
    assert_eq!(tracks, vec![2, 3, 4, 5]);
    assert_eq!((pos.logical(), pos.track()), (0, 1));
}
