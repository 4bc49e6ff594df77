// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel::{Carousel, CarouselOptions, Input, PointerKind, TransitionEnd};
use carousel_strip::{Direction, StripLayout, StripPosition};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::time::Duration;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn bench_idle_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/tick");

    // A minute of frames at 60fps; advances every 100ms so the in-flight
    // guard and completion path are exercised too.
    let frames = 3_600_u32;
    group.throughput(Throughput::Elements(u64::from(frames)));
    for slides in [3_usize, 12, 96] {
        group.bench_with_input(BenchmarkId::new("minute", slides), &slides, |b, &n| {
            let options = CarouselOptions {
                interval_ms: 100.0,
                ..CarouselOptions::default()
            };
            b.iter_batched(
                || Carousel::new(n, options.clone()).unwrap(),
                |mut carousel| {
                    for i in 0..frames {
                        let frame = carousel.tick(f64::from(i) * FRAME_MS);
                        if frame.advance.is_some() {
                            carousel.transition_end(TransitionEnd::TRACK_TRANSFORM);
                        }
                    }
                    black_box(carousel.logical_index());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/handle");

    group.bench_function("swipe_and_settle", |b| {
        let mut carousel = Carousel::new(8, CarouselOptions::default()).unwrap();
        b.iter(|| {
            carousel.handle(Input::PointerDown {
                kind: PointerKind::Touch,
                pos: Point::new(200.0, 50.0),
            });
            let reaction = carousel.handle(Input::PointerUp {
                pos: Point::new(120.0, 50.0),
            });
            carousel.transition_end(TransitionEnd::TRACK_TRANSFORM);
            black_box(reaction);
        });
    });

    group.bench_function("indicator_views", |b| {
        let carousel = Carousel::new(24, CarouselOptions::default()).unwrap();
        b.iter(|| {
            let widths: usize = carousel.indicators().map(|v| v.bar_width().len()).sum();
            black_box(widths);
        });
    });

    group.finish();
}

fn bench_strip_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip/step");
    group.measurement_time(Duration::from_secs(3));

    for slides in [2_usize, 50] {
        group.bench_with_input(BenchmarkId::new("lap", slides), &slides, |b, &n| {
            b.iter_batched(
                || StripPosition::new(StripLayout::new(n).unwrap()),
                |mut position| {
                    for _ in 0..n {
                        position.step(Direction::Forward);
                        position.settle();
                    }
                    black_box(position.logical());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_idle_frames, bench_input, bench_strip_steps);
criterion_main!(benches);
