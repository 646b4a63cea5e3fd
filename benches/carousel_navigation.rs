// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel state transitions.
//!
//! Measures the performance of:
//! - Manual navigation commands (next/prev/goto)
//! - Full autoplay laps across every slide
//! - The pause-and-resume interaction cycle

use brochure::carousel::{Carousel, Command, Effect};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_manual_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("next_prev_cycle", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(8).unwrap();
            carousel.start_autoplay();
            for _ in 0..7 {
                carousel.apply(Command::Next);
            }
            for _ in 0..7 {
                carousel.apply(Command::Prev);
            }
            black_box(&carousel);
        });
    });

    group.bench_function("go_to_each_slide", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(8).unwrap();
            carousel.start_autoplay();
            for index in 0..8 {
                carousel.apply(Command::GoTo(index));
            }
            black_box(&carousel);
        });
    });

    group.finish();
}

fn bench_autoplay_lap(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_autoplay");

    group.bench_function("full_lap", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(8).unwrap();
            let mut token = match carousel.start_autoplay() {
                Effect::ScheduleTick(token) => token,
                _ => unreachable!(),
            };
            for _ in 0..8 {
                if let Effect::ScheduleTick(next) = carousel.apply(Command::AutoplayTick(token)) {
                    token = next;
                }
            }
            black_box(&carousel);
        });
    });

    group.bench_function("pause_resume_cycle", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(8).unwrap();
            carousel.start_autoplay();
            let resume = match carousel.apply(Command::Next) {
                Effect::ScheduleResume(token) => token,
                _ => unreachable!(),
            };
            carousel.apply(Command::ResumeElapsed(resume));
            black_box(&carousel);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_manual_navigation, bench_autoplay_lap);
criterion_main!(benches);
