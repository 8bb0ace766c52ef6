// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trimline_assets::{render_bars, summarize};

fn waveform(c: &mut Criterion) {
    // Ten seconds of a 440 Hz tone at 44.1 kHz.
    let samples: Vec<f32> = (0..441_000_u32)
        .map(|i| (f64::from(i) * 440.0 * std::f64::consts::TAU / 44_100.0).sin() as f32)
        .collect();

    c.bench_function("summarize_500", |b| {
        b.iter(|| black_box(summarize(black_box(&samples), 500)));
    });

    let levels = summarize(&samples, 500).unwrap();
    c.bench_function("render_bars_500x200", |b| {
        b.iter(|| black_box(render_bars(black_box(&levels), 200)));
    });
}

criterion_group!(benches, waveform);
criterion_main!(benches);
