// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for drag steps, snapping and hit testing.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use trimline_assets::AssetKind;
use trimline_editor::{Editor, EditorConfig};
use trimline_region::{AnchorPair, Asset, ClipWindow, DraggableRegion, Limits};
use trimline_scene::{NodeId, Scene};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn coordinate(&mut self, upper: u32) -> f64 {
        f64::from(self.next_u32() % upper)
    }
}

fn candidates(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| Point::new(rng.coordinate(800), rng.coordinate(600)))
        .collect()
}

fn editor_with_regions(count: usize) -> (Scene, Editor<NodeId>) {
    let mut scene = Scene::new(4_000.0, 2_000.0);
    let config = EditorConfig {
        spawn_step: 35.0,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(&mut scene, config).unwrap();
    for _ in 0..count {
        let asset = Asset::new(300.0, 150.0).unwrap();
        editor.add_asset(&mut scene, asset, &AssetKind::Sprite).unwrap();
    }
    scene.flush();
    (scene, editor)
}

fn regions(c: &mut Criterion) {
    let points = candidates(1_000, 7);

    c.bench_function("handle_drags_1000", |b| {
        let limits = Limits::default();
        let asset = Asset::new(600.0, 200.0).unwrap();
        let clip = ClipWindow::full(asset, limits.min_region_width()).unwrap();
        let region = DraggableRegion::new(Point::new(100.0, 100.0), clip);
        let anchors = AnchorPair::new(&region, limits).unwrap();
        b.iter_batched(
            || (region, anchors),
            |(mut region, mut anchors)| {
                for (i, p) in points.iter().enumerate() {
                    let corrected = if i % 2 == 0 {
                        anchors.on_right_handle_drag(&mut region, *p)
                    } else {
                        anchors.on_left_handle_drag(&mut region, *p)
                    };
                    black_box(corrected);
                }
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("body_drag_and_snap_release", |b| {
        b.iter_batched(
            || editor_with_regions(16),
            |(mut scene, mut editor)| {
                editor.pointer_down(&mut scene, Point::new(20.0, 60.0));
                for p in &points[..100] {
                    editor.pointer_move(&mut scene, *p);
                }
                editor.pointer_up(&mut scene);
                black_box(scene.flush());
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("hit_test_64_regions", |b| {
        let (scene, _editor) = editor_with_regions(64);
        b.iter(|| {
            for p in &points {
                black_box(scene.hit_test_point(*p));
            }
        });
    });
}

criterion_group!(benches, regions);
criterion_main!(benches);
