// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range query and paint benchmarks for the category view.
//!
//! Run with: cargo bench -p understory_benches --bench category_view

#![allow(missing_docs, reason = "criterion macros generate undocumented items")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_benches::{Album, NullRenderer, view};
use understory_category_view::Flow;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_view/rebuild");
    for len in SIZES {
        let album = Album { len, per_album: 50 };
        group.bench_with_input(BenchmarkId::from_parameter(len), &album, |b, album| {
            b.iter(|| black_box(view(album, Flow::Grid, None)));
        });
    }
    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_view/range_query");
    for len in SIZES {
        let album = Album { len, per_album: 50 };
        let grid = Some(Size::new(120.0, 120.0));

        // Cold: every query recomputes rects after a generation bump.
        let mut cold = view(&album, Flow::Grid, grid);
        group.bench_with_input(BenchmarkId::new("cold", len), &len, |b, _| {
            let mut spacing = 6.0;
            b.iter(|| {
                spacing = if spacing == 6.0 { 7.0 } else { 6.0 };
                cold.set_spacing(spacing);
                let mid = cold.content_extent() / 2.0;
                black_box(cold.range_query(Rect::new(0.0, mid, 1280.0, mid + 800.0)))
            });
        });

        // Warm: the same viewport-sized query against a filled cache.
        let mut warm = view(&album, Flow::Grid, grid);
        let mid = warm.content_extent() / 2.0;
        let area = Rect::new(0.0, mid, 1280.0, mid + 800.0);
        let _ = warm.range_query(area);
        group.bench_with_input(BenchmarkId::new("warm", len), &len, |b, _| {
            b.iter(|| black_box(warm.range_query(black_box(area))));
        });
    }
    group.finish();
}

fn bench_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_view/paint");
    for flow in [Flow::List, Flow::Grid] {
        let album = Album {
            len: 50_000,
            per_album: 40,
        };
        let mut v = view(&album, flow, None);
        let middle = v.scroll_metrics().max_offset / 2.0;
        v.set_scroll_offset(middle);
        let area = v.visible_area();
        let mut renderer = NullRenderer::default();
        group.bench_function(format!("{flow:?}"), |b| {
            b.iter(|| v.paint(area, &mut renderer, |row| row % 7 == 0));
        });
        black_box(renderer.painted);
    }
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_range_query, bench_paint);
criterion_main!(benches);
