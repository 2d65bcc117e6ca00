// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout and query throughput for large feeds.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_waterfall::{Direction, WaterfallConfig, WaterfallLayout};

fn item_size(section: usize, index: usize) -> Size {
    Size::new(100.0, 60.0 + ((section * 31 + index * 17) % 140) as f64)
}

fn sections(total: usize) -> Vec<usize> {
    vec![total / 4; 4]
}

fn prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");
    for total in [1_000, 10_000, 100_000] {
        let sections = sections(total);
        for direction in [Direction::ShortestFirst, Direction::LeftToRight] {
            let config = WaterfallConfig::new()
                .with_column_count(4)
                .with_header_footer(40.0, 20.0)
                .with_direction(direction);
            let mut layout = WaterfallLayout::new();
            group.bench_with_input(
                BenchmarkId::new(format!("{direction:?}"), total),
                &sections,
                |b, sections| {
                    b.iter(|| {
                        layout.prepare_with_config(sections, black_box(1024.0), &config, item_size);
                    });
                },
            );
        }
    }
    group.finish();
}

fn items_in_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("items_in_rect");
    for total in [1_000, 10_000, 100_000] {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&sections(total), 1024.0, &WaterfallConfig::new(), item_size);
        let middle = layout.content_size().height / 2.0;
        let viewport = Rect::new(0.0, middle, 1024.0, middle + 800.0);
        group.bench_with_input(BenchmarkId::from_parameter(total), &viewport, |b, rect| {
            b.iter(|| layout.items_in_rect(black_box(*rect)).count());
        });
    }
    group.finish();
}

criterion_group!(benches, prepare, items_in_rect);
criterion_main!(benches);
