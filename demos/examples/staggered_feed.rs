// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scrolling photo feed on top of `understory_waterfall`.
//!
//! This example shows how to:
//! - implement `WaterfallModel` over host data,
//! - drive a `StaggeredGrid` through scrolling and a window resize,
//! - diff the visible elements to decide which views to create or drop.
//!
//! Run with layout logging:
//! - `RUST_LOG=debug cargo run -p understory_waterfall_demos --example staggered_feed`

use std::collections::BTreeSet;

use kurbo::{Insets, Size};
use understory_waterfall::{
    ColumnSizing, Direction, Element, ScrollAlign, Spacing, StaggeredGrid, WaterfallConfig,
    WaterfallModel,
};

/// Host-side data: photos grouped by day.
struct Feed {
    days: Vec<Vec<Photo>>,
}

#[derive(Clone, Copy)]
struct Photo {
    width_px: u32,
    height_px: u32,
}

impl WaterfallModel for Feed {
    fn section_count(&self) -> usize {
        self.days.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.days.get(section).map_or(0, Vec::len)
    }

    fn item_size(&self, section: usize, index: usize) -> Size {
        self.days
            .get(section)
            .and_then(|photos| photos.get(index))
            .map_or(Size::ZERO, |p| {
                Size::new(f64::from(p.width_px), f64::from(p.height_px))
            })
    }
}

fn feed() -> Feed {
    let shapes = [(4000, 3000), (3000, 4000), (1080, 1920), (2048, 2048), (1920, 1080)];
    let days = [14, 9, 23, 5]
        .into_iter()
        .enumerate()
        .map(|(day, count)| {
            (0..count)
                .map(|i| {
                    let (width_px, height_px) = shapes[(day * 7 + i) % shapes.len()];
                    Photo {
                        width_px,
                        height_px,
                    }
                })
                .collect()
        })
        .collect();
    Feed { days }
}

/// Elements currently backed by a view, keyed the way a host would key them.
fn realized(grid: &mut StaggeredGrid<Feed>) -> BTreeSet<(usize, usize, u8)> {
    grid.visible_items()
        .map(|attrs| match attrs.element {
            Element::Header { section } => (section, 0, 0),
            Element::Item { section, index } => (section, index, 1),
            Element::Footer { section } => (section, 0, 2),
        })
        .collect()
}

fn report(step: &str, grid: &mut StaggeredGrid<Feed>, live: &mut BTreeSet<(usize, usize, u8)>) {
    let next = realized(grid);
    let created = next.difference(live).count();
    let dropped = live.difference(&next).count();
    println!(
        "{step:<22} offset {:>7.1}  content {:>7.1}  live {:>3}  +{created:<3} -{dropped}",
        grid.scroll_offset(),
        grid.content_size().height,
        next.len(),
    );
    *live = next;
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WaterfallConfig::new()
        .with_spacing(Spacing::uniform(6.0))
        .with_insets(Insets::new(6.0, 0.0, 6.0, 12.0))
        .with_header_footer(32.0, 0.0)
        .with_direction(Direction::ShortestFirst);
    let mut grid = StaggeredGrid::new(feed(), config, Size::new(390.0, 844.0), 200.0);
    let mut live = BTreeSet::new();

    report("initial", &mut grid, &mut live);
    for _ in 0..4 {
        grid.scroll_by(600.0);
        grid.clamp_scroll_to_content();
        report("scroll +600", &mut grid, &mut live);
    }

    grid.scroll_to_item(2, 10, ScrollAlign::Center);
    report("center day 2 #10", &mut grid, &mut live);

    // Rotating to landscape changes the width, so the layout is redone.
    grid.set_viewport(Size::new(844.0, 390.0));
    match grid.apply_column_sizing(180.0, ColumnSizing::SuitableSize) {
        Ok(columns) => log::info!("landscape uses {columns} columns"),
        Err(err) => log::error!("column sizing failed: {err}"),
    }
    grid.scroll_to_item(2, 10, ScrollAlign::Nearest);
    report("rotate", &mut grid, &mut live);

    grid.model_mut().days[0].push(Photo {
        width_px: 1000,
        height_px: 3000,
    });
    report("append to day 0", &mut grid, &mut live);
}
