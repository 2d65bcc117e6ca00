// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_waterfall --heading-base-level=0

//! Understory Waterfall: masonry layout for sectioned, multi-column item grids.
//!
//! This crate computes frames for a vertically scrolling "waterfall" (also
//! called masonry or staggered grid): items keep a common column width and a
//! height proportional to their intrinsic aspect ratio, and columns fill up
//! independently so there are no row gaps. Content is organized in sections,
//! each with an optional full-width header and footer.
//!
//! The core concepts are:
//!
//! - [`WaterfallLayout`]: the engine. [`WaterfallLayout::prepare`] lays out
//!   every section from per-section closures; queries then look up frames by
//!   [`Element`] or find every element intersecting a rectangle.
//! - [`Direction`]: how each item picks its column (shortest column first,
//!   round-robin left-to-right, or right-to-left).
//! - [`UnionRects`]: a coarse spatial index over runs of [`UNION_SIZE`]
//!   consecutive frames that keeps [`WaterfallLayout::items_in_rect`] cheap
//!   for large layouts.
//! - [`WaterfallConfig`]: uniform per-section parameters for the common case.
//! - [`ColumnSizing`]: derives a column count from a desired column size.
//! - [`StaggeredGrid`]: a small controller that owns a [`WaterfallModel`],
//!   a viewport, and scroll state, re-preparing lazily and answering
//!   visibility queries. [`SizeTable`] is a ready-made model.
//!
//! This crate deliberately does **not** know about widgets, views, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Supplying intrinsic item sizes (measured or estimated).
//! - Calling [`WaterfallLayout::prepare`] when data or viewport width change
//!   ([`WaterfallLayout::should_invalidate_for_width`] tells whether a resize matters).
//! - Realizing views for the elements returned by
//!   [`WaterfallLayout::items_in_rect`] and positioning them at their frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Rect, Size};
//! use understory_waterfall::{Element, Spacing, WaterfallConfig, WaterfallLayout};
//!
//! let config = WaterfallConfig::new()
//!     .with_column_count(3)
//!     .with_spacing(Spacing::uniform(8.0))
//!     .with_insets(Insets::uniform(8.0))
//!     .with_header_footer(40.0, 0.0);
//!
//! // Two sections with 30 and 12 photos of varying aspect ratios.
//! let mut layout = WaterfallLayout::new();
//! layout.prepare_with_config(&[30, 12], 360.0, &config, |section, index| {
//!     Size::new(4.0, 3.0 + ((section + index) % 4) as f64)
//! });
//!
//! assert_eq!(layout.column_width(0), Some(109.0));
//! assert!(layout.content_size().height > 0.0);
//!
//! // Elements to realize for a viewport showing the top 600 units.
//! for attrs in layout.items_in_rect(Rect::new(0.0, 0.0, 360.0, 600.0)) {
//!     if let Element::Item { section, index } = attrs.element {
//!         let _ = (section, index, attrs.frame);
//!     }
//! }
//! ```
//!
//! All lengths live in a caller-chosen coordinate space (typically logical
//! pixels) and are expected to be finite.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod columns;
mod config;
mod error;
mod grid;
mod layout;
mod model;
mod sizing;
mod types;
mod union;

pub use columns::{ColumnHeights, column_width};
pub use config::WaterfallConfig;
pub use error::LayoutError;
pub use grid::{ScrollAlign, StaggeredGrid};
pub use layout::{ItemsInRect, WaterfallLayout};
pub use model::{SizeTable, WaterfallModel};
pub use sizing::ColumnSizing;
pub use types::{Direction, Element, LayoutAttributes, Spacing};
pub use union::{UNION_SIZE, UnionRect, UnionRects};
