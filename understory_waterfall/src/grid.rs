// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns a [`WaterfallModel`], a viewport, and scroll state.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::{
    ColumnSizing, ItemsInRect, LayoutError, WaterfallConfig, WaterfallLayout, WaterfallModel,
};

/// Alignment mode when scrolling a specific item into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top edge of the item with the top of the viewport.
    Start,
    /// Center the item within the viewport.
    Center,
    /// Align the bottom edge of the item with the bottom of the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Controller for a vertically scrolling staggered grid.
///
/// This type:
/// - owns a [`WaterfallModel`], a [`WaterfallConfig`], and a [`WaterfallLayout`],
/// - stores viewport size, vertical scroll offset, and asymmetric overscan,
/// - tracks whether the layout is stale and re-prepares it lazily.
///
/// Only changes that affect placement mark the layout dirty: the model, the
/// configuration, and the viewport *width*. Scrolling and viewport height
/// changes only move the visible window.
///
/// ```rust
/// use kurbo::Size;
/// use understory_waterfall::{SizeTable, StaggeredGrid, WaterfallConfig};
///
/// let model = SizeTable::from_sizes((0..100).map(|_| Size::new(1.0, 1.0)));
/// let mut grid = StaggeredGrid::new(model, WaterfallConfig::new(), Size::new(210.0, 300.0), 0.0);
///
/// // Two 100-wide columns with 10-unit gaps: rows start every 110 units.
/// assert_eq!(grid.visible_items().count(), 6);
/// grid.set_scroll_offset(110.0);
/// assert_eq!(grid.visible_items().next().unwrap().frame.y0, 110.0);
/// ```
#[derive(Debug)]
pub struct StaggeredGrid<M: WaterfallModel> {
    model: M,
    config: WaterfallConfig,
    viewport: Size,
    scroll_offset: f64,
    overscan_before: f64,
    overscan_after: f64,

    dirty: bool,
    section_counts: Vec<usize>,
    layout: WaterfallLayout,
}

impl<M: WaterfallModel> StaggeredGrid<M> {
    /// Creates a new grid over `model` with the given `viewport` and symmetric `overscan`.
    #[must_use]
    pub fn new(model: M, config: WaterfallConfig, viewport: Size, overscan: f64) -> Self {
        Self {
            model,
            config,
            viewport: clamp_size(viewport),
            scroll_offset: 0.0,
            overscan_before: overscan.max(0.0),
            overscan_after: overscan.max(0.0),
            dirty: true,
            section_counts: Vec::new(),
            layout: WaterfallLayout::new(),
        }
    }

    /// Returns a shared reference to the underlying model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns a mutable reference to the underlying model, marking the layout dirty.
    pub fn model_mut(&mut self) -> &mut M {
        self.dirty = true;
        &mut self.model
    }

    /// Returns the layout configuration.
    #[must_use]
    pub const fn config(&self) -> &WaterfallConfig {
        &self.config
    }

    /// Replaces the layout configuration.
    pub fn set_config(&mut self, config: WaterfallConfig) {
        if config != self.config {
            self.config = config;
            self.dirty = true;
        }
    }

    /// Derives the column count from a desired column size and applies it.
    ///
    /// The space available to columns is the viewport width minus the
    /// horizontal insets. Returns the column count now in effect.
    pub fn apply_column_sizing(
        &mut self,
        desired_column_size: f64,
        sizing: ColumnSizing,
    ) -> Result<usize, LayoutError> {
        let insets = self.config.insets;
        let available = self.viewport.width - insets.x0.max(0.0) - insets.x1.max(0.0);
        let count = sizing.column_count(available, desired_column_size)?;
        if count != self.config.column_count {
            log::debug!(
                "column count {} -> {count} for width {available}",
                self.config.column_count
            );
            self.config.column_count = count;
            self.dirty = true;
        }
        Ok(count)
    }

    /// Marks the layout dirty so the next query re-prepares it.
    ///
    /// Use this after changing data the grid cannot observe, for example when
    /// the model reads from shared state.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` if the next query will re-prepare the layout.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size. Only a width change invalidates the layout.
    pub fn set_viewport(&mut self, viewport: Size) {
        let viewport = clamp_size(viewport);
        if viewport.width != self.viewport.width {
            self.dirty = true;
        }
        self.viewport = viewport;
    }

    /// Returns the current vertical scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the vertical scroll offset.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Sets the overscan extents applied above and below the viewport.
    pub fn set_overscan(&mut self, overscan_before: f64, overscan_after: f64) {
        self.overscan_before = overscan_before.max(0.0);
        self.overscan_after = overscan_after.max(0.0);
    }

    /// Returns the overscan extent applied above the viewport.
    #[must_use]
    pub const fn overscan_before(&self) -> f64 {
        self.overscan_before
    }

    /// Returns the overscan extent applied below the viewport.
    #[must_use]
    pub const fn overscan_after(&self) -> f64 {
        self.overscan_after
    }

    /// Returns the up-to-date layout, re-preparing it if dirty.
    pub fn layout(&mut self) -> &WaterfallLayout {
        self.ensure_layout();
        &self.layout
    }

    /// Size of the laid-out content.
    pub fn content_size(&mut self) -> Size {
        self.layout().content_size()
    }

    /// The overscanned viewport band in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        let top = (self.scroll_offset - self.overscan_before).max(0.0);
        let bottom = self.scroll_offset + self.viewport.height + self.overscan_after;
        Rect::new(0.0, top, self.viewport.width, bottom)
    }

    /// Elements intersecting the overscanned viewport, in placement order.
    pub fn visible_items(&mut self) -> ItemsInRect<'_> {
        self.ensure_layout();
        let rect = self.visible_rect();
        self.layout.items_in_rect(rect)
    }

    /// Returns `true` if the item lies entirely within the viewport.
    #[must_use]
    pub fn is_item_fully_visible(&mut self, section: usize, index: usize) -> bool {
        let (view_start, view_end) = self.view_span();
        self.layout()
            .frame_for_item(section, index)
            .is_some_and(|frame| frame.y0 >= view_start && frame.y1 <= view_end)
    }

    /// Returns `true` if the item overlaps the viewport at all.
    #[must_use]
    pub fn is_item_partially_visible(&mut self, section: usize, index: usize) -> bool {
        let (view_start, view_end) = self.view_span();
        self.layout()
            .frame_for_item(section, index)
            .is_some_and(|frame| frame.y1 > view_start && frame.y0 < view_end)
    }

    /// Clamps the scroll offset so the viewport stays within the content.
    pub fn clamp_scroll_to_content(&mut self) {
        let content = self.content_size().height;
        let max_offset = (content - self.viewport.height).max(0.0);
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset);
        }
    }

    /// Scrolls so that the item is brought into view using the given alignment.
    ///
    /// Items that were not laid out leave the scroll offset unchanged.
    ///
    /// - [`ScrollAlign::Start`] aligns the top of the item with the top of the viewport.
    /// - [`ScrollAlign::End`] aligns the bottom of the item with the bottom of the viewport.
    /// - [`ScrollAlign::Center`] centers the item within the viewport.
    /// - [`ScrollAlign::Nearest`] moves just enough to make the item fully visible.
    pub fn scroll_to_item(&mut self, section: usize, index: usize, align: ScrollAlign) {
        let Some(frame) = self.layout().frame_for_item(section, index) else {
            return;
        };
        let viewport = self.viewport.height;
        let new_offset = match align {
            ScrollAlign::Start => frame.y0,
            ScrollAlign::End => frame.y1 - viewport,
            ScrollAlign::Center => (frame.y0 + frame.y1) / 2.0 - viewport / 2.0,
            ScrollAlign::Nearest => {
                let (view_start, view_end) = self.view_span();
                if frame.y0 >= view_start && frame.y1 <= view_end {
                    self.scroll_offset
                } else if frame.y0 < view_start {
                    frame.y0
                } else {
                    frame.y1 - viewport
                }
            }
        };
        self.set_scroll_offset(new_offset);
    }

    fn view_span(&self) -> (f64, f64) {
        (
            self.scroll_offset,
            self.scroll_offset + self.viewport.height,
        )
    }

    fn ensure_layout(&mut self) {
        if !self.dirty {
            return;
        }
        let model = &self.model;
        self.section_counts.clear();
        self.section_counts
            .extend((0..model.section_count()).map(|section| model.item_count(section)));
        self.layout.prepare_with_config(
            &self.section_counts,
            self.viewport.width,
            &self.config,
            |section, index| model.item_size(section, index),
        );
        self.dirty = false;
    }
}

fn clamp_size(size: Size) -> Size {
    Size::new(size.width.max(0.0), size.height.max(0.0))
}
