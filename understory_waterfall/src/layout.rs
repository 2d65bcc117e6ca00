// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The waterfall layout engine: placement and rectangle queries.

use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;

use alloc::vec::Vec;
use kurbo::{Insets, Rect, Size};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::columns::{ColumnHeights, column_width};
use crate::union::{UnionRects, intersects};
use crate::{Direction, Element, LayoutAttributes, Spacing, WaterfallConfig};

#[derive(Clone, Debug)]
struct SectionState {
    column_width: f64,
    columns: ColumnHeights,
    header: Option<usize>,
    footer: Option<usize>,
    /// Indices of this section's items in the attribute list.
    items: Range<usize>,
}

/// Waterfall (masonry) layout over a sequence of sections.
///
/// Each [`prepare`](Self::prepare) call discards the previous result and lays
/// out every section from scratch. Queries then read that result until the
/// next `prepare`. Queries never fail: out-of-range lookups return `None` and
/// rectangles outside the content return nothing.
///
/// Within a section, items are placed into equal-width columns. The
/// [`Direction`] picks the column for each item; the item keeps the column
/// width and scales its height by its intrinsic aspect ratio. Headers and
/// footers span the full viewport width, outside the section insets.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_waterfall::{Spacing, WaterfallConfig, WaterfallLayout};
///
/// let config = WaterfallConfig::new().with_spacing(Spacing::uniform(0.0));
/// let mut layout = WaterfallLayout::new();
/// layout.prepare_with_config(&[3], 200.0, &config, |_, index| {
///     Size::new(100.0, if index == 0 { 300.0 } else { 100.0 })
/// });
///
/// // The tall first item pushes the third into the second column.
/// assert_eq!(layout.frame_for_item(0, 2), Some(Rect::new(100.0, 100.0, 200.0, 200.0)));
/// assert_eq!(layout.content_size(), Size::new(200.0, 300.0));
///
/// let visible: Vec<_> = layout.items_in_rect(Rect::new(0.0, 0.0, 200.0, 50.0)).collect();
/// assert_eq!(visible.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WaterfallLayout {
    viewport_width: f64,
    attributes: Vec<LayoutAttributes>,
    sections: Vec<SectionState>,
    unions: UnionRects,
    content_size: Size,
}

impl WaterfallLayout {
    /// Creates an empty layout. Every query answers as if there were no sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out all sections.
    ///
    /// - `sections`: item count per section.
    /// - `viewport_width`: width available to the content.
    /// - `column_count(section)`: values below one are treated as one.
    /// - `spacing(section)`: column and item gaps; negative gaps become zero.
    /// - `insets(section)`: space around the section's items; negative insets become zero.
    /// - `header_height(section)`, `footer_height(section)`: `0` emits none.
    /// - `item_size(section, index)`: intrinsic size hint. Items whose hint is
    ///   not positive in both dimensions get zero height but still take a slot.
    /// - `direction`: column selection policy.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `viewport_width` is not finite. Release
    /// builds do not check it; a NaN width produces a meaningless layout.
    pub fn prepare<C, S, I, H, F, Z>(
        &mut self,
        sections: &[usize],
        viewport_width: f64,
        mut column_count: C,
        mut spacing: S,
        mut insets: I,
        mut header_height: H,
        mut footer_height: F,
        mut item_size: Z,
        direction: Direction,
    ) where
        C: FnMut(usize) -> usize,
        S: FnMut(usize) -> Spacing,
        I: FnMut(usize) -> Insets,
        H: FnMut(usize) -> f64,
        F: FnMut(usize) -> f64,
        Z: FnMut(usize, usize) -> Size,
    {
        debug_assert!(
            viewport_width.is_finite(),
            "WaterfallLayout viewport width must be finite; got {viewport_width:?}"
        );
        let width = viewport_width.max(0.0);

        self.viewport_width = width;
        self.attributes.clear();
        self.sections.clear();
        self.attributes
            .reserve(sections.iter().sum::<usize>() + 2 * sections.len());

        if sections.is_empty() {
            self.unions = UnionRects::default();
            self.content_size = Size::ZERO;
            log::debug!("waterfall prepared with no sections");
            return;
        }

        let mut top = 0.0;
        for (section, &item_count) in sections.iter().enumerate() {
            let requested = column_count(section);
            if requested == 0 {
                log::warn!("column count 0 requested for section {section}; using 1");
            }
            let count = requested.max(1);
            let gaps = spacing(section).clamped();
            let inset = clamp_insets(insets(section));
            let item_width = column_width(width - inset.x0 - inset.x1, count, gaps.column);

            let header = self.push_band(Element::Header { section }, top, header_height(section));
            if let Some(index) = header {
                top = self.attributes[index].frame.y1;
            }

            top += inset.y0;
            let mut columns = ColumnHeights::new(count, top);
            let first_item = self.attributes.len();
            for index in 0..item_count {
                let column = columns.next_column(index, direction);
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "Column indices are small; exact representation is not a concern"
                )]
                let x = inset.x0 + column as f64 * (item_width + gaps.column);
                let y = columns.as_slice()[column];
                let height = scaled_height(item_size(section, index), item_width);
                self.attributes.push(LayoutAttributes {
                    element: Element::Item { section, index },
                    frame: Rect::new(x, y, x + item_width, y + height),
                });
                columns.advance(column, y + height + gaps.item);
            }
            let items = first_item..self.attributes.len();

            let longest = columns.as_slice()[columns.longest()];
            top = longest - gaps.item + inset.y1;
            let footer = self.push_band(Element::Footer { section }, top, footer_height(section));
            if let Some(index) = footer {
                top = self.attributes[index].frame.y1;
            }
            columns.fill(top);

            log::trace!(
                "section {section}: {item_count} items in {count} columns of {item_width}, ends at {top}"
            );
            self.sections.push(SectionState {
                column_width: item_width,
                columns,
                header,
                footer,
                items,
            });
        }

        self.unions = UnionRects::build(&self.attributes);
        self.content_size = Size::new(width, top);
        log::debug!(
            "waterfall prepared: {} sections, {} attributes, {} union rects, content {:?}",
            self.sections.len(),
            self.attributes.len(),
            self.unions.len(),
            self.content_size
        );
    }

    /// Lays out all sections with the same parameters, taken from `config`.
    pub fn prepare_with_config<Z>(
        &mut self,
        sections: &[usize],
        viewport_width: f64,
        config: &WaterfallConfig,
        item_size: Z,
    ) where
        Z: FnMut(usize, usize) -> Size,
    {
        self.prepare(
            sections,
            viewport_width,
            |_| config.column_count,
            |_| config.spacing,
            |_| config.insets,
            |_| config.header_height,
            |_| config.footer_height,
            item_size,
            config.direction,
        );
    }

    /// Emits a full-width header or footer if `height` is positive.
    fn push_band(&mut self, element: Element, top: f64, height: f64) -> Option<usize> {
        if !(height > 0.0) {
            return None;
        }
        self.attributes.push(LayoutAttributes {
            element,
            frame: Rect::new(0.0, top, self.viewport_width, top + height),
        });
        Some(self.attributes.len() - 1)
    }

    /// Returns `true` if laying out for `new_width` would differ from the
    /// current result. Only width changes matter; height and scroll do not.
    #[must_use]
    pub fn should_invalidate_for_width(&self, new_width: f64) -> bool {
        new_width.max(0.0) != self.viewport_width
    }

    /// Viewport width of the last `prepare`.
    #[must_use]
    pub const fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Size of the laid-out content. Zero when there are no sections.
    ///
    /// The height can be negative: a section without items still removes one
    /// item gap when placing its footer, so a layout made only of empty
    /// sections ends above the origin.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// All attributes in placement order: per section, header, items, footer.
    #[must_use]
    pub fn attributes(&self) -> &[LayoutAttributes] {
        &self.attributes
    }

    /// Number of attributes (items, headers, and footers).
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of sections in the last `prepare`.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of items laid out in `section`.
    #[must_use]
    pub fn item_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(|s| s.items.len())
    }

    /// Number of columns used by `section` after clamping.
    #[must_use]
    pub fn column_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(|s| s.columns.len())
    }

    /// Column width used by `section`.
    #[must_use]
    pub fn column_width(&self, section: usize) -> Option<f64> {
        self.sections.get(section).map(|s| s.column_width)
    }

    /// Final column heights of `section`.
    ///
    /// After a `prepare` every column of a section ends at the section's
    /// bottom edge (below its footer, if any).
    #[must_use]
    pub fn column_heights(&self, section: usize) -> Option<&[f64]> {
        self.sections.get(section).map(|s| s.columns.as_slice())
    }

    /// Run summaries used to accelerate [`items_in_rect`](Self::items_in_rect).
    #[must_use]
    pub fn union_rects(&self) -> &UnionRects {
        &self.unions
    }

    /// Attributes of the given element, if it was laid out.
    #[must_use]
    pub fn attributes_for(&self, element: Element) -> Option<&LayoutAttributes> {
        let state = self.sections.get(element.section())?;
        let index = match element {
            Element::Header { .. } => state.header?,
            Element::Footer { .. } => state.footer?,
            Element::Item { index, .. } => {
                if index >= state.items.len() {
                    return None;
                }
                state.items.start + index
            }
        };
        self.attributes.get(index)
    }

    /// Attributes of item `index` of `section`.
    #[must_use]
    pub fn attributes_for_item(&self, section: usize, index: usize) -> Option<&LayoutAttributes> {
        self.attributes_for(Element::Item { section, index })
    }

    /// Frame of item `index` of `section`, or `None` if it was not laid out.
    #[must_use]
    pub fn frame_for_item(&self, section: usize, index: usize) -> Option<Rect> {
        self.attributes_for_item(section, index).map(|a| a.frame)
    }

    /// Frame of the header of `section`, or `None` if it has none.
    #[must_use]
    pub fn frame_for_header(&self, section: usize) -> Option<Rect> {
        self.attributes_for(Element::Header { section })
            .map(|a| a.frame)
    }

    /// Frame of the footer of `section`, or `None` if it has none.
    #[must_use]
    pub fn frame_for_footer(&self, section: usize) -> Option<Rect> {
        self.attributes_for(Element::Footer { section })
            .map(|a| a.frame)
    }

    /// Elements whose frame intersects `rect`, in placement order.
    ///
    /// Headers and footers are included. The iterator is lazy; calling this
    /// again with the same rectangle yields the same sequence until the next
    /// `prepare`. A rectangle without area yields nothing.
    #[must_use]
    pub fn items_in_rect(&self, rect: Rect) -> ItemsInRect<'_> {
        let range = self.unions.candidate_range(rect);
        ItemsInRect {
            rect,
            candidates: self.attributes[range].iter(),
        }
    }
}

/// Iterator returned by [`WaterfallLayout::items_in_rect`].
#[derive(Clone, Debug)]
pub struct ItemsInRect<'a> {
    rect: Rect,
    candidates: slice::Iter<'a, LayoutAttributes>,
}

impl<'a> Iterator for ItemsInRect<'a> {
    type Item = &'a LayoutAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        let rect = self.rect;
        self.candidates.find(|attr| intersects(rect, attr.frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len()))
    }
}

impl FusedIterator for ItemsInRect<'_> {}

/// Height of an item of `intrinsic` size scaled to `width`, floored.
///
/// Zero unless both intrinsic dimensions are positive.
fn scaled_height(intrinsic: Size, width: f64) -> f64 {
    if intrinsic.width > 0.0 && intrinsic.height > 0.0 {
        (intrinsic.height * width / intrinsic.width).floor()
    } else {
        0.0
    }
}

fn clamp_insets(insets: Insets) -> Insets {
    Insets::new(
        insets.x0.max(0.0),
        insets.y0.max(0.0),
        insets.x1.max(0.0),
        insets.y1.max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Insets, Rect, Size};

    use super::{WaterfallLayout, scaled_height};
    use crate::{Direction, Element, Spacing, WaterfallConfig};

    fn tight(columns: usize) -> WaterfallConfig {
        WaterfallConfig::new()
            .with_column_count(columns)
            .with_spacing(Spacing::uniform(0.0))
    }

    #[test]
    fn two_by_two_grid_of_squares() {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[4], 200.0, &tight(2), |_, _| Size::new(100.0, 100.0));

        assert_eq!(layout.frame_for_item(0, 0), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(layout.frame_for_item(0, 1), Some(Rect::new(100.0, 0.0, 200.0, 100.0)));
        assert_eq!(layout.frame_for_item(0, 2), Some(Rect::new(0.0, 100.0, 100.0, 200.0)));
        assert_eq!(layout.frame_for_item(0, 3), Some(Rect::new(100.0, 100.0, 200.0, 200.0)));
        assert_eq!(layout.content_size(), Size::new(200.0, 200.0));
    }

    #[test]
    fn shortest_first_fills_the_shorter_column() {
        let heights = [50.0, 10.0, 30.0];
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[3], 100.0, &tight(2), |_, i| Size::new(50.0, heights[i]));

        // item 0 → column 0 (tie, lowest index), item 1 → column 1,
        // item 2 → column 1 again since 10 < 50.
        assert_eq!(layout.frame_for_item(0, 0).unwrap().x0, 0.0);
        assert_eq!(layout.frame_for_item(0, 1).unwrap().x0, 50.0);
        let third = layout.frame_for_item(0, 2).unwrap();
        assert_eq!((third.x0, third.y0), (50.0, 10.0));
        assert_eq!(layout.content_size().height, 50.0);
    }

    #[test]
    fn left_to_right_ignores_heights() {
        let config = tight(3).with_direction(Direction::LeftToRight);
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[6], 300.0, &config, |_, i| {
            Size::new(100.0, if i == 0 { 500.0 } else { 10.0 })
        });
        let columns: Vec<_> = (0..6)
            .map(|i| layout.frame_for_item(0, i).unwrap().x0 / 100.0)
            .collect();
        assert_eq!(columns, [0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        // Item 3 sits under the tall item 0.
        assert_eq!(layout.frame_for_item(0, 3).unwrap().y0, 500.0);
    }

    #[test]
    fn right_to_left_starts_at_the_last_column() {
        let config = tight(3).with_direction(Direction::RightToLeft);
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[4], 300.0, &config, |_, _| Size::new(1.0, 1.0));
        let columns: Vec<_> = (0..4)
            .map(|i| layout.frame_for_item(0, i).unwrap().x0 / 100.0)
            .collect();
        assert_eq!(columns, [2.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn empty_section_list_yields_empty_layout() {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[4], 200.0, &tight(2), |_, _| Size::new(1.0, 1.0));
        layout.prepare_with_config(&[], 200.0, &tight(2), |_, _| Size::new(1.0, 1.0));

        assert_eq!(layout.content_size(), Size::ZERO);
        assert!(layout.is_empty());
        assert_eq!(layout.section_count(), 0);
        assert_eq!(
            layout.items_in_rect(Rect::new(-1e9, -1e9, 1e9, 1e9)).count(),
            0
        );
        assert_eq!(layout.frame_for_item(0, 0), None);
    }

    #[test]
    fn empty_sections_pull_the_top_up_by_the_item_gap() {
        let mut layout = WaterfallLayout::new();
        let config = WaterfallConfig::new();
        layout.prepare_with_config(&[0], 200.0, &config, |_, _| Size::ZERO);
        assert_eq!(layout.content_size(), Size::new(200.0, -10.0));

        // The footer follows the tallest column even when every column is above zero.
        let config = config.with_direction(Direction::RightToLeft);
        layout.prepare_with_config(&[0, 1], 200.0, &config, |_, _| Size::ZERO);
        assert_eq!(layout.column_heights(1), Some(&[-10.0, -10.0][..]));
        assert_eq!(
            layout.frame_for_item(1, 0),
            Some(Rect::new(105.0, -10.0, 200.0, -10.0))
        );
        assert_eq!(layout.content_size().height, -10.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "viewport width must be finite")]
    fn non_finite_width_is_caught_in_debug_builds() {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[1], f64::NAN, &WaterfallConfig::new(), |_, _| {
            Size::new(1.0, 1.0)
        });
    }

    #[test]
    fn header_item_footer_stack_up() {
        let config = tight(1).with_header_footer(20.0, 15.0);
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[1], 100.0, &config, |_, _| Size::new(100.0, 30.0));

        assert_eq!(layout.frame_for_header(0), Some(Rect::new(0.0, 0.0, 100.0, 20.0)));
        assert_eq!(layout.frame_for_item(0, 0), Some(Rect::new(0.0, 20.0, 100.0, 50.0)));
        assert_eq!(layout.frame_for_footer(0), Some(Rect::new(0.0, 50.0, 100.0, 65.0)));
        assert_eq!(layout.content_size().height, 65.0);

        let kinds: Vec<_> = layout.attributes().iter().map(|a| a.element).collect();
        assert_eq!(
            kinds,
            [
                Element::Header { section: 0 },
                Element::Item {
                    section: 0,
                    index: 0
                },
                Element::Footer { section: 0 },
            ]
        );
    }

    #[test]
    fn insets_and_spacing_shape_the_columns() {
        let config = WaterfallConfig::new()
            .with_column_count(3)
            .with_spacing(Spacing::new(10.0, 5.0))
            .with_insets(Insets::new(7.0, 3.0, 7.0, 11.0));
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[4], 121.0, &config, |_, _| Size::new(10.0, 10.0));

        // (121 - 14 - 20) / 3 = 29
        assert_eq!(layout.column_width(0), Some(29.0));
        assert_eq!(layout.frame_for_item(0, 0), Some(Rect::new(7.0, 3.0, 36.0, 32.0)));
        assert_eq!(layout.frame_for_item(0, 2), Some(Rect::new(85.0, 3.0, 114.0, 32.0)));
        // Item 3 goes back to column 0, one gap below item 0.
        assert_eq!(layout.frame_for_item(0, 3), Some(Rect::new(7.0, 37.0, 36.0, 66.0)));
        // Bottom: 66 + 5 - 5 + 11.
        assert_eq!(layout.content_size().height, 77.0);
        assert_eq!(layout.column_heights(0), Some(&[77.0, 77.0, 77.0][..]));
    }

    #[test]
    fn sections_stack_vertically() {
        let config = tight(2).with_header_footer(10.0, 0.0);
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[2, 0, 1], 100.0, &config, |_, _| Size::new(50.0, 50.0));

        assert_eq!(layout.frame_for_header(0).unwrap().y0, 0.0);
        assert_eq!(layout.frame_for_header(1).unwrap().y0, 60.0);
        // An empty section still emits its header.
        assert_eq!(layout.item_count(1), Some(0));
        assert_eq!(layout.frame_for_header(2).unwrap().y0, 70.0);
        assert_eq!(layout.frame_for_item(2, 0), Some(Rect::new(0.0, 80.0, 50.0, 130.0)));
        assert_eq!(layout.frame_for_footer(2), None);
        assert_eq!(layout.content_size(), Size::new(100.0, 130.0));
    }

    #[test]
    fn per_section_parameters_are_honored() {
        let mut layout = WaterfallLayout::new();
        layout.prepare(
            &[2, 2],
            100.0,
            |section| section + 1,
            |_| Spacing::uniform(0.0),
            |_| Insets::ZERO,
            |_| 0.0,
            |section| if section == 0 { 5.0 } else { 0.0 },
            |_, _| Size::new(10.0, 10.0),
            Direction::ShortestFirst,
        );
        assert_eq!(layout.column_count(0), Some(1));
        assert_eq!(layout.column_count(1), Some(2));
        // Section 0: two 100x100 items stacked, plus a 5-unit footer.
        assert_eq!(layout.frame_for_footer(0), Some(Rect::new(0.0, 200.0, 100.0, 205.0)));
        assert_eq!(layout.frame_for_item(1, 1), Some(Rect::new(50.0, 205.0, 100.0, 255.0)));
        assert_eq!(layout.content_size().height, 255.0);
    }

    #[test]
    fn degenerate_parameters_are_clamped() {
        let mut layout = WaterfallLayout::new();
        layout.prepare(
            &[3],
            90.0,
            |_| 0,
            |_| Spacing::new(-5.0, -5.0),
            |_| Insets::new(-1.0, -1.0, -1.0, -1.0),
            |_| -10.0,
            |_| 0.0,
            |_, _| Size::new(30.0, 30.0),
            Direction::ShortestFirst,
        );
        assert_eq!(layout.column_count(0), Some(1));
        assert_eq!(layout.column_width(0), Some(90.0));
        assert_eq!(layout.frame_for_header(0), None);
        assert_eq!(layout.frame_for_item(0, 2), Some(Rect::new(0.0, 180.0, 90.0, 270.0)));
    }

    #[test]
    fn missing_size_hints_take_a_slot_with_zero_height() {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[3], 200.0, &tight(2), |_, i| match i {
            0 => Size::ZERO,
            1 => Size::new(0.0, 40.0),
            _ => Size::new(100.0, 100.0),
        });
        // Zero-height items leave column 0 at the top, so the tie keeps
        // sending items there.
        assert_eq!(layout.frame_for_item(0, 0), Some(Rect::new(0.0, 0.0, 100.0, 0.0)));
        assert_eq!(layout.frame_for_item(0, 1), Some(Rect::new(0.0, 0.0, 100.0, 0.0)));
        assert_eq!(layout.frame_for_item(0, 2), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn out_of_range_lookups_are_absent() {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[2], 100.0, &tight(2), |_, _| Size::new(1.0, 1.0));
        assert_eq!(layout.frame_for_item(0, 2), None);
        assert_eq!(layout.frame_for_item(1, 0), None);
        assert_eq!(layout.frame_for_header(0), None);
        assert_eq!(layout.frame_for_footer(5), None);
        assert_eq!(layout.item_count(1), None);
        assert_eq!(layout.column_heights(1), None);
    }

    #[test]
    fn items_in_rect_filters_exactly() {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[100], 200.0, &tight(2), |_, _| Size::new(10.0, 10.0));

        // Rows are 100 tall; [150, 350) touches rows 1, 2, and 3.
        let hits: Vec<_> = layout
            .items_in_rect(Rect::new(0.0, 150.0, 200.0, 350.0))
            .map(|a| a.element)
            .collect();
        let expected: Vec<_> = (2..8)
            .map(|index| Element::Item { section: 0, index })
            .collect();
        assert_eq!(hits, expected);

        // Only the right column.
        let right: Vec<_> = layout
            .items_in_rect(Rect::new(150.0, 0.0, 160.0, 150.0))
            .map(|a| a.frame.x0)
            .collect();
        assert_eq!(right, [100.0, 100.0]);

        assert_eq!(
            layout.items_in_rect(Rect::new(0.0, 0.0, 0.0, 500.0)).count(),
            0
        );
    }

    #[test]
    fn width_changes_invalidate() {
        let mut layout = WaterfallLayout::new();
        layout.prepare_with_config(&[1], 320.0, &tight(2), |_, _| Size::new(1.0, 1.0));
        assert!(!layout.should_invalidate_for_width(320.0));
        assert!(layout.should_invalidate_for_width(480.0));
    }

    #[test]
    fn aspect_ratio_scaling_is_floored() {
        assert_eq!(scaled_height(Size::new(3.0, 2.0), 100.0), 66.0);
        assert_eq!(scaled_height(Size::new(0.0, 2.0), 100.0), 0.0);
        assert_eq!(scaled_height(Size::new(3.0, -2.0), 100.0), 0.0);
    }
}
