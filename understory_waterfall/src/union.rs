// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coarse spatial index over runs of consecutively placed attributes.
//!
//! The attribute list is cut into runs of [`UNION_SIZE`] in placement order
//! (the last run may be shorter). A query first locates the first and last
//! run whose bound intersects the query rectangle, then tests every attribute
//! between them exactly. Runs never overlap and together cover the whole list
//! in order, so the candidate range is always contiguous.
//!
//! Each run records two rectangles:
//!
//! - `endpoints`: the union of the first and last frame of the run. This is
//!   cheap but not conservative: an item in the middle of a run can extend
//!   below the last item when it sits in a different column.
//! - `bounds`: the union of every frame in the run. Pruning uses this one, so
//!   queries never miss an intersecting attribute.

use core::ops::Range;

use alloc::vec::Vec;
use kurbo::Rect;

use crate::LayoutAttributes;

/// Number of consecutive attributes summarized by one [`UnionRect`].
pub const UNION_SIZE: usize = 20;

/// Summary of one run of consecutive attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionRect {
    /// Union of the first and last frame of the run.
    pub endpoints: Rect,
    /// Union of all frames of the run.
    pub bounds: Rect,
    /// Indices of the run within the full attribute list.
    pub range: Range<usize>,
}

/// Run summaries for one prepared layout.
#[derive(Clone, Debug, Default)]
pub struct UnionRects {
    runs: Vec<UnionRect>,
}

impl UnionRects {
    /// Summarizes `attributes` in runs of [`UNION_SIZE`].
    #[must_use]
    pub fn build(attributes: &[LayoutAttributes]) -> Self {
        let runs = attributes
            .chunks(UNION_SIZE)
            .enumerate()
            .map(|(i, run)| {
                let first = run[0].frame;
                let last = run[run.len() - 1].frame;
                let bounds = run
                    .iter()
                    .skip(1)
                    .fold(first, |acc, attr| acc.union(attr.frame));
                let start = i * UNION_SIZE;
                UnionRect {
                    endpoints: first.union(last),
                    bounds,
                    range: start..start + run.len(),
                }
            })
            .collect();
        Self { runs }
    }

    /// All runs, in placement order.
    #[must_use]
    pub fn as_slice(&self) -> &[UnionRect] {
        &self.runs
    }

    /// Number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if there are no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Contiguous range of attribute indices that may intersect `rect`.
    ///
    /// Every attribute intersecting `rect` lies inside the returned range; the
    /// range can also contain attributes that do not.
    #[must_use]
    pub fn candidate_range(&self, rect: Rect) -> Range<usize> {
        if is_degenerate(rect) {
            return 0..0;
        }
        let Some(first) = self.runs.iter().position(|r| may_contain(rect, r.bounds)) else {
            return 0..0;
        };
        // A forward match guarantees a backward one.
        let last = self
            .runs
            .iter()
            .rposition(|r| may_contain(rect, r.bounds))
            .unwrap_or(first);
        self.runs[first].range.start..self.runs[last].range.end
    }
}

/// A query rectangle with no area (or inverted) matches nothing.
pub(crate) fn is_degenerate(rect: Rect) -> bool {
    !(rect.x1 > rect.x0 && rect.y1 > rect.y0)
}

/// Closed-interval overlap of a run bound with a query.
///
/// Looser than [`intersects`] so that flat members lying on the edge of a
/// taller bound are still reached.
fn may_contain(query: Rect, bounds: Rect) -> bool {
    bounds.x0 <= query.x1
        && bounds.x1 >= query.x0
        && bounds.y0 <= query.y1
        && bounds.y1 >= query.y0
}

/// Whether `frame` intersects the non-degenerate `query`.
///
/// Along each axis the query is half-open `[min, max)` and a frame with
/// positive extent must share some interior with it. A frame that is flat
/// along an axis (zero-height items) matches when its position lies in the
/// closed query interval, so that querying the full content bounds returns
/// every element.
pub(crate) fn intersects(query: Rect, frame: Rect) -> bool {
    overlaps_axis(query.x0, query.x1, frame.x0, frame.x1)
        && overlaps_axis(query.y0, query.y1, frame.y0, frame.y1)
}

fn overlaps_axis(q0: f64, q1: f64, f0: f64, f1: f64) -> bool {
    if f1 > f0 {
        f0 < q1 && f1 > q0
    } else {
        f0 >= q0 && f0 <= q1
    }
}
