// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-section column bookkeeping.

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::Direction;

/// Width of each column when `available` is split into `count` columns
/// separated by `spacing`.
///
/// The result is floored so columns land on whole units, and never negative.
/// A `count` of zero is treated as one column.
#[must_use]
pub fn column_width(available: f64, count: usize, spacing: f64) -> f64 {
    let count = count.max(1);
    #[allow(
        clippy::cast_precision_loss,
        reason = "Column counts are small; exact representation is not a concern"
    )]
    let n = count as f64;
    ((available - (n - 1.0) * spacing) / n).floor().max(0.0)
}

/// Running heights of the columns of one section.
///
/// Heights only ever grow while items are placed; [`ColumnHeights::advance`]
/// debug-asserts this.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnHeights {
    heights: Vec<f64>,
}

impl ColumnHeights {
    /// Creates `count` columns (at least one), all at height `top`.
    #[must_use]
    pub fn new(count: usize, top: f64) -> Self {
        Self {
            heights: vec![top; count.max(1)],
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Always `false`; there is at least one column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Current heights, indexed by column.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.heights
    }

    /// Height of `column`, or `None` if out of range.
    #[must_use]
    pub fn height(&self, column: usize) -> Option<f64> {
        self.heights.get(column).copied()
    }

    /// Index of the shortest column. Ties go to the lowest index.
    #[must_use]
    pub fn shortest(&self) -> usize {
        let mut index = 0;
        let mut shortest = f64::MAX;
        for (i, &h) in self.heights.iter().enumerate() {
            if h < shortest {
                shortest = h;
                index = i;
            }
        }
        index
    }

    /// Index of the tallest column. Ties go to the lowest index.
    #[must_use]
    pub fn longest(&self) -> usize {
        let mut index = 0;
        let mut longest = self.heights[0];
        for (i, &h) in self.heights.iter().enumerate().skip(1) {
            if h > longest {
                longest = h;
                index = i;
            }
        }
        index
    }

    /// Column for the `item`-th item of the section under `direction`.
    #[must_use]
    pub fn next_column(&self, item: usize, direction: Direction) -> usize {
        let count = self.heights.len();
        match direction {
            Direction::ShortestFirst => self.shortest(),
            Direction::LeftToRight => item % count,
            Direction::RightToLeft => count - 1 - item % count,
        }
    }

    /// Moves `column` down to `height`.
    pub fn advance(&mut self, column: usize, height: f64) {
        debug_assert!(
            height >= self.heights[column],
            "column heights must not decrease: column={column}, from={}, to={height}",
            self.heights[column]
        );
        self.heights[column] = height;
    }

    /// Sets every column to `height`.
    pub fn fill(&mut self, height: f64) {
        self.heights.fill(height);
    }
}
