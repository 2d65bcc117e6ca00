// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: element identity, layout attributes, placement direction, spacing.

use core::str::FromStr;

use kurbo::Rect;

use crate::LayoutError;

/// Identity of a laid-out element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// Section header, spanning the full viewport width.
    Header {
        /// Section index.
        section: usize,
    },
    /// Section footer, spanning the full viewport width.
    Footer {
        /// Section index.
        section: usize,
    },
    /// An item placed in one of the section's columns.
    Item {
        /// Section index.
        section: usize,
        /// Index of the item within its section.
        index: usize,
    },
}

impl Element {
    /// Section this element belongs to.
    #[must_use]
    pub const fn section(self) -> usize {
        match self {
            Self::Header { section } | Self::Footer { section } | Self::Item { section, .. } => {
                section
            }
        }
    }

    /// Returns `true` for items (as opposed to headers and footers).
    #[must_use]
    pub const fn is_item(self) -> bool {
        matches!(self, Self::Item { .. })
    }
}

/// Computed placement of a single element.
///
/// Attributes are plain values; a [`WaterfallLayout`](crate::WaterfallLayout)
/// replaces all of them on every `prepare`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutAttributes {
    /// What was placed.
    pub element: Element,
    /// Where it was placed, in content coordinates.
    pub frame: Rect,
}

/// How the next item picks its column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The column with the smallest running height; ties go to the lowest index.
    #[default]
    ShortestFirst,
    /// Round-robin from the leftmost column.
    LeftToRight,
    /// Round-robin from the rightmost column.
    RightToLeft,
}

impl TryFrom<u8> for Direction {
    type Error = LayoutError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::ShortestFirst),
            1 => Ok(Self::LeftToRight),
            2 => Ok(Self::RightToLeft),
            other => Err(LayoutError::InvalidDirection(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ShortestFirst" | "shortest-first" | "shortest_first" => Ok(Self::ShortestFirst),
            "LeftToRight" | "left-to-right" | "left_to_right" => Ok(Self::LeftToRight),
            "RightToLeft" | "right-to-left" | "right_to_left" => Ok(Self::RightToLeft),
            _ => Err(LayoutError::UnknownDirection),
        }
    }
}

/// Spacing inside a section.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Horizontal gap between adjacent columns.
    pub column: f64,
    /// Vertical gap between consecutive items in a column.
    pub item: f64,
}

impl Spacing {
    /// Creates a spacing from column and item gaps.
    #[must_use]
    pub const fn new(column: f64, item: f64) -> Self {
        Self { column, item }
    }

    /// Same gap in both directions.
    #[must_use]
    pub const fn uniform(gap: f64) -> Self {
        Self {
            column: gap,
            item: gap,
        }
    }

    /// Negative gaps are clamped to zero.
    pub(crate) fn clamped(self) -> Self {
        Self {
            column: self.column.max(0.0),
            item: self.item.max(0.0),
        }
    }
}
