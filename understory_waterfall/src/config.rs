// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform layout configuration.

use kurbo::Insets;

use crate::{Direction, Spacing};

/// Layout parameters applied identically to every section.
///
/// Hosts that need per-section values call
/// [`WaterfallLayout::prepare`](crate::WaterfallLayout::prepare) with their own
/// closures; this type backs
/// [`WaterfallLayout::prepare_with_config`](crate::WaterfallLayout::prepare_with_config).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterfallConfig {
    /// Number of columns per section.
    pub column_count: usize,
    /// Column and item gaps.
    pub spacing: Spacing,
    /// Insets around each section's items (header and footer are outside).
    pub insets: Insets,
    /// Height of each section header; `0` emits no header.
    pub header_height: f64,
    /// Height of each section footer; `0` emits no footer.
    pub footer_height: f64,
    /// Column selection policy.
    pub direction: Direction,
}

impl Default for WaterfallConfig {
    fn default() -> Self {
        Self {
            column_count: 2,
            spacing: Spacing::uniform(10.0),
            insets: Insets::ZERO,
            header_height: 0.0,
            footer_height: 0.0,
            direction: Direction::ShortestFirst,
        }
    }
}

impl WaterfallConfig {
    /// Returns the default configuration: two columns, 10-unit gaps, no insets,
    /// no headers or footers, shortest-first placement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column count.
    #[must_use]
    pub fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    /// Sets column and item gaps.
    #[must_use]
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets section insets.
    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets header and footer heights.
    #[must_use]
    pub fn with_header_footer(mut self, header_height: f64, footer_height: f64) -> Self {
        self.header_height = header_height;
        self.footer_height = footer_height;
        self
    }

    /// Sets the column selection policy.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::WaterfallConfig;
    use crate::{Direction, Spacing};

    #[test]
    fn defaults_and_builders() {
        let config = WaterfallConfig::new();
        assert_eq!(config.column_count, 2);
        assert_eq!(config.spacing, Spacing::new(10.0, 10.0));
        assert_eq!(config.direction, Direction::ShortestFirst);

        let config = config
            .with_column_count(3)
            .with_spacing(Spacing::uniform(0.0))
            .with_insets(Insets::uniform(4.0))
            .with_header_footer(20.0, 15.0)
            .with_direction(Direction::RightToLeft);
        assert_eq!(config.column_count, 3);
        assert_eq!(config.insets, Insets::uniform(4.0));
        assert_eq!(config.header_height, 20.0);
        assert_eq!(config.footer_height, 15.0);
        assert_eq!(config.direction, Direction::RightToLeft);
    }
}
