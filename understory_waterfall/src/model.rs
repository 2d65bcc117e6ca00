// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item source trait and a simple table-backed implementation.

use alloc::vec::Vec;

use kurbo::Size;

/// Sections of items with intrinsic size hints.
///
/// This is what a [`StaggeredGrid`](crate::StaggeredGrid) lays out. Hosts
/// typically implement it over their own data, or feed measured sizes into a
/// [`SizeTable`].
pub trait WaterfallModel {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`. Out-of-range sections have no items.
    fn item_count(&self, section: usize) -> usize;

    /// Intrinsic size of item `index` in `section`.
    ///
    /// Returning [`Size::ZERO`] (or any size that is not positive in both
    /// dimensions) lays the item out with zero height.
    fn item_size(&self, section: usize, index: usize) -> Size;
}

/// A [`WaterfallModel`] storing one size per item.
///
/// Sizes can be refined as measurements come in; growing a section fills the
/// new slots with [`Size::ZERO`] until they are set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeTable {
    sections: Vec<Vec<Size>>,
}

impl SizeTable {
    /// Creates an empty table with no sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-section table.
    #[must_use]
    pub fn from_sizes(sizes: impl IntoIterator<Item = Size>) -> Self {
        let mut table = Self::new();
        table.push_section(sizes);
        table
    }

    /// Appends a section and returns its index.
    pub fn push_section(&mut self, sizes: impl IntoIterator<Item = Size>) -> usize {
        self.sections.push(sizes.into_iter().collect());
        self.sections.len() - 1
    }

    /// Ensures `section` exists and holds `len` items.
    ///
    /// Missing sections are created empty; new items are zero-sized.
    pub fn set_item_count(&mut self, section: usize, len: usize) {
        if section >= self.sections.len() {
            self.sections.resize_with(section + 1, Vec::new);
        }
        self.sections[section].resize(len, Size::ZERO);
    }

    /// Sets the size of one item, growing the table if needed.
    pub fn set_item_size(&mut self, section: usize, index: usize, size: Size) {
        let len = self.item_count(section).max(index + 1);
        self.set_item_count(section, len);
        self.sections[section][index] = size;
    }

    /// Replaces the sizes of `section` from a sequence of items and a size function.
    pub fn rebuild_section<T, I>(&mut self, section: usize, items: I, size_fn: &dyn Fn(&T) -> Size)
    where
        I: IntoIterator<Item = T>,
    {
        self.set_item_count(section, 0);
        let sizes = &mut self.sections[section];
        sizes.extend(items.into_iter().map(|item| size_fn(&item)));
    }

    /// Removes every section.
    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

impl WaterfallModel for SizeTable {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    fn item_size(&self, section: usize, index: usize) -> Size {
        self.sections
            .get(section)
            .and_then(|sizes| sizes.get(index))
            .copied()
            .unwrap_or(Size::ZERO)
    }
}
