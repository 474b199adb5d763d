// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits: the item model that owns the data and the renderer that paints it.

use kurbo::{Rect, Size};

use crate::ItemState;

/// A flat, display-ordered sequence of items, each belonging to a category.
///
/// The engine never owns item data; it asks the model for the row count, each row's category
/// key and, optionally, a size hint. Rows with equal keys are expected to be adjacent (the
/// model is sorted by category), but this is not required for correctness.
pub trait ItemModel {
    /// Category key. Equality decides where one category ends and the next begins.
    type Key: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Number of rows.
    fn len(&self) -> usize;

    /// Returns `true` if there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Category key of `row`, for `row` in `0..len()`.
    fn category_of(&self, row: usize) -> Self::Key;

    /// Preferred size of `row`, if the model knows it.
    ///
    /// When this returns `None` the renderer's [`ItemRenderer::size_hint`] is used instead.
    fn size_hint(&self, row: usize) -> Option<Size> {
        let _ = row;
        None
    }
}

/// Paints items and category headers, and measures them.
///
/// All rects handed to the renderer are un-scrolled content coordinates; the renderer applies
/// the scroll translation itself.
pub trait ItemRenderer<K> {
    /// Preferred size of `row`.
    fn size_hint(&self, row: usize) -> Size;

    /// Height of the header drawn above the category `key`.
    fn header_height(&self, key: &K) -> f64;

    /// Paints one item.
    fn paint_item(&mut self, row: usize, rect: Rect, state: ItemState);

    /// Paints one category header.
    fn paint_category_header(&mut self, key: &K, rect: Rect, state: ItemState);
}
