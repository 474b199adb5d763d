// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized item and header rects, scoped to one layout generation.

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::LayoutState;

/// Lazily filled cache of un-scrolled rects.
///
/// Entries belong to the generation they were computed in. Every read first compares that
/// generation against the [`LayoutState`] it is given and drops all entries on mismatch, so a
/// rect from an older layout can never be observed. Scroll offsets are applied by callers at
/// read time and never stored, so entries survive pure scrolling.
#[derive(Clone, Debug, Default)]
pub struct RectCache {
    generation: Option<u64>,
    rows: HashMap<usize, Rect>,
    // Keyed by category position in display order.
    categories: HashMap<usize, Rect>,
}

impl RectCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every entry.
    pub fn invalidate_all(&mut self) {
        if !self.rows.is_empty() || !self.categories.is_empty() {
            tracing::trace!(
                rows = self.rows.len(),
                categories = self.categories.len(),
                "rect cache invalidated"
            );
        }
        self.rows.clear();
        self.categories.clear();
        self.generation = None;
    }

    /// Generation the current entries belong to, if any.
    #[must_use]
    pub const fn generation(&self) -> Option<u64> {
        self.generation
    }

    /// Number of cached item rects.
    #[must_use]
    pub fn cached_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of cached header rects.
    #[must_use]
    pub fn cached_categories(&self) -> usize {
        self.categories.len()
    }

    fn sync<K>(&mut self, state: &LayoutState<K>) {
        let current = state.generation();
        if self.generation != Some(current) {
            self.invalidate_all();
            self.generation = Some(current);
        }
    }

    /// Rect of `row`, computed on a miss. `None` if `row` is outside the collection.
    pub fn get<K: Clone + Eq + Hash + Debug>(
        &mut self,
        state: &LayoutState<K>,
        row: usize,
    ) -> Option<Rect> {
        self.sync(state);
        if let Some(rect) = self.rows.get(&row) {
            return Some(*rect);
        }
        let rect = state.item_rect(row)?;
        self.rows.insert(row, rect);
        Some(rect)
    }

    /// Header rect of the category at display position `index`, computed on a miss.
    pub fn get_category_at<K: Clone + Eq + Hash + Debug>(
        &mut self,
        state: &LayoutState<K>,
        index: usize,
    ) -> Option<Rect> {
        self.sync(state);
        if let Some(rect) = self.categories.get(&index) {
            return Some(*rect);
        }
        let rect = state.category_rect(index)?;
        self.categories.insert(index, rect);
        Some(rect)
    }

    /// Header rect of the (first) category with this key.
    pub fn get_category<K: Clone + Eq + Hash + Debug>(
        &mut self,
        state: &LayoutState<K>,
        key: &K,
    ) -> Option<Rect> {
        let index = state.partition().index_of_key(key)?;
        self.get_category_at(state, index)
    }
}
