// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-linear rect and point queries over the laid-out rows.
//!
//! Row tops never decrease in row order, and every row occupies a slot of one cell height
//! starting at its top. Slot bottoms are therefore monotonic too, which makes "first row not
//! entirely above `y`" a lower-bound search. From there a forward scan enumerates candidates
//! and stops at the first row starting at or below the query's bottom edge.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect};

use crate::{LayoutState, RectCache};

/// Whether two rects share interior area.
///
/// Edges that merely touch do not count, and a rect with zero area overlaps nothing.
#[must_use]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.area() > 0.0
        && b.area() > 0.0
        && a.x0 < b.x1
        && b.x0 < a.x1
        && a.y0 < b.y1
        && b.y0 < a.y1
}

/// First index in `0..len` for which `pred` is `false`, assuming `pred` is `true` on a
/// (possibly empty) prefix and `false` afterwards.
pub(crate) fn partition_point<F>(len: usize, mut pred: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Read-only queries over a [`LayoutState`], reading rects through a [`RectCache`].
///
/// All coordinates are un-scrolled content coordinates, the same space the rects are
/// painted in.
#[derive(Debug)]
pub struct SpatialIndex<'a, K> {
    state: &'a LayoutState<K>,
    cache: &'a mut RectCache,
}

impl<'a, K: Clone + Eq + Hash + Debug> SpatialIndex<'a, K> {
    /// Creates an index over `state`, filling `cache` as it goes.
    pub fn new(state: &'a LayoutState<K>, cache: &'a mut RectCache) -> Self {
        Self { state, cache }
    }

    fn rect(&mut self, row: usize) -> Rect {
        // Only called for rows in `0..len`.
        self.cache.get(self.state, row).unwrap_or(Rect::ZERO)
    }

    /// First row whose slot reaches below `y`, or the row count if there is none.
    #[must_use]
    pub fn first_row_reaching(&mut self, y: f64) -> usize {
        let cell_height = self.state.cell_size().height;
        let len = self.state.len();
        partition_point(len, |row| self.rect(row).y0 + cell_height <= y)
    }

    /// Calls `f` for every row whose rect overlaps `rect`, in row order.
    pub fn visit_rect<F: FnMut(usize, Rect)>(&mut self, rect: Rect, mut f: F) {
        let query = rect.abs();
        if query.area() <= 0.0 || self.state.is_empty() {
            return;
        }
        let len = self.state.len();
        let mut row = self.first_row_reaching(query.y0);
        while row < len {
            let candidate = self.rect(row);
            if candidate.y0 >= query.y1 {
                break;
            }
            if overlaps(&candidate, &query) {
                f(row, candidate);
            }
            row += 1;
        }
    }

    /// Rows whose rect overlaps `rect`, in ascending order.
    ///
    /// `rect` may be given with any corner order.
    #[must_use]
    pub fn range_query(&mut self, rect: Rect) -> Vec<usize> {
        let mut rows = Vec::new();
        self.visit_rect(rect, |row, _| rows.push(row));
        rows
    }

    /// The row whose rect contains `point`, if any.
    #[must_use]
    pub fn hit_test(&mut self, point: Point) -> Option<usize> {
        let len = self.state.len();
        let mut row = self.first_row_reaching(point.y);
        while row < len {
            let candidate = self.rect(row);
            if candidate.y0 > point.y {
                break;
            }
            if candidate.contains(point) {
                return Some(row);
            }
            row += 1;
        }
        None
    }

    /// Display position of the category whose header contains `point`, if any.
    #[must_use]
    pub fn category_at(&mut self, point: Point) -> Option<usize> {
        let count = self.state.partition().category_count();
        let after = partition_point(count, |index| {
            self.cache
                .get_category_at(self.state, index)
                .is_some_and(|header| header.y0 <= point.y)
        });
        let index = after.checked_sub(1)?;
        let header = self.cache.get_category_at(self.state, index)?;
        header.contains(point).then_some(index)
    }
}
