// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row size hints and the cell metrics derived from them.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Size;

use crate::params::{clamp_at_least_one, clamp_non_negative};
use crate::{Flow, LayoutParams};

/// Counted multiset of non-negative finite values with O(log n) max.
///
/// Keys are the IEEE-754 bit patterns; for non-negative finite `f64` the bit order matches
/// the numeric order.
#[derive(Clone, Debug, Default)]
struct MaxTracker {
    counts: BTreeMap<u64, usize>,
}

impl MaxTracker {
    fn insert(&mut self, v: f64) {
        *self.counts.entry(v.to_bits()).or_insert(0) += 1;
    }

    fn remove(&mut self, v: f64) {
        let bits = v.to_bits();
        if let Some(count) = self.counts.get_mut(&bits) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&bits);
            }
        }
    }

    fn max(&self) -> f64 {
        self.counts
            .last_key_value()
            .map_or(0.0, |(bits, _)| f64::from_bits(*bits))
    }

    fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Size hints for every row plus the running natural (largest) item size.
///
/// The natural size is exact: it follows the current hints, so it shrinks again when the
/// largest item shrinks or goes away.
#[derive(Clone, Debug, Default)]
pub struct ItemMetrics {
    hints: Vec<Size>,
    widths: MaxTracker,
    heights: MaxTracker,
}

impl ItemMetrics {
    /// Creates metrics for an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all hints with `hint_of(row)` for `row` in `0..len`.
    pub fn rebuild<F>(&mut self, len: usize, mut hint_of: F)
    where
        F: FnMut(usize) -> Size,
    {
        self.hints.clear();
        self.widths.clear();
        self.heights.clear();
        self.hints.reserve(len);
        for row in 0..len {
            let hint = sanitize(hint_of(row));
            self.widths.insert(hint.width);
            self.heights.insert(hint.height);
            self.hints.push(hint);
        }
    }

    /// Updates one row's hint. Returns `true` if the stored hint changed.
    ///
    /// Rows outside the collection are ignored.
    pub fn set_hint(&mut self, row: usize, hint: Size) -> bool {
        let hint = sanitize(hint);
        let Some(slot) = self.hints.get_mut(row) else {
            return false;
        };
        if *slot == hint {
            return false;
        }
        self.widths.remove(slot.width);
        self.heights.remove(slot.height);
        self.widths.insert(hint.width);
        self.heights.insert(hint.height);
        *slot = hint;
        true
    }

    /// The stored hint for `row`, or zero for rows outside the collection.
    #[must_use]
    pub fn hint(&self, row: usize) -> Size {
        self.hints.get(row).copied().unwrap_or(Size::ZERO)
    }

    /// Number of rows with hints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Whether no hints are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    /// Largest width and largest height over all current hints.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(self.widths.max(), self.heights.max())
    }

    /// Size of one layout cell: the fixed grid size, or the natural size, clamped to at least
    /// 1×1.
    #[must_use]
    pub fn cell_size(&self, params: &LayoutParams) -> Size {
        let size = params.grid_size.unwrap_or_else(|| self.natural_size());
        Size::new(clamp_at_least_one(size.width), clamp_at_least_one(size.height))
    }

    /// Width of an item slot.
    ///
    /// In grid flow this is the cell width. In list flow items span the viewport (natural
    /// sizing) or the grid width, less the spacing on both sides.
    #[must_use]
    pub fn item_width(&self, params: &LayoutParams) -> f64 {
        match params.flow {
            Flow::Grid => self.cell_size(params).width,
            Flow::List => {
                let span = params.grid_size.map_or(params.viewport.width, |g| g.width);
                clamp_at_least_one(span - 2.0 * params.spacing)
            }
        }
    }

    /// Number of columns per visual row; always at least 1.
    #[must_use]
    pub fn columns_per_row(&self, params: &LayoutParams) -> usize {
        match params.flow {
            Flow::List => 1,
            Flow::Grid => {
                let available = params.viewport.width - params.spacing;
                let stride = (self.item_width(params) + params.spacing).max(1.0);
                if available.is_nan() || available < stride {
                    return 1;
                }
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "The quotient is finite and at least 1 here; the cast floors it and saturates."
                )]
                let columns = (available / stride) as usize;
                columns.max(1)
            }
        }
    }

    /// Vertical distance between consecutive visual rows.
    ///
    /// Natural sizing adds the spacing between rows; a fixed grid size already includes it.
    #[must_use]
    pub fn row_stride(&self, params: &LayoutParams) -> f64 {
        let cell = self.cell_size(params);
        if params.is_natural() {
            cell.height + params.spacing
        } else {
            cell.height
        }
    }
}

fn sanitize(hint: Size) -> Size {
    Size::new(clamp_non_negative(hint.width), clamp_non_negative(hint.height))
}
