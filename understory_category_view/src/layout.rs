// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout state owned by a view, and the pure rect computations over it.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Rect, Size};

use crate::{CategoryPartition, Direction, Flow, ItemMetrics, LayoutParams};

/// Everything item and header geometry depends on, plus the generation counter.
///
/// All mutation goes through [`set_params`](Self::set_params), [`rebuild`](Self::rebuild),
/// [`set_size_hint`](Self::set_size_hint) and [`clear`](Self::clear); each of them bumps the
/// generation when geometry may have changed. The rect methods are pure functions of this
/// state: identical state always yields bit-identical rects.
///
/// Rect computation is O(categories before the row) per call; read rects through a
/// [`RectCache`](crate::RectCache) instead of calling these in a paint loop.
#[derive(Clone, Debug)]
pub struct LayoutState<K> {
    params: LayoutParams,
    partition: CategoryPartition<K>,
    metrics: ItemMetrics,
    generation: u64,
}

impl<K> LayoutState<K> {
    /// Creates state for an empty collection.
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params: checked(params),
            partition: CategoryPartition::default(),
            metrics: ItemMetrics::new(),
            generation: 0,
        }
    }

    /// The current (sanitized) parameters.
    #[must_use]
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// The current category partition.
    #[must_use]
    pub const fn partition(&self) -> &CategoryPartition<K> {
        &self.partition
    }

    /// The current size hints.
    #[must_use]
    pub const fn metrics(&self) -> &ItemMetrics {
        &self.metrics
    }

    /// Layout generation; changes whenever any rect may have changed.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl<K: Clone + Eq + Hash + Debug> LayoutState<K> {
    /// Number of rows laid out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partition.len()
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }

    /// Replaces the parameters. Returns `true` (and bumps the generation) if they changed.
    ///
    /// Invalid values are logged and clamped rather than rejected.
    pub fn set_params(&mut self, params: LayoutParams) -> bool {
        let params = checked(params);
        if params == self.params {
            return false;
        }
        tracing::debug!(?params, "layout parameters changed");
        self.params = params;
        self.bump();
        true
    }

    /// Rebuilds partition and hints from the model in one pass each.
    pub fn rebuild<F, H, S>(&mut self, len: usize, key_of: F, header_height: H, hint_of: S)
    where
        F: FnMut(usize) -> K,
        H: FnMut(&K) -> f64,
        S: FnMut(usize) -> Size,
    {
        self.partition.rebuild(len, key_of, header_height);
        self.metrics.rebuild(len, hint_of);
        self.bump();
    }

    /// Updates one row's size hint. Returns `true` (and bumps the generation) if it changed.
    pub fn set_size_hint(&mut self, row: usize, hint: Size) -> bool {
        let changed = self.metrics.set_hint(row, hint);
        if changed {
            self.bump();
        }
        changed
    }

    /// Drops every row and category.
    pub fn clear(&mut self) {
        self.partition = CategoryPartition::new();
        self.metrics = ItemMetrics::new();
        self.bump();
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(generation = self.generation, "layout generation bumped");
    }

    /// Columns per visual row for the current parameters; always at least 1.
    #[must_use]
    pub fn columns_per_row(&self) -> usize {
        self.metrics.columns_per_row(&self.params)
    }

    /// Cell size for the current parameters; at least 1×1.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        self.metrics.cell_size(&self.params)
    }

    /// Top edge of the category at `index`, i.e. of its header.
    ///
    /// This is the top margin plus the full height of every preceding category block.
    #[must_use]
    pub fn category_top(&self, index: usize) -> Option<f64> {
        let preceding = self.partition.categories().get(..index)?;
        let spacing = self.params.spacing;
        let columns = self.columns_per_row();
        let stride = self.metrics.row_stride(&self.params);
        let top = preceding.iter().fold(spacing, |top, category| {
            let rows = category.len().div_ceil(columns);
            top + category.header_height() + 2.0 * spacing + rows as f64 * stride
        });
        Some(top)
    }

    /// Un-scrolled rect of the header of the category at `index`.
    #[must_use]
    pub fn category_rect(&self, index: usize) -> Option<Rect> {
        let category = self.partition.category(index)?;
        let top = self.category_top(index)?;
        let spacing = self.params.spacing;
        let width = (self.params.viewport.width - 2.0 * spacing).max(0.0);
        Some(Rect::new(
            spacing,
            top,
            spacing + width,
            top + category.header_height(),
        ))
    }

    /// Un-scrolled rect of `row`, or `None` if `row` is outside the collection.
    #[must_use]
    pub fn item_rect(&self, row: usize) -> Option<Rect> {
        let index = self.partition.category_index_of(row)?;
        let offset = self.partition.offset_within_category(row)?;
        let category = self.partition.category(index)?;
        let params = &self.params;
        let spacing = params.spacing;

        let columns = self.columns_per_row();
        let column = offset % columns;
        let visual_row = offset / columns;

        let top = self.category_top(index)?
            + category.header_height()
            + 2.0 * spacing
            + visual_row as f64 * self.metrics.row_stride(params);

        let cell = self.cell_size();
        let item_width = self.metrics.item_width(params);
        let hint = self.metrics.hint(row);
        let height = hint.height.min(cell.height);

        let (left, width) = match params.flow {
            Flow::List => (spacing, item_width),
            Flow::Grid => {
                let advance = column as f64 * (item_width + spacing);
                let left = match params.direction {
                    Direction::LeftToRight => spacing + advance,
                    Direction::RightToLeft => {
                        params.viewport.width - spacing - advance - item_width
                    }
                };
                // Fixed cells center narrower items horizontally.
                if !params.is_natural() && hint.width < item_width {
                    (left + (item_width - hint.width) / 2.0, hint.width)
                } else {
                    (left, item_width)
                }
            }
        };

        Some(Rect::new(left, top, left + width, top + height))
    }
}

fn checked(params: LayoutParams) -> LayoutParams {
    if let Err(err) = params.validate() {
        tracing::warn!(%err, "sanitizing layout parameters");
    }
    params.sanitized()
}
