// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public enums and flags shared across the view: flow, direction, item state, and model changes.

use core::ops::Range;

/// How items are arranged inside a category block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow {
    /// One item per visual row, stretched to the viewport width.
    List,
    /// Items wrap left to right (or right to left) into as many columns as fit.
    #[default]
    Grid,
}

/// Horizontal layout direction used by [`Flow::Grid`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Column 0 is at the left edge.
    #[default]
    LeftToRight,
    /// Column 0 is at the right edge.
    RightToLeft,
}

bitflags::bitflags! {
    /// Interaction state handed to the renderer alongside each painted rect.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemState: u8 {
        /// The pointer is over this item or header.
        const HOVERED  = 0b0000_0001;
        /// The host reports this item as selected.
        const SELECTED = 0b0000_0010;
        /// A pointer button went down on this item or header and is still held.
        const PRESSED  = 0b0000_0100;
    }
}

/// A change notification forwarded from the item model.
///
/// Ranges are row ranges in the model's coordinates *after* the change for insertions and
/// data changes, and *before* the change for removals. Structural variants rebuild the whole
/// category partition, so the ranges only matter for [`ModelChange::DataChanged`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelChange {
    /// The model was replaced or reset.
    Reset,
    /// Rows were inserted.
    RowsInserted(Range<usize>),
    /// Rows were removed.
    RowsRemoved(Range<usize>),
    /// Sorting or categorization changed without a change in row count.
    LayoutChanged,
    /// Item data (and possibly size hints or category keys) changed for these rows.
    DataChanged(Range<usize>),
}

impl ModelChange {
    /// Whether this change can move rows between categories or change the row count.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        !matches!(self, Self::DataChanged(_))
    }
}
