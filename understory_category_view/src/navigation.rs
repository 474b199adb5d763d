// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard cursor movement over the category grid.

use core::fmt::Debug;
use core::hash::Hash;

use crate::{Direction, LayoutState};

/// Keyboard cursor movement intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CursorAction {
    /// One visual row up, possibly into the previous category's last visual row.
    Up,
    /// One visual row down, possibly into the next category's first visual row.
    Down,
    /// One column towards the left edge, within the visual row.
    Left,
    /// One column towards the right edge, within the visual row.
    Right,
    /// The first row.
    Home,
    /// The last row.
    End,
}

/// Current row plus the column vertical movement tries to stay in.
///
/// Moving up or down through a short visual row (the last one of a category) lands on that
/// row's last item, but the starting column is remembered and used again on the next
/// vertical move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    current: Option<usize>,
    sticky_column: Option<usize>,
}

impl CursorState {
    /// Creates a cursor with no current row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            sticky_column: None,
        }
    }

    /// The current row, if any.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// Moves the cursor to `row` (or clears it) and forgets the sticky column.
    pub fn set_current(&mut self, row: Option<usize>) {
        self.current = row;
        self.sticky_column = None;
    }

    /// Clears the cursor.
    pub fn reset(&mut self) {
        self.set_current(None);
    }

    /// Applies `action` and returns the new current row.
    ///
    /// With no current row (or a stale one past the end), every action except
    /// [`CursorAction::End`] moves to the first row. Moves that would leave the collection
    /// keep the current row.
    pub fn apply<K: Clone + Eq + Hash + Debug>(
        &mut self,
        state: &LayoutState<K>,
        action: CursorAction,
    ) -> Option<usize> {
        let Some(last) = state.partition().last_row() else {
            self.reset();
            return None;
        };
        let Some(row) = self.current.filter(|row| *row <= last) else {
            let target = if action == CursorAction::End { last } else { 0 };
            self.set_current(Some(target));
            return self.current;
        };

        let columns = state.columns_per_row();
        let column = state
            .partition()
            .offset_within_category(row)
            .map_or(0, |offset| offset % columns);

        let rtl = state.params().direction == Direction::RightToLeft;
        let target = match (action, rtl) {
            (CursorAction::Home, _) => Some(0),
            (CursorAction::End, _) => Some(last),
            (CursorAction::Up, _) => {
                let sticky = self.sticky_column.unwrap_or(column).min(columns - 1);
                self.sticky_column = Some(sticky);
                vertical(state, row, sticky, false)
            }
            (CursorAction::Down, _) => {
                let sticky = self.sticky_column.unwrap_or(column).min(columns - 1);
                self.sticky_column = Some(sticky);
                vertical(state, row, sticky, true)
            }
            (CursorAction::Left, false) | (CursorAction::Right, true) => {
                row.checked_sub(1).filter(|_| column > 0)
            }
            (CursorAction::Left, true) | (CursorAction::Right, false) => {
                let next_in_category = state.partition().category_index_of(row + 1)
                    == state.partition().category_index_of(row);
                (column + 1 < columns && row < last && next_in_category).then_some(row + 1)
            }
        };

        if let Some(target) = target {
            self.current = Some(target);
            if !matches!(action, CursorAction::Up | CursorAction::Down) {
                self.sticky_column = None;
            }
        }
        self.current
    }
}

/// Row one visual row above or below `row`, aiming for `column`.
fn vertical<K: Clone + Eq + Hash + Debug>(
    state: &LayoutState<K>,
    row: usize,
    column: usize,
    down: bool,
) -> Option<usize> {
    let partition = state.partition();
    let columns = state.columns_per_row();
    let index = partition.category_index_of(row)?;
    let category = partition.category(index)?;
    let offset = partition.offset_within_category(row)?;
    let visual_row = offset / columns;

    let (target, rows) = if down {
        if (visual_row + 1) * columns < category.len() {
            ((visual_row + 1) * columns + column, category.rows())
        } else {
            let next = partition.category(index + 1)?;
            (column, next.rows())
        }
    } else if visual_row > 0 {
        ((visual_row - 1) * columns + column, category.rows())
    } else {
        let previous = partition.category(index.checked_sub(1)?)?;
        let last_visual_row = (previous.len() - 1) / columns;
        (last_visual_row * columns + column, previous.rows())
    };
    Some((rows.start + target).min(rows.end - 1))
}
