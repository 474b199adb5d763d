// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping of display-ordered rows into contiguous categories.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;
use core::ops::Range;

use hashbrown::HashMap;

/// One contiguous run of rows sharing a category key.
#[derive(Clone, Debug, PartialEq)]
pub struct Category<K> {
    key: K,
    rows: Range<usize>,
    header_height: f64,
}

impl<K> Category<K> {
    /// The category key.
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Rows belonging to this category, in display order.
    #[must_use]
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Number of rows in this category. Never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.end - self.rows.start
    }

    /// Always `false`: a category exists only because a row opened it.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.start == self.rows.end
    }

    /// Height of this category's header, captured when the partition was built.
    #[must_use]
    pub const fn header_height(&self) -> f64 {
        self.header_height
    }
}

/// Rows partitioned into ordered categories, with O(1) per-row lookups.
///
/// The partition is derived state: it is rebuilt wholesale from the model on every structural
/// change and never edited piecemeal.
#[derive(Clone, Debug)]
pub struct CategoryPartition<K> {
    categories: Vec<Category<K>>,
    // Per row: index into `categories`.
    row_category: Vec<usize>,
    // Per row: 0-based position inside its category.
    row_offset: Vec<usize>,
    // First run for each key.
    first_run: HashMap<K, usize>,
}

impl<K> Default for CategoryPartition<K> {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            row_category: Vec::new(),
            row_offset: Vec::new(),
            first_run: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash + Debug> CategoryPartition<K> {
    /// Creates an empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the partition in one pass over `0..len`.
    ///
    /// A new category opens whenever a row's key differs from the previous row's key.
    /// `header_height` is consulted once per category; negative or non-finite heights are
    /// treated as `0`.
    ///
    /// If a key reappears after a different key (an unsorted model), the reappearance opens a
    /// separate run so that rows stay contiguous. Key lookups resolve to the first run.
    pub fn rebuild<F, H>(&mut self, len: usize, mut key_of: F, mut header_height: H)
    where
        F: FnMut(usize) -> K,
        H: FnMut(&K) -> f64,
    {
        self.categories.clear();
        self.row_category.clear();
        self.row_offset.clear();
        self.first_run.clear();
        self.row_category.reserve(len);
        self.row_offset.reserve(len);

        let mut repeated_runs = 0_usize;
        for row in 0..len {
            let key = key_of(row);
            let opens_run = self.categories.last().is_none_or(|c| c.key != key);
            if opens_run {
                let index = self.categories.len();
                if self.first_run.contains_key(&key) {
                    repeated_runs += 1;
                } else {
                    self.first_run.insert(key.clone(), index);
                }
                let height = crate::params::clamp_non_negative(header_height(&key));
                self.categories.push(Category {
                    key,
                    rows: row..row,
                    header_height: height,
                });
            }
            // A run was pushed above if none existed.
            let index = self.categories.len() - 1;
            let category = &mut self.categories[index];
            self.row_offset.push(category.len());
            category.rows.end = row + 1;
            self.row_category.push(index);
        }

        if repeated_runs > 0 {
            tracing::warn!(
                repeated_runs,
                "category keys are not contiguous; repeated keys open separate runs"
            );
        }
        tracing::debug!(
            rows = len,
            categories = self.categories.len(),
            "rebuilt category partition"
        );
    }

    /// Number of partitioned rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.row_category.len()
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_category.is_empty()
    }

    /// Number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category<K>] {
        &self.categories
    }

    /// The category at position `index` in display order.
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&Category<K>> {
        self.categories.get(index)
    }

    /// Position (in display order) of the category containing `row`.
    #[must_use]
    pub fn category_index_of(&self, row: usize) -> Option<usize> {
        self.row_category.get(row).copied()
    }

    /// Key of the category containing `row`.
    #[must_use]
    pub fn category_of(&self, row: usize) -> Option<&K> {
        let index = self.category_index_of(row)?;
        Some(&self.categories[index].key)
    }

    /// 0-based position of `row` inside its category.
    #[must_use]
    pub fn offset_within_category(&self, row: usize) -> Option<usize> {
        self.row_offset.get(row).copied()
    }

    /// Position of the first category with this key.
    #[must_use]
    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.first_run.get(key).copied()
    }

    /// Number of categories displayed before the one with this key.
    #[must_use]
    pub fn categories_before(&self, key: &K) -> Option<usize> {
        self.index_of_key(key)
    }

    /// The last row of the last category, if any.
    #[must_use]
    pub fn last_row(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
}
