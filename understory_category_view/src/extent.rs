// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrollable content extent and scrollbar metrics.

use core::fmt::Debug;
use core::hash::Hash;

use crate::{LayoutState, RectCache};

/// Total height of the laid-out content.
///
/// This is the bottom of the last row's slot plus the trailing margin, or `0` for an empty
/// collection.
pub fn content_extent<K: Clone + Eq + Hash + Debug>(
    state: &LayoutState<K>,
    cache: &mut RectCache,
) -> f64 {
    let Some(last) = state.partition().last_row() else {
        return 0.0;
    };
    let Some(rect) = cache.get(state, last) else {
        return 0.0;
    };
    rect.y0 + state.cell_size().height + state.params().spacing
}

/// Values a host needs to configure a vertical scrollbar.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Total height of the content.
    pub content_extent: f64,
    /// Largest valid scroll offset.
    pub max_offset: f64,
    /// Distance of one arrow-key or wheel step.
    pub single_step: f64,
    /// Distance of one page step.
    pub page_step: f64,
}

impl ScrollMetrics {
    /// Metrics for `content_extent` shown through a viewport of `viewport_height`.
    #[must_use]
    pub fn new(content_extent: f64, viewport_height: f64) -> Self {
        Self {
            content_extent,
            max_offset: (content_extent - viewport_height).max(0.0),
            single_step: viewport_height / 10.0,
            page_step: viewport_height,
        }
    }
}
