// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic photo collections for benchmarking the category view.

use kurbo::{Rect, Size};
use understory_category_view::{
    CategorizedView, Flow, ItemModel, ItemRenderer, ItemState, LayoutParams,
};

/// A collection of `len` photos in albums of `per_album` photos each.
#[derive(Clone, Copy, Debug)]
pub struct Album {
    /// Number of photos.
    pub len: usize,
    /// Photos per album; the last album may be shorter.
    pub per_album: usize,
}

impl ItemModel for Album {
    type Key = usize;

    fn len(&self) -> usize {
        self.len
    }

    fn category_of(&self, row: usize) -> usize {
        row / self.per_album.max(1)
    }

    fn size_hint(&self, row: usize) -> Option<Size> {
        // Alternate portrait and landscape thumbnails.
        Some(if row % 2 == 0 {
            Size::new(96.0, 64.0)
        } else {
            Size::new(64.0, 96.0)
        })
    }
}

/// A renderer that only measures.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer {
    /// Number of items painted so far.
    pub painted: usize,
}

impl ItemRenderer<usize> for NullRenderer {
    fn size_hint(&self, _row: usize) -> Size {
        Size::new(96.0, 96.0)
    }

    fn header_height(&self, _key: &usize) -> f64 {
        24.0
    }

    fn paint_item(&mut self, _row: usize, _rect: Rect, _state: ItemState) {
        self.painted += 1;
    }

    fn paint_category_header(&mut self, _key: &usize, _rect: Rect, _state: ItemState) {}
}

/// A populated view over `album` in a 1280×800 viewport.
#[must_use]
pub fn view(album: &Album, flow: Flow, grid_size: Option<Size>) -> CategorizedView<usize> {
    let params = LayoutParams::new(Size::new(1280.0, 800.0))
        .with_spacing(6.0)
        .with_grid_size(grid_size)
        .with_flow(flow);
    let mut view = CategorizedView::new(params);
    view.rebuild(album, &NullRenderer::default());
    view
}
