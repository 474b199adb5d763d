// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_category_view --heading-base-level=0

//! Understory Category View: categorized item layout and spatial queries.
//!
//! This crate lays out a large, display-ordered item collection that is grouped into
//! categories (for example photos grouped by album or by date), each category drawn as a
//! header followed by its items in a list or a wrapping grid. It computes item and header
//! rects on demand, caches them per layout generation, and answers "which items intersect
//! this rect" in `O(log n + k)` by exploiting the fact that item tops never decrease in row
//! order.
//!
//! The building blocks, leaves first:
//!
//! - [`CategoryPartition`]: groups rows into contiguous categories with O(1) lookups.
//! - [`ItemMetrics`]: size hints, the natural cell size, and columns per row.
//! - [`LayoutState`]: parameters, partition and hints plus the generation counter, with the
//!   pure rect computations over them.
//! - [`RectCache`]: memoized rects that are dropped wholesale whenever the generation changes.
//! - [`SpatialIndex`]: lower-bound search plus a bounded forward scan for rect and point
//!   queries.
//! - [`content_extent`] and [`ScrollMetrics`]: scrollbar range and steps.
//! - [`DragTracker`]: repaint regions for a dragged selection.
//!
//! [`CategorizedView`] ties these together with scrolling, keyboard navigation, hover and
//! painting. It never owns item data: an [`ItemModel`] provides rows and category keys, and an
//! [`ItemRenderer`] measures and paints.
//!
//! All rects are un-scrolled content coordinates in logical pixels. The scroll offset is
//! applied by the host (or by the viewport-space helpers on [`CategorizedView`]) at read time,
//! so cached rects survive scrolling.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` in `kurbo`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`LayoutParams`], [`Flow`] and [`Direction`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_category_view::{
//!     CategorizedView, ItemModel, ItemRenderer, ItemState, LayoutParams,
//! };
//!
//! struct Albums(Vec<&'static str>);
//!
//! impl ItemModel for Albums {
//!     type Key = &'static str;
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn category_of(&self, row: usize) -> &'static str {
//!         self.0[row]
//!     }
//! }
//!
//! struct Thumbnails;
//!
//! impl ItemRenderer<&'static str> for Thumbnails {
//!     fn size_hint(&self, _row: usize) -> Size {
//!         Size::new(40.0, 40.0)
//!     }
//!     fn header_height(&self, _key: &&'static str) -> f64 {
//!         20.0
//!     }
//!     fn paint_item(&mut self, _row: usize, _rect: Rect, _state: ItemState) {}
//!     fn paint_category_header(&mut self, _key: &&'static str, _rect: Rect, _state: ItemState) {}
//! }
//!
//! let model = Albums(vec!["beach", "beach", "beach", "beach", "city", "city"]);
//! let params = LayoutParams::new(Size::new(150.0, 400.0))
//!     .with_spacing(5.0)
//!     .with_grid_size(Some(Size::new(40.0, 40.0)));
//! let mut view = CategorizedView::new(params);
//! view.rebuild(&model, &Thumbnails);
//!
//! // Three columns fit; "beach" wraps onto a second visual row.
//! assert_eq!(view.state().columns_per_row(), 3);
//! assert_eq!(view.item_rect(3), Some(Rect::new(5.0, 75.0, 45.0, 115.0)));
//!
//! // "city" starts below both of "beach"'s rows and its own header.
//! assert_eq!(view.item_rect(4), Some(Rect::new(5.0, 145.0, 45.0, 185.0)));
//!
//! // A rubber band across the second visual row of "beach".
//! assert_eq!(view.range_query(Rect::new(0.0, 80.0, 150.0, 90.0)), [3]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod drag;
mod extent;
mod layout;
mod metrics;
mod model;
mod navigation;
mod params;
mod partition;
mod query;
mod scroll;
mod types;
mod view;

pub use cache::RectCache;
pub use drag::DragTracker;
pub use extent::{ScrollMetrics, content_extent};
pub use layout::LayoutState;
pub use metrics::ItemMetrics;
pub use model::{ItemModel, ItemRenderer};
pub use navigation::{CursorAction, CursorState};
pub use params::{LayoutParams, ParamsError};
pub use partition::{Category, CategoryPartition};
pub use query::{SpatialIndex, overlaps};
pub use scroll::{ScrollAlign, ScrollState};
pub use types::{Direction, Flow, ItemState, ModelChange};
pub use view::{CategorizedView, HoverTarget, RowRanges};
