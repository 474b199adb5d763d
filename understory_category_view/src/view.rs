// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view controller that ties layout, caching, queries, scrolling and interaction together.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;
use core::ops::Range;

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::query::partition_point;
use crate::{
    CursorAction, CursorState, Direction, DragTracker, Flow, ItemModel, ItemRenderer, ItemState,
    LayoutParams, LayoutState, ModelChange, RectCache, ScrollAlign, ScrollMetrics, ScrollState,
    SpatialIndex, content_extent,
};

/// Something under the pointer: an item row or a category header (by display position).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// An item.
    Item(usize),
    /// The header of the category at this display position.
    Header(usize),
}

/// Contiguous row intervals, as produced by [`CategorizedView::selection_ranges`].
pub type RowRanges = SmallVec<[Range<usize>; 4]>;

/// A categorized list or grid view over an external item model.
///
/// The view owns the layout state, the rect cache, the scroll position and the interaction
/// state (keyboard cursor, hover, press, drag). It never owns item data: hosts forward every
/// model change to [`handle_change`](Self::handle_change) together with the model and renderer.
///
/// Two coordinate spaces are used:
/// - *content* coordinates are un-scrolled; item rects, header rects, paint areas and
///   [`range_query`](Self::range_query) use them.
/// - *viewport* coordinates are relative to the top-left of the visible area; pointer
///   positions passed to [`index_at`](Self::index_at), [`category_at`](Self::category_at),
///   [`set_hover`](Self::set_hover) and [`set_pressed`](Self::set_pressed) use them.
#[derive(Clone, Debug)]
pub struct CategorizedView<K> {
    state: LayoutState<K>,
    cache: RectCache,
    scroll: ScrollState,
    cursor: CursorState,
    drag: DragTracker,
    hover: Option<HoverTarget>,
    pressed: Option<HoverTarget>,
}

impl<K: Clone + Eq + Hash + Debug> CategorizedView<K> {
    /// Creates an empty view.
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self {
            state: LayoutState::new(params),
            cache: RectCache::new(),
            scroll: ScrollState::new(),
            cursor: CursorState::new(),
            drag: DragTracker::new(),
            hover: None,
            pressed: None,
        }
    }

    /// The underlying layout state.
    #[must_use]
    pub const fn state(&self) -> &LayoutState<K> {
        &self.state
    }

    /// The rect cache.
    #[must_use]
    pub const fn cache(&self) -> &RectCache {
        &self.cache
    }

    /// The current (sanitized) layout parameters.
    #[must_use]
    pub const fn params(&self) -> &LayoutParams {
        self.state.params()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Whether the view has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn index(&mut self) -> SpatialIndex<'_, K> {
        SpatialIndex::new(&self.state, &mut self.cache)
    }

    // Configuration.

    /// Replaces the layout parameters. Returns `true` if anything changed.
    ///
    /// The scroll offset is re-clamped to the new content extent.
    pub fn set_params(&mut self, params: LayoutParams) -> bool {
        let changed = self.state.set_params(params);
        if changed {
            self.clamp_scroll();
        }
        changed
    }

    /// Sets the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) -> bool {
        let params = LayoutParams {
            viewport,
            ..*self.params()
        };
        self.set_params(params)
    }

    /// Sets the spacing between items.
    pub fn set_spacing(&mut self, spacing: f64) -> bool {
        let params = self.params().with_spacing(spacing);
        self.set_params(params)
    }

    /// Sets a fixed cell size, or `None` for natural sizing.
    pub fn set_grid_size(&mut self, grid_size: Option<Size>) -> bool {
        let params = self.params().with_grid_size(grid_size);
        self.set_params(params)
    }

    /// Switches between list and grid flow.
    pub fn set_flow(&mut self, flow: Flow) -> bool {
        let params = self.params().with_flow(flow);
        self.set_params(params)
    }

    /// Sets the horizontal layout direction.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        let params = self.params().with_direction(direction);
        self.set_params(params)
    }

    // Model changes.

    /// Rebuilds the partition and all size hints from `model`.
    ///
    /// The model's size hint wins; the renderer's is used for rows the model has no hint for.
    /// Hover, press and the keyboard cursor are cleared since their rows may have moved.
    pub fn rebuild<M, R>(&mut self, model: &M, renderer: &R)
    where
        M: ItemModel<Key = K>,
        R: ItemRenderer<K>,
    {
        self.state.rebuild(
            model.len(),
            |row| model.category_of(row),
            |key| renderer.header_height(key),
            |row| hint_of(model, renderer, row),
        );
        self.hover = None;
        self.pressed = None;
        self.cursor.reset();
        self.clamp_scroll();
    }

    /// Applies one change notification from the model.
    ///
    /// Structural changes rebuild everything. [`ModelChange::DataChanged`] refreshes the size
    /// hints of the affected rows and falls back to a rebuild if any of them changed category
    /// or the row count no longer matches.
    pub fn handle_change<M, R>(&mut self, change: &ModelChange, model: &M, renderer: &R)
    where
        M: ItemModel<Key = K>,
        R: ItemRenderer<K>,
    {
        tracing::debug!(?change, rows = model.len(), "handling model change");
        let ModelChange::DataChanged(rows) = change else {
            self.rebuild(model, renderer);
            return;
        };
        if model.len() != self.state.len() {
            tracing::warn!(
                model = model.len(),
                view = self.state.len(),
                "row count changed without a structural notification"
            );
            self.rebuild(model, renderer);
            return;
        }
        let rows = rows.start.min(model.len())..rows.end.min(model.len());
        let moved = rows.clone().any(|row| {
            self.state
                .partition()
                .category_of(row)
                .is_none_or(|key| *key != model.category_of(row))
        });
        if moved {
            self.rebuild(model, renderer);
            return;
        }
        let mut changed = false;
        for row in rows {
            changed |= self.state.set_size_hint(row, hint_of(model, renderer, row));
        }
        if changed {
            self.clamp_scroll();
        }
    }

    // Geometry.

    /// Un-scrolled rect of `row`, or `None` if `row` is outside the collection.
    pub fn item_rect(&mut self, row: usize) -> Option<Rect> {
        self.cache.get(&self.state, row)
    }

    /// Un-scrolled header rect of the category at display position `index`.
    pub fn category_rect(&mut self, index: usize) -> Option<Rect> {
        self.cache.get_category_at(&self.state, index)
    }

    /// Un-scrolled header rect of the (first) category with this key.
    pub fn category_rect_for_key(&mut self, key: &K) -> Option<Rect> {
        self.cache.get_category(&self.state, key)
    }

    /// Rect of `row` in viewport coordinates.
    pub fn visual_rect(&mut self, row: usize) -> Option<Rect> {
        let rect = self.item_rect(row)?;
        Some(self.scroll.to_viewport(rect))
    }

    /// The visible area in content coordinates.
    #[must_use]
    pub fn visible_area(&self) -> Rect {
        let viewport = Rect::from_origin_size(Point::ZERO, self.params().viewport);
        self.scroll.rect_to_content(viewport)
    }

    // Queries.

    /// Rows whose rect overlaps the content-space `rect`, in ascending order.
    pub fn range_query(&mut self, rect: Rect) -> Vec<usize> {
        self.index().range_query(rect)
    }

    /// Row at the content-space `point`.
    pub fn hit_test(&mut self, point: Point) -> Option<usize> {
        self.index().hit_test(point)
    }

    /// Row under the viewport-space `point`.
    pub fn index_at(&mut self, point: Point) -> Option<usize> {
        let point = self.scroll.to_content(point);
        self.hit_test(point)
    }

    /// Key of the category whose header is under the viewport-space `point`.
    pub fn category_at(&mut self, point: Point) -> Option<&K> {
        let point = self.scroll.to_content(point);
        let index = self.index().category_at(point)?;
        self.state.partition().category(index).map(|c| c.key())
    }

    /// Rows overlapping the visible area.
    pub fn visible_rows(&mut self) -> Vec<usize> {
        let area = self.visible_area();
        self.range_query(area)
    }

    /// Rows overlapping the content-space `rect`, grouped into contiguous ascending ranges.
    ///
    /// This is what a rubber-band selection hands to a selection model.
    pub fn selection_ranges(&mut self, rect: Rect) -> RowRanges {
        let mut ranges = RowRanges::new();
        self.index().visit_rect(rect, |row, _| match ranges.last_mut() {
            Some(last) if last.end == row => last.end = row + 1,
            _ => ranges.push(row..row + 1),
        });
        ranges
    }

    // Scrolling.

    /// Total content height.
    pub fn content_extent(&mut self) -> f64 {
        content_extent(&self.state, &mut self.cache)
    }

    /// Values for configuring a vertical scrollbar.
    pub fn scroll_metrics(&mut self) -> ScrollMetrics {
        let extent = self.content_extent();
        ScrollMetrics::new(extent, self.params().viewport.height)
    }

    fn max_offset(&mut self) -> f64 {
        self.scroll_metrics().max_offset
    }

    fn clamp_scroll(&mut self) {
        let max_offset = self.max_offset();
        self.scroll.clamp(max_offset);
    }

    /// Current vertical scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Sets the scroll offset, clamped to the content. Returns `true` if it changed.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let max_offset = self.max_offset();
        self.scroll.set_offset(offset, max_offset)
    }

    /// Scrolls by `delta`. Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        let max_offset = self.max_offset();
        self.scroll.scroll_by(delta, max_offset)
    }

    /// Scrolls `row` into view. Returns `true` if the offset changed.
    pub fn scroll_to_row(&mut self, row: usize, align: ScrollAlign) -> bool {
        let Some(rect) = self.item_rect(row) else {
            return false;
        };
        let max_offset = self.max_offset();
        let height = self.params().viewport.height;
        self.scroll.scroll_to_rect(rect, height, max_offset, align)
    }

    // Keyboard cursor.

    /// Row holding the keyboard cursor.
    #[must_use]
    pub const fn current_row(&self) -> Option<usize> {
        self.cursor.current()
    }

    /// Places the keyboard cursor.
    pub fn set_current_row(&mut self, row: Option<usize>) {
        self.cursor.set_current(row.filter(|row| *row < self.len()));
    }

    /// Moves the keyboard cursor and scrolls the new row into view.
    pub fn move_cursor(&mut self, action: CursorAction) -> Option<usize> {
        let row = self.cursor.apply(&self.state, action)?;
        self.scroll_to_row(row, ScrollAlign::Nearest);
        Some(row)
    }

    // Pointer interaction.

    fn target_at(&mut self, point: Point) -> Option<HoverTarget> {
        let point = self.scroll.to_content(point);
        let mut index = self.index();
        index
            .hit_test(point)
            .map(HoverTarget::Item)
            .or_else(|| index.category_at(point).map(HoverTarget::Header))
    }

    fn target_rect(&mut self, target: Option<HoverTarget>) -> Option<Rect> {
        match target? {
            HoverTarget::Item(row) => self.item_rect(row),
            HoverTarget::Header(index) => self.category_rect(index),
        }
    }

    fn retarget(&mut self, old: Option<HoverTarget>, new: Option<HoverTarget>) -> Option<Rect> {
        if old == new {
            return None;
        }
        match (self.target_rect(old), self.target_rect(new)) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        }
    }

    /// What the pointer is over.
    #[must_use]
    pub const fn hovered(&self) -> Option<HoverTarget> {
        self.hover
    }

    /// Updates the hovered target from a viewport-space pointer position (`None` when the
    /// pointer left the view).
    ///
    /// Returns the content-space region to repaint, or `None` if the target did not change.
    pub fn set_hover(&mut self, point: Option<Point>) -> Option<Rect> {
        let target = point.and_then(|p| self.target_at(p));
        let old = core::mem::replace(&mut self.hover, target);
        self.retarget(old, target)
    }

    /// What a held pointer button went down on.
    #[must_use]
    pub const fn pressed(&self) -> Option<HoverTarget> {
        self.pressed
    }

    /// Records a pointer press at a viewport-space position, or a release (`None`).
    ///
    /// Returns the content-space region to repaint.
    pub fn set_pressed(&mut self, point: Option<Point>) -> Option<Rect> {
        let target = point.and_then(|p| self.target_at(p));
        let old = core::mem::replace(&mut self.pressed, target);
        self.retarget(old, target)
    }

    fn state_of(&self, target: HoverTarget, selected: bool) -> ItemState {
        let mut state = ItemState::empty();
        state.set(ItemState::HOVERED, self.hover == Some(target));
        state.set(ItemState::PRESSED, self.pressed == Some(target));
        state.set(ItemState::SELECTED, selected);
        state
    }

    // Painting.

    /// Paints every header and item overlapping the content-space `area`.
    ///
    /// Headers are painted first, then items in row order. `is_selected` reports the host's
    /// selection for each painted row.
    pub fn paint<R, S>(&mut self, area: Rect, renderer: &mut R, mut is_selected: S)
    where
        R: ItemRenderer<K>,
        S: FnMut(usize) -> bool,
    {
        let area = area.abs();
        let count = self.state.partition().category_count();
        let first = partition_point(count, |index| {
            self.cache
                .get_category_at(&self.state, index)
                .is_some_and(|header| header.y1 <= area.y0)
        });
        for index in first..count {
            let Some(header) = self.cache.get_category_at(&self.state, index) else {
                break;
            };
            if header.y0 >= area.y1 {
                break;
            }
            if !crate::overlaps(&header, &area) {
                continue;
            }
            if let Some(category) = self.state.partition().category(index) {
                let state = self.state_of(HoverTarget::Header(index), false);
                renderer.paint_category_header(category.key(), header, state);
            }
        }

        let mut visible = Vec::new();
        self.index()
            .visit_rect(area, |row, rect| visible.push((row, rect)));
        tracing::trace!(rows = visible.len(), "painting items");
        for (row, rect) in visible {
            let state = self.state_of(HoverTarget::Item(row), is_selected(row));
            renderer.paint_item(row, rect, state);
        }
    }

    // Dragging.

    /// Moves the dragged `selected` rows to their cached rects offset by `delta`.
    ///
    /// Returns the content-space region to repaint for this frame.
    pub fn drag_to(&mut self, selected: &[usize], delta: Vec2) -> Option<Rect> {
        let clip = self.visible_area();
        let rects: Vec<Rect> = selected
            .iter()
            .filter_map(|row| self.cache.get(&self.state, *row))
            .map(|rect| rect + delta)
            .collect();
        self.drag.update(rects, clip)
    }

    /// Ends a drag, returning the last dragged region to repaint.
    pub fn end_drag(&mut self) -> Option<Rect> {
        self.drag.finish()
    }
}

fn hint_of<M, R>(model: &M, renderer: &R, row: usize) -> Size
where
    M: ItemModel,
    R: ItemRenderer<M::Key>,
{
    model
        .size_hint(row)
        .unwrap_or_else(|| renderer.size_hint(row))
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::{CategorizedView, HoverTarget};
    use crate::{
        CursorAction, Flow, ItemModel, ItemRenderer, ItemState, LayoutParams, ModelChange,
        ScrollAlign,
    };

    struct Photos {
        keys: Vec<&'static str>,
        hints: Vec<Option<Size>>,
    }

    impl Photos {
        fn new(keys: &[&'static str]) -> Self {
            Self {
                keys: keys.to_vec(),
                hints: vec![None; keys.len()],
            }
        }
    }

    impl ItemModel for Photos {
        type Key = &'static str;

        fn len(&self) -> usize {
            self.keys.len()
        }

        fn category_of(&self, row: usize) -> &'static str {
            self.keys[row]
        }

        fn size_hint(&self, row: usize) -> Option<Size> {
            self.hints[row]
        }
    }

    #[derive(Default)]
    struct Recorder {
        items: Vec<(usize, Rect, ItemState)>,
        headers: Vec<(&'static str, Rect, ItemState)>,
    }

    impl ItemRenderer<&'static str> for Recorder {
        fn size_hint(&self, _row: usize) -> Size {
            Size::new(40.0, 40.0)
        }

        fn header_height(&self, _key: &&'static str) -> f64 {
            20.0
        }

        fn paint_item(&mut self, row: usize, rect: Rect, state: ItemState) {
            self.items.push((row, rect, state));
        }

        fn paint_category_header(&mut self, key: &&'static str, rect: Rect, state: ItemState) {
            self.headers.push((*key, rect, state));
        }
    }

    const KEYS: [&str; 10] = ["a", "a", "a", "a", "b", "b", "b", "b", "b", "b"];

    // Three 40x40 columns with spacing 5; "a" at 5..115, "b" header at 115..135.
    fn view(model: &Photos) -> CategorizedView<&'static str> {
        let params = LayoutParams::new(Size::new(150.0, 100.0))
            .with_spacing(5.0)
            .with_grid_size(Some(Size::new(40.0, 40.0)));
        let mut view = CategorizedView::new(params);
        view.rebuild(model, &Recorder::default());
        view
    }

    #[test]
    fn range_query_edges() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        assert!(
            view.range_query(Rect::new(0.0, 1_000.0, 150.0, 1_100.0))
                .is_empty()
        );
        let all: Vec<usize> = (0..10).collect();
        assert_eq!(view.range_query(Rect::new(0.0, 0.0, 150.0, 1_000.0)), all);
    }

    #[test]
    fn queries_do_not_depend_on_scrolling() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        let query = Rect::new(0.0, 50.0, 150.0, 200.0);
        let before = view.range_query(query);
        let rect = view.item_rect(7);
        assert!(view.scroll_by(60.0));
        assert_eq!(view.scroll_offset(), 60.0);
        assert_eq!(view.range_query(query), before);
        assert_eq!(view.item_rect(7), rect);
        assert_eq!(
            view.visual_rect(7),
            rect.map(|r| r - Vec2::new(0.0, 60.0))
        );
    }

    #[test]
    fn viewport_lookups_apply_the_scroll_offset() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        view.set_scroll_offset(100.0);
        // Content (10, 150) is item 4.
        assert_eq!(view.index_at(Point::new(10.0, 50.0)), Some(4));
        // Content (10, 120) is the "b" header.
        assert_eq!(view.category_at(Point::new(10.0, 20.0)), Some(&"b"));
        assert_eq!(view.visible_rows(), [3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn scroll_metrics_follow_content() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        // Last row starts at 185 (second visual row of "b").
        let metrics = view.scroll_metrics();
        assert_eq!(metrics.content_extent, 230.0);
        assert_eq!(metrics.max_offset, 130.0);
        assert_eq!(metrics.single_step, 10.0);
        assert!(!view.set_scroll_offset(-5.0));
        assert!(view.set_scroll_offset(1_000.0));
        assert_eq!(view.scroll_offset(), 130.0);

        // A taller viewport clamps the offset back.
        view.set_viewport(Size::new(150.0, 200.0));
        assert_eq!(view.scroll_offset(), 30.0);
    }

    #[test]
    fn scroll_to_row_aligns() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        assert!(view.scroll_to_row(9, ScrollAlign::Start));
        assert_eq!(view.scroll_offset(), 130.0);
        assert!(view.scroll_to_row(0, ScrollAlign::Nearest));
        assert_eq!(view.scroll_offset(), 35.0);
        assert!(!view.scroll_to_row(42, ScrollAlign::Start));
    }

    #[test]
    fn data_changes_refresh_hints_or_rebuild() {
        let mut model = Photos::new(&KEYS);
        let params = LayoutParams::new(Size::new(150.0, 100.0)).with_spacing(5.0);
        let mut view = CategorizedView::new(params);
        let renderer = Recorder::default();
        view.rebuild(&model, &renderer);
        let generation = view.state().generation();
        let before = view.item_rect(9);

        // Unchanged data is a no-op.
        view.handle_change(&ModelChange::DataChanged(0..10), &model, &renderer);
        assert_eq!(view.state().generation(), generation);

        // A taller hint grows the natural cell, moving later rows.
        model.hints[2] = Some(Size::new(40.0, 60.0));
        view.handle_change(&ModelChange::DataChanged(2..3), &model, &renderer);
        assert_ne!(view.state().generation(), generation);
        assert_ne!(view.item_rect(9), before);
        assert_eq!(view.state().metrics().natural_size(), Size::new(40.0, 60.0));

        // A row changing category rebuilds the partition.
        model.keys[4] = "a";
        view.handle_change(&ModelChange::DataChanged(4..5), &model, &renderer);
        assert_eq!(view.state().partition().category_of(4), Some(&"a"));
        assert_eq!(
            view.state().partition().category(0).map(|c| c.len()),
            Some(5)
        );
    }

    #[test]
    fn structural_changes_rebuild_and_reset_interaction() {
        let mut model = Photos::new(&KEYS);
        let mut view = view(&model);
        let renderer = Recorder::default();
        view.set_current_row(Some(3));
        view.set_hover(Some(Point::new(10.0, 40.0)));
        assert_eq!(view.hovered(), Some(HoverTarget::Item(0)));

        model.keys.truncate(5);
        model.hints.truncate(5);
        view.handle_change(&ModelChange::RowsRemoved(5..10), &model, &renderer);
        assert_eq!(view.len(), 5);
        assert_eq!(view.current_row(), None);
        assert_eq!(view.hovered(), None);
        assert_eq!(view.item_rect(5), None);
    }

    #[test]
    fn selection_ranges_are_contiguous_runs() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        // Middle column of both categories: rows 1, 5 and 8 (and nothing else).
        let ranges = view.selection_ranges(Rect::new(55.0, 0.0, 85.0, 1_000.0));
        assert_eq!(ranges.as_slice(), [1..2, 5..6, 8..9]);
        // First visual row of "b" plus the second one's first item.
        let ranges = view.selection_ranges(Rect::new(0.0, 150.0, 20.0, 200.0));
        assert_eq!(ranges.as_slice(), [4..5, 7..8]);
        let ranges = view.selection_ranges(Rect::new(0.0, 150.0, 150.0, 160.0));
        assert_eq!(ranges.as_slice(), [4..7]);
    }

    #[test]
    fn hover_returns_damage() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        let item0 = view.item_rect(0);
        let header = view.category_rect(0);

        assert_eq!(view.set_hover(Some(Point::new(10.0, 40.0))), item0);
        assert_eq!(view.set_hover(Some(Point::new(12.0, 41.0))), None);
        let damage = view.set_hover(Some(Point::new(10.0, 10.0)));
        assert_eq!(damage, item0.zip(header).map(|(a, b)| a.union(b)));
        assert_eq!(view.hovered(), Some(HoverTarget::Header(0)));
        assert_eq!(view.set_hover(None), header);
    }

    #[test]
    fn paint_reports_states() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        let mut recorder = Recorder::default();
        view.set_hover(Some(Point::new(10.0, 40.0)));
        view.set_pressed(Some(Point::new(55.0, 40.0)));
        view.paint(Rect::new(0.0, 0.0, 150.0, 100.0), &mut recorder, |row| row == 2);

        assert_eq!(recorder.headers.len(), 1);
        assert_eq!(recorder.headers[0].0, "a");
        let rows: Vec<usize> = recorder.items.iter().map(|(row, ..)| *row).collect();
        assert_eq!(rows, [0, 1, 2, 3]);
        assert_eq!(recorder.items[0].2, ItemState::HOVERED);
        assert_eq!(recorder.items[1].2, ItemState::PRESSED);
        assert_eq!(recorder.items[2].2, ItemState::SELECTED);
        assert_eq!(recorder.items[3].2, ItemState::empty());

        // Only the "b" block.
        let mut recorder = Recorder::default();
        view.paint(Rect::new(0.0, 120.0, 150.0, 300.0), &mut recorder, |_| false);
        assert_eq!(recorder.headers.len(), 1);
        assert_eq!(recorder.headers[0].0, "b");
        assert_eq!(recorder.items.len(), 6);
    }

    #[test]
    fn cursor_moves_scroll_into_view() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        assert_eq!(view.move_cursor(CursorAction::End), Some(9));
        // Row 9 spans 185..225; its bottom lands on the viewport's bottom edge.
        assert_eq!(view.scroll_offset(), 125.0);
        assert_eq!(view.move_cursor(CursorAction::Home), Some(0));
        assert_eq!(view.scroll_offset(), 35.0);
        view.set_current_row(Some(99));
        assert_eq!(view.current_row(), None);
    }

    #[test]
    fn dragging_repaints_old_and_new_positions() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        let first = view.drag_to(&[0], Vec2::new(10.0, 0.0));
        assert_eq!(first, Some(Rect::new(15.0, 35.0, 55.0, 75.0)));
        let second = view.drag_to(&[0], Vec2::new(20.0, 10.0));
        assert_eq!(second, Some(Rect::new(15.0, 35.0, 65.0, 85.0)));
        // Dragged past the bottom of the viewport: clipped at y = 100.
        let third = view.drag_to(&[0], Vec2::new(20.0, 50.0));
        assert_eq!(third, Some(Rect::new(25.0, 45.0, 65.0, 100.0)));
        assert_eq!(view.end_drag(), Some(Rect::new(25.0, 85.0, 65.0, 100.0)));
        assert_eq!(view.end_drag(), None);
    }

    #[test]
    fn list_flow_stretches_items() {
        let model = Photos::new(&KEYS);
        let mut view = view(&model);
        assert!(view.set_flow(Flow::List));
        assert!(!view.set_flow(Flow::List));
        assert_eq!(view.item_rect(0), Some(Rect::new(5.0, 35.0, 35.0, 75.0)));
    }
}
