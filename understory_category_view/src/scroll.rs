// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical scroll position and the content/viewport coordinate mapping.

use kurbo::{Point, Rect, Vec2};

/// Alignment mode when scrolling a specific row into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top edge of the row with the top of the viewport.
    Start,
    /// Center the row within the viewport.
    Center,
    /// Align the bottom edge of the row with the bottom of the viewport.
    End,
    /// Move just enough to make the row fully visible, preferring the
    /// smallest change from the current scroll offset.
    #[default]
    Nearest,
}

/// Vertical scroll offset of a view.
///
/// The offset is always within `0..=max_offset` for the `max_offset` passed to the last
/// mutating call. Rects and caches never include it: hosts translate with
/// [`to_viewport`](Self::to_viewport) and [`to_content`](Self::to_content) at read time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
}

impl ScrollState {
    /// Creates a scroll state at the top of the content.
    #[must_use]
    pub const fn new() -> Self {
        Self { offset: 0.0 }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Sets the scroll offset, clamped to `0..=max_offset`. Returns `true` if it changed.
    pub fn set_offset(&mut self, offset: f64, max_offset: f64) -> bool {
        let max_offset = if max_offset.is_finite() {
            max_offset.max(0.0)
        } else {
            0.0
        };
        let offset = if offset.is_nan() {
            0.0
        } else {
            offset.clamp(0.0, max_offset)
        };
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        true
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64, max_offset: f64) -> bool {
        self.set_offset(self.offset + delta, max_offset)
    }

    /// Re-applies the clamp after the content or viewport shrank.
    pub fn clamp(&mut self, max_offset: f64) -> bool {
        self.set_offset(self.offset, max_offset)
    }

    /// Scrolls so that the content-space `rect` is brought into view using the given alignment.
    ///
    /// - [`ScrollAlign::Start`] aligns the top of the rect with the top of the viewport.
    /// - [`ScrollAlign::End`] aligns the bottom of the rect with the bottom of the viewport.
    /// - [`ScrollAlign::Center`] centers the rect within the viewport.
    /// - [`ScrollAlign::Nearest`] moves just enough to make the rect fully visible, preferring
    ///   the smallest change from the current scroll offset.
    pub fn scroll_to_rect(
        &mut self,
        rect: Rect,
        viewport_height: f64,
        max_offset: f64,
        align: ScrollAlign,
    ) -> bool {
        let item_start = rect.y0;
        let item_end = rect.y1;
        let new_offset = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => item_end - viewport_height,
            ScrollAlign::Center => (item_start + item_end) / 2.0 - viewport_height / 2.0,
            ScrollAlign::Nearest => {
                let viewport_start = self.offset;
                let viewport_end = self.offset + viewport_height;
                if item_start >= viewport_start && item_end <= viewport_end {
                    viewport_start
                } else if item_start < viewport_start || rect.height() > viewport_height {
                    item_start
                } else {
                    item_end - viewport_height
                }
            }
        };
        self.set_offset(new_offset, max_offset)
    }

    /// Translation from content to viewport coordinates.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(0.0, -self.offset)
    }

    /// Maps a content-space rect into the viewport.
    #[must_use]
    pub fn to_viewport(&self, rect: Rect) -> Rect {
        rect + self.translation()
    }

    /// Maps a viewport point into content space.
    #[must_use]
    pub fn to_content(&self, point: Point) -> Point {
        point - self.translation()
    }

    /// Maps a viewport rect into content space.
    #[must_use]
    pub fn rect_to_content(&self, rect: Rect) -> Rect {
        rect - self.translation()
    }
}
