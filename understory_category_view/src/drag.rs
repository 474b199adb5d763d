// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repaint regions for a dragged selection.

use kurbo::Rect;

fn union(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Tracks the region covered by dragged items between frames.
///
/// Each [`update`](Self::update) returns the union of the previous and current frame's
/// dragged regions, which is the smallest single rect that repaints both the vacated and the
/// newly covered area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    previous: Option<Rect>,
}

impl DragTracker {
    /// Creates a tracker with no drag in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Whether a previous frame's region is being tracked.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.previous.is_some()
    }

    /// Region covered by the last frame, if any.
    #[must_use]
    pub const fn region(&self) -> Option<Rect> {
        self.previous
    }

    /// Records a new frame of already-translated item rects, clipped to `clip`.
    ///
    /// Returns the repaint region, or `None` if neither frame covered anything visible.
    pub fn update<I>(&mut self, rects: I, clip: Rect) -> Option<Rect>
    where
        I: IntoIterator<Item = Rect>,
    {
        let current = rects
            .into_iter()
            .map(|rect| rect.intersect(clip))
            .filter(|rect| rect.area() > 0.0)
            .reduce(|a, b| a.union(b));
        let damage = union(self.previous, current);
        self.previous = current;
        damage
    }

    /// Ends the drag, returning the last frame's region so the host can repaint it.
    pub fn finish(&mut self) -> Option<Rect> {
        self.previous.take()
    }
}
