// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration supplied by the host view.

use kurbo::Size;

use crate::{Direction, Flow};

/// Geometric configuration of a categorized view.
///
/// Changing any field through [`CategorizedView::set_params`](crate::CategorizedView::set_params)
/// bumps the layout generation and discards every cached rect.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    /// Size of the visible viewport in logical pixels.
    pub viewport: Size,
    /// Gap between items, and the outer margin around the content.
    pub spacing: f64,
    /// Fixed cell size, or `None` to size cells after the largest item size hint.
    pub grid_size: Option<Size>,
    /// List or grid arrangement.
    pub flow: Flow,
    /// Horizontal direction of grid columns.
    pub direction: Direction,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            viewport: Size::ZERO,
            spacing: 0.0,
            grid_size: None,
            flow: Flow::Grid,
            direction: Direction::LeftToRight,
        }
    }
}

/// Reasons a [`LayoutParams`] value cannot be used as-is.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParamsError {
    /// The viewport has a negative or non-finite dimension.
    #[error("viewport size must be finite and non-negative, got {width}x{height}")]
    InvalidViewport {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// Spacing is negative or non-finite.
    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f64),
    /// A fixed grid size has a non-positive or non-finite dimension.
    #[error("grid size must be finite and positive, got {width}x{height}")]
    InvalidGridSize {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
}

impl LayoutParams {
    /// Creates grid-flow parameters for the given viewport with no spacing and natural sizing.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Returns these parameters with the given spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Returns these parameters with a fixed cell size (`None` for natural sizing).
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: Option<Size>) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Returns these parameters with the given flow.
    #[must_use]
    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    /// Returns these parameters with the given direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Whether cells are sized after the largest item hint instead of a fixed grid size.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        self.grid_size.is_none()
    }

    /// Checks that every dimension is finite and in range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let Size { width, height } = self.viewport;
        if !non_negative(width) || !non_negative(height) {
            return Err(ParamsError::InvalidViewport { width, height });
        }
        if !non_negative(self.spacing) {
            return Err(ParamsError::InvalidSpacing(self.spacing));
        }
        if let Some(Size { width, height }) = self.grid_size
            && !(positive(width) && positive(height))
        {
            return Err(ParamsError::InvalidGridSize { width, height });
        }
        Ok(())
    }

    /// Returns a copy with out-of-range values clamped.
    ///
    /// Negative or non-finite viewport dimensions and spacing become `0`; non-positive grid
    /// dimensions become `1`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            viewport: Size::new(
                clamp_non_negative(self.viewport.width),
                clamp_non_negative(self.viewport.height),
            ),
            spacing: clamp_non_negative(self.spacing),
            grid_size: self
                .grid_size
                .map(|s| Size::new(clamp_at_least_one(s.width), clamp_at_least_one(s.height))),
            ..self
        }
    }
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

pub(crate) fn clamp_non_negative(v: f64) -> f64 {
    if positive(v) { v } else { 0.0 }
}

pub(crate) fn clamp_at_least_one(v: f64) -> f64 {
    if v.is_finite() && v >= 1.0 { v } else { 1.0 }
}
