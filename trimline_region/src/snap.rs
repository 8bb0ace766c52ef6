// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A row grid shared by every region on a layer.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use tracing::debug;

use crate::error::ConfigurationError;
use crate::geometry::RowRounding;
use crate::surface::{NodeKind, Surface};

/// A snap controller shared by several regions.
///
/// The editor is single-threaded, so plain reference counting is enough.
pub type SharedSnap<N> = Rc<RefCell<SnapController<N>>>;

/// Snaps regions onto rows of equal height and shows where a dragged region will land.
///
/// One controller serves a whole grid. The drop indicator belongs to the controller, not to
/// any region: if two regions were dragged at once it would follow whichever moved last.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapController<N> {
    row_height: f64,
    rounding: RowRounding,
    indicator: N,
    indicator_row: Option<i64>,
}

impl<N: Copy + Eq + Debug> SnapController<N> {
    /// Create a grid with `row_height` tall rows and add its hidden indicator to `surface`.
    pub fn new<S>(
        surface: &mut S,
        row_height: f64,
        rounding: RowRounding,
    ) -> Result<Self, ConfigurationError>
    where
        S: Surface<Node = N>,
    {
        if !row_height.is_finite() || row_height <= 0.0 {
            return Err(ConfigurationError::InvalidRowHeight(row_height));
        }
        let indicator = surface.create(NodeKind::Indicator, Rect::ZERO);
        surface.set_visible(indicator, false);
        Ok(Self {
            row_height,
            rounding,
            indicator,
            indicator_row: None,
        })
    }

    /// Wrap this controller for sharing between regions.
    #[must_use]
    pub fn into_shared(self) -> SharedSnap<N> {
        Rc::new(RefCell::new(self))
    }

    /// Height of every row.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Rounding policy used for both the indicator and the release snap.
    #[must_use]
    pub fn rounding(&self) -> RowRounding {
        self.rounding
    }

    /// The indicator node.
    #[must_use]
    pub fn indicator(&self) -> N {
        self.indicator
    }

    /// Row the indicator is showing, or `None` while hidden.
    #[must_use]
    pub fn indicator_row(&self) -> Option<i64> {
        self.indicator_row
    }

    /// Row a region whose top edge is at `y` belongs to.
    #[must_use]
    pub fn row_of(&self, y: f64) -> i64 {
        self.rounding.row_index(y, self.row_height)
    }

    /// Top of `row`.
    #[must_use]
    pub fn row_top(&self, row: i64) -> f64 {
        row as f64 * self.row_height
    }

    /// Snapped top edge for a region whose top edge is at `y`.
    #[must_use]
    pub fn snap_y(&self, y: f64) -> f64 {
        self.row_top(self.row_of(y))
    }

    /// Snapped top edge that still keeps the region above `max_y`.
    ///
    /// Only [`RowRounding::Nearest`] can round past the bottom of the layer; in that case the
    /// row above is used instead.
    #[must_use]
    pub fn snap_y_within(&self, y: f64, max_y: f64) -> f64 {
        let snapped = self.snap_y(y);
        if snapped > max_y {
            (snapped - self.row_height).max(0.0)
        } else {
            snapped
        }
    }

    /// Rectangle covering `row` across a layer `surface_width` wide.
    #[must_use]
    pub fn indicator_rect(&self, row: i64, surface_width: f64) -> Rect {
        Rect::from_origin_size(
            Point::new(0.0, self.row_top(row)),
            Size::new(surface_width, self.row_height),
        )
    }

    /// Show the indicator over the row a region at `current_y` would snap to.
    pub fn show_indicator<S>(&mut self, surface: &mut S, current_y: f64) -> i64
    where
        S: Surface<Node = N>,
    {
        let row = self.row_of(current_y);
        let rect = self.indicator_rect(row, surface.extent().width);
        surface.set_bounds(self.indicator, rect);
        surface.set_visible(self.indicator, true);
        surface.request_batched_redraw();
        if self.indicator_row != Some(row) {
            debug!(row, "snap indicator moved");
        }
        self.indicator_row = Some(row);
        row
    }

    /// Hide the indicator.
    pub fn hide_indicator<S>(&mut self, surface: &mut S)
    where
        S: Surface<Node = N>,
    {
        surface.set_visible(self.indicator, false);
        surface.request_batched_redraw();
        self.indicator_row = None;
    }
}
