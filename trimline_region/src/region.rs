// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A movable rectangle showing a clipped asset.

use kurbo::{Point, Rect, Size};

use crate::clip::{ClipChange, ClipWindow};
use crate::geometry::{Asset, clamp_floor};

/// A draggable region on a rendering layer.
///
/// `position` is the top-left corner of the *visible* part, in layer coordinates. The
/// region's width always equals its clip window's width, and its height is the asset's
/// natural height. The asset itself is laid out so the clipped window lands exactly on
/// the region: its origin on the layer is [`content_origin`](Self::content_origin).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DraggableRegion {
    position: Point,
    size: Size,
    clip: ClipWindow,
}

impl DraggableRegion {
    /// Place a region showing `clip` with its top-left corner at `position`.
    #[must_use]
    pub fn new(position: Point, clip: ClipWindow) -> Self {
        Self {
            position,
            size: Size::new(clip.width(), clip.asset().height()),
            clip,
        }
    }

    /// Top-left corner of the visible part.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Visible size. The width tracks the clip window.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The crop currently applied to the asset.
    #[must_use]
    pub fn clip(&self) -> &ClipWindow {
        &self.clip
    }

    /// The asset shown by this region.
    #[must_use]
    pub fn asset(&self) -> Asset {
        self.clip.asset()
    }

    /// Visible bounds on the layer.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Where the asset's own origin sits on the layer.
    #[must_use]
    pub fn content_origin(&self) -> Point {
        Point::new(self.position.x - self.clip.offset_x(), self.position.y)
    }

    /// Where the whole, unclipped asset would sit on the layer.
    ///
    /// The right handle can never be pulled past this rectangle's right edge.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_origin(), self.asset().size())
    }

    /// Bound a whole-region drag to the layer's visible extent.
    ///
    /// This is a pure function of the candidate, the layer extent and the region's size.
    /// It does not consult any snap grid. A region larger than the layer pins to the
    /// origin on that axis.
    #[must_use]
    pub fn on_body_drag(&self, candidate: Point, extent: Size) -> Point {
        Point::new(
            clamp_floor(candidate.x, 0.0, extent.width - self.size.width),
            clamp_floor(candidate.y, 0.0, extent.height - self.size.height),
        )
    }

    /// Move the region without any bounds check.
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Resize from the right edge; the left edge stays put.
    pub(crate) fn resize_from_right(&mut self, requested_width: f64) -> f64 {
        let width = self.clip.resize_from_right(requested_width);
        self.size.width = width;
        width
    }

    /// Resize from the left edge; the content and the right edge stay put.
    pub(crate) fn resize_from_left(&mut self, delta: f64) -> ClipChange {
        let origin_x = self.content_origin().x;
        let change = self.clip.resize_from_left(delta);
        self.position.x = origin_x + change.offset_x;
        self.size.width = change.width;
        change
    }
}
