// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge handles that resize a region by cropping its content.
//!
//! ## Layout
//!
//! Both handles live in layer coordinates and sit inside the region:
//!
//! ```text
//!  left.x                         right.x
//!  v                              v
//!  [##]--------------------------[##]
//!  ^ region left edge                ^ region right edge
//! ```
//!
//! The left handle's origin is the region's left edge; the right handle's origin is one
//! handle width inside the right edge. The distance between the two origins is therefore
//! `region.width - handle_width`, and keeping it at least `min_anchor_gap` keeps the region
//! at least [`Limits::min_region_width`] wide.
//!
//! Handles hold nothing but their position. The authoritative state is the region's
//! [`ClipWindow`](crate::ClipWindow) and size; [`AnchorPair::layout`] re-derives the handles
//! from it.

use kurbo::{Point, Rect, Size};
use tracing::debug;

use crate::error::ConfigurationError;
use crate::geometry::Limits;
use crate::region::DraggableRegion;

/// Which edge a handle controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// Position and hit box of one handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Handle {
    position: Point,
    size: Size,
}

impl Handle {
    fn new(width: f64) -> Self {
        Self {
            position: Point::ZERO,
            size: Size::new(width, width),
        }
    }

    /// Top-left corner of the hit box, in layer coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Square hit box.
    #[must_use]
    pub fn hit_box(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// The left and right resize handles of one region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorPair {
    left: Handle,
    right: Handle,
    limits: Limits,
}

impl AnchorPair {
    /// Create handles glued to `region`'s edges.
    ///
    /// Fails if the limits are degenerate or the handles would start closer than the
    /// anchor gap, i.e. the region is narrower than [`Limits::min_region_width`].
    pub fn new(region: &DraggableRegion, limits: Limits) -> Result<Self, ConfigurationError> {
        limits.validate()?;
        let width = region.size().width;
        if width < limits.min_region_width() {
            return Err(ConfigurationError::RegionTooNarrow {
                width,
                min_width: limits.min_region_width(),
            });
        }
        let mut pair = Self {
            left: Handle::new(limits.handle_width),
            right: Handle::new(limits.handle_width),
            limits,
        };
        pair.layout(region);
        Ok(pair)
    }

    /// The left handle.
    #[must_use]
    pub fn left(&self) -> &Handle {
        &self.left
    }

    /// The right handle.
    #[must_use]
    pub fn right(&self) -> &Handle {
        &self.right
    }

    /// The handle on `side`.
    #[must_use]
    pub fn handle(&self, side: HandleSide) -> &Handle {
        match side {
            HandleSide::Left => &self.left,
            HandleSide::Right => &self.right,
        }
    }

    /// Limits these handles enforce.
    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Horizontal distance between the two handle origins.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.right.position.x - self.left.position.x
    }

    /// Glue both handles to `region`'s current edges, locked to its top.
    pub fn layout(&mut self, region: &DraggableRegion) {
        let bounds = region.bounds();
        self.left.position = Point::new(bounds.x0, bounds.y0);
        self.right.position = Point::new(bounds.x1 - self.limits.handle_width, bounds.y0);
    }

    /// Bound a right-handle drag and resize `region` to follow it.
    ///
    /// The handle can get no closer than the anchor gap to the left handle, and cannot be
    /// pulled past the end of the asset. Returns the corrected handle position; the drag is
    /// horizontal only, so `y` stays on the handle's row.
    pub fn on_right_handle_drag(
        &mut self,
        region: &mut DraggableRegion,
        candidate: Point,
    ) -> Point {
        let handle_width = self.limits.handle_width;
        let min_x = self.left.position.x + self.limits.min_anchor_gap;
        let max_x = region.content_rect().x1 - handle_width;

        let x = if candidate.x < min_x {
            min_x
        } else if candidate.x > max_x {
            max_x
        } else {
            candidate.x
        };
        if x != candidate.x {
            debug!(requested = candidate.x, applied = x, "right handle clamped");
        }

        let requested = x + handle_width - region.position().x;
        let applied = region.resize_from_right(requested);
        self.layout(region);
        if applied == requested {
            self.right.position.x = x;
        }
        self.right.position
    }

    /// Bound a left-handle drag and resize `region` to follow it.
    ///
    /// The handle can get no closer than the anchor gap to the right handle, and cannot be
    /// pulled past the start of the asset. Moving the left edge shifts the region's position
    /// by the same amount, so the content itself does not move.
    pub fn on_left_handle_drag(&mut self, region: &mut DraggableRegion, candidate: Point) -> Point {
        let min_x = region.content_origin().x;
        let max_x = self.right.position.x - self.limits.min_anchor_gap;

        let x = if candidate.x > max_x {
            max_x
        } else if candidate.x < min_x {
            min_x
        } else {
            candidate.x
        };
        if x != candidate.x {
            debug!(requested = candidate.x, applied = x, "left handle clamped");
        }

        let before = region.clip().offset_x();
        let delta = x - region.position().x;
        let change = region.resize_from_left(delta);
        self.layout(region);
        if change.offset_x - before == delta {
            self.left.position.x = x;
        }
        self.left.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::ClipWindow;
    use crate::geometry::{Asset, MIN_ANCHOR_GAP};

    fn setup(origin: Point) -> (DraggableRegion, AnchorPair) {
        let limits = Limits::default();
        let asset = Asset::new(300.0, 150.0).unwrap();
        let clip = ClipWindow::full(asset, limits.min_region_width()).unwrap();
        let region = DraggableRegion::new(origin, clip);
        let anchors = AnchorPair::new(&region, limits).unwrap();
        (region, anchors)
    }

    fn assert_invariants(region: &DraggableRegion, anchors: &AnchorPair) {
        assert!(anchors.gap() >= MIN_ANCHOR_GAP, "gap collapsed: {anchors:?}");
        let clip = region.clip();
        assert!(clip.offset_x() >= 0.0, "negative offset: {clip:?}");
        assert!(clip.right_edge() <= 300.0, "clip overruns asset: {clip:?}");
        assert_eq!(region.size().width, clip.width());
    }

    #[test]
    fn initial_layout_glues_handles_to_edges() {
        let (_, anchors) = setup(Point::new(50.0, 20.0));
        assert_eq!(anchors.left().position(), Point::new(50.0, 20.0));
        assert_eq!(anchors.right().position(), Point::new(340.0, 20.0));
        assert_eq!(anchors.right().hit_box(), Rect::new(340.0, 20.0, 350.0, 30.0));
    }

    #[test]
    fn rejects_regions_narrower_than_min_width() {
        let asset = Asset::new(300.0, 150.0).unwrap();
        for width in [15.0, 25.0, 29.5] {
            let clip = ClipWindow::new(asset, 0.0, width, 10.0).unwrap();
            let region = DraggableRegion::new(Point::ZERO, clip);
            assert_eq!(
                AnchorPair::new(&region, Limits::default()),
                Err(ConfigurationError::RegionTooNarrow {
                    width,
                    min_width: 30.0
                })
            );
        }
    }

    #[test]
    fn narrowest_region_starts_one_gap_apart() {
        let asset = Asset::new(300.0, 150.0).unwrap();
        let clip = ClipWindow::new(asset, 0.0, 30.0, 10.0).unwrap();
        let region = DraggableRegion::new(Point::ZERO, clip);
        let anchors = AnchorPair::new(&region, Limits::default()).unwrap();
        assert_eq!(anchors.gap(), MIN_ANCHOR_GAP);
    }

    #[test]
    fn right_drag_resizes_and_pins_y() {
        let (mut region, mut anchors) = setup(Point::new(50.0, 0.0));
        let corrected = anchors.on_right_handle_drag(&mut region, Point::new(190.0, 77.0));

        assert_eq!(corrected, Point::new(190.0, 0.0));
        assert_eq!(region.clip().width(), 150.0);
        assert_eq!(region.size().width, 150.0);
        assert_invariants(&region, &anchors);
    }

    #[test]
    fn right_drag_below_floor_clamps_to_min_width() {
        let (mut region, mut anchors) = setup(Point::new(50.0, 0.0));
        let corrected = anchors.on_right_handle_drag(&mut region, Point::new(-400.0, 0.0));

        assert_eq!(corrected.x, 70.0);
        assert_eq!(region.size().width, 30.0);
        assert_eq!(region.position().x, 50.0);
        assert_invariants(&region, &anchors);
    }

    #[test]
    fn right_drag_cannot_pass_asset_end() {
        let (mut region, mut anchors) = setup(Point::new(50.0, 0.0));
        anchors.on_right_handle_drag(&mut region, Point::new(150.0, 0.0));
        let corrected = anchors.on_right_handle_drag(&mut region, Point::new(900.0, 0.0));

        assert_eq!(corrected.x, 340.0);
        assert_eq!(region.size().width, 300.0);
        assert_invariants(&region, &anchors);
    }

    #[test]
    fn left_drag_crops_from_the_left() {
        let (mut region, mut anchors) = setup(Point::new(50.0, 0.0));
        let corrected = anchors.on_left_handle_drag(&mut region, Point::new(110.0, 5.0));

        assert_eq!(corrected, Point::new(110.0, 0.0));
        assert_eq!(region.position().x, 110.0);
        assert_eq!(region.clip().offset_x(), 60.0);
        assert_eq!(region.size().width, 240.0);
        // Content does not move.
        assert_eq!(region.content_origin().x, 50.0);
        assert_invariants(&region, &anchors);
    }

    #[test]
    fn left_drag_cannot_pass_asset_start() {
        let (mut region, mut anchors) = setup(Point::new(50.0, 0.0));
        anchors.on_left_handle_drag(&mut region, Point::new(100.0, 0.0));
        let corrected = anchors.on_left_handle_drag(&mut region, Point::new(-20.0, 0.0));

        assert_eq!(corrected.x, 50.0);
        assert_eq!(region.clip().offset_x(), 0.0);
        assert_eq!(region.size().width, 300.0);
        assert_invariants(&region, &anchors);
    }

    #[test]
    fn left_drag_respects_gap() {
        let (mut region, mut anchors) = setup(Point::new(50.0, 0.0));
        anchors.on_right_handle_drag(&mut region, Point::new(190.0, 0.0));
        let corrected = anchors.on_left_handle_drag(&mut region, Point::new(190.0, 0.0));

        assert_eq!(corrected.x, 170.0);
        assert_eq!(anchors.gap(), MIN_ANCHOR_GAP);
        assert_eq!(region.size().width, 30.0);
        assert_invariants(&region, &anchors);
    }

    #[test]
    fn valid_positions_are_returned_unchanged() {
        let (mut region, mut anchors) = setup(Point::new(50.0, 0.0));
        let right = Point::new(250.0, 0.0);
        assert_eq!(anchors.on_right_handle_drag(&mut region, right), right);
        assert_eq!(anchors.on_right_handle_drag(&mut region, right), right);

        let left = Point::new(80.5, 0.0);
        assert_eq!(anchors.on_left_handle_drag(&mut region, left), left);
        assert_eq!(anchors.on_left_handle_drag(&mut region, left), left);
        assert_invariants(&region, &anchors);
    }

    #[test]
    fn mixed_sequence_keeps_invariants() {
        let (mut region, mut anchors) = setup(Point::new(30.0, 40.0));
        let steps = [
            (HandleSide::Right, 120.0),
            (HandleSide::Left, 300.0),
            (HandleSide::Left, -100.0),
            (HandleSide::Right, 10.0),
            (HandleSide::Left, 65.25),
            (HandleSide::Right, 1_000.0),
            (HandleSide::Left, 400.0),
            (HandleSide::Right, 0.0),
        ];
        for (side, x) in steps {
            let candidate = Point::new(x, 40.0);
            match side {
                HandleSide::Left => anchors.on_left_handle_drag(&mut region, candidate),
                HandleSide::Right => anchors.on_right_handle_drag(&mut region, candidate),
            };
            assert_invariants(&region, &anchors);
            assert_eq!(anchors.left().position().y, region.position().y);
            assert_eq!(anchors.right().position().y, region.position().y);
        }
    }
}
