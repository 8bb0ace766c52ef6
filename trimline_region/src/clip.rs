// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The horizontal crop of an asset shown through a region.

use kurbo::Rect;

use crate::error::ConfigurationError;
use crate::geometry::{Asset, clamp_floor};

/// The part of an [`Asset`] currently visible through a region.
///
/// The window always spans the asset's full height. Horizontally it starts at
/// [`offset_x`](Self::offset_x) and is [`width`](Self::width) pixels wide, in asset
/// coordinates. After every mutation:
///
/// - `offset_x >= 0`
/// - `offset_x + width <= asset.width()`
/// - `width >= min_width`
///
/// Requests that would break these are clamped, never rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipWindow {
    offset_x: f64,
    width: f64,
    min_width: f64,
    asset: Asset,
}

/// Result of a left-edge resize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipChange {
    /// Offset into the asset after the resize.
    pub offset_x: f64,
    /// Visible width after the resize.
    pub width: f64,
}

impl ClipWindow {
    /// Create a window showing `width` pixels of `asset` starting at `offset_x`.
    pub fn new(
        asset: Asset,
        offset_x: f64,
        width: f64,
        min_width: f64,
    ) -> Result<Self, ConfigurationError> {
        let fits = offset_x.is_finite()
            && width.is_finite()
            && min_width.is_finite()
            && min_width > 0.0
            && offset_x >= 0.0
            && width >= min_width
            && offset_x + width <= asset.width();
        if !fits {
            return Err(ConfigurationError::InvalidClip {
                offset_x,
                width,
                min_width,
                asset_width: asset.width(),
            });
        }
        Ok(Self {
            offset_x,
            width,
            min_width,
            asset,
        })
    }

    /// A window showing the whole asset.
    pub fn full(asset: Asset, min_width: f64) -> Result<Self, ConfigurationError> {
        Self::new(asset, 0.0, asset.width(), min_width)
    }

    /// Start of the window in asset coordinates.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Visible width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Width floor.
    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// End of the window in asset coordinates.
    #[must_use]
    pub fn right_edge(&self) -> f64 {
        self.offset_x + self.width
    }

    /// The asset this window crops.
    #[must_use]
    pub fn asset(&self) -> Asset {
        self.asset
    }

    /// The crop rectangle in asset coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.offset_x, 0.0, self.right_edge(), self.asset.height())
    }

    /// Move the right edge so the window is `requested_width` wide.
    ///
    /// The width is clamped to `[min_width, asset.width() - offset_x]`. Returns the applied
    /// width.
    pub fn resize_from_right(&mut self, requested_width: f64) -> f64 {
        let max_width = self.asset.width() - self.offset_x;
        self.width = clamp_floor(requested_width, self.min_width, max_width);
        self.width
    }

    /// Move the left edge by `delta` pixels, keeping the right edge where it is.
    ///
    /// The new offset is clamped to `[0, right_edge - min_width]`.
    pub fn resize_from_left(&mut self, delta: f64) -> ClipChange {
        let right_edge = self.right_edge();
        let offset_x = clamp_floor(self.offset_x + delta, 0.0, right_edge - self.min_width);
        self.offset_x = offset_x;
        self.width = right_edge - offset_x;
        ClipChange {
            offset_x,
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(offset_x: f64, width: f64) -> ClipWindow {
        let asset = Asset::new(300.0, 150.0).unwrap();
        ClipWindow::new(asset, offset_x, width, 30.0).unwrap()
    }

    fn assert_invariants(clip: &ClipWindow) {
        assert!(clip.offset_x() >= 0.0, "offset went negative: {clip:?}");
        assert!(
            clip.right_edge() <= clip.asset().width(),
            "window overruns the asset: {clip:?}"
        );
        assert!(clip.width() >= clip.min_width(), "window below floor: {clip:?}");
    }

    #[test]
    fn new_rejects_windows_that_do_not_fit() {
        let asset = Asset::new(300.0, 150.0).unwrap();
        assert!(ClipWindow::new(asset, -1.0, 100.0, 30.0).is_err());
        assert!(ClipWindow::new(asset, 0.0, 20.0, 30.0).is_err());
        assert!(ClipWindow::new(asset, 250.0, 100.0, 30.0).is_err());
        assert!(ClipWindow::new(asset, 0.0, 100.0, 0.0).is_err());
        assert!(ClipWindow::new(asset, 0.0, 300.0, 30.0).is_ok());
    }

    #[test]
    fn resize_from_right_clamps_to_floor_and_asset() {
        let mut clip = clip(0.0, 300.0);
        assert_eq!(clip.resize_from_right(150.0), 150.0);
        assert_eq!(clip.resize_from_right(10.0), 30.0);
        assert_eq!(clip.offset_x(), 0.0);
        assert_eq!(clip.resize_from_right(1_000.0), 300.0);
        assert_invariants(&clip);
    }

    #[test]
    fn resize_from_right_ceiling_accounts_for_offset() {
        let mut clip = clip(100.0, 50.0);
        assert_eq!(clip.resize_from_right(500.0), 200.0);
        assert_invariants(&clip);
    }

    #[test]
    fn resize_from_left_keeps_right_edge() {
        let mut clip = clip(0.0, 200.0);
        let change = clip.resize_from_left(50.0);
        assert_eq!(change, ClipChange { offset_x: 50.0, width: 150.0 });
        assert_eq!(clip.right_edge(), 200.0);

        // Cannot push past the floor.
        let change = clip.resize_from_left(500.0);
        assert_eq!(change, ClipChange { offset_x: 170.0, width: 30.0 });

        // Cannot pull past the asset's start.
        let change = clip.resize_from_left(-1_000.0);
        assert_eq!(change, ClipChange { offset_x: 0.0, width: 200.0 });
        assert_invariants(&clip);
    }

    #[test]
    fn arbitrary_sequences_hold_invariants() {
        let mut clip = clip(40.0, 120.0);
        let steps = [35.0, -80.0, 500.0, -3.5, 17.25, -1_000.0, 90.0];
        for (i, step) in steps.iter().enumerate() {
            if i % 2 == 0 {
                clip.resize_from_left(*step);
            } else {
                clip.resize_from_right(clip.width() + step);
            }
            assert_invariants(&clip);
        }
    }

    #[test]
    fn rect_spans_full_height() {
        let clip = clip(20.0, 100.0);
        assert_eq!(clip.rect(), Rect::new(20.0, 0.0, 120.0, 150.0));
    }
}
