// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value types and numeric helpers shared by every part of the region engine.

use kurbo::{Rect, Size};

use crate::error::ConfigurationError;

/// Width (and height) of an anchor handle's hit box, in layer pixels.
pub const HANDLE_WIDTH: f64 = 10.0;

/// Minimum distance between the origins of the left and right handles.
pub const MIN_ANCHOR_GAP: f64 = 20.0;

/// Narrowest visible width a region can be resized to.
///
/// The right handle sits one handle width inside the right edge, so a gap of
/// [`MIN_ANCHOR_GAP`] between handle origins is exactly this width.
pub const MIN_REGION_WIDTH: f64 = MIN_ANCHOR_GAP + HANDLE_WIDTH;

const _: () = assert!(MIN_REGION_WIDTH == 30.0, "handle gap and width floor drifted apart");

/// Clamp `value` into `[min, max]`, letting the floor win when `max < min`.
///
/// Unlike [`f64::clamp`] this never panics, which matters for regions larger than the
/// layer they sit on: their movement range is empty and they pin to the origin.
#[inline]
#[must_use]
pub fn clamp_floor(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// An opaque visual source with a fixed natural extent in pixels.
///
/// The pixels themselves are owned by whoever renders the asset; the region engine only
/// needs the extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Asset {
    width: f64,
    height: f64,
}

impl Asset {
    /// Describe an asset of the given natural size.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigurationError> {
        let valid = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !valid {
            return Err(ConfigurationError::InvalidAsset { width, height });
        }
        Ok(Self { width, height })
    }

    /// Natural width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Natural height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Natural size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The asset's own bounds, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.size())
    }
}

/// How a vertical position is mapped onto a row of the snap grid.
///
/// The same policy is used for the indicator shown while dragging and for the
/// final snap on release, so the region always lands where the indicator was.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RowRounding {
    /// The row containing the region's top edge.
    #[default]
    Floor,
    /// The row whose top is closest to the region's top edge.
    Nearest,
}

impl RowRounding {
    /// Row index for `y` on a grid of `row_height` tall rows.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "row counts are bounded by the layer height"
    )]
    pub fn row_index(self, y: f64, row_height: f64) -> i64 {
        let rows = y / row_height;
        match self {
            Self::Floor => rows.floor() as i64,
            Self::Nearest => rows.round() as i64,
        }
    }
}

/// Handle and gap dimensions shared by every region on a layer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Width and height of each handle's square hit box.
    pub handle_width: f64,
    /// Minimum distance between the two handle origins.
    pub min_anchor_gap: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            handle_width: HANDLE_WIDTH,
            min_anchor_gap: MIN_ANCHOR_GAP,
        }
    }
}

impl Limits {
    /// Narrowest visible width a region can take under these limits.
    #[must_use]
    pub fn min_region_width(&self) -> f64 {
        self.min_anchor_gap + self.handle_width
    }

    /// Check that both dimensions are positive and finite.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.handle_width) && ok(self.min_anchor_gap) {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidLimits {
                handle_width: self.handle_width,
                min_anchor_gap: self.min_anchor_gap,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_floor_prefers_floor_for_empty_range() {
        assert_eq!(clamp_floor(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_floor(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_floor(15.0, 0.0, 10.0), 10.0);
        // Empty range: a region wider than the layer pins to the origin.
        assert_eq!(clamp_floor(15.0, 0.0, -100.0), 0.0);
    }

    #[test]
    fn asset_rejects_degenerate_extents() {
        assert!(Asset::new(0.0, 10.0).is_err());
        assert!(Asset::new(10.0, -1.0).is_err());
        assert!(Asset::new(f64::NAN, 10.0).is_err());
        assert!(Asset::new(f64::INFINITY, 10.0).is_err());
        let asset = Asset::new(300.0, 150.0).unwrap();
        assert_eq!(asset.bounds(), Rect::new(0.0, 0.0, 300.0, 150.0));
    }

    #[test]
    fn row_index_policies() {
        assert_eq!(RowRounding::Floor.row_index(150.0, 200.0), 0);
        assert_eq!(RowRounding::Nearest.row_index(150.0, 200.0), 1);
        assert_eq!(RowRounding::Floor.row_index(399.9, 200.0), 1);
        assert_eq!(RowRounding::Floor.row_index(400.0, 200.0), 2);
        assert_eq!(RowRounding::Floor.row_index(-1.0, 200.0), -1);
        assert_eq!(RowRounding::Nearest.row_index(99.0, 200.0), 0);
    }

    #[test]
    fn default_limits_match_constants() {
        let limits = Limits::default();
        assert_eq!(limits.min_region_width(), MIN_REGION_WIDTH);
        assert!(limits.validate().is_ok());
        let broken = Limits {
            handle_width: 0.0,
            ..limits
        };
        assert!(matches!(
            broken.validate(),
            Err(ConfigurationError::InvalidLimits { .. })
        ));
    }
}
