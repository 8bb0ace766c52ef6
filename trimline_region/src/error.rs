// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time errors.

/// A component was built with parameters that can never produce valid geometry.
///
/// These are programming errors and are reported when a component is constructed,
/// never while a drag is in progress.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// An asset was given a non-positive or non-finite extent.
    #[error("asset extent must be positive and finite, got {width}x{height}")]
    InvalidAsset {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// A snap grid was given a non-positive or non-finite row height.
    #[error("snap row height must be positive and finite, got {0}")]
    InvalidRowHeight(f64),
    /// Handle width or anchor gap is non-positive or non-finite.
    #[error(
        "handle width and anchor gap must be positive and finite, got {handle_width} and {min_anchor_gap}"
    )]
    InvalidLimits {
        /// Requested handle width.
        handle_width: f64,
        /// Requested anchor gap.
        min_anchor_gap: f64,
    },
    /// An anchor pair was bound to a region too narrow to keep its handles apart.
    #[error("region width {width} is below the minimum region width {min_width}")]
    RegionTooNarrow {
        /// Width of the region.
        width: f64,
        /// Anchor gap plus one handle width.
        min_width: f64,
    },
    /// A clip window does not fit inside its asset or is below its minimum width.
    #[error(
        "clip window at {offset_x} with width {width} does not fit an asset {asset_width} wide (minimum width {min_width})"
    )]
    InvalidClip {
        /// Requested offset into the asset.
        offset_x: f64,
        /// Requested visible width.
        width: f64,
        /// Width floor of the window.
        min_width: f64,
        /// Natural width of the asset.
        asset_width: f64,
    },
}
