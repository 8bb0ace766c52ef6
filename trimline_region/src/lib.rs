// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimline Region: the interaction geometry of an editable sprite or waveform strip.
//!
//! A *region* is a rectangle on a rendering layer that shows a horizontal window of an
//! [`Asset`] (an image, or a bitmap of waveform bars). Users can:
//!
//! - drag the whole region around the layer, bounded by the layer's visible extent;
//! - resize it from either edge through a pair of small anchor handles, which crops the
//!   content instead of scaling it;
//! - drop it onto a fixed grid of rows shared by every region on the layer.
//!
//! The crate is split into small, separately testable pieces:
//!
//! - [`ClipWindow`]: the visible sub-range of the asset, with the width floor.
//! - [`AnchorPair`]: the left/right handles and their drag-bound logic.
//! - [`DraggableRegion`]: position, size and movement clamping.
//! - [`SnapController`]: the row grid and its drop indicator.
//! - [`RegionController`]: wires one region to its handles, frame and optional grid,
//!   and runs the press/drag/release state machine.
//!
//! Rendering is left to an implementation of [`Surface`]: a retained scene that can
//! create nodes, move and resize them, reorder them and schedule redraws.
//!
//! Invalid geometry requests are never errors. Every candidate position is clamped to the
//! nearest valid value. Only construction can fail, with a [`ConfigurationError`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use trimline_region::{AnchorPair, Asset, ClipWindow, DraggableRegion, Limits};
//!
//! let limits = Limits::default();
//! let asset = Asset::new(300.0, 150.0).unwrap();
//! let clip = ClipWindow::full(asset, limits.min_region_width()).unwrap();
//! let mut region = DraggableRegion::new(Point::new(50.0, 0.0), clip);
//! let mut anchors = AnchorPair::new(&region, limits).unwrap();
//!
//! // Pull the right edge in to x = 200.
//! anchors.on_right_handle_drag(&mut region, Point::new(190.0, 40.0));
//! assert_eq!(region.size().width, 150.0);
//!
//! // The left handle cannot get closer than the anchor gap.
//! let corrected = anchors.on_left_handle_drag(&mut region, Point::new(190.0, 0.0));
//! assert_eq!(corrected.x, 170.0);
//! assert_eq!(anchors.gap(), 20.0);
//! assert_eq!(region.clip().offset_x(), 120.0);
//! ```

mod anchor;
mod clip;
mod controller;
mod error;
mod geometry;
mod region;
mod snap;
mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use anchor::{AnchorPair, Handle, HandleSide};
pub use clip::{ClipChange, ClipWindow};
pub use controller::{Interaction, RegionController, RegionNodes, RegionPart};
pub use error::ConfigurationError;
pub use geometry::{
    Asset, HANDLE_WIDTH, Limits, MIN_ANCHOR_GAP, MIN_REGION_WIDTH, RowRounding, clamp_floor,
};
pub use region::DraggableRegion;
pub use snap::{SharedSnap, SnapController};
pub use surface::{NodeKind, Surface};

pub use kurbo::{Point, Rect, Size, Vec2};
