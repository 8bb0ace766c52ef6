// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimline Editor: an editing session over a [`Scene`](trimline_scene::Scene).
//!
//! An [`Editor`] owns every [`RegionController`](trimline_region::RegionController) on
//! one surface and the [`SnapController`](trimline_region::SnapController) they share. It
//! routes one pointer: a press hit-tests the scene and starts a [`DragSession`] on the
//! region part on top, moves turn into bounded drag steps, and a release snaps. While no
//! drag is active, pointer moves drive the hover highlight.
//!
//! Assets arrive through a [`Loader`](trimline_assets::Loader); a failed load sets an
//! error [`Status`] and leaves existing regions alone.
//!
//! ```rust
//! use kurbo::Point;
//! use trimline_assets::AssetKind;
//! use trimline_editor::{Editor, EditorConfig};
//! use trimline_region::{Asset, RegionPart};
//! use trimline_scene::Scene;
//!
//! let mut scene = Scene::new(800.0, 600.0);
//! let mut editor = Editor::new(&mut scene, EditorConfig::default()).unwrap();
//! let asset = Asset::new(300.0, 150.0).unwrap();
//! let id = editor.add_asset(&mut scene, asset, &AssetKind::Sprite).unwrap();
//!
//! // Grab the body and drop it lower: it snaps back to the top of its 200 px row.
//! assert_eq!(
//!     editor.pointer_down(&mut scene, Point::new(100.0, 60.0)),
//!     Some((id, RegionPart::Body))
//! );
//! editor.pointer_move(&mut scene, Point::new(100.0, 180.0));
//! editor.pointer_up(&mut scene);
//! assert_eq!(editor.region(id).unwrap().region().position(), Point::new(10.0, 0.0));
//! ```

mod config;
mod drag;
mod editor;
mod error;
mod status;

pub use config::EditorConfig;
pub use drag::DragSession;
pub use editor::{Editor, RegionId};
pub use error::EditorError;
pub use status::Status;
