// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimline Scene: a headless retained scene for Trimline regions.
//!
//! [`Scene`] implements [`trimline_region::Surface`] without drawing any pixels. It keeps
//! the nodes the region engine creates, their bounds, crops and draw order, answers hit
//! tests, and turns redraw requests into frames with a coarse [`Damage`] summary.
//! A windowing backend can mirror a scene onto its own drawing layer, and tests can assert
//! on it directly.
//!
//! ## Redraw model
//!
//! - [`Surface::request_redraw`] draws a frame right away and absorbs any pending batched
//!   request.
//! - [`Surface::request_batched_redraw`] marks the scene dirty; [`Scene::flush`] draws at
//!   most one frame however many batched requests came before it.
//!
//! [`RedrawStats`] counts both kinds of request and the frames that resulted.
//!
//! ```rust
//! use trimline_region::{NodeKind, Rect, Surface};
//! use trimline_scene::Scene;
//!
//! let mut scene = Scene::new(800.0, 600.0);
//! let node = scene.create(NodeKind::Content, Rect::new(10.0, 10.0, 110.0, 60.0));
//! for _ in 0..5 {
//!     scene.request_batched_redraw();
//! }
//! assert!(scene.flush().is_some());
//! assert!(scene.flush().is_none());
//! assert_eq!(scene.stats().frames, 1);
//! assert_eq!(scene.hit_test_point((20.0, 20.0).into()), Some(node));
//! ```

mod damage;
mod scene;
mod types;

pub use damage::Damage;
pub use scene::{HANDLE_STROKE, HIGHLIGHT_STROKE, IDLE_STROKE, INDICATOR_FILL, RedrawStats, Scene};
pub use types::{NodeFlags, NodeId, SceneNode};

#[cfg(doc)]
use trimline_region::Surface;
