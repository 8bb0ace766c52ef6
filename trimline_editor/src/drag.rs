// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag sessions: turn pointer positions into candidate node positions.
//!
//! A session remembers where the pointer went down and where the dragged node was at that
//! moment. Every later pointer position maps to a candidate node position by applying the
//! pointer's total offset to the node's start position; the region engine then bounds the
//! candidate.
//!
//! ```
//! use kurbo::Point;
//! use trimline_editor::{DragSession, RegionId};
//! use trimline_region::RegionPart;
//!
//! let session = DragSession::start(
//!     RegionId::new(0),
//!     RegionPart::Body,
//!     Point::new(60.0, 30.0),
//!     Point::new(50.0, 0.0),
//! );
//! assert_eq!(session.candidate(Point::new(70.0, 45.0)), Point::new(60.0, 15.0));
//! ```

use kurbo::{Point, Vec2};
use trimline_region::RegionPart;

use crate::editor::RegionId;

/// An active pointer drag on one part of one region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    region: RegionId,
    part: RegionPart,
    pointer_start: Point,
    node_start: Point,
    last_pointer: Point,
}

impl DragSession {
    /// Start a drag of `part` with the pointer at `pointer` and the node at `node_start`.
    #[must_use]
    pub fn start(region: RegionId, part: RegionPart, pointer: Point, node_start: Point) -> Self {
        Self {
            region,
            part,
            pointer_start: pointer,
            node_start,
            last_pointer: pointer,
        }
    }

    /// The region being dragged.
    #[must_use]
    pub fn region(&self) -> RegionId {
        self.region
    }

    /// The part being dragged.
    #[must_use]
    pub fn part(&self) -> RegionPart {
        self.part
    }

    /// Record a pointer move, returning the movement since the previous one.
    pub fn update(&mut self, pointer: Point) -> Vec2 {
        let delta = pointer - self.last_pointer;
        self.last_pointer = pointer;
        delta
    }

    /// Pointer offset from the start of the drag.
    #[must_use]
    pub fn total_offset(&self, pointer: Point) -> Vec2 {
        pointer - self.pointer_start
    }

    /// Unbounded node position for `pointer`.
    #[must_use]
    pub fn candidate(&self, pointer: Point) -> Point {
        self.node_start + self.total_offset(pointer)
    }
}
