// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary types returned when a frame is drawn.

use kurbo::Rect;

/// Areas of the scene that changed since the previous frame.
///
/// Rectangles may overlap and are not deduplicated. Both the old and the new bounds of a
/// moved node are included, so the union covers everything that needs repainting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// Scene-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns the union of all damage rects.
    #[must_use]
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// True if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    pub(crate) fn push(&mut self, rect: Rect) {
        if rect.area() > 0.0 {
            self.dirty_rects.push(rect);
        }
    }
}
