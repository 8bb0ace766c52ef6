// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, flags and per-node data.

use kurbo::Rect;
use trimline_region::NodeKind;

/// Identifier for a node in the scene.
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed and every `NodeId` that pointed to it goes stale.
/// - On reuse of a freed slot its generation is incremented, so a stale id never aliases
///   the new node.
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check a handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is drawn.
        const VISIBLE  = 0b0000_0001;
        /// Node takes part in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Everything the scene knows about one node.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// What the node draws.
    pub kind: NodeKind,
    /// Scene-space bounds.
    pub bounds: Rect,
    /// Part of the source a content node shows, in source coordinates.
    pub crop: Option<Rect>,
    /// Visibility and picking.
    pub flags: NodeFlags,
    /// Whether a frame uses its highlighted stroke.
    pub highlighted: bool,
}

impl SceneNode {
    pub(crate) fn new(kind: NodeKind, bounds: Rect) -> Self {
        // The indicator is decoration and must never steal pointer events.
        let flags = match kind {
            NodeKind::Indicator => NodeFlags::VISIBLE,
            _ => NodeFlags::default(),
        };
        Self {
            kind,
            bounds,
            crop: None,
            flags,
            highlighted: false,
        }
    }

    /// True if the node is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(NodeFlags::VISIBLE)
    }

    /// True if the node is visible and pickable.
    #[must_use]
    pub fn is_hit_target(&self) -> bool {
        self.flags.contains(NodeFlags::VISIBLE | NodeFlags::PICKABLE)
    }
}
