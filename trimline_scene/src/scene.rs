// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene container and its [`Surface`] implementation.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use tracing::{trace, warn};
use trimline_region::{NodeKind, Surface};

use crate::damage::Damage;
use crate::types::{NodeFlags, NodeId, SceneNode};

/// Stroke of a region frame at rest.
pub const IDLE_STROKE: Color = Color::from_rgb8(0x1f, 0x6f, 0xd6);
/// Stroke of a hovered region frame.
pub const HIGHLIGHT_STROKE: Color = Color::from_rgb8(0xd9, 0x2b, 0x1f);
/// Stroke of a resize handle.
pub const HANDLE_STROKE: Color = Color::from_rgb8(0x30, 0x30, 0x30);
/// Fill of the snap indicator.
pub const INDICATOR_FILL: Color = Color::from_rgba8(0x1f, 0x6f, 0xd6, 0x40);

/// Redraw bookkeeping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RedrawStats {
    /// Calls to [`Surface::request_redraw`].
    pub immediate_requests: u64,
    /// Calls to [`Surface::request_batched_redraw`].
    pub batched_requests: u64,
    /// Frames actually drawn.
    pub frames: u64,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<SceneNode>,
}

/// A headless retained scene.
///
/// Nodes live in generational slots; see [`NodeId`]. The draw order runs back to front and
/// new nodes go on top.
#[derive(Clone, Debug)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<NodeId>,
    extent: Size,
    stats: RedrawStats,
    pending: bool,
    damage: Damage,
    last_damage: Damage,
}

impl Scene {
    /// Create an empty scene with the given visible extent.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            extent: Size::new(width, height),
            stats: RedrawStats::default(),
            pending: false,
            damage: Damage::default(),
            last_damage: Damage::default(),
        }
    }

    /// Change the visible extent. The whole scene is damaged.
    pub fn set_extent(&mut self, extent: Size) {
        self.damage.push(self.extent.to_rect());
        self.extent = extent;
        self.damage.push(extent.to_rect());
    }

    /// Insert a node on top of the draw order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a scene never holds more than u32::MAX nodes"
    )]
    pub fn insert(&mut self, node: SceneNode) -> NodeId {
        if node.is_visible() {
            self.damage.push(node.bounds);
        }
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new((self.slots.len() - 1) as u32, 1)
        };
        self.order.push(id);
        id
    }

    /// Remove a node, returning its data if it was alive.
    pub fn remove(&mut self, id: NodeId) -> Option<SceneNode> {
        if !self.is_alive(id) {
            return None;
        }
        let node = self.slots[id.idx()].node.take()?;
        if node.is_visible() {
            self.damage.push(node.bounds);
        }
        self.order.retain(|&n| n != id);
        self.free.push(id.0);
        Some(node)
    }

    /// Whether `id` still refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots
            .get(id.idx())
            .is_some_and(|slot| slot.generation == id.generation() && slot.node.is_some())
    }

    /// The node behind `id`, if alive.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_mut()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the scene holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live nodes, back to front.
    #[must_use]
    pub fn draw_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Stacking position of `id`; `0` is the bottom.
    #[must_use]
    pub fn z_index(&self, id: NodeId) -> Option<usize> {
        self.order.iter().position(|&n| n == id)
    }

    /// The topmost visible, pickable node containing `point`.
    #[must_use]
    pub fn hit_test_point(&self, point: Point) -> Option<NodeId> {
        self.order.iter().rev().copied().find(|&id| {
            self.node(id)
                .is_some_and(|node| node.is_hit_target() && node.bounds.contains(point))
        })
    }

    /// Replace the flags of `id`.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        let Some(node) = self.node_mut(id) else {
            warn!(?id, "set_flags on a stale node");
            return;
        };
        node.flags = flags;
        let bounds = node.bounds;
        self.damage.push(bounds);
    }

    /// Stroke colour of `id`: frames swap colour while highlighted; handles have a fixed one.
    #[must_use]
    pub fn stroke(&self, id: NodeId) -> Option<Color> {
        let node = self.node(id)?;
        match node.kind {
            NodeKind::Frame if node.highlighted => Some(HIGHLIGHT_STROKE),
            NodeKind::Frame => Some(IDLE_STROKE),
            NodeKind::Handle => Some(HANDLE_STROKE),
            NodeKind::Content | NodeKind::Indicator => None,
        }
    }

    /// Fill colour of `id`, for the nodes the scene fills itself.
    #[must_use]
    pub fn fill(&self, id: NodeId) -> Option<Color> {
        let node = self.node(id)?;
        (node.kind == NodeKind::Indicator).then_some(INDICATOR_FILL)
    }

    /// Redraw counters.
    #[must_use]
    pub fn stats(&self) -> RedrawStats {
        self.stats
    }

    /// True if a batched redraw is waiting for [`flush`](Self::flush).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.pending
    }

    /// Damage of the most recently drawn frame.
    #[must_use]
    pub fn last_damage(&self) -> &Damage {
        &self.last_damage
    }

    /// Draw the pending batched frame, if any.
    ///
    /// Returns the damage of the drawn frame, or `None` when nothing was pending.
    pub fn flush(&mut self) -> Option<Damage> {
        if self.pending {
            Some(self.draw_frame())
        } else {
            None
        }
    }

    fn draw_frame(&mut self) -> Damage {
        self.pending = false;
        self.stats.frames += 1;
        let damage = std::mem::take(&mut self.damage);
        trace!(
            frame = self.stats.frames,
            rects = damage.dirty_rects.len(),
            "frame drawn"
        );
        self.last_damage = damage.clone();
        damage
    }

    fn touch(&mut self, id: NodeId, op: &str, f: impl FnOnce(&mut SceneNode)) {
        let Some(node) = self.node_mut(id) else {
            warn!(?id, op, "operation on a stale node ignored");
            return;
        };
        let before = (node.bounds, node.is_visible());
        f(node);
        let after = (node.bounds, node.is_visible());
        if before.1 {
            self.damage.push(before.0);
        }
        if after.1 && after != before {
            self.damage.push(after.0);
        }
    }
}

impl Surface for Scene {
    type Node = NodeId;

    fn extent(&self) -> Size {
        self.extent
    }

    fn create(&mut self, kind: NodeKind, bounds: Rect) -> NodeId {
        self.insert(SceneNode::new(kind, bounds))
    }

    fn position(&self, node: NodeId) -> Point {
        self.node(node).map_or(Point::ZERO, |n| n.bounds.origin())
    }

    fn set_position(&mut self, node: NodeId, position: Point) {
        self.touch(node, "set_position", |n| {
            n.bounds = Rect::from_origin_size(position, n.bounds.size());
        });
    }

    fn size(&self, node: NodeId) -> Size {
        self.node(node).map_or(Size::ZERO, |n| n.bounds.size())
    }

    fn set_size(&mut self, node: NodeId, size: Size) {
        self.touch(node, "set_size", |n| {
            n.bounds = Rect::from_origin_size(n.bounds.origin(), size);
        });
    }

    fn set_bounds(&mut self, node: NodeId, bounds: Rect) {
        self.touch(node, "set_bounds", |n| n.bounds = bounds);
    }

    fn set_crop(&mut self, node: NodeId, crop: Rect) {
        self.touch(node, "set_crop", |n| n.crop = Some(crop));
    }

    fn move_to_front(&mut self, node: NodeId) {
        if !self.is_alive(node) {
            warn!(id = ?node, "move_to_front on a stale node ignored");
            return;
        }
        if self.order.last() == Some(&node) {
            return;
        }
        self.order.retain(|&n| n != node);
        self.order.push(node);
        self.touch(node, "move_to_front", |_| {});
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.touch(node, "set_visible", |n| n.flags.set(NodeFlags::VISIBLE, visible));
    }

    fn set_highlighted(&mut self, node: NodeId, highlighted: bool) {
        self.touch(node, "set_highlighted", |n| n.highlighted = highlighted);
    }

    fn request_redraw(&mut self) {
        self.stats.immediate_requests += 1;
        self.draw_frame();
    }

    fn request_batched_redraw(&mut self) {
        self.stats.batched_requests += 1;
        self.pending = true;
    }
}
