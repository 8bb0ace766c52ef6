// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering surface the region engine draws through.

use std::fmt::Debug;

use kurbo::{Point, Rect, Size};

/// What a node on the surface represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The asset itself, cropped to a region's clip window.
    Content,
    /// The outline drawn around a region; highlighted while hovered.
    Frame,
    /// A resize handle.
    Handle,
    /// The snap grid's drop indicator.
    Indicator,
}

/// A retained-mode layer that owns drawable nodes.
///
/// Implementations decide how nodes are drawn; the region engine only positions them,
/// orders them and asks for redraws. Node handles are small copyable ids.
///
/// Two redraw flavours exist. [`request_redraw`](Self::request_redraw) asks for a full
/// draw now. [`request_batched_redraw`](Self::request_batched_redraw) asks for a draw at
/// the next frame, and any number of such requests before that frame must collapse into a
/// single draw.
pub trait Surface {
    /// Handle of a node on this surface.
    type Node: Copy + Eq + Debug;

    /// Current visible extent of the layer.
    fn extent(&self) -> Size;

    /// Add a node on top of the draw order.
    fn create(&mut self, kind: NodeKind, bounds: Rect) -> Self::Node;

    /// Top-left corner of `node`.
    fn position(&self, node: Self::Node) -> Point;

    /// Move `node`.
    fn set_position(&mut self, node: Self::Node, position: Point);

    /// Size of `node`.
    fn size(&self, node: Self::Node) -> Size;

    /// Resize `node`.
    fn set_size(&mut self, node: Self::Node, size: Size);

    /// Set the part of the source shown by a content node, in source coordinates.
    fn set_crop(&mut self, node: Self::Node, crop: Rect);

    /// Raise `node` above every other node.
    fn move_to_front(&mut self, node: Self::Node);

    /// Show or hide `node`.
    fn set_visible(&mut self, node: Self::Node, visible: bool);

    /// Switch a frame between its idle and highlighted stroke.
    fn set_highlighted(&mut self, node: Self::Node, highlighted: bool);

    /// Draw now.
    fn request_redraw(&mut self);

    /// Draw at the next frame, coalescing with other batched requests.
    fn request_batched_redraw(&mut self);

    /// Set both position and size of `node`.
    fn set_bounds(&mut self, node: Self::Node, bounds: Rect) {
        self.set_position(node, bounds.origin());
        self.set_size(node, bounds.size());
    }
}
