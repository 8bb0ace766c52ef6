// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A surface that just records what it was told, for unit tests.

use kurbo::{Point, Rect, Size};

use crate::surface::{NodeKind, Surface};

#[derive(Clone, Debug)]
pub(crate) struct RecordedNode {
    pub(crate) kind: NodeKind,
    pub(crate) bounds: Rect,
    pub(crate) crop: Option<Rect>,
    pub(crate) visible: bool,
    pub(crate) highlighted: bool,
}

#[derive(Debug)]
pub(crate) struct RecordingSurface {
    pub(crate) extent: Size,
    pub(crate) nodes: Vec<RecordedNode>,
    /// Back to front.
    pub(crate) order: Vec<usize>,
    pub(crate) immediate_redraws: usize,
    pub(crate) batched_redraws: usize,
    pub(crate) frames: usize,
    pending: bool,
}

impl RecordingSurface {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            extent: Size::new(width, height),
            nodes: Vec::new(),
            order: Vec::new(),
            immediate_redraws: 0,
            batched_redraws: 0,
            frames: 0,
            pending: false,
        }
    }

    pub(crate) fn node(&self, id: usize) -> &RecordedNode {
        &self.nodes[id]
    }

    /// Frames drawn by this flush (zero or one).
    pub(crate) fn flush(&mut self) -> usize {
        if self.pending {
            self.pending = false;
            self.frames += 1;
            1
        } else {
            0
        }
    }

    pub(crate) fn topmost(&self) -> Option<usize> {
        self.order.last().copied()
    }
}

impl Surface for RecordingSurface {
    type Node = usize;

    fn extent(&self) -> Size {
        self.extent
    }

    fn create(&mut self, kind: NodeKind, bounds: Rect) -> usize {
        self.nodes.push(RecordedNode {
            kind,
            bounds,
            crop: None,
            visible: true,
            highlighted: false,
        });
        let id = self.nodes.len() - 1;
        self.order.push(id);
        id
    }

    fn position(&self, node: usize) -> Point {
        self.nodes[node].bounds.origin()
    }

    fn set_position(&mut self, node: usize, position: Point) {
        let bounds = &mut self.nodes[node].bounds;
        *bounds = Rect::from_origin_size(position, bounds.size());
    }

    fn size(&self, node: usize) -> Size {
        self.nodes[node].bounds.size()
    }

    fn set_size(&mut self, node: usize, size: Size) {
        let bounds = &mut self.nodes[node].bounds;
        *bounds = Rect::from_origin_size(bounds.origin(), size);
    }

    fn set_crop(&mut self, node: usize, crop: Rect) {
        self.nodes[node].crop = Some(crop);
    }

    fn move_to_front(&mut self, node: usize) {
        self.order.retain(|&n| n != node);
        self.order.push(node);
    }

    fn set_visible(&mut self, node: usize, visible: bool) {
        self.nodes[node].visible = visible;
    }

    fn set_highlighted(&mut self, node: usize, highlighted: bool) {
        self.nodes[node].highlighted = highlighted;
    }

    fn request_redraw(&mut self) {
        self.immediate_redraws += 1;
        self.frames += 1;
        self.pending = false;
    }

    fn request_batched_redraw(&mut self) {
        self.batched_redraws += 1;
        self.pending = true;
    }
}
