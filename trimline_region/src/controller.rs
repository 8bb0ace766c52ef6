// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One region, its handles and frame, and the pointer state machine that drives them.
//!
//! ## States
//!
//! ```text
//! Idle --press(body)---> DraggingRegion ------release--> Idle  (snap if a grid is bound)
//! Idle --press(left)---> DraggingLeftAnchor --release--> Idle
//! Idle --press(right)--> DraggingRightAnchor -release--> Idle
//! ```
//!
//! A press while a drag is already active is ignored: there is one session per pointer.
//! Entering any dragging state raises the whole region above everything else on the layer.
//!
//! Every handler that changes something ends with one redraw request. Drag steps of the
//! whole region use a batched redraw so a burst of pointer moves costs one frame; handle
//! drags and releases ask for an immediate redraw, which also absorbs any batched request
//! made earlier in the same handler.

use std::fmt::Debug;
use std::mem;

use kurbo::Point;
use tracing::{debug, info};

use crate::anchor::AnchorPair;
use crate::error::ConfigurationError;
use crate::geometry::Limits;
use crate::region::DraggableRegion;
use crate::snap::SharedSnap;
use crate::surface::{NodeKind, Surface};

/// The part of a region a pointer pressed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegionPart {
    /// The content or its frame: moves the whole region.
    Body,
    /// The left resize handle.
    LeftHandle,
    /// The right resize handle.
    RightHandle,
}

/// Drag session state of one region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// No drag in progress.
    #[default]
    Idle,
    /// The whole region is being moved.
    DraggingRegion,
    /// The left handle is being dragged.
    DraggingLeftAnchor,
    /// The right handle is being dragged.
    DraggingRightAnchor,
}

impl Interaction {
    fn dragging(part: RegionPart) -> Self {
        match part {
            RegionPart::Body => Self::DraggingRegion,
            RegionPart::LeftHandle => Self::DraggingLeftAnchor,
            RegionPart::RightHandle => Self::DraggingRightAnchor,
        }
    }

    /// Returns `true` when no drag is in progress.
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// The part being dragged, if any.
    #[must_use]
    pub fn part(self) -> Option<RegionPart> {
        match self {
            Self::Idle => None,
            Self::DraggingRegion => Some(RegionPart::Body),
            Self::DraggingLeftAnchor => Some(RegionPart::LeftHandle),
            Self::DraggingRightAnchor => Some(RegionPart::RightHandle),
        }
    }
}

/// The surface nodes a region owns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionNodes<N> {
    /// The cropped asset.
    pub content: N,
    /// The outline around the visible part.
    pub frame: N,
    /// The left resize handle.
    pub left: N,
    /// The right resize handle.
    pub right: N,
}

impl<N: Copy + Eq> RegionNodes<N> {
    /// Nodes in the order they are raised, so the last one ends on top.
    #[must_use]
    pub fn raise_order(&self) -> [N; 4] {
        [self.content, self.frame, self.right, self.left]
    }

    /// Which part of the region `node` belongs to.
    #[must_use]
    pub fn part_of(&self, node: N) -> Option<RegionPart> {
        if node == self.left {
            Some(RegionPart::LeftHandle)
        } else if node == self.right {
            Some(RegionPart::RightHandle)
        } else if node == self.content || node == self.frame {
            Some(RegionPart::Body)
        } else {
            None
        }
    }
}

/// Drives one [`DraggableRegion`], its [`AnchorPair`] and an optional snap grid.
#[derive(Debug)]
pub struct RegionController<N> {
    region: DraggableRegion,
    anchors: AnchorPair,
    nodes: RegionNodes<N>,
    snap: Option<SharedSnap<N>>,
    interaction: Interaction,
    hovered: bool,
}

impl<N: Copy + Eq + Debug> RegionController<N> {
    /// Add `region` to `surface` with its frame and handles, and lay them out.
    pub fn new<S>(
        surface: &mut S,
        region: DraggableRegion,
        limits: Limits,
        snap: Option<SharedSnap<N>>,
    ) -> Result<Self, ConfigurationError>
    where
        S: Surface<Node = N>,
    {
        let anchors = AnchorPair::new(&region, limits)?;
        let nodes = RegionNodes {
            content: surface.create(NodeKind::Content, region.bounds()),
            frame: surface.create(NodeKind::Frame, region.bounds()),
            right: surface.create(NodeKind::Handle, anchors.right().hit_box()),
            left: surface.create(NodeKind::Handle, anchors.left().hit_box()),
        };
        let controller = Self {
            region,
            anchors,
            nodes,
            snap,
            interaction: Interaction::Idle,
            hovered: false,
        };
        controller.push_geometry(surface);
        controller.bring_to_front(surface);
        surface.request_redraw();
        info!(
            x = region.position().x,
            y = region.position().y,
            width = region.size().width,
            height = region.size().height,
            "region created"
        );
        Ok(controller)
    }

    /// The region's geometry.
    #[must_use]
    pub fn region(&self) -> &DraggableRegion {
        &self.region
    }

    /// The region's handles.
    #[must_use]
    pub fn anchors(&self) -> &AnchorPair {
        &self.anchors
    }

    /// The surface nodes owned by this region.
    #[must_use]
    pub fn nodes(&self) -> &RegionNodes<N> {
        &self.nodes
    }

    /// Current drag state.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Whether the pointer is over the region.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The snap grid this region drops onto, if any.
    #[must_use]
    pub fn snap(&self) -> Option<&SharedSnap<N>> {
        self.snap.as_ref()
    }

    /// Bind or unbind a snap grid. Takes effect at the next drag.
    pub fn set_snap(&mut self, snap: Option<SharedSnap<N>>) {
        self.snap = snap;
    }

    /// Which part of this region `node` belongs to.
    #[must_use]
    pub fn part_of(&self, node: N) -> Option<RegionPart> {
        self.nodes.part_of(node)
    }

    /// Current layer position of the node that `part` drags.
    #[must_use]
    pub fn part_position(&self, part: RegionPart) -> Point {
        match part {
            RegionPart::Body => self.region.position(),
            RegionPart::LeftHandle => self.anchors.left().position(),
            RegionPart::RightHandle => self.anchors.right().position(),
        }
    }

    /// Start a drag on `part`. Returns `false` if a drag was already in progress.
    pub fn on_press<S>(&mut self, surface: &mut S, part: RegionPart) -> bool
    where
        S: Surface<Node = N>,
    {
        if !self.interaction.is_idle() {
            debug!(?part, state = ?self.interaction, "press ignored during drag");
            return false;
        }
        self.interaction = Interaction::dragging(part);
        self.bring_to_front(surface);
        surface.request_batched_redraw();
        true
    }

    /// Bound a drag step of the active part and apply it.
    ///
    /// Returns the corrected position of the dragged node, or `None` if no drag is active.
    pub fn on_drag<S>(&mut self, surface: &mut S, candidate: Point) -> Option<Point>
    where
        S: Surface<Node = N>,
    {
        let corrected = match self.interaction {
            Interaction::Idle => return None,
            Interaction::DraggingRegion => {
                let corrected = self.region.on_body_drag(candidate, surface.extent());
                self.region.move_to(corrected);
                self.anchors.layout(&self.region);
                self.push_geometry(surface);
                match &self.snap {
                    Some(snap) => {
                        snap.borrow_mut().show_indicator(surface, corrected.y);
                    }
                    None => surface.request_batched_redraw(),
                }
                corrected
            }
            Interaction::DraggingLeftAnchor => {
                let corrected = self.anchors.on_left_handle_drag(&mut self.region, candidate);
                self.push_geometry(surface);
                surface.request_redraw();
                corrected
            }
            Interaction::DraggingRightAnchor => {
                let corrected = self
                    .anchors
                    .on_right_handle_drag(&mut self.region, candidate);
                self.push_geometry(surface);
                surface.request_redraw();
                corrected
            }
        };
        Some(corrected)
    }

    /// Finish the active drag, snapping the region onto its grid if it was moved.
    ///
    /// Returns the part that was being dragged, or `None` if no drag was active.
    pub fn on_release<S>(&mut self, surface: &mut S) -> Option<RegionPart>
    where
        S: Surface<Node = N>,
    {
        let previous = mem::take(&mut self.interaction);
        let part = previous.part()?;
        if part == RegionPart::Body {
            if let Some(snap) = &self.snap {
                let mut snap = snap.borrow_mut();
                let position = self.region.position();
                let max_y = surface.extent().height - self.region.size().height;
                let y = snap.snap_y_within(position.y, max_y);
                debug!(from = position.y, to = y, "region snapped to row");
                self.region.move_to(Point::new(position.x, y));
                self.anchors.layout(&self.region);
                self.push_geometry(surface);
                snap.hide_indicator(surface);
            }
        }
        surface.request_redraw();
        Some(part)
    }

    /// The pointer entered the region: highlight its frame.
    pub fn on_hover_enter<S>(&mut self, surface: &mut S)
    where
        S: Surface<Node = N>,
    {
        if !self.hovered {
            self.hovered = true;
            surface.set_highlighted(self.nodes.frame, true);
            surface.request_batched_redraw();
        }
    }

    /// The pointer left the region: restore its frame.
    pub fn on_hover_leave<S>(&mut self, surface: &mut S)
    where
        S: Surface<Node = N>,
    {
        if self.hovered {
            self.hovered = false;
            surface.set_highlighted(self.nodes.frame, false);
            surface.request_batched_redraw();
        }
    }

    fn bring_to_front<S>(&self, surface: &mut S)
    where
        S: Surface<Node = N>,
    {
        for node in self.nodes.raise_order() {
            surface.move_to_front(node);
        }
    }

    fn push_geometry<S>(&self, surface: &mut S)
    where
        S: Surface<Node = N>,
    {
        let bounds = self.region.bounds();
        surface.set_bounds(self.nodes.content, bounds);
        surface.set_crop(self.nodes.content, self.region.clip().rect());
        surface.set_bounds(self.nodes.frame, bounds);
        surface.set_position(self.nodes.left, self.anchors.left().position());
        surface.set_position(self.nodes.right, self.anchors.right().position());
    }
}
