// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor session: every region on one layer, their shared grid and the pointer.

use std::fmt::Debug;
use std::rc::Rc;

use kurbo::Point;
use tracing::{debug, info, trace, warn};
use trimline_assets::{AssetError, AssetKind, AssetSource, Bitmap, Loader, Ticket};
use trimline_region::{
    Asset, ClipWindow, DraggableRegion, RegionController, RegionPart, SharedSnap,
    SnapController, Surface,
};
use trimline_scene::{NodeId, Scene};

use crate::config::EditorConfig;
use crate::drag::DragSession;
use crate::error::EditorError;
use crate::status::Status;

/// Index of a region in its [`Editor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(usize);

impl RegionId {
    /// Wrap a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Regions on one surface, the grid they share, and the single pointer driving them.
///
/// The editor holds node handles, not the surface itself: every call that touches the
/// surface takes it as an argument. `N` is the surface's node handle type.
#[derive(Debug)]
pub struct Editor<N> {
    config: EditorConfig,
    snap: Option<SharedSnap<N>>,
    regions: Vec<RegionController<N>>,
    drag: Option<DragSession>,
    hovered: Option<RegionId>,
    pending: Option<AssetKind>,
    status: Status,
}

impl<N: Copy + Eq + Debug> Editor<N> {
    /// Validate `config` and create the shared snap grid on `surface`.
    pub fn new<S>(surface: &mut S, config: EditorConfig) -> Result<Self, EditorError>
    where
        S: Surface<Node = N>,
    {
        config.validate()?;
        let snap = config
            .row_height
            .map(|row_height| SnapController::new(surface, row_height, config.row_rounding))
            .transpose()?
            .map(SnapController::into_shared);
        Ok(Self {
            config,
            snap,
            regions: Vec::new(),
            drag: None,
            hovered: None,
            pending: None,
            status: Status::Ready,
        })
    }

    /// The settings this editor was built with.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The shared snap grid, if snapping is enabled.
    #[must_use]
    pub fn snap(&self) -> Option<&SharedSnap<N>> {
        self.snap.as_ref()
    }

    /// Every region, in the order they were added.
    #[must_use]
    pub fn regions(&self) -> &[RegionController<N>] {
        &self.regions
    }

    /// One region.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&RegionController<N>> {
        self.regions.get(id.0)
    }

    /// The active drag, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// The region under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<RegionId> {
        self.hovered
    }

    /// The status line.
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Replace the status line.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Add a region showing `asset` at the next spawn position.
    ///
    /// Sprites open with the configured clip width; waveforms show their full width.
    pub fn add_asset<S>(
        &mut self,
        surface: &mut S,
        asset: Asset,
        kind: &AssetKind,
    ) -> Result<RegionId, EditorError>
    where
        S: Surface<Node = N>,
    {
        let limits = self.config.limits();
        let min_width = limits.min_region_width();
        let width = match (kind, self.config.sprite_clip_width) {
            (AssetKind::Sprite, Some(clip)) => clip.min(asset.width()),
            _ => asset.width(),
        };
        let clip = ClipWindow::new(asset, 0.0, width, min_width)?;
        let spawn = self.config.spawn_position(self.regions.len());
        let unplaced = DraggableRegion::new(spawn, clip);
        let position = unplaced.on_body_drag(spawn, surface.extent());
        let region = DraggableRegion::new(position, clip);
        let controller = RegionController::new(surface, region, limits, self.snap.clone())?;
        self.regions.push(controller);
        let id = RegionId(self.regions.len() - 1);
        debug!(region = id.0, ?kind, "region added");
        Ok(id)
    }

    /// Add a region for a finished load, or report why there is none.
    ///
    /// A failed load leaves every existing region untouched and sets an error status.
    pub fn add_loaded<S>(
        &mut self,
        surface: &mut S,
        result: Result<Bitmap, AssetError>,
        kind: &AssetKind,
    ) -> Result<RegionId, EditorError>
    where
        S: Surface<Node = N>,
    {
        let added = result
            .map_err(EditorError::from)
            .and_then(|bitmap| self.add_asset(surface, bitmap.asset(), kind));
        match &added {
            Ok(_) => self.status = Status::Ready,
            Err(err) => {
                warn!(%err, "asset not added");
                self.status = Status::Error(format!("could not load asset: {err}"));
            }
        }
        added
    }

    /// Queue a background load on `loader`, superseding any earlier one.
    pub fn request_load(
        &mut self,
        loader: &mut Loader,
        source: AssetSource,
        kind: AssetKind,
    ) -> Result<Ticket, EditorError> {
        let what = source.describe();
        let ticket = loader.request(source, kind)?;
        self.pending = Some(kind);
        self.status = Status::Loading(what);
        Ok(ticket)
    }

    /// Add the latest requested asset if `loader` has finished it.
    ///
    /// Returns `None` while the load is still running or if nothing was requested.
    pub fn poll_loader<S>(
        &mut self,
        surface: &mut S,
        loader: &mut Loader,
    ) -> Option<Result<RegionId, EditorError>>
    where
        S: Surface<Node = N>,
    {
        let completion = loader.poll()?;
        Some(self.finish_load(surface, completion.result))
    }

    /// Block until the latest requested asset is loaded, then add it.
    pub fn wait_loader<S>(
        &mut self,
        surface: &mut S,
        loader: &mut Loader,
    ) -> Option<Result<RegionId, EditorError>>
    where
        S: Surface<Node = N>,
    {
        let completion = loader.wait()?;
        Some(self.finish_load(surface, completion.result))
    }

    fn finish_load<S>(
        &mut self,
        surface: &mut S,
        result: Result<Bitmap, AssetError>,
    ) -> Result<RegionId, EditorError>
    where
        S: Surface<Node = N>,
    {
        let kind = self.pending.take().unwrap_or(AssetKind::Sprite);
        self.add_loaded(surface, result, &kind)
    }

    /// Which region and part `node` belongs to.
    #[must_use]
    pub fn part_at(&self, node: N) -> Option<(RegionId, RegionPart)> {
        self.regions
            .iter()
            .enumerate()
            .find_map(|(index, region)| region.part_of(node).map(|part| (RegionId(index), part)))
    }

    /// Start dragging `part` of region `id` with the pointer at `pointer`.
    ///
    /// Returns `false` if a drag is already active or `id` is unknown.
    pub fn press<S>(
        &mut self,
        surface: &mut S,
        id: RegionId,
        part: RegionPart,
        pointer: Point,
    ) -> bool
    where
        S: Surface<Node = N>,
    {
        if self.drag.is_some() {
            return false;
        }
        let Some(region) = self.regions.get_mut(id.0) else {
            return false;
        };
        if !region.on_press(surface, part) {
            return false;
        }
        let node_start = region.part_position(part);
        self.drag = Some(DragSession::start(id, part, pointer, node_start));
        debug!(region = id.0, ?part, "drag started");
        true
    }

    /// Continue the active drag with the pointer at `pointer`.
    ///
    /// Returns the bounded position of the dragged node.
    pub fn drag_to<S>(&mut self, surface: &mut S, pointer: Point) -> Option<Point>
    where
        S: Surface<Node = N>,
    {
        let drag = self.drag.as_mut()?;
        let delta = drag.update(pointer);
        let candidate = drag.candidate(pointer);
        trace!(?delta, ?candidate, "drag step");
        self.regions.get_mut(drag.region().0)?.on_drag(surface, candidate)
    }

    /// End the active drag.
    pub fn release<S>(&mut self, surface: &mut S) -> Option<(RegionId, RegionPart)>
    where
        S: Surface<Node = N>,
    {
        let drag = self.drag.take()?;
        let part = self.regions.get_mut(drag.region().0)?.on_release(surface)?;
        Some((drag.region(), part))
    }

    /// Move the hover highlight to `target`.
    pub fn hover<S>(&mut self, surface: &mut S, target: Option<RegionId>)
    where
        S: Surface<Node = N>,
    {
        if self.hovered == target {
            return;
        }
        if let Some(region) = self.hovered.and_then(|id| self.regions.get_mut(id.0)) {
            region.on_hover_leave(surface);
        }
        if let Some(region) = target.and_then(|id| self.regions.get_mut(id.0)) {
            region.on_hover_enter(surface);
        }
        self.hovered = target;
    }

    /// Whether two regions share the same snap grid instance.
    #[must_use]
    pub fn shares_grid(&self, a: RegionId, b: RegionId) -> bool {
        let grid = |id: RegionId| self.region(id).and_then(RegionController::snap);
        match (grid(a), grid(b)) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Editor<NodeId> {
    /// Pointer pressed at `point`: start dragging whatever region part is on top there.
    ///
    /// Returns the pressed region and part, or `None` if the press hit nothing draggable.
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        point: Point,
    ) -> Option<(RegionId, RegionPart)> {
        let (id, part) = self.part_at(scene.hit_test_point(point)?)?;
        self.press(scene, id, part, point).then_some((id, part))
    }

    /// Pointer moved to `point`: continue any active drag, then update the hover highlight.
    ///
    /// Hover follows the pointer during a drag too, so a region that stops against an
    /// edge while the pointer carries on loses its highlight.
    pub fn pointer_move(&mut self, scene: &mut Scene, point: Point) -> Option<Point> {
        let dragged = self.drag_to(scene, point);
        let target = scene
            .hit_test_point(point)
            .and_then(|node| self.part_at(node))
            .map(|(id, _)| id);
        self.hover(scene, target);
        dragged
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, scene: &mut Scene) -> Option<(RegionId, RegionPart)> {
        let released = self.release(scene)?;
        info!(
            region = released.0.0,
            part = ?released.1,
            "drag finished"
        );
        Some(released)
    }
}

#[cfg(test)]
mod tests {
    use trimline_assets::WaveformOptions;
    use trimline_region::{Interaction, Size};

    use super::*;

    fn editor(scene: &mut Scene) -> Editor<NodeId> {
        Editor::new(scene, EditorConfig::default()).unwrap()
    }

    fn sprite(width: f64, height: f64) -> Asset {
        Asset::new(width, height).unwrap()
    }

    #[test]
    fn sprites_open_with_configured_clip() {
        let mut scene = Scene::new(800.0, 600.0);
        let mut editor = editor(&mut scene);

        let wide = editor
            .add_asset(&mut scene, sprite(1_000.0, 100.0), &AssetKind::Sprite)
            .unwrap();
        let narrow = editor
            .add_asset(&mut scene, sprite(120.0, 100.0), &AssetKind::Sprite)
            .unwrap();

        assert_eq!(editor.region(wide).unwrap().region().clip().width(), 300.0);
        assert_eq!(editor.region(narrow).unwrap().region().clip().width(), 120.0);
        assert_eq!(
            editor.region(narrow).unwrap().region().position(),
            Point::new(60.0, 10.0)
        );
    }

    #[test]
    fn spawn_is_kept_inside_the_surface() {
        let mut scene = Scene::new(200.0, 100.0);
        let mut editor = editor(&mut scene);
        let id = editor
            .add_asset(
                &mut scene,
                sprite(150.0, 100.0),
                &AssetKind::Waveform(WaveformOptions::default()),
            )
            .unwrap();
        assert_eq!(
            editor.region(id).unwrap().region().position(),
            Point::new(10.0, 0.0)
        );
    }

    #[test]
    fn failed_load_sets_error_and_keeps_regions() {
        let mut scene = Scene::new(800.0, 600.0);
        let mut editor = editor(&mut scene);
        let id = editor
            .add_asset(&mut scene, sprite(300.0, 150.0), &AssetKind::Sprite)
            .unwrap();

        let result = editor.add_loaded(&mut scene, Err(AssetError::Empty), &AssetKind::Sprite);

        assert!(matches!(result, Err(EditorError::Asset(AssetError::Empty))));
        assert!(matches!(editor.status(), Status::Error(m) if m.starts_with("could not load")));
        assert_eq!(editor.regions().len(), 1);
        assert!(editor.press(&mut scene, id, RegionPart::Body, Point::new(20.0, 20.0)));
    }

    #[test]
    fn asset_narrower_than_a_region_is_rejected() {
        let mut scene = Scene::new(800.0, 600.0);
        let mut editor = editor(&mut scene);
        let result = editor.add_asset(&mut scene, sprite(12.0, 10.0), &AssetKind::Sprite);
        assert!(matches!(result, Err(EditorError::Config(_))));
        assert!(editor.regions().is_empty());
    }

    #[test]
    fn one_drag_at_a_time() {
        let mut scene = Scene::new(800.0, 600.0);
        let mut editor = editor(&mut scene);
        let a = editor
            .add_asset(&mut scene, sprite(100.0, 50.0), &AssetKind::Sprite)
            .unwrap();
        let b = editor
            .add_asset(&mut scene, sprite(100.0, 50.0), &AssetKind::Sprite)
            .unwrap();

        assert!(editor.press(&mut scene, a, RegionPart::Body, Point::new(20.0, 20.0)));
        assert!(!editor.press(&mut scene, b, RegionPart::Body, Point::new(80.0, 20.0)));
        assert_eq!(editor.region(b).unwrap().interaction(), Interaction::Idle);
    }

    #[test]
    fn drag_applies_pointer_offset_to_node_start() {
        let mut scene = Scene::new(800.0, 600.0);
        let mut editor = editor(&mut scene);
        let id = editor
            .add_asset(&mut scene, sprite(100.0, 50.0), &AssetKind::Sprite)
            .unwrap();

        editor.press(&mut scene, id, RegionPart::Body, Point::new(30.0, 30.0));
        let moved = editor.drag_to(&mut scene, Point::new(130.0, 80.0));

        assert_eq!(moved, Some(Point::new(110.0, 60.0)));
        assert_eq!(editor.release(&mut scene), Some((id, RegionPart::Body)));
        // Floor snapping on 200 px rows.
        assert_eq!(
            editor.region(id).unwrap().region().position(),
            Point::new(110.0, 0.0)
        );
        assert!(editor.drag().is_none());
    }

    #[test]
    fn regions_share_one_grid() {
        let mut scene = Scene::new(800.0, 600.0);
        let mut editor = editor(&mut scene);
        let a = editor
            .add_asset(&mut scene, sprite(100.0, 50.0), &AssetKind::Sprite)
            .unwrap();
        let b = editor
            .add_asset(&mut scene, sprite(100.0, 50.0), &AssetKind::Sprite)
            .unwrap();
        assert!(editor.shares_grid(a, b));
        assert_eq!(scene.extent(), Size::new(800.0, 600.0));
    }

    #[test]
    fn no_grid_without_row_height() {
        let mut scene = Scene::new(800.0, 600.0);
        let config = EditorConfig {
            row_height: None,
            ..EditorConfig::default()
        };
        let mut editor = Editor::new(&mut scene, config).unwrap();
        let a = editor
            .add_asset(&mut scene, sprite(100.0, 50.0), &AssetKind::Sprite)
            .unwrap();
        assert!(editor.snap().is_none());
        assert!(!editor.shares_grid(a, a));
    }
}
