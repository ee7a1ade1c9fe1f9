// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use shapeshifter_event_state::hover::HoverState;
use shapeshifter_scene::{Path, Scene, SceneError, ShapeId, TransformBox, Viewport};
use shapeshifter_selection::{Selection, SubSelection};

use crate::GestureConfig;

/// Everything a gesture reads and edits.
///
/// The host owns the document and lends it to the
/// [`GestureController`](crate::GestureController) for each pointer event.
/// Between events the host may change it freely; the controller drops
/// selected shapes that no longer exist on the next pointer-down.
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// The shapes.
    pub scene: Scene,
    /// Selected shapes.
    pub selection: Selection<ShapeId>,
    /// Selected segments, per shape.
    pub segments: SubSelection<ShapeId>,
    /// Mapping between world and view space.
    pub viewport: Viewport,
    /// Rubber-band rectangle in world space while a marquee drag is under way.
    pub marquee: Option<Rect>,
    pub(crate) hover: HoverState<ShapeId>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document showing `scene` with nothing selected.
    #[must_use]
    pub fn from_scene(scene: Scene) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    /// Returns the shape under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<ShapeId> {
        self.hover.current()
    }

    /// Returns the world bounds of the selected shapes.
    #[must_use]
    pub fn selection_bounds(&self) -> Option<Rect> {
        self.scene.union_bounds(self.selection.iter())
    }

    /// Returns the transform box around the selection, sized for the
    /// current zoom, or `None` when nothing is selected.
    #[must_use]
    pub fn transform_box(&self, config: &GestureConfig) -> Option<TransformBox> {
        self.selection_bounds().map(|bounds| {
            TransformBox::new(bounds)
                .with_rotate_offset(self.viewport.world_tolerance(config.rotate_handle_offset_px))
        })
    }

    /// Converts a view-space pointer position to world space.
    #[must_use]
    pub fn to_world(&self, view: Point) -> Point {
        self.viewport.view_to_world(view)
    }

    fn path_mut(&mut self, id: ShapeId) -> Result<&mut Path, SceneError> {
        self.scene
            .get_mut(id)
            .map(|shape| &mut shape.path)
            .ok_or(SceneError::StaleShape(id))
    }

    /// Reverses the direction of `id`. Selected segments stay selected.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] if `id` is not live.
    pub fn reverse_path(&mut self, id: ShapeId) -> Result<(), SceneError> {
        let path = self.path_mut(id)?;
        let len = segment_count(path);
        let closed = path.is_closed();
        path.reverse();
        self.segments.remap(id, |i| match i {
            i if i >= len => None,
            i if closed => Some((len - i) % len),
            i => Some(len - 1 - i),
        });
        Ok(())
    }

    /// Makes segment `first` the start of the closed path `id`. Selected
    /// segments stay selected.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`], [`SceneError::OpenPath`], or
    /// [`SceneError::SegmentOutOfRange`].
    pub fn set_first_segment(&mut self, id: ShapeId, first: u32) -> Result<(), SceneError> {
        let path = self.path_mut(id)?;
        let len = segment_count(path);
        path.set_first(first)?;
        self.segments.remap(id, |i| (i < len).then(|| (i + len - first) % len));
        Ok(())
    }

    /// Moves the start of the closed path `id` by `steps` segments. Selected
    /// segments stay selected.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] or [`SceneError::OpenPath`].
    pub fn shift_path_start(&mut self, id: ShapeId, steps: i32) -> Result<(), SceneError> {
        let path = self.path_mut(id)?;
        let len = segment_count(path);
        let first = path.shift_start(steps)?;
        self.segments.remap(id, |i| (i < len).then(|| (i + len - first) % len));
        Ok(())
    }

    /// Deletes the selected segments of `id` and returns how many went.
    ///
    /// A shape left without segments is removed from the scene.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] or [`SceneError::SegmentOutOfRange`].
    pub fn delete_selected_segments(&mut self, id: ShapeId) -> Result<usize, SceneError> {
        let indices = self.segments.selected(&id).to_vec();
        let path = self.path_mut(id)?;
        let removed = path.remove_segments(&indices)?;
        let emptied = path.is_empty();
        self.segments.clear_shape(&id);
        if emptied {
            log::debug!("deleting every segment removed {id:?}");
            self.scene.remove(id)?;
            self.prune_stale();
        }
        Ok(removed)
    }

    /// Splits curve `index` of `id` at `t` and returns the new segment.
    /// Selected segments after it are renumbered.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] or [`SceneError::SegmentOutOfRange`].
    pub fn split_curve(&mut self, id: ShapeId, index: u32, t: f64) -> Result<u32, SceneError> {
        let inserted = self.path_mut(id)?.split_curve(index, t)?;
        self.segments
            .remap(id, |i| Some(if i >= inserted { i + 1 } else { i }));
        Ok(inserted)
    }

    /// Drops selection, segment selection, and hover state for shapes that
    /// have been removed from the scene.
    pub fn prune_stale(&mut self) {
        let scene = &self.scene;
        self.selection.retain(|&id| scene.is_alive(id));
        self.segments.retain_shapes(|&id| scene.is_alive(id));
        if self.hover.current().is_some_and(|id| !scene.is_alive(id)) {
            self.hover.clear();
        }
    }
}

fn segment_count(path: &Path) -> u32 {
    u32::try_from(path.len()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeshifter_scene::{Path, Shape};

    #[test]
    fn prune_drops_removed_shapes() {
        let mut doc = Document::new();
        let a = doc
            .scene
            .insert(Shape::new(Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0))));
        let b = doc
            .scene
            .insert(Shape::new(Path::from_rect(Rect::new(20.0, 0.0, 30.0, 10.0))));
        doc.selection.replace_with([a, b]);
        doc.segments.select(a, 0);
        doc.hover.update(Some(a));

        doc.scene.remove(a).unwrap();
        doc.prune_stale();

        assert_eq!(doc.selection.items(), &[b]);
        assert!(doc.segments.is_empty());
        assert_eq!(doc.hovered(), None);
    }

    fn square(doc: &mut Document) -> ShapeId {
        doc.scene
            .insert(Shape::new(Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0))))
    }

    #[test]
    fn path_edits_carry_the_segment_selection() {
        let mut doc = Document::new();
        let a = square(&mut doc);
        doc.segments.replace(a, [1]);
        let corner = Point::new(10.0, 0.0);
        let selected_point = |doc: &Document| {
            let index = doc.segments.selected(&a)[0] as usize;
            doc.scene.get(a).unwrap().path.segments()[index].point
        };

        doc.reverse_path(a).unwrap();
        assert_eq!(doc.segments.selected(&a), &[3]);
        assert_eq!(selected_point(&doc), corner);

        doc.set_first_segment(a, 2).unwrap();
        assert_eq!(doc.segments.selected(&a), &[1]);
        assert_eq!(selected_point(&doc), corner);

        doc.shift_path_start(a, -1).unwrap();
        assert_eq!(selected_point(&doc), corner);

        let inserted = doc.split_curve(a, 0, 0.5).unwrap();
        assert_eq!(inserted, 1);
        assert_eq!(selected_point(&doc), corner);
    }

    #[test]
    fn deleting_selected_segments() {
        let mut doc = Document::new();
        let a = square(&mut doc);
        doc.selection.select_only(a);
        doc.segments.replace(a, [0, 2]);

        assert_eq!(doc.delete_selected_segments(a).unwrap(), 2);
        assert_eq!(doc.scene.get(a).unwrap().path.len(), 2);
        assert!(doc.segments.is_empty());

        doc.segments.select_all(a, 2);
        assert_eq!(doc.delete_selected_segments(a).unwrap(), 2);
        assert!(!doc.scene.is_alive(a));
        assert!(doc.selection.is_empty());
    }

    #[test]
    fn open_paths_have_no_start_to_move() {
        let mut doc = Document::new();
        let line = doc
            .scene
            .insert(Shape::new(Path::from_points([(0.0, 0.0), (5.0, 0.0)], false)));
        assert!(matches!(
            doc.shift_path_start(line, 1),
            Err(SceneError::OpenPath)
        ));
    }

    #[test]
    fn transform_box_follows_selection() {
        let mut doc = Document::new();
        let a = doc
            .scene
            .insert(Shape::new(Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0))));
        let config = GestureConfig::default();
        assert!(doc.transform_box(&config).is_none());

        doc.selection.select_only(a);
        let tb = doc.transform_box(&config).unwrap();
        assert_eq!(tb.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
