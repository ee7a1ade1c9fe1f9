// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Line, PathSeg, Point, Rect, Shape as _, Vec2};

use crate::error::SceneError;
use crate::hit::{Hit, HitOptions, ShapeHit, hit_shape};
use crate::path::Path;
use crate::shape::Shape;
use crate::transform_box::TransformBox;
use crate::types::{HandleSide, ShapeId};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    shape: Option<Shape>,
}

/// The shapes of a document, in paint order.
///
/// Shapes live in a slot arena addressed by generational [`ShapeId`]s. The
/// scene is the only owner of shape data; everything else refers to shapes
/// by id and must tolerate ids going stale.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    /// Live ids, bottom to top.
    order: Vec<ShapeId>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the scene has no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the live ids, bottom to top.
    #[must_use]
    pub fn ids(&self) -> &[ShapeId] {
        &self.order
    }

    /// Returns `true` if `id` refers to a live shape.
    #[must_use]
    pub fn is_alive(&self, id: ShapeId) -> bool {
        self.slots
            .get(id.idx())
            .is_some_and(|s| s.generation == id.1 && s.shape.is_some())
    }

    /// Returns the shape behind `id`, if live.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.slots
            .get(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.shape.as_ref())
    }

    /// Returns the shape behind `id` mutably, if live.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.slots
            .get_mut(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.shape.as_mut())
    }

    fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape, SceneError> {
        self.get_mut(id).ok_or(SceneError::StaleShape(id))
    }

    fn alloc(&mut self, shape: Shape) -> ShapeId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.shape = Some(shape);
            ShapeId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).expect("too many shapes for u32 slot index");
            self.slots.push(Slot {
                generation: 1,
                shape: Some(shape),
            });
            ShapeId::new(idx, 1)
        }
    }

    /// Adds `shape` on top of the scene.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = self.alloc(shape);
        self.order.push(id);
        log::trace!("inserted shape {id:?}");
        id
    }

    /// Adds `shape` directly above `anchor` in paint order.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] if `anchor` is not live.
    pub fn insert_above(&mut self, anchor: ShapeId, shape: Shape) -> Result<ShapeId, SceneError> {
        let pos = self
            .order
            .iter()
            .position(|&id| id == anchor)
            .ok_or(SceneError::StaleShape(anchor))?;
        let id = self.alloc(shape);
        self.order.insert(pos + 1, id);
        log::trace!("inserted shape {id:?} above {anchor:?}");
        Ok(id)
    }

    /// Duplicates `id` and places the copy directly above it.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] if `id` is not live.
    pub fn clone_shape(&mut self, id: ShapeId) -> Result<ShapeId, SceneError> {
        let copy = self.get(id).ok_or(SceneError::StaleShape(id))?.clone();
        self.insert_above(id, copy)
    }

    /// Removes a shape and returns it.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] if `id` is not live.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, SceneError> {
        let shape = self
            .slots
            .get_mut(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.shape.take())
            .ok_or(SceneError::StaleShape(id))?;
        self.order.retain(|&o| o != id);
        self.free.push(id.0);
        log::trace!("removed shape {id:?}");
        Ok(shape)
    }

    /// Returns the local-to-world transform of `id`.
    #[must_use]
    pub fn transform(&self, id: ShapeId) -> Option<Affine> {
        self.get(id).map(|s| s.transform)
    }

    /// Replaces the local-to-world transform of `id`.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] if `id` is not live.
    pub fn set_transform(&mut self, id: ShapeId, transform: Affine) -> Result<(), SceneError> {
        self.shape_mut(id)?.transform = transform;
        Ok(())
    }

    /// Replaces the geometry of `id`.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] if `id` is not live.
    pub fn set_path(&mut self, id: ShapeId, path: Path) -> Result<(), SceneError> {
        self.shape_mut(id)?.path = path;
        Ok(())
    }

    /// Moves segment anchors of `id` by a world-space `delta`.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] or [`SceneError::SegmentOutOfRange`].
    pub fn translate_segments(
        &mut self,
        id: ShapeId,
        indices: &[u32],
        delta: Vec2,
    ) -> Result<(), SceneError> {
        let shape = self.shape_mut(id)?;
        let local = local_delta(shape.transform, delta);
        shape.path.translate_segments(indices, local)
    }

    /// Moves one control handle of `id` by a world-space `delta`.
    ///
    /// # Errors
    ///
    /// [`SceneError::StaleShape`] or [`SceneError::SegmentOutOfRange`].
    pub fn translate_handle(
        &mut self,
        id: ShapeId,
        index: u32,
        side: HandleSide,
        delta: Vec2,
    ) -> Result<(), SceneError> {
        let shape = self.shape_mut(id)?;
        let local = local_delta(shape.transform, delta);
        shape.path.translate_handle(index, side, local)
    }

    /// Returns the world bounds of `id`.
    #[must_use]
    pub fn bounds(&self, id: ShapeId) -> Option<Rect> {
        self.get(id).map(Shape::world_bounds)
    }

    /// Returns the union of the world bounds of the live shapes among `ids`.
    pub fn union_bounds<'a>(&self, ids: impl IntoIterator<Item = &'a ShapeId>) -> Option<Rect> {
        ids.into_iter()
            .filter_map(|&id| self.bounds(id))
            .reduce(|a, b| a.union(b))
    }

    /// Returns the topmost shape feature under `pt` (world space).
    #[must_use]
    pub fn hit_test(&self, pt: Point, options: &HitOptions) -> Option<ShapeHit> {
        if let Some(only) = options.only {
            return self
                .get(only)
                .and_then(|shape| hit_shape(only, shape, pt, options));
        }
        self.order.iter().rev().find_map(|&id| {
            self.get(id)
                .and_then(|shape| hit_shape(id, shape, pt, options))
        })
    }

    /// Like [`Scene::hit_test`], but the handles of `transform_box` are tested
    /// first, with the same tolerance.
    #[must_use]
    pub fn hit_test_with_box(
        &self,
        pt: Point,
        options: &HitOptions,
        transform_box: Option<&TransformBox>,
    ) -> Option<Hit> {
        transform_box
            .and_then(|tb| tb.hit_test(pt, options.tolerance))
            .map(Hit::Transform)
            .or_else(|| self.hit_test(pt, options).map(Hit::Shape))
    }

    /// Returns the shapes touched by `rect` (world space), bottom to top.
    ///
    /// A shape is touched if one of its anchors lies in the rectangle, one of
    /// its curves crosses the rectangle's edges, or the rectangle lies inside
    /// its fill.
    #[must_use]
    pub fn shapes_in_rect(&self, rect: Rect) -> Vec<ShapeId> {
        let rect = rect.abs();
        self.order
            .iter()
            .copied()
            .filter(|&id| self.get(id).is_some_and(|s| shape_touches_rect(s, rect)))
            .collect()
    }

    /// Returns the segment indices of `id` whose anchors lie in `rect` (world space).
    #[must_use]
    pub fn segments_in_rect(&self, id: ShapeId, rect: Rect) -> Vec<u32> {
        let rect = rect.abs();
        let Some(shape) = self.get(id) else {
            return Vec::new();
        };
        shape
            .path
            .segments()
            .iter()
            .enumerate()
            .filter(|(_, s)| contains_inclusive(rect, shape.transform * s.point))
            .filter_map(|(i, _)| u32::try_from(i).ok())
            .collect()
    }
}

/// Maps a world-space displacement into shape-local space.
fn local_delta(transform: Affine, delta: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = transform.inverse().as_coeffs();
    Vec2::new(a * delta.x + c * delta.y, b * delta.x + d * delta.y)
}

fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

fn shape_touches_rect(shape: &Shape, rect: Rect) -> bool {
    if !overlaps(shape.world_bounds(), rect) {
        return false;
    }
    let t = shape.transform;
    if shape
        .path
        .segments()
        .iter()
        .any(|s| contains_inclusive(rect, t * s.point))
    {
        return true;
    }
    let edges = [
        Line::new((rect.x0, rect.y0), (rect.x1, rect.y0)),
        Line::new((rect.x1, rect.y0), (rect.x1, rect.y1)),
        Line::new((rect.x1, rect.y1), (rect.x0, rect.y1)),
        Line::new((rect.x0, rect.y1), (rect.x0, rect.y0)),
    ];
    let crosses = shape.path.curves().any(|c| {
        let seg = PathSeg::Cubic(t * c);
        edges.iter().any(|&e| !seg.intersect_line(e).is_empty())
    });
    if crosses {
        return true;
    }
    shape.filled && shape.path.is_closed() && shape.world_outline().contains(rect.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit::HitFeature;
    use crate::types::HitKinds;

    fn square(x: f64, y: f64, size: f64) -> Shape {
        Shape::new(Path::from_rect(Rect::new(x, y, x + size, y + size)))
    }

    #[test]
    fn stale_ids_do_not_alias_reused_slots() {
        let mut scene = Scene::new();
        let a = scene.insert(square(0.0, 0.0, 10.0));
        scene.remove(a).unwrap();
        let b = scene.insert(square(50.0, 50.0, 10.0));

        assert_eq!(a.0, b.0);
        assert!(!scene.is_alive(a));
        assert!(scene.get(a).is_none());
        assert!(scene.is_alive(b));
        assert!(matches!(scene.remove(a), Err(SceneError::StaleShape(id)) if id == a));
    }

    #[test]
    fn topmost_shape_wins() {
        let mut scene = Scene::new();
        let bottom = scene.insert(square(0.0, 0.0, 100.0));
        let top = scene.insert(square(25.0, 25.0, 50.0));
        let opts = HitOptions::new(HitKinds::SHAPE, 2.0);

        let hit = scene.hit_test(Point::new(50.0, 50.0), &opts).unwrap();
        assert_eq!(hit.shape, top);

        let only = scene
            .hit_test(Point::new(50.0, 50.0), &opts.only(bottom))
            .unwrap();
        assert_eq!(only.shape, bottom);
        assert_eq!(only.feature, HitFeature::Fill);
    }

    #[test]
    fn clone_lands_directly_above() {
        let mut scene = Scene::new();
        let a = scene.insert(square(0.0, 0.0, 10.0));
        let b = scene.insert(square(20.0, 0.0, 10.0));
        let copy = scene.clone_shape(a).unwrap();

        assert_eq!(scene.ids(), &[a, copy, b]);
        assert_eq!(scene.get(copy), scene.get(a));
    }

    #[test]
    fn marquee_touch_rules() {
        let mut scene = Scene::new();
        let corner_inside = scene.insert(square(0.0, 0.0, 10.0));
        // A tall sliver whose vertical edges cross the marquee with no anchor inside.
        let edge_crossing = scene.insert(
            Shape::new(Path::from_rect(Rect::new(40.0, -50.0, 45.0, 100.0))).with_fill(false),
        );
        let around = scene.insert(square(200.0, 200.0, 100.0));
        let outside = scene.insert(square(500.0, 500.0, 10.0));

        let touched = scene.shapes_in_rect(Rect::new(5.0, 5.0, 50.0, 20.0));
        assert_eq!(touched, [corner_inside, edge_crossing]);

        let touched = scene.shapes_in_rect(Rect::new(240.0, 240.0, 260.0, 260.0));
        assert_eq!(touched, [around]);
        assert!(!touched.contains(&outside));
    }

    #[test]
    fn segment_edits_follow_the_transform() {
        let mut scene = Scene::new();
        let id = scene.insert(square(0.0, 0.0, 10.0).with_transform(Affine::scale(2.0)));

        scene
            .translate_segments(id, &[0], Vec2::new(4.0, 0.0))
            .unwrap();
        assert_eq!(
            scene.get(id).unwrap().path.segments()[0].point,
            Point::new(2.0, 0.0)
        );
        assert_eq!(scene.segments_in_rect(id, Rect::new(3.0, -1.0, 5.0, 1.0)), [0]);
    }
}
