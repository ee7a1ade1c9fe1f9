// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Vec2};
use shapeshifter_event_state::PointerEvent;
use shapeshifter_event_state::drag::DragState;
use shapeshifter_scene::{HandleSide, HitFeature, Path, SceneError, ShapeHit, ShapeId};

use super::{Gesture, GestureContext};
use crate::GestureEvent;

#[derive(Clone, Debug)]
enum Edit {
    Segments(Vec<u32>),
    Handle { segment: u32, side: HandleSide },
    Whole,
}

/// Edits the detail-selected shape.
///
/// What the press landed on decides what a drag moves:
///
/// - a segment anchor: the selected segments. A plain press on an unselected
///   segment selects only it; shift toggles it.
/// - a control handle: that handle alone.
/// - a curve: the segments at both of its ends.
/// - the fill: the whole shape, with every segment selected.
///
/// Each drag step re-applies the total offset to the path captured at
/// pointer-down.
#[derive(Clone, Debug)]
pub struct DetailSelectionGesture {
    shape: ShapeId,
    hit: ShapeHit,
    edit: Edit,
    original: Option<(Path, Affine)>,
    drag: DragState,
    offset: Vec2,
}

impl DetailSelectionGesture {
    /// Creates the gesture for `hit`, a hit on the detail shape.
    #[must_use]
    pub fn new(hit: ShapeHit) -> Self {
        Self {
            shape: hit.shape,
            hit,
            edit: Edit::Whole,
            original: None,
            drag: DragState::default(),
            offset: Vec2::ZERO,
        }
    }

    /// Returns the shape being edited.
    #[must_use]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    fn restore(&self, cx: &mut GestureContext<'_>) -> Result<(), SceneError> {
        if let Some((path, transform)) = &self.original {
            cx.doc.scene.set_path(self.shape, path.clone())?;
            cx.doc.scene.set_transform(self.shape, *transform)?;
        }
        Ok(())
    }

    fn apply(&self, cx: &mut GestureContext<'_>, offset: Vec2) -> Result<(), SceneError> {
        self.restore(cx)?;
        let scene = &mut cx.doc.scene;
        match &self.edit {
            Edit::Segments(indices) => scene.translate_segments(self.shape, indices, offset),
            Edit::Handle { segment, side } => {
                scene.translate_handle(self.shape, *segment, *side, offset)
            }
            Edit::Whole => {
                let transform = self.original.as_ref().map_or(Affine::IDENTITY, |o| o.1);
                scene.set_transform(self.shape, Affine::translate(offset) * transform)
            }
        }
    }
}

impl Gesture for DetailSelectionGesture {
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let Some(shape) = cx.doc.scene.get(self.shape) else {
            log::warn!("detail gesture on a removed shape {:?}", self.shape);
            return;
        };
        let segment_count = shape.path.len();
        let curve_ends = match self.hit.feature {
            HitFeature::Curve { index, .. } => shape.path.curve_ends(index as usize),
            _ => None,
        };
        self.original = Some((shape.path.clone(), shape.transform));

        cx.doc.selection.add(self.shape);
        let segments = &mut cx.doc.segments;
        let shift = event.shift();
        self.edit = match self.hit.feature {
            HitFeature::Segment(index) => {
                if shift {
                    segments.toggle(self.shape, index);
                } else if !segments.contains(&self.shape, index) {
                    segments.replace(self.shape, [index]);
                }
                Edit::Segments(segments.selected(&self.shape).to_vec())
            }
            HitFeature::Handle { segment, side } => Edit::Handle { segment, side },
            HitFeature::Curve { .. } => {
                let ends = curve_ends
                    .into_iter()
                    .flat_map(|(a, b)| [a, b])
                    .filter_map(|i| u32::try_from(i).ok());
                if shift {
                    for index in ends {
                        segments.select(self.shape, index);
                    }
                } else {
                    segments.replace(self.shape, ends);
                }
                Edit::Segments(segments.selected(&self.shape).to_vec())
            }
            HitFeature::Fill => {
                segments.select_all(self.shape, segment_count);
                Edit::Whole
            }
        };
        log::trace!("detail press on {:?}: {:?}", self.hit.feature, self.edit);
        self.drag.start(cx.doc.to_world(event.position));
    }

    fn on_pointer_drag(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let world = cx.doc.to_world(event.position);
        let threshold = cx.world_tolerance(cx.config.drag_threshold_px);
        self.drag.update_with_threshold(world, threshold);
        if !self.drag.moved || self.original.is_none() {
            return;
        }
        let Some(offset) = self.drag.total_offset(world) else {
            return;
        };
        self.offset = offset;
        if let Err(err) = self.apply(cx, offset) {
            log::warn!("detail drag failed: {err}");
        }
    }

    fn on_pointer_up(&mut self, cx: &mut GestureContext<'_>, _event: &PointerEvent) {
        if self.drag.moved && self.offset != Vec2::ZERO {
            cx.sink.record(GestureEvent::PathEdited(self.shape));
        }
        self.drag.end();
    }

    fn cancel(&mut self, cx: &mut GestureContext<'_>) {
        if let Err(err) = self.restore(cx) {
            log::warn!("could not restore detail shape: {err}");
        }
        self.drag.end();
    }
}
