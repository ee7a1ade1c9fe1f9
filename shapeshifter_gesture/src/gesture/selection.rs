// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Vec2};
use shapeshifter_event_state::PointerEvent;
use shapeshifter_event_state::drag::DragState;
use shapeshifter_scene::ShapeId;

use super::{Gesture, GestureContext};
use crate::GestureEvent;

/// Selects the pressed shape and drags the selection around.
///
/// - A plain press on an unselected shape selects only it.
/// - A press on a shape that is already selected keeps the selection, so a
///   group can be dragged by any of its members.
/// - With shift the shape is added to the selection.
/// - With alt the shape is duplicated first and the copy is dragged.
///
/// Dragging translates every selected shape by the offset from the press,
/// applied to the transforms captured at pointer-down.
#[derive(Clone, Debug)]
pub struct SelectionGesture {
    target: ShapeId,
    duplicate: bool,
    clone: Option<ShapeId>,
    previous: Vec<ShapeId>,
    originals: Vec<(ShapeId, Affine)>,
    drag: DragState,
    offset: Vec2,
}

impl SelectionGesture {
    /// Creates the gesture for a press on `target`.
    #[must_use]
    pub fn new(target: ShapeId, duplicate: bool) -> Self {
        Self {
            target,
            duplicate,
            clone: None,
            previous: Vec::new(),
            originals: Vec::new(),
            drag: DragState::default(),
            offset: Vec2::ZERO,
        }
    }

    /// Returns the shape being dragged: the copy for an alt-drag.
    #[must_use]
    pub fn target(&self) -> ShapeId {
        self.clone.unwrap_or(self.target)
    }

    fn apply(&self, cx: &mut GestureContext<'_>, offset: Vec2) {
        let translate = Affine::translate(offset);
        for &(id, transform) in &self.originals {
            if let Err(err) = cx.doc.scene.set_transform(id, translate * transform) {
                log::warn!("selection drag skipped a shape: {err}");
            }
        }
    }
}

impl Gesture for SelectionGesture {
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        debug_assert!(
            cx.doc.scene.is_alive(self.target),
            "selection gesture needs a live shape"
        );
        self.previous = cx.doc.selection.items().to_vec();

        if self.duplicate {
            match cx.doc.scene.clone_shape(self.target) {
                Ok(clone) => {
                    log::debug!("alt-drag duplicated {:?} as {clone:?}", self.target);
                    cx.sink.record(GestureEvent::Cloned {
                        source: self.target,
                        clone,
                    });
                    self.clone = Some(clone);
                }
                Err(err) => log::warn!("could not duplicate shape: {err}"),
            }
        }

        let target = self.target();
        let selection = &mut cx.doc.selection;
        if event.shift() {
            selection.add(target);
        } else if self.clone.is_some() || !selection.contains(&target) {
            selection.select_only(target);
            cx.doc.segments.clear();
        } else {
            // Keep the group, but make the pressed shape primary.
            selection.add(target);
        }

        self.originals = cx
            .doc
            .selection
            .iter()
            .filter_map(|&id| cx.doc.scene.transform(id).map(|t| (id, t)))
            .collect();
        self.drag.start(cx.doc.to_world(event.position));
    }

    fn on_pointer_drag(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let world = cx.doc.to_world(event.position);
        let threshold = cx.world_tolerance(cx.config.drag_threshold_px);
        self.drag.update_with_threshold(world, threshold);
        if !self.drag.moved {
            return;
        }
        let Some(offset) = self.drag.total_offset(world) else {
            return;
        };
        self.offset = offset;
        self.apply(cx, offset);
    }

    fn on_pointer_up(&mut self, cx: &mut GestureContext<'_>, _event: &PointerEvent) {
        if self.drag.moved && self.offset != Vec2::ZERO {
            cx.sink.record(GestureEvent::Translated {
                shapes: self.originals.iter().map(|&(id, _)| id).collect(),
                offset: self.offset,
            });
        }
        self.drag.end();
    }

    fn cancel(&mut self, cx: &mut GestureContext<'_>) {
        if let Some(clone) = self.clone.take() {
            self.originals.retain(|&(id, _)| id != clone);
            if let Err(err) = cx.doc.scene.remove(clone) {
                log::warn!("could not remove duplicate: {err}");
            }
        }
        self.apply(cx, Vec2::ZERO);
        cx.doc.selection.replace_with(self.previous.iter().copied());
        cx.doc.prune_stale();
        self.drag.end();
    }
}
