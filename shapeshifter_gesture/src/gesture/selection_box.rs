// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;
use shapeshifter_event_state::PointerEvent;
use shapeshifter_event_state::drag::DragState;
use shapeshifter_scene::ShapeId;

use super::{Gesture, GestureContext};

/// What a rubber band selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxMode {
    /// Whole shapes.
    Normal,
    /// Segments of the given detail shape.
    Detail(ShapeId),
}

/// Rubber-band selection, started by a press on empty canvas.
///
/// The selection is updated live while dragging. With shift the rectangle
/// adds to what was selected at pointer-down; without, it replaces it. A
/// press released without dragging clears the selection (shapes in normal
/// mode, segments of the detail shape in detail mode) unless shift is held.
#[derive(Clone, Debug)]
pub struct SelectionBoxGesture {
    mode: BoxMode,
    extend: bool,
    // Selection at pointer-down, for shift-extend and cancel.
    base_shapes: Vec<ShapeId>,
    base_segments: Vec<u32>,
    drag: DragState,
}

impl SelectionBoxGesture {
    /// Creates a rubber band in `mode`.
    #[must_use]
    pub fn new(mode: BoxMode) -> Self {
        Self {
            mode,
            extend: false,
            base_shapes: Vec::new(),
            base_segments: Vec::new(),
            drag: DragState::default(),
        }
    }

    /// Returns what this rubber band selects.
    #[must_use]
    pub fn mode(&self) -> BoxMode {
        self.mode
    }
}

impl Gesture for SelectionBoxGesture {
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        self.extend = event.shift();
        match self.mode {
            BoxMode::Normal => self.base_shapes = cx.doc.selection.items().to_vec(),
            BoxMode::Detail(id) => self.base_segments = cx.doc.segments.selected(&id).to_vec(),
        }
        self.drag.start(cx.doc.to_world(event.position));
    }

    fn on_pointer_drag(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let world = cx.doc.to_world(event.position);
        let threshold = cx.world_tolerance(cx.config.drag_threshold_px);
        self.drag.update_with_threshold(world, threshold);
        if !self.drag.moved {
            return;
        }
        let Some(anchor) = self.drag.start_pos else {
            return;
        };

        let rect = Rect::from_points(anchor, world);
        cx.doc.marquee = Some(rect);
        // Without shift the pointer-down selection is dropped.
        let keep = if self.extend { usize::MAX } else { 0 };
        match self.mode {
            BoxMode::Normal => {
                let hits = cx.doc.scene.shapes_in_rect(rect);
                let base = self.base_shapes.iter().copied().take(keep);
                cx.doc.selection.replace_with(base.chain(hits));
            }
            BoxMode::Detail(id) => {
                let hits = cx.doc.scene.segments_in_rect(id, rect);
                let base = self.base_segments.iter().copied().take(keep);
                cx.doc.segments.replace(id, base.chain(hits));
            }
        }
    }

    fn on_pointer_up(&mut self, cx: &mut GestureContext<'_>, _event: &PointerEvent) {
        cx.doc.marquee = None;
        if !self.drag.moved && !self.extend {
            match self.mode {
                BoxMode::Normal => {
                    cx.doc.selection.clear();
                    cx.doc.segments.clear();
                }
                BoxMode::Detail(id) => cx.doc.segments.clear_shape(&id),
            }
        }
        self.drag.end();
    }

    fn cancel(&mut self, cx: &mut GestureContext<'_>) {
        cx.doc.marquee = None;
        if self.drag.moved {
            match self.mode {
                BoxMode::Normal => cx.doc.selection.replace_with(self.base_shapes.iter().copied()),
                BoxMode::Detail(id) => cx
                    .doc
                    .segments
                    .replace(id, self.base_segments.iter().copied()),
            }
        }
        self.drag.end();
    }
}
