// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gestures that do all their work on pointer-down.

use shapeshifter_event_state::PointerEvent;
use shapeshifter_scene::ShapeId;

use super::{Gesture, GestureContext};

/// Removes one shape from the selection (shift-press on a selected shape
/// while others are selected too).
#[derive(Clone, Debug)]
pub struct DeselectOneGesture {
    shape: ShapeId,
}

impl DeselectOneGesture {
    /// Creates the gesture for `shape`.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }
}

impl Gesture for DeselectOneGesture {
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, _event: &PointerEvent) {
        debug_assert!(
            cx.doc.selection.contains(&self.shape),
            "deselect needs a selected shape"
        );
        cx.doc.selection.remove(&self.shape);
        cx.doc.segments.clear_shape(&self.shape);
    }
}

/// Selects one shape and every one of its segments (the double-click that
/// enters detail mode).
#[derive(Clone, Debug)]
pub struct SelectExclusiveGesture {
    shape: ShapeId,
}

impl SelectExclusiveGesture {
    /// Creates the gesture for `shape`.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }
}

impl Gesture for SelectExclusiveGesture {
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, _event: &PointerEvent) {
        let Some(count) = cx.doc.scene.get(self.shape).map(|s| s.path.len()) else {
            log::warn!("select-exclusive on a removed shape {:?}", self.shape);
            return;
        };
        cx.doc.selection.select_only(self.shape);
        cx.doc.segments.clear();
        cx.doc.segments.select_all(self.shape, count);
    }
}
