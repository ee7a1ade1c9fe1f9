// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Point};
use shapeshifter_event_state::PointerEvent;
use shapeshifter_scene::{BoxHandle, ShapeId};

use super::{Gesture, GestureContext};
use crate::GestureEvent;

/// Scales the selection by dragging a transform-box handle.
///
/// The fixed point is the handle opposite the dragged one, or the center of
/// the box with alt held at pointer-down. Edge handles scale along one axis.
/// With shift the larger of the two factors is applied to both axes.
#[derive(Clone, Debug)]
pub struct ScaleGesture {
    handle: BoxHandle,
    anchor: Point,
    start: Point,
    originals: Vec<(ShapeId, Affine)>,
    factors: Option<(f64, f64)>,
}

impl ScaleGesture {
    /// Creates the gesture for a press on `handle`.
    #[must_use]
    pub fn new(handle: BoxHandle) -> Self {
        Self {
            handle,
            anchor: Point::ZERO,
            start: Point::ZERO,
            originals: Vec::new(),
            factors: None,
        }
    }

    /// Returns the dragged handle.
    #[must_use]
    pub fn handle(&self) -> BoxHandle {
        self.handle
    }

    /// Returns the fixed point of the scale, in world space.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    fn factors_for(&self, world: Point, uniform: bool) -> (f64, f64) {
        let (scale_x, scale_y) = self.handle.axes();
        let from = self.start - self.anchor;
        let to = world - self.anchor;
        let sx = if scale_x { ratio(to.x, from.x) } else { 1.0 };
        let sy = if scale_y { ratio(to.y, from.y) } else { 1.0 };
        if !uniform {
            return (sx, sy);
        }
        match (scale_x, scale_y) {
            (true, false) => (sx, sx),
            (false, true) => (sy, sy),
            _ => {
                let s = if (sx - 1.0).abs() >= (sy - 1.0).abs() { sx } else { sy };
                (s, s)
            }
        }
    }

    fn apply(&self, cx: &mut GestureContext<'_>, sx: f64, sy: f64) {
        let about = Affine::translate(self.anchor.to_vec2())
            * Affine::scale_non_uniform(sx, sy)
            * Affine::translate(-self.anchor.to_vec2());
        for &(id, transform) in &self.originals {
            if let Err(err) = cx.doc.scene.set_transform(id, about * transform) {
                log::warn!("scale skipped a shape: {err}");
            }
        }
    }
}

/// Smallest factor a drag may apply. Past the anchor the sign flips the
/// selection instead of collapsing it.
const MIN_FACTOR: f64 = 0.01;

fn ratio(num: f64, den: f64) -> f64 {
    if den.abs() < 1e-9 {
        return 1.0;
    }
    let s = num / den;
    if s.abs() >= MIN_FACTOR {
        s
    } else if s < 0.0 {
        -MIN_FACTOR
    } else {
        MIN_FACTOR
    }
}

impl Gesture for ScaleGesture {
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        debug_assert!(
            !cx.doc.selection.is_empty(),
            "scale gesture needs a selection"
        );
        let Some(tb) = cx.doc.transform_box(cx.config) else {
            return;
        };
        self.anchor = if event.alt() {
            tb.bounds().center()
        } else {
            tb.handle_position(self.handle.opposite())
        };
        self.start = cx.doc.to_world(event.position);
        self.originals = cx
            .doc
            .selection
            .iter()
            .filter_map(|&id| cx.doc.scene.transform(id).map(|t| (id, t)))
            .collect();
    }

    fn on_pointer_drag(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        if self.originals.is_empty() {
            return;
        }
        let world = cx.doc.to_world(event.position);
        let (sx, sy) = self.factors_for(world, event.shift());
        self.factors = Some((sx, sy));
        self.apply(cx, sx, sy);
    }

    fn on_pointer_up(&mut self, cx: &mut GestureContext<'_>, _event: &PointerEvent) {
        if let Some((sx, sy)) = self.factors.take()
            && (sx, sy) != (1.0, 1.0)
        {
            cx.sink.record(GestureEvent::Scaled {
                shapes: self.originals.iter().map(|&(id, _)| id).collect(),
                sx,
                sy,
                anchor: self.anchor,
            });
        }
    }

    fn cancel(&mut self, cx: &mut GestureContext<'_>) {
        self.apply(cx, 1.0, 1.0);
        self.factors = None;
    }
}
