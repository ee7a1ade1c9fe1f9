// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point};
use shapeshifter_event_state::PointerEvent;
use shapeshifter_scene::{Corner, ShapeId};

use super::{Gesture, GestureContext};
use crate::GestureEvent;

/// Rotates the selection about the center of its transform box.
///
/// The angle is the sweep of the pointer around the center since the press.
/// With shift it snaps to multiples of
/// [`GestureConfig::rotate_snap_degrees`](crate::GestureConfig::rotate_snap_degrees).
#[derive(Clone, Debug)]
pub struct RotateGesture {
    corner: Corner,
    center: Point,
    start_angle: f64,
    originals: Vec<(ShapeId, Affine)>,
    angle: Option<f64>,
}

impl RotateGesture {
    /// Creates the gesture for a press on the rotation handle at `corner`.
    #[must_use]
    pub fn new(corner: Corner) -> Self {
        Self {
            corner,
            center: Point::ZERO,
            start_angle: 0.0,
            originals: Vec::new(),
            angle: None,
        }
    }

    /// Returns the corner whose handle was pressed.
    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// Returns the center of rotation, in world space.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    fn apply(&self, cx: &mut GestureContext<'_>, angle: f64) {
        let rotation = Affine::rotate_about(angle, self.center);
        for &(id, transform) in &self.originals {
            if let Err(err) = cx.doc.scene.set_transform(id, rotation * transform) {
                log::warn!("rotate skipped a shape: {err}");
            }
        }
    }
}

/// Rounds `angle` to the nearest multiple of `step` (radians). A non-positive
/// step leaves it alone.
fn snap(angle: f64, step: f64) -> f64 {
    if step <= 0.0 {
        angle
    } else {
        (angle / step).round() * step
    }
}

/// Brings the difference of two `atan2` angles into (-π, π].
fn wrap(angle: f64) -> f64 {
    if angle > PI {
        angle - TAU
    } else if angle <= -PI {
        angle + TAU
    } else {
        angle
    }
}

impl Gesture for RotateGesture {
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        debug_assert!(
            !cx.doc.selection.is_empty(),
            "rotate gesture needs a selection"
        );
        let Some(bounds) = cx.doc.selection_bounds() else {
            return;
        };
        self.center = bounds.center();
        self.start_angle = (cx.doc.to_world(event.position) - self.center).atan2();
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
        let current = (cx.doc.to_world(event.position) - self.center).atan2();
        let mut angle = wrap(current - self.start_angle);
        if event.shift() {
            angle = snap(angle, cx.config.rotate_snap_degrees.to_radians());
        }
        self.angle = Some(angle);
        self.apply(cx, angle);
    }

    fn on_pointer_up(&mut self, cx: &mut GestureContext<'_>, _event: &PointerEvent) {
        if let Some(angle) = self.angle.take()
            && angle != 0.0
        {
            cx.sink.record(GestureEvent::Rotated {
                shapes: self.originals.iter().map(|&(id, _)| id).collect(),
                angle,
                anchor: self.center,
            });
        }
    }

    fn cancel(&mut self, cx: &mut GestureContext<'_>) {
        self.apply(cx, 0.0);
        self.angle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{snap, wrap};
    use core::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn snaps_to_nearest_step() {
        let step = 15_f64.to_radians();
        assert!((snap(0.2, step) - step).abs() < 1e-12);
        assert!((snap(FRAC_PI_4 + 0.01, step) - FRAC_PI_4).abs() < 1e-12);
        assert_eq!(snap(0.2, 0.0), 0.2);
    }

    #[test]
    fn crossing_the_negative_x_axis_is_a_small_turn() {
        // From just above -x to just below it, clockwise on screen.
        let start = PI - 0.1;
        let current = -PI + 0.25;
        assert!((wrap(current - start) - 0.35).abs() < 1e-12);
        assert!((wrap(start - current) + 0.35).abs() < 1e-12);
        assert_eq!(wrap(0.5), 0.5);
        assert_eq!(wrap(-PI), PI);
    }
}
