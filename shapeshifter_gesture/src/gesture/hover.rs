// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use shapeshifter_event_state::PointerEvent;
use shapeshifter_scene::{HitKinds, HitOptions, ShapeId};

use super::{Gesture, GestureContext};
use crate::GestureEvent;

/// The idle gesture: tracks which shape is under the pointer.
///
/// While a shape is in detail mode only that shape can be hovered, with the
/// finer detail tolerance.
#[derive(Clone, Debug)]
pub struct HoverGesture {
    scope: Option<ShapeId>,
}

impl HoverGesture {
    /// Creates a hover tracker, limited to `scope` if given.
    #[must_use]
    pub fn new(scope: Option<ShapeId>) -> Self {
        Self { scope }
    }
}

impl Gesture for HoverGesture {
    fn on_pointer_move(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let world = cx.doc.to_world(event.position);
        let options = match self.scope {
            Some(id) => {
                HitOptions::new(HitKinds::DETAIL, cx.world_tolerance(cx.config.detail_tolerance_px))
                    .only(id)
            }
            None => HitOptions::new(HitKinds::SHAPE, cx.world_tolerance(cx.config.hit_tolerance_px)),
        };
        let target = cx.doc.scene.hit_test(world, &options).map(|hit| hit.shape);
        let transition = cx.doc.hover.update(target);
        if !transition.is_empty() {
            log::trace!("hover {:?} -> {:?}", transition.left, transition.entered);
            cx.sink.record(GestureEvent::HoverChanged {
                left: transition.left,
                entered: transition.entered,
            });
        }
    }
}
