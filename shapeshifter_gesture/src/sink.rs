// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound notifications from gestures.
//!
//! Gestures edit the [`Document`](crate::Document) directly. Anything outside
//! it that wants to hear about those edits (undo history, analytics, a status
//! bar) is handed the controller as an [`EventSink`].

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use shapeshifter_scene::ShapeId;

use crate::gesture::GestureKind;

/// Something a gesture did.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// A gesture became active on pointer-down.
    Activated(GestureKind),
    /// The active gesture was aborted and its edits rolled back.
    Cancelled(GestureKind),
    /// The hovered shape changed.
    HoverChanged {
        /// Shape no longer hovered.
        left: Option<ShapeId>,
        /// Shape now hovered.
        entered: Option<ShapeId>,
    },
    /// A shape entered detail editing.
    DetailEntered(ShapeId),
    /// Detail editing ended for a shape.
    DetailExited(ShapeId),
    /// A shape was duplicated for an alt-drag.
    Cloned {
        /// The original shape.
        source: ShapeId,
        /// The new copy.
        clone: ShapeId,
    },
    /// Shapes were moved.
    Translated {
        /// The moved shapes.
        shapes: Vec<ShapeId>,
        /// World-space offset.
        offset: Vec2,
    },
    /// Shapes were scaled.
    Scaled {
        /// The scaled shapes.
        shapes: Vec<ShapeId>,
        /// Horizontal factor.
        sx: f64,
        /// Vertical factor.
        sy: f64,
        /// World-space fixed point.
        anchor: Point,
    },
    /// Shapes were rotated.
    Rotated {
        /// The rotated shapes.
        shapes: Vec<ShapeId>,
        /// Angle in radians.
        angle: f64,
        /// World-space fixed point.
        anchor: Point,
    },
    /// The geometry of a shape was edited in detail mode.
    PathEdited(ShapeId),
}

/// Receives [`GestureEvent`]s.
pub trait EventSink {
    /// Called once per event, in order.
    fn record(&mut self, event: GestureEvent);
}

/// Discards everything.
impl EventSink for () {
    fn record(&mut self, _event: GestureEvent) {}
}

/// Collects events, mostly for tests.
impl EventSink for Vec<GestureEvent> {
    fn record(&mut self, event: GestureEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: GestureEvent) {
        (**self).record(event);
    }
}
