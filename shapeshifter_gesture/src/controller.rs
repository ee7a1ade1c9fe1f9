// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use shapeshifter_event_state::PointerEvent;
use shapeshifter_event_state::click::ClickState;
use shapeshifter_scene::{Hit, HitKinds, HitOptions, ShapeId, TransformHit};

use crate::gesture::{
    ActiveGesture, BoxMode, DeselectOneGesture, DetailSelectionGesture, GestureContext,
    GestureKind, HoverGesture, RotateGesture, ScaleGesture, SelectExclusiveGesture,
    SelectionBoxGesture, SelectionGesture,
};
use crate::{Document, EventSink, GestureConfig, GestureEvent};

/// Routes pointer events to the right gesture.
///
/// On pointer-down the controller hit tests the document and picks a gesture:
///
/// | Detail shape | Hit                         | Modifiers / clicks            | Gesture                    |
/// |--------------|-----------------------------|-------------------------------|----------------------------|
/// | set          | a feature of that shape     |                               | `DetailSelection`          |
/// | set          | nothing on that shape       |                               | `SelectionBox` (detail)    |
/// | unset        | nothing                     |                               | `SelectionBox`             |
/// | unset        | transform-box scale handle  |                               | `Scale`                    |
/// | unset        | transform-box rotate handle |                               | `Rotate`                   |
/// | unset        | a shape                     | second click                  | `SelectExclusive`, enters detail mode |
/// | unset        | a selected shape            | shift, others selected too    | `DeselectOne`              |
/// | unset        | a shape                     | otherwise (alt duplicates)    | `Selection`                |
///
/// Drag, move, and up events go to whichever gesture is active. Pointer-up
/// makes hover tracking active again and leaves detail mode if the press
/// that started the interaction landed on nothing.
///
/// Edits made by gestures are reported to the sink `S`.
#[derive(Debug)]
pub struct GestureController<S = ()> {
    config: GestureConfig,
    active: ActiveGesture,
    detail: Option<ShapeId>,
    down_hit_nothing: bool,
    clicks: ClickState<ShapeId>,
    sink: S,
}

impl GestureController<()> {
    /// Creates a controller that discards gesture events.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self::with_sink(config, ())
    }
}

impl Default for GestureController<()> {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl<S: EventSink> GestureController<S> {
    /// Creates a controller reporting to `sink`.
    pub fn with_sink(config: GestureConfig, sink: S) -> Self {
        Self {
            clicks: ClickState::new(config.click_config()),
            config,
            active: ActiveGesture::default(),
            detail: None,
            down_hit_nothing: false,
            sink,
        }
    }

    /// Returns the active tunables.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the tunables. Takes effect from the next event.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.clicks.set_config(config.click_config());
        self.config = config;
    }

    /// Returns the event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the event sink mutably, e.g. to drain collected events.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the controller and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns which gesture is active.
    #[must_use]
    pub fn active_kind(&self) -> GestureKind {
        self.active.kind()
    }

    /// Returns the active gesture.
    #[must_use]
    pub fn active(&self) -> &ActiveGesture {
        &self.active
    }

    /// Returns the shape in detail mode, if any.
    #[must_use]
    pub fn detail_shape(&self) -> Option<ShapeId> {
        self.detail
    }

    /// Puts `shape` in detail mode (or leaves detail mode with `None`).
    ///
    /// Ids that are not alive in `doc` are ignored and leave detail mode.
    pub fn set_detail_shape(&mut self, doc: &Document, shape: Option<ShapeId>) {
        let shape = shape.filter(|&id| doc.scene.is_alive(id));
        if shape == self.detail {
            return;
        }
        if let Some(old) = self.detail.take() {
            self.sink.record(GestureEvent::DetailExited(old));
        }
        if let Some(new) = shape {
            self.sink.record(GestureEvent::DetailEntered(new));
        }
        log::debug!("detail shape {:?}", shape);
        self.detail = shape;
        if matches!(self.active, ActiveGesture::Hover(_)) {
            self.active = ActiveGesture::Hover(HoverGesture::new(self.detail));
        }
    }

    /// Leaves detail mode.
    pub fn exit_detail(&mut self, doc: &Document) {
        self.set_detail_shape(doc, None);
    }

    /// Aborts the active gesture, rolling back its edits, and returns to
    /// hover tracking. Does nothing while hovering.
    pub fn cancel(&mut self, doc: &mut Document) {
        if matches!(self.active, ActiveGesture::Hover(_)) {
            return;
        }
        let kind = self.active.kind();
        let mut cx = GestureContext {
            doc,
            config: &self.config,
            sink: &mut self.sink,
        };
        self.active.as_gesture_mut().cancel(&mut cx);
        log::debug!("cancelled {kind:?}");
        self.sink.record(GestureEvent::Cancelled(kind));
        self.down_hit_nothing = false;
        self.active = ActiveGesture::Hover(HoverGesture::new(self.detail));
    }

    /// Handles a press: picks the gesture for it and lets it begin.
    pub fn on_pointer_down(&mut self, doc: &mut Document, event: &PointerEvent) {
        doc.prune_stale();
        if let Some(id) = self.detail
            && !doc.scene.is_alive(id)
        {
            log::warn!("detail shape {id:?} was removed");
            self.detail = None;
            self.sink.record(GestureEvent::DetailExited(id));
        }

        let gesture = self.choose(doc, event);
        let kind = gesture.kind();
        log::debug!("pointer down at {:?}: {kind:?}", event.position);
        self.sink.record(GestureEvent::Activated(kind));
        self.active = gesture;

        let mut cx = GestureContext {
            doc,
            config: &self.config,
            sink: &mut self.sink,
        };
        self.active.as_gesture_mut().on_pointer_down(&mut cx, event);
    }

    /// Forwards a drag to the active gesture.
    pub fn on_pointer_drag(&mut self, doc: &mut Document, event: &PointerEvent) {
        let mut cx = GestureContext {
            doc,
            config: &self.config,
            sink: &mut self.sink,
        };
        self.active.as_gesture_mut().on_pointer_drag(&mut cx, event);
    }

    /// Forwards a hover move to the active gesture.
    pub fn on_pointer_move(&mut self, doc: &mut Document, event: &PointerEvent) {
        let mut cx = GestureContext {
            doc,
            config: &self.config,
            sink: &mut self.sink,
        };
        self.active.as_gesture_mut().on_pointer_move(&mut cx, event);
    }

    /// Forwards a release to the active gesture, then returns to hover
    /// tracking.
    pub fn on_pointer_up(&mut self, doc: &mut Document, event: &PointerEvent) {
        let mut cx = GestureContext {
            doc,
            config: &self.config,
            sink: &mut self.sink,
        };
        self.active.as_gesture_mut().on_pointer_up(&mut cx, event);

        if self.down_hit_nothing
            && let Some(id) = self.detail.take()
        {
            log::debug!("left detail mode for {id:?}");
            self.sink.record(GestureEvent::DetailExited(id));
        }
        self.down_hit_nothing = false;
        self.active = ActiveGesture::Hover(HoverGesture::new(self.detail));
    }

    fn choose(&mut self, doc: &Document, event: &PointerEvent) -> ActiveGesture {
        let world = doc.to_world(event.position);

        if let Some(detail) = self.detail {
            self.clicks.reset();
            let tolerance = doc.viewport.world_tolerance(self.config.detail_tolerance_px);
            let options = HitOptions::new(HitKinds::DETAIL, tolerance).only(detail);
            let hit = doc.scene.hit_test(world, &options);
            self.down_hit_nothing = hit.is_none();
            return match hit {
                Some(hit) => ActiveGesture::DetailSelection(DetailSelectionGesture::new(hit)),
                None => ActiveGesture::SelectionBox(SelectionBoxGesture::new(BoxMode::Detail(
                    detail,
                ))),
            };
        }

        let tolerance = doc.viewport.world_tolerance(self.config.hit_tolerance_px);
        let options = HitOptions::new(HitKinds::SHAPE, tolerance);
        let transform_box = doc.transform_box(&self.config);
        let hit = doc
            .scene
            .hit_test_with_box(world, &options, transform_box.as_ref());
        self.down_hit_nothing = hit.is_none();

        let target = hit.as_ref().and_then(Hit::shape).map(|h| h.shape);
        let clicks = self.clicks.on_down(target, event.position, event.time_ms);

        match hit {
            None => ActiveGesture::SelectionBox(SelectionBoxGesture::new(BoxMode::Normal)),
            Some(Hit::Transform(TransformHit::Scale(handle))) => {
                ActiveGesture::Scale(ScaleGesture::new(handle))
            }
            Some(Hit::Transform(TransformHit::Rotate(corner))) => {
                ActiveGesture::Rotate(RotateGesture::new(corner))
            }
            Some(Hit::Shape(hit)) if clicks >= 2 => {
                self.clicks.reset();
                log::debug!("double click entered detail mode for {:?}", hit.shape);
                self.detail = Some(hit.shape);
                self.sink.record(GestureEvent::DetailEntered(hit.shape));
                ActiveGesture::SelectExclusive(SelectExclusiveGesture::new(hit.shape))
            }
            Some(Hit::Shape(hit))
                if event.shift()
                    && doc.selection.contains(&hit.shape)
                    && doc.selection.len() > 1 =>
            {
                ActiveGesture::DeselectOne(DeselectOneGesture::new(hit.shape))
            }
            Some(Hit::Shape(hit)) => {
                ActiveGesture::Selection(SelectionGesture::new(hit.shape, event.alt()))
            }
        }
    }
}
