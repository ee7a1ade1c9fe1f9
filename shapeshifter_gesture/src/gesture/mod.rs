// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture variants and the trait they share.
//!
//! Exactly one gesture is active at a time. The
//! [`GestureController`](crate::GestureController) picks it on pointer-down
//! and forwards every later pointer event to it until pointer-up, when
//! [`HoverGesture`] takes over again.

use shapeshifter_event_state::PointerEvent;

use crate::{Document, EventSink, GestureConfig};

mod detail;
mod hover;
mod oneshot;
mod rotate;
mod scale;
mod selection;
mod selection_box;

pub use detail::DetailSelectionGesture;
pub use hover::HoverGesture;
pub use oneshot::{DeselectOneGesture, SelectExclusiveGesture};
pub use rotate::RotateGesture;
pub use scale::ScaleGesture;
pub use selection::SelectionGesture;
pub use selection_box::{BoxMode, SelectionBoxGesture};

/// What a gesture works with while handling one pointer event.
pub struct GestureContext<'a> {
    /// The document being edited.
    pub doc: &'a mut Document,
    /// Active tunables.
    pub config: &'a GestureConfig,
    /// Where to report edits.
    pub sink: &'a mut dyn EventSink,
}

impl core::fmt::Debug for GestureContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GestureContext")
            .field("doc", &self.doc)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GestureContext<'_> {
    /// Converts a view-space tolerance to world units at the current zoom.
    pub(crate) fn world_tolerance(&self, pixels: f64) -> f64 {
        self.doc.viewport.world_tolerance(pixels)
    }
}

/// One pointer interaction.
///
/// Positions in [`PointerEvent`] are in view space; gestures convert them with
/// [`Document::to_world`]. Every method defaults to doing nothing.
pub trait Gesture {
    /// The pointer went down and this gesture was chosen for it.
    fn on_pointer_down(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let _ = (cx, event);
    }

    /// The pointer moved with the button held.
    fn on_pointer_drag(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let _ = (cx, event);
    }

    /// The pointer moved with no button held.
    fn on_pointer_move(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let _ = (cx, event);
    }

    /// The pointer was released.
    fn on_pointer_up(&mut self, cx: &mut GestureContext<'_>, event: &PointerEvent) {
        let _ = (cx, event);
    }

    /// The interaction was aborted; undo whatever it changed.
    fn cancel(&mut self, cx: &mut GestureContext<'_>) {
        let _ = cx;
    }
}

/// Which variant is active, without its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Idle, tracking the hovered shape.
    Hover,
    /// Selecting and moving whole shapes.
    Selection,
    /// Rubber-band selection.
    SelectionBox {
        /// Selecting segments of the detail shape rather than shapes.
        detail: bool,
    },
    /// Selecting and moving segments, handles, and curves of the detail shape.
    DetailSelection,
    /// Removing one shape from a multi-selection.
    DeselectOne,
    /// Selecting one shape and all of its segments.
    SelectExclusive,
    /// Scaling the selection by a transform-box handle.
    Scale,
    /// Rotating the selection by a transform-box handle.
    Rotate,
}

/// The active gesture with its state.
#[derive(Clone, Debug)]
pub enum ActiveGesture {
    /// See [`HoverGesture`].
    Hover(HoverGesture),
    /// See [`SelectionGesture`].
    Selection(SelectionGesture),
    /// See [`SelectionBoxGesture`].
    SelectionBox(SelectionBoxGesture),
    /// See [`DetailSelectionGesture`].
    DetailSelection(DetailSelectionGesture),
    /// See [`DeselectOneGesture`].
    DeselectOne(DeselectOneGesture),
    /// See [`SelectExclusiveGesture`].
    SelectExclusive(SelectExclusiveGesture),
    /// See [`ScaleGesture`].
    Scale(ScaleGesture),
    /// See [`RotateGesture`].
    Rotate(RotateGesture),
}

impl Default for ActiveGesture {
    fn default() -> Self {
        Self::Hover(HoverGesture::new(None))
    }
}

impl ActiveGesture {
    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Hover(_) => GestureKind::Hover,
            Self::Selection(_) => GestureKind::Selection,
            Self::SelectionBox(g) => GestureKind::SelectionBox {
                detail: matches!(g.mode(), BoxMode::Detail(_)),
            },
            Self::DetailSelection(_) => GestureKind::DetailSelection,
            Self::DeselectOne(_) => GestureKind::DeselectOne,
            Self::SelectExclusive(_) => GestureKind::SelectExclusive,
            Self::Scale(_) => GestureKind::Scale,
            Self::Rotate(_) => GestureKind::Rotate,
        }
    }

    /// Borrows the active variant as a [`Gesture`].
    pub fn as_gesture_mut(&mut self) -> &mut dyn Gesture {
        match self {
            Self::Hover(g) => g,
            Self::Selection(g) => g,
            Self::SelectionBox(g) => g,
            Self::DetailSelection(g) => g,
            Self::DeselectOne(g) => g,
            Self::SelectExclusive(g) => g,
            Self::Scale(g) => g,
            Self::Rotate(g) => g,
        }
    }
}
