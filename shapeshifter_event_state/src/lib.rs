// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape Shifter Event State: pointer input and small interaction state machines.
//!
//! The editor's gesture layer is fed [`PointerEvent`]s: a view-space position,
//! the held [`Modifiers`], and a millisecond timestamp. On top of those this
//! crate provides three focused trackers:
//!
//! - [`click`]: counts consecutive presses on the same target to recognize
//!   double-clicks, with a configurable time window and radius.
//! - [`drag`]: remembers where a drag began and reports per-move and total
//!   offsets.
//! - [`hover`]: turns "what is under the pointer now" into enter/leave
//!   transitions.
//!
//! None of these know about shapes or hit testing. Callers resolve targets
//! themselves and hand the results in.
//!
//! ## Double-click recognition
//!
//! ```rust
//! use kurbo::Point;
//! use shapeshifter_event_state::click::{ClickConfig, ClickState};
//!
//! let mut clicks = ClickState::new(ClickConfig::default());
//!
//! assert_eq!(clicks.on_down(Some(42), Point::new(10.0, 10.0), 1_000), 1);
//! // Second press on the same target, close in space and time.
//! assert_eq!(clicks.on_down(Some(42), Point::new(11.0, 10.0), 1_200), 2);
//! // Too late: a fresh sequence starts.
//! assert_eq!(clicks.on_down(Some(42), Point::new(11.0, 10.0), 5_000), 1);
//! ```
//!
//! ## Drag offsets
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use shapeshifter_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0));
//! assert_eq!(drag.update(Point::new(15.0, 12.0)), Some(Vec2::new(5.0, 2.0)));
//! assert_eq!(drag.total_offset(Point::new(20.0, 10.0)), Some(Vec2::new(10.0, 0.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
pub mod hover;

use kurbo::Point;

bitflags::bitflags! {
    /// Keyboard modifiers held while a pointer event happened.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift: extend or toggle selections, constrain transforms.
        const SHIFT = 0b0000_0001;
        /// Alt/Option: clone on drag, transform about the center.
        const ALT   = 0b0000_0010;
        /// Meta/Command.
        const META  = 0b0000_0100;
    }
}

/// A pointer sample delivered to the gesture layer.
///
/// `position` is in view (device pixel) space; gestures convert it to world
/// space through the viewport. `time_ms` only has to be monotonic within a
/// session; it is used for double-click recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in view space.
    pub position: Point,
    /// Modifiers held at the time of the event.
    pub modifiers: Modifiers,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event without modifiers.
    #[must_use]
    pub fn new(position: impl Into<Point>, time_ms: u64) -> Self {
        Self {
            position: position.into(),
            modifiers: Modifiers::empty(),
            time_ms,
        }
    }

    /// Returns the event with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` if shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Returns `true` if alt is held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Returns `true` if meta is held.
    #[must_use]
    pub fn meta(&self) -> bool {
        self.modifiers.contains(Modifiers::META)
    }
}
