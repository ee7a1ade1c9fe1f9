// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: where a drag started, where it was last seen, and whether it
//! has travelled far enough to count as a drag rather than a click.
//!
//! Gestures that transform shapes apply [`DragState::total_offset`] to the
//! state captured at pointer-down, never the per-move delta, so rounding does
//! not accumulate over a long drag.

use kurbo::{Point, Vec2};

/// Tracks one drag, in whatever coordinate space the caller feeds it.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the drag started.
    pub start_pos: Option<Point>,
    /// Position of the latest update.
    pub last_pos: Option<Point>,
    /// Set once the pointer has left the threshold radius around the start.
    pub moved: bool,
}

impl DragState {
    /// Starts a new drag at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.moved = false;
    }

    /// Records `pos` and returns the delta since the previous update.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Like [`DragState::update`], and also latches [`DragState::moved`] once
    /// `pos` is farther than `threshold` from the start.
    pub fn update_with_threshold(&mut self, pos: Point, threshold: f64) -> Option<Vec2> {
        if let Some(start) = self.start_pos
            && (pos - start).hypot() > threshold
        {
            self.moved = true;
        }
        self.update(pos)
    }

    /// Returns the offset from the drag start to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the drag and resets all state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
