// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests driving the trackers the way the gesture layer does.

use kurbo::{Point, Vec2};
use shapeshifter_event_state::click::{ClickConfig, ClickState};
use shapeshifter_event_state::drag::DragState;
use shapeshifter_event_state::{Modifiers, PointerEvent};

#[test]
fn modifier_queries() {
    let ev = PointerEvent::new((1.0, 2.0), 10).with_modifiers(Modifiers::SHIFT | Modifiers::ALT);
    assert!(ev.shift());
    assert!(ev.alt());
    assert!(!ev.meta());
    assert_eq!(ev.position, Point::new(1.0, 2.0));

    let plain = PointerEvent::new(Point::ZERO, 0);
    assert!(plain.modifiers.is_empty());
}

#[test]
fn press_drag_release_then_double_press() {
    let mut clicks = ClickState::new(ClickConfig::default());
    let mut drag = DragState::default();

    let down = PointerEvent::new((100.0, 100.0), 1_000);
    assert_eq!(clicks.on_down(Some(7_u32), down.position, down.time_ms), 1);
    drag.start(down.position);

    let moved = PointerEvent::new((110.0, 95.0), 1_050);
    assert_eq!(
        drag.update_with_threshold(moved.position, 3.0),
        Some(Vec2::new(10.0, -5.0))
    );
    assert!(drag.moved);
    drag.end();

    // A quick second press at the release point is too far from the first.
    assert_eq!(clicks.on_down(Some(7), moved.position, 1_100), 1);
    // A third press right on top of the second completes a double-click.
    assert_eq!(clicks.on_down(Some(7), Point::new(111.0, 95.0), 1_250), 2);
}
