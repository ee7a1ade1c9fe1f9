// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape Shifter Gesture: pointer gesture dispatch for a vector path editor.
//!
//! A [`GestureController`] turns raw pointer-down, drag, move, and up events
//! into editing gestures on a [`Document`]: selecting and dragging shapes,
//! rubber-band selection, editing the segments and handles of one shape in
//! "detail" mode, and scaling or rotating the selection by its transform box.
//!
//! One gesture is active at a time. Pointer-down hit tests the document and
//! installs the matching variant of [`ActiveGesture`]; every following event
//! goes to it until pointer-up, after which hover tracking takes over again.
//! See [`GestureController`] for the decision table.
//!
//! Gestures edit the document in place and report what they did to an
//! [`EventSink`], the hook for undo history or analytics.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use shapeshifter_event_state::PointerEvent;
//! use shapeshifter_gesture::{Document, GestureConfig, GestureController, GestureEvent, GestureKind};
//! use shapeshifter_scene::{Path, Shape};
//!
//! let mut doc = Document::new();
//! let square = doc
//!     .scene
//!     .insert(Shape::new(Path::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0))));
//!
//! let mut controller = GestureController::with_sink(GestureConfig::default(), Vec::new());
//!
//! // Press inside the square and drag it 20 units right.
//! controller.on_pointer_down(&mut doc, &PointerEvent::new((50.0, 50.0), 0));
//! assert_eq!(controller.active_kind(), GestureKind::Selection);
//! controller.on_pointer_drag(&mut doc, &PointerEvent::new((70.0, 50.0), 16));
//! controller.on_pointer_up(&mut doc, &PointerEvent::new((70.0, 50.0), 32));
//!
//! assert_eq!(controller.active_kind(), GestureKind::Hover);
//! assert_eq!(doc.selection.items(), &[square]);
//! assert_eq!(doc.scene.bounds(square), Some(Rect::new(20.0, 0.0, 120.0, 100.0)));
//! assert!(matches!(
//!     controller.sink().last(),
//!     Some(GestureEvent::Translated { .. })
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod document;
pub mod gesture;
mod sink;

pub use config::GestureConfig;
pub use controller::GestureController;
pub use document::Document;
pub use gesture::{ActiveGesture, Gesture, GestureContext, GestureKind};
pub use sink::{EventSink, GestureEvent};
