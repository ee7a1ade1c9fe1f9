// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape Shifter Scene: editable vector paths with precise hit testing.
//!
//! This crate holds the document geometry the editor's gestures operate on:
//!
//! - [`Path`] / [`Segment`]: cubic Bézier paths in the anchor-plus-handles
//!   form vector editors expose, convertible to and from [`kurbo::BezPath`].
//! - [`Shape`]: a path with a transform, stroke width, and fill flag.
//! - [`Scene`]: the shapes in paint order, addressed by generational
//!   [`ShapeId`]s, with hit testing and marquee queries.
//! - [`TransformBox`]: scale and rotation handles around a selection.
//! - [`Viewport`]: pan and zoom between world and view space.
//! - [`morph`]: whether two paths line up well enough to be morphed.
//!
//! ## Hit testing
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use shapeshifter_scene::{HitFeature, HitKinds, HitOptions, Path, Scene, Shape, Viewport};
//!
//! let mut scene = Scene::new();
//! let square = scene.insert(Shape::new(Path::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0))));
//!
//! // 8 view pixels at 2x zoom is 4 world units.
//! let mut viewport = Viewport::new();
//! viewport.set_zoom(2.0);
//! let options = HitOptions::new(HitKinds::SHAPE, viewport.world_tolerance(8.0));
//!
//! let hit = scene.hit_test(Point::new(97.0, 98.0), &options).unwrap();
//! assert_eq!(hit.shape, square);
//! assert_eq!(hit.feature, HitFeature::Segment(2));
//! ```
//!
//! ## Marquee queries
//!
//! ```rust
//! use kurbo::Rect;
//! use shapeshifter_scene::{Path, Scene, Shape};
//!
//! let mut scene = Scene::new();
//! let a = scene.insert(Shape::new(Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0))));
//! let _far = scene.insert(Shape::new(Path::from_rect(Rect::new(90.0, 90.0, 99.0, 99.0))));
//!
//! assert_eq!(scene.shapes_in_rect(Rect::new(-5.0, -5.0, 20.0, 20.0)), [a]);
//! assert_eq!(scene.segments_in_rect(a, Rect::new(5.0, -1.0, 11.0, 11.0)), [1, 2]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. SVG path import needs the `std`
//! feature.

#![no_std]

extern crate alloc;

mod error;
mod hit;
pub mod morph;
mod path;
mod scene;
mod shape;
mod transform_box;
mod types;
mod viewport;

pub use error::SceneError;
pub use hit::{Hit, HitFeature, HitOptions, ShapeHit};
pub use path::{Path, Segment};
pub use scene::Scene;
pub use shape::Shape;
pub use transform_box::{BoxHandle, Corner, TransformBox, TransformHit};
pub use types::{HandleSide, HitKinds, ShapeId};
pub use viewport::Viewport;
