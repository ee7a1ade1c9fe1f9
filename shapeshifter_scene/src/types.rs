// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared across the scene: shape identifiers and hit-kind flags.

/// Identifier for a shape in a [`Scene`](crate::Scene).
///
/// A copyable handle made of a slot index and a generation counter. It stays
/// valid while the shape lives and goes stale when the shape is removed.
///
/// - On insert, a fresh slot starts at generation `1`.
/// - On remove, the slot is freed and any `ShapeId` pointing at it is stale.
/// - On reuse, the generation is bumped, so a stale id never aliases the new shape.
///
/// Holders that do not own the shape (the detail-selected shape of the gesture
/// controller, selection sets) keep a `ShapeId` and check
/// [`Scene::is_alive`](crate::Scene::is_alive) before use.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ShapeId(pub(crate) u32, pub(crate) u32);

impl ShapeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Geometric features a hit test considers, and the feature a hit landed on.
    ///
    /// As a query filter any combination may be set. In a hit result exactly
    /// one bit is set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HitKinds: u8 {
        /// Segment anchor points.
        const SEGMENTS = 0b0000_0001;
        /// The stroked outline, widened by half the stroke width.
        const STROKE   = 0b0000_0010;
        /// The curve centerline.
        const CURVES   = 0b0000_0100;
        /// Bézier control handles.
        const HANDLES  = 0b0000_1000;
        /// The filled interior of closed, filled shapes.
        const FILL     = 0b0001_0000;
    }
}

impl HitKinds {
    /// Everything but control handles: what whole-shape selection tests.
    pub const SHAPE: Self = Self::SEGMENTS
        .union(Self::STROKE)
        .union(Self::CURVES)
        .union(Self::FILL);

    /// Every feature: what detail editing tests.
    pub const DETAIL: Self = Self::SHAPE.union(Self::HANDLES);
}

/// Which of a segment's two control handles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HandleSide {
    /// The handle shaping the curve that arrives at the segment.
    In,
    /// The handle shaping the curve that leaves the segment.
    Out,
}
