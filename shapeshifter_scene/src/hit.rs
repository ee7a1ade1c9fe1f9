// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precise hit testing against shape geometry.
//!
//! A query point is mapped into the shape's local space and compared against
//! each requested feature in priority order: segment anchors, control handles,
//! the curve centerline, the stroked outline, and finally the fill. The first
//! feature within tolerance wins, and within a feature the nearest candidate
//! wins. Tolerances are given in world units and converted to local units
//! using the shape transform's average scale.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{ParamCurveNearest, Point, Shape as _};

use crate::shape::Shape;
use crate::transform_box::TransformHit;
use crate::types::{HandleSide, HitKinds, ShapeId};

/// Curve nearest-point accuracy, in local units.
const NEAREST_ACCURACY: f64 = 1e-6;

/// What to test and how generously.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitOptions {
    /// Features to consider.
    pub kinds: HitKinds,
    /// Maximum distance in world units.
    pub tolerance: f64,
    /// Restrict the query to one shape.
    pub only: Option<ShapeId>,
}

impl HitOptions {
    /// Tests `kinds` on every shape within `tolerance` world units.
    #[must_use]
    pub fn new(kinds: HitKinds, tolerance: f64) -> Self {
        Self {
            kinds,
            tolerance,
            only: None,
        }
    }

    /// Restricts the query to `shape`.
    #[must_use]
    pub fn only(mut self, shape: ShapeId) -> Self {
        self.only = Some(shape);
        self
    }
}

/// The sub-feature of a shape a hit landed on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitFeature {
    /// A segment anchor.
    Segment(u32),
    /// A control handle of a segment.
    Handle {
        /// Segment owning the handle.
        segment: u32,
        /// Which of its two handles.
        side: HandleSide,
    },
    /// A point on a curve (centerline or stroke).
    Curve {
        /// Curve index; curve `i` joins segment `i` to the next one.
        index: u32,
        /// Curve parameter of the nearest point.
        t: f64,
    },
    /// The filled interior.
    Fill,
}

/// A hit on a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeHit {
    /// The shape that was hit.
    pub shape: ShapeId,
    /// The feature kind; exactly one bit is set.
    pub kind: HitKinds,
    /// Where on the shape.
    pub feature: HitFeature,
    /// Distance from the query point, in world units. Zero for fill hits.
    pub distance: f64,
}

/// Anything a pointer-down can land on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    /// A handle of the selection's transform box.
    Transform(TransformHit),
    /// A shape.
    Shape(ShapeHit),
}

impl Hit {
    /// Returns the shape hit, if this is one.
    #[must_use]
    pub fn shape(&self) -> Option<&ShapeHit> {
        match self {
            Self::Shape(hit) => Some(hit),
            Self::Transform(_) => None,
        }
    }
}

/// Hit tests one shape. `pt` is in world space.
pub(crate) fn hit_shape(
    id: ShapeId,
    shape: &Shape,
    pt: Point,
    options: &HitOptions,
) -> Option<ShapeHit> {
    let scale = shape.transform.determinant().abs().sqrt();
    if !scale.is_finite() || scale < 1e-12 {
        return None;
    }
    let local = shape.transform.inverse() * pt;
    let tol = options.tolerance / scale;
    let kinds = options.kinds;
    let segments = shape.path.segments();

    let hit = |kind, feature, local_dist: f64| ShapeHit {
        shape: id,
        kind,
        feature,
        distance: local_dist * scale,
    };

    if kinds.contains(HitKinds::SEGMENTS) {
        let nearest = segments
            .iter()
            .enumerate()
            .filter_map(|(i, s)| Some((u32::try_from(i).ok()?, (s.point - local).hypot())))
            .filter(|&(_, d)| d <= tol)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((i, d)) = nearest {
            return Some(hit(HitKinds::SEGMENTS, HitFeature::Segment(i), d));
        }
    }

    if kinds.contains(HitKinds::HANDLES) {
        let nearest = segments
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                [HandleSide::In, HandleSide::Out]
                    .into_iter()
                    .filter(move |&side| s.handle(side) != kurbo::Vec2::ZERO)
                    .map(move |side| (i, side, (s.handle_point(side) - local).hypot()))
            })
            .filter(|&(_, _, d)| d <= tol)
            .min_by(|a, b| a.2.total_cmp(&b.2));
        if let Some((i, side, d)) = nearest
            && let Ok(segment) = u32::try_from(i)
        {
            let feature = HitFeature::Handle { segment, side };
            return Some(hit(HitKinds::HANDLES, feature, d));
        }
    }

    if kinds.intersects(HitKinds::CURVES | HitKinds::STROKE) {
        let nearest = shape
            .path
            .curves()
            .enumerate()
            .map(|(i, c)| {
                let n = c.nearest(local, NEAREST_ACCURACY);
                (i, n.t, n.distance_sq.sqrt())
            })
            .min_by(|a, b| a.2.total_cmp(&b.2));
        if let Some((i, t, d)) = nearest
            && let Ok(index) = u32::try_from(i)
        {
            let feature = HitFeature::Curve { index, t };
            if kinds.contains(HitKinds::CURVES) && d <= tol {
                return Some(hit(HitKinds::CURVES, feature, d));
            }
            if kinds.contains(HitKinds::STROKE)
                && shape.stroke_width > 0.0
                && d <= shape.stroke_width * 0.5 + tol
            {
                return Some(hit(HitKinds::STROKE, feature, d));
            }
        }
    }

    if kinds.contains(HitKinds::FILL)
        && shape.filled
        && shape.path.is_closed()
        && shape.path.to_bez_path().contains(local)
    {
        return Some(hit(HitKinds::FILL, HitFeature::Fill, 0.0));
    }

    None
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Rect, Vec2};

    use super::*;
    use crate::path::{Path, Segment};

    fn square() -> Shape {
        Shape::new(Path::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0))).with_stroke_width(4.0)
    }

    fn id() -> ShapeId {
        ShapeId::new(0, 1)
    }

    #[test]
    fn anchor_beats_curve() {
        let opts = HitOptions::new(HitKinds::SHAPE, 3.0);
        let hit = hit_shape(id(), &square(), Point::new(1.0, 1.0), &opts).unwrap();
        assert_eq!(hit.kind, HitKinds::SEGMENTS);
        assert_eq!(hit.feature, HitFeature::Segment(0));
    }

    #[test]
    fn curve_then_stroke_then_fill() {
        let opts = HitOptions::new(HitKinds::SHAPE, 1.0);

        let on_edge = hit_shape(id(), &square(), Point::new(50.0, 0.5), &opts).unwrap();
        assert_eq!(on_edge.kind, HitKinds::CURVES);
        assert!(matches!(on_edge.feature, HitFeature::Curve { index: 0, .. }));

        // Outside the curve tolerance but inside half the stroke width.
        let on_stroke = hit_shape(id(), &square(), Point::new(50.0, -2.5), &opts).unwrap();
        assert_eq!(on_stroke.kind, HitKinds::STROKE);

        let inside = hit_shape(id(), &square(), Point::new(50.0, 50.0), &opts).unwrap();
        assert_eq!(inside.kind, HitKinds::FILL);

        assert!(hit_shape(id(), &square(), Point::new(50.0, -10.0), &opts).is_none());
    }

    #[test]
    fn handles_only_when_requested() {
        let mut path = Path::new();
        path.push(Segment::with_handles(
            (0.0, 0.0),
            Vec2::ZERO,
            Vec2::new(0.0, 40.0),
        ));
        path.push(Segment::new((100.0, 0.0)));
        let shape = Shape::new(path);
        let pt = Point::new(0.0, 40.0);

        let without = HitOptions::new(HitKinds::SEGMENTS | HitKinds::FILL, 2.0);
        assert!(hit_shape(id(), &shape, pt, &without).is_none());

        let with = HitOptions::new(HitKinds::DETAIL, 2.0);
        let hit = hit_shape(id(), &shape, pt, &with).unwrap();
        assert_eq!(
            hit.feature,
            HitFeature::Handle {
                segment: 0,
                side: HandleSide::Out
            }
        );
    }

    #[test]
    fn tolerance_is_in_world_units() {
        let shape = square().with_transform(Affine::scale(2.0));
        let opts = HitOptions::new(HitKinds::SEGMENTS, 3.0);

        // World anchor is at (200, 0); 2.5 world units away.
        let hit = hit_shape(id(), &shape, Point::new(202.5, 0.0), &opts).unwrap();
        assert_eq!(hit.feature, HitFeature::Segment(1));
        assert!((hit.distance - 2.5).abs() < 1e-9);
    }

    #[test]
    fn unfilled_interior_misses() {
        let shape = square().with_fill(false);
        let opts = HitOptions::new(HitKinds::SHAPE, 1.0);
        assert!(hit_shape(id(), &shape, Point::new(50.0, 50.0), &opts).is_none());
    }
}
