// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editable cubic Bézier paths.
//!
//! A [`Path`] is a run of [`Segment`]s. Each segment is an anchor point with
//! an incoming and an outgoing control handle stored as offsets from the
//! anchor, the representation vector editors expose to users. Consecutive
//! segments are joined by a cubic curve; a closed path adds one more curve
//! from the last segment back to the first.
//!
//! Paths convert to [`kurbo::BezPath`] for geometric queries and can be built
//! from one (or, with `std`, from SVG path data).

use alloc::vec::Vec;

use kurbo::{BezPath, CubicBez, ParamCurve, PathEl, Point, Rect, Shape as _, Vec2};

use crate::error::SceneError;
use crate::types::HandleSide;

/// An anchor point with its two control handles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Anchor position in shape-local coordinates.
    pub point: Point,
    /// Incoming handle, relative to `point`. Zero means a sharp corner.
    pub handle_in: Vec2,
    /// Outgoing handle, relative to `point`. Zero means a sharp corner.
    pub handle_out: Vec2,
}

impl Segment {
    /// A corner segment with no handles.
    #[must_use]
    pub fn new(point: impl Into<Point>) -> Self {
        Self {
            point: point.into(),
            handle_in: Vec2::ZERO,
            handle_out: Vec2::ZERO,
        }
    }

    /// A segment with both handles given relative to the anchor.
    #[must_use]
    pub fn with_handles(point: impl Into<Point>, handle_in: Vec2, handle_out: Vec2) -> Self {
        Self {
            point: point.into(),
            handle_in,
            handle_out,
        }
    }

    /// Returns the handle offset on `side`.
    #[must_use]
    pub fn handle(&self, side: HandleSide) -> Vec2 {
        match side {
            HandleSide::In => self.handle_in,
            HandleSide::Out => self.handle_out,
        }
    }

    /// Returns the absolute position of the handle on `side`.
    #[must_use]
    pub fn handle_point(&self, side: HandleSide) -> Point {
        self.point + self.handle(side)
    }
}

/// A single open or closed run of segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    closed: bool,
}

impl Path {
    /// Creates an empty open path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polyline (or polygon, when `closed`) through `points`.
    #[must_use]
    pub fn from_points<I, P>(points: I, closed: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            segments: points.into_iter().map(Segment::new).collect(),
            closed,
        }
    }

    /// Creates a path from `segments` as given. Unlike [`Path::close`], a
    /// last segment on top of the first one is kept.
    #[must_use]
    pub fn from_segments<I>(segments: I, closed: bool) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        Self {
            segments: segments.into_iter().collect(),
            closed,
        }
    }

    /// Creates a closed rectangle, clockwise from the top-left corner.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::from_points(
            [
                (rect.x0, rect.y0),
                (rect.x1, rect.y0),
                (rect.x1, rect.y1),
                (rect.x0, rect.y1),
            ],
            true,
        )
    }

    /// Converts a single-subpath [`BezPath`].
    ///
    /// Quadratic curves are elevated to cubics. A closing point that coincides
    /// with the first point is folded into the first segment.
    ///
    /// # Errors
    ///
    /// [`SceneError::CompoundPath`] if `bez` has more than one subpath.
    pub fn from_bez_path(bez: &BezPath) -> Result<Self, SceneError> {
        let mut path = Self::new();
        let mut started = false;
        let mut last = Point::ZERO;
        for el in bez.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if started {
                        return Err(SceneError::CompoundPath);
                    }
                    started = true;
                    path.segments.push(Segment::new(p));
                    last = p;
                }
                PathEl::LineTo(p) => {
                    path.segments.push(Segment::new(p));
                    last = p;
                }
                PathEl::QuadTo(c, p) => {
                    let c1 = last + (c - last) * (2.0 / 3.0);
                    let c2 = p + (c - p) * (2.0 / 3.0);
                    path.push_curve(c1, c2, p);
                    last = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    path.push_curve(c1, c2, p);
                    last = p;
                }
                PathEl::ClosePath => path.close(),
            }
        }
        Ok(path)
    }

    /// Parses SVG path data (the `d` attribute).
    ///
    /// # Errors
    ///
    /// [`SceneError::Svg`] if the data does not parse, and the errors of
    /// [`Path::from_bez_path`].
    #[cfg(feature = "std")]
    pub fn from_svg(data: &str) -> Result<Self, SceneError> {
        let bez = BezPath::from_svg(data).map_err(SceneError::Svg)?;
        Self::from_bez_path(&bez)
    }

    fn push_curve(&mut self, c1: Point, c2: Point, p: Point) {
        if let Some(prev) = self.segments.last_mut() {
            prev.handle_out = c1 - prev.point;
        }
        self.segments.push(Segment::with_handles(p, c2 - p, Vec2::ZERO));
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Closes the path, merging a trailing segment that repeats the first one.
    pub fn close(&mut self) {
        if self.segments.len() > 1 {
            let first = self.segments[0].point;
            if let Some(last) = self.segments.last()
                && (last.point - first).hypot2() < 1e-18
            {
                let handle_in = last.handle_in;
                self.segments.pop();
                self.segments[0].handle_in = handle_in;
            }
        }
        self.closed = true;
    }

    /// Returns `true` if the path is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns segment `index`.
    ///
    /// # Errors
    ///
    /// [`SceneError::SegmentOutOfRange`] if `index` is past the end.
    pub fn segment_mut(&mut self, index: u32) -> Result<&mut Segment, SceneError> {
        let len = self.segments.len();
        self.segments
            .get_mut(index as usize)
            .ok_or(SceneError::SegmentOutOfRange { index, len })
    }

    /// Returns the number of curves joining the segments.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        match self.segments.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Returns the segment indices at the two ends of curve `index`.
    #[must_use]
    pub fn curve_ends(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.curve_count()).then(|| (index, (index + 1) % self.segments.len()))
    }

    /// Returns curve `index` as a cubic Bézier.
    #[must_use]
    pub fn curve(&self, index: usize) -> Option<CubicBez> {
        let (a, b) = self.curve_ends(index)?;
        let (a, b) = (&self.segments[a], &self.segments[b]);
        Some(CubicBez::new(
            a.point,
            a.handle_point(HandleSide::Out),
            b.handle_point(HandleSide::In),
            b.point,
        ))
    }

    /// Iterates the curves in order.
    pub fn curves(&self) -> impl Iterator<Item = CubicBez> + '_ {
        (0..self.curve_count()).filter_map(|i| self.curve(i))
    }

    /// Converts to a [`BezPath`]. Curves without handles become lines.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let Some(first) = self.segments.first() else {
            return bez;
        };
        bez.move_to(first.point);
        for i in 0..self.curve_count() {
            let Some((a, b)) = self.curve_ends(i) else {
                break;
            };
            let (a, b) = (&self.segments[a], &self.segments[b]);
            if a.handle_out == Vec2::ZERO && b.handle_in == Vec2::ZERO {
                bez.line_to(b.point);
            } else {
                bez.curve_to(
                    a.handle_point(HandleSide::Out),
                    b.handle_point(HandleSide::In),
                    b.point,
                );
            }
        }
        if self.closed {
            bez.close_path();
        }
        bez
    }

    /// Returns the tight bounding box of the outline, in local coordinates.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.to_bez_path().bounding_box()
    }

    /// Moves the anchors at `indices` (handles follow) by `delta`.
    ///
    /// # Errors
    ///
    /// [`SceneError::SegmentOutOfRange`] on the first bad index; earlier
    /// indices have already moved.
    pub fn translate_segments(&mut self, indices: &[u32], delta: Vec2) -> Result<(), SceneError> {
        for &index in indices {
            self.segment_mut(index)?.point += delta;
        }
        Ok(())
    }

    /// Moves one control handle by `delta`.
    ///
    /// # Errors
    ///
    /// [`SceneError::SegmentOutOfRange`] if `index` is past the end.
    pub fn translate_handle(
        &mut self,
        index: u32,
        side: HandleSide,
        delta: Vec2,
    ) -> Result<(), SceneError> {
        let segment = self.segment_mut(index)?;
        match side {
            HandleSide::In => segment.handle_in += delta,
            HandleSide::Out => segment.handle_out += delta,
        }
        Ok(())
    }

    /// Reverses the direction of the path.
    ///
    /// Handles swap sides. A closed path keeps its first segment, so segment
    /// `i` moves to `(len - i) % len`; in an open path it moves to
    /// `len - 1 - i`.
    pub fn reverse(&mut self) {
        if self.closed && self.segments.len() > 1 {
            self.segments[1..].reverse();
        } else {
            self.segments.reverse();
        }
        for segment in &mut self.segments {
            core::mem::swap(&mut segment.handle_in, &mut segment.handle_out);
        }
    }

    /// Makes segment `first` the start of a closed path. Segment `i` moves to
    /// `(i + len - first) % len`.
    ///
    /// # Errors
    ///
    /// [`SceneError::OpenPath`] if the path is open and
    /// [`SceneError::SegmentOutOfRange`] if `first` is past the end.
    pub fn set_first(&mut self, first: u32) -> Result<(), SceneError> {
        if !self.closed {
            return Err(SceneError::OpenPath);
        }
        let len = self.segments.len();
        let first_idx = first as usize;
        if first_idx >= len {
            return Err(SceneError::SegmentOutOfRange { index: first, len });
        }
        self.segments.rotate_left(first_idx);
        Ok(())
    }

    /// Moves the start of a closed path `steps` segments forward, or back
    /// when negative. Returns the index of the old segment that now comes
    /// first, as passed to [`Path::set_first`].
    ///
    /// # Errors
    ///
    /// [`SceneError::OpenPath`] if the path is open.
    pub fn shift_start(&mut self, steps: i32) -> Result<u32, SceneError> {
        if !self.closed {
            return Err(SceneError::OpenPath);
        }
        let len = i64::try_from(self.segments.len()).unwrap_or(i64::MAX);
        if len == 0 {
            return Ok(0);
        }
        let first = u32::try_from(i64::from(steps).rem_euclid(len)).unwrap_or(0);
        self.set_first(first)?;
        Ok(first)
    }

    /// Deletes the segments at `indices`. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// [`SceneError::SegmentOutOfRange`] on a bad index, in which case
    /// nothing is removed.
    pub fn remove_segments(&mut self, indices: &[u32]) -> Result<usize, SceneError> {
        let len = self.segments.len();
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= len) {
            return Err(SceneError::SegmentOutOfRange { index, len });
        }
        let mut i = 0;
        self.segments.retain(|_| {
            let keep = !indices.iter().any(|&r| r as usize == i);
            i += 1;
            keep
        });
        Ok(len - self.segments.len())
    }

    /// Splits curve `index` at parameter `t`, inserting a new segment.
    /// Returns the index of the new segment; `t = 0.5` splits the curve in
    /// half.
    ///
    /// The new segment goes right after the curve's start, so later segments
    /// shift up by one. A straight curve stays straight.
    ///
    /// # Errors
    ///
    /// [`SceneError::SegmentOutOfRange`] if `index` is not a curve.
    pub fn split_curve(&mut self, index: u32, t: f64) -> Result<u32, SceneError> {
        let curve_index = index as usize;
        let (Some((a, b)), Some(curve)) = (self.curve_ends(curve_index), self.curve(curve_index))
        else {
            return Err(SceneError::SegmentOutOfRange {
                index,
                len: self.curve_count(),
            });
        };
        let straight = self.segments[a].handle_out == Vec2::ZERO
            && self.segments[b].handle_in == Vec2::ZERO;
        let mid = curve.eval(t);
        let inserted = if straight {
            Segment::new(mid)
        } else {
            let left = curve.subsegment(0.0..t);
            let right = curve.subsegment(t..1.0);
            self.segments[a].handle_out = left.p1 - left.p0;
            self.segments[b].handle_in = right.p2 - right.p3;
            Segment::with_handles(mid, left.p2 - mid, right.p1 - mid)
        };
        self.segments.insert(a + 1, inserted);
        u32::try_from(a + 1).map_err(|_| SceneError::SegmentOutOfRange {
            index,
            len: self.segments.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_count_open_and_closed() {
        let open = Path::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], false);
        assert_eq!(open.curve_count(), 2);
        let closed = Path::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], true);
        assert_eq!(closed.curve_count(), 3);
        assert_eq!(closed.curve_ends(2), Some((2, 0)));
        assert_eq!(Path::from_points([(0.0, 0.0)], true).curve_count(), 0);
    }

    #[test]
    fn bez_path_with_curve_keeps_handles() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.curve_to((0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        let path = Path::from_bez_path(&bez).unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[0].handle_out, Vec2::new(0.0, 10.0));
        assert_eq!(path.segments()[1].handle_in, Vec2::new(0.0, 10.0));
        assert_eq!(path.to_bez_path(), bez);
    }

    #[test]
    fn close_folds_repeated_first_point() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((10.0, 0.0));
        bez.line_to((10.0, 10.0));
        bez.line_to((0.0, 0.0));
        bez.close_path();
        let path = Path::from_bez_path(&bez).unwrap();
        assert_eq!(path.len(), 3);
        assert!(path.is_closed());
    }

    #[test]
    fn second_subpath_is_rejected() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((1.0, 0.0));
        bez.move_to((5.0, 5.0));
        bez.line_to((6.0, 5.0));
        assert!(matches!(
            Path::from_bez_path(&bez),
            Err(SceneError::CompoundPath)
        ));
    }

    #[test]
    fn reverse_keeps_the_start_of_a_closed_path() {
        let mut path = Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        path.segments[0].handle_out = Vec2::new(1.0, 0.0);
        path.reverse();
        let points: Vec<Point> = path.segments().iter().map(|s| s.point).collect();
        assert_eq!(
            points,
            [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)].map(Point::from)
        );
        assert_eq!(path.segments()[0].handle_in, Vec2::new(1.0, 0.0));
        assert_eq!(path.segments()[0].handle_out, Vec2::ZERO);

        let mut open = Path::from_points([(0.0, 0.0), (5.0, 0.0), (9.0, 0.0)], false);
        open.reverse();
        assert_eq!(open.segments()[0].point, Point::new(9.0, 0.0));
    }

    #[test]
    fn start_moves_only_on_closed_paths() {
        let mut path = Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        path.set_first(2).unwrap();
        assert_eq!(path.segments()[0].point, Point::new(10.0, 10.0));
        path.shift_start(-1).unwrap();
        assert_eq!(path.segments()[0].point, Point::new(10.0, 0.0));
        assert_eq!(path.shift_start(5).unwrap(), 1);
        assert_eq!(path.segments()[0].point, Point::new(10.0, 10.0));

        let mut open = Path::from_points([(0.0, 0.0), (1.0, 0.0)], false);
        assert!(matches!(open.set_first(1), Err(SceneError::OpenPath)));
        assert!(matches!(
            path.set_first(4),
            Err(SceneError::SegmentOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn remove_segments_is_all_or_nothing() {
        let mut path = Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(path.remove_segments(&[1, 9]).is_err());
        assert_eq!(path.len(), 4);
        assert_eq!(path.remove_segments(&[3, 1]).unwrap(), 2);
        let points: Vec<Point> = path.segments().iter().map(|s| s.point).collect();
        assert_eq!(points, [Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn split_in_half_keeps_the_outline() {
        let mut square = Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(square.split_curve(3, 0.5).unwrap(), 4);
        assert_eq!(square.segments()[4], Segment::new((0.0, 5.0)));
        assert_eq!(square.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));

        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.curve_to((0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        let mut arch = Path::from_bez_path(&bez).unwrap();
        let before = arch.curve(0).unwrap().eval(0.25);
        assert_eq!(arch.split_curve(0, 0.5).unwrap(), 1);
        assert_eq!(arch.len(), 3);
        let after = arch.curve(0).unwrap().eval(0.5);
        assert!((after - before).hypot() < 1e-9);
        assert!(arch.split_curve(2, 0.5).is_err());
    }

    #[test]
    fn translate_out_of_range_reports_length() {
        let mut path = Path::from_points([(0.0, 0.0), (1.0, 0.0)], false);
        let err = path.translate_segments(&[0, 5], Vec2::new(1.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            SceneError::SegmentOutOfRange { index: 5, len: 2 }
        ));
        assert_eq!(path.segments()[0].point, Point::new(1.0, 0.0));
    }
}
