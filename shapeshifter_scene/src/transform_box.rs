// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transform box drawn around a selection: eight scale handles on the
//! corners and edge midpoints, and four rotation handles just outside the
//! corners.

use kurbo::{Point, Rect, Vec2};

/// A corner of the box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Corner {
    /// Minimum x, minimum y.
    TopLeft,
    /// Maximum x, minimum y.
    TopRight,
    /// Maximum x, maximum y.
    BottomRight,
    /// Minimum x, maximum y.
    BottomLeft,
}

impl Corner {
    /// All corners, clockwise from the top-left.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Unit direction pointing out of the box through this corner.
    fn outward(self) -> Vec2 {
        let (x, y) = match self {
            Self::TopLeft => (-1.0, -1.0),
            Self::TopRight => (1.0, -1.0),
            Self::BottomRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, 1.0),
        };
        Vec2::new(x, y).normalize()
    }
}

/// A scale handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoxHandle {
    /// A corner handle; scales both axes.
    Corner(Corner),
    /// Middle of the top edge; scales y.
    Top,
    /// Middle of the right edge; scales x.
    Right,
    /// Middle of the bottom edge; scales y.
    Bottom,
    /// Middle of the left edge; scales x.
    Left,
}

impl BoxHandle {
    /// All scale handles, corners first.
    pub const ALL: [Self; 8] = [
        Self::Corner(Corner::TopLeft),
        Self::Corner(Corner::TopRight),
        Self::Corner(Corner::BottomRight),
        Self::Corner(Corner::BottomLeft),
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
    ];

    /// The handle across the box, which stays fixed while this one is dragged.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Corner(Corner::TopLeft) => Self::Corner(Corner::BottomRight),
            Self::Corner(Corner::TopRight) => Self::Corner(Corner::BottomLeft),
            Self::Corner(Corner::BottomRight) => Self::Corner(Corner::TopLeft),
            Self::Corner(Corner::BottomLeft) => Self::Corner(Corner::TopRight),
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Which axes dragging this handle scales, as `(x, y)`.
    #[must_use]
    pub fn axes(self) -> (bool, bool) {
        match self {
            Self::Corner(_) => (true, true),
            Self::Left | Self::Right => (true, false),
            Self::Top | Self::Bottom => (false, true),
        }
    }
}

/// A hit on the transform box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TransformHit {
    /// A scale handle.
    Scale(BoxHandle),
    /// A rotation handle.
    Rotate(Corner),
}

/// Handle layout around a world-space rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformBox {
    bounds: Rect,
    rotate_offset: f64,
}

impl TransformBox {
    /// Lays out handles around `bounds`, with rotation handles on the corners.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: bounds.abs(),
            rotate_offset: 0.0,
        }
    }

    /// Moves the rotation handles `offset` world units out from the corners.
    #[must_use]
    pub fn with_rotate_offset(mut self, offset: f64) -> Self {
        self.rotate_offset = offset;
        self
    }

    /// Returns the boxed rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the position of a scale handle.
    #[must_use]
    pub fn handle_position(&self, handle: BoxHandle) -> Point {
        let r = self.bounds;
        let c = r.center();
        match handle {
            BoxHandle::Corner(corner) => corner_point(r, corner),
            BoxHandle::Top => Point::new(c.x, r.y0),
            BoxHandle::Right => Point::new(r.x1, c.y),
            BoxHandle::Bottom => Point::new(c.x, r.y1),
            BoxHandle::Left => Point::new(r.x0, c.y),
        }
    }

    /// Returns the position of a rotation handle.
    #[must_use]
    pub fn rotate_position(&self, corner: Corner) -> Point {
        corner_point(self.bounds, corner) + corner.outward() * self.rotate_offset
    }

    /// Returns the handle within `tolerance` of `pt`, scale handles first.
    ///
    /// Inside the box the reach of a handle is capped at a quarter of the
    /// shorter side, so the middle of a small box stays free for the shapes
    /// under it.
    #[must_use]
    pub fn hit_test(&self, pt: Point, tolerance: f64) -> Option<TransformHit> {
        let r = self.bounds;
        let inside = r.x0 < pt.x && pt.x < r.x1 && r.y0 < pt.y && pt.y < r.y1;
        let reach = if inside {
            tolerance.min(r.width().min(r.height()) / 4.0)
        } else {
            tolerance
        };
        let near = |p: Point| (p - pt).hypot() <= reach;
        BoxHandle::ALL
            .into_iter()
            .find(|&h| near(self.handle_position(h)))
            .map(TransformHit::Scale)
            .or_else(|| {
                Corner::ALL
                    .into_iter()
                    .find(|&c| near(self.rotate_position(c)))
                    .map(TransformHit::Rotate)
            })
    }
}

fn corner_point(r: Rect, corner: Corner) -> Point {
    match corner {
        Corner::TopLeft => Point::new(r.x0, r.y0),
        Corner::TopRight => Point::new(r.x1, r.y0),
        Corner::BottomRight => Point::new(r.x1, r.y1),
        Corner::BottomLeft => Point::new(r.x0, r.y1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> TransformBox {
        TransformBox::new(Rect::new(0.0, 0.0, 100.0, 50.0)).with_rotate_offset(10.0)
    }

    #[test]
    fn opposite_is_an_involution() {
        for h in BoxHandle::ALL {
            assert_eq!(h.opposite().opposite(), h);
            assert_ne!(h.opposite(), h);
        }
    }

    #[test]
    fn scale_handles_win_over_rotate_handles() {
        let tb = unit_box();
        assert_eq!(
            tb.hit_test(Point::new(101.0, 51.0), 3.0),
            Some(TransformHit::Scale(BoxHandle::Corner(Corner::BottomRight)))
        );
        assert_eq!(
            tb.hit_test(Point::new(50.0, 0.0), 3.0),
            Some(TransformHit::Scale(BoxHandle::Top))
        );
    }

    #[test]
    fn rotate_handle_sits_outside_the_corner() {
        let tb = unit_box();
        let p = tb.rotate_position(Corner::TopLeft);
        assert!(p.x < 0.0 && p.y < 0.0);
        assert_eq!(tb.hit_test(p, 1.0), Some(TransformHit::Rotate(Corner::TopLeft)));
        assert_eq!(tb.hit_test(Point::new(50.0, 25.0), 3.0), None);
    }

    #[test]
    fn small_box_keeps_its_middle_free() {
        let tb = TransformBox::new(Rect::new(0.0, 0.0, 12.0, 12.0));
        assert_eq!(tb.hit_test(Point::new(6.0, 6.0), 8.0), None);
        assert_eq!(
            tb.hit_test(Point::new(2.0, 2.0), 8.0),
            Some(TransformHit::Scale(BoxHandle::Corner(Corner::TopLeft)))
        );
        // Outside the box the full tolerance applies.
        assert_eq!(
            tb.hit_test(Point::new(-5.0, 6.0), 8.0),
            Some(TransformHit::Scale(BoxHandle::Left))
        );
    }
}
