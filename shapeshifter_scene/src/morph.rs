// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Morph compatibility between two paths.
//!
//! A morph animates one path into another by interpolating matching segments,
//! so the two must line up segment for segment: same number of segments and
//! both open or both closed.

use crate::path::{Path, Segment};

/// Result of checking whether two paths can be morphed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compatibility {
    /// The paths line up and can be interpolated.
    Compatible,
    /// At least one path has no segments.
    Empty,
    /// One path is closed and the other is not.
    ClosedMismatch {
        /// Whether the start path is closed.
        from: bool,
        /// Whether the end path is closed.
        to: bool,
    },
    /// The segment counts differ.
    SegmentCountMismatch {
        /// Segments in the start path.
        from: usize,
        /// Segments in the end path.
        to: usize,
    },
}

impl Compatibility {
    /// Returns `true` for [`Compatibility::Compatible`].
    #[must_use]
    pub fn is_compatible(self) -> bool {
        self == Self::Compatible
    }
}

/// Checks whether `from` can be morphed into `to`.
#[must_use]
pub fn paths_compatible(from: &Path, to: &Path) -> Compatibility {
    if from.is_empty() || to.is_empty() {
        Compatibility::Empty
    } else if from.is_closed() != to.is_closed() {
        Compatibility::ClosedMismatch {
            from: from.is_closed(),
            to: to.is_closed(),
        }
    } else if from.len() != to.len() {
        Compatibility::SegmentCountMismatch {
            from: from.len(),
            to: to.len(),
        }
    } else {
        Compatibility::Compatible
    }
}

/// Interpolates between two compatible paths; `t = 0` is `from`, `t = 1` is `to`.
///
/// # Errors
///
/// The incompatibility, if the paths cannot be morphed.
pub fn interpolate(from: &Path, to: &Path, t: f64) -> Result<Path, Compatibility> {
    let compat = paths_compatible(from, to);
    if !compat.is_compatible() {
        return Err(compat);
    }
    let segments = from.segments().iter().zip(to.segments()).map(|(a, b)| {
        Segment::with_handles(
            a.point.lerp(b.point, t),
            a.handle_in.lerp(b.handle_in, t),
            a.handle_out.lerp(b.handle_out, t),
        )
    });
    Ok(Path::from_segments(segments, from.is_closed()))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::*;

    #[test]
    fn reports_the_first_mismatch() {
        let square = Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let triangle = Path::from_points([(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)], true);
        let open = Path::from_points([(0.0, 0.0), (10.0, 0.0)], false);

        assert_eq!(
            paths_compatible(&square, &triangle),
            Compatibility::SegmentCountMismatch { from: 4, to: 3 }
        );
        assert_eq!(
            paths_compatible(&square, &open),
            Compatibility::ClosedMismatch {
                from: true,
                to: false
            }
        );
        assert_eq!(paths_compatible(&Path::new(), &open), Compatibility::Empty);
    }

    #[test]
    fn halfway_between_two_squares() {
        let small = Path::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let big = Path::from_rect(Rect::new(0.0, 0.0, 30.0, 30.0));
        let mid = interpolate(&small, &big, 0.5).unwrap();
        assert!(mid.is_closed());
        assert_eq!(mid.segments()[2].point, Point::new(20.0, 20.0));
    }

    #[test]
    fn degenerate_frame_keeps_every_segment() {
        let from = Path::from_points([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)], true);
        let to = Path::from_points([(0.0, 0.0), (10.0, 0.0), (0.0, -10.0)], true);
        let mid = interpolate(&from, &to, 0.5).unwrap();
        // The last anchor lands on the first one.
        assert_eq!(mid.len(), 3);
        assert_eq!(mid.segments()[2].point, Point::ZERO);
        assert!(paths_compatible(&mid, &to).is_compatible());
    }

    #[test]
    fn incompatible_paths_do_not_interpolate() {
        let a = Path::from_points([(0.0, 0.0), (1.0, 0.0)], false);
        let b = Path::from_points([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], false);
        assert_eq!(
            interpolate(&a, &b, 0.5),
            Err(Compatibility::SegmentCountMismatch { from: 2, to: 3 })
        );
    }
}
