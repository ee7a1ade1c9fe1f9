// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Point, Rect, Shape as _};

use crate::path::Path;

/// A path placed in the scene with a transform and paint attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Geometry in shape-local coordinates.
    pub path: Path,
    /// Local-to-world transform.
    pub transform: Affine,
    /// Stroke width in local units; `0.0` means no stroke.
    pub stroke_width: f64,
    /// Whether the interior is painted (and hit-testable as fill).
    pub filled: bool,
}

impl Shape {
    /// Places `path` with an identity transform, a 1-unit stroke, and a fill
    /// when the path is closed.
    #[must_use]
    pub fn new(path: Path) -> Self {
        let filled = path.is_closed();
        Self {
            path,
            transform: Affine::IDENTITY,
            stroke_width: 1.0,
            filled,
        }
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Sets whether the interior is filled.
    #[must_use]
    pub fn with_fill(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Sets the local-to-world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Returns the outline in world coordinates.
    #[must_use]
    pub fn world_outline(&self) -> BezPath {
        let mut bez = self.path.to_bez_path();
        bez.apply_affine(self.transform);
        bez
    }

    /// Returns the tight world-space bounding box of the outline.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        self.world_outline().bounding_box()
    }

    /// Returns the world position of segment `index`'s anchor.
    #[must_use]
    pub fn world_point(&self, index: usize) -> Option<Point> {
        self.path
            .segments()
            .get(index)
            .map(|s| self.transform * s.point)
    }
}
