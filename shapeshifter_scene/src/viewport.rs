// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Pan and uniform zoom between world space and the canvas's view space.
///
/// `view = world * zoom + pan`. Pointer events arrive in view space; hit
/// tolerances are configured in view pixels and converted with
/// [`Viewport::world_tolerance`] so they feel the same at every zoom level.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Identity view: zoom `1.0`, no pan, zoom limits `[1e-2, 1e2]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: 1e-2,
            max_zoom: 1e2,
        }
    }

    /// Returns the zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamped to the zoom limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the zoom limits; the range is normalized and the zoom re-clamped.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom.min(max_zoom);
        self.max_zoom = min_zoom.max(max_zoom);
        self.set_zoom(self.zoom);
    }

    /// Returns the pan offset in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the pan offset in view pixels.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Pans by `delta` view pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Multiplies the zoom by `factor`, keeping the world point under the
    /// view-space `anchor` fixed.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        let world = self.view_to_world(anchor);
        self.set_zoom(self.zoom * factor);
        self.pan = anchor.to_vec2() - world.to_vec2() * self.zoom;
    }

    /// Maps a world point into view space.
    #[must_use]
    pub fn world_to_view(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.zoom + self.pan).to_point()
    }

    /// Maps a view point into world space.
    #[must_use]
    pub fn view_to_world(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.pan) / self.zoom).to_point()
    }

    /// Returns the world-to-view transform.
    #[must_use]
    pub fn world_to_view_transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Converts a length in view pixels into world units.
    #[must_use]
    pub fn world_tolerance(&self, pixels: f64) -> f64 {
        pixels / self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_pan_and_zoom() {
        let mut vp = Viewport::new();
        vp.set_zoom(2.0);
        vp.set_pan(Vec2::new(10.0, -5.0));

        let world = Point::new(3.0, 4.0);
        let view = vp.world_to_view(world);
        assert_eq!(view, Point::new(16.0, 3.0));
        assert_eq!(vp.view_to_world(view), world);
        assert_eq!(vp.world_to_view_transform() * world, view);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut vp = Viewport::new();
        let anchor = Point::new(100.0, 50.0);
        let before = vp.view_to_world(anchor);
        vp.zoom_about(anchor, 4.0);
        let after = vp.view_to_world(anchor);
        assert!((before - after).hypot() < 1e-9);
        assert_eq!(vp.zoom(), 4.0);
    }

    #[test]
    fn tolerance_shrinks_when_zoomed_in() {
        let mut vp = Viewport::new();
        vp.set_zoom(4.0);
        assert_eq!(vp.world_tolerance(8.0), 2.0);

        vp.set_zoom_limits(5.0, 0.5);
        assert_eq!(vp.zoom(), 4.0);
        vp.set_zoom(10.0);
        assert_eq!(vp.zoom(), 5.0);
    }
}
