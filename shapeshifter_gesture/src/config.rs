// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use shapeshifter_event_state::click::ClickConfig;

/// Tunables for gesture recognition.
///
/// Distances are in view pixels and are converted to world units with the
/// document viewport's zoom, so they feel the same at every zoom level.
///
/// With the `serde` feature this can be loaded from a settings file; missing
/// fields take their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureConfig {
    /// Hit tolerance for whole-shape selection.
    pub hit_tolerance_px: f64,
    /// Hit tolerance inside the detail-selected shape.
    pub detail_tolerance_px: f64,
    /// Longest gap between the presses of a double-click, in milliseconds.
    pub double_click_ms: u64,
    /// Largest distance between the presses of a double-click.
    pub double_click_radius_px: f64,
    /// Distance the pointer must travel before a press becomes a drag.
    pub drag_threshold_px: f64,
    /// How far rotation handles sit outside the selection's corners.
    pub rotate_handle_offset_px: f64,
    /// Rotation increment when shift is held, in degrees.
    pub rotate_snap_degrees: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hit_tolerance_px: 8.0,
            detail_tolerance_px: 3.0,
            double_click_ms: 500,
            double_click_radius_px: 4.0,
            drag_threshold_px: 3.0,
            rotate_handle_offset_px: 16.0,
            rotate_snap_degrees: 15.0,
        }
    }
}

impl GestureConfig {
    /// Returns the double-click thresholds.
    #[must_use]
    pub fn click_config(&self) -> ClickConfig {
        ClickConfig {
            interval_ms: self.double_click_ms,
            radius: self.double_click_radius_px,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_in_defaults() {
        let config: GestureConfig =
            serde_json::from_str(r#"{ "hit_tolerance_px": 12.0, "double_click_ms": 350 }"#)
                .unwrap();
        assert_eq!(config.hit_tolerance_px, 12.0);
        assert_eq!(config.double_click_ms, 350);
        assert_eq!(config.detail_tolerance_px, 3.0);
    }
}
