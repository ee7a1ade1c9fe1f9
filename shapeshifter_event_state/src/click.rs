// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-click recognition on pointer-down.
//!
//! ## Usage
//!
//! 1) Resolve the target under the pointer (or `None` for empty space).
//! 2) Call [`ClickState::on_down`] with the target, the view-space position and
//!    the event time. The return value is the click count of the current
//!    sequence: `1` for a fresh press, `2` for a double-click, and so on.
//!
//! A press continues the sequence only if it lands on the same target, within
//! [`ClickConfig::radius`] of the previous press, and no more than
//! [`ClickConfig::interval_ms`] after it. Presses on empty space always start
//! a new sequence.

use kurbo::Point;

/// Thresholds that decide whether two presses belong to one click sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickConfig {
    /// Longest gap between presses, in milliseconds.
    pub interval_ms: u64,
    /// Largest distance between presses, in view pixels.
    pub radius: f64,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            radius: 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Press<K> {
    target: K,
    position: Point,
    time_ms: u64,
}

/// Counts consecutive presses on one target.
#[derive(Clone, Debug)]
pub struct ClickState<K> {
    config: ClickConfig,
    last: Option<Press<K>>,
    count: u32,
}

impl<K> ClickState<K>
where
    K: Copy + PartialEq,
{
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: ClickConfig) -> Self {
        Self {
            config,
            last: None,
            count: 0,
        }
    }

    /// Returns the active thresholds.
    #[must_use]
    pub fn config(&self) -> ClickConfig {
        self.config
    }

    /// Replaces the thresholds. The current sequence is kept.
    pub fn set_config(&mut self, config: ClickConfig) {
        self.config = config;
    }

    /// Records a press and returns its click count.
    pub fn on_down(&mut self, target: Option<K>, position: Point, time_ms: u64) -> u32 {
        let Some(target) = target else {
            self.reset();
            return 1;
        };

        let continues = self.last.is_some_and(|last| {
            last.target == target
                && time_ms >= last.time_ms
                && time_ms - last.time_ms <= self.config.interval_ms
                && (position - last.position).hypot() <= self.config.radius
        });

        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some(Press {
            target,
            position,
            time_ms,
        });
        self.count
    }

    /// Returns the click count of the most recent press, `0` if none.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Forgets the current sequence.
    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}
