// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking for a flat canvas: at most one target is hovered at a time.

/// What changed when the hovered target was updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverTransition<K> {
    /// Target the pointer left, if any.
    pub left: Option<K>,
    /// Target the pointer entered, if any.
    pub entered: Option<K>,
}

impl<K> HoverTransition<K> {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.entered.is_none()
    }
}

/// Remembers the hovered target and reports enter/leave transitions.
#[derive(Clone, Debug)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K> HoverState<K>
where
    K: Copy + PartialEq,
{
    /// Creates a tracker with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Returns the hovered target.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Sets the hovered target and returns the resulting transition.
    pub fn update(&mut self, target: Option<K>) -> HoverTransition<K> {
        if self.current == target {
            return HoverTransition {
                left: None,
                entered: None,
            };
        }
        let left = self.current;
        self.current = target;
        HoverTransition {
            left,
            entered: target,
        }
    }

    /// Clears the hovered target, returning it as `left` if there was one.
    pub fn clear(&mut self) -> HoverTransition<K> {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_move_leave() {
        let mut hover = HoverState::new();

        let t = hover.update(Some(1));
        assert_eq!(t.left, None);
        assert_eq!(t.entered, Some(1));

        assert!(hover.update(Some(1)).is_empty());

        let t = hover.update(Some(2));
        assert_eq!(t.left, Some(1));
        assert_eq!(t.entered, Some(2));

        let t = hover.clear();
        assert_eq!(t.left, Some(2));
        assert_eq!(t.entered, None);
        assert_eq!(hover.current(), None);
    }
}
