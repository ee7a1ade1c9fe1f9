// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-shape segment selection.

use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Segment indices selected inside one shape, kept sorted.
type Indices = SmallVec<[u32; 8]>;

/// Selected segment indices, grouped by shape.
///
/// Shapes with no selected segments have no entry, so
/// [`SubSelection::is_empty`] is cheap. The container does not know how many
/// segments a shape has; callers pass the count where it matters
/// ([`SubSelection::select_all`], [`SubSelection::is_fully_selected`]).
#[derive(Clone, Debug)]
pub struct SubSelection<K> {
    shapes: HashMap<K, Indices>,
    revision: u64,
}

impl<K> Default for SubSelection<K> {
    fn default() -> Self {
        Self {
            shapes: HashMap::new(),
            revision: 0,
        }
    }
}

impl<K> SubSelection<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty sub-selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no segment of any shape is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the revision counter, bumped on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the selected segment indices of `shape` in ascending order.
    #[must_use]
    pub fn selected(&self, shape: &K) -> &[u32] {
        self.shapes.get(shape).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Returns how many segments of `shape` are selected.
    #[must_use]
    pub fn count(&self, shape: &K) -> usize {
        self.selected(shape).len()
    }

    /// Returns how many segments are selected across all shapes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.shapes.values().map(SmallVec::len).sum()
    }

    /// Returns `true` if segment `index` of `shape` is selected.
    #[must_use]
    pub fn contains(&self, shape: &K, index: u32) -> bool {
        self.selected(shape).binary_search(&index).is_ok()
    }

    /// Returns `true` if all `count` segments of `shape` are selected.
    ///
    /// A shape without segments is never fully selected.
    #[must_use]
    pub fn is_fully_selected(&self, shape: &K, count: usize) -> bool {
        let Some(set) = self.shapes.get(shape) else {
            return false;
        };
        // Sorted and unique, so the length plus the last index pin down 0..count.
        count > 0 && set.len() == count && set.last().is_some_and(|&l| l as usize + 1 == count)
    }

    /// Selects segment `index` of `shape`.
    pub fn select(&mut self, shape: K, index: u32) {
        let set = self.shapes.entry(shape).or_default();
        if let Err(pos) = set.binary_search(&index) {
            set.insert(pos, index);
            self.bump_revision();
        }
    }

    /// Deselects segment `index` of `shape`.
    pub fn deselect(&mut self, shape: &K, index: u32) {
        let Some(set) = self.shapes.get_mut(shape) else {
            return;
        };
        if let Ok(pos) = set.binary_search(&index) {
            set.remove(pos);
            if set.is_empty() {
                self.shapes.remove(shape);
            }
            self.bump_revision();
        }
    }

    /// Flips the selection state of segment `index` of `shape`.
    pub fn toggle(&mut self, shape: K, index: u32) {
        if self.contains(&shape, index) {
            self.deselect(&shape, index);
        } else {
            self.select(shape, index);
        }
    }

    /// Replaces the selected segments of `shape` with `indices`.
    pub fn replace<I>(&mut self, shape: K, indices: I)
    where
        I: IntoIterator<Item = u32>,
    {
        let mut next: Indices = indices.into_iter().collect();
        next.sort_unstable();
        next.dedup();
        if next.as_slice() == self.selected(&shape) {
            return;
        }
        if next.is_empty() {
            self.shapes.remove(&shape);
        } else {
            self.shapes.insert(shape, next);
        }
        self.bump_revision();
    }

    /// Selects every one of the `count` segments of `shape`.
    pub fn select_all(&mut self, shape: K, count: usize) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.replace(shape, 0..count);
    }

    /// Deselects every segment of `shape`.
    pub fn clear_shape(&mut self, shape: &K) {
        if self.shapes.remove(shape).is_some() {
            self.bump_revision();
        }
    }

    /// Deselects every segment of every shape.
    pub fn clear(&mut self) {
        if !self.shapes.is_empty() {
            self.shapes.clear();
            self.bump_revision();
        }
    }

    /// Renumbers the selected segments of `shape` after its path was edited.
    /// Indices mapped to `None` are deselected.
    pub fn remap(&mut self, shape: K, mut map: impl FnMut(u32) -> Option<u32>) {
        let next: Indices = self
            .selected(&shape)
            .iter()
            .filter_map(|&index| map(index))
            .collect();
        self.replace(shape, next);
    }

    /// Drops the entries of shapes for which `keep` returns `false`.
    pub fn retain_shapes(&mut self, mut keep: impl FnMut(&K) -> bool) {
        let before = self.shapes.len();
        self.shapes.retain(|k, _| keep(k));
        if self.shapes.len() != before {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_sorted_and_unique() {
        let mut sub = SubSelection::new();
        sub.select(1_u32, 3);
        sub.select(1, 0);
        sub.select(1, 3);
        sub.select(1, 2);
        assert_eq!(sub.selected(&1), &[0, 2, 3]);
    }

    #[test]
    fn emptied_shape_entry_is_dropped() {
        let mut sub = SubSelection::new();
        sub.select(4_u32, 1);
        sub.deselect(&4, 1);
        assert!(sub.is_empty());
    }

    #[test]
    fn remap_renumbers_and_drops() {
        let mut sub = SubSelection::new();
        sub.replace(1_u32, [0, 2, 3]);
        sub.select(5, 1);
        let rev = sub.revision();

        sub.remap(1, |i| (i != 2).then(|| 3 - i));
        assert_eq!(sub.selected(&1), &[0, 3]);
        assert_eq!(sub.count(&1), 2);
        assert_eq!(sub.total(), 3);
        assert_ne!(sub.revision(), rev);

        let rev = sub.revision();
        sub.remap(5, Some);
        assert_eq!(sub.revision(), rev);
    }

    #[test]
    fn fully_selected_needs_every_index() {
        let mut sub = SubSelection::new();
        sub.replace(2_u32, [0, 1, 2]);
        assert!(sub.is_fully_selected(&2, 3));
        assert!(!sub.is_fully_selected(&2, 4));
        assert!(!sub.is_fully_selected(&3, 0));
    }
}
