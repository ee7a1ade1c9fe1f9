// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape Shifter Selection: selection bookkeeping for a vector path editor.
//!
//! Two containers live here:
//!
//! - [`Selection`]: the set of selected shapes, with an optional **primary**
//!   shape (the one most recently clicked) and a **revision** counter that
//!   bumps whenever the contents change.
//! - [`SubSelection`]: for each shape, the set of selected segment indices.
//!   This is what detail editing works on; a shape whose segments are all
//!   selected is *fully selected*.
//!
//! Neither container knows about geometry. Gesture handlers decide which keys
//! to add or remove and these types keep the bookkeeping consistent.
//!
//! ## Minimal example
//!
//! ```rust
//! use shapeshifter_selection::{Selection, SubSelection};
//!
//! let mut shapes = Selection::<u32>::new();
//! shapes.select_only(7);
//! shapes.add(9);
//! assert_eq!(shapes.items(), &[7, 9]);
//! assert_eq!(shapes.primary(), Some(&9));
//!
//! // Shape 7 has four segments; select all of them.
//! let mut segments = SubSelection::<u32>::new();
//! segments.select_all(7, 4);
//! assert!(segments.is_fully_selected(&7, 4));
//! segments.deselect(&7, 2);
//! assert!(!segments.is_fully_selected(&7, 4));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod sub;

pub use sub::SubSelection;

use alloc::vec::Vec;

/// The set of selected shapes plus a primary shape and a revision counter.
///
/// Keys are kept in insertion order in a `Vec<T>`; uniqueness is enforced by
/// equality. This suits generational handles that are cheap to compare and do
/// not need to be hashed.
#[derive(Clone, Debug)]
pub struct Selection<T> {
    items: Vec<T>,
    primary: Option<usize>,
    revision: u64,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected keys in the order they were selected.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the primary key, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&T> {
        self.primary.map(|idx| &self.items[idx])
    }

    /// Returns the revision counter.
    ///
    /// Bumped only when the contents or the primary change; no-op calls leave
    /// it alone, so observers can compare revisions instead of contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Replaces the selection with `key` alone and makes it primary.
    pub fn select_only(&mut self, key: T) {
        if self.items.len() == 1 && self.items[0] == key {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.primary = Some(0);
        self.bump_revision();
    }

    /// Adds `key` if missing and makes it primary.
    pub fn add(&mut self, key: T) {
        match self.position_of(&key) {
            Some(idx) if self.primary == Some(idx) => {}
            Some(idx) => {
                self.primary = Some(idx);
                self.bump_revision();
            }
            None => {
                self.items.push(key);
                self.primary = Some(self.items.len() - 1);
                self.bump_revision();
            }
        }
    }

    /// Removes `key` if selected. Returns `true` if it was.
    pub fn remove(&mut self, key: &T) -> bool {
        let Some(idx) = self.position_of(key) else {
            return false;
        };
        self.items.remove(idx);
        self.primary = match self.primary {
            Some(p) if p == idx => self.items.len().checked_sub(1),
            Some(p) if p > idx => Some(p - 1),
            other => other,
        };
        self.bump_revision();
        true
    }

    /// Adds `key` if missing, removes it otherwise.
    pub fn toggle(&mut self, key: T) {
        if !self.remove(&key) {
            self.add(key);
        }
    }

    /// Replaces the selection with `keys`, dropping duplicates.
    ///
    /// The last key becomes primary. Nothing changes (and the revision stays
    /// put) if the result equals the current contents.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut next: Vec<T> = Vec::new();
        for key in keys {
            if !next.contains(&key) {
                next.push(key);
            }
        }
        if next == self.items {
            return;
        }
        self.primary = next.len().checked_sub(1);
        self.items = next;
        self.bump_revision();
    }

    /// Adds every key in `keys` that is not selected yet.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.items.len();
        for key in keys {
            if self.position_of(&key).is_none() {
                self.items.push(key);
            }
        }
        if self.items.len() != before {
            self.primary = Some(self.items.len() - 1);
            self.bump_revision();
        }
    }

    /// Keeps only the keys for which `keep` returns `true`.
    ///
    /// Used to drop handles of shapes that no longer exist.
    /// The primary survives if its key is kept; otherwise the last remaining
    /// key becomes primary.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let before = self.items.len();
        let old_primary = self.primary;
        let mut primary = None;
        let mut seen = 0;
        let mut kept_so_far = 0;
        self.items.retain(|k| {
            let kept = keep(k);
            if kept {
                if old_primary == Some(seen) {
                    primary = Some(kept_so_far);
                }
                kept_so_far += 1;
            }
            seen += 1;
            kept
        });
        if self.items.len() != before {
            self.primary = primary.or_else(|| self.items.len().checked_sub(1));
            self.bump_revision();
        }
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_primary_falls_back_to_last() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2, 3]);
        sel.add(2);
        assert_eq!(sel.primary(), Some(&2));

        assert!(sel.remove(&2));
        assert_eq!(sel.items(), &[1, 3]);
        assert_eq!(sel.primary(), Some(&3));
    }

    #[test]
    fn remove_before_primary_shifts_index() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2, 3]);
        assert_eq!(sel.primary(), Some(&3));

        sel.remove(&1);
        assert_eq!(sel.primary(), Some(&3));
    }

    #[test]
    fn retain_keeps_a_surviving_primary() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2, 3, 4]);
        sel.add(2);
        sel.retain(|&k| k != 1 && k != 4);
        assert_eq!(sel.items(), &[2, 3]);
        assert_eq!(sel.primary(), Some(&2));

        sel.retain(|&k| k != 2);
        assert_eq!(sel.primary(), Some(&3));
    }

    #[test]
    fn default_does_not_need_default_keys() {
        #[derive(Debug, PartialEq)]
        struct Handle(u32);

        let mut sel = Selection::<Handle>::default();
        assert!(sel.is_empty());
        sel.add(Handle(4));
        assert_eq!(sel.primary(), Some(&Handle(4)));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut sel = Selection::new();
        sel.select_only(1);
        let rev = sel.revision();
        assert!(!sel.remove(&5));
        assert_eq!(sel.revision(), rev);
    }
}
