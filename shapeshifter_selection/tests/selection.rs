// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `shapeshifter_selection` crate.
//!
//! These exercise how selection contents, the primary key, and the revision
//! counters move together under the operations gestures perform.

use shapeshifter_selection::{Selection, SubSelection};

#[test]
fn empty_selection_basics() {
    let sel = Selection::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.len(), 0);
    assert_eq!(sel.primary(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn select_only_is_idempotent() {
    let mut sel = Selection::new();
    sel.select_only(1);
    assert_eq!(sel.items(), &[1]);
    assert_eq!(sel.primary(), Some(&1));
    assert_eq!(sel.revision(), 1);

    sel.select_only(1);
    assert_eq!(sel.revision(), 1);

    sel.select_only(2);
    assert_eq!(sel.items(), &[2]);
    assert_eq!(sel.revision(), 2);
}

#[test]
fn add_existing_only_moves_primary() {
    let mut sel = Selection::new();
    sel.replace_with([1, 2]);
    let rev = sel.revision();

    sel.add(1);
    assert_eq!(sel.items(), &[1, 2]);
    assert_eq!(sel.primary(), Some(&1));
    assert_eq!(sel.revision(), rev + 1);

    sel.add(1);
    assert_eq!(sel.revision(), rev + 1);
}

#[test]
fn removing_one_of_many_keeps_the_rest() {
    let mut sel = Selection::new();
    sel.replace_with([10, 20, 30]);

    assert!(sel.remove(&20));
    assert_eq!(sel.items(), &[10, 30]);
    assert!(!sel.contains(&20));
}

#[test]
fn toggle_adds_then_removes() {
    let mut sel = Selection::new();
    sel.toggle(5);
    assert!(sel.contains(&5));
    sel.toggle(5);
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), None);
}

#[test]
fn replace_with_dedups_and_skips_identical_contents() {
    let mut sel = Selection::new();
    sel.replace_with([1, 2, 2, 3]);
    assert_eq!(sel.items(), &[1, 2, 3]);
    let rev = sel.revision();

    sel.replace_with([1, 2, 3]);
    assert_eq!(sel.revision(), rev);
}

#[test]
fn extend_with_only_bumps_when_something_is_new() {
    let mut sel = Selection::new();
    sel.replace_with([1, 2]);
    let rev = sel.revision();

    sel.extend_with([2, 1]);
    assert_eq!(sel.revision(), rev);

    sel.extend_with([2, 4]);
    assert_eq!(sel.items(), &[1, 2, 4]);
    assert_eq!(sel.primary(), Some(&4));
    assert!(sel.revision() > rev);
}

#[test]
fn retain_drops_dead_keys() {
    let mut sel = Selection::new();
    sel.replace_with([1, 2, 3, 4]);
    sel.retain(|k| k % 2 == 0);
    assert_eq!(sel.items(), &[2, 4]);
}

#[test]
fn clear_bumps_revision_only_on_change() {
    let mut sel = Selection::<u32>::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.select_only(1);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn sub_selection_toggle_and_replace() {
    let mut sub = SubSelection::new();
    sub.toggle(1_u32, 2);
    sub.toggle(1, 0);
    assert_eq!(sub.selected(&1), &[0, 2]);

    sub.toggle(1, 2);
    assert_eq!(sub.selected(&1), &[0]);

    sub.replace(1, [4, 3, 3]);
    assert_eq!(sub.selected(&1), &[3, 4]);
    assert!(!sub.contains(&1, 0));
}

#[test]
fn sub_selection_shapes_are_independent() {
    let mut sub = SubSelection::new();
    sub.select_all(1_u32, 3);
    sub.select(2, 0);

    sub.clear_shape(&1);
    assert!(sub.selected(&1).is_empty());
    assert_eq!(sub.selected(&2), &[0]);

    sub.retain_shapes(|k| *k != 2);
    assert!(sub.is_empty());
}

#[test]
fn sub_selection_revision_tracks_changes() {
    let mut sub = SubSelection::new();
    sub.replace(1_u32, [0, 1]);
    let rev = sub.revision();

    sub.replace(1, [1, 0]);
    assert_eq!(sub.revision(), rev);

    sub.clear();
    assert!(sub.revision() > rev);
}
