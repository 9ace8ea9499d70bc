// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Min-max heap operations on any [`Store`](../store/trait.Store.html).
//!
//! These functions keep no state of their own. The shape of the heap is
//! derived from the store's current length on every call, so a store may be
//! handed to them directly, e.g. a plain `Vec<T: Ord>`:
//!
//! ```
//! use min_max_heap::raw;
//!
//! let mut v = vec![6, 10, 13, 3, 12, 8, 12, 2, 12, 16];
//! raw::init(&mut v);
//! assert_eq!(raw::pop(&mut v), Ok(2));
//! assert_eq!(raw::pop_max(&mut v), Ok(16));
//! assert_eq!(v.len(), 8);
//! ```

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::level::{first_child, first_grandchild, grandparent, is_min_level, parent};
use crate::store::Store;

// Every node on a min level is less than or equal to all of its descendants
// and every node on a max level is greater than or equal to all of its
// descendants:
//
//                 2                 min
//             /       \
//           16         13           max
//         /    \     /    \
//        3      6   8     12        min
//       / \    / \
//     12  12  10           ...      max
//
// Checking a node against its children and grandchildren is enough for the
// whole subtree to follow by induction.

/// Returns `true` if `i` must sit above `j` on a level of the given parity.
#[inline]
fn before<S: Store + ?Sized>(s: &S, min: bool, i: usize, j: usize) -> bool {
    if min { s.less(i, j) } else { s.less(j, i) }
}

/// The item at `i` may be too large (min level) or too small (max level)
/// for its otherwise valid subtree. Moves it down until the subtree is valid.
fn trickle_down<S: Store + ?Sized>(s: &mut S, mut i: usize) {
    let min = is_min_level(i);
    let len = s.len();
    loop {
        let c = first_child(i);
        if c >= len { return; } // leaf
        // The most extreme of up to two children and four grandchildren.
        let g = first_grandchild(i);
        let mut m = c;
        if c + 1 < len && before(s, min, c + 1, m) { m = c + 1; }
        for d in g..len.min(g + 4) {
            if before(s, min, d, m) { m = d; }
        }

        if !before(s, min, m, i) { return; }
        s.swap(m, i);
        if m < g { return; } // a child; nothing below it can be violated

        // The item moved into the grandchild may not fit under the
        // opposite-level node in between.
        let p = parent(m);
        if before(s, min, p, m) { s.swap(p, m); }
        i = m;
    }
}

/// Moves the item at `i` up through its grandparents while it belongs above them.
fn bubble_up_levels<S: Store + ?Sized>(s: &mut S, min: bool, mut i: usize) {
    while let Some(g) = grandparent(i) {
        if !before(s, min, i, g) { return; }
        s.swap(i, g);
        i = g;
    }
}

/// The item at `i` may violate the order of its ancestors. Moves it up until
/// the heap is valid.
fn bubble_up<S: Store + ?Sized>(s: &mut S, i: usize) {
    if i == 0 { return; }
    let min = is_min_level(i);
    let p = parent(i);
    if before(s, min, p, i) {
        // It belongs on the parent's side of the order, i.e. the opposite one.
        s.swap(p, i);
        bubble_up_levels(s, !min, p);
    } else {
        bubble_up_levels(s, min, i);
    }
}

/// Removes the item at `i < s.len()`, then repairs the heap around the
/// item moved into its place.
fn remove_at<S: Store + ?Sized>(s: &mut S, i: usize) -> Result<S::Item> {
    let last = s.len() - 1;
    if i != last { s.swap(i, last); }
    let item = s.pop().ok_or(Error::Empty)?;
    if i < last {
        bubble_up(s, i);
        trickle_down(s, i);
    }
    Ok(item)
}

/// Arranges the items of `s` into a min-max heap in `O(n)` time.
pub fn init<S: Store + ?Sized>(s: &mut S) {
    let len = s.len();
    trace!("heapify {} items", len);
    for i in (0..len / 2).rev() {
        trickle_down(s, i);
    }
}

/// Adds `item` to the heap in `O(log n)` time.
pub fn push<S: Store + ?Sized>(s: &mut S, item: S::Item) {
    s.push(item);
    let last = s.len() - 1;
    bubble_up(s, last);
}

/// Removes the smallest item from the heap and returns it.
///
/// Returns `Error::Empty` if the heap is empty.
pub fn pop<S: Store + ?Sized>(s: &mut S) -> Result<S::Item> {
    match min_index(s) {
        Some(i) => remove_at(s, i),
        None => empty(),
    }
}

/// Removes the greatest item from the heap and returns it.
///
/// Returns `Error::Empty` if the heap is empty.
pub fn pop_max<S: Store + ?Sized>(s: &mut S) -> Result<S::Item> {
    match max_index(s) {
        Some(i) => remove_at(s, i),
        None => empty(),
    }
}

/// Restores the heap after the item at `index` has been changed in place.
///
/// Returns `Error::OutOfRange` if `index` is not a position of the heap.
pub fn fix<S: Store + ?Sized>(s: &mut S, index: usize) -> Result<()> {
    check_index(s, index)?;
    trace!("fix index {} of {}", index, s.len());
    bubble_up(s, index);
    trickle_down(s, index);
    Ok(())
}

/// Removes the item at `index` from the heap and returns it.
///
/// Returns `Error::OutOfRange` if `index` is not a position of the heap.
pub fn remove<S: Store + ?Sized>(s: &mut S, index: usize) -> Result<S::Item> {
    check_index(s, index)?;
    trace!("remove index {} of {}", index, s.len());
    remove_at(s, index)
}

/// Returns the position of the smallest item, or `None` if the heap is empty.
pub fn min_index<S: Store + ?Sized>(s: &S) -> Option<usize> {
    if s.len() == 0 { None } else { Some(0) }
}

/// Returns the position of the greatest item, or `None` if the heap is empty.
pub fn max_index<S: Store + ?Sized>(s: &S) -> Option<usize> {
    match s.len() {
        0 => None,
        1 => Some(0),
        2 => Some(1),
        _ => Some(if s.less(1, 2) { 2 } else { 1 }),
    }
}

/// Returns the first pair `(ancestor, descendant)` that violates the heap
/// order, or `None` if `s` is a valid min-max heap.
pub fn violation<S: Store + ?Sized>(s: &S) -> Option<(usize, usize)> {
    let len = s.len();
    for i in 0..len / 2 {
        let min = is_min_level(i);
        let c = first_child(i);
        let g = first_grandchild(i);
        let found = (c..len.min(c + 2)).chain(g..len.min(g + 4))
            .find(|&d| before(s, min, d, i));
        if let Some(d) = found {
            return Some((i, d));
        }
    }
    None
}

/// Checks if `s` is a valid min-max heap.
pub fn is_valid<S: Store + ?Sized>(s: &S) -> bool {
    violation(s).is_none()
}

fn check_index<S: Store + ?Sized>(s: &S, index: usize) -> Result<()> {
    let len = s.len();
    if index < len {
        Ok(())
    } else {
        debug!("index {} out of range for heap of length {}", index, len);
        Err(Error::OutOfRange { index: index, len: len })
    }
}

fn empty<T>() -> Result<T> {
    debug!("pop from empty heap");
    Err(Error::Empty)
}
