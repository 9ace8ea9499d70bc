// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index arithmetic for the implicit binary tree.
//!
//! Node `i` has its children at `2i + 1` and `2i + 2`. Levels alternate
//! between min levels (even depth, including the root) and max levels.

/// Depth of index `i`, i.e. `floor(log2(i + 1))`.
#[inline]
pub fn level(i: usize) -> u32 {
    usize::BITS - 1 - (i + 1).leading_zeros()
}

/// Returns `true` if `i` lies on an even (min) level.
#[inline]
pub fn is_min_level(i: usize) -> bool {
    level(i) % 2 == 0
}

#[inline]
pub fn parent(i: usize) -> usize {
    debug_assert!(i > 0);
    (i - 1) / 2
}

/// Returns the grandparent of `i`, if it has one.
#[inline]
pub fn grandparent(i: usize) -> Option<usize> {
    if i > 2 { Some(parent(parent(i))) } else { None }
}

#[inline]
pub fn first_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub fn first_grandchild(i: usize) -> usize {
    4 * i + 3
}
