// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use compare::Compare;

/// Storage that the functions in [`raw`](../raw/index.html) arrange into a min-max heap.
///
/// The algorithms never look at items directly. They only compare and swap
/// positions and grow or shrink the storage at its end. `less` must describe a
/// total order that stays the same for the duration of each call.
pub trait Store {
    type Item;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the item at `i` orders before the item at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the items at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Appends an item after the last position.
    fn push(&mut self, item: Self::Item);

    /// Removes the last item and returns it, or `None` if there is none.
    fn pop(&mut self) -> Option<Self::Item>;
}

impl<T: Ord> Store for Vec<T> {
    type Item = T;

    #[inline] fn len(&self) -> usize { Vec::len(self) }
    #[inline] fn less(&self, i: usize, j: usize) -> bool { self[i] < self[j] }
    #[inline] fn swap(&mut self, i: usize, j: usize) { <[T]>::swap(self, i, j) }
    #[inline] fn push(&mut self, item: T) { Vec::push(self, item) }
    #[inline] fn pop(&mut self) -> Option<T> { Vec::pop(self) }
}

/// A vector ordered by an arbitrary comparator.
///
/// # Examples
///
/// ```
/// use compare::{Compare, natural};
/// use min_max_heap::raw;
/// use min_max_heap::store::Ordered;
///
/// let mut v = vec![3, 1, 4, 1, 5];
/// let cmp = natural::<i32>().rev();
/// raw::init(&mut Ordered::new(&mut v, &cmp));
/// // Under the reversed order the greatest item sits at the root.
/// assert_eq!(v[0], 5);
/// ```
pub struct Ordered<'a, T: 'a, C: 'a> {
    data: &'a mut Vec<T>,
    cmp: &'a C,
}

impl<'a, T, C: Compare<T>> Ordered<'a, T, C> {
    pub fn new(data: &'a mut Vec<T>, cmp: &'a C) -> Ordered<'a, T, C> {
        Ordered { data: data, cmp: cmp }
    }
}

impl<'a, T, C: Compare<T>> Store for Ordered<'a, T, C> {
    type Item = T;

    #[inline] fn len(&self) -> usize { self.data.len() }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.compares_lt(&self.data[i], &self.data[j])
    }

    #[inline] fn swap(&mut self, i: usize, j: usize) { self.data.swap(i, j) }
    #[inline] fn push(&mut self, item: T) { self.data.push(item) }
    #[inline] fn pop(&mut self) -> Option<T> { self.data.pop() }
}
