// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A double-ended priority queue implemented with a min-max heap.
//!
//! A `MinMaxHeap` can be used wherever a [`BinaryHeap`][bh] can, but has the ability to
//! efficiently access the heap's smallest item and accepts custom comparators. If you only need
//! access to either the smallest item or the greatest item, `BinaryHeap` is more efficient.
//!
//! Insertion, popping the smallest or greatest item, and removing an arbitrary item are
//! `O(log n)`. Retrieving the smallest or greatest item is `O(1)`. Building a heap from a
//! vector is `O(n)`.
//!
//! The algorithms themselves live in [`raw`](raw/index.html) and work on anything that
//! implements [`Store`](store/trait.Store.html).
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

use std::fmt::{self, Debug};
use std::iter;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::vec;

use compare::{Compare, Natural, natural};

pub use crate::error::{Error, Result};

mod error;
mod level;
pub mod raw;
pub mod store;

use crate::store::Ordered;

/// A double-ended priority queue implemented with a min-max heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap, other than through
/// [`PeekMut`](struct.PeekMut.html). This is normally only possible through
/// `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct MinMaxHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for MinMaxHeap<T, C> {
    #[inline]
    fn default() -> MinMaxHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> MinMaxHeap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> MinMaxHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.min_max(), Some((&1, &6)));
    /// ```
    fn from(vec: Vec<T>) -> MinMaxHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let mut heap: MinMaxHeap<i32, _> = MinMaxHeap::with_comparator(natural().rev());
    /// heap.extend(vec![1, 3, 2]);
    /// assert_eq!(heap.min_max(), Some((&3, &1)));
    /// ```
    pub fn with_comparator(cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: vec![], cmp: cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: Vec::with_capacity(capacity), cmp: cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// This takes `O(n)` time.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> MinMaxHeap<T, C> {
        raw::init(&mut Ordered::new(&mut vec, &cmp));
        let heap = MinMaxHeap { data: vec, cmp: cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    fn store(&mut self) -> Ordered<T, C> {
        Ordered::new(&mut self.data, &self.cmp)
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns the items of the heap in the order they are stored.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a reference to the smallest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a guard granting mutable access to the smallest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::MinMaxHeap;
    ///
    /// let mut heap = MinMaxHeap::from(vec![2, 1, 3]);
    /// *heap.peek_min_mut().unwrap() = 4;
    /// assert_eq!(heap.min_max(), Some((&2, &4)));
    /// ```
    pub fn peek_min_mut(&mut self) -> Option<PeekMut<T, C>> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            None
        } else {
            Some(PeekMut { heap: self, index: 0, sifted: false })
        }
    }

    /// Returns a reference to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn max(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.max_index().map(|i| &self.data[i])
    }

    /// Returns a guard granting mutable access to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek_max_mut(&mut self) -> Option<PeekMut<T, C>> {
        debug_assert!(self.is_valid());
        let index = self.max_index();
        index.map(move |index| PeekMut { heap: self, index: index, sifted: false })
    }

    /// Returns references to the smallest and greatest items in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min_max(&self) -> Option<(&T, &T)> {
        debug_assert!(self.is_valid());
        self.max_index().map(|i| (&self.data[0], &self.data[i]))
    }

    /// Returns a guard granting mutable access to the item stored at `index`.
    ///
    /// Returns `Error::OutOfRange` if `index` is not less than `self.len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<PeekMut<T, C>> {
        debug_assert!(self.is_valid());
        if index < self.data.len() {
            Ok(PeekMut { heap: self, index: index, sifted: false })
        } else {
            Err(Error::OutOfRange { index: index, len: self.data.len() })
        }
    }

    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.cmp.compares_lt(&self.data[1], &self.data[2]) { 2 } else { 1 }),
        }
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    ///
    /// Note that the allocator may give the heap more space than it
    /// requests. Therefore capacity can not be relied upon to be precisely
    /// minimal. Prefer `reserve` if future insertions are expected.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    ///
    /// The heap may reserve more space to avoid frequent reallocations.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_min(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let min = raw::pop(&mut self.store()).ok();
        debug_assert!(self.is_valid());
        min
    }

    /// Removes the greatest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_max(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let max = raw::pop_max(&mut self.store()).ok();
        debug_assert!(self.is_valid());
        max
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        raw::push(&mut self.store(), item);
        debug_assert!(self.is_valid());
    }

    /// Removes the item stored at `index` and returns it.
    ///
    /// Returns `Error::OutOfRange` if `index` is not less than `self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_max_heap::{Error, MinMaxHeap};
    ///
    /// let mut heap = MinMaxHeap::from(vec![3, 1, 2]);
    /// let pos = heap.iter().position(|&x| x == 2).unwrap();
    /// assert_eq!(heap.remove(pos), Ok(2));
    /// assert_eq!(heap.remove(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        debug_assert!(self.is_valid());
        let item = raw::remove(&mut self.store(), index);
        debug_assert!(self.is_valid());
        item
    }

    /// Consumes the heap and returns its items as a vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop_min() {
            vec.push(item);
        }
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in arbitrary order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    fn is_valid(&self) -> bool {
        let len = self.data.len();
        (0..len / 2).all(|i| {
            let min = level::is_min_level(i);
            let c = level::first_child(i);
            let g = level::first_grandchild(i);
            (c..len.min(c + 2)).chain(g..len.min(g + 4)).all(|d| {
                if min {
                    self.cmp.compares_le(&self.data[i], &self.data[d])
                } else {
                    self.cmp.compares_ge(&self.data[i], &self.data[d])
                }
            })
        })
    }
}

impl<T: Debug, C: Compare<T>> Debug for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for MinMaxHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinMaxHeap<T, C> {
        MinMaxHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

/// An iterator over a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`MinMaxHeap::iter`](struct.MinMaxHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`IntoIterator::into_iter`](
/// https://doc.rust-lang.org/stable/std/iter/trait.IntoIterator.html#tymethod.into_iter).
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `MinMaxHeap` in arbitrary order.
///
/// Acquire through [`MinMaxHeap::drain`](struct.MinMaxHeap.html#method.drain).
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for MinMaxHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinMaxHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

/// Mutable access to one item of a `MinMaxHeap`.
///
/// The heap is repaired when the guard is dropped.
///
/// Acquire through [`MinMaxHeap::peek_min_mut`](struct.MinMaxHeap.html#method.peek_min_mut),
/// [`MinMaxHeap::peek_max_mut`](struct.MinMaxHeap.html#method.peek_max_mut) or
/// [`MinMaxHeap::get_mut`](struct.MinMaxHeap.html#method.get_mut).
pub struct PeekMut<'a, T: 'a, C: 'a + Compare<T> = Natural<T>> {
    heap: &'a mut MinMaxHeap<T, C>,
    index: usize,
    sifted: bool,
}

impl<'a, T: 'a, C: Compare<T>> Drop for PeekMut<'a, T, C> {
    fn drop(&mut self) {
        if !self.sifted {
            // The index was in range when the guard was handed out and the
            // heap's length cannot change while it is borrowed.
            let _ = raw::fix(&mut self.heap.store(), self.index);
        }
    }
}

impl<'a, T: 'a, C: Compare<T>> Deref for PeekMut<'a, T, C> {
    type Target = T;
    fn deref(&self) -> &T { &self.heap.data[self.index] }
}

impl<'a, T: 'a, C: Compare<T>> DerefMut for PeekMut<'a, T, C> {
    fn deref_mut(&mut self) -> &mut T { &mut self.heap.data[self.index] }
}

impl<'a, T: 'a, C: Compare<T>> PeekMut<'a, T, C> {
    /// Removes the item from the heap and returns it.
    pub fn pop(mut self) -> T {
        self.sifted = true;
        let index = self.index;
        match raw::remove(&mut self.heap.store(), index) {
            Ok(item) => item,
            Err(e) => unreachable!("guard outlived its item: {}", e),
        }
    }
}
