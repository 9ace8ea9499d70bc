//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap order holds after every one of them and that no item is lost.

mod common;

use proptest::prelude::*;

use common::verify;
use min_max_heap::raw;
use min_max_heap::{Error, MinMaxHeap};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    PopMax,
    Remove(usize),
    Fix(usize, i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        1 => Just(Op::PopMax),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(i, x)| Op::Fix(i, x)),
    ]
}

/// Removes one occurrence of `x` from the sorted `model`.
fn take(model: &mut Vec<i32>, x: i32) -> Result<(), TestCaseError> {
    match model.binary_search(&x) {
        Ok(pos) => {
            model.remove(pos);
            Ok(())
        }
        Err(_) => Err(TestCaseError::fail(format!("{} was never inserted", x))),
    }
}

fn insert(model: &mut Vec<i32>, x: i32) {
    let pos = model.binary_search(&x).unwrap_or_else(|p| p);
    model.insert(pos, x);
}

proptest! {
    #[test]
    fn init_establishes_order(mut v in prop::collection::vec(any::<i32>(), 0..300)) {
        raw::init(&mut v);
        verify(&v);
    }

    #[test]
    fn pop_drains_ascending(v in prop::collection::vec(-100i32..100, 0..200)) {
        let mut expected = v.clone();
        expected.sort();
        let mut h = v;
        raw::init(&mut h);
        let mut out = vec![];
        while let Ok(x) = raw::pop(&mut h) {
            verify(&h);
            out.push(x);
        }
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn pop_max_drains_descending(v in prop::collection::vec(-100i32..100, 0..200)) {
        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));
        let mut h = v;
        raw::init(&mut h);
        let mut out = vec![];
        while let Ok(x) = raw::pop_max(&mut h) {
            verify(&h);
            out.push(x);
        }
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn operations_keep_order_and_items(ops in prop::collection::vec(op(), 0..300)) {
        let mut h = vec![];
        let mut model: Vec<i32> = vec![];

        for op in ops {
            match op {
                Op::Push(x) => {
                    raw::push(&mut h, x);
                    insert(&mut model, x);
                }
                Op::Pop => match raw::pop(&mut h) {
                    Ok(x) => {
                        prop_assert_eq!(Some(&x), model.first());
                        take(&mut model, x)?;
                    }
                    Err(e) => {
                        prop_assert_eq!(e, Error::Empty);
                        prop_assert!(model.is_empty());
                    }
                },
                Op::PopMax => match raw::pop_max(&mut h) {
                    Ok(x) => {
                        prop_assert_eq!(Some(&x), model.last());
                        take(&mut model, x)?;
                    }
                    Err(e) => {
                        prop_assert_eq!(e, Error::Empty);
                        prop_assert!(model.is_empty());
                    }
                },
                Op::Remove(i) => {
                    if h.is_empty() {
                        prop_assert_eq!(raw::remove(&mut h, i),
                                        Err(Error::OutOfRange { index: i, len: 0 }));
                    } else {
                        let i = i % h.len();
                        let want = h[i];
                        prop_assert_eq!(raw::remove(&mut h, i), Ok(want));
                        take(&mut model, want)?;
                    }
                }
                Op::Fix(i, x) => {
                    if !h.is_empty() {
                        let i = i % h.len();
                        take(&mut model, h[i])?;
                        insert(&mut model, x);
                        h[i] = x;
                        prop_assert_eq!(raw::fix(&mut h, i), Ok(()));
                        let fixed = h.clone();
                        prop_assert_eq!(raw::fix(&mut h, i), Ok(()));
                        prop_assert_eq!(&h, &fixed);
                    }
                }
            }
            verify(&h);
            prop_assert_eq!(h.len(), model.len());
        }

        let mut rest = vec![];
        while let Ok(x) = raw::pop(&mut h) {
            rest.push(x);
        }
        prop_assert_eq!(rest, model);
    }

    #[test]
    fn collection_matches_sorted_model(v in prop::collection::vec(any::<u16>(), 1..200)) {
        let mut heap: MinMaxHeap<u16> = v.iter().cloned().collect();
        let mut sorted = v;
        sorted.sort();
        prop_assert_eq!(heap.min_max(), Some((&sorted[0], &sorted[sorted.len() - 1])));
        while !sorted.is_empty() {
            prop_assert_eq!(heap.pop_max(), sorted.pop());
            if !sorted.is_empty() {
                prop_assert_eq!(heap.pop_min(), Some(sorted.remove(0)));
            }
        }
        prop_assert!(heap.is_empty());
    }
}
