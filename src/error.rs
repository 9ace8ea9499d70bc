// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;

/// Error returned when a heap operation's precondition does not hold.
///
/// The heap is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An item was requested from an empty heap.
    Empty,
    /// The index does not refer to an item of the heap.
    OutOfRange {
        index: usize,
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Empty => write!(f, "heap is empty"),
            Error::OutOfRange { index, len } => {
                write!(f, "index {} out of range for heap of length {}", index, len)
            }
        }
    }
}

impl error::Error for Error {}

/// A specialized `Result` for heap operations.
pub type Result<T> = ::std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::Empty.to_string(), "heap is empty");
        assert_eq!(Error::OutOfRange { index: 7, len: 3 }.to_string(),
                   "index 7 out of range for heap of length 3");
    }
}
