//! Base producers: streams with no upstream of their own.
use std::marker::PhantomData;

use super::core::{DoubleEndedStream, Stream};

// ================================
// SliceStream
// ================================

/// Borrowing producer over a slice, with independent front and back cursors.
///
/// Items are references into the slice; cloning the stream copies only the
/// cursors, so the clone advances independently.
pub struct SliceStream<'a, T> {
    slice: &'a [T],
    head: usize,
    tail: usize,
}

impl<'a, T> SliceStream<'a, T> {
    /// The part of the slice not yet pulled from either end.
    pub fn as_slice(&self) -> &'a [T] {
        &self.slice[self.head..self.tail]
    }
}

impl<'a, T> Clone for SliceStream<'a, T> {
    fn clone(&self) -> Self {
        Self { slice: self.slice, head: self.head, tail: self.tail }
    }
}

impl<'a, T: std::fmt::Debug> std::fmt::Debug for SliceStream<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SliceStream").field(&self.as_slice()).finish()
    }
}

impl<'a, T> Stream for SliceStream<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let item = &self.slice[self.head];
        self.head += 1;
        Some(item)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.tail - self.head)
    }

    fn advance_by(&mut self, n: usize) {
        self.head = self.head.saturating_add(n).min(self.tail);
    }
}

impl<'a, T> DoubleEndedStream for SliceStream<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        Some(&self.slice[self.tail])
    }
}

/// Create a stream of references into `slice`
pub fn from_slice<T>(slice: &[T]) -> SliceStream<'_, T> {
    SliceStream { slice, head: 0, tail: slice.len() }
}

// ================================
// Iter
// ================================

/// Producer over any `std` iterator.
///
/// The size hint is the iterator's upper bound, so iterators without one
/// (`std::iter::repeat`, open ranges) count as unbounded.
#[derive(Debug, Clone)]
pub struct Iter<I> {
    iter: I,
    done: bool,
}

impl<I> Stream for Iter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next();
        self.done = item.is_none();
        item
    }

    fn size_hint(&self) -> Option<usize> {
        if self.done {
            Some(0)
        } else {
            self.iter.size_hint().1
        }
    }
}

impl<I> DoubleEndedStream for Iter<I>
where
    I: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.next_back();
        self.done = item.is_none();
        item
    }
}

/// Create a stream from an iterator
pub fn from_iter<I>(iter: I) -> Iter<I::IntoIter>
where
    I: IntoIterator,
{
    Iter { iter: iter.into_iter(), done: false }
}

// ================================
// Empty, Once, Repeat
// ================================

#[derive(Debug, Clone)]
pub struct Empty<T> {
    _phantom: PhantomData<T>,
}

impl<T> Stream for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }

    fn size_hint(&self) -> Option<usize> {
        Some(0)
    }
}

/// Create a stream that yields nothing
pub fn empty<T>() -> Empty<T> {
    Empty { _phantom: PhantomData }
}

#[derive(Debug, Clone)]
pub struct Once<T> {
    item: Option<T>,
}

impl<T> Stream for Once<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(usize::from(self.item.is_some()))
    }
}

/// Create a stream that yields `item` exactly once
pub fn once<T>(item: T) -> Once<T> {
    Once { item: Some(item) }
}

#[derive(Debug, Clone)]
pub struct Repeat<T> {
    item: T,
}

impl<T: Clone> Stream for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.item.clone())
    }

    fn size_hint(&self) -> Option<usize> {
        None
    }

    fn advance_by(&mut self, _n: usize) {}
}

/// Repeat a value indefinitely
pub fn repeat<T: Clone>(item: T) -> Repeat<T> {
    Repeat { item }
}
