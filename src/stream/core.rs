//! Core stream contract, the basic adapters and every terminal operation.
//!
//! A [`Stream`] is a pull based producer: callers ask for the next item until
//! it answers `None`. Adapters own the stream they wrap by value, so a
//! pipeline is an ownership tree built by moving each stage into the next.
//! Terminal operations that have to drive a stream to exhaustion refuse to
//! start when the stream reports itself as unbounded.

use std::ops::{Add, ControlFlow, Mul};

use crate::error::{expect_valid, StreamError, StreamResult};

/// The pull contract shared by every producer and adapter.
pub trait Stream {
    type Item;

    /// Pulls the next item. Once this returns `None` it keeps returning `None`.
    fn next(&mut self) -> Option<Self::Item>;

    /// Best effort count of the remaining items.
    ///
    /// `None` marks a stream that is unbounded (or whose length cannot be
    /// bounded cheaply). `Some(n)` is only good for pre-allocation; loops must
    /// still stop on the exhaustion signal of [`Stream::next`].
    fn size_hint(&self) -> Option<usize>;

    /// Counts the remaining items, consuming them.
    ///
    /// Adapters that cannot change cardinality override this to skip their
    /// per-item work.
    fn count(&mut self) -> StreamResult<usize> {
        check_bounded(self.size_hint(), "count")?;
        let mut count = 0usize;
        while self.next().is_some() {
            count = count.saturating_add(1);
        }
        Ok(count)
    }

    /// Discards up to `n` items, stopping early if the stream runs dry.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// Discards `n` items and returns the one after them.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.advance_by(n);
        self.next()
    }
}

/// A stream that can also be pulled from its back end.
pub trait DoubleEndedStream: Stream {
    fn next_back(&mut self) -> Option<Self::Item>;
}

impl<S> Stream for &mut S
where
    S: Stream + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> Option<usize> {
        (**self).size_hint()
    }

    fn count(&mut self) -> StreamResult<usize> {
        (**self).count()
    }

    fn advance_by(&mut self, n: usize) {
        (**self).advance_by(n)
    }
}

impl<S> Stream for Box<S>
where
    S: Stream + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> Option<usize> {
        (**self).size_hint()
    }

    fn count(&mut self) -> StreamResult<usize> {
        (**self).count()
    }

    fn advance_by(&mut self, n: usize) {
        (**self).advance_by(n)
    }
}

pub(crate) fn check_bounded(hint: Option<usize>, operation: &'static str) -> StreamResult<usize> {
    match hint {
        Some(size) => Ok(size),
        None => {
            log::warn!("refusing `{}` on an unbounded stream", operation);
            Err(StreamError::unbounded(operation))
        }
    }
}

/// Extension trait providing the basic adapters and the terminal operations
pub trait StreamExt: Stream + Sized {
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map { stream: self, f }
    }

    fn filter<F>(self, f: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter { stream: self, f }
    }

    /// Yields at most `n` items. Panics if `n` is zero.
    fn take(self, n: usize) -> Take<Self> {
        expect_valid(Take::try_new(self, n))
    }

    fn skip(self, n: usize) -> Skip<Self> {
        Skip { stream: self, n }
    }

    fn cloned<'a, T>(self) -> Map<Self, fn(&'a T) -> T>
    where
        Self: Stream<Item = &'a T>,
        T: Clone + 'a,
    {
        let f: fn(&'a T) -> T = T::clone;
        Map { stream: self, f }
    }

    /// Borrows the stream so an adapter can wrap it without taking ownership.
    fn by_ref(&mut self) -> &mut Self {
        self
    }

    /// The size hint, or an `Unbounded` error naming `operation`.
    fn size_hint_checked(&self, operation: &'static str) -> StreamResult<usize> {
        check_bounded(self.size_hint(), operation)
    }

    fn collect(&mut self) -> StreamResult<Vec<Self::Item>> {
        let size = self.size_hint_checked("collect")?;
        let mut collection = Vec::with_capacity(size);
        while let Some(item) = self.next() {
            collection.push(item);
        }
        Ok(collection)
    }

    /// Collects into any extendable container instead of a `Vec`.
    fn collect_into<B>(&mut self) -> StreamResult<B>
    where
        B: Default + Extend<Self::Item>,
    {
        self.size_hint_checked("collect")?;
        let mut collection = B::default();
        while let Some(item) = self.next() {
            collection.extend(std::iter::once(item));
        }
        Ok(collection)
    }

    fn fold<B, F>(&mut self, init: B, mut f: F) -> StreamResult<B>
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.size_hint_checked("fold")?;
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        Ok(acc)
    }

    fn for_each<F>(&mut self, mut f: F) -> StreamResult<()>
    where
        F: FnMut(Self::Item),
    {
        self.size_hint_checked("for_each")?;
        while let Some(item) = self.next() {
            f(item);
        }
        Ok(())
    }

    /// Folds until `f` answers `ControlFlow::Break`, which ends the traversal
    /// and becomes the result.
    fn try_fold<B, F>(&mut self, init: B, mut f: F) -> StreamResult<B>
    where
        F: FnMut(B, Self::Item) -> ControlFlow<B, B>,
    {
        self.size_hint_checked("try_fold")?;
        let mut acc = init;
        while let Some(item) = self.next() {
            match f(acc, item) {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(done) => return Ok(done),
            }
        }
        Ok(acc)
    }

    /// Folds with the first item as the initial accumulator.
    fn reduce<F>(&mut self, mut f: F) -> StreamResult<Option<Self::Item>>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.size_hint_checked("reduce")?;
        // The hint is checked once, before the first pull.
        let mut acc = match self.next() {
            Some(first) => first,
            None => return Ok(None),
        };
        while let Some(item) = self.next() {
            acc = f(acc, item);
        }
        Ok(Some(acc))
    }

    fn sum<R>(&mut self) -> StreamResult<R>
    where
        R: Default + Add<Self::Item, Output = R>,
    {
        self.fold(R::default(), |acc, item| acc + item)
    }

    fn product(&mut self) -> StreamResult<Option<Self::Item>>
    where
        Self::Item: Mul<Output = Self::Item>,
    {
        self.reduce(|acc, item| acc * item)
    }
}

impl<T> StreamExt for T where T: Stream + Sized {}

// Map
#[derive(Clone)]
pub struct Map<S, F> {
    pub(crate) stream: S,
    pub(crate) f: F,
}

impl<S, U, F> Stream for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next().map(&mut self.f)
    }

    fn size_hint(&self) -> Option<usize> {
        self.stream.size_hint()
    }

    // Mapping never changes cardinality, so the function need not run.
    fn count(&mut self) -> StreamResult<usize> {
        self.stream.count()
    }
}

// Filter
#[derive(Clone)]
pub struct Filter<S, F> {
    pub(crate) stream: S,
    pub(crate) f: F,
}

impl<S, F> Stream for Filter<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.stream.next()?;
            if (self.f)(&item) {
                return Some(item);
            }
        }
    }

    /// Unshrunk upstream hint: knowing the match rate would mean a full scan.
    fn size_hint(&self) -> Option<usize> {
        self.stream.size_hint()
    }
}

// Take
#[derive(Debug, Clone)]
pub struct Take<S> {
    pub(crate) stream: S,
    pub(crate) size: usize,
    pub(crate) taken: usize,
}

impl<S> Take<S> {
    pub fn try_new(stream: S, size: usize) -> StreamResult<Self> {
        let size = StreamError::require_non_zero("Take", "size", size)?;
        Ok(Self { stream, size, taken: 0 })
    }
}

impl<S: Stream> Stream for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.taken == self.size {
            return None;
        }
        let item = self.stream.next()?;
        self.taken += 1;
        Some(item)
    }

    fn size_hint(&self) -> Option<usize> {
        let remaining = self.size - self.taken;
        match self.stream.size_hint() {
            Some(upstream) => Some(remaining.min(upstream)),
            None => Some(remaining),
        }
    }
}

// Skip
#[derive(Debug, Clone)]
pub struct Skip<S> {
    pub(crate) stream: S,
    pub(crate) n: usize,
}

impl<S: Stream> Stream for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n > 0 {
            let n = std::mem::take(&mut self.n);
            return self.stream.nth(n);
        }
        self.stream.next()
    }

    fn size_hint(&self) -> Option<usize> {
        self.stream.size_hint().map(|size| size.saturating_sub(self.n))
    }
}
