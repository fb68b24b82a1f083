//! Utility stream combinators: step_by, inspect, enumerate, chain and the
//! searching terminal operations (any, all, find, position, last, max, min, eq, ne)
use std::ops::ControlFlow;

use super::core::{check_bounded, Stream, StreamExt};
use crate::error::{expect_valid, StreamError, StreamResult};

// StepBy
#[derive(Debug, Clone)]
pub struct StepBy<S> {
    pub(crate) stream: S,
    pub(crate) step_minus_one: usize,
    pub(crate) first_take: bool,
}

impl<S> StepBy<S> {
    pub fn try_new(stream: S, step: usize) -> StreamResult<Self> {
        let step = StreamError::require_non_zero("StepBy", "step", step)?;
        Ok(Self { stream, step_minus_one: step - 1, first_take: true })
    }

    fn step(&self) -> usize {
        self.step_minus_one + 1
    }
}

impl<S> Stream for StepBy<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let skip = if self.first_take { 0 } else { self.step_minus_one };
        self.first_take = false;
        self.stream.nth(skip)
    }

    fn size_hint(&self) -> Option<usize> {
        let upstream = self.stream.size_hint()?;
        if self.first_take {
            // ceil(upstream / step)
            Some(if upstream == 0 { 0 } else { 1 + (upstream - 1) / self.step() })
        } else {
            Some(upstream / self.step())
        }
    }
}

// Inspect
#[derive(Clone)]
pub struct Inspect<S, F> {
    pub(crate) stream: S,
    pub(crate) f: F,
}

impl<S, F> Stream for Inspect<S, F>
where
    S: Stream,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stream.next()?;
        (self.f)(&item);
        Some(item)
    }

    fn size_hint(&self) -> Option<usize> {
        self.stream.size_hint()
    }
}

// Chain
#[derive(Debug, Clone)]
pub struct Chain<S1, S2> {
    pub(crate) first: S1,
    pub(crate) second: S2,
    pub(crate) first_done: bool,
}

impl<S1, S2> Stream for Chain<S1, S2>
where
    S1: Stream,
    S2: Stream<Item = S1::Item>,
{
    type Item = S1::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.first_done {
            match self.first.next() {
                Some(item) => return Some(item),
                None => self.first_done = true,
            }
        }
        self.second.next()
    }

    /// Unbounded as soon as either side is.
    fn size_hint(&self) -> Option<usize> {
        let first = if self.first_done { 0 } else { self.first.size_hint()? };
        let second = self.second.size_hint()?;
        Some(first.saturating_add(second))
    }

    fn count(&mut self) -> StreamResult<usize> {
        check_bounded(self.size_hint(), "count")?;
        let first = if self.first_done { 0 } else { self.first.count()? };
        self.first_done = true;
        Ok(first.saturating_add(self.second.count()?))
    }
}

// Enumerate
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    pub(crate) stream: S,
    pub(crate) index: usize,
}

impl<S> Stream for Enumerate<S>
where
    S: Stream,
{
    type Item = (usize, S::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stream.next()?;
        let idx = self.index;
        self.index = self.index.saturating_add(1);
        Some((idx, item))
    }

    fn size_hint(&self) -> Option<usize> {
        self.stream.size_hint()
    }

    fn count(&mut self) -> StreamResult<usize> {
        self.stream.count()
    }
}

// Extension trait for these combinators
pub trait UtilityStreamExt: Stream + Sized {
    /// Yields the first item, then every `step`-th one. Panics if `step` is zero.
    fn step_by(self, step: usize) -> StepBy<Self> {
        expect_valid(StepBy::try_new(self, step))
    }

    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect { stream: self, f }
    }

    fn enumerate(self) -> Enumerate<Self> {
        Enumerate { stream: self, index: 0 }
    }

    fn enumerate_from(self, start: usize) -> Enumerate<Self> {
        Enumerate { stream: self, index: start }
    }

    fn chain<S2>(self, other: S2) -> Chain<Self, S2>
    where
        S2: Stream<Item = Self::Item>,
    {
        Chain { first: self, second: other, first_done: false }
    }

    /// Stops pulling at the first item that satisfies `f`.
    fn any<F>(&mut self, mut f: F) -> StreamResult<bool>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_fold(false, |_, item| {
            if f(&item) {
                ControlFlow::Break(true)
            } else {
                ControlFlow::Continue(false)
            }
        })
    }

    /// Stops pulling at the first item that fails `f`.
    fn all<F>(&mut self, mut f: F) -> StreamResult<bool>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_fold(true, |_, item| {
            if f(&item) {
                ControlFlow::Continue(true)
            } else {
                ControlFlow::Break(false)
            }
        })
    }

    fn find<F>(&mut self, mut f: F) -> StreamResult<Option<Self::Item>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.size_hint_checked("find")?;
        while let Some(item) = self.next() {
            if f(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    /// Zero based index of the first item that satisfies `f`.
    fn position<F>(&mut self, mut f: F) -> StreamResult<Option<usize>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.size_hint_checked("position")?;
        let mut pos = 0usize;
        while let Some(item) = self.next() {
            if f(&item) {
                return Ok(Some(pos));
            }
            pos = pos.saturating_add(1);
        }
        Ok(None)
    }

    fn last(&mut self) -> StreamResult<Option<Self::Item>> {
        self.reduce(|_, item| item)
    }

    /// The largest item; on ties the first one wins.
    fn max(&mut self) -> StreamResult<Option<Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        self.reduce(|best, item| if item > best { item } else { best })
    }

    /// The smallest item; on ties the first one wins.
    fn min(&mut self) -> StreamResult<Option<Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        self.reduce(|best, item| if item < best { item } else { best })
    }

    fn eq<S2>(self, other: S2) -> StreamResult<bool>
    where
        S2: Stream,
        Self::Item: PartialEq<S2::Item>,
    {
        self.eq_by(other, |a, b| a == b)
    }

    /// Pairwise comparison with `f`. Streams of different length are never equal.
    fn eq_by<S2, F>(self, other: S2, mut f: F) -> StreamResult<bool>
    where
        S2: Stream,
        F: FnMut(&Self::Item, &S2::Item) -> bool,
    {
        // Bounded as long as one side is, the same rule zip uses.
        check_bounded(self.size_hint().or(other.size_hint()), "eq")?;
        let (mut first, mut second) = (self, other);
        loop {
            let a = match first.next() {
                Some(a) => a,
                None => return Ok(second.next().is_none()),
            };
            let b = match second.next() {
                Some(b) => b,
                None => return Ok(false),
            };
            if !f(&a, &b) {
                return Ok(false);
            }
        }
    }

    fn ne<S2>(self, other: S2) -> StreamResult<bool>
    where
        S2: Stream,
        Self::Item: PartialEq<S2::Item>,
    {
        self.eq(other).map(|equal| !equal)
    }

    /// True as soon as one pair differs by `f`, or the lengths differ.
    fn ne_by<S2, F>(self, other: S2, mut f: F) -> StreamResult<bool>
    where
        S2: Stream,
        F: FnMut(&Self::Item, &S2::Item) -> bool,
    {
        self.eq_by(other, |a, b| !f(a, b)).map(|equal| !equal)
    }
}

impl<T> UtilityStreamExt for T where T: Stream + Sized {}
