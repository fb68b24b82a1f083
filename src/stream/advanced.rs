//! Advanced stream combinators: filter_map, zip, moving_window, unzip
use super::core::{Stream, StreamExt};
use crate::error::{expect_valid, StreamError, StreamResult};

// ================================
// FilterMap
// ================================

#[derive(Clone)]
pub struct FilterMap<S, F> {
    pub(crate) stream: S,
    pub(crate) f: F,
}

impl<S, U, F> Stream for FilterMap<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.stream.next()?;
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
    }

    /// Like `filter`, the hint is the unshrunk upstream one.
    fn size_hint(&self) -> Option<usize> {
        self.stream.size_hint()
    }
}

// ================================
// Zip
// ================================

#[derive(Debug, Clone)]
pub struct Zip<S1, S2> {
    pub(crate) first: S1,
    pub(crate) second: S2,
}

impl<S1, S2> Stream for Zip<S1, S2>
where
    S1: Stream,
    S2: Stream,
{
    type Item = (S1::Item, S2::Item);

    /// An item already pulled from `first` is dropped when `second` is done.
    fn next(&mut self) -> Option<Self::Item> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((a, b))
    }

    fn size_hint(&self) -> Option<usize> {
        match (self.first.size_hint(), self.second.size_hint()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
}

// ================================
// MovingWindow
// ================================

/// Overlapping windows of `size` consecutive items, advancing by one.
///
/// The first window is filled straight from upstream; afterwards a ring
/// buffer replaces its oldest slot with one new item per call.
pub struct MovingWindow<S: Stream> {
    pub(crate) stream: S,
    pub(crate) size: usize,
    /// Slot holding the oldest item once the buffer is full.
    pub(crate) ptr: usize,
    pub(crate) cache: Vec<S::Item>,
    pub(crate) initialized: bool,
}

impl<S: Stream> MovingWindow<S> {
    pub fn try_new(stream: S, size: usize) -> StreamResult<Self> {
        let size = StreamError::require_non_zero("MovingWindow", "size", size)?;
        Ok(Self { stream, size, ptr: 0, cache: Vec::with_capacity(size), initialized: false })
    }

    pub fn window_size(&self) -> usize {
        self.size
    }

    fn fill(&mut self) -> bool {
        while self.cache.len() < self.size {
            match self.stream.next() {
                Some(item) => self.cache.push(item),
                None => return false,
            }
        }
        self.initialized = true;
        true
    }
}

impl<S> Stream for MovingWindow<S>
where
    S: Stream,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.initialized {
            return if self.fill() { Some(self.cache.clone()) } else { None };
        }
        let item = self.stream.next()?;
        self.cache[self.ptr] = item;
        self.ptr = (self.ptr + 1) % self.size;

        let mut window = Vec::with_capacity(self.size);
        window.extend_from_slice(&self.cache[self.ptr..]);
        window.extend_from_slice(&self.cache[..self.ptr]);
        Some(window)
    }

    /// Exact window count: `n - size + 1` before the first window, then one
    /// window per remaining upstream item.
    fn size_hint(&self) -> Option<usize> {
        let upstream = self.stream.size_hint()?;
        if self.initialized {
            Some(upstream)
        } else {
            let available = upstream.saturating_add(self.cache.len());
            Some(available.saturating_sub(self.size - 1))
        }
    }
}

impl<S> Clone for MovingWindow<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            stream: self.stream.clone(),
            size: self.size,
            ptr: self.ptr,
            cache: self.cache.clone(),
            initialized: self.initialized,
        }
    }
}

impl<S> std::fmt::Debug for MovingWindow<S>
where
    S: Stream + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovingWindow")
            .field("window_size", &self.size)
            .field("initialized", &self.initialized)
            .field("stream", &self.stream)
            .finish()
    }
}

// ================================
// Unzip support
// ================================

/// Items that split into two parts: pairs, two element arrays and vectors.
pub trait IntoPair {
    type First;
    type Second;

    fn into_pair(self) -> (Self::First, Self::Second);
}

impl<A, B> IntoPair for (A, B) {
    type First = A;
    type Second = B;

    fn into_pair(self) -> (A, B) {
        self
    }
}

impl<T> IntoPair for [T; 2] {
    type First = T;
    type Second = T;

    fn into_pair(self) -> (T, T) {
        let [a, b] = self;
        (a, b)
    }
}

/// Takes the first two elements; panics on a vector shorter than two.
impl<T> IntoPair for Vec<T> {
    type First = T;
    type Second = T;

    fn into_pair(self) -> (T, T) {
        let len = self.len();
        let mut items = self.into_iter();
        match (items.next(), items.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => panic!("unzip needs at least two elements per item, got {}", len),
        }
    }
}

// Extension trait for these combinators
pub trait AdvancedStreamExt: Stream + Sized {
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        FilterMap { stream: self, f }
    }

    fn zip<S2>(self, other: S2) -> Zip<Self, S2>
    where
        S2: Stream,
    {
        Zip { first: self, second: other }
    }

    /// Sliding windows of `size` items. Panics if `size` is zero.
    fn moving_window(self, size: usize) -> MovingWindow<Self> {
        expect_valid(MovingWindow::try_new(self, size))
    }

    /// Splits every item in two, preserving order on both sides.
    fn unzip(&mut self) -> StreamResult<(Vec<<Self::Item as IntoPair>::First>, Vec<<Self::Item as IntoPair>::Second>)>
    where
        Self::Item: IntoPair,
    {
        let size = self.size_hint_checked("unzip")?;
        let mut first = Vec::with_capacity(size);
        let mut second = Vec::with_capacity(size);
        while let Some(item) = self.next() {
            let (a, b) = item.into_pair();
            first.push(a);
            second.push(b);
        }
        Ok((first, second))
    }
}

impl<T> AdvancedStreamExt for T where T: Stream + Sized {}
