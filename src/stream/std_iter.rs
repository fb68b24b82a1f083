//! Bridge from [`Stream`] to `std::iter::Iterator`, for `for` loops and the
//! std adapters.
use super::core::{DoubleEndedStream, Stream};

#[derive(Debug, Clone)]
pub struct IntoStd<S> {
    stream: S,
}

impl<S> IntoStd<S> {
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Iterator for IntoStd<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next()
    }

    // Stream hints are upper bounds for pre-allocation only, never a lower bound.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.stream.size_hint())
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.stream.nth(n)
    }
}

impl<S> DoubleEndedIterator for IntoStd<S>
where
    S: DoubleEndedStream,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.stream.next_back()
    }
}

pub trait IntoStdExt: Stream + Sized {
    /// Wraps the stream as a std iterator. Unbounded streams stay unbounded;
    /// std terminal methods do not refuse them.
    fn into_std(self) -> IntoStd<Self> {
        IntoStd { stream: self }
    }
}

impl<T> IntoStdExt for T where T: Stream {}
