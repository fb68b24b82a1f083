//! Lookahead combinators: peekable and intersperse
use super::core::Stream;

// Peekable
pub struct Peekable<S: Stream> {
    pub(crate) stream: S,
    /// `None`: nothing buffered. `Some(None)`: upstream known to be done.
    /// `Some(Some(item))`: the buffered next item.
    pub(crate) peeked: Option<Option<S::Item>>,
}

impl<S> Stream for Peekable<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.stream.next(),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.peeked {
            Some(None) => Some(0),
            Some(Some(_)) => self.stream.size_hint().map(|n| n.saturating_add(1)),
            None => self.stream.size_hint(),
        }
    }
}

impl<S> Peekable<S>
where
    S: Stream,
{
    /// Looks at the next item without consuming it.
    ///
    /// Repeated peeks pull from upstream at most once.
    pub fn peek(&mut self) -> Option<&S::Item> {
        let stream = &mut self.stream;
        self.peeked.get_or_insert_with(|| stream.next()).as_ref()
    }

    /// Consumes and returns the next item only if it satisfies `f`.
    pub fn next_if(&mut self, f: impl FnOnce(&S::Item) -> bool) -> Option<S::Item> {
        match self.next() {
            Some(item) if f(&item) => Some(item),
            other => {
                self.peeked = Some(other);
                None
            }
        }
    }
}

impl<S> Clone for Peekable<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self { stream: self.stream.clone(), peeked: self.peeked.clone() }
    }
}

impl<S> std::fmt::Debug for Peekable<S>
where
    S: Stream + std::fmt::Debug,
    S::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Peekable").field("stream", &self.stream).field("peeked", &self.peeked).finish()
    }
}

// Intersperse
pub struct Intersperse<S: Stream> {
    pub(crate) stream: Peekable<S>,
    pub(crate) separator: S::Item,
    /// Set after a real item, cleared after a separator.
    pub(crate) separator_due: bool,
}

impl<S> Stream for Intersperse<S>
where
    S: Stream,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.separator_due {
            // Never emit a trailing separator.
            self.stream.peek()?;
            self.separator_due = false;
            return Some(self.separator.clone());
        }
        let item = self.stream.next()?;
        self.separator_due = true;
        Some(item)
    }

    fn size_hint(&self) -> Option<usize> {
        let remaining = self.stream.size_hint()?;
        if self.separator_due {
            Some(remaining.saturating_mul(2))
        } else {
            Some(remaining.saturating_mul(2).saturating_sub(1))
        }
    }
}

impl<S> Clone for Intersperse<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            stream: self.stream.clone(),
            separator: self.separator.clone(),
            separator_due: self.separator_due,
        }
    }
}

// StreamExt trait for these
pub trait SelectStreamExt: Stream + Sized {
    fn peekable(self) -> Peekable<Self> {
        Peekable { stream: self, peeked: None }
    }

    /// Places a clone of `separator` between every two adjacent items.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self::Item: Clone,
    {
        Intersperse { stream: self.peekable(), separator, separator_due: false }
    }
}

impl<T> SelectStreamExt for T where T: Stream {}
