//! Cycle combinators.
//!
//! Both variants replay their source forever and report an unbounded size
//! hint, unless the source was empty, in which case they stay empty.
//! [`CopyCycle`] restarts from a pristine clone of the source.
//! [`CacheCycle`] records the first pass and replays the recording, so the
//! source need not be cloneable.
use super::core::Stream;

// CopyCycle
#[derive(Debug, Clone)]
pub struct CopyCycle<S> {
    pub(crate) stream: S,
    pub(crate) original: S,
}

impl<S> CopyCycle<S>
where
    S: Stream + Clone,
{
    /// Snapshots `stream` in its current state; every replay starts there.
    pub fn new(stream: S) -> Self {
        let original = stream.clone();
        Self { stream, original }
    }
}

impl<S> Stream for CopyCycle<S>
where
    S: Stream + Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stream.next() {
            Some(item) => Some(item),
            None => {
                log::trace!("copy cycle exhausted its pass, restarting from the snapshot");
                self.stream = self.original.clone();
                // An empty snapshot answers None again, ending the stream.
                self.stream.next()
            }
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.original.size_hint() {
            Some(0) => Some(0),
            _ => None,
        }
    }
}

// CacheCycle
#[derive(Debug, Clone)]
enum CacheState<S, T> {
    /// First pass: items are served live and appended to the cache.
    Recording { stream: S, cache: Vec<T> },
    /// Every later pass: round robin over the recording.
    Replaying { cache: Vec<T>, pos: usize },
    /// The source produced nothing on its first pass.
    Empty,
}

pub struct CacheCycle<S: Stream> {
    state: CacheState<S, S::Item>,
}

impl<S: Stream> CacheCycle<S> {
    pub fn new(stream: S) -> Self {
        Self { state: CacheState::Recording { stream, cache: Vec::new() } }
    }

    /// True once the first pass is over and items come from the recording.
    pub fn is_replaying(&self) -> bool {
        matches!(self.state, CacheState::Replaying { .. })
    }
}

impl<S> Stream for CacheCycle<S>
where
    S: Stream,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                CacheState::Recording { stream, cache } => {
                    if let Some(item) = stream.next() {
                        cache.push(item.clone());
                        return Some(item);
                    }
                    let cache = std::mem::take(cache);
                    self.state = if cache.is_empty() {
                        log::trace!("cache cycle source was empty, staying empty");
                        CacheState::Empty
                    } else {
                        log::trace!("cache cycle recorded {} items, switching to replay", cache.len());
                        CacheState::Replaying { cache, pos: 0 }
                    };
                }
                CacheState::Replaying { cache, pos } => {
                    let item = cache[*pos].clone();
                    *pos = (*pos + 1) % cache.len();
                    return Some(item);
                }
                CacheState::Empty => return None,
            }
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match &self.state {
            CacheState::Recording { stream, cache } if cache.is_empty() => match stream.size_hint() {
                Some(0) => Some(0),
                _ => None,
            },
            CacheState::Recording { .. } | CacheState::Replaying { .. } => None,
            CacheState::Empty => Some(0),
        }
    }
}

impl<S> Clone for CacheCycle<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self { state: self.state.clone() }
    }
}

impl<S> std::fmt::Debug for CacheCycle<S>
where
    S: Stream + std::fmt::Debug,
    S::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheCycle").field("state", &self.state).finish()
    }
}

// Extension trait for these combinators
pub trait CycleStreamExt: Stream + Sized {
    /// Repeats the stream forever by restarting from a clone of its current state.
    fn cycle(self) -> CopyCycle<Self>
    where
        Self: Clone,
    {
        CopyCycle::new(self)
    }

    /// Repeats the stream forever by replaying a recording of the first pass.
    fn cache_cycle(self) -> CacheCycle<Self> {
        CacheCycle::new(self)
    }
}

impl<T> CycleStreamExt for T where T: Stream + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::core::StreamExt;

    struct OneShot {
        items: Vec<char>,
    }

    impl Stream for OneShot {
        type Item = char;

        fn next(&mut self) -> Option<char> {
            if self.items.is_empty() {
                None
            } else {
                Some(self.items.remove(0))
            }
        }

        fn size_hint(&self) -> Option<usize> {
            Some(self.items.len())
        }
    }

    #[test]
    fn test_cache_cycle_switches_to_replay_after_first_pass() {
        let mut cycle = OneShot { items: vec!['a', 'b'] }.cache_cycle();
        assert_eq!(cycle.next(), Some('a'));
        assert_eq!(cycle.next(), Some('b'));
        assert!(!cycle.is_replaying());
        assert_eq!(cycle.next(), Some('a'));
        assert!(cycle.is_replaying());
        assert_eq!(cycle.take(5).collect().unwrap(), vec!['b', 'a', 'b', 'a', 'b']);
    }

    #[test]
    fn test_cache_cycle_on_empty_source_never_replays() {
        let mut cycle = OneShot { items: vec![] }.cache_cycle();
        assert_eq!(cycle.size_hint(), Some(0));
        assert_eq!(cycle.next(), None);
        assert_eq!(cycle.next(), None);
        assert!(!cycle.is_replaying());
        assert_eq!(cycle.size_hint(), Some(0));
    }

    #[test]
    fn test_cache_cycle_is_unbounded_once_anything_was_seen() {
        let mut cycle = OneShot { items: vec!['x'] }.cache_cycle();
        assert_eq!(cycle.size_hint(), None);
        cycle.next();
        assert_eq!(cycle.size_hint(), None);
        assert!(cycle.collect().unwrap_err().is_unbounded());
    }
}
