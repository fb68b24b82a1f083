//! Lazy, pull based streams with size-aware terminal operations
//!
//! This module provides the [`Stream`] trait, base producers, and the adapter
//! and terminal combinators built on top of it. Pipelines are plain ownership
//! trees: every adapter owns the stream it wraps, no boxing required.

pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;
pub mod select;
pub mod cycle;
pub mod file;
pub mod std_iter;

// Re-export core types
pub use core::{DoubleEndedStream, Filter, Map, Skip, Stream, StreamExt, Take};

// Re-export constructors
pub use constructors::{empty, from_iter, from_slice, once, repeat, Empty, Iter, Once, Repeat, SliceStream};

// Re-export advanced combinators
pub use advanced::{AdvancedStreamExt, FilterMap, IntoPair, MovingWindow, Zip};

// Re-export utility combinators
pub use utility::{Chain, Enumerate, Inspect, StepBy, UtilityStreamExt};

// Re-export lookahead combinators
pub use select::{Intersperse, Peekable, SelectStreamExt};

// Re-export cycle combinators
pub use cycle::{CacheCycle, CopyCycle, CycleStreamExt};

// Re-export file producers
pub use file::{BufferedFileStream, LazyFileStream};

pub use std_iter::{IntoStd, IntoStdExt};
