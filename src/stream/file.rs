//! Line oriented file producers.
//!
//! [`LazyFileStream`] reads one line per pull and cannot know how many are
//! left, so it always hints `Some(0)`. Because of that hint, cache-cycling a
//! lazy file stream is not refused by `collect` and would never end; cycle a
//! [`BufferedFileStream`] instead. [`BufferedFileStream`] reads the whole file
//! when it is opened and knows its exact remaining line count.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::core::{DoubleEndedStream, Stream};
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::FileConfig;

fn open(path: &Path) -> StreamResult<File> {
    File::open(path).map_err(|source| StreamError::OpenFailed { path: path.display().to_string(), source })
}

/// Reads up to and excluding the next delimiter. `Ok(None)` at end of input.
fn read_record<R: BufRead>(reader: &mut R, config: &FileConfig, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(config.delimiter, buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&config.delimiter) {
        buf.pop();
    }
    if config.trim_carriage_return && buf.last() == Some(&b'\r') {
        buf.pop();
    }
    let line = String::from_utf8(std::mem::take(buf)).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(Some(line))
}

// ================================
// LazyFileStream
// ================================

pub struct LazyFileStream {
    reader: BufReader<File>,
    path: String,
    config: FileConfig,
    buf: Vec<u8>,
    line: usize,
    done: bool,
}

impl LazyFileStream {
    pub fn open(path: impl AsRef<Path>) -> StreamResult<Self> {
        Self::with_config(path, FileConfig::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: FileConfig) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = open(path)?;
        log::debug!("opened `{}` for lazy line reading", path.display());
        Ok(Self {
            reader: BufReader::with_capacity(config.buffer_size, file),
            path: path.display().to_string(),
            config,
            buf: Vec::new(),
            line: 0,
            done: false,
        })
    }

    /// Number of lines handed out so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl Stream for LazyFileStream {
    type Item = String;

    /// A read error ends the stream; it is logged since `next` cannot return it.
    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        match read_record(&mut self.reader, &self.config, &mut self.buf) {
            Ok(Some(line)) => {
                self.line += 1;
                Some(line)
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                log::error!("reading line {} of `{}` failed, ending stream: {}", self.line + 1, self.path, err);
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(0)
    }
}

impl std::fmt::Debug for LazyFileStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyFileStream")
            .field("path", &self.path)
            .field("lines_read", &self.line)
            .field("done", &self.done)
            .finish()
    }
}

// ================================
// BufferedFileStream
// ================================

#[derive(Debug, Clone)]
pub struct BufferedFileStream {
    lines: std::vec::IntoIter<String>,
}

impl BufferedFileStream {
    pub fn open(path: impl AsRef<Path>) -> StreamResult<Self> {
        Self::with_config(path, FileConfig::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: FileConfig) -> StreamResult<Self> {
        let path = path.as_ref();
        let mut reader = BufReader::with_capacity(config.buffer_size, open(path)?);
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        loop {
            match read_record(&mut reader, &config, &mut buf) {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => break,
                Err(source) => {
                    return Err(StreamError::ReadFailed {
                        path: path.display().to_string(),
                        line: lines.len() + 1,
                        source,
                    })
                }
            }
        }
        log::debug!("buffered {} lines from `{}`", lines.len(), path.display());
        Ok(Self { lines: lines.into_iter() })
    }
}

impl Stream for BufferedFileStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.lines.next()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.lines.len())
    }
}

impl DoubleEndedStream for BufferedFileStream {
    fn next_back(&mut self) -> Option<String> {
        self.lines.next_back()
    }
}
