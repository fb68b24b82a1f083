//! Configuration types for the file backed producers

/// File configuration for line oriented reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Byte that ends a line. The delimiter itself is never part of an item.
    pub delimiter: u8,
    /// Capacity of the read buffer wrapped around the file.
    pub buffer_size: usize,
    /// Strip a `\r` left at the end of a line, so CRLF input reads like LF input.
    pub trim_carriage_return: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\n',
            buffer_size: 8192,
            trim_carriage_return: true,
        }
    }
}

impl FileConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn with_trim_carriage_return(mut self, trim: bool) -> Self {
        self.trim_carriage_return = trim;
        self
    }
}
