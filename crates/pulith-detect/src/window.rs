use std::io::{Read, Seek, SeekFrom};

use crate::error::{Error, Result};

/// Bounds-checked positioned reads over a seekable source.
///
/// The source length is taken once when the window is created. Reads that
/// start outside `[0, len]` or run past the end are misses and yield an empty
/// buffer rather than an error.
pub struct ByteWindow<'a, R> {
    source: &'a mut R,
    len: u64,
}

impl<'a, R: Read + Seek> ByteWindow<'a, R> {
    pub fn new(source: &'a mut R) -> Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        Ok(Self { source, len })
    }

    pub fn len(&self) -> u64 { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Read `length` bytes at `position`.
    ///
    /// With `accept_shorter`, a read running past the end is truncated to the
    /// remaining bytes instead of missing. `length == 0` is rejected.
    pub fn read_at(&mut self, position: i64, length: usize, accept_shorter: bool) -> Result<Vec<u8>> {
        if length < 1 {
            return Err(Error::EmptyRead);
        }

        let Ok(position) = u64::try_from(position) else {
            return Ok(Vec::new());
        };
        if position > self.len {
            return Ok(Vec::new());
        }

        let remaining = self.len - position;
        let length = if length as u64 > remaining {
            if !accept_shorter {
                return Ok(Vec::new());
            }
            remaining as usize
        } else {
            length
        };

        let mut data = vec![0u8; length];
        self.source.seek(SeekFrom::Start(position))?;
        // read_exact retries short reads and Interrupted
        self.source.read_exact(&mut data)?;
        Ok(data)
    }

    /// Whether `expected` occurs byte-for-byte at `position`.
    pub fn matches_at(&mut self, position: i64, expected: &[u8]) -> Result<bool> {
        Ok(self.read_at(position, expected.len(), false)? == expected)
    }
}
