use std::io::{ErrorKind, Read};

use crate::error::Error;
use crate::source::Source;

/// Default maximum number of bytes pulled per block.
pub const DEFAULT_BLOCK_SIZE: usize = 8192;

/// Source reading a stream in blocks of at most `block_size` bytes.
///
/// A pull may produce a short block when the reader delivers fewer bytes
/// than asked for; exhaustion is reported at the first zero-byte read.
#[derive(Debug)]
pub struct Blocks<R> {
    reader: R,
    block_size: usize,
    done: bool,
}

impl<R: Read> Blocks<R> {
    /// Reads blocks of at most `block_size` bytes out of `reader`.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when `block_size` is zero.
    pub fn new(reader: R, block_size: usize) -> Result<Self, Error> {
        if block_size == 0 {
            return Err(Error::Config("block size must be non-zero"));
        }
        Ok(Self {
            reader,
            block_size,
            done: false,
        })
    }

    /// Reads blocks of [`DEFAULT_BLOCK_SIZE`] bytes out of `reader`.
    pub fn with_default_size(reader: R) -> Self {
        Self {
            reader,
            block_size: DEFAULT_BLOCK_SIZE,
            done: false,
        }
    }
}

impl<R: Read> Source for Blocks<R> {
    type Item = Vec<u8>;

    fn pull(&mut self) -> Result<Option<Vec<u8>>, Error> {
        if self.done {
            return Ok(None);
        }
        let mut block = vec![0; self.block_size];
        let read = loop {
            match self.reader.read(&mut block) {
                Ok(read) => break read,
                // an interrupted read delivered nothing, ask again
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    self.done = true;
                    return Err(err.into());
                }
            }
        };
        if read == 0 {
            self.done = true;
            return Ok(None);
        }
        block.truncate(read);
        Ok(Some(block))
    }
}
