use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::source::Source;

/// Options controlling how [`Lines`] shapes each produced line.
///
/// Named fields instead of flag constants: misconfiguration is impossible
/// and call sites read naturally.
///
/// ```
/// use seq_collate::LineOptions;
///
/// let options = LineOptions {
///     ignore_newlines: true,
///     ..LineOptions::default()
/// };
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineOptions {
    /// Strip the trailing line break (`\n` or `\r\n`) from each line.
    pub ignore_newlines: bool,
    /// Skip lines that are empty after line-break handling.
    ///
    /// Without `ignore_newlines` a blank line still contains its line break
    /// and is therefore not considered empty.
    pub skip_empty_lines: bool,
}

/// Source reading a stream line by line.
///
/// Lines are pulled one at a time; nothing beyond the current line is read
/// from the underlying stream. The reader is dropped (and a file handle
/// closed) when the source is dropped.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    options: LineOptions,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    /// Reads lines out of `reader`.
    pub fn new(reader: R, options: LineOptions) -> Self {
        Self {
            reader,
            options,
            done: false,
        }
    }
}

impl Lines<BufReader<File>> {
    /// Opens the file at `path` and reads it line by line.
    ///
    /// # Errors
    ///
    /// Propagates the failure to open the file.
    pub fn open(path: impl AsRef<Path>, options: LineOptions) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("reading lines from {}", path.display());
        Ok(Self::new(BufReader::new(File::open(path)?), options))
    }
}

impl<R: BufRead> Source for Lines<R> {
    type Item = String;

    fn pull(&mut self) -> Result<Option<String>, Error> {
        if self.done {
            return Ok(None);
        }
        loop {
            let mut line = String::new();
            let read = match self.reader.read_line(&mut line) {
                Ok(read) => read,
                Err(err) => {
                    self.done = true;
                    return Err(err.into());
                }
            };
            if read == 0 {
                self.done = true;
                return Ok(None);
            }
            if self.options.ignore_newlines {
                line.truncate(line.trim_end_matches(['\r', '\n']).len());
            }
            if self.options.skip_empty_lines && line.is_empty() {
                continue;
            }
            return Ok(Some(line));
        }
    }
}
