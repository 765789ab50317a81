use std::ffi::OsString;
use std::fs::{self, ReadDir};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::source::Source;

/// Source listing a directory, yielding the file name of each entry.
///
/// Entries come in whatever order the operating system reports them; sort
/// (or pre-sort per input) before collating when order matters.
#[derive(Debug)]
pub struct DirEntries {
    entries: ReadDir,
    done: bool,
}

impl DirEntries {
    /// Starts listing the directory at `path`.
    ///
    /// # Errors
    ///
    /// Propagates the failure to open the directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("listing directory {}", path.display());
        Ok(Self {
            entries: fs::read_dir(path)?,
            done: false,
        })
    }
}

impl Source for DirEntries {
    type Item = OsString;

    fn pull(&mut self) -> Result<Option<OsString>, Error> {
        if self.done {
            return Ok(None);
        }
        match self.entries.next() {
            Some(Ok(entry)) => Ok(Some(entry.file_name())),
            Some(Err(err)) => {
                self.done = true;
                Err(err.into())
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}
