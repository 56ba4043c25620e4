//! Acquisition adapters: turn a seekable resource, a full stream, or a
//! filesystem path into the byte window [`Sauce::from_bytes`] needs.
//!
//! A source shorter than 128 bytes fails with [`SauceError::ShortRead`]
//! before any decoding happens.  The stream adapter drains its input fully;
//! the trailing-window rule in the decoder locates the record regardless of
//! how much data precedes it.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::record::{Sauce, SauceError, RECORD_SIZE};

/// Read the record from the tail of a random-access source.
pub fn read_record<R: Read + Seek>(mut src: R) -> Result<Sauce, SauceError> {
    let len = src.seek(SeekFrom::End(0))?;
    if len < RECORD_SIZE as u64 {
        return Err(SauceError::ShortRead);
    }
    src.seek(SeekFrom::Start(len - RECORD_SIZE as u64))?;
    let mut window = [0u8; RECORD_SIZE];
    src.read_exact(&mut window)?;
    Sauce::from_bytes(&window)
}

/// Drain an unbounded stream into memory and read the record from its tail.
pub fn read_record_from_stream<R: Read>(mut src: R) -> Result<Sauce, SauceError> {
    let mut buf = Vec::new();
    src.read_to_end(&mut buf)?;
    if buf.len() < RECORD_SIZE {
        return Err(SauceError::ShortRead);
    }
    Sauce::from_bytes(&buf)
}

/// Read the record from a file on disk.
pub fn read_record_from_path<P: AsRef<Path>>(path: P) -> Result<Sauce, SauceError> {
    read_record(File::open(path)?)
}
