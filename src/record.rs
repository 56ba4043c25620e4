//! The 128-byte SAUCE record decoder.
//!
//! A SAUCE record occupies the final 128 bytes of a file.  Decoding accepts
//! any buffer of at least 128 bytes and reads only the trailing window;
//! everything before it (the actual file content, plus an optional comment
//! block) is ignored.
//!
//! # Field layout
//!
//! Offsets are relative to the start of the 128-byte window, ranges half-open:
//!
//! | Offset | Width | Field |
//! |--------|-------|-------|
//! | 0      | 5     | `"SAUCE"` signature |
//! | 5      | 2     | version (not read) |
//! | 7      | 34    | title |
//! | 41     | 20    | author |
//! | 61     | 20    | group |
//! | 82     | 8     | date, ASCII `YYYYMMDD` |
//! | 91     | 4     | file size, LE u32 |
//! | 94     | 1     | data type |
//! | 95     | 1     | file type |
//! | 96     | 8     | type info, 4 × LE u16 |
//! | 104    | 1     | comment line count |
//! | 105    | 1     | flags byte |
//! | 106    | 22    | type info string (font name) |
//!
//! All multi-byte integers are little-endian.  Offset 94 is simultaneously
//! the most significant byte of the file-size range and the data-type field;
//! the overlap is part of the layout this reader stays byte-compatible with.

use byteorder::{ByteOrder, LittleEndian};
use chrono::NaiveDate;
use serde::Serialize;
use std::io;
use thiserror::Error;

use crate::date::parse_date;
use crate::flags::AnsiFlags;

/// The 5-byte record signature.
pub const SAUCE_ID: [u8; 5] = *b"SAUCE";
/// Canonical version stamped on every decoded record.
pub const SAUCE_VERSION: [u8; 2] = [0, 0];
/// Total record size in bytes.
pub const RECORD_SIZE: usize = 128;

#[derive(Error, Debug)]
pub enum SauceError {
    /// Fewer than 128 bytes available; the source cannot carry a record.
    #[error("short read: need at least {RECORD_SIZE} bytes")]
    ShortRead,
    /// 128 bytes were available but the signature did not match.  For most
    /// inputs this is the normal outcome, not a fault.
    #[error("no SAUCE record")]
    MissingSignature,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A decoded SAUCE record.  Constructed once by [`Sauce::from_bytes`],
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sauce {
    pub id: [u8; 5],
    pub version: [u8; 2],
    pub title: String,
    pub author: String,
    pub group: String,
    pub date: NaiveDate,
    pub file_size: u32,
    pub data_type: u8,
    pub file_type: u8,
    /// Four type-dependent parameters; their meaning is decided by
    /// `data_type`/`file_type` and left to the caller.
    pub type_info: [u16; 4],
    /// Number of lines in the comment block preceding the record.  The
    /// comment text itself is not part of the record.
    pub comment_lines: u8,
    pub flags: AnsiFlags,
    /// The raw 22-byte tail of the window; [`Sauce::font`] interprets it.
    pub info_string: [u8; 22],
}

impl Sauce {
    /// Decode the record from the trailing 128 bytes of `buf`.
    ///
    /// The signature bytes gate validity only: on success the record carries
    /// the canonical [`SAUCE_ID`] and [`SAUCE_VERSION`] constants rather
    /// than copies from the buffer.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, SauceError> {
        if buf.len() < RECORD_SIZE {
            return Err(SauceError::ShortRead);
        }
        let w = &buf[buf.len() - RECORD_SIZE..];
        if w[0..5] != SAUCE_ID {
            return Err(SauceError::MissingSignature);
        }

        let mut date_raw = [0u8; 8];
        date_raw.copy_from_slice(&w[82..90]);
        let mut type_info = [0u16; 4];
        for (slot, raw) in type_info.iter_mut().zip(w[96..104].chunks_exact(2)) {
            *slot = LittleEndian::read_u16(raw);
        }
        let mut info_string = [0u8; 22];
        info_string.copy_from_slice(&w[106..128]);

        Ok(Self {
            id: SAUCE_ID,
            version: SAUCE_VERSION,
            title: trimmed(&w[7..41]),
            author: trimmed(&w[41..61]),
            group: trimmed(&w[61..81]),
            date: parse_date(&date_raw),
            file_size: LittleEndian::read_u32(&w[91..95]),
            // Offset 94 doubles as the top byte of the file-size field.
            data_type: w[94],
            file_type: w[95],
            type_info,
            comment_lines: w[104],
            flags: AnsiFlags::from_byte(w[105]),
            info_string,
        })
    }

    /// The font name stored in the info string, with NUL and space padding
    /// trimmed.  An all-padding field yields an empty string.
    pub fn font(&self) -> String {
        String::from_utf8_lossy(&self.info_string)
            .trim_matches(|c| c == '\0' || c == ' ')
            .to_string()
    }
}

impl Default for Sauce {
    /// An empty record: canonical id/version, epoch date, zeroed fields.
    fn default() -> Self {
        Self {
            id: SAUCE_ID,
            version: SAUCE_VERSION,
            title: String::new(),
            author: String::new(),
            group: String::new(),
            date: NaiveDate::default(),
            file_size: 0,
            data_type: 0,
            file_type: 0,
            type_info: [0; 4],
            comment_lines: 0,
            flags: AnsiFlags::default(),
            info_string: [0; 22],
        }
    }
}

fn trimmed(field: &[u8]) -> String {
    String::from_utf8_lossy(field).trim().to_string()
}
