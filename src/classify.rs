//! Content classification: data-type and file-type resolution.
//!
//! A record's `file_type` only means something in the context of its
//! `data_type`, so file-type names and MIME types live in two-level tables
//! keyed by both codes.  Three data types (BinaryText, XBin, Executable)
//! have exactly one shape each and therefore carry no file-type table at
//! all; they resolve through fixed literals instead.
//! An unresolved MIME lookup always falls back to
//! `application/octet-stream`; callers never see an empty MIME string.

use std::collections::HashMap;

use crate::record::Sauce;

pub const DATA_TYPE_NONE: u8 = 0;
pub const DATA_TYPE_CHARACTER: u8 = 1;
pub const DATA_TYPE_BITMAP: u8 = 2;
pub const DATA_TYPE_VECTOR: u8 = 3;
pub const DATA_TYPE_AUDIO: u8 = 4;
pub const DATA_TYPE_BINARY_TEXT: u8 = 5;
pub const DATA_TYPE_XBIN: u8 = 6;
pub const DATA_TYPE_ARCHIVE: u8 = 7;
pub const DATA_TYPE_EXECUTABLE: u8 = 8;

/// Generic MIME type for content no table entry covers.
pub const MIME_FALLBACK: &str = "application/octet-stream";

/// Immutable classification tables.
///
/// Build once (normally via [`TypeTables::standard`]) and share by
/// reference; resolution never mutates them.  Embedders with their own
/// taxonomy can construct custom tables through [`TypeTables::new`].
pub struct TypeTables {
    data_type: HashMap<u8, &'static str>,
    file_type: HashMap<u8, HashMap<u8, &'static str>>,
    mime_type: HashMap<u8, HashMap<u8, &'static str>>,
}

impl TypeTables {
    pub fn new(
        data_type: HashMap<u8, &'static str>,
        file_type: HashMap<u8, HashMap<u8, &'static str>>,
        mime_type: HashMap<u8, HashMap<u8, &'static str>>,
    ) -> Self {
        Self {
            data_type,
            file_type,
            mime_type,
        }
    }

    /// The reference tables for the nine defined data types.
    ///
    /// BinaryText, XBin, and Executable are deliberately absent from the
    /// file-type and MIME tables; the resolver handles them by code.
    pub fn standard() -> Self {
        let data_type: HashMap<u8, &'static str> = HashMap::from([
            (DATA_TYPE_NONE, "None"),
            (DATA_TYPE_CHARACTER, "Character"),
            (DATA_TYPE_BITMAP, "Bitmap"),
            (DATA_TYPE_VECTOR, "Vector"),
            (DATA_TYPE_AUDIO, "Audio"),
            (DATA_TYPE_BINARY_TEXT, "BinaryText"),
            (DATA_TYPE_XBIN, "XBin"),
            (DATA_TYPE_ARCHIVE, "Archive"),
            (DATA_TYPE_EXECUTABLE, "Executable"),
        ]);

        let file_type: HashMap<u8, HashMap<u8, &'static str>> = HashMap::from([
            (
                DATA_TYPE_CHARACTER,
                HashMap::from([
                    (0, "ASCII"),
                    (1, "ANSi"),
                    (2, "ANSiMation"),
                    (3, "RIP script"),
                    (4, "PCBoard"),
                    (5, "Avatar"),
                    (6, "HTML"),
                    (7, "Source"),
                    (8, "TundraDraw"),
                ]),
            ),
            (
                DATA_TYPE_BITMAP,
                HashMap::from([
                    (0, "GIF"),
                    (1, "PCX"),
                    (2, "LBM/IFF"),
                    (3, "TGA"),
                    (4, "FLI"),
                    (5, "FLC"),
                    (6, "BMP"),
                    (7, "GL"),
                    (8, "DL"),
                    (9, "WPG"),
                    (10, "PNG"),
                    (11, "JPG"),
                    (12, "MPG"),
                    (13, "AVI"),
                ]),
            ),
            (
                DATA_TYPE_VECTOR,
                HashMap::from([(0, "DXF"), (1, "DWG"), (2, "WPG"), (3, "3DS")]),
            ),
            (
                DATA_TYPE_AUDIO,
                HashMap::from([
                    (0, "MOD"),
                    (1, "669"),
                    (2, "STM"),
                    (3, "S3M"),
                    (4, "MTM"),
                    (5, "FAR"),
                    (6, "ULT"),
                    (7, "AMF"),
                    (8, "DMF"),
                    (9, "OKT"),
                    (10, "ROL"),
                    (11, "CMF"),
                    (12, "MID"),
                    (13, "SADT"),
                    (14, "VOC"),
                    (15, "WAV"),
                    (16, "SMP8"),
                    (17, "SMP8S"),
                    (18, "SMP16"),
                    (19, "SMP16S"),
                    (20, "PATCH8"),
                    (21, "PATCH16"),
                    (22, "XM"),
                    (23, "HSC"),
                    (24, "IT"),
                ]),
            ),
            (
                DATA_TYPE_ARCHIVE,
                HashMap::from([
                    (0, "ZIP"),
                    (1, "ARJ"),
                    (2, "LZH"),
                    (3, "ARC"),
                    (4, "TAR"),
                    (5, "ZOO"),
                    (6, "RAR"),
                    (7, "UC2"),
                    (8, "PAK"),
                    (9, "SQZ"),
                ]),
            ),
        ]);

        let mime_type: HashMap<u8, HashMap<u8, &'static str>> = HashMap::from([
            (
                DATA_TYPE_CHARACTER,
                HashMap::from([
                    (0, "text/plain"),
                    (1, "text/x-ansi"),
                    (2, "text/x-ansi"),
                    (6, "text/html"),
                    (7, "text/plain"),
                ]),
            ),
            (
                DATA_TYPE_BITMAP,
                HashMap::from([
                    (0, "image/gif"),
                    (1, "image/x-pcx"),
                    (2, "image/x-ilbm"),
                    (3, "image/x-tga"),
                    (6, "image/bmp"),
                    (10, "image/png"),
                    (11, "image/jpeg"),
                    (12, "video/mpeg"),
                    (13, "video/x-msvideo"),
                ]),
            ),
            (
                DATA_TYPE_VECTOR,
                HashMap::from([(0, "image/vnd.dxf"), (1, "image/vnd.dwg")]),
            ),
            (
                DATA_TYPE_AUDIO,
                HashMap::from([
                    (0, "audio/x-mod"),
                    (3, "audio/x-s3m"),
                    (12, "audio/midi"),
                    (14, "audio/x-voc"),
                    (15, "audio/x-wav"),
                    (22, "audio/x-xm"),
                    (24, "audio/x-it"),
                ]),
            ),
            (
                DATA_TYPE_ARCHIVE,
                HashMap::from([
                    (0, "application/zip"),
                    (1, "application/x-arj"),
                    (2, "application/x-lzh"),
                    (4, "application/x-tar"),
                    (6, "application/x-rar-compressed"),
                ]),
            ),
        ]);

        Self::new(data_type, file_type, mime_type)
    }

    /// Display name of the record's data type; empty when the code is not
    /// in the table.
    pub fn data_type_name(&self, record: &Sauce) -> &'static str {
        self.data_type.get(&record.data_type).copied().unwrap_or("")
    }

    /// Whether the data type has a file-type table of its own.
    pub fn has_file_types(&self, data_type: u8) -> bool {
        self.file_type.contains_key(&data_type)
    }

    /// Display name of the record's file type.
    ///
    /// Codes without a file-type table resolve to a fixed literal when they
    /// are one of the three single-shape data types, and to an empty string
    /// otherwise.
    pub fn file_type_name(&self, record: &Sauce) -> &'static str {
        match self.file_type.get(&record.data_type) {
            Some(table) => table.get(&record.file_type).copied().unwrap_or(""),
            None => match record.data_type {
                DATA_TYPE_BINARY_TEXT => "BinaryText",
                DATA_TYPE_XBIN => "XBin",
                DATA_TYPE_EXECUTABLE => "Executable",
                _ => "",
            },
        }
    }

    /// MIME type of the record's content.  Never empty: anything the tables
    /// and the single-shape literals leave unresolved becomes
    /// [`MIME_FALLBACK`].
    pub fn mime_type(&self, record: &Sauce) -> &'static str {
        let resolved = match self.mime_type.get(&record.data_type) {
            Some(table) => table.get(&record.file_type).copied().unwrap_or(""),
            None => match record.data_type {
                DATA_TYPE_BINARY_TEXT => "text/x-binary",
                DATA_TYPE_XBIN => "text/x-xbin",
                _ => "",
            },
        };
        if resolved.is_empty() {
            MIME_FALLBACK
        } else {
            resolved
        }
    }
}

impl Default for TypeTables {
    fn default() -> Self {
        Self::standard()
    }
}
