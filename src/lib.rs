pub mod classify;
pub mod date;
pub mod flags;
pub mod reader;
pub mod record;

pub use classify::{TypeTables, MIME_FALLBACK};
pub use flags::{AnsiFlags, AspectRatio, LetterSpacing};
pub use reader::{read_record, read_record_from_path, read_record_from_stream};
pub use record::{Sauce, SauceError, RECORD_SIZE, SAUCE_ID, SAUCE_VERSION};
