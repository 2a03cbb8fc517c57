//! Amiga `.catalog` file format (IFF `FORM CTLG`)
//!
//! Big-endian chunked container used by `locale.library` to localize Amiga
//! applications. Strings are addressed by numeric ID rather than by their
//! source text.
//!
//! ```text
//! "FORM" <u32 size> "CTLG"
//!     "FVER" <u32 size> "$VER: app.catalog 1.0 (01.01.95)\0"
//!     "LANG" <u32 size> "deutsch\0"
//!     "CSET" <u32 size> <charset info, ignored>
//!     "STRS" <u32 size> { <i32 id> <u32 len> <text, padded to 4> }*
//! ```
//!
//! Chunk payloads are padded to an even length. String entries inside
//! `STRS` are padded to a multiple of four.

mod reader;
mod text;

use std::fmt;

use serde::Serialize;

pub use reader::{Chunk, ChunkReader, parse_catalog_bytes, parse_strings, read_catalog};
pub use text::{decode_c_string, decode_entry_text, latin1_to_utf8};

/// A four character IFF chunk identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
    /// IFF container header
    pub const FORM: ChunkTag = ChunkTag(*b"FORM");
    /// Catalog form type
    pub const CTLG: ChunkTag = ChunkTag(*b"CTLG");
    /// Version string (`$VER:` cookie)
    pub const FVER: ChunkTag = ChunkTag(*b"FVER");
    /// Language name
    pub const LANG: ChunkTag = ChunkTag(*b"LANG");
    /// String table
    pub const STRS: ChunkTag = ChunkTag(*b"STRS");
    /// Character set description (unused)
    pub const CSET: ChunkTag = ChunkTag(*b"CSET");
}

/// Tags are read from the stream as big-endian integers
impl From<u32> for ChunkTag {
    fn from(value: u32) -> Self {
        ChunkTag(value.to_be_bytes())
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkTag(\"{self}\")")
    }
}

/// Size of a chunk header (tag + size)
pub const CHUNK_HEADER_SIZE: u64 = 8;

/// Size of a string entry header inside `STRS` (id + length)
pub const ENTRY_HEADER_SIZE: usize = 8;

/// A single catalog string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Numeric string identifier
    pub id: i32,
    /// The localized text, converted to UTF-8
    pub text: String,
}

/// Everything decoded from one `.catalog` file
///
/// Entries keep file order. IDs may repeat; when the record is committed to
/// a string table the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogRecord {
    /// Contents of the last `FVER` chunk, if any
    pub signature: Option<String>,
    /// Contents of the last `LANG` chunk, if any
    pub language_name: Option<String>,
    pub entries: Vec<CatalogEntry>,
}

impl CatalogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last text recorded for `id`
    pub fn get(&self, id: i32) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.id == id)
            .map(|e| e.text.as_str())
    }
}
