//! `.catalog` file reading and parsing
//!
//! Every read is checked against the bytes actually left in the buffer, and
//! the FORM budget only ever shrinks, so a bogus size field ends in
//! [`Error::Truncated`] or [`Error::MalformedContainer`] instead of a huge
//! allocation or an endless loop.

use super::{
    CHUNK_HEADER_SIZE, CatalogEntry, CatalogRecord, ChunkTag, ENTRY_HEADER_SIZE, decode_c_string,
    decode_entry_text,
};
use crate::error::{Error, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::fs::File;
use std::io::{Cursor, ErrorKind, Read};
use std::path::Path;

/// Read a .catalog file from disk
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file does not exist,
/// [`Error::OpenFailed`] if it cannot be opened and [`Error::Io`] if it
/// cannot be read. Decoding errors are the same as for
/// [`parse_catalog_bytes`].
///
/// [`Error::FileNotFound`]: crate::Error::FileNotFound
/// [`Error::OpenFailed`]: crate::Error::OpenFailed
/// [`Error::Io`]: crate::Error::Io
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogRecord> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::OpenFailed {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    tracing::debug!("Read {} bytes from {}", buffer.len(), path.display());
    parse_catalog_bytes(&buffer)
}

/// Parse .catalog data from bytes
///
/// Nothing is returned unless the whole container decodes.
///
/// # Errors
///
/// Returns [`Error::MalformedContainer`] if the data does not start with
/// `FORM` or a chunk overruns the FORM size, [`Error::UnsupportedFormType`]
/// if the form type is not `CTLG`, and [`Error::Truncated`] if any declared
/// size runs past the end of `data`.
///
/// [`Error::MalformedContainer`]: crate::Error::MalformedContainer
/// [`Error::UnsupportedFormType`]: crate::Error::UnsupportedFormType
/// [`Error::Truncated`]: crate::Error::Truncated
pub fn parse_catalog_bytes(data: &[u8]) -> Result<CatalogRecord> {
    let mut record = CatalogRecord::new();

    for chunk in ChunkReader::new(data)? {
        let chunk = chunk?;
        match chunk.tag {
            ChunkTag::FVER => record.signature = Some(decode_c_string(chunk.payload())),
            ChunkTag::LANG => record.language_name = Some(decode_c_string(chunk.payload())),
            ChunkTag::STRS => record.entries.extend(parse_strings(chunk.payload())?),
            ChunkTag::CSET => {
                tracing::debug!("Ignoring CSET chunk ({} bytes)", chunk.declared_size);
            }
            tag => {
                tracing::debug!("Skipping unknown chunk {} ({} bytes)", tag, chunk.declared_size);
            }
        }
    }

    tracing::debug!(
        "Decoded catalog {:?} ({:?}): {} strings",
        record.signature,
        record.language_name,
        record.entries.len()
    );
    Ok(record)
}

/// Parse the payload of a `STRS` chunk into entries
///
/// Each entry is `<i32 id> <u32 length> <text>`, with the text padded to a
/// multiple of four bytes. Only the declared length is decoded as text.
///
/// # Errors
///
/// Returns [`Error::Truncated`] if an entry header or text runs past the end
/// of the payload.
///
/// [`Error::Truncated`]: crate::Error::Truncated
pub fn parse_strings(payload: &[u8]) -> Result<Vec<CatalogEntry>> {
    let mut cursor = Cursor::new(payload);
    let mut entries = Vec::new();

    while cursor.position() < payload.len() as u64 {
        ensure_available(&cursor, ENTRY_HEADER_SIZE as u64)?;
        let id = cursor.read_i32::<BigEndian>()?;
        let declared_len = cursor.read_u32::<BigEndian>()?;

        let raw = take(&mut cursor, align4(declared_len))?;
        let text = decode_entry_text(&raw[..declared_len as usize]);
        entries.push(CatalogEntry { id, text });
    }

    Ok(entries)
}

/// A top-level chunk inside the CTLG form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub tag: ChunkTag,
    /// Size from the chunk header, excluding the pad byte
    pub declared_size: u32,
    /// Payload including the pad byte, if any
    data: &'a [u8],
}

impl<'a> Chunk<'a> {
    /// Payload without the pad byte
    pub fn payload(&self) -> &'a [u8] {
        &self.data[..self.declared_size as usize]
    }

    /// Bytes the payload occupies in the stream
    pub fn padded_size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Iterator over the top-level chunks of a `FORM CTLG` container
///
/// The header is validated by [`ChunkReader::new`]. Iteration stops when the
/// FORM size is used up, or after the first error.
pub struct ChunkReader<'a> {
    cursor: Cursor<&'a [u8]>,
    remaining: u64,
    failed: bool,
}

impl<'a> ChunkReader<'a> {
    /// Validate the container header and position the reader on the first
    /// chunk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedContainer`], [`Error::UnsupportedFormType`]
    /// or [`Error::Truncated`] for a bad header.
    ///
    /// [`Error::MalformedContainer`]: crate::Error::MalformedContainer
    /// [`Error::UnsupportedFormType`]: crate::Error::UnsupportedFormType
    /// [`Error::Truncated`]: crate::Error::Truncated
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);

        let magic = read_tag(&mut cursor)?;
        if magic != ChunkTag::FORM {
            return Err(Error::malformed(format!("expected FORM, found {magic}")));
        }

        // The size covers the form type and every chunk after it
        ensure_available(&cursor, 4)?;
        let form_size = u64::from(cursor.read_u32::<BigEndian>()?);
        ensure_available(&cursor, form_size)?;
        if form_size < 4 {
            return Err(Error::malformed(format!(
                "FORM size {form_size} cannot hold a form type"
            )));
        }

        let form_type = read_tag(&mut cursor)?;
        if form_type != ChunkTag::CTLG {
            return Err(Error::UnsupportedFormType(form_type));
        }

        Ok(Self {
            cursor,
            remaining: form_size - 4,
            failed: false,
        })
    }

    /// FORM bytes not yet consumed by chunks
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    fn next_chunk(&mut self) -> Result<Chunk<'a>> {
        let tag = read_tag(&mut self.cursor)?;
        ensure_available(&self.cursor, 4)?;
        let declared_size = self.cursor.read_u32::<BigEndian>()?;

        // Round to word
        let padded_size = u64::from(declared_size) + u64::from(declared_size & 1);
        let data = take(&mut self.cursor, padded_size)?;

        let consumed = padded_size + CHUNK_HEADER_SIZE;
        self.remaining = self.remaining.checked_sub(consumed).ok_or_else(|| {
            Error::malformed(format!(
                "chunk {tag} needs {consumed} bytes but only {} are left in the FORM",
                self.remaining
            ))
        })?;

        Ok(Chunk {
            tag,
            declared_size,
            data,
        })
    }
}

impl<'a> Iterator for ChunkReader<'a> {
    type Item = Result<Chunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }
        let chunk = self.next_chunk();
        self.failed = chunk.is_err();
        Some(chunk)
    }
}

/// Round a string length up to the next multiple of four
fn align4(len: u32) -> u64 {
    (u64::from(len) + 3) & !3
}

fn available(cursor: &Cursor<&[u8]>) -> u64 {
    (cursor.get_ref().len() as u64).saturating_sub(cursor.position())
}

fn ensure_available(cursor: &Cursor<&[u8]>, needed: u64) -> Result<()> {
    let available = available(cursor);
    if needed > available {
        return Err(Error::Truncated { needed, available });
    }
    Ok(())
}

fn read_tag(cursor: &mut Cursor<&[u8]>) -> Result<ChunkTag> {
    ensure_available(cursor, 4)?;
    Ok(ChunkTag::from(cursor.read_u32::<BigEndian>()?))
}

/// Borrow `len` bytes from the underlying buffer and advance past them
fn take<'a>(cursor: &mut Cursor<&'a [u8]>, len: u64) -> Result<&'a [u8]> {
    ensure_available(cursor, len)?;
    let data: &'a [u8] = *cursor.get_ref();
    let start = cursor.position() as usize;
    let end = start + len as usize;
    cursor.set_position(end as u64);
    Ok(&data[start..end])
}
