//! Catalog text decoding
//!
//! Catalog strings are stored in ISO-8859-1.

/// Convert Latin-1 bytes to a UTF-8 string.
///
/// If the converted text is not longer than the input the conversion did
/// not have to widen anything, and the raw bytes are used as they are.
/// That only happens for pure ASCII input, where both are identical.
pub fn latin1_to_utf8(raw: &[u8]) -> String {
    let converted = encoding_rs::mem::decode_latin1(raw);
    if converted.len() > raw.len() {
        converted.into_owned()
    } else {
        String::from_utf8_lossy(raw).into_owned()
    }
}

/// Decode the text of a `STRS` entry.
///
/// `raw` is the entry payload up to its declared length. Menu items carry a
/// two byte shortcut prefix (`"Q\0Quit"`), recognised by a NUL in the second
/// byte; the prefix is dropped. Any other NUL or control byte is kept.
pub fn decode_entry_text(raw: &[u8]) -> String {
    latin1_to_utf8(strip_menu_shortcut(raw))
}

/// Drop the shortcut prefix from a menu string
fn strip_menu_shortcut(raw: &[u8]) -> &[u8] {
    match raw {
        [_, 0, rest @ ..] => rest,
        _ => raw,
    }
}

/// Decode a NUL-terminated string chunk (`FVER`, `LANG`).
///
/// Reads up to the first NUL, or the whole payload if there is none.
pub fn decode_c_string(payload: &[u8]) -> String {
    let end = payload.iter().position(|&b| b == 0).unwrap_or(payload.len());
    encoding_rs::mem::decode_latin1(&payload[..end]).into_owned()
}
