//! Conversions between Rust strings and Latin-1 (ISO 8859-1) bytes.
//!
//! Every Latin-1 byte maps to the Unicode scalar with the same value, so the
//! conversion is a per-character cast. Characters above U+00FF have no
//! Latin-1 byte and are rejected.

use alloc::{string::String, vec::Vec};

use crate::error::{Input, PieceError};

/// Encode `text` as Latin-1 bytes.
///
/// `input` only labels the error.
///
/// # Errors
///
/// Returns [`PieceError::InvalidEncoding`] for the first character above
/// U+00FF.
pub fn encode(text: &str, input: Input) -> Result<Vec<u8>, PieceError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        let byte = u8::try_from(ch).map_err(|_| PieceError::InvalidEncoding {
            input,
            position,
            ch,
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Decode Latin-1 bytes. Infallible: every byte is a valid character.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
