//! Parsing of hex encoded command line arguments.
use primitives::{hex, B256};

/// Hex argument could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum HexInputError {
    /// Not valid hex.
    #[error("invalid hex in `{name}`: {source}")]
    InvalidHex {
        /// Argument name.
        name: &'static str,
        /// Decoding error.
        source: hex::FromHexError,
    },
    /// Valid hex of the wrong width.
    #[error("`{name}` must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Argument name.
        name: &'static str,
        /// Expected length in bytes.
        expected: usize,
        /// Decoded length in bytes.
        actual: usize,
    },
}

/// Decodes a hex string, with or without `0x` prefix, ignoring surrounding whitespace.
pub fn decode(name: &'static str, value: &str) -> Result<Vec<u8>, HexInputError> {
    hex::decode(value.trim())
        .map_err(|source| HexInputError::InvalidHex { name, source })
}

/// Decodes a 32-byte word. Shorter values are rejected rather than padded.
pub fn decode_word(name: &'static str, value: &str) -> Result<B256, HexInputError> {
    let bytes = decode(name, value)?;
    if bytes.len() != 32 {
        return Err(HexInputError::InvalidLength {
            name,
            expected: 32,
            actual: bytes.len(),
        });
    }
    Ok(B256::from_slice(&bytes))
}
