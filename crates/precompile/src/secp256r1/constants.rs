//! Constants for secp256r1 (P-256) operations

/// Length of the message hash (32 bytes)
pub const MESSAGE_HASH_LENGTH: usize = 32;

/// Length of a single big-endian scalar or coordinate (32 bytes)
pub const WORD_LENGTH: usize = 32;

/// Length of the signature (64 bytes: r || s)
pub const SIGNATURE_LENGTH: usize = 2 * WORD_LENGTH;

/// Length of the untagged public key (64 bytes: x || y)
pub const PUBKEY_LENGTH: usize = 2 * WORD_LENGTH;

/// Length of the precompile input (160 bytes: hash || r || s || x || y)
pub const INPUT_LENGTH: usize = MESSAGE_HASH_LENGTH + SIGNATURE_LENGTH + PUBKEY_LENGTH;
