//! Wire-level value types of the P256 verification precompile.
use super::{
    constants::{INPUT_LENGTH, PUBKEY_LENGTH, SIGNATURE_LENGTH, WORD_LENGTH},
    verify::{parse_public_key, parse_scalar},
};
use crate::P256Error;
use primitives::{Bytes, B256};

/// ECDSA signature as two big-endian 32-byte scalars.
///
/// No recovery id: the verifier always knows the public key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct P256Signature {
    /// `r` component.
    pub r: B256,
    /// `s` component.
    pub s: B256,
}

impl P256Signature {
    /// Creates a signature from its components. Ranges are checked at verification time.
    #[inline]
    pub const fn new(r: B256, s: B256) -> Self {
        Self { r, s }
    }

    /// Decodes `r || s`.
    ///
    /// Fails with [`P256Error::MalformedInput`] unless `bytes` is exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, P256Error> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(P256Error::MalformedInput);
        }
        Ok(Self {
            r: B256::from_slice(&bytes[..WORD_LENGTH]),
            s: B256::from_slice(&bytes[WORD_LENGTH..]),
        })
    }

    /// Encodes the signature as `r || s`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..WORD_LENGTH].copy_from_slice(self.r.as_slice());
        out[WORD_LENGTH..].copy_from_slice(self.s.as_slice());
        out
    }

    /// Returns the other valid signature for the same digest and key, `(r, n - s)`.
    ///
    /// Fails with [`P256Error::ScalarOutOfRange`] if `s` is not in `[1, n - 1]`.
    pub fn malleated(&self) -> Result<Self, P256Error> {
        let s = parse_scalar(&self.s)?;
        let negated = -*s;
        Ok(Self {
            r: self.r,
            s: B256::from_slice(&negated.to_bytes()),
        })
    }
}

/// Uncompressed P256 public key coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct P256PublicKey {
    /// Affine `x` coordinate.
    pub x: B256,
    /// Affine `y` coordinate.
    pub y: B256,
}

impl P256PublicKey {
    /// Creates a public key from its affine coordinates. No curve check is done here.
    #[inline]
    pub const fn new(x: B256, y: B256) -> Self {
        Self { x, y }
    }

    /// Decodes `x || y`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, P256Error> {
        if bytes.len() != PUBKEY_LENGTH {
            return Err(P256Error::MalformedInput);
        }
        Ok(Self {
            x: B256::from_slice(&bytes[..WORD_LENGTH]),
            y: B256::from_slice(&bytes[WORD_LENGTH..]),
        })
    }

    /// Encodes the key as `x || y`.
    pub fn to_bytes(&self) -> [u8; PUBKEY_LENGTH] {
        let mut out = [0u8; PUBKEY_LENGTH];
        out[..WORD_LENGTH].copy_from_slice(self.x.as_slice());
        out[WORD_LENGTH..].copy_from_slice(self.y.as_slice());
        out
    }

    /// Returns `true` if the coordinates describe a point on the P256 curve.
    pub fn is_on_curve(&self) -> bool {
        parse_public_key(self).is_ok()
    }
}

/// Full input of the verification precompile.
///
/// | signed message hash |  r  |  s  | public key x | public key y |
/// | :-----------------: | :-: | :-: | :----------: | :----------: |
/// |          32         | 32  | 32  |     32       |      32      |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VerificationRequest {
    /// Signed message hash. Opaque to the verifier.
    pub digest: B256,
    /// Signature over `digest`.
    pub signature: P256Signature,
    /// Key the signature is checked against.
    pub public_key: P256PublicKey,
}

impl VerificationRequest {
    /// Creates a new request.
    #[inline]
    pub const fn new(digest: B256, signature: P256Signature, public_key: P256PublicKey) -> Self {
        Self {
            digest,
            signature,
            public_key,
        }
    }

    /// Decodes a request. The input must be exactly [`INPUT_LENGTH`] bytes.
    pub fn decode(input: &[u8]) -> Result<Self, P256Error> {
        if input.len() != INPUT_LENGTH {
            return Err(P256Error::MalformedInput);
        }
        let (digest, rest) = input.split_at(WORD_LENGTH);
        let (sig, pk) = rest.split_at(SIGNATURE_LENGTH);
        Ok(Self {
            digest: B256::from_slice(digest),
            signature: P256Signature::from_slice(sig)?,
            public_key: P256PublicKey::from_slice(pk)?,
        })
    }

    /// Encodes the request in precompile input layout.
    pub fn encode(&self) -> [u8; INPUT_LENGTH] {
        let mut out = [0u8; INPUT_LENGTH];
        out[..WORD_LENGTH].copy_from_slice(self.digest.as_slice());
        out[WORD_LENGTH..WORD_LENGTH + SIGNATURE_LENGTH]
            .copy_from_slice(&self.signature.to_bytes());
        out[WORD_LENGTH + SIGNATURE_LENGTH..].copy_from_slice(&self.public_key.to_bytes());
        out
    }

    /// Encodes the request into [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.encode())
    }
}
