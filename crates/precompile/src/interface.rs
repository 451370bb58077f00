//! Interface for the precompiles. It contains the precompile result type,
//! the precompile output type, the precompile error types and the crypto
//! backend seam.
use crate::secp256r1::VerificationRequest;
use core::fmt::{self, Debug};
use primitives::Bytes;

/// A precompile operation result type
///
/// Returns either `Ok(PrecompileOutput)` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Crypto operations trait for precompiles.
///
/// Hosts that run on a platform with accelerated curve arithmetic can supply their
/// own implementation; [`DefaultCrypto`] uses the `p256` crate.
pub trait Crypto: Send + Sync + Debug {
    /// secp256r1 (P-256) signature verification.
    fn secp256r1_verify_signature(&self, request: &VerificationRequest) -> Result<(), P256Error>;
}

/// Precompile function type. Takes input, gas limit, and crypto implementation and returns precompile result.
pub type PrecompileFn = fn(&[u8], u64, &dyn Crypto) -> PrecompileResult;

/// Precompile error type.
///
/// A rejected signature is a successful call with empty output, so running out of
/// gas is the only way a call fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// Gas limit is below the precompile cost.
    OutOfGas,
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfGas => f.write_str("out of gas"),
        }
    }
}

/// Reason a P256 verification was rejected.
///
/// These are validation outcomes, not faults: the gateway maps every variant to
/// an empty output and the account maps every variant to "not authorized".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum P256Error {
    /// Input does not have the exact expected length.
    MalformedInput,
    /// `r` or `s` is zero or not below the group order.
    ScalarOutOfRange,
    /// Public key coordinates are not a point on the curve.
    InvalidPublicKey,
    /// Inputs are well formed but the signature does not match.
    SignatureMismatch,
}

impl core::error::Error for P256Error {}

impl fmt::Display for P256Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MalformedInput => "malformed p256 input length",
            Self::ScalarOutOfRange => "p256 signature scalar out of range",
            Self::InvalidPublicKey => "p256 public key is not on the curve",
            Self::SignatureMismatch => "p256 signature mismatch",
        };
        f.write_str(s)
    }
}

/// Default implementation of the Crypto trait using the `p256` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn secp256r1_verify_signature(&self, request: &VerificationRequest) -> Result<(), P256Error> {
        crate::secp256r1::verify_signature(
            &request.digest,
            &request.signature,
            &request.public_key,
        )
    }
}
