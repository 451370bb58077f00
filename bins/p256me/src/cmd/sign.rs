//! `sign` command.
use crate::hex_input::{self, HexInputError};
use clap::Parser;
use p256::ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey};
use precompile::{
    secp256r1::{P256PublicKey, P256Signature, VerificationRequest},
    P256Error,
};
use primitives::{hex, B256};

/// Errors of the `sign` command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Private key is zero or not below the group order.
    #[error("invalid private key")]
    InvalidPrivateKey,
    /// Signer returned an error.
    #[error("signing failed: {0}")]
    Signing(p256::ecdsa::Error),
    /// Signature could not be converted or malleated.
    #[error(transparent)]
    P256(#[from] P256Error),
    /// A hex argument could not be decoded.
    #[error(transparent)]
    HexInput(#[from] HexInputError),
}

/// Signs a 32-byte digest with a P256 private key.
///
/// Prints the signature, the public key and the 160-byte precompile request.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded 32-byte private key
    #[arg(long, env = "P256ME_PRIVATE_KEY", hide_env_values = true)]
    private_key: String,
    /// Hex-encoded 32-byte digest
    #[arg(long)]
    digest: String,
    /// Replace `s` with `n - s`
    #[arg(long)]
    malleate: bool,
}

impl Cmd {
    /// Runs sign command.
    pub fn run(&self) -> Result<(), Error> {
        let private_key = hex_input::decode_word("private-key", &self.private_key)?;
        let digest = hex_input::decode_word("digest", &self.digest)?;
        let request = sign(&private_key, digest, self.malleate)?;

        println!("r: {}", request.signature.r);
        println!("s: {}", request.signature.s);
        println!("x: {}", request.public_key.x);
        println!("y: {}", request.public_key.y);
        println!("signature: {}", hex::encode_prefixed(request.signature.to_bytes()));
        println!("request: {}", hex::encode_prefixed(request.encode()));
        Ok(())
    }
}

/// Signs `digest` and builds the matching verification request.
pub fn sign(private_key: &B256, digest: B256, malleate: bool) -> Result<VerificationRequest, Error> {
    let signing_key =
        SigningKey::from_slice(private_key.as_slice()).map_err(|_| Error::InvalidPrivateKey)?;
    let signature: Signature = signing_key
        .sign_prehash(digest.as_slice())
        .map_err(Error::Signing)?;
    let mut signature = P256Signature::from_slice(&signature.to_bytes())?;
    if malleate {
        signature = signature.malleated()?;
    }

    let point = signing_key.verifying_key().to_encoded_point(false);
    let (Some(x), Some(y)) = (point.x(), point.y()) else {
        return Err(Error::InvalidPrivateKey);
    };
    let public_key = P256PublicKey::new(B256::from_slice(x), B256::from_slice(y));

    Ok(VerificationRequest::new(digest, signature, public_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use precompile::secp256r1::handle;
    use primitives::b256;

    const PRIVATE_KEY: B256 =
        b256!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");

    #[test]
    fn signed_request_passes_gateway() {
        let digest = B256::repeat_byte(0xab);
        for malleate in [false, true] {
            let request = sign(&PRIVATE_KEY, digest, malleate).unwrap();
            assert_eq!(
                request.public_key.x,
                b256!("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6")
            );
            let output = handle(&request.encode());
            assert_eq!(output.len(), 32);
            assert_eq!(output[31], 1);
        }
    }

    #[test]
    fn zero_key_rejected() {
        assert!(matches!(
            sign(&B256::ZERO, B256::ZERO, false),
            Err(Error::InvalidPrivateKey)
        ));
    }
}
