//! P256 account signature authority.
use crate::AccountError;
use precompile::{
    secp256r1::{verify_signature, P256PublicKey, P256Signature},
    P256Error,
};
use primitives::{
    FixedBytes, TransactionRequest, ACCOUNT_VALIDATION_SUCCESS_MAGIC, B256,
    EIP1271_INVALID_VALUE, EIP1271_MAGIC_VALUE,
};
use tracing::debug;

/// Account whose signing authority is a single P256 public key.
///
/// The key is fixed by the constructor and there is no way to change it afterwards,
/// so every validation is checked against the same `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct P256Account {
    public_key: P256PublicKey,
}

impl P256Account {
    /// Creates an account for the key `(x, y)`.
    ///
    /// Coordinates are stored as given. An off-curve key is not rejected here but
    /// can never authorize anything, see [`P256Account::try_new`] for an eager check.
    pub const fn new(x: B256, y: B256) -> Self {
        Self {
            public_key: P256PublicKey::new(x, y),
        }
    }

    /// Creates an account, rejecting keys that are not on the P256 curve.
    pub fn try_new(x: B256, y: B256) -> Result<Self, AccountError> {
        let account = Self::new(x, y);
        if !account.public_key.is_on_curve() {
            return Err(P256Error::InvalidPublicKey.into());
        }
        Ok(account)
    }

    /// Returns the stored public key.
    #[inline]
    pub const fn public_key(&self) -> &P256PublicKey {
        &self.public_key
    }

    /// Indexed key getter: `0` is `x`, `1` is `y`.
    pub const fn public_key_coordinate(&self, index: usize) -> Option<B256> {
        match index {
            0 => Some(self.public_key.x),
            1 => Some(self.public_key.y),
            _ => None,
        }
    }

    /// Checks a 64-byte `r || s` signature over `digest` against the account key.
    pub fn verify(&self, digest: &B256, signature: &[u8]) -> Result<(), P256Error> {
        let signature = P256Signature::from_slice(signature)?;
        verify_signature(digest, &signature, &self.public_key).inspect_err(|err| {
            debug!(target: "p256account", %digest, %err, "signature rejected");
        })
    }

    /// [EIP-1271](https://eips.ethereum.org/EIPS/eip-1271) `isValidSignature`.
    ///
    /// Returns [`EIP1271_MAGIC_VALUE`] if `signature` is a valid signature of `digest`
    /// by the account key and [`EIP1271_INVALID_VALUE`] otherwise. Both `s` and `n - s`
    /// are accepted.
    pub fn is_valid_signature(&self, digest: &B256, signature: &[u8]) -> FixedBytes<4> {
        match self.verify(digest, signature) {
            Ok(()) => EIP1271_MAGIC_VALUE,
            Err(_) => EIP1271_INVALID_VALUE,
        }
    }

    /// Validates an account transaction.
    ///
    /// `signed_digest` is the EIP-712 hash of `tx`, computed by the caller; it is not
    /// re-derived here and none of the nonce or fee fields of `tx` are consulted. Only
    /// [`TransactionRequest::custom_signature`] is checked against the digest.
    pub fn validate_transaction(
        &self,
        signed_digest: &B256,
        tx: &TransactionRequest,
    ) -> Result<(), AccountError> {
        if !tx.is_eip712() {
            debug!(target: "p256account", tx_type = tx.tx_type, "unsupported transaction type");
            return Err(AccountError::UnsupportedTxType(tx.tx_type));
        }
        self.verify(signed_digest, &tx.custom_signature)?;
        Ok(())
    }

    /// [`P256Account::validate_transaction`] returning the account validation magic
    /// on success and zero bytes on failure.
    pub fn validate_transaction_magic(
        &self,
        signed_digest: &B256,
        tx: &TransactionRequest,
    ) -> FixedBytes<4> {
        match self.validate_transaction(signed_digest, tx) {
            Ok(()) => ACCOUNT_VALIDATION_SUCCESS_MAGIC,
            Err(_) => FixedBytes::ZERO,
        }
    }
}
