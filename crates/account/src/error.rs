use core::fmt;
use precompile::P256Error;

/// Why an account refused to authorize a message or transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountError {
    /// The signature did not verify against the account key.
    Signature(P256Error),
    /// Transaction type is not the EIP-712 account transaction type.
    UnsupportedTxType(u8),
}

impl core::error::Error for AccountError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Signature(err) => Some(err),
            Self::UnsupportedTxType(_) => None,
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature(err) => write!(f, "invalid account signature: {err}"),
            Self::UnsupportedTxType(ty) => write!(f, "unsupported transaction type {ty}"),
        }
    }
}

impl From<P256Error> for AccountError {
    fn from(value: P256Error) -> Self {
        Self::Signature(value)
    }
}
