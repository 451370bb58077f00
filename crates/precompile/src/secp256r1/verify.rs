//! P256 ECDSA verification over prehashed messages.
//!
//! Verification follows SEC 1 §4.1.4 with one deliberate difference from some
//! ECDSA profiles: `s` is not required to be in the lower half of the group, so
//! `(r, s)` and `(r, n - s)` are both accepted. Uniqueness of a submission is the
//! caller's concern.
use super::types::{P256PublicKey, P256Signature};
use crate::P256Error;
use p256::{
    elliptic_curve::{ops::Reduce, point::AffineCoordinates, sec1::FromEncodedPoint},
    AffinePoint, EncodedPoint, FieldBytes, NonZeroScalar, ProjectivePoint, Scalar, U256,
};
use primitives::B256;

/// Verifies `(r, s)` over `digest` against `public_key`.
///
/// Returns `false` for any out-of-range scalar, off-curve key, or failed check.
#[inline]
pub fn verify(digest: &B256, r: &B256, s: &B256, public_key: &P256PublicKey) -> bool {
    verify_signature(digest, &P256Signature::new(*r, *s), public_key).is_ok()
}

/// Verifies `signature` over `digest` against `public_key`, reporting why it was rejected.
pub fn verify_signature(
    digest: &B256,
    signature: &P256Signature,
    public_key: &P256PublicKey,
) -> Result<(), P256Error> {
    let r = parse_scalar(&signature.r)?;
    let s = parse_scalar(&signature.s)?;
    let q = parse_public_key(public_key)?;

    // The hash is 256 bits wide, as is n, so it is reduced rather than truncated.
    let z = <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(digest.0));

    let s: Scalar = *s;
    let w = Option::<Scalar>::from(s.invert()).ok_or(P256Error::ScalarOutOfRange)?;
    let u1 = z * w;
    let u2 = *r * w;

    let point = ProjectivePoint::GENERATOR * u1 + ProjectivePoint::from(q) * u2;
    if point == ProjectivePoint::IDENTITY {
        return Err(P256Error::SignatureMismatch);
    }

    let x = AffinePoint::from(point).x();
    if <Scalar as Reduce<U256>>::reduce_bytes(&x) == *r {
        Ok(())
    } else {
        Err(P256Error::SignatureMismatch)
    }
}

/// Decodes a big-endian scalar, requiring it to lie in `[1, n - 1]`.
pub(crate) fn parse_scalar(bytes: &B256) -> Result<NonZeroScalar, P256Error> {
    Option::from(NonZeroScalar::from_repr(FieldBytes::from(bytes.0)))
        .ok_or(P256Error::ScalarOutOfRange)
}

/// Decodes affine coordinates into a curve point.
///
/// Rejects coordinates not below the field modulus and points that do not satisfy the
/// curve equation. The identity has no affine coordinates, so it cannot be encoded here.
pub(crate) fn parse_public_key(public_key: &P256PublicKey) -> Result<AffinePoint, P256Error> {
    let encoded = EncodedPoint::from_affine_coordinates(
        &FieldBytes::from(public_key.x.0),
        &FieldBytes::from(public_key.y.0),
        false,
    );
    Option::from(AffinePoint::from_encoded_point(&encoded)).ok_or(P256Error::InvalidPublicKey)
}
