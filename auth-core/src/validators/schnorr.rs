//! BIP-340 Schnorr validator.
//!
//! The signature blob packs the x-only public key ahead of the actual
//! signature: `sig = pubkey(32) ‖ signature(64)`.

use k256::schnorr::{Signature, VerifyingKey};
use signature::Verifier;

use crate::error::{AuthError, AuthResult};
use crate::hash::blake160;

const SCHNORR_PUBKEY_SIZE: usize = 32;
const SCHNORR_SIGNATURE_SIZE: usize = 32 + 64;

/// `fingerprint = blake160(x_only_pubkey)`. Any parse or verify failure maps
/// to [`AuthError::Schnorr`], not `WrongState` — the two ECDSA families and
/// Schnorr intentionally keep distinct failure codes.
pub fn validate(sig: &[u8], digest: &[u8; 32]) -> AuthResult<[u8; 20]> {
    if sig.len() != SCHNORR_SIGNATURE_SIZE {
        return Err(AuthError::InvalidArg);
    }
    let (pubkey_bytes, signature_bytes) = sig.split_at(SCHNORR_PUBKEY_SIZE);

    let verifying_key =
        VerifyingKey::from_bytes(pubkey_bytes).map_err(|_| AuthError::Schnorr)?;
    let signature = Signature::try_from(signature_bytes).map_err(|_| AuthError::Schnorr)?;

    verifying_key
        .verify(digest, &signature)
        .map_err(|_| AuthError::Schnorr)?;

    Ok(blake160(pubkey_bytes))
}
