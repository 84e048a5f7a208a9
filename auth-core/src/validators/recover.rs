//! Shared secp256k1 ECDSA-recoverable plumbing used by every
//! ECDSA-family validator (CKB, Ethereum/Eos/Tron, Bitcoin/Dogecoin/Litecoin).

use ecdsa::{RecoveryId, Signature as EcdsaSignature, VerifyingKey};
use k256::Secp256k1;

use crate::error::{AuthError, AuthResult};

/// Recovers the secp256k1 public key for a 64-byte compact signature plus a
/// recovery id, against an already-canonicalized 32-byte message digest.
pub fn recover(compact_sig: &[u8], recid_byte: u8, digest: &[u8; 32]) -> AuthResult<VerifyingKey<Secp256k1>> {
    let signature =
        EcdsaSignature::<Secp256k1>::try_from(compact_sig).map_err(|_| AuthError::WrongState)?;
    let recovery_id = RecoveryId::from_byte(recid_byte).ok_or(AuthError::WrongState)?;
    VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
        .map_err(|_| AuthError::WrongState)
}

/// Same recovery as [`recover`], but for the multisig validator, which (per
/// spec.md §7) keeps `SecpParseSignature`/`SecpRecoverPubkey` distinct from
/// the single-scheme validators' collapsed `WrongState`.
pub fn recover_for_multisig(
    compact_sig: &[u8],
    recid_byte: u8,
    digest: &[u8; 32],
) -> AuthResult<VerifyingKey<Secp256k1>> {
    let signature = EcdsaSignature::<Secp256k1>::try_from(compact_sig)
        .map_err(|_| AuthError::SecpParseSignature)?;
    let recovery_id = RecoveryId::from_byte(recid_byte).ok_or(AuthError::SecpParseSignature)?;
    VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
        .map_err(|_| AuthError::SecpRecoverPubkey)
}

/// SEC1-compressed serialization (33 bytes: 0x02/0x03 prefix ‖ X).
pub fn serialize_compressed(key: &VerifyingKey<Secp256k1>) -> [u8; 33] {
    let encoded = key.to_encoded_point(true);
    let bytes = encoded.as_bytes();
    let mut out = [0u8; 33];
    out.copy_from_slice(bytes);
    out
}

/// SEC1-uncompressed serialization (65 bytes: 0x04 prefix ‖ X ‖ Y).
pub fn serialize_uncompressed(key: &VerifyingKey<Secp256k1>) -> [u8; 65] {
    let encoded = key.to_encoded_point(false);
    let bytes = encoded.as_bytes();
    let mut out = [0u8; 65];
    out.copy_from_slice(bytes);
    out
}
