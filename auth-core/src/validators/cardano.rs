//! Cardano validator: Ed25519 over an envelope that also binds the
//! canonicalized CKB message, so a signature produced for one cell cannot
//! be replayed against another.

use ed25519_dalek::{Signature as Ed25519Signature, VerifyingKey};

use crate::error::{AuthError, AuthResult};
use crate::hash::blake160;

const PUBLIC_KEY_SIZE: usize = 32;
const SIGNATURE_SIZE: usize = 64;
const CKB_SIGN_MSG_SIZE: usize = 32;
const SIGN_MESSAGE_MAX_LEN: usize = 2048;
const HEADER_SIZE: usize = PUBLIC_KEY_SIZE + SIGNATURE_SIZE;

/// Decoded `{public_key, signature, sign_message, ckb_sign_msg}` envelope.
///
/// Wire layout: `public_key(32) ‖ signature(64) ‖ sign_message(var) ‖ ckb_sign_msg(32)`.
/// `sign_message` is whatever bytes Cardano wallets actually sign (often a
/// CBOR-wrapped payload); `ckb_sign_msg` is the 32-byte digest this call is
/// asked to authenticate, embedded by the wallet so the two can be bound
/// together without the core needing to understand CBOR.
struct CardanoSignatureData<'a> {
    public_key: &'a [u8],
    signature: &'a [u8],
    sign_message: &'a [u8],
    ckb_sign_msg: &'a [u8],
}

fn decode(sig: &[u8]) -> AuthResult<CardanoSignatureData<'_>> {
    if sig.len() < HEADER_SIZE + CKB_SIGN_MSG_SIZE {
        return Err(AuthError::InvalidArg);
    }
    let (public_key, rest) = sig.split_at(PUBLIC_KEY_SIZE);
    let (signature, rest) = rest.split_at(SIGNATURE_SIZE);
    let sign_message_len = rest.len() - CKB_SIGN_MSG_SIZE;
    if sign_message_len > SIGN_MESSAGE_MAX_LEN {
        return Err(AuthError::InvalidArg);
    }
    let (sign_message, ckb_sign_msg) = rest.split_at(sign_message_len);
    Ok(CardanoSignatureData {
        public_key,
        signature,
        sign_message,
        ckb_sign_msg,
    })
}

/// Assert `envelope.ckb_sign_msg == msg`, verify Ed25519 over `sign_message`,
/// fingerprint = `blake160(public_key)`.
pub fn validate(sig: &[u8], digest: &[u8; 32]) -> AuthResult<[u8; 20]> {
    let envelope = decode(sig)?;
    if envelope.ckb_sign_msg != digest.as_slice() {
        return Err(AuthError::InvalidArg);
    }

    let verifying_key =
        VerifyingKey::try_from(envelope.public_key).map_err(|_| AuthError::InvalidArg)?;
    let signature =
        Ed25519Signature::try_from(envelope.signature).map_err(|_| AuthError::InvalidArg)?;

    verifying_key
        .verify_strict(envelope.sign_message, &signature)
        .map_err(|_| AuthError::WrongState)?;

    Ok(blake160(envelope.public_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use rand_core::OsRng;

    fn envelope_bytes(
        public_key: &[u8],
        signature: &[u8],
        sign_message: &[u8],
        ckb_sign_msg: &[u8; 32],
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + sign_message.len() + CKB_SIGN_MSG_SIZE);
        out.extend_from_slice(public_key);
        out.extend_from_slice(signature);
        out.extend_from_slice(sign_message);
        out.extend_from_slice(ckb_sign_msg);
        out
    }

    #[test]
    fn verifies_when_ckb_sign_msg_matches_digest() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let digest = [7u8; 32];
        let sign_message = b"cardano wallet payload";
        let signature = signing_key.sign(sign_message);

        let sig = envelope_bytes(
            signing_key.verifying_key().as_bytes(),
            &signature.to_bytes(),
            sign_message,
            &digest,
        );

        let expected_fp = blake160(signing_key.verifying_key().as_bytes());
        let fp = validate(&sig, &digest).unwrap();
        assert_eq!(fp, expected_fp);
    }

    #[test]
    fn flipping_ckb_sign_msg_bit_is_invalid_arg() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let digest = [8u8; 32];
        let sign_message = b"cardano wallet payload";
        let signature = signing_key.sign(sign_message);

        let mut embedded = digest;
        embedded[0] ^= 1;
        let sig = envelope_bytes(
            signing_key.verifying_key().as_bytes(),
            &signature.to_bytes(),
            sign_message,
            &embedded,
        );

        assert_eq!(validate(&sig, &digest), Err(AuthError::InvalidArg));
    }

    #[test]
    fn tampering_with_sign_message_fails_verification() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let digest = [9u8; 32];
        let sign_message = b"cardano wallet payload";
        let signature = signing_key.sign(sign_message);

        let mut sig = envelope_bytes(
            signing_key.verifying_key().as_bytes(),
            &signature.to_bytes(),
            sign_message,
            &digest,
        );
        let tamper_index = HEADER_SIZE;
        sig[tamper_index] ^= 1;

        assert_eq!(validate(&sig, &digest), Err(AuthError::WrongState));
    }

    #[test]
    fn truncated_envelope_is_invalid_arg() {
        let digest = [10u8; 32];
        assert_eq!(validate(&[0u8; 10], &digest), Err(AuthError::InvalidArg));
    }
}
