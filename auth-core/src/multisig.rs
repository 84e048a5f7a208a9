//! m-of-n multisig lock script.
//!
//! Wire layout: `reserved(1) ‖ require_first_n(1) ‖ threshold(1) ‖
//! pubkeys_cnt(1) ‖ pubkey_hashes[pubkeys_cnt * 20] ‖ signatures[threshold * 65]`.
//!
//! Every check below is strict and fail-fast, in the exact order the
//! layout is read — a malformed script should fail on the cheapest check
//! that catches it, before any cryptography runs.

use crate::error::{AuthError, AuthResult};
use crate::hash::blake160;
use crate::validators::recover::{recover_for_multisig, serialize_compressed};

const RESERVED_OFFSET: usize = 0;
const REQUIRE_FIRST_N_OFFSET: usize = 1;
const THRESHOLD_OFFSET: usize = 2;
const PUBKEYS_CNT_OFFSET: usize = 3;
const SCRIPT_HEADER_LEN: usize = 4;
const PUBKEY_HASH_LEN: usize = 20;
const SIGNATURE_LEN: usize = 65;

/// Validates an m-of-n multisig witness against `message` and a claimed
/// `fingerprint`, per the ordered checks in the module doc.
pub fn validate(sig: &[u8], digest: &[u8; 32], fingerprint: &[u8; 20]) -> AuthResult<()> {
    if sig.len() < SCRIPT_HEADER_LEN {
        return Err(AuthError::WitnessSize);
    }

    let reserved = sig[RESERVED_OFFSET];
    let require_first_n = sig[REQUIRE_FIRST_N_OFFSET];
    let threshold = sig[THRESHOLD_OFFSET];
    let pubkeys_cnt = sig[PUBKEYS_CNT_OFFSET];

    if reserved != 0 {
        return Err(AuthError::InvalidReserveField);
    }
    if pubkeys_cnt == 0 {
        return Err(AuthError::InvalidPubkeysCnt);
    }
    if threshold == 0 || threshold > pubkeys_cnt {
        return Err(AuthError::InvalidThreshold);
    }
    if require_first_n > threshold {
        return Err(AuthError::InvalidRequireFirstN);
    }

    let pubkeys_cnt = pubkeys_cnt as usize;
    let threshold = threshold as usize;
    let require_first_n = require_first_n as usize;

    let expected_len = SCRIPT_HEADER_LEN + PUBKEY_HASH_LEN * pubkeys_cnt + SIGNATURE_LEN * threshold;
    if sig.len() != expected_len {
        return Err(AuthError::WitnessSize);
    }

    let hashes_end = SCRIPT_HEADER_LEN + PUBKEY_HASH_LEN * pubkeys_cnt;
    let multisig_script = &sig[0..hashes_end];
    if blake160(multisig_script) != *fingerprint {
        return Err(AuthError::MultisigScriptHash);
    }

    let pubkey_hashes: Vec<&[u8]> = sig[SCRIPT_HEADER_LEN..hashes_end]
        .chunks_exact(PUBKEY_HASH_LEN)
        .collect();
    let mut used = vec![false; pubkeys_cnt];

    for i in 0..threshold {
        let slot_start = hashes_end + SIGNATURE_LEN * i;
        let slot = &sig[slot_start..slot_start + SIGNATURE_LEN];
        let key = recover_for_multisig(&slot[0..64], slot[64], digest)?;
        let recovered_fp = blake160(&serialize_compressed(&key));

        let matched = pubkey_hashes
            .iter()
            .enumerate()
            .find(|(index, hash)| !used[*index] && **hash == recovered_fp);

        match matched {
            Some((index, _)) => used[index] = true,
            None => return Err(AuthError::Verification),
        }
    }

    if used[0..require_first_n].iter().any(|slot| !slot) {
        return Err(AuthError::Verification);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecdsa::hazmat::SignPrimitive;
    use k256::ecdsa::SigningKey;
    use rand_core::OsRng;

    fn sign(signing_key: &SigningKey, digest: &[u8; 32]) -> [u8; SIGNATURE_LEN] {
        let hash: &[u8] = digest;
        let (signature, recid) = signing_key
            .as_nonzero_scalar()
            .try_sign_prehashed_rfc6979::<sha2::Sha256>(hash.into(), b"")
            .unwrap();
        let mut out = [0u8; SIGNATURE_LEN];
        out[0..64].copy_from_slice(&signature.to_bytes());
        out[64] = recid.unwrap().to_byte();
        out
    }

    fn fingerprint_of(signing_key: &SigningKey) -> [u8; 20] {
        blake160(&serialize_compressed(signing_key.verifying_key()))
    }

    fn build_script(
        require_first_n: u8,
        threshold: u8,
        keys: &[SigningKey],
        digest: &[u8; 32],
        signer_indices: &[usize],
    ) -> Vec<u8> {
        let pubkeys_cnt = keys.len() as u8;
        let mut script = vec![0u8, require_first_n, threshold, pubkeys_cnt];
        for key in keys {
            script.extend_from_slice(&fingerprint_of(key));
        }
        for &idx in signer_indices {
            script.extend_from_slice(&sign(&keys[idx], digest));
        }
        script
    }

    fn fingerprint_of_script(script: &[u8], pubkeys_cnt: usize) -> [u8; 20] {
        blake160(&script[0..SCRIPT_HEADER_LEN + PUBKEY_HASH_LEN * pubkeys_cnt])
    }

    #[test]
    fn two_of_three_succeeds_with_first_and_third_signer() {
        let keys: Vec<_> = (0..3).map(|_| SigningKey::random(&mut OsRng)).collect();
        let digest = [21u8; 32];
        let script = build_script(1, 2, &keys, &digest, &[0, 2]);
        let fp = fingerprint_of_script(&script, 3);

        assert!(validate(&script, &digest, &fp).is_ok());
    }

    #[test]
    fn missing_required_first_signer_fails() {
        let keys: Vec<_> = (0..3).map(|_| SigningKey::random(&mut OsRng)).collect();
        let digest = [22u8; 32];
        let script = build_script(1, 2, &keys, &digest, &[1, 2]);
        let fp = fingerprint_of_script(&script, 3);

        assert_eq!(validate(&script, &digest, &fp), Err(AuthError::Verification));
    }

    #[test]
    fn duplicate_signature_does_not_satisfy_threshold() {
        let keys: Vec<_> = (0..3).map(|_| SigningKey::random(&mut OsRng)).collect();
        let digest = [23u8; 32];
        let script = build_script(1, 2, &keys, &digest, &[0, 0]);
        let fp = fingerprint_of_script(&script, 3);

        assert_eq!(validate(&script, &digest, &fp), Err(AuthError::Verification));
    }

    #[test]
    fn nonzero_reserved_byte_is_rejected() {
        let keys: Vec<_> = (0..3).map(|_| SigningKey::random(&mut OsRng)).collect();
        let digest = [24u8; 32];
        let mut script = build_script(1, 2, &keys, &digest, &[0, 2]);
        script[RESERVED_OFFSET] = 1;
        let fp = fingerprint_of_script(&script, 3);

        assert_eq!(validate(&script, &digest, &fp), Err(AuthError::InvalidReserveField));
    }

    #[test]
    fn threshold_above_pubkeys_cnt_is_rejected() {
        let keys: Vec<_> = (0..3).map(|_| SigningKey::random(&mut OsRng)).collect();
        let digest = [25u8; 32];
        let script = vec![0u8, 1, 4, 3];
        let fp = [0u8; 20];

        assert_eq!(validate(&script, &digest, &fp), Err(AuthError::InvalidThreshold));
    }

    #[test]
    fn tampered_script_hash_mismatches_claimed_fingerprint() {
        let keys: Vec<_> = (0..3).map(|_| SigningKey::random(&mut OsRng)).collect();
        let digest = [26u8; 32];
        let script = build_script(1, 2, &keys, &digest, &[0, 2]);
        let mut fp = fingerprint_of_script(&script, 3);
        fp[0] ^= 1;

        assert_eq!(validate(&script, &digest, &fp), Err(AuthError::MultisigScriptHash));
    }

    #[test]
    fn unparseable_signature_slot_is_secp_parse_signature_not_verification() {
        let keys: Vec<_> = (0..3).map(|_| SigningKey::random(&mut OsRng)).collect();
        let digest = [27u8; 32];
        let mut script = build_script(1, 2, &keys, &digest, &[0, 2]);
        let fp = fingerprint_of_script(&script, 3);

        let first_sig_start = SCRIPT_HEADER_LEN + PUBKEY_HASH_LEN * 3;
        script[first_sig_start..first_sig_start + 32].fill(0xff); // r >= curve order: unparseable

        assert_eq!(validate(&script, &digest, &fp), Err(AuthError::SecpParseSignature));
    }
}
