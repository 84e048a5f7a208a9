//! ECDSA-recoverable validator shared by Ethereum, Eos and Tron — they
//! differ only in canonicalizer (`eth_prefix`/`eos`/`tron_prefix`), not in
//! how the recovered key becomes a fingerprint.

use crate::error::AuthResult;
use crate::hash::keccak256;
use crate::validators::recover::{recover, serialize_uncompressed};

const RECID_INDEX: usize = 64;

/// `recid = sig[64]`, uncompressed pubkey, `fingerprint = keccak256(pubkey[1..])[12..32]`.
pub fn validate(sig: &[u8], digest: &[u8; 32]) -> AuthResult<[u8; 20]> {
    debug_assert_eq!(sig.len(), 65);
    let key = recover(&sig[0..64], sig[RECID_INDEX], digest)?;
    let pubkey = serialize_uncompressed(&key);
    let hashed = keccak256(&pubkey[1..]);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hashed[12..32]);
    Ok(out)
}
