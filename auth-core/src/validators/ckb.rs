//! Native CKB ECDSA-recoverable validator.

use crate::error::AuthResult;
use crate::hash::blake160;
use crate::validators::recover::{recover, serialize_compressed};

const RECID_INDEX: usize = 64;

/// `recid = sig[64]`, compressed pubkey, `fingerprint = blake160(pubkey)`.
pub fn validate(sig: &[u8], digest: &[u8; 32]) -> AuthResult<[u8; 20]> {
    debug_assert_eq!(sig.len(), 65);
    let key = recover(&sig[0..64], sig[RECID_INDEX], digest)?;
    let pubkey = serialize_compressed(&key);
    Ok(blake160(&pubkey))
}
