//! ECDSA-recoverable validator shared by Bitcoin, Dogecoin and Litecoin.
//!
//! Unlike the other ECDSA dialects, the recovery id and the
//! compressed/uncompressed flag are both packed into a single header byte
//! at `sig[0]`, in the BIP-137-ish convention `header = 27 + recid + 4*compressed`.

use crate::error::AuthResult;
use crate::hash::hash160;
use crate::validators::recover::{recover, serialize_compressed, serialize_uncompressed};

/// `recid = (sig[0]-27)&3`, `compressed = ((sig[0]-27)&4)!=0`,
/// `fingerprint = RIPEMD160(SHA256(serialized pubkey))`.
pub fn validate(sig: &[u8], digest: &[u8; 32]) -> AuthResult<[u8; 20]> {
    debug_assert_eq!(sig.len(), 65);
    let header = sig[0];
    let recid = header.wrapping_sub(27) & 3;
    let compressed = (header.wrapping_sub(27) & 4) != 0;

    let key = recover(&sig[1..65], recid, digest)?;
    let serialized: Vec<u8> = if compressed {
        serialize_compressed(&key).to_vec()
    } else {
        serialize_uncompressed(&key).to_vec()
    };
    Ok(hash160(&serialized))
}
