//! Fixed-output digests used by the canonicalizers and validators.
//!
//! All functions here are pure and allocate only the fixed-size array they
//! return; none of them touch a signature's contents themselves, they only
//! ever hash already-serialized public keys or already-canonicalized
//! messages.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// CKB's personalized BLAKE2b, output truncated to 32 bytes.
///
/// Every CKB-family fingerprint (CKB, Schnorr, Cardano, multisig) is built
/// on top of this, not on vanilla (unpersonalized) BLAKE2b.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut params = blake2_rfc::blake2b::Blake2b::with_params(32, &[], &[], CKB_HASH_PERSONALIZATION);
    params.update(data);
    let digest = params.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_bytes());
    out
}

/// CKB's personalization string, exactly 16 bytes (BLAKE2b's persona limit).
const CKB_HASH_PERSONALIZATION: &[u8] = b"ckb-default-hash";

/// First 20 bytes of [`blake2b_256`] — the "blake160" fingerprint shared by
/// every CKB-family scheme (CKB, Schnorr, Cardano, multisig).
pub fn blake160(data: &[u8]) -> [u8; 20] {
    let full = blake2b_256(data);
    let mut out = [0u8; 20];
    out.copy_from_slice(&full[0..20]);
    out
}

/// Keccak-256 (not SHA3-256) as used by Ethereum/Tron/Eos-family dialects.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// SHA-256, used standalone (Eos canonicalizer) and as part of the
/// Bitcoin-family double-hash chains.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// SHA-256 applied twice, the Bitcoin-message-signing double hash.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160(SHA-256(pubkey)) — the Bitcoin-family fingerprint chain.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = sha256(data);
    let mut hasher = Ripemd160::new();
    hasher.update(sha);
    let digest = hasher.finalize();
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest);
    out
}
