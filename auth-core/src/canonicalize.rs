//! Pure functions mapping a raw 32-byte digest to the 32-byte digest a given
//! dialect's signer actually signs.
//!
//! Every canonicalizer here is infallible in practice (the only error path,
//! a length mismatch, is structurally impossible since [`Message`] is
//! already a fixed `[u8; 32]`); the `AuthResult` return type exists purely
//! so the dispatcher can thread all branches through a uniform `?`.

use crate::error::AuthResult;
use crate::hash::{keccak256, sha256, sha256d};

pub type Message = [u8; 32];

/// Copies the digest through unchanged (CKB, Schnorr, Cardano, CkbMultisig).
pub fn identity(msg: &Message) -> AuthResult<Message> {
    Ok(*msg)
}

const ETH_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";
const TRON_PREFIX: &[u8] = b"\x19TRON Signed Message:\n32";

/// `Keccak-256(0x19 ‖ "Ethereum Signed Message:\n32" ‖ msg)`.
pub fn eth_prefix(msg: &Message) -> AuthResult<Message> {
    debug_assert_eq!(ETH_PREFIX.len(), 28);
    let mut buf = [0u8; 28 + 32];
    buf[..ETH_PREFIX.len()].copy_from_slice(ETH_PREFIX);
    buf[ETH_PREFIX.len()..].copy_from_slice(msg);
    Ok(keccak256(&buf))
}

/// `Keccak-256(0x19 ‖ "TRON Signed Message:\n32" ‖ msg)`.
pub fn tron_prefix(msg: &Message) -> AuthResult<Message> {
    debug_assert_eq!(TRON_PREFIX.len(), 24);
    let mut buf = [0u8; 24 + 32];
    buf[..TRON_PREFIX.len()].copy_from_slice(TRON_PREFIX);
    buf[TRON_PREFIX.len()..].copy_from_slice(msg);
    Ok(keccak256(&buf))
}

/// `SHA-256(msg)`.
///
/// The reference implementation also builds a "hex split into 6-char
/// words" scratch buffer (`split_hex_hash`) before hashing, but never
/// consumes it — the observable result is exactly `SHA-256(msg)`. Preserved
/// as-is rather than silently "fixed"; see `DESIGN.md`.
pub fn eos(msg: &Message) -> AuthResult<Message> {
    Ok(sha256(msg))
}

/// Shared shape for the Bitcoin/Dogecoin/Litecoin "Signed Message" framing:
/// `SHA-256d(magic_len ‖ magic ‖ 64 ‖ lowercase_hex(msg))`.
pub fn btc_variant(msg: &Message, magic: &[u8]) -> AuthResult<Message> {
    debug_assert!(magic.len() <= u8::MAX as usize);
    let hex_msg = hex::encode(msg);
    debug_assert_eq!(hex_msg.len(), 64);

    let mut frame = Vec::with_capacity(2 + magic.len() + 64);
    frame.push(magic.len() as u8);
    frame.extend_from_slice(magic);
    frame.push(64u8);
    frame.extend_from_slice(hex_msg.as_bytes());

    Ok(sha256d(&frame))
}

pub const BTC_MAGIC: &[u8] = b"Bitcoin Signed Message:\n";
pub const DOGE_MAGIC: &[u8] = b"Dogecoin Signed Message:\n";
pub const LITE_MAGIC: &[u8] = b"Litecoin Signed Message:\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_copies_exactly() {
        let msg = [7u8; 32];
        assert_eq!(identity(&msg).unwrap(), msg);
    }

    #[test]
    fn eth_and_tron_prefixes_differ() {
        let msg = [1u8; 32];
        assert_ne!(eth_prefix(&msg).unwrap(), tron_prefix(&msg).unwrap());
    }

    #[test]
    fn eos_is_plain_sha256() {
        let msg = [9u8; 32];
        assert_eq!(eos(&msg).unwrap(), sha256(&msg));
    }

    #[test]
    fn btc_variants_are_distinguished_by_magic() {
        let msg = [3u8; 32];
        let btc = btc_variant(&msg, BTC_MAGIC).unwrap();
        let doge = btc_variant(&msg, DOGE_MAGIC).unwrap();
        let lite = btc_variant(&msg, LITE_MAGIC).unwrap();
        assert_ne!(btc, doge);
        assert_ne!(doge, lite);
        assert_ne!(btc, lite);
    }
}
