//! Central dispatch: `(AlgorithmId, message, signature, fingerprint) -> status`.
//!
//! Threads canonicalizer -> validator -> equality for every branch except
//! multisig (verifies the claimed fingerprint itself, as the script hash)
//! and OwnerLock (reads host state instead of hashing anything).

use crate::algorithm::AlgorithmId;
use crate::canonicalize::{self, Message};
use crate::error::{AuthError, AuthResult};
use crate::host::{scan, OwnerLockHost};
use crate::multisig;
use crate::validators::{btc, cardano, ckb, eth_like, schnorr};

/// Runs one canonicalizer/validator pair and compares the resulting
/// fingerprint against `fingerprint`. Shared by every non-multisig,
/// non-OwnerLock branch.
fn verify_and_compare(
    canonicalizer: impl FnOnce(&Message) -> AuthResult<Message>,
    validator: impl FnOnce(&[u8], &[u8; 32]) -> AuthResult<[u8; 20]>,
    signature: &[u8],
    message: &Message,
    fingerprint: &[u8; 20],
) -> AuthResult<()> {
    let digest = canonicalizer(message)?;
    let recovered = validator(signature, &digest)?;
    if recovered == *fingerprint {
        Ok(())
    } else {
        Err(AuthError::Mismatched)
    }
}

/// Entry point for the loadable ABI, already past hex decoding / pointer
/// marshalling — `host` is only consulted for [`AlgorithmId::OwnerLock`].
pub fn validate<H: OwnerLockHost>(
    alg: AlgorithmId,
    signature: &[u8],
    message: &Message,
    fingerprint: &[u8; 20],
    host: &H,
) -> AuthResult<()> {
    log::debug!("validate: alg={alg:?}");

    if alg.requires_ecdsa_signature_length() && signature.len() != 65 {
        log::debug!("validate: alg={alg:?} rejected, signature_len={}", signature.len());
        return Err(AuthError::InvalidArg);
    }

    let result = match alg {
        AlgorithmId::Ckb => {
            verify_and_compare(canonicalize::identity, ckb::validate, signature, message, fingerprint)
        }
        AlgorithmId::Ethereum => {
            verify_and_compare(canonicalize::eth_prefix, eth_like::validate, signature, message, fingerprint)
        }
        AlgorithmId::Eos => {
            verify_and_compare(canonicalize::eos, eth_like::validate, signature, message, fingerprint)
        }
        AlgorithmId::Tron => {
            verify_and_compare(canonicalize::tron_prefix, eth_like::validate, signature, message, fingerprint)
        }
        AlgorithmId::Bitcoin => verify_and_compare(
            |m| canonicalize::btc_variant(m, canonicalize::BTC_MAGIC),
            btc::validate,
            signature,
            message,
            fingerprint,
        ),
        AlgorithmId::Dogecoin => verify_and_compare(
            |m| canonicalize::btc_variant(m, canonicalize::DOGE_MAGIC),
            btc::validate,
            signature,
            message,
            fingerprint,
        ),
        AlgorithmId::Litecoin => verify_and_compare(
            |m| canonicalize::btc_variant(m, canonicalize::LITE_MAGIC),
            btc::validate,
            signature,
            message,
            fingerprint,
        ),
        AlgorithmId::Schnorr => {
            verify_and_compare(canonicalize::identity, schnorr::validate, signature, message, fingerprint)
        }
        AlgorithmId::Cardano => {
            verify_and_compare(canonicalize::identity, cardano::validate, signature, message, fingerprint)
        }
        AlgorithmId::CkbMultisig => multisig::validate(signature, message, fingerprint),
        AlgorithmId::OwnerLock => scan(host, fingerprint),
    };

    if let Err(err) = result {
        log::debug!("validate: alg={alg:?} -> {err:?}");
    }
    result
}
