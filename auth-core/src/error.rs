//! Typed error taxonomy for the authentication dispatcher.
//!
//! Discriminant values are fixed by the host ABI this component was built
//! against (mirroring the reference implementation's `AuthErrorCodeType`
//! and the multisig script's negative error constants) and must not be
//! renumbered without a compatibility decision.

use thiserror::Error;

/// Every way `validate` can fail. `i32::from` is the single place a typed
/// error becomes the wire-level status code returned across the ABI.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AuthError {
    #[error("algorithm id is not implemented")]
    NotImplemented = 100,
    #[error("recovered fingerprint does not match the claimed one")]
    Mismatched = 101,
    #[error("invalid argument")]
    InvalidArg = 102,
    #[error("signature parse, recovery, or serialization failed")]
    WrongState = 103,
    #[error("spawn argv has an invalid length")]
    SpawnInvalidLength = 104,
    #[error("spawn signature argument exceeds the maximum size")]
    SpawnSignTooLong = 105,
    #[error("spawn algorithm id argument is not valid hex")]
    SpawnInvalidAlgorithmId = 106,
    #[error("spawn signature argument is not valid hex")]
    SpawnInvalidSig = 107,
    #[error("spawn message argument is not valid hex")]
    SpawnInvalidMsg = 108,
    #[error("spawn pubkey hash argument is not valid hex")]
    SpawnInvalidPubkey = 109,
    #[error("BIP-340 Schnorr verification failed")]
    Schnorr = 110,

    #[error("secp256k1 signature parse failed")]
    SecpParseSignature = -14,
    #[error("secp256k1 public key recovery failed")]
    SecpRecoverPubkey = -11,
    /// Never constructed by this crate: `k256`'s SEC1 point encoding has no
    /// fallible path once a `VerifyingKey` has been recovered, unlike the
    /// reference implementation's output-buffer-sized serialization call.
    /// Kept in the taxonomy for wire/discriminant compatibility.
    #[error("secp256k1 public key serialization failed")]
    SecpSerializePubkey = -15,
    #[error("multisig witness has the wrong size")]
    WitnessSize = -22,
    #[error("multisig reserved field must be zero")]
    InvalidReserveField = -41,
    #[error("multisig pubkeys_cnt must be nonzero")]
    InvalidPubkeysCnt = -42,
    #[error("multisig threshold is out of range")]
    InvalidThreshold = -43,
    #[error("multisig require_first_n exceeds threshold")]
    InvalidRequireFirstN = -44,
    #[error("multisig script hash does not match the claimed fingerprint")]
    MultisigScriptHash = -51,
    #[error("multisig signature set did not satisfy the threshold/require_first_n rule")]
    Verification = -52,
}

impl From<AuthError> for i32 {
    fn from(err: AuthError) -> i32 {
        err as i32
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
