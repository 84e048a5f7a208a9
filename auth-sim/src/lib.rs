//! Test double standing in for the VM host: a fixed list of input-cell
//! lock-hashes, plus fixed-key helpers for building signatures the dev CLI
//! and integration tests can assert against without talking to a real
//! chain.

use auth_core::host::{LockHashLookup, OwnerLockHost};

/// `OwnerLockHost` backed by a plain in-memory list — the per-call scratch
/// arena the real host maintains maps directly onto stack-local data here,
/// no arena allocator needed.
pub struct FixedCellHost {
    lock_hashes: Vec<[u8; 32]>,
}

impl FixedCellHost {
    pub fn new(lock_hashes: Vec<[u8; 32]>) -> Self {
        Self { lock_hashes }
    }
}

impl OwnerLockHost for FixedCellHost {
    fn read_input_lock_hash(&self, index: usize) -> LockHashLookup {
        match self.lock_hashes.get(index) {
            Some(hash) => LockHashLookup::Found(*hash),
            None => LockHashLookup::OutOfBound,
        }
    }
}

/// Deterministic fixed-key vectors covering end-to-end scenarios for each
/// scheme. Each helper returns `(signature_bytes, message, fingerprint)`
/// ready to pass straight into `auth_core::validate`.
pub mod vectors {
    use auth_core::canonicalize::{self, Message};
    use auth_core::hash::{blake160, keccak256};
    use auth_core::validators::recover::{serialize_compressed, serialize_uncompressed};
    use ecdsa::hazmat::SignPrimitive;
    use k256::ecdsa::SigningKey;

    /// secp256k1 scalar `0x01…01`, a fixed key so vectors are reproducible
    /// without a CSPRNG.
    fn fixed_signing_key() -> SigningKey {
        let bytes = [1u8; 32];
        SigningKey::from_bytes((&bytes).into()).expect("fixed scalar is a valid nonzero key")
    }

    fn recoverable_sign(signing_key: &SigningKey, digest: &[u8; 32]) -> (k256::ecdsa::Signature, u8) {
        let hash: &[u8] = digest;
        let (signature, recid) = signing_key
            .as_nonzero_scalar()
            .try_sign_prehashed_rfc6979::<sha2::Sha256>(hash.into(), b"")
            .expect("prehash signing over a fixed 32-byte digest cannot fail");
        (signature, recid.expect("recoverable signature carries a recovery id").to_byte())
    }

    /// Ethereum vector: raw message `0x00…00`, fixed key, CKB-style
    /// recoverable signature over the `eth_prefix` canonicalization.
    pub fn ethereum() -> (Vec<u8>, Message, [u8; 20]) {
        let signing_key = fixed_signing_key();
        let message: Message = [0u8; 32];
        let digest = canonicalize::eth_prefix(&message).expect("canonicalizer is infallible");
        let (signature, recid) = recoverable_sign(&signing_key, &digest);

        let mut sig = vec![0u8; 65];
        sig[0..64].copy_from_slice(&signature.to_bytes());
        sig[64] = recid;

        let pubkey = serialize_uncompressed(signing_key.verifying_key());
        let hashed = keccak256(&pubkey[1..]);
        let mut fingerprint = [0u8; 20];
        fingerprint.copy_from_slice(&hashed[12..32]);

        (sig, message, fingerprint)
    }

    /// CKB vector: identity canonicalization, compressed-pubkey fingerprint.
    pub fn ckb() -> (Vec<u8>, Message, [u8; 20]) {
        let signing_key = fixed_signing_key();
        let message: Message = [2u8; 32];
        let (signature, recid) = recoverable_sign(&signing_key, &message);

        let mut sig = vec![0u8; 65];
        sig[0..64].copy_from_slice(&signature.to_bytes());
        sig[64] = recid;

        let fingerprint = blake160(&serialize_compressed(signing_key.verifying_key()));
        (sig, message, fingerprint)
    }

    /// Bitcoin vector: compressed header byte `27 + recid + 4`.
    pub fn bitcoin_compressed() -> (Vec<u8>, Message, [u8; 20]) {
        use auth_core::hash::hash160;

        let signing_key = fixed_signing_key();
        let message: Message = [3u8; 32];
        let digest = canonicalize::btc_variant(&message, canonicalize::BTC_MAGIC)
            .expect("canonicalizer is infallible");
        let (signature, recid) = recoverable_sign(&signing_key, &digest);

        let mut sig = vec![0u8; 65];
        sig[0] = 27 + recid + 4;
        sig[1..65].copy_from_slice(&signature.to_bytes());

        let fingerprint = hash160(&serialize_compressed(signing_key.verifying_key()));
        (sig, message, fingerprint)
    }
}
