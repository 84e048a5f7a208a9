//! Loadable ABI entry point: a single exported `validate` symbol over a
//! C-compatible calling convention. Thin by design — pointer/length
//! marshalling only, no cryptography lives here.

use auth_core::host::{LockHashLookup, OwnerLockHost};
use auth_core::{AlgorithmId, AuthError};

/// Stand-in for the real VM syscall binding. A production deployment of
/// this loadable module wires this to `ckb_load_cell_by_field`-style host
/// calls; that binding lives outside this component, so this always
/// reports out-of-bound, which the dispatcher maps to `Mismatched` for
/// any OwnerLock request routed through this entry point until a real
/// binding is supplied.
struct UnboundHost;

impl OwnerLockHost for UnboundHost {
    fn read_input_lock_hash(&self, _index: usize) -> LockHashLookup {
        LockHashLookup::OutOfBound
    }
}

/// # Safety
///
/// `signature`, `message` and `pubkey_hash` must each point to at least
/// their respective `_size` readable bytes for the duration of the call.
/// A null pointer with a nonzero size is undefined behavior in the host
/// ABI this mirrors; callers must not do that.
#[no_mangle]
pub unsafe extern "C" fn validate(
    alg: u8,
    signature: *const u8,
    signature_size: u32,
    message: *const u8,
    message_size: u32,
    pubkey_hash: *const u8,
    pubkey_hash_size: u32,
) -> i32 {
    if message_size != 32 || pubkey_hash_size != 20 {
        return i32::from(AuthError::InvalidArg);
    }
    if (signature.is_null() && signature_size != 0)
        || message.is_null()
        || pubkey_hash.is_null()
    {
        return i32::from(AuthError::InvalidArg);
    }

    let Ok(alg) = AlgorithmId::try_from(alg) else {
        return i32::from(AuthError::NotImplemented);
    };

    let signature = std::slice::from_raw_parts(signature, signature_size as usize);
    let message: [u8; 32] = std::slice::from_raw_parts(message, 32)
        .try_into()
        .expect("length checked above");
    let pubkey_hash: [u8; 20] = std::slice::from_raw_parts(pubkey_hash, 20)
        .try_into()
        .expect("length checked above");

    match auth_core::validate(alg, signature, &message, &pubkey_hash, &UnboundHost) {
        Ok(()) => 0,
        Err(err) => i32::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_algorithm_id_is_not_implemented() {
        let message = [0u8; 32];
        let pubkey_hash = [0u8; 20];
        let status = unsafe {
            validate(
                255,
                std::ptr::null(),
                0,
                message.as_ptr(),
                32,
                pubkey_hash.as_ptr(),
                20,
            )
        };
        assert_eq!(status, i32::from(AuthError::NotImplemented));
    }

    #[test]
    fn wrong_message_size_is_invalid_arg() {
        let message = [0u8; 32];
        let pubkey_hash = [0u8; 20];
        let status = unsafe {
            validate(
                0,
                std::ptr::null(),
                0,
                message.as_ptr(),
                16,
                pubkey_hash.as_ptr(),
                20,
            )
        };
        assert_eq!(status, i32::from(AuthError::InvalidArg));
    }

    #[test]
    fn length_preconditions_are_enforced_before_algorithm_id_is_checked() {
        let message = [0u8; 32];
        let pubkey_hash = [0u8; 20];
        let status = unsafe {
            validate(
                255, // unknown algorithm id
                std::ptr::null(),
                0,
                message.as_ptr(),
                16, // wrong message size
                pubkey_hash.as_ptr(),
                20,
            )
        };
        assert_eq!(status, i32::from(AuthError::InvalidArg));
    }
}
