//! The closed set of algorithm identifiers the dispatcher understands.
//!
//! The numeric tag is host-assigned; these discriminants follow the order
//! the dispatch table lists the schemes in. A deployment that must match
//! an already-wired host header only needs to edit the values below.

/// Selects which canonicalizer/validator pair `validate` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlgorithmId {
    Ckb = 0,
    Ethereum = 1,
    Eos = 2,
    Tron = 3,
    Bitcoin = 4,
    Dogecoin = 5,
    CkbMultisig = 6,
    Litecoin = 7,
    Schnorr = 8,
    Cardano = 9,
    OwnerLock = 10,
}

impl AlgorithmId {
    /// Does this algorithm require `signature_size == 65` before any
    /// cryptographic work runs? True for the seven ECDSA-recoverable
    /// dialects; false for Schnorr, Cardano, CkbMultisig (variable-length)
    /// and OwnerLock (signature unused).
    pub const fn requires_ecdsa_signature_length(self) -> bool {
        matches!(
            self,
            Self::Ckb
                | Self::Ethereum
                | Self::Eos
                | Self::Tron
                | Self::Bitcoin
                | Self::Dogecoin
                | Self::Litecoin
        )
    }
}

impl TryFrom<u8> for AlgorithmId {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Ckb,
            1 => Self::Ethereum,
            2 => Self::Eos,
            3 => Self::Tron,
            4 => Self::Bitcoin,
            5 => Self::Dogecoin,
            6 => Self::CkbMultisig,
            7 => Self::Litecoin,
            8 => Self::Schnorr,
            9 => Self::Cardano,
            10 => Self::OwnerLock,
            _ => return Err(()),
        })
    }
}
