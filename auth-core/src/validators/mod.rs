//! Per-scheme pipelines: parse signature -> recover/verify -> derive
//! fingerprint. Every validator here takes an already-canonicalized 32-byte
//! digest; none of them know about canonicalizers or the claimed
//! fingerprint comparison, both of which are the dispatcher's job.

pub mod btc;
pub mod cardano;
pub mod ckb;
pub mod eth_like;
pub mod recover;
pub mod schnorr;
