//! Deterministic derivation of generation inputs from the source value

/// Digest-backed seed, color, and fingerprint derivation
pub mod digest;

pub use digest::DerivedIdentity;
