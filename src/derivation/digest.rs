//! SHA-256 based seed and color derivation
//!
//! Every visual property of an identicon comes from a single digest of the
//! input value, so identical inputs always produce identical images.

use image::Rgba;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::io::configuration::DIGEST_NAME_HEX_LEN;

/// Number of digest bytes folded into each color channel
const CHANNEL_WINDOW: usize = 8;

/// Seed, color, and naming material derived from one input value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedIdentity {
    digest: [u8; 32],
}

impl DerivedIdentity {
    /// Hash the value and keep the digest for later derivations
    pub fn from_value(value: &str) -> Self {
        let digest: [u8; 32] = Sha256::digest(value.as_bytes()).into();
        Self { digest }
    }

    /// Raw SHA-256 digest of the input value
    pub const fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// 32-bit seed read big-endian from the first four digest bytes
    pub const fn seed(&self) -> u32 {
        let [b0, b1, b2, b3, ..] = self.digest;
        u32::from_be_bytes([b0, b1, b2, b3])
    }

    /// Fill color with each channel the wrapping sum of one 8-byte window
    ///
    /// Windows are taken in order: bytes 0-7 give red, 8-15 green, 16-23 blue
    /// and 24-31 alpha.
    pub fn color(&self) -> Rgba<u8> {
        let mut channels = [0u8; 4];
        for (channel, window) in channels
            .iter_mut()
            .zip(self.digest.chunks_exact(CHANNEL_WINDOW))
        {
            *channel = window.iter().fold(0u8, |sum, &b| sum.wrapping_add(b));
        }
        Rgba(channels)
    }

    /// Fresh generator scoped to a single generation call
    ///
    /// Each call returns an independent stream starting from the same state,
    /// so concurrent generations never share random draws. ChaCha8 has a
    /// stable output for a given seed across `rand` releases, unlike `StdRng`.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(u64::from(self.seed()))
    }

    /// Lowercase hex prefix of the digest, used for collision-free file names
    pub fn fingerprint(&self) -> String {
        self.digest
            .iter()
            .take(DIGEST_NAME_HEX_LEN / 2)
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}
