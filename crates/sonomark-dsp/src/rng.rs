//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the renderer flows through this module so that a base
//! seed fully determines the output. Per-stem seeds are derived with BLAKE3
//! to give each stem an independent random stream.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named stem from the base seed.
///
/// Hashes the base seed (little-endian bytes) concatenated with the stem key
/// and truncates the BLAKE3 digest to a u32.
pub fn derive_stem_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a named stem.
pub fn create_stem_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_stem_seed(base_seed, key))
}
