//! Seeded pseudo-random values for map generation.
//!
//! Everything here is a pure function of its arguments. The same seed always
//! produces the same value, on every platform and every run; shapes and roads
//! are regenerated from seeds each render pass instead of being stored.

/// Multiplier for the rolling string hash.
const HASH_PRIME: u32 = 31;

// splitmix64 finalizer constants
const MIX_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;

/// Map a seed to a value in `[0, 1)`.
///
/// Stateless: callers derive per-vertex or per-waypoint values by offsetting
/// the seed (`seed + i * stride`) rather than advancing a generator, so any
/// vertex can be computed independently and in parallel.
pub fn seeded_unit(seed: u64) -> f32 {
    let mut z = seed.wrapping_add(MIX_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^= z >> 31;

    // Top 24 bits fill an f32 mantissa exactly, so the result is uniform
    // over [0, 1) and never rounds up to 1.0.
    ((z >> 40) as f32) / (1u32 << 24) as f32
}

/// Hash a string to a 32-bit seed.
///
/// Rolling polynomial hash (multiply by 31, add the character, wrapping).
/// Used to turn stable identifiers like node ids into generation seeds, so a
/// node keeps its shape across sessions.
pub fn hash_str(s: &str) -> u32 {
    let mut h: u32 = 0;
    for ch in s.chars() {
        h = h.wrapping_mul(HASH_PRIME).wrapping_add(ch as u32);
    }
    h
}
