//! 32-bit sequence fingerprints
//!
//! Membership tests against the word set run on every validator call, so
//! words are reduced to a 32-bit fingerprint up front. The same mixer serves
//! for hashing ad-hoc cell coordinate pairs.

/// Weyl increment used by the mixer
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Scramble one symbol before mixing
#[inline]
fn scramble(n: u32) -> u32 {
    let x = ((n >> 16) ^ n).wrapping_mul(0x45d9_f3b);
    let y = ((x >> 16) ^ x).wrapping_mul(0x45d9_f3b);
    (y >> 16) ^ y
}

/// Fold one symbol into the running seed
#[inline]
fn mix(seed: u32, n: u32) -> u32 {
    seed ^ scramble(n)
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Fingerprint a symbol sequence, seeding with its length
///
/// Sequences of different lengths therefore hash apart even when one is a
/// prefix of the other.
#[must_use]
pub fn fingerprint(symbols: &[u8]) -> u32 {
    let mut seed = symbols.len() as u32;
    for &symbol in symbols {
        seed = mix(seed, u32::from(symbol));
    }
    seed
}

/// Fingerprint a board coordinate pair with the same mixer
#[must_use]
pub fn fingerprint_cell(row: usize, col: usize) -> u32 {
    let mut seed = 2u32;
    seed = mix(seed, row as u32);
    seed = mix(seed, col as u32);
    seed
}
