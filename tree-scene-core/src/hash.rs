//! Seeded pseudo-random helpers keyed by stable item ids.
//!
//! Layout generation must be reproducible across reseeds with the same
//! inputs, so it hashes ids with the classic `fract(sin(n) * K)` trick
//! instead of carrying a stateful RNG. Good enough for visual spread,
//! side-effect-free, and evaluable per item in any order.

/// Hash a float seed to [0, 1).
pub fn hash11(seed: f32) -> f32 {
    let s = (seed * 12.9898 + 78.233).sin() * 43758.547;
    s.fract().abs()
}

/// Hash an item id with a salt to [0, 1). Different salts give
/// independent streams for the same id.
pub fn hash_id(id: u32, salt: u32) -> f32 {
    hash11(id as f32 * 0.1031 + salt as f32 * 7.1313)
}

/// Hash an item id into [lo, hi).
pub fn hash_range(id: u32, salt: u32, lo: f32, hi: f32) -> f32 {
    lo + hash_id(id, salt) * (hi - lo)
}

/// Hash an item id into [-1, 1).
pub fn hash_signed(id: u32, salt: u32) -> f32 {
    hash_id(id, salt) * 2.0 - 1.0
}
