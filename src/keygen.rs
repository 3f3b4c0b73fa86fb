//! Deterministic key generation
//!
//! Keys are fixed-length strings over a 36 symbol alphabet. A run starts from
//! one random key and then derives every further candidate by rewriting a
//! single character, so no key buffer has to be refilled per candidate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Symbols a key is drawn from
pub const ALPHABET: &[u8; 36] = b"1234567890abcdefghijklmnopqrstuvwxyz";

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0;

/// Seeded key source. Same seed, same key stream.
pub struct KeyGenerator {
    rng: StdRng,
}

impl KeyGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline(always)]
    fn symbol(&mut self) -> char {
        ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char
    }

    /// Build a fresh key of exactly `length` characters.
    pub fn random_key(&mut self, length: usize) -> String {
        let mut key = String::with_capacity(length);
        for _ in 0..length {
            key.push(self.symbol());
        }
        key
    }

    /// Overwrite one uniformly chosen position with a new symbol.
    ///
    /// The drawn symbol may equal the one it replaces, in which case the key
    /// is unchanged and the caller sees a duplicate candidate.
    pub fn mutate(&mut self, key: &mut String) {
        debug_assert!(!key.is_empty(), "mutate on an empty key");
        let pos = self.rng.gen_range(0..key.len());
        let symbol = self.symbol();
        // Keys only ever hold ASCII, so every byte index is a char boundary.
        key.replace_range(pos..pos + 1, symbol.encode_utf8(&mut [0u8; 4]));
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
