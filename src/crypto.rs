// src/crypto.rs
//
// Every random draw in the generator goes through here so that it always
// comes from the operating system CSPRNG. `OsRng` is a stateless handle, so
// concurrent callers never contend on shared generator state.
use rand::{rngs::OsRng, seq::SliceRandom, Rng};

/// Uniform index in `0..len` (rejection sampled, no modulo bias).
pub fn random_index(len: usize) -> usize {
    OsRng.gen_range(0..len)
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn secure_shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut OsRng);
}
