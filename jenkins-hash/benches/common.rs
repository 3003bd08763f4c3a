use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";

/// Generates a specified number of random word-like keys between 3 and 24 bytes.
/// Uses a fixed seed for reproducible benchmark results.
pub fn generate_random_keys(count: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let length = rng.gen_range(3..=24);
            (0..length).map(|_| WORD_CHARS[rng.gen_range(0..WORD_CHARS.len())]).collect()
        })
        .collect()
}
