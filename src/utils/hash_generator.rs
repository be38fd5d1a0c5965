//! Short hash generation.

use rand::{Rng, distr::Alphanumeric};

/// Length of a generated short hash.
pub const HASH_LENGTH: usize = 10;

/// Generates a random short hash.
///
/// Samples 10 characters uniformly (with replacement) from the 62-symbol
/// alphabet `[A-Za-z0-9]`, giving a key space of 62^10 ≈ 8.4e17. No external
/// state is consulted, so collisions are possible; the shorten orchestration
/// handles them with a conditional insert and regeneration.
///
/// # Examples
///
/// ```ignore
/// let hash = generate_hash();
/// assert_eq!(hash.len(), 10);
/// assert!(hash.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_hash() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(HASH_LENGTH)
        .map(char::from)
        .collect()
}
