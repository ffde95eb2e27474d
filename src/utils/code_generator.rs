//! Short code generation for pool seeding.
//!
//! Codes are drawn from the URL-safe base64 alphabet so they can appear in a
//! path segment without escaping. Length is a configuration value, not a
//! hard rule; the default is 8.

/// URL-safe alphabet used for generated codes (64 characters, so each random
/// byte maps onto one character without modulo bias).
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generates a random short code of the given length.
///
/// Uses `getrandom` for entropy.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code(length: usize) -> String {
    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .into_iter()
        .map(|b| ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

/// Generates a batch of candidate codes.
///
/// Duplicates within a batch are possible but vanishingly rare at typical
/// batch sizes; the pool's uniqueness constraint drops them on insert.
pub fn generate_batch(count: usize, length: usize) -> Vec<String> {
    (0..count).map(|_| generate_code(length)).collect()
}
