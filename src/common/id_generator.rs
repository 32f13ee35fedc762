// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable user IDs in the form `U_XXXXXX`.
//! The alphabet excludes I, L, O and U so IDs are unambiguous when read
//! aloud or typed.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    format!("U_{}", generate_crockford_string(6))
}
