//! Opaque session token generation.
//!
//! Tokens are random hex strings returned to the caller on admission.
//! They are purely informational: never persisted and never validated on
//! later calls.

use rand::RngCore;

/// Generates fixed-length unpredictable session tokens.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    length_bytes: usize,
}

impl TokenGenerator {
    /// Creates a generator producing tokens of `length_bytes` random
    /// bytes (hex-encoded, so twice that many characters).
    pub fn new(length_bytes: usize) -> Self {
        Self { length_bytes }
    }

    /// Generates a new random token.
    pub fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.length_bytes];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}
