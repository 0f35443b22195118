// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

/// Generate a URL-safe token from `nbytes` of OS randomness.
/// - Uses Base64 URL-safe, no padding.
/// - 32 bytes -> 43 char token.
pub fn generate_token(nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    OsRng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of a token; this is what gets stored.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Constant-time-ish compare (simple and sufficient here).
pub fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Compare a presented secret against the configured one without
/// short-circuiting on the first differing byte.
pub fn secret_matches(presented: &str, expected: &str) -> bool {
    hashes_equal(&hash_token(presented), &hash_token(expected))
}
