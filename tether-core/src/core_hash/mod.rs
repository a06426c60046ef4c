//! One-way identifier hashing.
//!
//! The digest-to-hex step reproduces a historical defect: the digest bytes
//! are rendered as one unsigned big integer in base 16 with no leading-zero
//! padding, so a digest starting with zero bytes yields a hex string
//! shorter than 64 characters. Servers have stored identities in this
//! truncated form for years; a correctly padded encoding would fork those
//! devices into new identities. Do not fix it.

use sha2::{Digest, Sha256};

/// SHA-256 of the UTF-8 bytes of `input`, hex-encoded without leading-zero
/// padding.
///
/// Equivalent to rendering the digest as `BigInteger(1, digest)` in base
/// 16: leading zero nibbles are dropped, and an all-zero digest would
/// render as `"0"`.
pub fn sha256_unpadded_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let full = hex::encode(digest);
    let trimmed = full.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
