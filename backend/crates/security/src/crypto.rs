//! Cryptographic Utilities
//!
//! Secure random tokens and CSP nonces. Randomness always comes from the
//! operating system CSPRNG, never from a seedable generator.

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Default token size in bytes (64 hex characters)
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Random bytes fed into a CSP nonce
pub const NONCE_TOKEN_BYTES: usize = 16;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a random token rendered as lowercase hex
///
/// Every byte becomes exactly two zero-padded hex digits, so the result is
/// `2 * len` characters long. Suitable for CSRF tokens and session ids.
pub fn generate_secure_token(len: usize) -> String {
    hex::encode(random_bytes(len))
}

/// Generate a nonce for `Content-Security-Policy` script sources
///
/// The nonce is the base64 encoding of the hex text of a 16-byte token.
/// Base64 here only makes the value header-friendly: the nonce is unique,
/// not secret.
pub fn generate_nonce() -> String {
    to_base64(generate_secure_token(NONCE_TOKEN_BYTES).as_bytes())
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));

        assert!(random_bytes(0).is_empty());
    }

    #[test]
    fn test_token_is_lowercase_hex() {
        let token = generate_secure_token(DEFAULT_TOKEN_BYTES);
        assert_eq!(token.len(), 64);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_token_length_follows_byte_count() {
        assert_eq!(generate_secure_token(1).len(), 2);
        assert_eq!(generate_secure_token(16).len(), 32);
        assert_eq!(generate_secure_token(0), "");
    }

    #[test]
    fn test_tokens_differ() {
        let a = generate_secure_token(DEFAULT_TOKEN_BYTES);
        let b = generate_secure_token(DEFAULT_TOKEN_BYTES);
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_decodes_to_requested_bytes() {
        let token = generate_secure_token(24);
        let bytes = hex::decode(&token).unwrap();
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn test_nonce_wraps_hex_token() {
        let nonce = generate_nonce();
        // 32 hex chars -> 44 base64 chars
        assert_eq!(nonce.len(), 44);

        let inner = String::from_utf8(from_base64(&nonce).unwrap()).unwrap();
        assert_eq!(inner.len(), NONCE_TOKEN_BYTES * 2);
        assert!(inner.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"hello world";
        let encoded = to_base64(data);
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
        assert_eq!(from_base64(&encoded).unwrap(), data);
    }
}
