//! Session Storage
//!
//! Wraps a session-scoped key-value store (the browser's `sessionStorage`
//! or an in-memory stand-in) and reversibly encodes values before writing.
//!
//! ## Encoding is not encryption
//! The default [`Base64Codec`] only obscures values from casual inspection.
//! Anything that needs confidentiality must be stored through a
//! [`SessionCodec`] backed by an authenticated cipher supplied by the
//! embedding application.

use std::collections::HashMap;
use std::string::FromUtf8Error;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::crypto::{from_base64, to_base64};

// ============================================================================
// Storage capability
// ============================================================================

/// Session-scoped key-value storage consumed from the host environment
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
    /// Remove every entry, including ones written by other components
    fn clear(&self);
}

impl<S: SessionStorage + ?Sized> SessionStorage for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory session storage
///
/// Lives as long as the value itself, which makes it the natural stand-in
/// for a browser tab's session storage in tests and in the CLI.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Codec failures
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Raised by application-supplied codecs (e.g. failed authentication tag)
    #[error("Value rejected by codec: {0}")]
    Rejected(String),
}

/// Reversible transformation applied to session values
pub trait SessionCodec: Send + Sync {
    fn encode(&self, plain: &[u8]) -> String;
    fn decode(&self, encoded: &str) -> Result<Vec<u8>, CodecError>;
}

/// Standard base64, no confidentiality
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl SessionCodec for Base64Codec {
    fn encode(&self, plain: &[u8]) -> String {
        to_base64(plain)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, CodecError> {
        Ok(from_base64(encoded)?)
    }
}

// ============================================================================
// Vault
// ============================================================================

/// Errors surfaced by [`SessionVault::try_retrieve`]
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Decoded session value is not valid UTF-8")]
    NotUtf8(#[from] FromUtf8Error),
}

/// Encodes values on the way into session storage and decodes them on the
/// way out
#[derive(Debug)]
pub struct SessionVault<S, C = Base64Codec> {
    storage: S,
    codec: C,
}

impl<S: SessionStorage> SessionVault<S> {
    pub fn new(storage: S) -> Self {
        Self::with_codec(storage, Base64Codec)
    }
}

impl<S: SessionStorage, C: SessionCodec> SessionVault<S, C> {
    pub fn with_codec(storage: S, codec: C) -> Self {
        Self { storage, codec }
    }

    /// Encode `value` and write it under `key`
    pub fn store(&self, key: &str, value: &str) {
        self.storage.set(key, self.codec.encode(value.as_bytes()));
    }

    /// Read and decode `key`
    ///
    /// Absent keys and undecodable values both yield `None`; decode
    /// failures are logged and never propagated.
    pub fn retrieve(&self, key: &str) -> Option<String> {
        match self.try_retrieve(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to decode session data");
                None
            }
        }
    }

    /// Like [`Self::retrieve`] but reports why decoding failed
    pub fn try_retrieve(&self, key: &str) -> Result<Option<String>, SessionError> {
        let Some(encoded) = self.storage.get(key) else {
            return Ok(None);
        };
        let bytes = self.codec.decode(&encoded)?;
        Ok(Some(String::from_utf8(bytes)?))
    }

    pub fn remove(&self, key: &str) {
        self.storage.remove(key);
    }

    /// Clear the whole underlying storage
    ///
    /// This also removes entries this vault never wrote.
    pub fn clear(&self) {
        self.storage.clear();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> SessionVault<Arc<MemorySessionStorage>> {
        SessionVault::new(Arc::new(MemorySessionStorage::new()))
    }

    #[test]
    fn test_roundtrip() {
        let vault = vault();
        for value in ["token-123", "", "naïve ✓ 日本語", "line\nbreak \"quoted\""] {
            vault.store("k", value);
            assert_eq!(vault.retrieve("k").as_deref(), Some(value));
        }
    }

    #[test]
    fn test_absent_key() {
        assert_eq!(vault().retrieve("missing"), None);
    }

    #[test]
    fn test_value_is_encoded_at_rest() {
        let vault = vault();
        vault.store("session_token", "hello world");
        assert_eq!(
            vault.storage().get("session_token").as_deref(),
            Some("aGVsbG8gd29ybGQ=")
        );
    }

    #[test]
    fn test_corrupt_value_yields_none() {
        let vault = vault();
        vault.storage().set("k", "***not base64***".to_string());
        assert_eq!(vault.retrieve("k"), None);
        assert!(matches!(
            vault.try_retrieve("k"),
            Err(SessionError::Codec(CodecError::Base64(_)))
        ));
    }

    #[test]
    fn test_non_utf8_value_yields_none() {
        let vault = vault();
        vault.storage().set("k", to_base64(&[0xff, 0xfe, 0xfd]));
        assert_eq!(vault.retrieve("k"), None);
        assert!(matches!(vault.try_retrieve("k"), Err(SessionError::NotUtf8(_))));
    }

    #[test]
    fn test_clear_removes_foreign_entries() {
        let storage = Arc::new(MemorySessionStorage::new());
        let vault = SessionVault::new(storage.clone());
        vault.store("mine", "a");
        storage.set("theirs", "b".to_string());
        assert_eq!(storage.len(), 2);

        vault.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_single_key() {
        let vault = vault();
        vault.store("a", "1");
        vault.store("b", "2");
        vault.remove("a");
        assert_eq!(vault.retrieve("a"), None);
        assert_eq!(vault.retrieve("b").as_deref(), Some("2"));
    }

    struct ReversingCodec;

    impl SessionCodec for ReversingCodec {
        fn encode(&self, plain: &[u8]) -> String {
            plain.iter().rev().map(|&b| b as char).collect()
        }

        fn decode(&self, encoded: &str) -> Result<Vec<u8>, CodecError> {
            if encoded.starts_with('!') {
                return Err(CodecError::Rejected("tampered".to_string()));
            }
            Ok(encoded.chars().rev().map(|c| c as u8).collect())
        }
    }

    #[test]
    fn test_custom_codec() {
        let vault = SessionVault::with_codec(MemorySessionStorage::new(), ReversingCodec);
        vault.store("k", "abc");
        assert_eq!(vault.storage().get("k").as_deref(), Some("cba"));
        assert_eq!(vault.retrieve("k").as_deref(), Some("abc"));

        vault.storage().set("k", "!bad".to_string());
        assert_eq!(vault.retrieve("k"), None);
    }
}
