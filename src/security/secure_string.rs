//! Secret string handling with automatic memory zeroization
//!
//! The keychain credential is held in process memory inside a wrapper that
//! zeroes its bytes on drop and refuses to print itself.

use std::fmt;
use zeroize::Zeroize;

/// A string that securely clears its memory when dropped
///
/// Session state keeps the credential in one of these so the secret neither
/// lingers in memory after use nor leaks through `Debug` formatting.
#[derive(Clone, Default)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    /// Creates a new SecureString from a String
    ///
    /// The original String is consumed and its memory will be zeroed when
    /// this SecureString is dropped.
    pub fn new(s: String) -> Self {
        Self { inner: s }
    }

    /// Returns the secret as a slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the secret in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no secret is held
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl Zeroize for SecureString {
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

impl AsRef<str> for SecureString {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

// Intentionally NOT implementing Display to prevent accidental logging
impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .field("content", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_new() {
        let secret = SecureString::new("password123".to_string());
        assert_eq!(secret.as_str(), "password123");
        assert_eq!(secret.len(), 11);
        assert!(!secret.is_empty());
    }

    #[test]
    fn test_secure_string_from_trait() {
        let secret: SecureString = "token".into();
        assert_eq!(secret.as_str(), "token");

        let secret: SecureString = String::from("token").into();
        assert_eq!(secret.as_str(), "token");
    }

    #[test]
    fn test_secure_string_default_is_empty() {
        let empty = SecureString::default();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_secure_string_debug_redacted() {
        let secret = SecureString::new("super-secret".to_string());
        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("super-secret"));
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains("len"));
    }

    #[test]
    fn test_secure_string_zeroize() {
        let mut secret = SecureString::new("secret".to_string());
        secret.zeroize();
        assert!(secret.is_empty());
    }

    #[test]
    fn test_secure_string_clone() {
        let original = SecureString::new("secret".to_string());
        let cloned = original.clone();
        assert_eq!(original.as_str(), cloned.as_str());
    }
}
