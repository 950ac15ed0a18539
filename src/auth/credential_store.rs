//! Credential storage using the OS keychain
//!
//! Persists the app's single secret (the agent API key) as a
//! generic-password entry under a fixed service/account pair, via the
//! keyring crate (macOS Keychain, Windows Credential Manager, Linux Secret
//! Service).

use keyring::Entry;
use thiserror::Error;
use tracing::warn;

/// Keychain service the credential is filed under
pub const SERVICE: &str = "FolderPilot";

/// Account name within the service
pub const ACCOUNT: &str = "api-key";

/// Errors that can occur during keychain operations
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Keyring operation failed
    #[error("Keychain error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Low-level access to the single keychain slot
///
/// The production implementation talks to the real keychain; tests swap in
/// a mock so the store's contract can be exercised without one.
#[cfg_attr(test, mockall::automock)]
pub trait SecretBackend: Send + Sync {
    /// Writes the secret, replacing any existing value
    fn set(&self, secret: &str) -> Result<(), CredentialError>;

    /// Reads the secret, `None` when nothing is stored
    fn get(&self) -> Result<Option<String>, CredentialError>;

    /// Removes the secret, returning whether one existed
    fn delete(&self) -> Result<bool, CredentialError>;
}

/// Keychain-backed implementation of [`SecretBackend`]
pub struct KeyringBackend {
    service: String,
    account: String,
}

impl KeyringBackend {
    /// Creates a backend over the app's fixed service/account pair
    pub fn new() -> Self {
        Self::with_identifier(SERVICE, ACCOUNT)
    }

    /// Creates a backend with a custom identifier
    ///
    /// Useful for keeping test entries apart from the real credential.
    pub fn with_identifier(service: &str, account: &str) -> Self {
        Self {
            service: service.to_string(),
            account: account.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry, CredentialError> {
        Ok(Entry::new(&self.service, &self.account)?)
    }
}

impl Default for KeyringBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretBackend for KeyringBackend {
    fn set(&self, secret: &str) -> Result<(), CredentialError> {
        self.entry()?.set_password(secret)?;
        Ok(())
    }

    fn get(&self) -> Result<Option<String>, CredentialError> {
        match self.entry()?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CredentialError::Keyring(e)),
        }
    }

    fn delete(&self) -> Result<bool, CredentialError> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(e) => Err(CredentialError::Keyring(e)),
        }
    }
}

/// Secure storage for the app's single credential
///
/// `save` idempotently replaces the stored value; `load` returns the stored
/// value or an empty string. Keychain failures never reach the caller: a
/// failed save is logged and dropped, a failed load reads as "no credential
/// configured".
pub struct CredentialStore {
    backend: Box<dyn SecretBackend>,
}

impl CredentialStore {
    /// Creates a store over the real OS keychain
    pub fn new() -> Self {
        Self::with_backend(Box::new(KeyringBackend::new()))
    }

    /// Creates a store over a custom backend
    pub fn with_backend(backend: Box<dyn SecretBackend>) -> Self {
        Self { backend }
    }

    /// Stores the secret, replacing any previous value
    pub fn save(&self, secret: &str) {
        if let Err(e) = self.backend.set(secret) {
            warn!("Failed to save credential: {}", e);
        }
    }

    /// Returns the stored secret, or an empty string when none exists or
    /// the keychain cannot be read
    pub fn load(&self) -> String {
        match self.backend.get() {
            Ok(Some(secret)) => secret,
            Ok(None) => String::new(),
            Err(e) => {
                warn!("Failed to load credential: {}", e);
                String::new()
            }
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
