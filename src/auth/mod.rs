//! Authentication module - keychain-backed credential storage
//!
//! Holds the app's single secret in the OS keychain:
//! - macOS Keychain / Windows Credential Manager / Linux Secret Service
//!   (via the keyring crate)
//! - read once at startup, overwritten on explicit save

mod credential_store;

pub use credential_store::{CredentialStore, KeyringBackend, SecretBackend};
