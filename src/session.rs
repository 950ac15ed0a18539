//! Process-local session state for the companion window
//!
//! The selected folder, the instruction being typed, the in-flight flag,
//! and the credential loaded from the keychain. Held in memory only;
//! nothing here is persisted except the credential, which lives in the
//! credential store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::security::SecureString;

/// Snapshot of the session handed to the UI
///
/// Carries a `has_credential` flag instead of the credential itself so the
/// secret never rides along with ordinary state reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Absolute path of the selected folder, if any
    pub folder: Option<PathBuf>,
    /// Current instruction text
    pub input: String,
    /// Whether an instruction is in flight
    pub processing: bool,
    /// Whether a credential is configured
    pub has_credential: bool,
}

/// Mutable session state
#[derive(Default)]
pub struct Session {
    folder: Option<PathBuf>,
    input: String,
    processing: bool,
    credential: SecureString,
}

impl Session {
    /// Creates an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected folder, if one has been chosen
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    /// Records the folder the next instruction will act on
    pub fn set_folder(&mut self, folder: PathBuf) {
        self.folder = Some(folder);
    }

    /// Returns the current instruction text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the instruction text
    pub fn set_input(&mut self, input: String) {
        self.input = input;
    }

    /// Returns whether an instruction is in flight
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Returns the credential held in memory
    pub fn credential(&self) -> &SecureString {
        &self.credential
    }

    /// Replaces the in-memory credential
    pub fn set_credential(&mut self, secret: String) {
        self.credential = SecureString::new(secret);
    }

    /// Returns whether the instruction can be submitted
    ///
    /// True only when the input is non-empty after trimming whitespace, a
    /// folder has been chosen, and nothing is already in flight.
    pub fn is_sendable(&self) -> bool {
        !self.input.trim().is_empty() && self.folder.is_some() && !self.processing
    }

    /// Marks the instruction as in flight
    ///
    /// Returns `false` without touching the state when the session is not
    /// sendable, which also rejects a second submit while one is running.
    pub fn begin_processing(&mut self) -> bool {
        if !self.is_sendable() {
            return false;
        }
        self.processing = true;
        true
    }

    /// Ends the simulated pass: the input clears and the session accepts
    /// instructions again
    pub fn finish_processing(&mut self) {
        self.input.clear();
        self.processing = false;
    }

    /// Captures the UI-facing view of the session
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            folder: self.folder.clone(),
            input: self.input.clone(),
            processing: self.processing,
            has_credential: !self.credential.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.set_folder(PathBuf::from("/Users/test/Downloads"));
        session.set_input("organize by date".to_string());
        session
    }

    #[test]
    fn test_sendable_when_input_folder_and_idle() {
        assert!(ready_session().is_sendable());
    }

    #[test]
    fn test_not_sendable_without_folder() {
        let mut session = Session::new();
        session.set_input("organize by date".to_string());
        assert!(!session.is_sendable());
    }

    #[test]
    fn test_not_sendable_with_empty_input() {
        let mut session = ready_session();
        session.set_input(String::new());
        assert!(!session.is_sendable());
    }

    #[test]
    fn test_not_sendable_with_whitespace_input() {
        let mut session = ready_session();
        session.set_input("   \t\n".to_string());
        assert!(!session.is_sendable());
    }

    #[test]
    fn test_not_sendable_while_processing() {
        let mut session = ready_session();
        assert!(session.begin_processing());
        assert!(!session.is_sendable());
    }

    #[test]
    fn test_begin_processing_rejected_when_not_sendable() {
        let mut session = Session::new();
        assert!(!session.begin_processing());
        assert!(!session.is_processing());
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut session = ready_session();
        assert!(session.begin_processing());
        assert!(!session.begin_processing());
    }

    #[test]
    fn test_finish_processing_clears_input_and_flag() {
        let mut session = ready_session();
        session.begin_processing();
        session.finish_processing();

        assert_eq!(session.input(), "");
        assert!(!session.is_processing());
        // Folder selection survives the pass.
        assert!(session.folder().is_some());
    }

    #[test]
    fn test_snapshot_exposes_presence_not_secret() {
        let mut session = ready_session();
        session.set_credential("sk-secret".to_string());

        let snapshot = session.snapshot();
        assert!(snapshot.has_credential);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("sk-secret"));
    }

    #[test]
    fn test_snapshot_round_trips() {
        let snapshot = ready_session().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let loaded: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, loaded);
    }
}
