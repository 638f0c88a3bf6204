//! # Feature: Voice Session
//!
//! Tracks which voice is active, globally and per user. Uses DashMap for the
//! per-user mapping so concurrent chat sessions on caller-managed threads
//! stay safe. Selections are validated against the catalog before any state
//! changes; everything unselected falls back to the default voice.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add global slot for hosts without per-user identity
//! - 1.0.0: Initial release with per-user selection

use dashmap::DashMap;
use log::debug;
use std::sync::{Arc, RwLock};

use crate::features::voices::{VoiceCatalog, DEFAULT_VOICE};

/// Per-user and global active-voice state.
pub struct VoiceSession {
    catalog: Arc<VoiceCatalog>,
    global_voice: RwLock<String>,
    user_voices: DashMap<String, String>,
}

impl VoiceSession {
    pub fn new(catalog: Arc<VoiceCatalog>) -> Self {
        Self {
            catalog,
            global_voice: RwLock::new(DEFAULT_VOICE.to_string()),
            user_voices: DashMap::new(),
        }
    }

    /// Record a user's voice choice. Unknown keys change nothing and return
    /// false.
    pub fn select_for_user(&self, user_id: &str, key: &str) -> bool {
        let key = key.to_lowercase();
        if !self.catalog.contains(&key) {
            debug!("voice selection rejected for {user_id}: unknown key `{key}`");
            return false;
        }
        self.user_voices.insert(user_id.to_string(), key);
        true
    }

    /// The user's active voice, or the default when they never picked one.
    pub fn active_for(&self, user_id: &str) -> String {
        self.user_voices
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| DEFAULT_VOICE.to_string())
    }

    /// Put the user back on the default voice. Safe to call repeatedly.
    pub fn reset(&self, user_id: &str) {
        self.user_voices
            .insert(user_id.to_string(), DEFAULT_VOICE.to_string());
    }

    /// Set the process-wide default voice. Unknown keys change nothing and
    /// return false.
    pub fn select_global(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        if !self.catalog.contains(&key) {
            return false;
        }
        if let Ok(mut global) = self.global_voice.write() {
            *global = key;
            return true;
        }
        false
    }

    /// The process-wide default voice.
    pub fn active_global(&self) -> String {
        self.global_voice
            .read()
            .map(|global| global.clone())
            .unwrap_or_else(|_| DEFAULT_VOICE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> VoiceSession {
        VoiceSession::new(Arc::new(VoiceCatalog::new()))
    }

    #[test]
    fn test_unseen_user_gets_default() {
        assert_eq!(session().active_for("stranger"), "jarvis");
    }

    #[test]
    fn test_select_known_voice() {
        let session = session();
        assert!(session.select_for_user("u1", "yoda"));
        assert_eq!(session.active_for("u1"), "yoda");
    }

    #[test]
    fn test_select_is_case_insensitive_and_stores_lowercase() {
        let session = session();
        assert!(session.select_for_user("u1", "TONY_STARK"));
        assert_eq!(session.active_for("u1"), "tony_stark");
    }

    #[test]
    fn test_select_unknown_voice_is_a_no_op() {
        let session = session();
        session.select_for_user("u1", "sherlock");
        assert!(!session.select_for_user("u1", "atlantis"));
        assert_eq!(session.active_for("u1"), "sherlock");
    }

    #[test]
    fn test_users_are_independent() {
        let session = session();
        session.select_for_user("u1", "hacker");
        session.select_for_user("u2", "captain");
        assert_eq!(session.active_for("u1"), "hacker");
        assert_eq!(session.active_for("u2"), "captain");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let session = session();
        session.select_for_user("u1", "alien");
        session.reset("u1");
        assert_eq!(session.active_for("u1"), "jarvis");
        session.reset("u1");
        assert_eq!(session.active_for("u1"), "jarvis");
    }

    #[test]
    fn test_global_slot() {
        let session = session();
        assert_eq!(session.active_global(), "jarvis");
        assert!(session.select_global("sherlock"));
        assert_eq!(session.active_global(), "sherlock");
        assert!(!session.select_global("nope"));
        assert_eq!(session.active_global(), "sherlock");
    }

    #[test]
    fn test_concurrent_selection() {
        let session = Arc::new(session());
        let mut handles = Vec::new();
        for i in 0..8 {
            let session = Arc::clone(&session);
            handles.push(std::thread::spawn(move || {
                let user = format!("user{i}");
                let key = if i % 2 == 0 { "yoda" } else { "hacker" };
                assert!(session.select_for_user(&user, key));
                assert_eq!(session.active_for(&user), key);
            }));
        }
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
    }
}
