//! In-memory session store.

use super::model::Session;
use std::collections::HashMap;

/// Owns every user session, keyed by a stable user identifier.
///
/// The store is constructed by the host application and handed to the
/// dispatcher; there is no ambient or static state. Sessions are created
/// lazily on first access and never expire (process lifetime only).
///
/// The store itself is single-threaded. A concurrent host must serialize
/// access per user id, since cart operations are read-modify-write.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `user_id`, creating an empty one on first
    /// contact.
    pub fn get_or_create(&mut self, user_id: &str) -> &mut Session {
        self.sessions.entry(user_id.to_string()).or_default()
    }

    /// Returns the session for `user_id` if one exists.
    pub fn get(&self, user_id: &str) -> Option<&Session> {
        self.sessions.get(user_id)
    }
}
