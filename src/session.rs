//! The signed-in user's session.
//!
//! A [`Session`] is created from the login response, handed to the [`ApiClient`] so every request
//! can carry the bearer token, and dropped on logout. [`SessionStore`] persists it between page
//! loads: browser builds use `localStorage`, everything else keeps it in memory.
//!
//! [`ApiClient`]: crate::api::ApiClient

use std::sync::{Arc, Mutex};

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

/// Storage key the session is persisted under.
pub const SESSION_KEY: &str = "user";

/// The profile returned alongside the token by the login route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    /// Value of the `Authorization` header for this session
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Persistence for the current session.
pub trait SessionStore {
    /// Returns the stored session, discarding it if it no longer decodes
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Decodes a persisted session, logging and returning `None` on corrupt data.
fn decode(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding stored session that failed to decode: {}", e);
            None
        }
    }
}

/// Keeps the session for the lifetime of the process
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    /// Creates a store that already holds `raw`, as if written by an earlier run
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.raw.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        let mut slot = self.slot();
        let session = slot.as_deref().and_then(decode);
        if session.is_none() {
            *slot = None;
        }
        session
    }

    fn save(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => *self.slot() = Some(raw),
            Err(e) => tracing::error!("Failed to serialize session: {}", e),
        }
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

/// Persists the session in the browser's `localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        let session = decode(&raw);
        if session.is_none() {
            let _ = storage.remove_item(SESSION_KEY);
        }
        session
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage is unavailable, session will not persist");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(SESSION_KEY, &raw).is_err() {
                    tracing::warn!("Failed to write session to localStorage");
                }
            }
            Err(e) => tracing::error!("Failed to serialize session: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultSessionStore = BrowserSessionStore;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultSessionStore = MemorySessionStore;

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                user_name: "amir".to_string(),
                email: "amir@urban.pk".to_string(),
            },
        }
    }

    #[test]
    fn save_load_clear() {
        let store = MemorySessionStore::default();
        assert_eq!(store.load(), None);

        store.save(&session());
        assert_eq!(store.load(), Some(session()));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_session_is_discarded() {
        let store = MemorySessionStore::with_raw("{not json");
        assert_eq!(store.load(), None);
        assert!(store.slot().is_none());
    }

    #[test]
    fn accepts_id_under_either_key() {
        let legacy = r#"{"token":"t","user":{"id":"u9","userName":"sara","email":"s@urban.pk"}}"#;
        let store = MemorySessionStore::with_raw(legacy);
        assert_eq!(store.load().map(|s| s.user.id), Some("u9".to_string()));
    }

    #[test]
    fn bearer_header() {
        assert_eq!(session().bearer(), "Bearer tok");
    }
}
