//! Durable storage for the session token.
//!
//! The token is the only piece of client state that survives a reload.
//! Its absence means "logged out"; no expiry is tracked locally, the backend
//! tells us via a 401 when the token has gone stale.

use std::sync::{Arc, Mutex};

/// The single localStorage key holding the token.
pub const TOKEN_KEY: &str = "token";

/// Where the session token lives between page loads.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory SessionStore for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// Browser localStorage SessionStore. Storage failures (private browsing,
/// quota) degrade to an in-memory-only session rather than erroring.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                tracing::warn!("failed to persist session token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        // Overwrite keeps exactly one token
        store.set("def456");
        assert_eq!(store.get(), Some("def456".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryStore::new();
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
    }
}
