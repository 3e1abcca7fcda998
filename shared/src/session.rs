//! Session gate: authentication is the mere presence of a stored token.

use std::cell::RefCell;
use std::collections::HashMap;

/// Key/value storage the session token lives in.
///
/// The web app backs this with `window.sessionStorage`; tests use
/// [`MemoryTokenStore`].
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Session state derived from the token store at a lifecycle boundary.
///
/// The token is never validated or inspected; an empty string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Read token presence from the store
    pub fn restore(store: &impl TokenStore, key: &str) -> Self {
        let session = Self::with_token(store.get(key));
        log::info!(
            "Session restored: {}",
            if session.is_authenticated() {
                "authenticated"
            } else {
                "signed out"
            }
        );
        session
    }

    /// Persist a freshly issued token and return the authenticated session
    pub fn sign_in(store: &impl TokenStore, key: &str, token: &str) -> Self {
        store.set(key, token);
        Self::with_token(Some(token.to_string()))
    }

    /// Clear the persisted token and drop to signed out
    pub fn logout(&mut self, store: &impl TokenStore, key: &str) {
        store.remove(key);
        self.token = None;
        log::info!("Session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_token_is_signed_out() {
        let store = MemoryTokenStore::new();
        let session = Session::restore(&store, "token");
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn restore_with_token_is_authenticated() {
        let store = MemoryTokenStore::with_item("token", "opaque-value");
        let session = Session::restore(&store, "token");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("opaque-value"));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = MemoryTokenStore::with_item("token", "");
        assert!(!Session::restore(&store, "token").is_authenticated());
    }

    #[test]
    fn logout_clears_store() {
        let store = MemoryTokenStore::new();
        let mut session = Session::sign_in(&store, "token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        assert!(session.is_authenticated());

        session.logout(&store, "token");
        assert!(!session.is_authenticated());
        assert_eq!(store.get("token"), None);
        assert!(!Session::restore(&store, "token").is_authenticated());
    }
}
