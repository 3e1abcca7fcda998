//! Browser-backed token storage

use shared::TokenStore;

/// `window.sessionStorage`, cleared when the browsing session ends.
///
/// Storage errors (private mode, quota) read as "no token".
pub struct BrowserTokenStore;

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        session_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::error!("Failed to persist session token: {:?}", e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
