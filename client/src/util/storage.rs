//! `localStorage`-backed session store.
//!
//! Values are written raw: the token as-is, the user as the JSON string the
//! controller produced. Outside the browser every call reports the storage
//! as unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use signin::{SessionStore, StorageError};

pub(crate) const UNAVAILABLE: &str = "localStorage is unavailable";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    /// Read a previously stored value.
    pub fn get_item(key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError(UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError(UNAVAILABLE.to_owned()))
}

/// Label for the user JSON stored by a successful login.
pub fn user_label(raw_user: &str) -> Option<String> {
    let user: serde_json::Value = serde_json::from_str(raw_user).ok()?;
    signin::session::user_label(&user).map(str::to_owned)
}
