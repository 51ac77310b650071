//! Interpreting the login response and persisting the resulting session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;
use serde_json::Value;

use crate::config::LoginConfig;
use crate::error::{AuthError, GENERIC_FAILURE, StorageError};
use crate::ports::{SessionStore, TransportResponse};

/// Token and user identity returned by a successful login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Session {
    pub token: String,
    /// Opaque user object; stored as-is.
    #[serde(default)]
    pub user: Value,
}

#[derive(Deserialize)]
struct FailureBody {
    message: Option<Value>,
}

/// Turn a raw login response into a session or an authentication error.
///
/// A non-2xx status is a rejection; its reason is the body's non-empty
/// `message` string, or [`GENERIC_FAILURE`]. A 2xx body must carry a string
/// `token`; `user` defaults to `null` when absent.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for non-2xx statuses and
/// [`AuthError::MalformedResponse`] when a 2xx body is not a login response.
pub fn interpret_response(response: &TransportResponse) -> Result<Session, AuthError> {
    if !response.is_success() {
        return Err(AuthError::Rejected { status: response.status, message: rejection_message(&response.body) });
    }

    serde_json::from_str::<Session>(&response.body).map_err(|e| AuthError::MalformedResponse(e.to_string()))
}

/// Display name for a user object: the first non-empty `name`, `email` or
/// `username` string.
#[must_use]
pub fn user_label(user: &Value) -> Option<&str> {
    ["name", "email", "username"]
        .iter()
        .find_map(|key| user.get(key).and_then(Value::as_str).filter(|label| !label.is_empty()))
}

fn rejection_message(body: &str) -> String {
    serde_json::from_str::<FailureBody>(body)
        .ok()
        .and_then(|b| b.message)
        .and_then(|m| m.as_str().map(str::to_owned))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_owned())
}

/// Write the token and the serialized user under the configured keys.
///
/// # Errors
///
/// Returns the first [`StorageError`] encountered.
pub fn persist_session(store: &dyn SessionStore, config: &LoginConfig, session: &Session) -> Result<(), StorageError> {
    let user = serde_json::to_string(&session.user).map_err(|e| StorageError(e.to_string()))?;
    store.set_item(&config.token_key, &session.token)?;
    store.set_item(&config.user_key, &user)?;
    Ok(())
}
