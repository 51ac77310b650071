//! Capabilities the controller needs from its host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build plugs in gloo-net, `localStorage`, a toast signal and the
//! router; the CLI plugs in reqwest, a JSON session file and the terminal.
//! Tests plug in recording mocks.
//!
//! Futures are `?Send`: every host drives the controller from a single thread.

use crate::error::{StorageError, TransportError};

/// Raw HTTP response as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON request and hands back whatever the server answered.
#[async_trait::async_trait(?Send)]
pub trait AuthTransport {
    /// `POST` `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was received.
    /// Non-2xx statuses are returned as `Ok`.
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError>;
}

/// Durable key/value storage for the session.
pub trait SessionStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Destructive }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Fire-and-forget client-side redirect.
pub trait Navigator {
    fn navigate(&self, route: &str);
}
