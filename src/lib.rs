//! # signin
//!
//! Email/password login form logic, independent of any UI runtime.
//!
//! [`LoginFormController`] owns the two form fields, validates them, sends a
//! single `POST {base_url}/auth/login`, stores the returned session and tells
//! the host to show a toast and redirect. The host supplies the network,
//! storage, notification and navigation capabilities through [`ports`].
//!
//! The `client` crate wires this into a Leptos page; the `cli` crate drives it
//! from a terminal.

pub mod config;
pub mod controller;
pub mod credentials;
pub mod error;
pub mod ports;
pub mod session;
pub mod validation;

pub use config::LoginConfig;
pub use controller::{LoginFormController, LoginPorts, SubmissionState};
pub use credentials::{Credentials, Field};
pub use error::{AuthError, LoginError, StorageError, TransportError};
pub use ports::{AuthTransport, Navigator, Notifier, SessionStore, Toast, ToastVariant, TransportResponse};
pub use session::Session;
pub use validation::ValidationErrors;
