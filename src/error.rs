//! Error taxonomy for the login flow.
//!
//! DESIGN
//! ======
//! Validation problems stay local to the form (`LoginError::Invalid`) and are
//! rendered inline per field. Everything that goes wrong after the request is
//! issued collapses into [`AuthError`], which is what the user sees in the
//! failure notification.

use crate::validation::ValidationErrors;

/// Fallback reason when the server rejects a login without a usable message.
pub const GENERIC_FAILURE: &str = "Login failed";

/// A transport-level failure: the request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Durable client storage refused a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Why an authentication attempt failed after validation passed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request could not be delivered (network unreachable, CORS, ...).
    #[error("network request failed: {0}")]
    Transport(#[from] TransportError),

    /// The server answered 2xx but the body was not a login response.
    #[error("unexpected response from server: {0}")]
    MalformedResponse(String),

    /// The session could not be written to client storage.
    #[error("could not save session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// HTTP status of a server rejection, if this error came from one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Outcome of a failed `submit()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// One or more fields failed validation; no request was sent.
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),

    /// The request was sent and the login did not complete.
    #[error(transparent)]
    Authentication(#[from] AuthError),
}

/// Configuration could not be assembled from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}
