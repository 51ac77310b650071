//! Login form orchestration: validate, submit, handle the result.
//!
//! DESIGN
//! ======
//! The controller is single-threaded by construction (`Cell`/`RefCell` state,
//! `Rc` ports). All methods take `&self`, so the host can read `state()` or
//! edit fields while a `submit()` future is pending. Nothing prevents two
//! concurrent submits; hosts disable their trigger while `is_submitting()`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::LoginConfig;
use crate::credentials::{Credentials, Field};
use crate::error::{AuthError, LoginError};
use crate::ports::{AuthTransport, Navigator, Notifier, SessionStore, Toast};
use crate::session::{self, Session};
use crate::validation::{self, ValidationErrors};

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_DESCRIPTION: &str = "You have been logged in successfully.";
pub const FAILURE_TITLE: &str = "Login failed";

/// Whether a login request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

/// Host-provided collaborators.
#[derive(Clone)]
pub struct LoginPorts {
    pub transport: Rc<dyn AuthTransport>,
    pub store: Rc<dyn SessionStore>,
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
}

pub struct LoginFormController {
    config: LoginConfig,
    ports: LoginPorts,
    credentials: RefCell<Credentials>,
    errors: RefCell<ValidationErrors>,
    state: Cell<SubmissionState>,
}

impl LoginFormController {
    #[must_use]
    pub fn new(config: LoginConfig, ports: LoginPorts) -> Self {
        Self {
            config,
            ports,
            credentials: RefCell::new(Credentials::default()),
            errors: RefCell::new(ValidationErrors::default()),
            state: Cell::new(SubmissionState::Idle),
        }
    }

    #[must_use]
    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Overwrite one field. Validation is deferred to submit time.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.credentials.borrow_mut().set(field, value);
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.update_field(Field::Email, email);
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.update_field(Field::Password, password);
    }

    /// Snapshot of the current field values.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.credentials.borrow().clone()
    }

    /// Errors from the most recent validation pass.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        self.errors.borrow().clone()
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state.get().is_submitting()
    }

    /// Run a full validation pass and keep its result for display.
    pub fn validate(&self) -> ValidationErrors {
        let found = validation::validate_credentials(&self.credentials.borrow());
        tracing::debug!(invalid = found.len(), "login form validated");
        self.errors.replace(found.clone());
        found
    }

    /// Validate, then send the login request and act on the outcome.
    ///
    /// On success the session is persisted, a success toast is shown and the
    /// navigator is sent to the home route. On any failure after validation a
    /// single failure toast carries the reason. Fields are never cleared.
    ///
    /// # Errors
    ///
    /// [`LoginError::Invalid`] if validation fails (no request is sent, no
    /// toast is shown); [`LoginError::Authentication`] for everything that
    /// fails once the request is issued.
    pub async fn submit(&self) -> Result<Session, LoginError> {
        let found = self.validate();
        if !found.is_empty() {
            return Err(LoginError::Invalid(found));
        }

        let outcome = {
            let _submitting = SubmittingGuard::enter(&self.state);
            self.authenticate().await
        };

        match outcome {
            Ok(session) => {
                tracing::info!(route = %self.config.home_route, "login succeeded");
                self.ports.notifier.notify(Toast::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
                self.ports.navigator.navigate(&self.config.home_route);
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, status = ?e.status(), "login failed");
                self.ports.notifier.notify(Toast::destructive(FAILURE_TITLE, e.to_string()));
                Err(e.into())
            }
        }
    }

    async fn authenticate(&self) -> Result<Session, AuthError> {
        let creds = self.credentials();
        let body = serde_json::json!({ "email": creds.email, "password": creds.password }).to_string();
        let url = self.config.login_url();
        tracing::info!(%url, "login attempt");

        let response = self.ports.transport.post_json(&url, body).await?;
        let session = session::interpret_response(&response)?;
        session::persist_session(&*self.ports.store, &self.config, &session)?;
        Ok(session)
    }
}

/// Holds `Submitting` for its lifetime; restores `Idle` on drop, including
/// when the submit future is dropped mid-request.
struct SubmittingGuard<'a> {
    state: &'a Cell<SubmissionState>,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(state: &'a Cell<SubmissionState>) -> Self {
        state.set(SubmissionState::Submitting);
        Self { state }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state.set(SubmissionState::Idle);
    }
}
