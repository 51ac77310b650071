//! Login endpoint and storage configuration.
//!
//! The server base URL is always injected by the host (browser build,
//! CLI flags, or environment); nothing here reaches for a global.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_HOME_ROUTE: &str = "/";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Server origin plus any API prefix, without a trailing slash.
    pub base_url: String,
    /// Path appended to `base_url` for the login request.
    pub login_path: String,
    /// Route requested from the navigator after a successful login.
    pub home_route: String,
    /// Storage key receiving the raw session token.
    pub token_key: String,
    /// Storage key receiving the JSON-serialized user.
    pub user_key: String,
}

impl LoginConfig {
    /// Config with default path, route and storage keys.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
        }
    }

    /// Build config from environment variables.
    ///
    /// Required:
    /// - `LOGIN_SERVER_URL`
    ///
    /// Optional:
    /// - `LOGIN_PATH`: default `/auth/login`
    /// - `LOGIN_HOME_ROUTE`: default `/`
    ///
    /// # Errors
    ///
    /// Returns an error if `LOGIN_SERVER_URL` is unset or a path does not
    /// start with `/`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("LOGIN_SERVER_URL").map_err(|_| ConfigError::MissingVar("LOGIN_SERVER_URL"))?;
        let mut config = Self::new(base_url);
        if let Some(path) = env_path("LOGIN_PATH")? {
            config.login_path = path;
        }
        if let Some(route) = env_path("LOGIN_HOME_ROUTE")? {
            config.home_route = route;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_home_route(mut self, route: impl Into<String>) -> Self {
        self.home_route = route.into();
        self
    }

    /// Absolute (or origin-relative, when `base_url` is empty) login URL.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, self.login_path)
    }
}

fn env_path(var: &'static str) -> Result<Option<String>, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidValue { var, reason: format!("expected a path starting with '/', got {value:?}") });
    }
    Ok(Some(value.to_owned()))
}
