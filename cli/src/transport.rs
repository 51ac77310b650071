//! reqwest-backed login transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use signin::{AuthTransport, TransportError, TransportResponse};

const USER_AGENT: &str = concat!("signin-cli/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait(?Send)]
impl AuthTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| TransportError(e.to_string()))?;
        tracing::debug!(status, bytes = text.len(), "login response received");
        Ok(TransportResponse::new(status, text))
    }
}
