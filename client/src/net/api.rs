//! gloo-net implementation of the controller's transport port.
//!
//! ERROR HANDLING
//! ==============
//! Only failures that produce no HTTP response become `TransportError`;
//! non-2xx answers are handed back with their body so the controller can
//! pick out the server's message. Outside the browser there is no network.

#![allow(clippy::unused_async)]

use signin::{AuthTransport, TransportError, TransportResponse};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl AuthTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(TransportResponse::new(status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(TransportError("network is unavailable outside the browser".to_owned()))
        }
    }
}
