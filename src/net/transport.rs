//! HTTP transport seam for form submissions.
//!
//! Client-side (hydrate): real `fetch` calls via `gloo-net`, always with
//! `credentials: include` so the session cookie set by the server sticks.
//! Server-side (SSR): returns `TransportError::Unavailable`; forms only
//! submit from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be encoded: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON `POST` and hands back whatever the server answered.
///
/// Implementations must not retry; a non-2xx status is a normal response,
/// only failures to exchange bytes at all are `Err`.
///
/// # Errors
///
/// Returns a `TransportError` if the body cannot be encoded or the request
/// never completes.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json<B>(&self, url: &str, body: &B) -> Result<HttpResponse, TransportError>
    where
        B: Serialize + ?Sized;
}

/// `fetch`-backed transport used by the pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json<B>(&self, url: &str, body: &B) -> Result<HttpResponse, TransportError>
    where
        B: Serialize + ?Sized,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .credentials(web_sys::RequestCredentials::Include)
                .json(body)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}
