//! Form submission client for the auth endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `SubmissionOutcome`. Non-2xx statuses, unreadable
//! bodies and transport failures all collapse into `Failure { message }` so
//! the forms can go back to editing instead of surfacing a fault.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::transport::{HttpResponse, Transport, TransportError};
use super::types::{ErrorBody, LoginSuccess, PasswordResetRequest, SubmissionOutcome};
use crate::state::validation::LoginCredentials;

pub const LOGIN_PATH: &str = "/api/login";
pub const SET_PASSWORD_PATH: &str = "/api/set-password";

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const SET_PASSWORD_FAILED_MESSAGE: &str = "Failed to set password";

/// Performs exactly one request per call; no retries, no timeout.
#[derive(Clone, Debug)]
pub struct SubmissionClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into() }
    }

    /// `POST /api/login` with `{email, password}`.
    pub async fn submit_login(&self, credentials: &LoginCredentials) -> SubmissionOutcome<LoginSuccess> {
        let url = endpoint_url(&self.base_url, LOGIN_PATH);
        let result = self.transport.post_json(&url, credentials).await;
        normalize(result, LOGIN_FAILED_MESSAGE, parse_json::<LoginSuccess>)
    }

    /// `POST /api/set-password` with `{token, password}`. The token is sent as
    /// given, including `null`; rejecting it is the server's call.
    pub async fn submit_password_reset(&self, token: Option<&str>, password: &str) -> SubmissionOutcome<()> {
        let url = endpoint_url(&self.base_url, SET_PASSWORD_PATH);
        let body = PasswordResetRequest { token: token.map(str::to_owned), password: password.to_owned() };
        let result = self.transport.post_json(&url, &body).await;
        normalize(result, SET_PASSWORD_FAILED_MESSAGE, |_| Some(()))
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn normalize<S>(
    result: Result<HttpResponse, TransportError>,
    fallback: &str,
    parse_success: impl FnOnce(&str) -> Option<S>,
) -> SubmissionOutcome<S> {
    let resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("submission transport error: {e}");
            return SubmissionOutcome::failure(fallback);
        }
    };
    if !resp.is_success() {
        log::warn!("submission rejected with status {}", resp.status);
        return SubmissionOutcome::failure(error_message(&resp.body).unwrap_or_else(|| fallback.to_owned()));
    }
    match parse_success(&resp.body) {
        Some(value) => SubmissionOutcome::Success(value),
        None => {
            log::warn!("submission succeeded with an unreadable body");
            SubmissionOutcome::failure(fallback)
        }
    }
}

fn error_message(body: &str) -> Option<String> {
    parse_json::<ErrorBody>(body)?.message.filter(|m| !m.trim().is_empty())
}

fn parse_json<B: DeserializeOwned>(body: &str) -> Option<B> {
    serde_json::from_str(body).ok()
}
