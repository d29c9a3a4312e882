//! Wire DTOs for the `/api/login` and `/api/set-password` endpoints.
//!
//! DESIGN
//! ======
//! Request bodies are the exact JSON the server expects. Response bodies are
//! lenient: unknown fields are ignored and the error `message` is optional so
//! a sparse error body still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body for `POST /api/set-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    /// Invite/reset token from the page URL. Serialized as `null` when absent.
    pub token: Option<String>,
    pub password: String,
}

/// Success body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginSuccess {
    /// Role of the signed-in user, passed through verbatim.
    pub role: String,
}

/// Error body shared by both endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalized result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome<T> {
    Success(T),
    Failure { message: String },
}

impl<T> SubmissionOutcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure { message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
