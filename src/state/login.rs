//! Login form state machine and its submission driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::login` keeps a `LoginFlow` in a signal and calls `submit` from the
//! form's submit handler. The flow decides whether a request may start;
//! the driver performs it and routes by the returned role.
//!
//! Phases: `Editing` -> `Submitting` -> (`Editing` with an error | `Navigated`).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::config::{ClientConfig, RoutePaths};
use crate::net::api::SubmissionClient;
use crate::net::transport::Transport;
use crate::net::types::{LoginSuccess, SubmissionOutcome};
use crate::state::handle::FlowHandle;
use crate::state::validation::{FieldErrors, LoginCredentials, validate_login};
use crate::util::navigation::Navigator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Editing,
    Submitting,
    Navigated,
}

/// Input and feedback for one mounted login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    pub email: String,
    pub password: String,
    errors: FieldErrors,
    server_error: Option<String>,
    phase: LoginPhase,
}

impl LoginFlow {
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// Validate and, if the form is idle and valid, enter `Submitting`.
    ///
    /// Returns the credentials to send, or `None` when nothing should go out:
    /// a request is already in flight, the flow has navigated away, or a
    /// field failed validation.
    pub fn begin_submit(&mut self) -> Option<LoginCredentials> {
        if self.phase != LoginPhase::Editing {
            return None;
        }
        self.server_error = None;
        let credentials = LoginCredentials { email: self.email.clone(), password: self.password.clone() };
        self.errors = validate_login(&credentials);
        if !self.errors.is_empty() {
            return None;
        }
        self.phase = LoginPhase::Submitting;
        Some(credentials)
    }

    /// Apply the server's answer. Returns the dashboard to navigate to on success.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome<LoginSuccess>, routes: &RoutePaths) -> Option<String> {
        if self.phase != LoginPhase::Submitting {
            return None;
        }
        match outcome {
            SubmissionOutcome::Success(LoginSuccess { role }) => {
                self.phase = LoginPhase::Navigated;
                Some(routes.dashboard_for_role(&role).to_owned())
            }
            SubmissionOutcome::Failure { message } => {
                self.phase = LoginPhase::Editing;
                self.server_error = Some(message);
                None
            }
        }
    }
}

/// Start a login submission.
///
/// The flow is checked and moved to `Submitting` synchronously, so repeated
/// submit events before the response only ever yield one future. Returns
/// `None` when no request was started.
pub fn submit<H, T, N>(
    handle: H,
    client: SubmissionClient<T>,
    navigator: N,
    config: &ClientConfig,
) -> Option<impl Future<Output = ()> + use<H, T, N>>
where
    H: FlowHandle<LoginFlow>,
    T: Transport,
    N: Navigator,
{
    let Some(credentials) = handle.with_flow(LoginFlow::begin_submit).flatten() else {
        log::debug!("login submit not started");
        return None;
    };
    let routes = config.routes.clone();

    Some(async move {
        let outcome = client.submit_login(&credentials).await;
        match handle.with_flow(|flow| flow.finish_submit(outcome, &routes)) {
            Some(Some(path)) => {
                log::info!("login succeeded, navigating to {path}");
                navigator.go_to(&path);
            }
            Some(None) => {}
            None => log::debug!("login form gone before the response arrived"),
        }
    })
}
