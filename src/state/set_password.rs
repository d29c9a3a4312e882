//! Set-password form state machine and its submission driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the invite/reset email link (`/set-password?token=...`). The
//! token is captured once when the page mounts. After a successful submit the
//! page shows a confirmation and, after a short pause, moves to the login page.
//!
//! Phases: `Editing` -> `Submitting` -> (`Editing` with an error |
//! `Succeeded` -> `Navigated`).

#[cfg(test)]
#[path = "set_password_test.rs"]
mod set_password_test;

use crate::config::ClientConfig;
use crate::net::api::SubmissionClient;
use crate::net::transport::Transport;
use crate::net::types::{PasswordResetRequest, SubmissionOutcome};
use crate::state::handle::FlowHandle;
use crate::state::validation::{FieldErrors, PasswordResetInput, validate_password_reset};
use crate::util::navigation::Navigator;
use crate::util::timer::Scheduler;

pub const SUCCESS_MESSAGE: &str = "Password set successfully! Redirecting...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SetPasswordPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Navigated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetPasswordFlow {
    pub new_password: String,
    pub confirm_password: String,
    token: Option<String>,
    errors: FieldErrors,
    server_error: Option<String>,
    success: Option<&'static str>,
    phase: SetPasswordPhase,
}

impl SetPasswordFlow {
    /// Fresh form holding the token read from the page URL, if any.
    pub fn new(token: Option<String>) -> Self {
        Self { token, ..Self::default() }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn phase(&self) -> SetPasswordPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SetPasswordPhase::Submitting
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success
    }

    /// Validate and, if the form is idle and valid, enter `Submitting`.
    ///
    /// A missing token does not block the request; it is sent as `null`.
    pub fn begin_submit(&mut self) -> Option<PasswordResetRequest> {
        if self.phase != SetPasswordPhase::Editing {
            return None;
        }
        self.server_error = None;
        let input = PasswordResetInput {
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        };
        self.errors = validate_password_reset(&input);
        if !self.errors.is_empty() {
            return None;
        }
        self.phase = SetPasswordPhase::Submitting;
        Some(PasswordResetRequest { token: self.token.clone(), password: input.new_password })
    }

    /// Apply the server's answer. Returns `true` exactly once, on the
    /// transition into `Succeeded`, which is when the redirect gets scheduled.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome<()>) -> bool {
        if self.phase != SetPasswordPhase::Submitting {
            return false;
        }
        match outcome {
            SubmissionOutcome::Success(()) => {
                self.phase = SetPasswordPhase::Succeeded;
                self.success = Some(SUCCESS_MESSAGE);
                true
            }
            SubmissionOutcome::Failure { message } => {
                self.phase = SetPasswordPhase::Editing;
                self.server_error = Some(message);
                false
            }
        }
    }

    /// Leave the success screen. `true` only the first time.
    pub fn complete_redirect(&mut self) -> bool {
        if self.phase != SetPasswordPhase::Succeeded {
            return false;
        }
        self.phase = SetPasswordPhase::Navigated;
        true
    }
}

/// Start a set-password submission.
///
/// On success one delayed task is handed to `scheduler`; when it fires it
/// moves the flow to `Navigated` and sends the user to the login page. If the
/// flow is gone by then, the task does nothing.
pub fn submit<H, T, N, S>(
    handle: H,
    client: SubmissionClient<T>,
    navigator: N,
    scheduler: S,
    config: &ClientConfig,
) -> Option<impl Future<Output = ()> + use<H, T, N, S>>
where
    H: FlowHandle<SetPasswordFlow> + Clone + 'static,
    T: Transport,
    N: Navigator + 'static,
    S: Scheduler,
{
    let Some(request) = handle.with_flow(SetPasswordFlow::begin_submit).flatten() else {
        log::debug!("set-password submit not started");
        return None;
    };
    if request.token.is_none() {
        log::warn!("set-password submitted without a token");
    }
    let login_path = config.routes.login.clone();
    let delay = config.redirect_delay;

    Some(async move {
        let outcome = client.submit_password_reset(request.token.as_deref(), &request.password).await;
        match handle.with_flow(|flow| flow.finish_submit(outcome)) {
            Some(true) => {
                log::info!("password set, redirecting to {login_path} in {}ms", delay.as_millis());
                let task_handle = handle.clone();
                scheduler.schedule(
                    delay,
                    Box::new(move || {
                        if task_handle.with_flow(SetPasswordFlow::complete_redirect) == Some(true) {
                            navigator.go_to(&login_path);
                        }
                    }),
                );
            }
            Some(false) => {}
            None => log::debug!("set-password form gone before the response arrived"),
        }
    })
}
