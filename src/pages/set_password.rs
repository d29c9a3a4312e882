//! Set-password page reached from the invite/reset email link.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `token` query parameter is read once at mount. After a successful
//! submit the page shows a confirmation and leaves for `/login` once the
//! configured delay has passed; unmounting first cancels that redirect.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::ClientConfig;
use crate::net::api::SubmissionClient;
use crate::net::transport::BrowserTransport;
use crate::state::set_password::{self, SetPasswordFlow};
use crate::state::validation::Field;
use crate::util::timer::TimerScope;

#[component]
pub fn SetPasswordPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let token = use_query_map().with_untracked(|query| query.get("token"));
    let flow = RwSignal::new(SetPasswordFlow::new(token));
    let timers = StoredValue::new_local(TimerScope::default());
    let client = SubmissionClient::new(BrowserTransport, config.api_base_url.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(pending) = set_password::submit(flow, client.clone(), navigate.clone(), timers, &config) {
            leptos::task::spawn_local(pending);
        }
    };

    let field_error = move |field: Field| {
        flow.with(|f| f.errors().get(field).map(str::to_owned))
            .map(|message| view! { <p class="form-error">{message}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Set Your Password"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-field">
                        <input
                            class="auth-input"
                            type="password"
                            name=Field::NewPassword.as_str()
                            placeholder="New Password"
                            prop:value=move || flow.with(|f| f.new_password.clone())
                            on:input=move |ev| flow.update(|f| f.new_password = event_target_value(&ev))
                        />
                        {move || field_error(Field::NewPassword)}
                    </div>
                    <div class="auth-field">
                        <input
                            class="auth-input"
                            type="password"
                            name=Field::ConfirmPassword.as_str()
                            placeholder="Confirm Password"
                            prop:value=move || flow.with(|f| f.confirm_password.clone())
                            on:input=move |ev| flow.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                        {move || field_error(Field::ConfirmPassword)}
                    </div>
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || flow.with(|f| f.is_submitting() || f.success_message().is_some())
                    >
                        "Set Password"
                    </button>
                    <Show when=move || flow.with(|f| f.server_error().is_some())>
                        <p class="auth-message auth-message--error">
                            {move || flow.with(|f| f.server_error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <Show when=move || flow.with(|f| f.success_message().is_some())>
                        <p class="auth-message auth-message--success">
                            {move || flow.with(|f| f.success_message().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
