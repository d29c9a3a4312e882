//! Login page: email + password, routed to a dashboard by role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::SubmissionClient;
use crate::net::transport::BrowserTransport;
use crate::state::login::{self, LoginFlow};
use crate::state::validation::Field;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::default());
    let client = SubmissionClient::new(BrowserTransport, config.api_base_url.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(pending) = login::submit(flow, client.clone(), navigate.clone(), &config) {
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
                <h2 class="auth-card__title">"Login to OptiTrack"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-field">
                        <input
                            class="auth-input"
                            type="email"
                            name=Field::Email.as_str()
                            placeholder="Email"
                            prop:value=move || flow.with(|f| f.email.clone())
                            on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                        />
                        {move || field_error(Field::Email)}
                    </div>
                    <div class="auth-field">
                        <input
                            class="auth-input"
                            type="password"
                            name=Field::Password.as_str()
                            placeholder="Password"
                            prop:value=move || flow.with(|f| f.password.clone())
                            on:input=move |ev| flow.update(|f| f.password = event_target_value(&ev))
                        />
                        {move || field_error(Field::Password)}
                    </div>
                    <button class="auth-button" type="submit" disabled=move || flow.with(LoginFlow::is_submitting)>
                        "Sign In"
                    </button>
                    <Show when=move || flow.with(|f| f.server_error().is_some())>
                        <p class="auth-message auth-message--error">
                            {move || flow.with(|f| f.server_error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <p class="auth-hint">"Have an invite? Check your email for the password setup link."</p>
                </form>
            </div>
        </div>
    }
}
