use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::ApiClient;
use crate::shared::components::TextField;
use crate::shared::form::{FormBanner, FormState};
use crate::shared::notifications::use_notifier;
use crate::system::auth::api;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let state = FormState::new(LoginRequest::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.saving.get_untracked() {
            return;
        }
        let Some(request) = state.validate_all() else {
            return;
        };

        state.saving.set(true);
        spawn_local(async move {
            match api::login(&ApiClient::browser(), &request).await {
                Ok(response) => {
                    let name = response.user.name.clone();
                    match session.login(&response.token, response.user, Some("/")) {
                        Ok(()) => notifier.success(format!("Welcome back, {}", name)),
                        Err(err) => notifier.error(err.to_string()),
                    }
                }
                Err(err) => {
                    log::warn!("login failed: {}", err);
                    state.set_server_error(&err);
                }
            }
            state.saving.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Storefront Admin"</h1>
                <h2>"Sign in"</h2>

                <FormBanner state=state />

                <form on:submit=on_submit>
                    <TextField
                        state=state
                        field="email"
                        label="Email"
                        kind="email"
                        placeholder="admin@example.com"
                        get=|f: &LoginRequest| f.email.clone()
                        set=|f: &mut LoginRequest, v| f.email = v
                    />
                    <TextField
                        state=state
                        field="password"
                        label="Password"
                        kind="password"
                        get=|f: &LoginRequest| f.password.clone()
                        set=|f: &mut LoginRequest, v| f.password = v
                    />

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || state.saving.get()
                    >
                        {move || if state.saving.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
