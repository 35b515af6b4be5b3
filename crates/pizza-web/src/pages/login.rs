//! Sign-in page

use crate::session::Session;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, hooks::use_navigate};
use pizza_admin::AuthService;
use pizza_protocol::ADMIN_DASHBOARD_PATH;
use pizza_types::LoginRequest;
use tracing::warn;

/// Email and password form; admins land on the dashboard after signing in
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = Session::current();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_pending.set(true);
        set_error.set(None);

        let request = LoginRequest::new(email.get_untracked(), password.get_untracked());
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.service.login(&request).await {
                Ok(auth) => {
                    let admin = auth.user.is_admin();
                    session.user.set(Some(auth.user));
                    if admin {
                        navigate(ADMIN_DASHBOARD_PATH, NavigateOptions::default());
                    }
                }
                Err(err) => {
                    warn!(error = %err, "sign in failed");
                    set_error.set(Some(err.to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h2>"Welcome back"</h2>
            <form class="login-form" on:submit=submit>
                <input
                    type="email"
                    placeholder="Email address"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>
                    "Login"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
