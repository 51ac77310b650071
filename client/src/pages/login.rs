//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page builds a `LoginFormController` over the browser adapters and
//! mirrors two pieces of its state into signals for rendering: the latest
//! validation errors and whether a request is in flight. The submit button
//! is disabled while submitting; the controller itself does not lock.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use signin::{Field, LoginConfig, LoginFormController, LoginPorts, ValidationErrors};

use crate::components::form_field::FormField;
use crate::net::api::BrowserTransport;
use crate::state::toast::{ToastNotifier, ToastState};
use crate::util::navigation::RouterNavigator;
use crate::util::storage::BrowserSessionStore;

/// Server base URL used when none is baked in at build time.
pub const DEFAULT_SERVER_URL: &str = "/api";

/// Base URL for the auth server, from `LOGIN_SERVER_URL` at compile time.
pub fn server_url() -> &'static str {
    option_env!("LOGIN_SERVER_URL").unwrap_or(DEFAULT_SERVER_URL)
}

/// Configuration shared by every page that touches the session.
pub fn login_config() -> LoginConfig {
    LoginConfig::new(server_url())
}

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

/// Inline message for `field`, owned for rendering.
pub fn field_message(errors: &ValidationErrors, field: Field) -> Option<String> {
    errors.get(field).map(str::to_owned)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<LoginConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let controller = StoredValue::new_local(Rc::new(LoginFormController::new(
        config,
        LoginPorts {
            transport: Rc::new(BrowserTransport),
            store: Rc::new(BrowserSessionStore),
            notifier: Rc::new(ToastNotifier::new(toasts)),
            navigator: Rc::new(RouterNavigator::new(navigate)),
        },
    )));
    let errors = RwSignal::new(ValidationErrors::default());
    let busy = RwSignal::new(false);

    let on_email = Callback::new(move |value: String| controller.with_value(|c| c.set_email(value)));
    let on_password = Callback::new(move |value: String| controller.with_value(|c| c.set_password(value)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let ctl = controller.get_value();
        let found = ctl.validate();
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        busy.set(true);
        leptos::task::spawn_local(async move {
            // Outcome is reported through the toast port.
            let _ = ctl.submit().await;
            errors.set(ctl.errors());
            busy.set(ctl.is_submitting());
        });
    };

    view! {
        <Title text="Sign in" />
        <div class="auth-layout">
            <div class="auth-card">
                <div class="auth-header">
                    <h1 class="auth-title">"Welcome back"</h1>
                    <p class="auth-subtitle">"Sign in to your account to continue"</p>
                </div>

                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <FormField
                        label="Email"
                        id="email"
                        input_type="email"
                        placeholder="your.email@example.com"
                        autocomplete="email"
                        error=Signal::derive(move || field_message(&errors.get(), Field::Email))
                        on_input=on_email
                    />
                    <FormField
                        label="Password"
                        id="password"
                        input_type="password"
                        placeholder="••••••••"
                        autocomplete="current-password"
                        error=Signal::derive(move || field_message(&errors.get(), Field::Password))
                        on_input=on_password
                    />

                    <div class="auth-form__aside">
                        <a href="/forgot-password" class="auth-link">"Forgot password?"</a>
                    </div>

                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        <Show when=move || busy.get()>
                            <span class="spinner" aria-hidden="true"></span>
                        </Show>
                        {move || submit_label(busy.get())}
                    </button>
                </form>

                <p class="auth-footer">
                    <span class="auth-footer__muted">"Don't have an account?"</span>
                    " "
                    <a href="/register" class="auth-link">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
