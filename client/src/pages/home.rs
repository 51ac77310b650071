//! Landing route reached after a successful login.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;
use signin::LoginConfig;

use crate::util::storage::{BrowserSessionStore, user_label};

/// Label of the user saved under the configured key, read through `read`.
pub fn stored_user_label(config: &LoginConfig, read: impl Fn(&str) -> Option<String>) -> Option<String> {
    read(&config.user_key).and_then(|raw| user_label(&raw))
}

pub fn greeting(label: Option<&str>) -> String {
    label.map_or_else(|| "You are signed in.".to_owned(), |name| format!("Signed in as {name}."))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<LoginConfig>();
    let label = stored_user_label(&config, BrowserSessionStore::get_item);

    view! {
        <Title text="Home" />
        <section class="home">
            <h1 class="home__title">"Welcome"</h1>
            <p class="home__subtitle">{greeting(label.as_deref())}</p>
            <a href="/login" class="auth-link">"Switch account"</a>
        </section>
    }
}
