//! Application root: router, shared toast state and the toaster overlay.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toaster::Toaster;
use crate::pages::home::HomePage;
use crate::pages::login::{LoginPage, login_config};
use crate::state::toast::ToastState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(login_config());
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
