//! Fixed overlay rendering the toast stack.

use leptos::prelude::*;
use signin::ToastVariant;

use crate::state::toast::ToastState;

pub fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .entries
                    .into_iter()
                    .map(|entry| {
                        let id = entry.id;
                        view! {
                            <div class=toast_class(entry.toast.variant)>
                                <div class="toast__body">
                                    <p class="toast__title">{entry.toast.title}</p>
                                    <p class="toast__description">{entry.toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|s| s.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
