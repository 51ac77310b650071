//! Labelled input with an inline validation message.

use leptos::prelude::*;

/// CSS class for an input, flagging it when its field failed validation.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input form-input--error" } else { "form-input" }
}

#[component]
pub fn FormField(
    label: &'static str,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    autocomplete: &'static str,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div class="form-field">
            <label class="form-label" for=id>
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class=move || input_class(error.get().is_some())
                placeholder=placeholder
                autocomplete=autocomplete
                required=true
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=described_by
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-error" id=error_id.clone()>
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
