use crate::{api::ApiError, utils::validation::FieldError};
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                <div class="font-bold">{move || error.get().map(|e| e.message).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .and_then(|e| e.status)
                        .map(|status| view! { <div class="text-xs opacity-75">{"Status: "}{status}</div> })
                }}
            </div>
        </Show>
    }
}

/// Per-field messages from client-side validation.
#[component]
pub fn FieldErrors(errors: Signal<Vec<FieldError>>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.is_empty()) fallback=|| ()>
            <ul class="list-disc list-inside text-sm text-status-error-text">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|err| view! { <li>{err.message}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
