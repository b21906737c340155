use crate::state::snackbar::use_snackbar;
use leptos::*;

#[component]
pub fn SnackBarHost() -> impl IntoView {
    let snackbar = use_snackbar();
    let notice = snackbar.current();
    move || {
        notice.get().map(|notice| {
            view! {
                <div
                    class="fixed bottom-4 left-1/2 -translate-x-1/2 flex items-center gap-4 rounded bg-surface-inverse text-fg-inverse px-4 py-3 shadow-lg"
                    role="status"
                    data-testid="snackbar"
                >
                    <span>{notice.message}</span>
                    <button
                        type="button"
                        class="text-sm font-semibold uppercase"
                        on:click=move |_| snackbar.dismiss()
                    >
                        {notice.action}
                    </button>
                </div>
            }
        })
    }
}
