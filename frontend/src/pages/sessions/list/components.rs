use crate::{
    api::{Id, YogaSession},
    components::common::{Button, ButtonVariant},
    utils::time::format_long_date,
};
use leptos::*;

#[component]
pub fn SessionCard(
    session: YogaSession,
    is_admin: bool,
    on_detail: Callback<Id>,
    on_edit: Callback<Id>,
) -> impl IntoView {
    let id = session.id;
    view! {
        <article class="rounded-lg border border-border bg-surface-elevated p-4 shadow-sm space-y-2" data-testid="session-item">
            <h3 class="text-lg font-semibold text-fg">{session.name}</h3>
            <p class="text-sm text-fg-muted">{format!("Session on {}", format_long_date(session.date))}</p>
            <p class="text-sm text-fg line-clamp-3">{session.description}</p>
            <div class="flex gap-2">
                <Button
                    variant=ButtonVariant::Basic
                    test_id="detail-button"
                    on_click=Callback::new(move |_: ev::MouseEvent| on_detail.call(id))
                >
                    "Detail"
                </Button>
                <Show when=move || is_admin fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Basic
                        test_id="edit-button"
                        on_click=Callback::new(move |_: ev::MouseEvent| on_edit.call(id))
                    >
                        "Edit"
                    </Button>
                </Show>
            </div>
        </article>
    }
}
