use super::view_model::{use_session_detail_view_model, SessionDetailViewModel};
use crate::{
    api::Id,
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
    state::view::ViewState,
    utils::time::{format_long_date, format_long_timestamp},
};
use leptos::*;

#[component]
pub fn SessionDetailPanel(id: Id) -> impl IntoView {
    let vm = use_session_detail_view_model(id);
    {
        let vm = vm.clone();
        spawn_local(async move { vm.load().await });
    }
    view! { <SessionDetailView vm=vm /> }
}

/// Spawns the action on the view model; clicks are ignored while one is in flight.
fn action<F, Fut>(vm: &SessionDetailViewModel, run: F) -> Callback<ev::MouseEvent>
where
    F: Fn(SessionDetailViewModel) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let vm = vm.clone();
    Callback::new(move |_: ev::MouseEvent| {
        if vm.pending.get_untracked() {
            return;
        }
        spawn_local(run(vm.clone()));
    })
}

#[component]
pub fn SessionDetailView(vm: SessionDetailViewModel) -> impl IntoView {
    let is_admin = vm.is_admin();
    let session = vm.session;
    let teacher = vm.teacher;
    let pending = vm.pending;
    let error = vm.error;

    let on_back = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.back())
    };
    let on_delete = action(&vm, |vm| async move { vm.delete().await });
    let on_participate = action(&vm, |vm| async move { vm.participate().await });
    let on_un_participate = action(&vm, |vm| async move { vm.un_participate().await });
    let is_participating = {
        let vm = vm.clone();
        Signal::derive(move || vm.is_participating())
    };

    view! {
        {move || match session.get() {
            ViewState::Loading => view! { <LoadingSpinner /> }.into_view(),
            ViewState::Redirected(_) | ViewState::Failed(_) => ().into_view(),
            ViewState::Ready(current) => {
                let attendees = current.participant_count();
                view! {
                    <section class="space-y-6">
                        <div class="flex items-center justify-between gap-4">
                            <div class="flex items-center gap-2">
                                <Button variant=ButtonVariant::Basic on_click=on_back>"Back"</Button>
                                <h2 class="text-2xl font-bold text-fg">{titlecase(&current.name)}</h2>
                            </div>
                            <Show when=move || is_admin fallback=|| ()>
                                <Button
                                    variant=ButtonVariant::Warn
                                    test_id="delete-button"
                                    loading=pending
                                    on_click=on_delete
                                >
                                    "Delete"
                                </Button>
                            </Show>
                            <Show when=move || !is_admin fallback=|| ()>
                                <div data-testid="participate-buttons">
                                    <Show
                                        when=move || is_participating.get()
                                        fallback=move || view! {
                                            <Button
                                                test_id="participate-button"
                                                loading=pending
                                                on_click=on_participate
                                            >
                                                "Participate"
                                            </Button>
                                        }
                                    >
                                        <Button
                                            variant=ButtonVariant::Warn
                                            test_id="unparticipate-button"
                                            loading=pending
                                            on_click=on_un_participate
                                        >
                                            "Do not participate"
                                        </Button>
                                    </Show>
                                </div>
                            </Show>
                        </div>
                        <p class="text-fg-muted">
                            {move || {
                                teacher
                                    .get()
                                    .map(|t| t.display_name())
                                    .unwrap_or_default()
                            }}
                        </p>
                        <div class="flex gap-6 text-sm text-fg">
                            <span data-testid="participants-count">{format!("{} attendees", attendees)}</span>
                            <span>{format_long_date(current.date)}</span>
                        </div>
                        <div>
                            <h3 class="font-semibold text-fg">"Description:"</h3>
                            <p class="text-fg whitespace-pre-line">{current.description.clone()}</p>
                        </div>
                        <div class="text-xs text-fg-muted space-y-1">
                            <p>{format!("Create at: {}", format_long_timestamp(current.created_at))}</p>
                            <p>{format!("Last update: {}", format_long_timestamp(current.updated_at))}</p>
                        </div>
                    </section>
                }
                .into_view()
            }
        }}
        <InlineErrorMessage error=error.into() />
    }
}

fn titlecase(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
