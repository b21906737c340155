use super::view_model::{use_me_view_model, MeViewModel};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
    state::view::ViewState,
    utils::time::format_long_timestamp,
};
use leptos::*;

#[component]
pub fn MePanel() -> impl IntoView {
    let vm = use_me_view_model();
    {
        let vm = vm.clone();
        spawn_local(async move { vm.load().await });
    }
    view! { <MeView vm=vm /> }
}

#[component]
pub fn MeView(vm: MeViewModel) -> impl IntoView {
    let user = vm.user;
    let pending = vm.pending;
    let error = vm.error;
    let on_back = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.back())
    };
    let on_delete = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| {
            let vm = vm.clone();
            spawn_local(async move { vm.delete().await });
        })
    };

    view! {
        <section class="space-y-6 max-w-2xl">
            <div class="flex items-center gap-2">
                <Button variant=ButtonVariant::Basic on_click=on_back>"Back"</Button>
                <h2 class="text-2xl font-bold text-fg">"User information"</h2>
            </div>
            {move || match user.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_view(),
                ViewState::Redirected(_) | ViewState::Failed(_) => ().into_view(),
                ViewState::Ready(user) => view! {
                    <div class="space-y-2 text-fg">
                        <p>{format!("Name: {} {}", user.first_name, user.last_name.to_uppercase())}</p>
                        <p>{format!("Email: {}", user.email)}</p>
                        {if user.admin {
                            view! { <p class="font-semibold" data-testid="user-admin-flag">"You are admin"</p> }
                                .into_view()
                        } else {
                            view! {
                                <div class="flex items-center gap-4 pt-4">
                                    <p>"Delete my account:"</p>
                                    <Button
                                        variant=ButtonVariant::Warn
                                        test_id="delete-button"
                                        loading=pending
                                        on_click=on_delete
                                    >
                                        "Delete"
                                    </Button>
                                </div>
                            }
                            .into_view()
                        }}
                        <div class="text-xs text-fg-muted space-y-1 pt-4">
                            <p>{format!("Create at: {}", format_long_timestamp(user.created_at))}</p>
                            <p>{format!("Last update: {}", format_long_timestamp(user.updated_at))}</p>
                        </div>
                    </div>
                }
                .into_view(),
            }}
            <InlineErrorMessage error=error.into() />
        </section>
    }
}
