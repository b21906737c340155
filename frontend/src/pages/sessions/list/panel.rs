use super::{
    components::SessionCard,
    view_model::{use_session_list_view_model, SessionListViewModel},
};
use crate::{
    api::Id,
    components::{common::Button, layout::LoadingSpinner},
    state::view::ViewState,
};
use leptos::*;

#[component]
pub fn SessionListPanel() -> impl IntoView {
    let vm = use_session_list_view_model();
    {
        let vm = vm.clone();
        spawn_local(async move { vm.load().await });
    }
    view! { <SessionListView vm=vm /> }
}

#[component]
pub fn SessionListView(vm: SessionListViewModel) -> impl IntoView {
    let is_admin = vm.is_admin;
    let sessions = vm.sessions;
    let on_create = {
        let vm = vm.clone();
        Callback::new(move |_: ev::MouseEvent| vm.open_create())
    };
    let on_detail = {
        let vm = vm.clone();
        Callback::new(move |id: Id| vm.open_detail(id))
    };
    let on_edit = {
        let vm = vm.clone();
        Callback::new(move |id: Id| vm.open_update(id))
    };

    view! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-fg">"Sessions available"</h2>
                <Show when=move || is_admin fallback=|| ()>
                    <Button test_id="create-button" on_click=on_create>"Create"</Button>
                </Show>
            </div>
            {move || match sessions.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_view(),
                ViewState::Ready(items) => view! {
                    <div class="grid gap-4 sm:grid-cols-2">
                        {items
                            .into_iter()
                            .map(|session| view! {
                                <SessionCard
                                    session=session
                                    is_admin=is_admin
                                    on_detail=on_detail
                                    on_edit=on_edit
                                />
                            })
                            .collect_view()}
                    </div>
                }
                .into_view(),
                ViewState::Failed(err) => view! {
                    <p class="text-status-error-text" data-testid="sessions-error">{err.message}</p>
                }
                .into_view(),
                ViewState::Redirected(_) => ().into_view(),
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError};
    use crate::pages::sessions::repository::SessionsRepository;
    use crate::router::Navigator;
    use crate::test_support::helpers::session_json;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn render(is_admin: bool, state: ViewState<Vec<crate::api::YogaSession>>) -> String {
        render_to_string(move || {
            let vm = SessionListViewModel::new(
                SessionsRepository::new_with_client(Rc::new(ApiClient::new())),
                is_admin,
                Navigator::recording().0,
            );
            vm.sessions.set(state);
            view! { <SessionListView vm=vm /> }
        })
    }

    fn two_sessions() -> ViewState<Vec<crate::api::YogaSession>> {
        let sessions = serde_json::from_value(serde_json::json!([
            session_json(1, &[]),
            session_json(2, &[])
        ]))
        .unwrap();
        ViewState::Ready(sessions)
    }

    #[test]
    fn admin_sees_create_and_edit_buttons() {
        let html = render(true, two_sessions());
        assert!(html.contains("Sessions available"));
        assert!(html.contains("data-testid=\"create-button\""));
        assert_eq!(html.matches("data-testid=\"session-item\"").count(), 2);
        assert_eq!(html.matches("data-testid=\"edit-button\"").count(), 2);
        assert_eq!(html.matches("data-testid=\"detail-button\"").count(), 2);
    }

    #[test]
    fn member_sees_only_detail_buttons() {
        let html = render(false, two_sessions());
        assert!(!html.contains("data-testid=\"create-button\""));
        assert!(!html.contains("data-testid=\"edit-button\""));
        assert_eq!(html.matches("data-testid=\"detail-button\"").count(), 2);
    }

    #[test]
    fn failure_is_rendered_inline() {
        let html = render(false, ViewState::Failed(ApiError::from_status(500, "Internal Server Error")));
        assert!(html.contains("Internal Server Error"));
    }
}
