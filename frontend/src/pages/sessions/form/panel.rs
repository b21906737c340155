use super::{
    utils::{FormMode, SessionFormState, DESCRIPTION_MAX},
    view_model::{use_session_form_view_model, SessionFormViewModel},
};
use crate::{
    api::Id,
    components::{
        common::{Button, ButtonVariant},
        error::{FieldErrors, InlineErrorMessage},
        layout::LoadingSpinner,
    },
    router::use_navigator,
    state::view::ViewState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SessionFormPanel(mode: FormMode) -> impl IntoView {
    let vm = use_session_form_view_model(mode);
    if !vm.state.get_untracked().is_redirected() {
        let vm = vm.clone();
        spawn_local(async move { vm.load().await });
    }
    view! { <SessionFormView vm=vm /> }
}

#[component]
pub fn SessionFormView(vm: SessionFormViewModel) -> impl IntoView {
    let title = vm.mode.title();
    let form = vm.form;
    let teachers = vm.teachers;
    let state = vm.state;
    let pending = vm.pending;
    let error = vm.error;
    let navigator = use_navigator();

    let touched = create_rw_signal(false);
    let errors = Signal::derive(move || {
        if touched.get() {
            form.with(SessionFormState::validate)
        } else {
            Vec::new()
        }
    });
    let edit = move |apply: fn(&mut SessionFormState, String)| {
        move |ev: ev::Event| {
            touched.set(true);
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
        }
    };
    let can_submit = {
        let vm = vm.clone();
        Signal::derive(move || vm.can_submit())
    };
    let on_submit = {
        let vm = vm.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let vm = vm.clone();
            spawn_local(async move { vm.submit().await });
        }
    };
    let on_back = Callback::new(move |_: ev::MouseEvent| navigator.back());

    let fields = move || {
        view! {
            <form class="space-y-4" on:submit=on_submit.clone()>
                <div>
                    <label for="name" class="block text-sm font-medium text-fg">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        required
                        data-testid="name-input"
                        class="block w-full px-3 py-2 border border-border rounded-md"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=edit(|f, v| f.name = v)
                    />
                </div>
                <div>
                    <label for="date" class="block text-sm font-medium text-fg">"Date"</label>
                    <input
                        id="date"
                        type="date"
                        required
                        data-testid="date-input"
                        class="block w-full px-3 py-2 border border-border rounded-md"
                        prop:value=move || form.with(|f| f.date.clone())
                        on:input=edit(|f, v| f.date = v)
                    />
                </div>
                <div>
                    <label for="teacher" class="block text-sm font-medium text-fg">"Teacher"</label>
                    <select
                        id="teacher"
                        required
                        data-testid="teacher-select"
                        class="block w-full px-3 py-2 border border-border rounded-md"
                        on:change=edit(|f, v| f.teacher_id = v.parse::<Id>().ok())
                    >
                        <option value="" selected=move || form.with(|f| f.teacher_id.is_none())>
                            "Select a teacher"
                        </option>
                        {move || {
                            teachers
                                .get()
                                .into_iter()
                                .map(|teacher| {
                                    let id = teacher.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || form.with(|f| f.teacher_id == Some(id))
                                        >
                                            {teacher.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div>
                    <label for="description" class="block text-sm font-medium text-fg">"Description"</label>
                    <textarea
                        id="description"
                        required
                        maxlength=DESCRIPTION_MAX.to_string()
                        data-testid="description-input"
                        class="block w-full px-3 py-2 border border-border rounded-md"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=edit(|f, v| f.description = v)
                    ></textarea>
                </div>

                <FieldErrors errors=errors />
                <Button
                    submit=true
                    test_id="save-button"
                    disabled=Signal::derive(move || !can_submit.get())
                    loading=pending
                >
                    "Save"
                </Button>
            </form>
        }
    };

    view! {
        <section class="space-y-6 max-w-2xl">
            <div class="flex items-center gap-2">
                <Button variant=ButtonVariant::Basic on_click=on_back>"Back"</Button>
                <h2 class="text-2xl font-bold text-fg">{title}</h2>
            </div>
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingSpinner /> }.into_view(),
                ViewState::Ready(()) => fields().into_view(),
                ViewState::Redirected(_) | ViewState::Failed(_) => ().into_view(),
            }}
            <InlineErrorMessage error=error.into() />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, Teacher};
    use crate::pages::sessions::repository::SessionsRepository;
    use crate::router::Navigator;
    use crate::state::{auth::AuthStore, snackbar::SnackBar};
    use crate::test_support::helpers::{identity, teacher_json};
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn render(mode: FormMode, admin: bool, ready: bool) -> String {
        render_to_string(move || {
            let store = AuthStore::new();
            store.log_in(identity(admin));
            let navigator = Navigator::recording().0;
            provide_context(navigator.clone());
            let vm = SessionFormViewModel::new(
                mode,
                SessionsRepository::new_with_client(Rc::new(ApiClient::new())),
                &store,
                navigator,
                SnackBar::new(),
            );
            if ready && !vm.state.get_untracked().is_redirected() {
                let teacher: Teacher = serde_json::from_value(teacher_json(1)).unwrap();
                vm.teachers.set(vec![teacher]);
                vm.state.set(ViewState::Ready(()));
            }
            view! { <SessionFormView vm=vm /> }
        })
    }

    #[test]
    fn create_form_renders_every_input() {
        let html = render(FormMode::Create, true, true);
        assert!(html.contains("Create session"));
        for id in ["name-input", "date-input", "description-input", "save-button"] {
            assert!(html.contains(&format!("data-testid=\"{}\"", id)), "missing {}", id);
        }
        assert!(html.contains("John DOE"));
    }

    #[test]
    fn update_form_uses_update_title() {
        let html = render(FormMode::Update(Id::new(1)), true, true);
        assert!(html.contains("Update session"));
    }

    #[test]
    fn non_admin_never_sees_the_form() {
        let html = render(FormMode::Create, false, true);
        assert!(!html.contains("data-testid=\"name-input\""));
        assert!(!html.contains("data-testid=\"save-button\""));
    }
}
