use super::{components::form::RegisterForm, view_model::use_register_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            let vm = vm.clone();
            spawn_local(async move { vm.submit().await });
        })
    };
    let can_submit = {
        let vm = vm.clone();
        Signal::derive(move || vm.can_submit())
    };

    view! {
        <RegisterForm
            form=vm.form
            on_error=vm.on_error.into()
            pending=vm.pending.into()
            can_submit=can_submit
            on_submit=handle_submit
        />
    }
}
