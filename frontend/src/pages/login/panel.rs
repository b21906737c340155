use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

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
        <LoginForm
            form=vm.form
            on_error=vm.on_error.into()
            pending=vm.pending.into()
            hide_password=vm.hide_password
            can_submit=can_submit
            on_submit=handle_submit
        />
    }
}
