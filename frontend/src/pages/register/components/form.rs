use crate::{
    components::{common::Button, error::FieldErrors},
    pages::register::{utils::RegisterFormState, view_model::REGISTER_ERROR_MESSAGE},
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                required
                class="appearance-none block w-full px-3 py-2 border border-border rounded-md"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn RegisterForm(
    form: RwSignal<RegisterFormState>,
    on_error: Signal<bool>,
    pending: Signal<bool>,
    #[prop(into)] can_submit: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let touched = create_rw_signal(false);
    let errors = Signal::derive(move || {
        if touched.get() {
            form.with(RegisterFormState::validate)
        } else {
            Vec::new()
        }
    });
    let edit = move |apply: fn(&mut RegisterFormState, String)| {
        Callback::new(move |value: String| {
            touched.set(true);
            form.update(|f| apply(f, value));
        })
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Register"</h2>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <TextField
                        id="firstName"
                        label="First name"
                        value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                        on_input=edit(|f, v| f.first_name = v)
                    />
                    <TextField
                        id="lastName"
                        label="Last name"
                        value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                        on_input=edit(|f, v| f.last_name = v)
                    />
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=edit(|f, v| f.email = v)
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=edit(|f, v| f.password = v)
                    />

                    <FieldErrors errors=errors />
                    <Show when=move || on_error.get() fallback=|| ()>
                        <p class="text-status-error-text text-sm" data-testid="register-error">
                            {REGISTER_ERROR_MESSAGE}
                        </p>
                    </Show>

                    <Button
                        submit=true
                        class="w-full"
                        disabled=Signal::derive(move || !can_submit.get())
                        loading=pending
                        test_id="register-button"
                    >
                        "Submit"
                    </Button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_profile_fields() {
        let html = render_to_string(|| {
            view! {
                <RegisterForm
                    form=create_rw_signal(RegisterFormState::default())
                    on_error=Signal::derive(|| true)
                    pending=Signal::derive(|| false)
                    can_submit=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        for id in ["firstName", "lastName", "email", "password"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(html.contains("An error occurred"));
        assert!(html.contains("data-testid=\"register-button\""));
    }
}
