use crate::{
    components::{common::Button, error::FieldErrors},
    pages::login::{utils::LoginFormState, view_model::LOGIN_ERROR_MESSAGE},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: RwSignal<LoginFormState>,
    on_error: Signal<bool>,
    pending: Signal<bool>,
    hide_password: RwSignal<bool>,
    #[prop(into)] can_submit: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let touched = create_rw_signal(false);
    let errors = Signal::derive(move || {
        if touched.get() {
            form.with(LoginFormState::validate)
        } else {
            Vec::new()
        }
    });
    let password_type = move || if hide_password.get() { "password" } else { "text" };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Login"</h2>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-2">
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            class="appearance-none block w-full px-3 py-2 border border-border rounded-md"
                            placeholder="Email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                touched.set(true);
                                let value = event_target_value(&ev);
                                form.update(|f| f.email = value);
                            }
                        />
                        <label for="password" class="sr-only">"Password"</label>
                        <div class="flex items-center gap-2">
                            <input
                                id="password"
                                name="password"
                                type=password_type
                                required
                                class="appearance-none block w-full px-3 py-2 border border-border rounded-md"
                                placeholder="Password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| {
                                    touched.set(true);
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.password = value);
                                }
                            />
                            <button
                                type="button"
                                class="text-sm text-fg-muted"
                                on:click=move |_| hide_password.update(|hide| *hide = !*hide)
                            >
                                {move || if hide_password.get() { "Show" } else { "Hide" }}
                            </button>
                        </div>
                    </div>

                    <FieldErrors errors=errors />
                    <Show when=move || on_error.get() fallback=|| ()>
                        <p class="text-status-error-text text-sm" data-testid="login-error">
                            {LOGIN_ERROR_MESSAGE}
                        </p>
                    </Show>

                    <Button
                        submit=true
                        class="w-full"
                        disabled=Signal::derive(move || !can_submit.get())
                        loading=pending
                        test_id="login-button"
                    >
                        "Submit"
                    </Button>
                </form>
            </div>
        </div>
    }
}
