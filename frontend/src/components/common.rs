use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Destructive actions: delete a session or an account.
    Warn,
    Basic,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm",
            ButtonVariant::Warn => "bg-status-error-bg hover:bg-status-error-border text-status-error-text shadow-sm",
            ButtonVariant::Basic => "bg-transparent hover:bg-action-ghost-bg-hover text-fg-muted",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] submit: bool,
    #[prop(optional)] test_id: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };
    view! {
        <button
            type=button_type
            data-testid=test_id
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Warn.classes().contains("status-error"));
        assert_ne!(ButtonVariant::Basic.classes(), ButtonVariant::Primary.classes());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn button_renders_test_id_and_type() {
        let html = render_to_string(|| {
            view! { <Button submit=true test_id="save-button">"Save"</Button> }
        });
        assert!(html.contains("data-testid=\"save-button\""));
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("Save"));
    }

    #[test]
    fn disabled_button_renders_disabled_attribute() {
        let html = render_to_string(|| view! { <Button disabled=true>"Save"</Button> });
        assert!(html.contains("disabled"));
    }
}
