use crate::{
    components::common::{Button, ButtonVariant},
    router::{paths, use_navigator},
    state::auth::{logout, use_auth},
};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let is_logged = auth.is_logged;
    let store = auth.store.clone();
    let on_logout = Callback::new(move |_: ev::MouseEvent| logout(&store, &navigator));

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Yoga app"</h1>
                    <nav class="flex space-x-4">
                        <Show
                            when=move || is_logged.get()
                            fallback=move || view! {
                                <a href=paths::LOGIN class=NAV_LINK>"Login"</a>
                                <a href=paths::REGISTER class=NAV_LINK>"Register"</a>
                            }
                        >
                            <a href=paths::SESSIONS class=NAV_LINK>"Sessions"</a>
                            <a href=paths::ME class=NAV_LINK>"Account"</a>
                            <Button variant=ButtonVariant::Basic test_id="logout-button" on_click=on_logout>
                                "Logout"
                            </Button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
