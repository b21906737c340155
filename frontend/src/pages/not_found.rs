use leptos::*;

pub const NOT_FOUND_MESSAGE: &str = "Page not found !";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24">
            <h1 class="text-3xl font-bold text-fg">{NOT_FOUND_MESSAGE}</h1>
        </div>
    }
}
