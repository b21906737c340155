use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::MePanel;

#[component]
pub fn MePage() -> impl IntoView {
    view! { <MePanel /> }
}
