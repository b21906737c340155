use leptos::*;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::SessionListPanel;

#[component]
pub fn SessionListPage() -> impl IntoView {
    view! { <SessionListPanel /> }
}
