use leptos::*;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SessionFormPanel;
pub use utils::FormMode;

#[component]
pub fn SessionFormPage(mode: FormMode) -> impl IntoView {
    view! { <SessionFormPanel mode=mode /> }
}
