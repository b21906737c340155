use crate::api::Id;
use leptos::*;

pub mod view_model;

mod panel;

pub use panel::SessionDetailPanel;

#[component]
pub fn SessionDetailPage(id: Id) -> impl IntoView {
    view! { <SessionDetailPanel id=id /> }
}
