use leptos::*;
use std::{cell::RefCell, rc::Rc};

use crate::{
    router::{Navigation, Navigator},
    state::auth::{provide_auth, AuthStore},
};

use super::helpers::identity;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Provides an identity (`None` for anonymous, else the admin flag) and a recording navigator.
pub fn provide_session(admin: Option<bool>) -> (AuthStore, Rc<RefCell<Vec<Navigation>>>) {
    let store = AuthStore::new();
    if let Some(admin) = admin {
        store.log_in(identity(admin));
    }
    provide_auth(store.clone());
    let (navigator, visited) = Navigator::recording();
    provide_context(navigator);
    (store, visited)
}
