use crate::{
    router::{paths, use_navigator},
    state::auth::use_auth,
};
use leptos::*;
use log::debug;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let is_logged = auth.is_logged;
    create_effect(move |_| {
        if let Some(target) = auth_redirect(is_logged.get()) {
            debug!("anonymous visitor sent to {}", target);
            navigator.navigate(target);
        }
    });
    view! {
        <Show when=move || is_logged.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Login and registration are for anonymous visitors only.
#[component]
pub fn RequireGuest(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigator = use_navigator();
    let is_logged = auth.is_logged;
    create_effect(move |_| {
        if let Some(target) = guest_redirect(is_logged.get()) {
            debug!("logged-in user sent to {}", target);
            navigator.navigate(target);
        }
    });
    view! {
        <Show when=move || !is_logged.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

fn auth_redirect(is_logged: bool) -> Option<&'static str> {
    (!is_logged).then_some(paths::LOGIN)
}

fn guest_redirect(is_logged: bool) -> Option<&'static str> {
    is_logged.then_some(paths::SESSIONS)
}

#[cfg(test)]
mod tests {
    use super::{auth_redirect, guest_redirect};

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        assert_eq!(auth_redirect(false), Some("/login"));
        assert_eq!(auth_redirect(true), None);
    }

    #[test]
    fn logged_in_users_skip_guest_pages() {
        assert_eq!(guest_redirect(true), Some("/sessions"));
        assert_eq!(guest_redirect(false), None);
    }
}
