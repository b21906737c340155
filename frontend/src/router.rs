use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use log::debug;
use std::rc::Rc;

use crate::{
    api::{ApiClient, Id},
    components::{
        guard::{RequireAuth, RequireGuest},
        layout::Layout,
        snackbar::SnackBarHost,
    },
    pages::{
        login::LoginPage,
        me::MePage,
        not_found::NotFoundPage,
        register::RegisterPage,
        sessions::{
            detail::SessionDetailPage,
            form::{FormMode, SessionFormPage},
            list::SessionListPage,
        },
    },
    state::{
        auth::{use_auth, AuthProvider, AuthStore},
        snackbar::SnackBar,
    },
};

pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const SESSIONS: &str = "/sessions";
    pub const SESSION_CREATE: &str = "/sessions/create";
    pub const ME: &str = "/me";

    pub fn session_detail(id: impl std::fmt::Display) -> String {
        format!("/sessions/detail/{}", id)
    }

    pub fn session_update(id: impl std::fmt::Display) -> String {
        format!("/sessions/update/{}", id)
    }
}

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/sessions",
    "/sessions/detail/:id",
    "/sessions/create",
    "/sessions/update/:id",
    "/me",
    "/*any",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/sessions",
    "/sessions/detail/:id",
    "/sessions/create",
    "/sessions/update/:id",
    "/me",
];

pub const GUEST_ROUTE_PATHS: &[&str] = &["/login", "/register"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    To(String),
    Back,
}

/// Where controllers send the user. Provided through context so tests can record moves.
#[derive(Clone)]
pub struct Navigator {
    handler: Rc<dyn Fn(Navigation)>,
}

impl Navigator {
    pub fn new(handler: impl Fn(Navigation) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Client-side navigation through the enclosing `<Router/>`.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self::new(move |target| match target {
            Navigation::To(path) => navigate(&path, NavigateOptions::default()),
            Navigation::Back => history_back(),
        })
    }

    pub fn navigate(&self, path: &str) {
        debug!("navigating to {}", path);
        (self.handler)(Navigation::To(path.to_string()));
    }

    pub fn back(&self) {
        (self.handler)(Navigation::Back);
    }

    #[cfg(test)]
    pub fn recording() -> (Self, Rc<std::cell::RefCell<Vec<Navigation>>>) {
        let visited = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = visited.clone();
        let navigator = Self::new(move |target| sink.borrow_mut().push(target));
        (navigator, visited)
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(Navigator::from_router)
}

fn history_back() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        debug!("history back requested outside the browser");
    }
}

/// Reads `:id` from the current route.
pub fn use_route_id() -> Option<Id> {
    let params = use_params_map();
    params.with_untracked(|p| p.get("id").and_then(|raw| raw.parse::<Id>().ok()))
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    app_shell(AuthStore::new(), ApiClient::new())
}

fn app_shell(store: AuthStore, client: ApiClient) -> impl IntoView {
    provide_meta_context();
    provide_context(client.with_auth(store.clone()));
    provide_context(SnackBar::new());
    view! {
        <Title text="Yoga app"/>
        <AuthProvider store=store>
            <Router>
                <NavigatorProvider>
                    <Layout>
                        <Routes>
                            <Route path="/" view=RootRedirect/>
                            <Route path="/login" view=GuestLogin/>
                            <Route path="/register" view=GuestRegister/>
                            <Route path="/sessions" view=ProtectedSessionList/>
                            <Route path="/sessions/detail/:id" view=ProtectedSessionDetail/>
                            <Route path="/sessions/create" view=ProtectedSessionCreate/>
                            <Route path="/sessions/update/:id" view=ProtectedSessionUpdate/>
                            <Route path="/me" view=ProtectedMe/>
                            <Route path="/*any" view=NotFoundPage/>
                        </Routes>
                    </Layout>
                    <SnackBarHost/>
                </NavigatorProvider>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn NavigatorProvider(children: Children) -> impl IntoView {
    if use_context::<Navigator>().is_none() {
        provide_context(Navigator::from_router());
    }
    children()
}

#[component]
fn RootRedirect() -> impl IntoView {
    let auth = use_auth();
    let target = if auth.store.is_logged() {
        paths::SESSIONS
    } else {
        paths::LOGIN
    };
    view! { <Redirect path=target/> }
}

#[component]
fn GuestLogin() -> impl IntoView {
    view! { <RequireGuest><LoginPage/></RequireGuest> }
}

#[component]
fn GuestRegister() -> impl IntoView {
    view! { <RequireGuest><RegisterPage/></RequireGuest> }
}

#[component]
fn ProtectedSessionList() -> impl IntoView {
    view! { <RequireAuth><SessionListPage/></RequireAuth> }
}

#[component]
fn ProtectedSessionDetail() -> impl IntoView {
    let id = use_route_id();
    view! {
        <RequireAuth>
            {move || match id {
                Some(id) => view! { <SessionDetailPage id=id/> }.into_view(),
                None => view! { <NotFoundPage/> }.into_view(),
            }}
        </RequireAuth>
    }
}

#[component]
fn ProtectedSessionCreate() -> impl IntoView {
    view! { <RequireAuth><SessionFormPage mode=FormMode::Create/></RequireAuth> }
}

#[component]
fn ProtectedSessionUpdate() -> impl IntoView {
    let id = use_route_id();
    view! {
        <RequireAuth>
            {move || match id {
                Some(id) => view! { <SessionFormPage mode=FormMode::Update(id)/> }.into_view(),
                None => view! { <NotFoundPage/> }.into_view(),
            }}
        </RequireAuth>
    }
}

#[component]
fn ProtectedMe() -> impl IntoView {
    view! { <RequireAuth><MePage/></RequireAuth> }
}
