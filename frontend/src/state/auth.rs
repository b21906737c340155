use crate::{
    api::{ApiClient, ApiError, Id, LoginRequest, SessionIdentity},
    pages::login::repository::LoginRepository,
    router::Navigator,
};
use leptos::*;
use log::{debug, info};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct Inner {
    identity: Option<SessionIdentity>,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

/// Process-wide holder of the logged-in identity.
///
/// Held in memory only. Subscribers get the current logged-in flag immediately,
/// then one emission per `log_in`/`log_out`.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Rc<RefCell<Inner>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<SessionIdentity> {
        self.inner.borrow().identity.clone()
    }

    pub fn is_logged(&self) -> bool {
        self.inner.borrow().identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .borrow()
            .identity
            .as_ref()
            .map(|identity| identity.admin)
            .unwrap_or(false)
    }

    pub fn user_id(&self) -> Option<Id> {
        self.inner.borrow().identity.as_ref().map(|identity| identity.id)
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .borrow()
            .identity
            .as_ref()
            .map(|identity| identity.token.clone())
    }

    pub fn log_in(&self, identity: SessionIdentity) {
        debug!("session identity set for user {}", identity.id);
        self.inner.borrow_mut().identity = Some(identity);
        self.notify(true);
    }

    pub fn log_out(&self) {
        debug!("session identity cleared");
        self.inner.borrow_mut().identity = None;
        self.notify(false);
    }

    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.identity.is_some())
        };
        listener(current);
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    fn notify(&self, logged: bool) {
        // Listeners may read the store, so release the borrow before calling out.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(logged);
        }
    }
}

/// Stops delivery when dropped.
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<Inner>>,
}

impl Subscription {
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// The store plus a reactive mirror of its logged-in flag.
#[derive(Clone)]
pub struct AuthContext {
    pub store: AuthStore,
    pub is_logged: ReadSignal<bool>,
}

pub fn provide_auth(store: AuthStore) -> AuthContext {
    let (is_logged, set_is_logged) = create_signal(store.is_logged());
    let subscription = store.subscribe(move |logged| set_is_logged.set(logged));
    on_cleanup(move || drop(subscription));
    let ctx = AuthContext { store, is_logged };
    provide_context(ctx.clone());
    ctx
}

#[component]
pub fn AuthProvider(#[prop(optional)] store: Option<AuthStore>, children: Children) -> impl IntoView {
    provide_auth(store.unwrap_or_default());
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| provide_auth(AuthStore::new()))
}

/// The gateway bound to the current identity, or a fresh one outside the app tree.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new().with_auth(use_auth().store))
}

/// Logs in through the gateway and, only on success, replaces the held identity.
pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    store: &AuthStore,
) -> Result<SessionIdentity, ApiError> {
    let identity = repo.login(request).await?;
    store.log_in(identity.clone());
    Ok(identity)
}

pub fn logout(store: &AuthStore, navigator: &Navigator) {
    info!("logging out");
    store.log_out();
    navigator.navigate(crate::router::paths::ROOT);
}
