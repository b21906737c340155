use super::{repository::LoginRepository, utils::LoginFormState};
use crate::{
    router::{paths, use_navigator, Navigator},
    state::auth::{login_request, use_api_client, use_auth, AuthStore},
};
use leptos::*;
use log::warn;
use std::rc::Rc;

pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginFormState>,
    pub on_error: RwSignal<bool>,
    pub pending: RwSignal<bool>,
    pub hide_password: RwSignal<bool>,
    repository: LoginRepository,
    store: AuthStore,
    navigator: Navigator,
}

pub fn use_login_view_model() -> LoginViewModel {
    let repository = LoginRepository::new_with_client(Rc::new(use_api_client()));
    LoginViewModel::new(repository, use_auth().store, use_navigator())
}

impl LoginViewModel {
    pub fn new(repository: LoginRepository, store: AuthStore, navigator: Navigator) -> Self {
        Self {
            form: create_rw_signal(LoginFormState::default()),
            on_error: create_rw_signal(false),
            pending: create_rw_signal(false),
            hide_password: create_rw_signal(true),
            repository,
            store,
            navigator,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.pending.get() && self.form.with(LoginFormState::is_valid)
    }

    /// Logs in and moves to the session list; a rejected login only raises `on_error`.
    pub async fn submit(&self) {
        let form = self.form.get_untracked();
        if self.pending.get_untracked() || !form.is_valid() {
            return;
        }
        self.pending.set(true);
        match login_request(form.to_request(), &self.repository, &self.store).await {
            Ok(_) => {
                self.on_error.set(false);
                self.pending.set(false);
                self.navigator.navigate(paths::SESSIONS);
            }
            Err(err) => {
                warn!("login rejected: {}", err);
                self.on_error.set(true);
                self.pending.set(false);
            }
        }
    }
}
