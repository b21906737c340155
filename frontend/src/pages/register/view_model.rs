use super::{repository::RegisterRepository, utils::RegisterFormState};
use crate::{
    router::{paths, use_navigator, Navigator},
    state::auth::use_api_client,
};
use leptos::*;
use log::{info, warn};
use std::rc::Rc;

pub const REGISTER_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Clone)]
pub struct RegisterViewModel {
    pub form: RwSignal<RegisterFormState>,
    pub on_error: RwSignal<bool>,
    pub pending: RwSignal<bool>,
    repository: RegisterRepository,
    navigator: Navigator,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let repository = RegisterRepository::new_with_client(Rc::new(use_api_client()));
    RegisterViewModel::new(repository, use_navigator())
}

impl RegisterViewModel {
    pub fn new(repository: RegisterRepository, navigator: Navigator) -> Self {
        Self {
            form: create_rw_signal(RegisterFormState::default()),
            on_error: create_rw_signal(false),
            pending: create_rw_signal(false),
            repository,
            navigator,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.pending.get() && self.form.with(RegisterFormState::is_valid)
    }

    /// Registration does not log in; the user is sent to the login page.
    pub async fn submit(&self) {
        let form = self.form.get_untracked();
        if self.pending.get_untracked() || !form.is_valid() {
            return;
        }
        self.pending.set(true);
        match self.repository.register(form.to_request()).await {
            Ok(()) => {
                info!("account registered for {}", form.email.trim());
                self.on_error.set(false);
                self.pending.set(false);
                self.navigator.navigate(paths::LOGIN);
            }
            Err(err) => {
                warn!("registration rejected: {}", err);
                self.on_error.set(true);
                self.pending.set(false);
            }
        }
    }
}
