use super::repository::{use_me_repository, MeRepository};
use crate::{
    api::{ApiError, User},
    router::{paths, use_navigator, Navigator},
    state::{
        auth::{use_auth, AuthStore},
        snackbar::{use_snackbar, SnackBar},
        view::ViewState,
    },
};
use leptos::*;
use log::{info, warn};

pub const ACCOUNT_DELETED: &str = "Your account has been deleted !";
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Clone)]
pub struct MeViewModel {
    pub user: RwSignal<ViewState<User>>,
    pub error: RwSignal<Option<ApiError>>,
    pub pending: RwSignal<bool>,
    repository: MeRepository,
    store: AuthStore,
    navigator: Navigator,
    snackbar: SnackBar,
}

pub fn use_me_view_model() -> MeViewModel {
    MeViewModel::new(
        use_me_repository(),
        use_auth().store,
        use_navigator(),
        use_snackbar(),
    )
}

impl MeViewModel {
    pub fn new(
        repository: MeRepository,
        store: AuthStore,
        navigator: Navigator,
        snackbar: SnackBar,
    ) -> Self {
        Self {
            user: create_rw_signal(ViewState::Loading),
            error: create_rw_signal(None),
            pending: create_rw_signal(false),
            repository,
            store,
            navigator,
            snackbar,
        }
    }

    pub async fn load(&self) {
        let Some(id) = self.store.user_id() else {
            self.leave(paths::LOGIN);
            return;
        };
        match self.repository.fetch_user(id).await {
            Ok(user) => self.user.set(ViewState::Ready(user)),
            Err(err) => {
                warn!("account {} unavailable: {}", id, err);
                self.snackbar.open(GENERIC_ERROR);
                self.leave(paths::SESSIONS);
            }
        }
    }

    fn leave(&self, target: &str) {
        self.user.set(ViewState::Redirected(target.to_string()));
        self.navigator.navigate(target);
    }

    /// Deletes the logged-in account, then logs out and returns home.
    pub async fn delete(&self) {
        let Some(id) = self.store.user_id() else {
            return;
        };
        if self.pending.get_untracked() {
            return;
        }
        self.pending.set(true);
        match self.repository.delete_user(id).await {
            Ok(()) => {
                info!("account {} deleted", id);
                self.pending.set(false);
                self.snackbar.open(ACCOUNT_DELETED);
                self.store.log_out();
                self.navigator.navigate(paths::ROOT);
            }
            Err(err) => {
                warn!("failed to delete account {}: {}", id, err);
                self.error.set(Some(err));
                self.pending.set(false);
            }
        }
    }

    pub fn back(&self) {
        self.navigator.back();
    }
}
