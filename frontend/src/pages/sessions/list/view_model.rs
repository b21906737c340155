use crate::{
    api::{Id, YogaSession},
    pages::sessions::repository::{use_sessions_repository, SessionsRepository},
    router::{paths, use_navigator, Navigator},
    state::{auth::use_auth, view::ViewState},
};
use leptos::*;
use log::warn;

#[derive(Clone)]
pub struct SessionListViewModel {
    pub sessions: RwSignal<ViewState<Vec<YogaSession>>>,
    pub is_admin: bool,
    repository: SessionsRepository,
    navigator: Navigator,
}

pub fn use_session_list_view_model() -> SessionListViewModel {
    SessionListViewModel::new(
        use_sessions_repository(),
        use_auth().store.is_admin(),
        use_navigator(),
    )
}

impl SessionListViewModel {
    pub fn new(repository: SessionsRepository, is_admin: bool, navigator: Navigator) -> Self {
        Self {
            sessions: create_rw_signal(ViewState::Loading),
            is_admin,
            repository,
            navigator,
        }
    }

    pub async fn load(&self) {
        match self.repository.fetch_all().await {
            Ok(sessions) => self.sessions.set(ViewState::Ready(sessions)),
            Err(err) => {
                warn!("failed to load sessions: {}", err);
                self.sessions.set(ViewState::Failed(err));
            }
        }
    }

    pub fn open_create(&self) {
        if self.is_admin {
            self.navigator.navigate(paths::SESSION_CREATE);
        }
    }

    pub fn open_detail(&self, id: Id) {
        self.navigator.navigate(&paths::session_detail(id));
    }

    pub fn open_update(&self, id: Id) {
        if self.is_admin {
            self.navigator.navigate(&paths::session_update(id));
        }
    }
}
