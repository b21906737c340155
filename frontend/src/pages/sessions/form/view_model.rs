use super::utils::{FormMode, SessionFormState};
use crate::{
    api::{ApiError, Teacher},
    pages::sessions::repository::{use_sessions_repository, SessionsRepository},
    router::{paths, use_navigator, Navigator},
    state::{
        auth::{use_auth, AuthStore},
        snackbar::{use_snackbar, SnackBar},
        view::ViewState,
    },
};
use leptos::*;
use log::{debug, info, warn};

pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Clone)]
pub struct SessionFormViewModel {
    pub mode: FormMode,
    pub form: RwSignal<SessionFormState>,
    pub teachers: RwSignal<Vec<Teacher>>,
    pub state: RwSignal<ViewState<()>>,
    pub error: RwSignal<Option<ApiError>>,
    pub pending: RwSignal<bool>,
    repository: SessionsRepository,
    navigator: Navigator,
    snackbar: SnackBar,
}

pub fn use_session_form_view_model(mode: FormMode) -> SessionFormViewModel {
    SessionFormViewModel::new(
        mode,
        use_sessions_repository(),
        &use_auth().store,
        use_navigator(),
        use_snackbar(),
    )
}

impl SessionFormViewModel {
    /// Non-admins are sent back to the list before anything is fetched or rendered.
    pub fn new(
        mode: FormMode,
        repository: SessionsRepository,
        store: &AuthStore,
        navigator: Navigator,
        snackbar: SnackBar,
    ) -> Self {
        let state = if store.is_admin() {
            ViewState::Loading
        } else {
            debug!("session form refused to a non-admin");
            navigator.navigate(paths::SESSIONS);
            ViewState::Redirected(paths::SESSIONS.to_string())
        };
        Self {
            mode,
            form: create_rw_signal(SessionFormState::default()),
            teachers: create_rw_signal(Vec::new()),
            state: create_rw_signal(state),
            error: create_rw_signal(None),
            pending: create_rw_signal(false),
            repository,
            navigator,
            snackbar,
        }
    }

    /// Loads the teacher choices and, when editing, prefills from the stored session.
    pub async fn load(&self) {
        if self.state.get_untracked().is_redirected() {
            return;
        }
        match self.repository.fetch_teachers().await {
            Ok(teachers) => self.teachers.set(teachers),
            Err(err) => {
                warn!("failed to load teachers: {}", err);
                self.error.set(Some(err));
            }
        }
        if let FormMode::Update(id) = self.mode {
            match self.repository.fetch(id).await {
                Ok(session) => self.form.set(SessionFormState::from_session(&session)),
                Err(err) => {
                    warn!("session {} unavailable for editing: {}", id, err);
                    self.snackbar.open(GENERIC_ERROR);
                    self.state
                        .set(ViewState::Redirected(paths::SESSIONS.to_string()));
                    self.navigator.navigate(paths::SESSIONS);
                    return;
                }
            }
        }
        self.state.set(ViewState::Ready(()));
    }

    pub fn can_submit(&self) -> bool {
        !self.pending.get() && self.form.with(SessionFormState::is_valid)
    }

    pub async fn submit(&self) {
        if self.pending.get_untracked() || self.state.get_untracked().is_redirected() {
            return;
        }
        let Ok(payload) = self.form.with_untracked(SessionFormState::to_payload) else {
            return;
        };
        self.pending.set(true);
        self.error.set(None);
        let result = match self.mode {
            FormMode::Create => self.repository.create(payload).await,
            FormMode::Update(id) => self.repository.update(id, payload).await,
        };
        self.pending.set(false);
        match result {
            Ok(session) => {
                info!("session {} saved", session.id);
                self.snackbar.open(self.mode.success_message());
                self.navigator.navigate(paths::SESSIONS);
            }
            Err(err) => {
                warn!("failed to save session: {}", err);
                self.error.set(Some(err));
            }
        }
    }
}
