use crate::{
    api::{ApiError, Id, Teacher, YogaSession},
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

pub const SESSION_DELETED: &str = "Session deleted !";
pub const SESSION_NOT_FOUND: &str = "Session not found !";
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Clone)]
pub struct SessionDetailViewModel {
    pub id: Id,
    pub session: RwSignal<ViewState<YogaSession>>,
    pub teacher: RwSignal<Option<Teacher>>,
    pub error: RwSignal<Option<ApiError>>,
    pub pending: RwSignal<bool>,
    repository: SessionsRepository,
    store: AuthStore,
    navigator: Navigator,
    snackbar: SnackBar,
}

pub fn use_session_detail_view_model(id: Id) -> SessionDetailViewModel {
    SessionDetailViewModel::new(
        id,
        use_sessions_repository(),
        use_auth().store,
        use_navigator(),
        use_snackbar(),
    )
}

impl SessionDetailViewModel {
    pub fn new(
        id: Id,
        repository: SessionsRepository,
        store: AuthStore,
        navigator: Navigator,
        snackbar: SnackBar,
    ) -> Self {
        Self {
            id,
            session: create_rw_signal(ViewState::Loading),
            teacher: create_rw_signal(None),
            error: create_rw_signal(None),
            pending: create_rw_signal(false),
            repository,
            store,
            navigator,
            snackbar,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.store.is_admin()
    }

    /// Derived from the last fetched participant set, never toggled locally.
    pub fn is_participating(&self) -> bool {
        let Some(user_id) = self.store.user_id() else {
            return false;
        };
        self.session
            .with(|state| state.ready().map(|s| s.has_participant(user_id)))
            .unwrap_or(false)
    }

    /// Initial fetch; any failure leaves the page.
    pub async fn load(&self) {
        match self.repository.fetch(self.id).await {
            Ok(session) => {
                let teacher_id = session.teacher_id;
                self.session.set(ViewState::Ready(session));
                if let Some(teacher_id) = teacher_id {
                    self.load_teacher(teacher_id).await;
                }
            }
            Err(err) => {
                warn!("session {} unavailable: {}", self.id, err);
                let message = if err.is_not_found() {
                    SESSION_NOT_FOUND
                } else {
                    GENERIC_ERROR
                };
                self.snackbar.open(message);
                self.session
                    .set(ViewState::Redirected(paths::SESSIONS.to_string()));
                self.navigator.navigate(paths::SESSIONS);
            }
        }
    }

    async fn load_teacher(&self, teacher_id: Id) {
        match self.repository.fetch_teacher(teacher_id).await {
            Ok(teacher) => self.teacher.set(Some(teacher)),
            Err(err) => {
                warn!("teacher {} unavailable: {}", teacher_id, err);
                self.teacher.set(None);
            }
        }
    }

    async fn refresh(&self) {
        match self.repository.fetch(self.id).await {
            Ok(session) => self.session.set(ViewState::Ready(session)),
            Err(err) => {
                warn!("failed to refresh session {}: {}", self.id, err);
                self.error.set(Some(err));
            }
        }
    }

    pub async fn participate(&self) {
        let Some(user_id) = self.store.user_id() else {
            return;
        };
        self.mutate(self.repository.participate(self.id, user_id))
            .await;
    }

    pub async fn un_participate(&self) {
        let Some(user_id) = self.store.user_id() else {
            return;
        };
        self.mutate(self.repository.un_participate(self.id, user_id))
            .await;
    }

    /// Runs a participation change then re-reads the session whatever the outcome.
    async fn mutate(&self, request: impl std::future::Future<Output = Result<(), ApiError>>) {
        if self.pending.get_untracked() {
            return;
        }
        self.pending.set(true);
        self.error.set(None);
        if let Err(err) = request.await {
            warn!("participation change on session {} failed: {}", self.id, err);
            self.error.set(Some(err));
        }
        self.refresh().await;
        self.pending.set(false);
    }

    pub async fn delete(&self) {
        if !self.is_admin() || self.pending.get_untracked() {
            return;
        }
        self.pending.set(true);
        match self.repository.delete(self.id).await {
            Ok(()) => {
                info!("session {} deleted", self.id);
                self.pending.set(false);
                self.snackbar.open(SESSION_DELETED);
                self.navigator.navigate(paths::SESSIONS);
            }
            Err(err) => {
                warn!("failed to delete session {}: {}", self.id, err);
                self.error.set(Some(err));
                self.pending.set(false);
            }
        }
    }

    pub fn back(&self) {
        debug!("leaving session {}", self.id);
        self.navigator.back();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::router::Navigation;
    use crate::test_support::helpers::{identity, session_json, teacher_json};
    use httpmock::prelude::*;
    use std::{cell::RefCell, rc::Rc};

    struct Fixture {
        vm: SessionDetailViewModel,
        visited: Rc<RefCell<Vec<Navigation>>>,
        snackbar: SnackBar,
    }

    fn fixture(server: &MockServer, admin: bool) -> Fixture {
        let repository = SessionsRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let store = AuthStore::new();
        store.log_in(identity(admin));
        let (navigator, visited) = Navigator::recording();
        let snackbar = SnackBar::new();
        let vm = SessionDetailViewModel::new(Id::new(1), repository, store, navigator, snackbar);
        Fixture {
            vm,
            visited,
            snackbar,
        }
    }

    fn attendees(vm: &SessionDetailViewModel) -> usize {
        vm.session
            .with_untracked(|state| state.ready().map(YogaSession::participant_count))
            .unwrap_or(0)
    }

    async fn teacher_mock(server: &MockServer) {
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/teacher/1");
                then.status(200).json_body(teacher_json(1));
            })
            .await;
    }

    #[tokio::test]
    async fn load_derives_flags_and_fetches_teacher() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/session/1");
                then.status(200).json_body(session_json(1, &[1, 2]));
            })
            .await;
        teacher_mock(&server).await;

        let runtime = create_runtime();
        let f = fixture(&server, true);
        f.vm.load().await;

        assert!(f.vm.is_participating());
        assert!(f.vm.is_admin());
        assert_eq!(attendees(&f.vm), 2);
        assert_eq!(
            f.vm.teacher.get_untracked().map(|t| t.display_name()),
            Some("John DOE".to_string())
        );
        assert!(f.visited.borrow().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn participate_then_un_participate_restores_count() {
        let server = MockServer::start_async().await;
        let mut session = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/session/1");
                then.status(200).json_body(session_json(1, &[2]));
            })
            .await;
        teacher_mock(&server).await;
        let participate = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/session/1/participate/1");
                then.status(200);
            })
            .await;
        let un_participate = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/session/1/participate/1");
                then.status(200);
            })
            .await;

        let runtime = create_runtime();
        let f = fixture(&server, false);
        f.vm.load().await;
        let original_count = attendees(&f.vm);
        assert!(!f.vm.is_participating());

        session.delete_async().await;
        session = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/session/1");
                then.status(200).json_body(session_json(1, &[2, 1]));
            })
            .await;
        f.vm.participate().await;
        assert_eq!(participate.hits_async().await, 1);
        assert!(f.vm.is_participating());
        assert_eq!(attendees(&f.vm), original_count + 1);

        session.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/session/1");
                then.status(200).json_body(session_json(1, &[2]));
            })
            .await;
        f.vm.un_participate().await;
        assert_eq!(un_participate.hits_async().await, 1);
        assert!(!f.vm.is_participating());
        assert_eq!(attendees(&f.vm), original_count);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_participation_still_refetches() {
        let server = MockServer::start_async().await;
        let session = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/session/1");
                then.status(200).json_body(session_json(1, &[]));
            })
            .await;
        teacher_mock(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/session/1/participate/1");
                then.status(400);
            })
            .await;

        let runtime = create_runtime();
        let f = fixture(&server, false);
        f.vm.load().await;
        f.vm.participate().await;

        assert_eq!(session.hits_async().await, 2);
        assert_eq!(f.vm.error.get_untracked().and_then(|e| e.status), Some(400));
        assert!(!f.vm.is_participating());
        assert!(!f.vm.pending.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn missing_session_redirects_with_notice() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/session/1");
                then.status(404);
            })
            .await;

        let runtime = create_runtime();
        let f = fixture(&server, false);
        f.vm.load().await;

        assert!(f.vm.session.get_untracked().is_redirected());
        assert_eq!(*f.visited.borrow(), vec![Navigation::To("/sessions".into())]);
        assert_eq!(
            f.snackbar.current().get_untracked().map(|n| n.message),
            Some(SESSION_NOT_FOUND.to_string())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn admin_delete_notifies_and_returns_to_list() {
        let server = MockServer::start_async().await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/session/1");
                then.status(200);
            })
            .await;

        let runtime = create_runtime();
        let f = fixture(&server, true);
        f.vm.delete().await;

        delete.assert_async().await;
        assert_eq!(
            f.snackbar.current().get_untracked().map(|n| n.message),
            Some("Session deleted !".to_string())
        );
        assert_eq!(*f.visited.borrow(), vec![Navigation::To("/sessions".into())]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn member_cannot_delete() {
        let server = MockServer::start_async().await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/session/1");
                then.status(200);
            })
            .await;

        let runtime = create_runtime();
        let f = fixture(&server, false);
        f.vm.delete().await;

        assert_eq!(delete.hits_async().await, 0);
        assert!(f.visited.borrow().is_empty());
        runtime.dispose();
    }

    #[test]
    fn back_goes_through_history() {
        crate::test_support::ssr::with_runtime(|| {
            let (navigator, visited) = Navigator::recording();
            let vm = SessionDetailViewModel::new(
                Id::new(1),
                SessionsRepository::new_with_client(Rc::new(ApiClient::new())),
                AuthStore::new(),
                navigator,
                SnackBar::new(),
            );
            vm.back();
            assert_eq!(*visited.borrow(), vec![Navigation::Back]);
        });
    }
}
