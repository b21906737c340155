use crate::{
    api::{ApiClient, ApiError, Id, SessionPayload, Teacher, YogaSession},
    state::auth::use_api_client,
};
use std::rc::Rc;

/// Session and teacher calls shared by the list, detail and form pages.
#[derive(Clone)]
pub struct SessionsRepository {
    client: Rc<ApiClient>,
}

impl SessionsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self) -> Result<Vec<YogaSession>, ApiError> {
        self.client.list_sessions().await
    }

    pub async fn fetch(&self, id: Id) -> Result<YogaSession, ApiError> {
        self.client.get_session(id).await
    }

    pub async fn create(&self, payload: SessionPayload) -> Result<YogaSession, ApiError> {
        self.client.create_session(&payload).await
    }

    pub async fn update(&self, id: Id, payload: SessionPayload) -> Result<YogaSession, ApiError> {
        self.client.update_session(id, &payload).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_session(id).await
    }

    pub async fn participate(&self, id: Id, user_id: Id) -> Result<(), ApiError> {
        self.client.participate(id, user_id).await
    }

    pub async fn un_participate(&self, id: Id, user_id: Id) -> Result<(), ApiError> {
        self.client.un_participate(id, user_id).await
    }

    pub async fn fetch_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.client.list_teachers().await
    }

    pub async fn fetch_teacher(&self, id: Id) -> Result<Teacher, ApiError> {
        self.client.get_teacher(id).await
    }
}

pub fn use_sessions_repository() -> SessionsRepository {
    SessionsRepository::new_with_client(Rc::new(use_api_client()))
}
