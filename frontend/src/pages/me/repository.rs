use crate::{
    api::{ApiClient, ApiError, Id, User},
    state::auth::use_api_client,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct MeRepository {
    client: Rc<ApiClient>,
}

impl MeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_user(&self, id: Id) -> Result<User, ApiError> {
        self.client.get_user(id).await
    }

    pub async fn delete_user(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}

pub fn use_me_repository() -> MeRepository {
    MeRepository::new_with_client(Rc::new(use_api_client()))
}
