use super::{
    client::ApiClient,
    error::ApiError,
    types::{Id, User},
};

impl ApiClient {
    pub async fn get_user(&self, id: Id) -> Result<User, ApiError> {
        let url = self.endpoint(&format!("/user/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn delete_user(&self, id: Id) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/user/{}", id)).await;
        self.send(self.http_client().delete(url)).await?;
        Ok(())
    }
}
