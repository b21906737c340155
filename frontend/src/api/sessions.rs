use super::{
    client::ApiClient,
    error::ApiError,
    types::{Id, SessionPayload, YogaSession},
};

impl ApiClient {
    pub async fn list_sessions(&self) -> Result<Vec<YogaSession>, ApiError> {
        let url = self.endpoint("/session").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn get_session(&self, id: Id) -> Result<YogaSession, ApiError> {
        let url = self.endpoint(&format!("/session/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn create_session(&self, payload: &SessionPayload) -> Result<YogaSession, ApiError> {
        let url = self.endpoint("/session").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn update_session(
        &self,
        id: Id,
        payload: &SessionPayload,
    ) -> Result<YogaSession, ApiError> {
        let url = self.endpoint(&format!("/session/{}", id)).await;
        let response = self
            .send(self.http_client().put(url).json(payload))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn delete_session(&self, id: Id) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/session/{}", id)).await;
        self.send(self.http_client().delete(url)).await?;
        Ok(())
    }

    /// Adds `user_id` to the participants. No body either way.
    pub async fn participate(&self, id: Id, user_id: Id) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/session/{}/participate/{}", id, user_id))
            .await;
        self.send(self.http_client().post(url)).await?;
        Ok(())
    }

    pub async fn un_participate(&self, id: Id, user_id: Id) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/session/{}/participate/{}", id, user_id))
            .await;
        self.send(self.http_client().delete(url)).await?;
        Ok(())
    }
}
