use super::{
    client::ApiClient,
    error::ApiError,
    types::{Id, Teacher},
};

impl ApiClient {
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        let url = self.endpoint("/teacher").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn get_teacher(&self, id: Id) -> Result<Teacher, ApiError> {
        let url = self.endpoint(&format!("/teacher/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }
}
