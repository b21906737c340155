use log::info;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{LoginRequest, RegisterRequest, SessionIdentity},
};

impl ApiClient {
    /// `POST /auth/login`. The caller decides what to do with the identity.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionIdentity, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .send(self.http_client().post(url).json(request))
            .await?;
        let identity: SessionIdentity = Self::parse_json(response).await?;
        info!("logged in as user {}", identity.id);
        Ok(identity)
    }

    /// `POST /auth/register`. Success carries no body.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/register").await;
        self.send(self.http_client().post(url).json(request))
            .await?;
        Ok(())
    }
}
