use log::warn;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;

use crate::{
    api::error::{ApiError, ErrorBody},
    config,
    state::auth::AuthStore,
};

/// HTTP gateway to the backend. Cheap to clone; shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    auth: Option<AuthStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            auth: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            auth: None,
        }
    }

    /// Attaches the identity holder whose token authorizes every request.
    pub fn with_auth(mut self, store: AuthStore) -> Self {
        self.auth = Some(store);
        self
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.auth.as_ref().and_then(AuthStore::token);
        match token.and_then(|t| HeaderValue::from_str(&format!("Bearer {}", t)).ok()) {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        }
    }

    /// Sends the request; any non-2xx status comes back as an `ApiError` carrying that status.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            warn!("request failed: {}", e);
            ApiError::transport(format!("Request failed: {}", e))
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        warn!("{} responded {}: {}", url, status.as_u16(), message);
        ApiError::from_status(status.as_u16(), message)
    }
}
