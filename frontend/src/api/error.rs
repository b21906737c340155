use leptos::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    BadRequest,
    Server,
    Transport,
    Decode,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::BadRequest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub kind: ErrorKind,
    /// HTTP status, untouched, when the failure came from a response.
    pub status: Option<u16>,
}

/// Error body sent by the backend: `{ "message": "..." }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ErrorKind::Transport,
            status: None,
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ErrorKind::Decode,
            status: None,
        }
    }

    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ErrorKind::from_status(status),
            status: Some(status),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}
