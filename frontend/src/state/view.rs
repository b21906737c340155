use crate::api::ApiError;

/// Lifecycle of a page controller's fetched data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    /// Left the page; holds the route we moved to.
    Redirected(String),
    Failed(ApiError),
}

impl<T> ViewState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_redirected(&self) -> bool {
        matches!(self, ViewState::Redirected(_))
    }
}
