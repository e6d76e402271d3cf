//! Service error types with HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ServerError {
    /// The request carried no `user_id` query parameter.
    #[error("missing user_id query parameter")]
    MissingUserId,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServerError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUserId => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
