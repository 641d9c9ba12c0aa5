use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_domain::RepositoryError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Repository(RepositoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Repository(
                RepositoryError::PersistenceError { .. } | RepositoryError::IdsExhausted { .. },
            ) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
