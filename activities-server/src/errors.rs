use activities_core::errors::RegistryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Registry(#[from] RegistryError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        let ApiError::Registry(e) = self;
        warn!("{}", e);

        let status = match e {
            RegistryError::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::DuplicateSignup { .. } | RegistryError::NotRegistered { .. } => {
                StatusCode::BAD_REQUEST
            }
        };

        // The frontend reads errors from the `detail` field
        (
            status,
            axum::Json(ErrorResponse {
                detail: e.to_string(),
            }),
        )
            .into_response()
    }
}
