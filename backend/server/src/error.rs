use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use swapi::{ErrorBody, RemoteError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("The page parameter must be a positive number.")]
    InvalidPage,

    #[error("Could not fetch planet data.")]
    Upstream(#[from] RemoteError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidPage => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
