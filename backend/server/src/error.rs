use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Game not found")]
    NotFound,

    #[error("Catalog unavailable: {0}")]
    Upstream(#[from] LoadError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };

        (status, self.to_string()).into_response()
    }
}
