use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use super::error_response;

#[derive(Error, Debug)]
pub enum BoardError {
    /// No board exists with the given public id.
    #[error("Board {0} not found")]
    NotFound(Uuid),

    /// The user named as board owner does not exist.
    #[error("Owner {0} not found")]
    OwnerNotFound(Uuid),
}

/// Converts board errors into 404 Not Found responses.
impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Board not found"),
            Self::OwnerNotFound(_) => error_response(StatusCode::NOT_FOUND, "Owner not found"),
        }
    }
}
