use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use super::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    /// No user exists with the given public id.
    #[error("User {0} not found")]
    NotFound(Uuid),

    /// Another user already registered the email address.
    #[error("Email {0} is already registered")]
    EmailTaken(String),
}

/// Converts user errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `EmailTaken`
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::EmailTaken(_) => {
                error_response(StatusCode::CONFLICT, "Email is already registered")
            }
        }
    }
}
