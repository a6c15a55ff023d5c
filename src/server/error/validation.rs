use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

/// Client input that fails basic shape checks before reaching the database.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A path segment that should hold a public id is not a UUID.
    #[error("Invalid {kind} ID '{value}': {source}")]
    InvalidPublicId {
        /// Kind of resource the id refers to (e.g. "board", "list")
        kind: &'static str,
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: uuid::Error,
    },

    /// A required text field is empty or whitespace only.
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Converts validation errors into 400 Bad Request responses.
///
/// The message is returned to the client as-is since it only echoes client input.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
