use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

use super::{error_response, InternalServerError};

/// Failures of list operations and of the board list ordering.
#[derive(Error, Debug)]
pub enum ListError {
    /// The board a list operation refers to does not exist.
    #[error("Board {0} not found")]
    BoardNotFound(Uuid),

    /// No list exists with the given public id.
    #[error("List {0} not found")]
    ListNotFound(Uuid),

    /// No list exists with the given internal id.
    #[error("List with id {0} not found")]
    ListNotFoundById(i32),

    /// The board has no position record yet.
    ///
    /// A position record is created together with the first list of a board, so this
    /// also covers boards that never had a list.
    #[error("List position for board {0} not found")]
    OrderNotFound(Uuid),

    /// The board has a position record holding no entries.
    ///
    /// Treated as an inconsistent state rather than an empty board. Results in a
    /// 409 Conflict response.
    #[error("List position for board {0} is empty")]
    EmptyOrder(Uuid),

    /// Fetching the lists of a board failed.
    #[error("Failed to get lists: {0}")]
    ListFetch(#[source] DbErr),

    /// Beginning or committing a transaction failed.
    ///
    /// Nothing written inside the transaction is persisted.
    #[error("Transaction failed: {0}")]
    Transaction(#[source] DbErr),
}

/// Converts list errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing boards, lists and position records
/// - 409 Conflict - For `EmptyOrder`
/// - 500 Internal Server Error - For `ListFetch` and `Transaction`, logged server-side
impl IntoResponse for ListError {
    fn into_response(self) -> Response {
        match self {
            Self::BoardNotFound(_) => error_response(StatusCode::NOT_FOUND, "Board not found"),
            Self::ListNotFound(_) | Self::ListNotFoundById(_) => {
                error_response(StatusCode::NOT_FOUND, "List not found")
            }
            Self::OrderNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "List position not found")
            }
            Self::EmptyOrder(_) => error_response(StatusCode::CONFLICT, "List position is empty"),
            err @ (Self::ListFetch(_) | Self::Transaction(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}
