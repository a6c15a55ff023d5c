use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        board::{BoardDto, CreateBoardDto, UpdateBoardDto},
        list::ListWithOrderDto,
    },
    server::{
        error::{board::BoardError, AppError},
        model::board::{CreateBoardParams, UpdateBoardParams},
        service::{board::BoardService, list::ListService},
        state::AppState,
        util::parse::parse_public_id,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Create a new board.
///
/// The board starts without lists; its list order is created together with its
/// first list.
///
/// # Returns
/// - `201 Created` - The created board
/// - `400 Bad Request` - Blank title
/// - `404 Not Found` - Owner does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/boards",
    tag = BOARD_TAG,
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Successfully created board", body = BoardDto),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    Json(payload): Json<CreateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BoardService::new(&state.db);

    let board = service.create(CreateBoardParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

/// Get a board by public id.
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = uuid::Uuid, Path, description = "Public board ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved board", body = BoardDto),
        (status = 400, description = "Malformed board ID", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let board_id = parse_public_id("board", &board_id)?;

    let service = BoardService::new(&state.db);

    let board = service
        .get_by_public_id(board_id)
        .await?
        .ok_or(BoardError::NotFound(board_id))?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Update a board's title and description.
#[utoipa::path(
    put,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    params(
        ("board_id" = uuid::Uuid, Path, description = "Public board ID")
    ),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Successfully updated board", body = BoardDto),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    Json(payload): Json<UpdateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let board_id = parse_public_id("board", &board_id)?;

    let service = BoardService::new(&state.db);

    let board = service
        .update(UpdateBoardParams::from_dto(board_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Get the lists of a board in display order.
///
/// Returns the stored order next to the lists sorted by it. Ids in the order that no
/// longer match a list are skipped in `lists` but kept in `positions`.
///
/// # Returns
/// - `200 OK` - Stored order and ordered lists
/// - `400 Bad Request` - Malformed board id
/// - `404 Not Found` - Board or its list order not found
/// - `409 Conflict` - The board's list order is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}/lists",
    tag = BOARD_TAG,
    params(
        ("board_id" = uuid::Uuid, Path, description = "Public board ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved ordered lists", body = ListWithOrderDto),
        (status = 400, description = "Malformed board ID", body = ErrorDto),
        (status = 404, description = "Board or list order not found", body = ErrorDto),
        (status = 409, description = "List order is empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board_lists(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let board_id = parse_public_id("board", &board_id)?;

    let service = ListService::new(&state.db);

    let ordered = service.get_ordered(board_id).await?;

    Ok((StatusCode::OK, Json(ordered.into_dto())))
}
