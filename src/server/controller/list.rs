use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        list::{CreateListDto, ListDto, UpdateListDto, UpdateListPositionsDto},
    },
    server::{
        error::{list::ListError, AppError},
        model::list::{CreateListParams, UpdateListParams},
        service::list::ListService,
        state::AppState,
        util::parse::parse_public_id,
    },
};

/// Tag for grouping list endpoints in OpenAPI documentation
pub static LIST_TAG: &str = "list";

/// Create a new list at the end of its board.
///
/// The list and its entry in the board's order are stored together. A client may choose
/// the list's public id; otherwise one is generated.
///
/// # Returns
/// - `201 Created` - The created list
/// - `400 Bad Request` - Blank title
/// - `404 Not Found` - Board does not exist
/// - `500 Internal Server Error` - Database error, nothing was stored
#[utoipa::path(
    post,
    path = "/api/lists",
    tag = LIST_TAG,
    request_body = CreateListDto,
    responses(
        (status = 201, description = "Successfully created list", body = ListDto),
        (status = 400, description = "Invalid list data", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    Json(payload): Json<CreateListDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListService::new(&state.db);

    let list = service.create(CreateListParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(list.into_dto())))
}

/// Get a list by public id.
#[utoipa::path(
    get,
    path = "/api/lists/{list_id}",
    tag = LIST_TAG,
    params(
        ("list_id" = uuid::Uuid, Path, description = "Public list ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved list", body = ListDto),
        (status = 400, description = "Malformed list ID", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let list_id = parse_public_id("list", &list_id)?;

    let service = ListService::new(&state.db);

    let list = service
        .get_by_public_id(list_id)
        .await?
        .ok_or(ListError::ListNotFound(list_id))?;

    Ok((StatusCode::OK, Json(list.into_dto())))
}

/// Update a list's title and description.
///
/// The list keeps its board and its place in the board's order.
#[utoipa::path(
    put,
    path = "/api/lists/{list_id}",
    tag = LIST_TAG,
    params(
        ("list_id" = uuid::Uuid, Path, description = "Public list ID")
    ),
    request_body = UpdateListDto,
    responses(
        (status = 200, description = "Successfully updated list", body = ListDto),
        (status = 400, description = "Invalid list data", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    Json(payload): Json<UpdateListDto>,
) -> Result<impl IntoResponse, AppError> {
    let list_id = parse_public_id("list", &list_id)?;

    let service = ListService::new(&state.db);

    let list = service
        .update(UpdateListParams::from_dto(list_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(list.into_dto())))
}

/// Delete a list.
///
/// The list is removed from its board's order in the same operation.
///
/// # Returns
/// - `204 No Content` - List deleted
/// - `400 Bad Request` - Malformed list id
/// - `404 Not Found` - List not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/lists/{list_id}",
    tag = LIST_TAG,
    params(
        ("list_id" = uuid::Uuid, Path, description = "Public list ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted list"),
        (status = 400, description = "Malformed list ID", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let list_id = parse_public_id("list", &list_id)?;

    let service = ListService::new(&state.db);

    let list = service
        .get_by_public_id(list_id)
        .await?
        .ok_or(ListError::ListNotFound(list_id))?;

    service.delete(list.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace the list order of a board.
///
/// The given order is stored as-is and is not checked against the board's lists.
/// Concurrent updates resolve as last writer wins.
///
/// # Returns
/// - `204 No Content` - Order stored
/// - `400 Bad Request` - Malformed board id
/// - `404 Not Found` - Board or its list order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/lists/positions/{board_id}",
    tag = LIST_TAG,
    params(
        ("board_id" = uuid::Uuid, Path, description = "Public board ID")
    ),
    request_body = UpdateListPositionsDto,
    responses(
        (status = 204, description = "Successfully updated list order"),
        (status = 400, description = "Malformed board ID", body = ErrorDto),
        (status = 404, description = "Board or list order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_list_positions(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
    Json(payload): Json<UpdateListPositionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let board_id = parse_public_id("board", &board_id)?;

    let service = ListService::new(&state.db);

    service
        .update_positions(board_id, payload.positions)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
