use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::{user::UserError, AppError},
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::parse::parse_public_id,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Blank name or email
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.create(CreateUserParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a user by public id.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Malformed user id
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = uuid::Uuid, Path, description = "Public user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 400, description = "Malformed user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_public_id("user", &user_id)?;

    let service = UserService::new(&state.db);

    let user = service
        .get_by_public_id(user_id)
        .await?
        .ok_or(UserError::NotFound(user_id))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's name and email.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Malformed user id or blank fields
/// - `404 Not Found` - No such user
/// - `409 Conflict` - Email already registered to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = uuid::Uuid, Path, description = "Public user ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_public_id("user", &user_id)?;

    let service = UserService::new(&state.db);

    let user = service
        .update(UpdateUserParams::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// Boards owned by the user are deleted with it, including their lists and list order.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - Malformed user id
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = uuid::Uuid, Path, description = "Public user ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Malformed user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_public_id("user", &user_id)?;

    let service = UserService::new(&state.db);

    service.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
