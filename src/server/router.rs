use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{board::*, list::*, user::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Taskboard API",
    description = "Boards, lists and the display order of lists on a board"
))]
struct ApiDoc;

/// Collects every documented API route together with its OpenAPI description.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_user))
        .routes(routes!(get_user, update_user, delete_user))
        .routes(routes!(create_board))
        .routes(routes!(get_board, update_board))
        .routes(routes!(get_board_lists))
        .routes(routes!(create_list))
        .routes(routes!(get_list, update_list, delete_list))
        .routes(routes!(update_list_positions))
}

/// Builds the API router and serves the generated OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.route(
        "/api/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
