// src/presentation/http/controllers/boards.rs
use crate::application::{
    commands::boards::{CreateBoardCommand, DeleteBoardCommand, RenameBoardCommand},
    dto::{BoardDetailDto, BoardDto, TicketDto},
    queries::{
        boards::{GetBoardByIdQuery, GetBoardBySlugQuery},
        tickets::ListBoardTicketsQuery,
    },
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBoardRequest {
    pub name: String,
    /// Omit to derive the slug from the name.
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenameBoardRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugPreviewParams {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewResponse {
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/boards",
    responses((status = 200, description = "All boards ordered by name.", body = [BoardDto])),
    tag = "Boards"
)]
pub async fn list_boards(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<BoardDto>>> {
    state
        .services
        .board_queries
        .list_boards()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board created; slug assigned.", body = BoardDto),
        (status = 400, description = "Invalid name or slug.", body = ErrorBody),
        (status = 409, description = "Supplied slug already taken.", body = ErrorBody)
    ),
    tag = "Boards"
)]
pub async fn create_board(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateBoardRequest>,
) -> HttpResult<(StatusCode, Json<BoardDto>)> {
    let command = CreateBoardCommand {
        name: payload.name,
        slug: payload.slug,
    };

    let board = state
        .services
        .board_commands
        .create_board(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(board)))
}

#[utoipa::path(
    get,
    path = "/api/v1/boards/slug-preview",
    params(SlugPreviewParams),
    responses((status = 200, description = "Slug derived from the name, before uniqueness checks.", body = SlugPreviewResponse)),
    tag = "Boards"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugPreviewParams>,
) -> Json<SlugPreviewResponse> {
    Json(SlugPreviewResponse {
        slug: state.services.preview_slug(&params.name),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/boards/by-slug/{slug}",
    params(("slug" = String, Path, description = "Board slug")),
    responses(
        (status = 200, description = "Board with its tickets.", body = BoardDetailDto),
        (status = 404, description = "No board with that slug.", body = ErrorBody)
    ),
    tag = "Boards"
)]
pub async fn get_board_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BoardDetailDto>> {
    state
        .services
        .board_queries
        .get_board_detail(GetBoardBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/boards/{id}",
    params(("id" = i64, Path, description = "Board id")),
    responses(
        (status = 200, body = BoardDto),
        (status = 404, body = ErrorBody)
    ),
    tag = "Boards"
)]
pub async fn get_board(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<BoardDto>> {
    state
        .services
        .board_queries
        .get_board_by_id(GetBoardByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/boards/{id}",
    params(("id" = i64, Path, description = "Board id")),
    request_body = RenameBoardRequest,
    responses(
        (status = 200, description = "Board renamed; slug unchanged.", body = BoardDto),
        (status = 404, body = ErrorBody)
    ),
    tag = "Boards"
)]
pub async fn rename_board(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<RenameBoardRequest>,
) -> HttpResult<Json<BoardDto>> {
    state
        .services
        .board_commands
        .rename_board(RenameBoardCommand {
            id,
            name: payload.name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/boards/{id}",
    params(("id" = i64, Path, description = "Board id")),
    responses(
        (status = 200, description = "Board and its tickets deleted."),
        (status = 404, body = ErrorBody)
    ),
    tag = "Boards"
)]
pub async fn delete_board(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .board_commands
        .delete_board(DeleteBoardCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    get,
    path = "/api/v1/boards/{id}/tickets",
    params(("id" = i64, Path, description = "Board id")),
    responses((status = 200, body = [TicketDto])),
    tag = "Boards"
)]
pub async fn list_board_tickets(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<TicketDto>>> {
    state
        .services
        .ticket_queries
        .list_board_tickets(ListBoardTicketsQuery { board_id: id })
        .await
        .into_http()
        .map(Json)
}
