// src/presentation/http/controllers/tickets.rs
use crate::application::{
    commands::tickets::{CreateTicketCommand, DeleteTicketCommand, TicketInput, UpdateTicketCommand},
    dto::{TicketDeletedDto, TicketDto},
    queries::tickets::GetTicketQuery,
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/tickets",
    request_body = TicketInput,
    responses(
        (status = 201, body = TicketDto),
        (status = 400, description = "Field-level validation errors.", body = ErrorBody)
    ),
    tag = "Tickets"
)]
pub async fn create_ticket(
    Extension(state): Extension<HttpState>,
    Json(input): Json<TicketInput>,
) -> HttpResult<(StatusCode, Json<TicketDto>)> {
    let ticket = state
        .services
        .ticket_commands
        .create_ticket(CreateTicketCommand { input })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tickets/{id}",
    params(("id" = i64, Path, description = "Ticket id")),
    responses((status = 200, body = TicketDto), (status = 404, body = ErrorBody)),
    tag = "Tickets"
)]
pub async fn get_ticket(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TicketDto>> {
    state
        .services
        .ticket_queries
        .get_ticket(GetTicketQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/tickets/{id}",
    params(("id" = i64, Path, description = "Ticket id")),
    request_body = TicketInput,
    responses(
        (status = 200, body = TicketDto),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    ),
    tag = "Tickets"
)]
pub async fn update_ticket(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(input): Json<TicketInput>,
) -> HttpResult<Json<TicketDto>> {
    state
        .services
        .ticket_commands
        .update_ticket(UpdateTicketCommand { id, input })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/tickets/{id}",
    params(("id" = i64, Path, description = "Ticket id")),
    responses((status = 200, body = TicketDeletedDto), (status = 404, body = ErrorBody)),
    tag = "Tickets"
)]
pub async fn delete_ticket(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TicketDeletedDto>> {
    state
        .services
        .ticket_commands
        .delete_ticket(DeleteTicketCommand { id })
        .await
        .into_http()
        .map(Json)
}
