// src/presentation/http/views/tickets.rs
use super::{
    board_url,
    forms::{TicketChoices, TicketFormData, TicketFormView, TicketRow, form_errors},
    found, render,
};
use crate::application::{
    commands::tickets::{DeleteTicketCommand, UpdateTicketCommand},
    dto::TicketDto,
    error::FieldErrors,
    queries::{boards::GetBoardByIdQuery, tickets::GetTicketQuery},
    services::ApplicationServices,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    state::HttpState,
};
use askama::Template;
use axum::{Extension, Form, extract::Path, response::Response};

#[derive(Template)]
#[template(path = "ticket_edit.html")]
pub struct TicketEditPage {
    pub ticket_id: i64,
    pub back_url: String,
    pub tickets: Vec<TicketRow>,
    pub form: TicketFormView,
}

fn edit_url(id: i64) -> String {
    format!("/tickets/{id}/edit")
}

async fn board_slug(services: &ApplicationServices, board_id: i64) -> HttpResult<String> {
    services
        .board_queries
        .get_board_by_id(GetBoardByIdQuery { id: board_id })
        .await
        .map(|board| board.slug)
        .into_http()
}

async fn edit_page(
    services: &ApplicationServices,
    ticket: &TicketDto,
    values: TicketFormData,
    errors: FieldErrors,
) -> HttpResult<Response> {
    let back_url = board_url(&board_slug(services, ticket.board_id).await?);
    let choices = TicketChoices::load(services).await.into_http()?;
    Ok(render(&TicketEditPage {
        ticket_id: ticket.id,
        back_url,
        tickets: choices.rows(vec![ticket.clone()]),
        form: TicketFormView::new(edit_url(ticket.id), "Save", values, errors, &choices),
    }))
}

pub async fn edit_ticket_form(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let ticket = state
        .services
        .ticket_queries
        .get_ticket(GetTicketQuery { id })
        .await
        .into_http()?;
    let values = TicketFormData::from(&ticket);
    edit_page(&state.services, &ticket, values, FieldErrors::default()).await
}

pub async fn edit_ticket(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Form(values): Form<TicketFormData>,
) -> HttpResult<Response> {
    let ticket = state
        .services
        .ticket_queries
        .get_ticket(GetTicketQuery { id })
        .await
        .into_http()?;

    let command = UpdateTicketCommand {
        id,
        input: values.to_input(),
    };
    match state.services.ticket_commands.update_ticket(command).await {
        Ok(updated) => {
            let slug = board_slug(&state.services, updated.board_id).await?;
            Ok(found(board_url(&slug)))
        }
        Err(err) => {
            let errors = form_errors(err).into_http()?;
            edit_page(&state.services, &ticket, values, errors).await
        }
    }
}

pub async fn delete_ticket(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let deleted = state
        .services
        .ticket_commands
        .delete_ticket(DeleteTicketCommand { id })
        .await
        .into_http()?;
    Ok(found(board_url(&deleted.board_slug)))
}
