// src/presentation/http/views/boards.rs
use super::{
    board_url,
    forms::{BoardFormData, TicketChoices, TicketFormData, TicketFormView, TicketRow, form_errors},
    found, render,
};
use crate::application::{
    commands::{boards::CreateBoardCommand, tickets::CreateTicketCommand},
    dto::BoardDto,
    error::FieldErrors,
    queries::boards::GetBoardBySlugQuery,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    state::HttpState,
};
use askama::Template;
use axum::{
    Extension, Form,
    extract::Path,
    response::Response,
};

#[derive(Template)]
#[template(path = "boards.html")]
pub struct BoardsPage {
    pub boards: Vec<BoardDto>,
    pub form: BoardFormData,
    pub errors: FieldErrors,
}

impl BoardsPage {
    pub fn errors_for(&self, field: &str) -> Vec<&str> {
        self.errors.for_field(field)
    }
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardPage {
    pub board: BoardDto,
    pub tickets: Vec<TicketRow>,
    pub form: TicketFormView,
}

pub async fn board_index(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let boards = state.services.board_queries.list_boards().await.into_http()?;
    Ok(render(&BoardsPage {
        boards,
        form: BoardFormData::default(),
        errors: FieldErrors::default(),
    }))
}

pub async fn create_board(
    Extension(state): Extension<HttpState>,
    Form(form): Form<BoardFormData>,
) -> HttpResult<Response> {
    let command = CreateBoardCommand {
        name: form.name.clone(),
        slug: Some(form.slug.trim().to_string()),
    };

    match state.services.board_commands.create_board(command).await {
        Ok(board) => Ok(found(board_url(&board.slug))),
        Err(err) => {
            let errors = form_errors(err).into_http()?;
            let boards = state.services.board_queries.list_boards().await.into_http()?;
            Ok(render(&BoardsPage {
                boards,
                form,
                errors,
            }))
        }
    }
}

pub async fn board_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Response> {
    let detail = state
        .services
        .board_queries
        .get_board_detail(GetBoardBySlugQuery { slug })
        .await
        .into_http()?;
    let choices = TicketChoices::load(&state.services).await.into_http()?;

    let form = TicketFormView::new(
        format!("{}/tickets", board_url(&detail.board.slug)),
        "Create",
        TicketFormData::for_board(detail.board.id),
        FieldErrors::default(),
        &choices,
    );
    Ok(render(&BoardPage {
        tickets: choices.rows(detail.tickets),
        board: detail.board,
        form,
    }))
}

pub async fn create_ticket(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Form(mut values): Form<TicketFormData>,
) -> HttpResult<Response> {
    let detail = state
        .services
        .board_queries
        .get_board_detail(GetBoardBySlugQuery { slug })
        .await
        .into_http()?;

    // The board in the URL wins over whatever the form carried.
    values.board = detail.board.id.to_string();
    let command = CreateTicketCommand {
        input: values.to_input(),
    };
    match state.services.ticket_commands.create_ticket(command).await {
        Ok(_) => Ok(found(board_url(&detail.board.slug))),
        Err(err) => {
            let errors = form_errors(err).into_http()?;
            tracing::debug!(board = %detail.board.slug, %errors, "ticket form rejected");
            let choices = TicketChoices::load(&state.services).await.into_http()?;
            let form = TicketFormView::new(
                format!("{}/tickets", board_url(&detail.board.slug)),
                "Create",
                values,
                errors,
                &choices,
            );
            Ok(render(&BoardPage {
                tickets: choices.rows(detail.tickets),
                board: detail.board,
                form,
            }))
        }
    }
}
