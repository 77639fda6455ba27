// src/presentation/http/views/mod.rs
//! Server-rendered HTML pages. Successful form posts answer with a plain
//! `302 Found`; failed validation re-renders the page with field messages.
pub mod boards;
pub mod forms;
pub mod tickets;

use askama::Template;
use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

pub(crate) fn board_url(slug: &str) -> String {
    format!("/boards/{slug}")
}

/// `axum::response::Redirect::to` answers 303; the board pages use 302.
pub(crate) fn found(location: impl Into<String>) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.into())]).into_response()
}

pub(crate) fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
