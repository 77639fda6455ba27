// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{agents, boards, tickets},
    openapi::{self, StatusResponse},
    views,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    response::Response,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Router accepting cross-origin requests from anywhere. Used by tests.
pub fn build_router(state: HttpState) -> Router {
    routes(state, cors_layer(AllowOrigin::any()))
}

pub fn build_router_with_origins(state: HttpState, origins: &[String]) -> Router {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    routes(state, cors_layer(AllowOrigin::list(allowed)))
}

fn cors_layer(origin: AllowOrigin) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

fn routes(state: HttpState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .route(
            "/boards",
            get(views::boards::board_index).post(views::boards::create_board),
        )
        .route("/boards/{slug}", get(views::boards::board_detail))
        .route("/boards/{slug}/tickets", post(views::boards::create_ticket))
        .route(
            "/tickets/{id}/edit",
            get(views::tickets::edit_ticket_form).post(views::tickets::edit_ticket),
        )
        .route("/tickets/{id}/delete", get(views::tickets::delete_ticket))
        .route(
            "/api/v1/boards",
            get(boards::list_boards).post(boards::create_board),
        )
        .route("/api/v1/boards/slug-preview", get(boards::preview_slug))
        .route(
            "/api/v1/boards/by-slug/{slug}",
            get(boards::get_board_by_slug),
        )
        .route(
            "/api/v1/boards/{id}",
            get(boards::get_board)
                .put(boards::rename_board)
                .delete(boards::delete_board),
        )
        .route(
            "/api/v1/boards/{id}/tickets",
            get(boards::list_board_tickets),
        )
        .route("/api/v1/tickets", post(tickets::create_ticket))
        .route(
            "/api/v1/tickets/{id}",
            get(tickets::get_ticket)
                .put(tickets::update_ticket)
                .delete(tickets::delete_ticket),
        )
        .route(
            "/api/v1/agents",
            get(agents::list_agents).post(agents::create_agent),
        )
        .route(
            "/api/v1/agent-groups",
            get(agents::list_agent_groups).post(agents::create_agent_group),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

async fn index() -> Response {
    views::found("/boards")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
