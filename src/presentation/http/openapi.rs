// src/presentation/http/openapi.rs
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::boards::list_boards,
        crate::presentation::http::controllers::boards::create_board,
        crate::presentation::http::controllers::boards::preview_slug,
        crate::presentation::http::controllers::boards::get_board_by_slug,
        crate::presentation::http::controllers::boards::get_board,
        crate::presentation::http::controllers::boards::rename_board,
        crate::presentation::http::controllers::boards::delete_board,
        crate::presentation::http::controllers::boards::list_board_tickets,
        crate::presentation::http::controllers::tickets::create_ticket,
        crate::presentation::http::controllers::tickets::get_ticket,
        crate::presentation::http::controllers::tickets::update_ticket,
        crate::presentation::http::controllers::tickets::delete_ticket,
        crate::presentation::http::controllers::agents::list_agents,
        crate::presentation::http::controllers::agents::create_agent,
        crate::presentation::http::controllers::agents::list_agent_groups,
        crate::presentation::http::controllers::agents::create_agent_group,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorBody,
            crate::application::error::FieldError,
            crate::application::error::FieldErrors,
            crate::presentation::http::controllers::boards::CreateBoardRequest,
            crate::presentation::http::controllers::boards::RenameBoardRequest,
            crate::presentation::http::controllers::boards::SlugPreviewResponse,
            crate::presentation::http::controllers::agents::CreateAgentRequest,
            crate::presentation::http::controllers::agents::CreateAgentGroupRequest,
            crate::application::commands::tickets::TicketInput,
            crate::application::dto::BoardDto,
            crate::application::dto::BoardDetailDto,
            crate::application::dto::TicketDto,
            crate::application::dto::TicketDeletedDto,
            crate::application::dto::AgentDto,
            crate::application::dto::AgentGroupDto,
            crate::domain::ticket::TicketType,
            crate::domain::ticket::Priority
        )
    ),
    tags(
        (name = "Boards", description = "Board management and slug assignment"),
        (name = "Tickets", description = "Ticket management endpoints"),
        (name = "Agents", description = "Agents and agent groups"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Tickets Machine API",
        description = "Zendesk-style ticket boards",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_board_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/boards"));
        assert!(doc.paths.paths.contains_key("/api/v1/boards/by-slug/{slug}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn document_registers_error_body_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("ErrorBody"));
        assert!(components.schemas.contains_key("TicketInput"));
    }
}
