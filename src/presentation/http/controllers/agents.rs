// src/presentation/http/controllers/agents.rs
use crate::application::{
    commands::agents::{CreateAgentCommand, CreateAgentGroupCommand},
    dto::{AgentDto, AgentGroupDto},
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAgentRequest {
    pub name: String,
    pub zendesk_user_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAgentGroupRequest {
    pub name: String,
    pub zendesk_group_id: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/agents",
    responses((status = 200, body = [AgentDto])),
    tag = "Agents"
)]
pub async fn list_agents(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<AgentDto>>> {
    state
        .services
        .agent_queries
        .list_agents()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/agents",
    request_body = CreateAgentRequest,
    responses((status = 201, body = AgentDto), (status = 400, body = ErrorBody)),
    tag = "Agents"
)]
pub async fn create_agent(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAgentRequest>,
) -> HttpResult<(StatusCode, Json<AgentDto>)> {
    let agent = state
        .services
        .agent_commands
        .create_agent(CreateAgentCommand {
            name: payload.name,
            zendesk_user_id: payload.zendesk_user_id,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(agent)))
}

#[utoipa::path(
    get,
    path = "/api/v1/agent-groups",
    responses((status = 200, body = [AgentGroupDto])),
    tag = "Agents"
)]
pub async fn list_agent_groups(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AgentGroupDto>>> {
    state
        .services
        .agent_queries
        .list_agent_groups()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/agent-groups",
    request_body = CreateAgentGroupRequest,
    responses((status = 201, body = AgentGroupDto), (status = 400, body = ErrorBody)),
    tag = "Agents"
)]
pub async fn create_agent_group(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAgentGroupRequest>,
) -> HttpResult<(StatusCode, Json<AgentGroupDto>)> {
    let group = state
        .services
        .agent_commands
        .create_agent_group(CreateAgentGroupCommand {
            name: payload.name,
            zendesk_group_id: payload.zendesk_group_id,
        })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(group)))
}
