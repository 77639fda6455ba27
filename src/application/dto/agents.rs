use crate::domain::agent::{Agent, AgentGroup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgentDto {
    pub id: i64,
    pub name: String,
    pub zendesk_user_id: String,
}

impl From<Agent> for AgentDto {
    fn from(agent: Agent) -> Self {
        Self {
            id: agent.id.into(),
            name: agent.name.into_inner(),
            zendesk_user_id: agent.zendesk_user_id.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgentGroupDto {
    pub id: i64,
    pub name: String,
    pub zendesk_group_id: String,
}

impl From<AgentGroup> for AgentGroupDto {
    fn from(group: AgentGroup) -> Self {
        Self {
            id: group.id.into(),
            name: group.name.into_inner(),
            zendesk_group_id: group.zendesk_group_id.into_inner(),
        }
    }
}
