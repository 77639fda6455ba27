// src/domain/agent/entity.rs
use crate::domain::agent::value_objects::{AgentGroupId, AgentId, DisplayName, ZendeskRef};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Agent {
    pub id: AgentId,
    pub name: DisplayName,
    pub zendesk_user_id: ZendeskRef,
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

#[derive(Debug, Clone)]
pub struct NewAgent {
    pub name: DisplayName,
    pub zendesk_user_id: ZendeskRef,
}

#[derive(Debug, Clone)]
pub struct AgentGroup {
    pub id: AgentGroupId,
    pub name: DisplayName,
    pub zendesk_group_id: ZendeskRef,
}

impl fmt::Display for AgentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

#[derive(Debug, Clone)]
pub struct NewAgentGroup {
    pub name: DisplayName,
    pub zendesk_group_id: ZendeskRef,
}
