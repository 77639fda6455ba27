use crate::domain::agent::entity::{Agent, AgentGroup, NewAgent, NewAgentGroup};
use crate::domain::agent::value_objects::{AgentGroupId, AgentId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AgentRepository: Send + Sync {
    async fn insert(&self, agent: NewAgent) -> DomainResult<Agent>;
    async fn find_by_id(&self, id: AgentId) -> DomainResult<Option<Agent>>;
    async fn list(&self) -> DomainResult<Vec<Agent>>;
}

#[async_trait]
pub trait AgentGroupRepository: Send + Sync {
    async fn insert(&self, group: NewAgentGroup) -> DomainResult<AgentGroup>;
    async fn find_by_id(&self, id: AgentGroupId) -> DomainResult<Option<AgentGroup>>;
    async fn list(&self) -> DomainResult<Vec<AgentGroup>>;
}
