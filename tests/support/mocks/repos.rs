// tests/support/mocks/repos.rs
use async_trait::async_trait;
use tickets_machine::domain::agent::{
    Agent, AgentGroup, AgentGroupId, AgentGroupRepository, AgentId, AgentRepository, NewAgent,
    NewAgentGroup,
};
use tickets_machine::domain::board::BoardId;
use tickets_machine::domain::errors::{DomainError, DomainResult};
use tickets_machine::domain::ticket::{
    NewTicket, Ticket, TicketId, TicketReadRepository, TicketUpdate, TicketWriteRepository,
};

/// チケットを一件も持たないリポジトリ
pub struct EmptyTickets;

#[async_trait]
impl TicketWriteRepository for EmptyTickets {
    async fn insert(&self, _ticket: NewTicket) -> DomainResult<Ticket> {
        Err(DomainError::Persistence("not implemented".into()))
    }

    async fn update(&self, _update: TicketUpdate) -> DomainResult<Ticket> {
        Err(DomainError::NotFound("ticket not found".into()))
    }

    async fn delete(&self, _id: TicketId) -> DomainResult<()> {
        Err(DomainError::NotFound("ticket not found".into()))
    }
}

#[async_trait]
impl TicketReadRepository for EmptyTickets {
    async fn find_by_id(&self, _id: TicketId) -> DomainResult<Option<Ticket>> {
        Ok(None)
    }

    async fn list_by_board(&self, _board: BoardId) -> DomainResult<Vec<Ticket>> {
        Ok(vec![])
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(0)
    }
}

/// エージェントを一人も持たないリポジトリ
pub struct EmptyAgents;

#[async_trait]
impl AgentRepository for EmptyAgents {
    async fn insert(&self, _agent: NewAgent) -> DomainResult<Agent> {
        Err(DomainError::Persistence("not implemented".into()))
    }

    async fn find_by_id(&self, _id: AgentId) -> DomainResult<Option<Agent>> {
        Ok(None)
    }

    async fn list(&self) -> DomainResult<Vec<Agent>> {
        Ok(vec![])
    }
}

/// グループを一つも持たないリポジトリ
pub struct EmptyAgentGroups;

#[async_trait]
impl AgentGroupRepository for EmptyAgentGroups {
    async fn insert(&self, _group: NewAgentGroup) -> DomainResult<AgentGroup> {
        Err(DomainError::Persistence("not implemented".into()))
    }

    async fn find_by_id(&self, _id: AgentGroupId) -> DomainResult<Option<AgentGroup>> {
        Ok(None)
    }

    async fn list(&self) -> DomainResult<Vec<AgentGroup>> {
        Ok(vec![])
    }
}
