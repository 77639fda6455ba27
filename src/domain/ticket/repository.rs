use crate::domain::board::BoardId;
use crate::domain::errors::DomainResult;
use crate::domain::ticket::entity::{NewTicket, Ticket, TicketUpdate};
use crate::domain::ticket::value_objects::TicketId;
use async_trait::async_trait;

#[async_trait]
pub trait TicketWriteRepository: Send + Sync {
    async fn insert(&self, ticket: NewTicket) -> DomainResult<Ticket>;
    async fn update(&self, update: TicketUpdate) -> DomainResult<Ticket>;
    async fn delete(&self, id: TicketId) -> DomainResult<()>;
}

#[async_trait]
pub trait TicketReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>>;
    async fn list_by_board(&self, board: BoardId) -> DomainResult<Vec<Ticket>>;
    async fn count(&self) -> DomainResult<u64>;
}
