use crate::domain::ticket::{Priority, Ticket, TicketType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i64,
    pub subject: String,
    pub comment: String,
    pub requester: String,
    pub assignee_id: i64,
    pub group_id: i64,
    pub ticket_type: TicketType,
    pub priority: Priority,
    pub tags: String,
    pub private_comment: String,
    #[serde(default)]
    pub zendesk_ticket_id: Option<String>,
    pub board_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketDto {
    fn from(ticket: Ticket) -> Self {
        let fields = ticket.fields;
        Self {
            id: ticket.id.into(),
            subject: fields.subject.into_inner(),
            comment: fields.comment.into_inner(),
            requester: fields.requester.into_inner(),
            assignee_id: fields.assignee.into(),
            group_id: fields.group.into(),
            ticket_type: fields.ticket_type,
            priority: fields.priority,
            tags: fields.tags.into_inner(),
            private_comment: fields.private_comment,
            zendesk_ticket_id: fields.zendesk_ticket_id.map(|id| id.into_inner()),
            board_id: fields.board.into(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

/// Result of deleting a ticket: where the caller should go next.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketDeletedDto {
    pub ticket_id: i64,
    pub board_slug: String,
}
