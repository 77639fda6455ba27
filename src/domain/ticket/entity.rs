// src/domain/ticket/entity.rs
use crate::domain::agent::{AgentGroupId, AgentId};
use crate::domain::board::BoardId;
use crate::domain::ticket::value_objects::{
    Priority, Requester, TicketComment, TicketId, TicketSubject, TicketTags, TicketType,
    ZendeskTicketId,
};
use chrono::{DateTime, Utc};
use std::fmt;

/// The user-editable part of a ticket, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFields {
    pub subject: TicketSubject,
    pub comment: TicketComment,
    pub requester: Requester,
    pub assignee: AgentId,
    pub group: AgentGroupId,
    pub ticket_type: TicketType,
    pub priority: Priority,
    pub tags: TicketTags,
    pub private_comment: String,
    pub zendesk_ticket_id: Option<ZendeskTicketId>,
    pub board: BoardId,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: TicketId,
    pub fields: TicketFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    pub fn replace_fields(&mut self, fields: TicketFields, now: DateTime<Utc>) {
        self.fields = fields;
        self.updated_at = now;
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fields.subject, f)
    }
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub fields: TicketFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TicketUpdate {
    pub id: TicketId,
    pub fields: TicketFields,
    pub updated_at: DateTime<Utc>,
}

impl From<&Ticket> for TicketUpdate {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            fields: ticket.fields.clone(),
            updated_at: ticket.updated_at,
        }
    }
}
