use crate::domain::agent::{AgentGroupId, AgentId};
use crate::domain::board::BoardId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ticket::{
    NewTicket, Requester, Ticket, TicketComment, TicketFields, TicketId, TicketReadRepository,
    TicketSubject, TicketTags, TicketUpdate, TicketWriteRepository, ZendeskTicketId,
};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Sqlite, SqlitePool, query::QueryAs, sqlite::SqliteArguments};
use std::sync::Arc;

const TICKET_COLUMNS: &str = "id, subject, comment, requester, assignee_id, group_id, ticket_type, \
     priority, tags, private_comment, zendesk_ticket_id, board_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteTicketWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTicketWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteTicketReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTicketReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TicketRow {
    id: i64,
    subject: String,
    comment: String,
    requester: String,
    assignee_id: i64,
    group_id: i64,
    ticket_type: String,
    priority: String,
    tags: String,
    private_comment: String,
    zendesk_ticket_id: Option<String>,
    board_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        Ok(Ticket {
            id: TicketId::new(row.id)?,
            fields: TicketFields {
                subject: TicketSubject::new(row.subject)?,
                comment: TicketComment::new(row.comment)?,
                requester: Requester::new(row.requester)?,
                assignee: AgentId::new(row.assignee_id)?,
                group: AgentGroupId::new(row.group_id)?,
                ticket_type: row.ticket_type.parse()?,
                priority: row.priority.parse()?,
                tags: TicketTags::new(row.tags)?,
                private_comment: row.private_comment,
                zendesk_ticket_id: ZendeskTicketId::parse(row.zendesk_ticket_id.unwrap_or_default())?,
                board: BoardId::new(row.board_id)?,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Binds the editable columns in `TICKET_COLUMNS` order (subject .. board_id).
fn bind_fields<'q>(
    query: QueryAs<'q, Sqlite, TicketRow, SqliteArguments<'q>>,
    fields: &'q TicketFields,
) -> QueryAs<'q, Sqlite, TicketRow, SqliteArguments<'q>> {
    query
        .bind(fields.subject.as_str())
        .bind(fields.comment.as_str())
        .bind(fields.requester.as_str())
        .bind(i64::from(fields.assignee))
        .bind(i64::from(fields.group))
        .bind(fields.ticket_type.as_str())
        .bind(fields.priority.as_str())
        .bind(fields.tags.as_str())
        .bind(fields.private_comment.as_str())
        .bind(fields.zendesk_ticket_id.as_ref().map(ZendeskTicketId::as_str))
        .bind(i64::from(fields.board))
}

#[async_trait]
impl TicketWriteRepository for SqliteTicketWriteRepository {
    async fn insert(&self, ticket: NewTicket) -> DomainResult<Ticket> {
        let sql = format!(
            "INSERT INTO tickets (subject, comment, requester, assignee_id, group_id, ticket_type, \
             priority, tags, private_comment, zendesk_ticket_id, board_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {TICKET_COLUMNS}"
        );

        let row = bind_fields(sqlx::query_as::<_, TicketRow>(&sql), &ticket.fields)
            .bind(ticket.created_at)
            .bind(ticket.updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ticket::try_from(row)
    }

    async fn update(&self, update: TicketUpdate) -> DomainResult<Ticket> {
        let sql = format!(
            "UPDATE tickets SET subject = ?, comment = ?, requester = ?, assignee_id = ?, \
             group_id = ?, ticket_type = ?, priority = ?, tags = ?, private_comment = ?, \
             zendesk_ticket_id = ?, board_id = ?, updated_at = ? WHERE id = ? \
             RETURNING {TICKET_COLUMNS}"
        );

        let row = bind_fields(sqlx::query_as::<_, TicketRow>(&sql), &update.fields)
            .bind(update.updated_at)
            .bind(i64::from(update.id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("ticket not found".into()))?;

        Ticket::try_from(row)
    }

    async fn delete(&self, id: TicketId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("ticket not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TicketReadRepository for SqliteTicketReadRepository {
    async fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Ticket::try_from).transpose()
    }

    async fn list_by_board(&self, board: BoardId) -> DomainResult<Vec<Ticket>> {
        let rows = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE board_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(board))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Ticket::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM tickets")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}
