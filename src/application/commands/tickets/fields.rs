// src/application/commands/tickets/fields.rs
use super::TicketCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult, FieldErrors},
    domain::{
        agent::{AgentGroupId, AgentId},
        board::BoardId,
        errors::DomainError,
        ticket::{
            Priority, Requester, TicketComment, TicketFields, TicketSubject, TicketTags,
            TicketType, ZendeskTicketId,
        },
    },
};
use serde::Deserialize;
use utoipa::ToSchema;

const INVALID_CHOICE: &str = "select a valid choice";

/// Raw ticket form values as submitted, before validation. Missing
/// references are `None`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct TicketInput {
    pub subject: String,
    pub comment: String,
    pub requester: String,
    pub assignee: Option<i64>,
    pub group: Option<i64>,
    pub ticket_type: String,
    pub priority: String,
    pub tags: String,
    pub private_comment: String,
    pub zendesk_ticket_id: String,
    pub board: Option<i64>,
}

fn required_ref<T>(
    field: &str,
    raw: Option<i64>,
    ctor: impl FnOnce(i64) -> Result<T, DomainError>,
) -> Result<T, DomainError> {
    let raw = raw.ok_or_else(|| DomainError::Validation(format!("{field} is required")))?;
    ctor(raw).map_err(|_| DomainError::Validation(INVALID_CHOICE.into()))
}

impl TicketCommandService {
    /// Validates every field and reports all problems at once, the way a
    /// re-rendered form shows them.
    pub(super) async fn validate_input(&self, input: TicketInput) -> ApplicationResult<TicketFields> {
        let mut errors = FieldErrors::default();

        let subject = errors.check("subject", TicketSubject::new(input.subject));
        let comment = errors.check("comment", TicketComment::new(input.comment));
        let requester = errors.check("requester", Requester::new(input.requester));
        let ticket_type = errors.check("ticket_type", input.ticket_type.parse::<TicketType>());
        let priority = errors.check("priority", input.priority.parse::<Priority>());
        let tags = errors.check("tags", TicketTags::new(input.tags));
        let zendesk_ticket_id = errors.check(
            "zendesk_ticket_id",
            ZendeskTicketId::parse(input.zendesk_ticket_id),
        );

        let assignee = errors.check("assignee", required_ref("assignee", input.assignee, AgentId::new));
        let assignee = match assignee {
            Some(id) if self.agent_repo.find_by_id(id).await?.is_none() => {
                errors.push("assignee", INVALID_CHOICE);
                None
            }
            other => other,
        };

        let group = errors.check("group", required_ref("group", input.group, AgentGroupId::new));
        let group = match group {
            Some(id) if self.group_repo.find_by_id(id).await?.is_none() => {
                errors.push("group", INVALID_CHOICE);
                None
            }
            other => other,
        };

        let board = errors.check("board", required_ref("board", input.board, BoardId::new));
        let board = match board {
            Some(id) if self.board_repo.find_by_id(id).await?.is_none() => {
                errors.push("board", INVALID_CHOICE);
                None
            }
            other => other,
        };

        match (
            subject,
            comment,
            requester,
            assignee,
            group,
            ticket_type,
            priority,
            tags,
            zendesk_ticket_id,
            board,
        ) {
            (
                Some(subject),
                Some(comment),
                Some(requester),
                Some(assignee),
                Some(group),
                Some(ticket_type),
                Some(priority),
                Some(tags),
                Some(zendesk_ticket_id),
                Some(board),
            ) if errors.is_empty() => Ok(TicketFields {
                subject,
                comment,
                requester,
                assignee,
                group,
                ticket_type,
                priority,
                tags,
                private_comment: input.private_comment,
                zendesk_ticket_id,
                board,
            }),
            _ => Err(ApplicationError::InvalidFields(errors)),
        }
    }
}
