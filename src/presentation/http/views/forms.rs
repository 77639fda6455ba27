// src/presentation/http/views/forms.rs
use crate::application::{
    ApplicationResult,
    commands::tickets::TicketInput,
    dto::{AgentDto, AgentGroupDto, TicketDto},
    error::{ApplicationError, FieldErrors},
    services::ApplicationServices,
};
use crate::domain::{errors::DomainError, ticket::{Priority, TicketType}};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoardFormData {
    pub name: String,
    pub slug: String,
}

/// Ticket form exactly as posted. Select boxes arrive as strings, `""` when
/// nothing was chosen.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TicketFormData {
    pub subject: String,
    pub comment: String,
    pub requester: String,
    pub assignee: String,
    pub group: String,
    pub ticket_type: String,
    pub priority: String,
    pub tags: String,
    pub private_comment: String,
    pub zendesk_ticket_id: String,
    pub board: String,
}

// Unparseable ids become 0 so they are reported as an invalid choice rather
// than a missing one.
fn parse_ref(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.parse().unwrap_or(0))
    }
}

impl TicketFormData {
    pub fn for_board(board_id: i64) -> Self {
        Self {
            ticket_type: TicketType::Question.as_str().to_string(),
            priority: Priority::Normal.as_str().to_string(),
            board: board_id.to_string(),
            ..Self::default()
        }
    }

    pub fn to_input(&self) -> TicketInput {
        TicketInput {
            subject: self.subject.clone(),
            comment: self.comment.clone(),
            requester: self.requester.clone(),
            assignee: parse_ref(&self.assignee),
            group: parse_ref(&self.group),
            ticket_type: self.ticket_type.clone(),
            priority: self.priority.clone(),
            tags: self.tags.clone(),
            private_comment: self.private_comment.clone(),
            zendesk_ticket_id: self.zendesk_ticket_id.clone(),
            board: parse_ref(&self.board),
        }
    }
}

impl From<&TicketDto> for TicketFormData {
    fn from(ticket: &TicketDto) -> Self {
        Self {
            subject: ticket.subject.clone(),
            comment: ticket.comment.clone(),
            requester: ticket.requester.clone(),
            assignee: ticket.assignee_id.to_string(),
            group: ticket.group_id.to_string(),
            ticket_type: ticket.ticket_type.as_str().to_string(),
            priority: ticket.priority.as_str().to_string(),
            tags: ticket.tags.clone(),
            private_comment: ticket.private_comment.clone(),
            zendesk_ticket_id: ticket.zendesk_ticket_id.clone().unwrap_or_default(),
            board: ticket.board_id.to_string(),
        }
    }
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>, current: &str) -> Self {
        let value = value.into();
        let selected = value == current;
        Self {
            value,
            label: label.into(),
            selected,
        }
    }
}

/// Everything a ticket select box can offer.
pub struct TicketChoices {
    pub agents: Vec<AgentDto>,
    pub groups: Vec<AgentGroupDto>,
}

impl TicketChoices {
    pub async fn load(services: &ApplicationServices) -> ApplicationResult<Self> {
        Ok(Self {
            agents: services.agent_queries.list_agents().await?,
            groups: services.agent_queries.list_agent_groups().await?,
        })
    }

    pub fn rows(&self, tickets: Vec<TicketDto>) -> Vec<TicketRow> {
        let agents: HashMap<i64, &str> = self
            .agents
            .iter()
            .map(|agent| (agent.id, agent.name.as_str()))
            .collect();
        let groups: HashMap<i64, &str> = self
            .groups
            .iter()
            .map(|group| (group.id, group.name.as_str()))
            .collect();

        tickets
            .into_iter()
            .map(|ticket| TicketRow {
                id: ticket.id,
                assignee: agents.get(&ticket.assignee_id).copied().unwrap_or_default().to_string(),
                group: groups.get(&ticket.group_id).copied().unwrap_or_default().to_string(),
                ticket_type: ticket.ticket_type.label(),
                priority: ticket.priority.label(),
                zendesk_ticket_id: ticket.zendesk_ticket_id.unwrap_or_default(),
                subject: ticket.subject,
                comment: ticket.comment,
                requester: ticket.requester,
                tags: ticket.tags,
                private_comment: ticket.private_comment,
            })
            .collect()
    }
}

pub struct TicketRow {
    pub id: i64,
    pub subject: String,
    pub comment: String,
    pub requester: String,
    pub assignee: String,
    pub group: String,
    pub ticket_type: &'static str,
    pub priority: &'static str,
    pub tags: String,
    pub private_comment: String,
    pub zendesk_ticket_id: String,
}

pub struct TicketFormView {
    pub action: String,
    pub submit_label: &'static str,
    pub values: TicketFormData,
    pub errors: FieldErrors,
    pub assignees: Vec<SelectOption>,
    pub groups: Vec<SelectOption>,
    pub ticket_types: Vec<SelectOption>,
    pub priorities: Vec<SelectOption>,
}

impl TicketFormView {
    pub fn new(
        action: impl Into<String>,
        submit_label: &'static str,
        values: TicketFormData,
        errors: FieldErrors,
        choices: &TicketChoices,
    ) -> Self {
        let assignees = choices
            .agents
            .iter()
            .map(|agent| SelectOption::new(agent.id.to_string(), agent.name.as_str(), &values.assignee))
            .collect();
        let groups = choices
            .groups
            .iter()
            .map(|group| SelectOption::new(group.id.to_string(), group.name.as_str(), &values.group))
            .collect();
        let ticket_types = TicketType::ALL
            .iter()
            .map(|kind| SelectOption::new(kind.as_str(), kind.label(), &values.ticket_type))
            .collect();
        let priorities = Priority::ALL
            .iter()
            .map(|priority| SelectOption::new(priority.as_str(), priority.label(), &values.priority))
            .collect();

        Self {
            action: action.into(),
            submit_label,
            values,
            errors,
            assignees,
            groups,
            ticket_types,
            priorities,
        }
    }

    pub fn errors_for(&self, field: &str) -> Vec<&str> {
        self.errors.for_field(field)
    }
}

/// Splits errors a form can display from those that should fail the request.
pub(crate) fn form_errors(err: ApplicationError) -> Result<FieldErrors, ApplicationError> {
    let mut errors = FieldErrors::default();
    match err {
        ApplicationError::InvalidFields(fields) => return Ok(fields),
        ApplicationError::Domain(DomainError::Validation(message)) => {
            errors.push("form", message);
        }
        ApplicationError::Domain(DomainError::DuplicateSlug(message)) => {
            errors.push("slug", message);
        }
        other => return Err(other),
    }
    Ok(errors)
}
