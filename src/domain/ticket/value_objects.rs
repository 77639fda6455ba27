// src/domain/ticket/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const SUBJECT_MAX_CHARS: usize = 300;
pub const REQUESTER_MAX_CHARS: usize = 100;
pub const TAGS_MAX_CHARS: usize = 300;
pub const ZENDESK_TICKET_ID_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketId(pub i64);

impl TicketId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("ticket id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TicketId> for i64 {
    fn from(value: TicketId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSubject(String);

impl TicketSubject {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        text::required("subject", value.into(), SUBJECT_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TicketSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketComment(String);

impl TicketComment {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Who asked for the ticket, usually an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester(String);

impl Requester {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        text::required("requester", value.into(), REQUESTER_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Free-form tag list as typed in the form, may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketTags(String);

impl TicketTags {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        text::bounded("tags", value.into(), TAGS_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZendeskTicketId(String);

impl ZendeskTicketId {
    /// Blank input means the ticket has not been pushed to Zendesk yet.
    pub fn parse(value: impl Into<String>) -> DomainResult<Option<Self>> {
        let value = value.into();
        if value.trim().is_empty() {
            return Ok(None);
        }
        text::bounded("zendesk_ticket_id", value, ZENDESK_TICKET_ID_MAX_CHARS)
            .map(|v| Some(Self(v)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Question,
    Incident,
    Problem,
    Task,
}

impl TicketType {
    pub const ALL: [Self; 4] = [Self::Question, Self::Incident, Self::Problem, Self::Task];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Question => "question",
            TicketType::Incident => "incident",
            TicketType::Problem => "problem",
            TicketType::Task => "task",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::Question => "Question",
            TicketType::Incident => "Incident",
            TicketType::Problem => "Problem",
            TicketType::Task => "Task",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown ticket_type '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Urgent,
    Normal,
    Low,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::High, Self::Urgent, Self::Normal, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Urgent => "Urgent",
            Priority::Normal => "Normal",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown priority '{s}'")))
    }
}
