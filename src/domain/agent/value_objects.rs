// src/domain/agent/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text;
use std::fmt;

pub const DISPLAY_NAME_MAX_CHARS: usize = 100;
pub const ZENDESK_REF_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentId(pub i64);

impl AgentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("agent id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AgentId> for i64 {
    fn from(value: AgentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentGroupId(pub i64);

impl AgentGroupId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("agent group id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AgentGroupId> for i64 {
    fn from(value: AgentGroupId) -> Self {
        value.0
    }
}

/// Name shown for agents and agent groups in pickers and tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        text::required("name", value.into(), DISPLAY_NAME_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the matching user or group on the Zendesk side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZendeskRef(String);

impl ZendeskRef {
    pub fn new(field: &str, value: impl Into<String>) -> DomainResult<Self> {
        text::required(field, value.into(), ZENDESK_REF_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
