use crate::domain::agent::{
    Agent, AgentGroup, AgentGroupId, AgentGroupRepository, AgentId, AgentRepository, DisplayName,
    NewAgent, NewAgentGroup, ZendeskRef,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteAgentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAgentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteAgentGroupRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAgentGroupRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AgentRow {
    id: i64,
    name: String,
    zendesk_user_id: String,
}

impl TryFrom<AgentRow> for Agent {
    type Error = DomainError;

    fn try_from(row: AgentRow) -> Result<Self, Self::Error> {
        Ok(Agent {
            id: AgentId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            zendesk_user_id: ZendeskRef::new("zendesk_user_id", row.zendesk_user_id)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct AgentGroupRow {
    id: i64,
    name: String,
    zendesk_group_id: String,
}

impl TryFrom<AgentGroupRow> for AgentGroup {
    type Error = DomainError;

    fn try_from(row: AgentGroupRow) -> Result<Self, Self::Error> {
        Ok(AgentGroup {
            id: AgentGroupId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            zendesk_group_id: ZendeskRef::new("zendesk_group_id", row.zendesk_group_id)?,
        })
    }
}

#[async_trait]
impl AgentRepository for SqliteAgentRepository {
    async fn insert(&self, agent: NewAgent) -> DomainResult<Agent> {
        let row = sqlx::query_as::<_, AgentRow>(
            "INSERT INTO agents (name, zendesk_user_id) VALUES (?, ?) RETURNING id, name, zendesk_user_id",
        )
        .bind(agent.name.as_str())
        .bind(agent.zendesk_user_id.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Agent::try_from(row)
    }

    async fn find_by_id(&self, id: AgentId) -> DomainResult<Option<Agent>> {
        let row = sqlx::query_as::<_, AgentRow>(
            "SELECT id, name, zendesk_user_id FROM agents WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Agent::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Agent>> {
        let rows = sqlx::query_as::<_, AgentRow>(
            "SELECT id, name, zendesk_user_id FROM agents ORDER BY name COLLATE NOCASE, id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Agent::try_from).collect()
    }
}

#[async_trait]
impl AgentGroupRepository for SqliteAgentGroupRepository {
    async fn insert(&self, group: NewAgentGroup) -> DomainResult<AgentGroup> {
        let row = sqlx::query_as::<_, AgentGroupRow>(
            "INSERT INTO agent_groups (name, zendesk_group_id) VALUES (?, ?) RETURNING id, name, zendesk_group_id",
        )
        .bind(group.name.as_str())
        .bind(group.zendesk_group_id.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        AgentGroup::try_from(row)
    }

    async fn find_by_id(&self, id: AgentGroupId) -> DomainResult<Option<AgentGroup>> {
        let row = sqlx::query_as::<_, AgentGroupRow>(
            "SELECT id, name, zendesk_group_id FROM agent_groups WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(AgentGroup::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<AgentGroup>> {
        let rows = sqlx::query_as::<_, AgentGroupRow>(
            "SELECT id, name, zendesk_group_id FROM agent_groups ORDER BY name COLLATE NOCASE, id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(AgentGroup::try_from).collect()
    }
}
