use super::AgentQueryService;
use crate::application::{
    dto::{AgentDto, AgentGroupDto},
    error::ApplicationResult,
};

impl AgentQueryService {
    pub async fn list_agents(&self) -> ApplicationResult<Vec<AgentDto>> {
        let agents = self.agent_repo.list().await?;
        Ok(agents.into_iter().map(Into::into).collect())
    }

    pub async fn list_agent_groups(&self) -> ApplicationResult<Vec<AgentGroupDto>> {
        let groups = self.group_repo.list().await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }
}
