use super::AgentCommandService;
use crate::{
    application::{
        dto::{AgentDto, AgentGroupDto},
        error::ApplicationResult,
    },
    domain::agent::{DisplayName, NewAgent, NewAgentGroup, ZendeskRef},
};

pub struct CreateAgentCommand {
    pub name: String,
    pub zendesk_user_id: String,
}

pub struct CreateAgentGroupCommand {
    pub name: String,
    pub zendesk_group_id: String,
}

impl AgentCommandService {
    pub async fn create_agent(&self, command: CreateAgentCommand) -> ApplicationResult<AgentDto> {
        let agent = NewAgent {
            name: DisplayName::new(command.name)?,
            zendesk_user_id: ZendeskRef::new("zendesk_user_id", command.zendesk_user_id)?,
        };
        let created = self.agent_repo.insert(agent).await?;
        Ok(created.into())
    }

    pub async fn create_agent_group(
        &self,
        command: CreateAgentGroupCommand,
    ) -> ApplicationResult<AgentGroupDto> {
        let group = NewAgentGroup {
            name: DisplayName::new(command.name)?,
            zendesk_group_id: ZendeskRef::new("zendesk_group_id", command.zendesk_group_id)?,
        };
        let created = self.group_repo.insert(group).await?;
        Ok(created.into())
    }
}
