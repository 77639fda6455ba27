use std::sync::Arc;

use crate::domain::agent::{AgentGroupRepository, AgentRepository};

pub struct AgentCommandService {
    pub(super) agent_repo: Arc<dyn AgentRepository>,
    pub(super) group_repo: Arc<dyn AgentGroupRepository>,
}

impl AgentCommandService {
    pub fn new(
        agent_repo: Arc<dyn AgentRepository>,
        group_repo: Arc<dyn AgentGroupRepository>,
    ) -> Self {
        Self {
            agent_repo,
            group_repo,
        }
    }
}
