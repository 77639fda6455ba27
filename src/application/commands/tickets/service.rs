// src/application/commands/tickets/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        agent::{AgentGroupRepository, AgentRepository},
        board::BoardReadRepository,
        ticket::{TicketReadRepository, TicketWriteRepository},
    },
};

pub struct TicketCommandService {
    pub(super) write_repo: Arc<dyn TicketWriteRepository>,
    pub(super) read_repo: Arc<dyn TicketReadRepository>,
    pub(super) board_repo: Arc<dyn BoardReadRepository>,
    pub(super) agent_repo: Arc<dyn AgentRepository>,
    pub(super) group_repo: Arc<dyn AgentGroupRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TicketCommandService {
    pub fn new(
        write_repo: Arc<dyn TicketWriteRepository>,
        read_repo: Arc<dyn TicketReadRepository>,
        board_repo: Arc<dyn BoardReadRepository>,
        agent_repo: Arc<dyn AgentRepository>,
        group_repo: Arc<dyn AgentGroupRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            board_repo,
            agent_repo,
            group_repo,
            clock,
        }
    }
}
