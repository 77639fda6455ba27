// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            agents::AgentCommandService, boards::BoardCommandService,
            tickets::TicketCommandService,
        },
        ports::{ClockPort, SlugGeneratorPort},
        queries::{
            agents::AgentQueryService, boards::BoardQueryService, tickets::TicketQueryService,
        },
    },
    domain::{
        agent::{AgentGroupRepository, AgentRepository},
        board::{
            BoardReadRepository, BoardWriteRepository, HookedBoardWriteRepository,
            services::{BoardSlugService, SlugAssignmentHook},
        },
        ticket::{TicketReadRepository, TicketWriteRepository},
    },
};

pub struct ApplicationServices {
    pub board_commands: Arc<BoardCommandService>,
    pub board_queries: Arc<BoardQueryService>,
    pub ticket_commands: Arc<TicketCommandService>,
    pub ticket_queries: Arc<TicketQueryService>,
    pub agent_commands: Arc<AgentCommandService>,
    pub agent_queries: Arc<AgentQueryService>,
    slug_service: Arc<BoardSlugService>,
}

impl ApplicationServices {
    /// Wires the services. `board_write_repo` is the raw storage; the slug
    /// assignment hook is registered on top of it here so every board insert
    /// goes through it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        board_write_repo: Arc<dyn BoardWriteRepository>,
        board_read_repo: Arc<dyn BoardReadRepository>,
        ticket_write_repo: Arc<dyn TicketWriteRepository>,
        ticket_read_repo: Arc<dyn TicketReadRepository>,
        agent_repo: Arc<dyn AgentRepository>,
        group_repo: Arc<dyn AgentGroupRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slug_service = Arc::new(BoardSlugService::new(
            Arc::clone(&board_read_repo),
            Arc::clone(&slugger),
        ));

        let hooked_board_writes: Arc<dyn BoardWriteRepository> = Arc::new(
            HookedBoardWriteRepository::new(board_write_repo)
                .with_hook(Arc::new(SlugAssignmentHook::new(Arc::clone(&slug_service)))),
        );

        let board_commands = Arc::new(BoardCommandService::new(
            hooked_board_writes,
            Arc::clone(&board_read_repo),
            Arc::clone(&clock),
        ));
        let board_queries = Arc::new(BoardQueryService::new(
            Arc::clone(&board_read_repo),
            Arc::clone(&ticket_read_repo),
        ));

        let ticket_commands = Arc::new(TicketCommandService::new(
            ticket_write_repo,
            Arc::clone(&ticket_read_repo),
            Arc::clone(&board_read_repo),
            Arc::clone(&agent_repo),
            Arc::clone(&group_repo),
            Arc::clone(&clock),
        ));
        let ticket_queries = Arc::new(TicketQueryService::new(Arc::clone(&ticket_read_repo)));

        let agent_commands = Arc::new(AgentCommandService::new(
            Arc::clone(&agent_repo),
            Arc::clone(&group_repo),
        ));
        let agent_queries = Arc::new(AgentQueryService::new(agent_repo, group_repo));

        Self {
            board_commands,
            board_queries,
            ticket_commands,
            ticket_queries,
            agent_commands,
            agent_queries,
            slug_service,
        }
    }

    /// Slug a board named `name` would get if created now without an
    /// explicit slug. Used to prefill the new-board form.
    pub fn preview_slug(&self, name: &str) -> String {
        self.slug_service.assign_slug(name, None)
    }
}
