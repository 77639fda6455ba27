use std::sync::Arc;

use crate::domain::{board::BoardReadRepository, ticket::TicketReadRepository};

pub struct BoardQueryService {
    pub(super) read_repo: Arc<dyn BoardReadRepository>,
    pub(super) ticket_repo: Arc<dyn TicketReadRepository>,
}

impl BoardQueryService {
    pub fn new(
        read_repo: Arc<dyn BoardReadRepository>,
        ticket_repo: Arc<dyn TicketReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            ticket_repo,
        }
    }
}
