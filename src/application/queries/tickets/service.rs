use std::sync::Arc;

use crate::domain::ticket::TicketReadRepository;

pub struct TicketQueryService {
    pub(super) read_repo: Arc<dyn TicketReadRepository>,
}

impl TicketQueryService {
    pub fn new(read_repo: Arc<dyn TicketReadRepository>) -> Self {
        Self { read_repo }
    }
}
