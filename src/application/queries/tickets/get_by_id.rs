use super::TicketQueryService;
use crate::{
    application::{
        dto::TicketDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::ticket::TicketId,
};

pub struct GetTicketQuery {
    pub id: i64,
}

impl TicketQueryService {
    pub async fn get_ticket(&self, query: GetTicketQuery) -> ApplicationResult<TicketDto> {
        let id = TicketId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("ticket not found"))
    }

    pub async fn count_tickets(&self) -> ApplicationResult<u64> {
        Ok(self.read_repo.count().await?)
    }
}
