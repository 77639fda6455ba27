use super::TicketQueryService;
use crate::{
    application::{dto::TicketDto, error::ApplicationResult},
    domain::board::BoardId,
};

pub struct ListBoardTicketsQuery {
    pub board_id: i64,
}

impl TicketQueryService {
    pub async fn list_board_tickets(
        &self,
        query: ListBoardTicketsQuery,
    ) -> ApplicationResult<Vec<TicketDto>> {
        let board = BoardId::new(query.board_id)?;
        let tickets = self.read_repo.list_by_board(board).await?;
        Ok(tickets.into_iter().map(Into::into).collect())
    }
}
