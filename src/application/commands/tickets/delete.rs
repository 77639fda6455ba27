use super::TicketCommandService;
use crate::{
    application::{
        dto::TicketDeletedDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::ticket::TicketId,
};

pub struct DeleteTicketCommand {
    pub id: i64,
}

impl TicketCommandService {
    pub async fn delete_ticket(&self, command: DeleteTicketCommand) -> ApplicationResult<TicketDeletedDto> {
        let id = TicketId::new(command.id)?;
        let ticket = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("ticket not found"))?;

        let board = self
            .board_repo
            .find_by_id(ticket.fields.board)
            .await?
            .ok_or_else(|| ApplicationError::not_found("board not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(ticket_id = id.0, board = %board.slug, "ticket deleted");

        Ok(TicketDeletedDto {
            ticket_id: id.into(),
            board_slug: board.slug.into_inner(),
        })
    }
}
