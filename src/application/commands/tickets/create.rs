use super::{TicketCommandService, TicketInput};
use crate::{
    application::{dto::TicketDto, error::ApplicationResult},
    domain::ticket::NewTicket,
};

pub struct CreateTicketCommand {
    pub input: TicketInput,
}

impl TicketCommandService {
    pub async fn create_ticket(&self, command: CreateTicketCommand) -> ApplicationResult<TicketDto> {
        let fields = self.validate_input(command.input).await?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewTicket {
                fields,
                created_at: now,
                updated_at: now,
            })
            .await?;
        tracing::info!(ticket_id = created.id.0, board_id = created.fields.board.0, "ticket created");
        Ok(created.into())
    }
}
